//! Interactive terminal menu.
//!
//! Organized along FP/Unix boundaries:
//! - `state`: pure data types (MenuState, Action, Transition)
//! - `update`: pure transitions
//! - `view`: pure rendering
//! - `theme`: style constants
//! - `run`: effects boundary (terminal, clipboard, signals)

pub mod run;
pub mod state;
pub mod theme;
pub mod update;
pub mod view;

pub use run::run;
