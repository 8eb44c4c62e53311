//! template-menu: two-level terminal menu with clipboard copy.

pub mod clipboard;
pub mod tui;
