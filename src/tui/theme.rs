//! Color semantics and style constants.
//!
//! Centralized theme definitions for the menu's highlight system.
//! Pure data, consumed by the rendering layer.
//!
//! Color semantics:
//! - Blue / Red: fixed identity colors of the two top-level options,
//!   shown on the cursor line regardless of which line that is
//! - Green: submenu entries at rest
//! - Yellow: the submenu entry under the cursor
//!
//! The asymmetry is deliberate: the top menu highlights by option
//! identity, the submenu highlights by cursor position.

use ratatui::style::{Color, Style};

use super::state::TopOption;

// ============================================================================
// HIGHLIGHT STYLES
// ============================================================================

/// OCOR's identity color, blue.
pub const STYLE_OCOR: Style = Style::new().fg(Color::Blue);

/// CRAFT's identity color, red.
pub const STYLE_CRAFT: Style = Style::new().fg(Color::Red);

/// Submenu entry at rest, green.
pub const STYLE_SUBMENU: Style = Style::new().fg(Color::Green);

/// Submenu entry under the cursor, yellow.
pub const STYLE_SUBMENU_CURSOR: Style = Style::new().fg(Color::Yellow);

/// Identity highlight for a top-level option.
pub fn option_style(option: TopOption) -> Style {
    match option {
        TopOption::Ocor => STYLE_OCOR,
        TopOption::Craft => STYLE_CRAFT,
    }
}

// ============================================================================
// TESTS
// ============================================================================
