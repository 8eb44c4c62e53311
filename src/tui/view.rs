//! Pure rendering: map MenuState to the fixed-width menu frame.
//!
//! `screen_lines` is the whole rendering contract: state in, styled lines
//! out, byte-identical across calls with identical input. `render` only
//! hands those lines to the terminal frame. The frame geometry is constant
//! across all menu depths; content wider than the interior renders with
//! zero padding rather than widening the box.

use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::state::{DETAIL_TEXT, MenuState, SUB_OPTION_COUNT, TopOption};
use super::theme;

/// Inner width of the menu frame, in columns.
pub const BOX_WIDTH: usize = 25;

/// Marker prefixed to the line under the cursor. Never styled itself.
const MARKER: &str = "> ";

// ============================================================================
// DISPATCH
// ============================================================================

/// Draw the current state into the terminal frame.
///
/// Every processed event repaints the full frame; there is no diffing at
/// this level.
pub fn render(state: &MenuState, frame: &mut Frame) {
    let paragraph = Paragraph::new(screen_lines(state));
    frame.render_widget(paragraph, frame.area());
}

/// Build the complete rendered block for a state, framed and centered.
pub fn screen_lines(state: &MenuState) -> Vec<Line<'static>> {
    let content = match state {
        MenuState::Top { cursor } => top_lines(*cursor),
        MenuState::Submenu { option, cursor } => submenu_lines(*option, *cursor),
        MenuState::Detail { copy_status, .. } => detail_lines(copy_status),
    };
    boxed(content)
}

// ============================================================================
// PER-DEPTH CONTENT
// ============================================================================

/// Top menu: one line per option in fixed order. The cursor line gets the
/// marker and the option's identity color; the other line stays unstyled.
fn top_lines(cursor: usize) -> Vec<Line<'static>> {
    TopOption::ALL
        .iter()
        .map(|&option| {
            if option.index() == cursor {
                marked_line(option.label(), theme::option_style(option))
            } else {
                plain_line(option.label())
            }
        })
        .collect()
}

/// Submenu: numbered entries under the selected option's label. Every
/// line is styled; only the cursor line differs.
fn submenu_lines(option: TopOption, cursor: usize) -> Vec<Line<'static>> {
    (1..=SUB_OPTION_COUNT)
        .map(|n| {
            let label = format!("{} {}", option.label(), n);
            if n - 1 == cursor {
                marked_line(&label, theme::STYLE_SUBMENU_CURSOR)
            } else {
                styled_line(&label, theme::STYLE_SUBMENU)
            }
        })
        .collect()
}

/// Detail view: the placeholder text and the bracketed copy status,
/// both centered and unstyled. An empty status renders as `[ ]`.
fn detail_lines(copy_status: &str) -> Vec<Line<'static>> {
    let status = if copy_status.is_empty() {
        "[ ]".to_string()
    } else {
        format!("[ {} ]", copy_status)
    };

    let mut lines = centered_lines(DETAIL_TEXT);
    lines.extend(centered_lines(&status));
    lines
}

// ============================================================================
// FRAME AND CENTERING
// ============================================================================

/// Wrap content lines in the fixed-width frame: top border, one spacing
/// line, the content, one spacing line, bottom border.
fn boxed(content: Vec<Line<'static>>) -> Vec<Line<'static>> {
    let horizontal = "─".repeat(BOX_WIDTH);
    let spacing = format!("│{}│", " ".repeat(BOX_WIDTH));

    let mut lines = Vec::with_capacity(content.len() + 4);
    lines.push(Line::from(format!("╭{}╮", horizontal)));
    lines.push(Line::from(spacing.clone()));
    lines.extend(content);
    lines.push(Line::from(spacing));
    lines.push(Line::from(format!("╰{}╯", horizontal)));
    lines
}

/// Left padding that centers `text` within the frame interior.
///
/// Counts characters, not bytes; odd slack truncates toward the left;
/// text wider than the interior saturates to zero padding.
fn center_pad(text: &str) -> String {
    " ".repeat(BOX_WIDTH.saturating_sub(text.chars().count()) / 2)
}

/// Center plain text. Embedded line breaks are centered independently,
/// and surrounding whitespace is stripped before padding.
fn centered_lines(text: &str) -> Vec<Line<'static>> {
    text.split('\n')
        .map(|line| {
            let trimmed = line.trim();
            Line::from(format!("{}{}", center_pad(trimmed), trimmed))
        })
        .collect()
}

/// Cursor line: the unstyled marker plus a styled label, centered as one
/// unit (the marker counts toward the padding computation).
fn marked_line(label: &str, style: Style) -> Line<'static> {
    let visible = format!("{}{}", MARKER, label);
    Line::from(vec![
        Span::raw(center_pad(&visible)),
        Span::raw(MARKER),
        Span::styled(label.to_string(), style),
    ])
}

/// Non-cursor line carrying a resting style.
fn styled_line(label: &str, style: Style) -> Line<'static> {
    Line::from(vec![
        Span::raw(center_pad(label)),
        Span::styled(label.to_string(), style),
    ])
}

/// Non-cursor line with no styling at all.
fn plain_line(label: &str) -> Line<'static> {
    Line::from(format!("{}{}", center_pad(label), label))
}

// ============================================================================
// TESTS
// ============================================================================
