//! Effects boundary: event loop, terminal lifecycle, key mapping.
//!
//! This is the only module with side effects. It wires the pure layers
//! (state, update, view) to the real terminal via crossterm and ratatui,
//! executes the clipboard effect, and installs the interrupt listener.
//! Kept minimal; all intelligence lives in the pure layers.
//!
//! Concurrency: the event loop is the single thread touching MenuState.
//! One event is fully processed (transition + redraw) before the next is
//! read. The only other activity is the signal handler thread, which
//! prints a farewell and ends the process without ever returning here.

use std::io;
use std::process;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::clipboard;

use super::state::{Action, DETAIL_TEXT, Effect, MenuState, Transition};
use super::update::{apply_copy_outcome, update};
use super::view::render;

/// Printed by the interrupt listener on its way out.
const FAREWELL: &str = "Exiting program...";

// ============================================================================
// KEY MAPPING
// ============================================================================

/// Map a crossterm key event to a semantic Action.
///
/// The key set is closed: anything outside it returns None and the
/// event loop simply reads the next event.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    // In raw mode the interactive Ctrl+C arrives as a key event
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveDown),
        KeyCode::Enter => Some(Action::Confirm),
        KeyCode::Esc => Some(Action::Cancel),
        _ => None,
    }
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

/// Put the terminal into raw mode on the alternate screen.
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to normal mode.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

// ============================================================================
// INTERRUPT LISTENER
// ============================================================================

/// Install the listener for externally delivered interrupt and
/// termination signals.
///
/// The handler prints a farewell and ends the process on the spot: no
/// terminal restore, no state cleanup, no handoff back to the event
/// loop. Interactive Ctrl+C never reaches it while raw mode is active
/// (the combo arrives as a key event and quits through the loop), so
/// this covers signals sent from outside. Registration is best-effort;
/// the key path still quits if it fails.
fn install_interrupt_listener() {
    ctrlc::set_handler(|| {
        println!("{}", FAREWELL);
        process::exit(0);
    })
    .ok();
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// Run the menu until the user quits.
///
/// This is the main entry point. It installs the interrupt listener and
/// panic hook, sets up the terminal, and processes one key event at a
/// time. The normal quit path restores the terminal; the signal path
/// exits without coming back here.
pub fn run() -> io::Result<()> {
    install_interrupt_listener();
    install_panic_hook();
    let mut terminal = setup_terminal()?;
    let mut state = MenuState::new();

    loop {
        // Full repaint on every pass, no diffing at this level
        terminal.draw(|frame| render(&state, frame))?;

        let key = match event::read()? {
            Event::Key(key) => key,
            _ => continue, // mouse, resize, etc.
        };
        let Some(action) = map_key(key) else {
            continue;
        };

        match update(state, &action) {
            Transition::State(next) => state = next,
            Transition::Quit => break,
            Transition::Effect(effect) => state = handle_effect(effect),
        }
    }

    restore_terminal()?;
    Ok(())
}

// ============================================================================
// EFFECT HANDLING
// ============================================================================

/// Execute a side effect requested by a pure transition and fold its
/// outcome into the next state.
///
/// The clipboard write is fire-and-forget: no retry, no timeout, and a
/// failure surfaces only as the status line staying empty.
fn handle_effect(effect: Effect) -> MenuState {
    match effect {
        Effect::CopyDetailText { option, sub_cursor } => {
            let copied = clipboard::copy(DETAIL_TEXT).is_ok();
            apply_copy_outcome(option, sub_cursor, copied)
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
