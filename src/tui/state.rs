//! Menu state algebra: pure types, zero effects.
//!
//! These types define the entire menu state space. Illegal states are
//! unrepresentable: a selected option exists only once its submenu is
//! entered, and a copy status only inside the detail view. The transition
//! function and rendering layer both program against these types.
//!
//! Design principle: each MenuState variant carries only the fields that
//! are meaningful at that menu depth. There is no shared mutable model
//! behind the variants; the whole application state is one MenuState.

// ============================================================================
// CONTENT
// ============================================================================

/// Number of entries in each submenu. The cursor clamp and the rendered
/// label count both derive from this one constant.
pub const SUB_OPTION_COUNT: usize = 5;

/// Placeholder text shown in the detail view. Also the exact string
/// written to the clipboard on confirm.
pub const DETAIL_TEXT: &str = "Lorem ipsum dolor sit";

/// Status shown in the detail view after a successful clipboard write.
pub const COPY_CONFIRMATION: &str = "Text copied to clipboard";

// ============================================================================
// TOP-LEVEL OPTIONS
// ============================================================================

/// The two top-level menu identities, in fixed display order.
///
/// Each identity keeps its own highlight color regardless of cursor
/// position (see the theme module), so the variant itself is part of
/// the rendering contract, not just a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopOption {
    Ocor,
    Craft,
}

impl TopOption {
    /// All options in display order. Top-menu cursor values index this.
    pub const ALL: [TopOption; 2] = [TopOption::Ocor, TopOption::Craft];

    /// Display label, also the prefix of this option's submenu entries.
    pub fn label(self) -> &'static str {
        match self {
            TopOption::Ocor => "OCOR",
            TopOption::Craft => "CRAFT",
        }
    }

    /// Position in display order.
    pub fn index(self) -> usize {
        match self {
            TopOption::Ocor => 0,
            TopOption::Craft => 1,
        }
    }

    /// Option at a top-menu cursor position. Out-of-range input clamps
    /// to the last option rather than panicking.
    pub fn at(index: usize) -> TopOption {
        TopOption::ALL[index.min(TopOption::ALL.len() - 1)]
    }
}

// ============================================================================
// MENU STATE
// ============================================================================

/// The current menu position.
///
/// Each variant is a state in the navigation state machine. The top-menu
/// cursor is not stored past the top menu: it is immutable at deeper
/// levels, and backing out of a submenu restores it from the carried
/// option's index, which is exactly the value it held on entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuState {
    /// Top-level menu. `cursor` indexes [`TopOption::ALL`].
    Top {
        cursor: usize,
    },

    /// Submenu of one top-level option. `cursor` is in `0..SUB_OPTION_COUNT`.
    Submenu {
        option: TopOption,
        cursor: usize,
    },

    /// Detail view of one submenu entry. `sub_cursor` is carried so that
    /// backing out restores the submenu position unchanged. `copy_status`
    /// stays empty until a clipboard write succeeds.
    Detail {
        option: TopOption,
        sub_cursor: usize,
        copy_status: String,
    },
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Semantic user action, decoupled from raw key events.
///
/// The effects layer maps key presses to Actions.
/// The transition function decides what each Action means per state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Move cursor up in the active menu.
    MoveUp,
    /// Move cursor down in the active menu.
    MoveDown,
    /// Drill one level deeper; in the detail view, copy to clipboard.
    Confirm,
    /// Back out one level.
    Cancel,
    /// Quit the application.
    Quit,
}

// ============================================================================
// TRANSITIONS
// ============================================================================

/// Result of a pure state transition.
///
/// The update function returns this. The effects boundary inspects it
/// to decide what to render and which side effects to execute.
/// Follows the Elm/TEA pattern: pure code describes WHAT should happen,
/// effectful code decides HOW.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Continue with this state (same or different).
    State(MenuState),
    /// Quit the application.
    Quit,
    /// Execute a side effect. The effects layer runs it and folds the
    /// outcome back into the next state.
    Effect(Effect),
}

/// Side effect requested by a pure transition.
///
/// Pure code never executes these, it only describes them.
/// The effects boundary interprets them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Write [`DETAIL_TEXT`] to the system clipboard. Carries the detail
    /// view's fields so the post-copy state can be rebuilt once the
    /// outcome is known.
    CopyDetailText {
        option: TopOption,
        sub_cursor: usize,
    },
}

// ============================================================================
// CONSTRUCTORS
// ============================================================================

impl MenuState {
    /// Initial state: top menu with the cursor on the first option.
    pub fn new() -> Self {
        MenuState::Top { cursor: 0 }
    }

    /// Enter the submenu of `option` with the cursor at the top.
    pub fn submenu(option: TopOption) -> Self {
        MenuState::Submenu { option, cursor: 0 }
    }

    /// Enter the detail view of a submenu entry, with no copy status yet.
    pub fn detail(option: TopOption, sub_cursor: usize) -> Self {
        MenuState::Detail {
            option,
            sub_cursor,
            copy_status: String::new(),
        }
    }
}

/// Default state is the freshly started top menu.
impl Default for MenuState {
    fn default() -> Self {
        MenuState::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================
