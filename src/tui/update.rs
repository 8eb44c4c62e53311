//! Pure state transitions: (MenuState, Action) → Transition.
//!
//! This is the core logic of the program. Fully testable without a
//! terminal. Each menu depth defines which actions it accepts; unhandled
//! actions return the current state unchanged (no-op). Cursor moves clamp
//! at the bounds, they never wrap.

use super::state::{
    Action, COPY_CONFIRMATION, Effect, MenuState, SUB_OPTION_COUNT, TopOption, Transition,
};

/// Pure state transition function.
///
/// Given the current state and an action, produces the next transition.
/// The effects boundary interprets the result. Quit is accepted at every
/// depth and carries no further state.
pub fn update(state: MenuState, action: &Action) -> Transition {
    match state {
        MenuState::Top { cursor } => update_top(cursor, action),
        MenuState::Submenu { option, cursor } => update_submenu(option, cursor, action),
        MenuState::Detail {
            option,
            sub_cursor,
            copy_status,
        } => update_detail(option, sub_cursor, copy_status, action),
    }
}

/// Fold a clipboard outcome back into the detail view.
///
/// The copy effect runs outside pure code; this rebuilds the detail state
/// once its outcome is known. Success shows the confirmation status,
/// failure leaves the status empty (the write is best-effort and never
/// surfaces an error).
pub fn apply_copy_outcome(option: TopOption, sub_cursor: usize, copied: bool) -> MenuState {
    MenuState::Detail {
        option,
        sub_cursor,
        copy_status: if copied {
            COPY_CONFIRMATION.to_string()
        } else {
            String::new()
        },
    }
}

// ============================================================================
// PER-DEPTH HANDLERS
// ============================================================================

/// Top menu: move between the two options, Confirm enters the submenu
/// of the option under the cursor. Cancel has nothing to back out to.
fn update_top(cursor: usize, action: &Action) -> Transition {
    match action {
        Action::MoveUp => Transition::State(MenuState::Top {
            cursor: cursor.saturating_sub(1),
        }),
        Action::MoveDown => Transition::State(MenuState::Top {
            cursor: (cursor + 1).min(TopOption::ALL.len() - 1),
        }),
        Action::Confirm => Transition::State(MenuState::submenu(TopOption::at(cursor))),
        Action::Cancel => Transition::State(MenuState::Top { cursor }),
        Action::Quit => Transition::Quit,
    }
}

/// Submenu: move between the entries, Confirm opens the detail view for
/// the entry under the cursor, Cancel returns to the top menu with the
/// cursor back on the carried option.
fn update_submenu(option: TopOption, cursor: usize, action: &Action) -> Transition {
    match action {
        Action::MoveUp => Transition::State(MenuState::Submenu {
            option,
            cursor: cursor.saturating_sub(1),
        }),
        Action::MoveDown => Transition::State(MenuState::Submenu {
            option,
            cursor: (cursor + 1).min(SUB_OPTION_COUNT - 1),
        }),
        Action::Confirm => Transition::State(MenuState::detail(option, cursor)),
        Action::Cancel => Transition::State(MenuState::Top {
            cursor: option.index(),
        }),
        Action::Quit => Transition::Quit,
    }
}

/// Detail view: Confirm requests the clipboard effect, Cancel returns to
/// the submenu at the carried cursor. Cursor moves are no-ops here.
fn update_detail(
    option: TopOption,
    sub_cursor: usize,
    copy_status: String,
    action: &Action,
) -> Transition {
    match action {
        Action::Confirm => Transition::Effect(Effect::CopyDetailText { option, sub_cursor }),
        Action::Cancel => Transition::State(MenuState::Submenu {
            option,
            cursor: sub_cursor,
        }),
        Action::Quit => Transition::Quit,
        _ => Transition::State(MenuState::Detail {
            option,
            sub_cursor,
            copy_status,
        }),
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // -- Top menu --

    #[test]
    fn top_move_down_reaches_second_option() {
        let result = update(MenuState::new(), &Action::MoveDown);
        assert_eq!(result, Transition::State(MenuState::Top { cursor: 1 }));
        // Moving the cursor selects nothing yet: the state is still Top.
        assert_eq!(TopOption::at(1), TopOption::Craft);
    }

    #[test]
    fn top_move_up_at_first_option_stays() {
        let result = update(MenuState::new(), &Action::MoveUp);
        assert_eq!(result, Transition::State(MenuState::Top { cursor: 0 }));
    }

    #[test]
    fn top_move_down_clamps_at_last_option() {
        let result = update(MenuState::Top { cursor: 1 }, &Action::MoveDown);
        assert_eq!(result, Transition::State(MenuState::Top { cursor: 1 }));
    }

    #[test]
    fn top_confirm_enters_submenu_of_cursor_option() {
        let result = update(MenuState::Top { cursor: 1 }, &Action::Confirm);
        assert_eq!(
            result,
            Transition::State(MenuState::Submenu {
                option: TopOption::Craft,
                cursor: 0,
            })
        );
    }

    #[test]
    fn top_cancel_is_noop() {
        let result = update(MenuState::Top { cursor: 1 }, &Action::Cancel);
        assert_eq!(result, Transition::State(MenuState::Top { cursor: 1 }));
    }

    // -- Submenu --

    #[test]
    fn submenu_cursor_down_advances() {
        let result = update(MenuState::submenu(TopOption::Ocor), &Action::MoveDown);
        match result {
            Transition::State(MenuState::Submenu { cursor, .. }) => assert_eq!(cursor, 1),
            other => panic!("Expected Submenu, got {:?}", other),
        }
    }

    #[test]
    fn submenu_cursor_up_at_top_stays() {
        let result = update(MenuState::submenu(TopOption::Ocor), &Action::MoveUp);
        match result {
            Transition::State(MenuState::Submenu { cursor, .. }) => assert_eq!(cursor, 0),
            other => panic!("Expected Submenu, got {:?}", other),
        }
    }

    #[test]
    fn submenu_cursor_down_clamps_at_last_entry() {
        let state = MenuState::Submenu {
            option: TopOption::Ocor,
            cursor: SUB_OPTION_COUNT - 1,
        };
        let result = update(state, &Action::MoveDown);
        match result {
            Transition::State(MenuState::Submenu { cursor, .. }) => {
                assert_eq!(cursor, SUB_OPTION_COUNT - 1)
            }
            other => panic!("Expected Submenu, got {:?}", other),
        }
    }

    #[test]
    fn submenu_confirm_opens_detail_with_empty_status() {
        let state = MenuState::Submenu {
            option: TopOption::Ocor,
            cursor: 2,
        };
        let result = update(state, &Action::Confirm);
        assert_eq!(
            result,
            Transition::State(MenuState::Detail {
                option: TopOption::Ocor,
                sub_cursor: 2,
                copy_status: String::new(),
            })
        );
    }

    #[test]
    fn submenu_cancel_returns_to_top_on_same_option() {
        let state = MenuState::Submenu {
            option: TopOption::Craft,
            cursor: 3,
        };
        let result = update(state, &Action::Cancel);
        // Leaving the submenu drops the selection; the top cursor lands
        // back on the option that was selected.
        assert_eq!(result, Transition::State(MenuState::Top { cursor: 1 }));
    }

    // -- Detail --

    #[test]
    fn detail_confirm_requests_copy_effect() {
        let state = MenuState::detail(TopOption::Craft, 4);
        let result = update(state, &Action::Confirm);
        assert_eq!(
            result,
            Transition::Effect(Effect::CopyDetailText {
                option: TopOption::Craft,
                sub_cursor: 4,
            })
        );
    }

    #[test]
    fn detail_cancel_returns_to_submenu_at_same_entry() {
        let state = MenuState::Detail {
            option: TopOption::Ocor,
            sub_cursor: 2,
            copy_status: COPY_CONFIRMATION.to_string(),
        };
        let result = update(state, &Action::Cancel);
        // Status does not survive the trip back out.
        assert_eq!(
            result,
            Transition::State(MenuState::Submenu {
                option: TopOption::Ocor,
                cursor: 2,
            })
        );
    }

    #[test]
    fn detail_cursor_moves_are_noops() {
        let state = MenuState::detail(TopOption::Ocor, 1);
        for action in [Action::MoveUp, Action::MoveDown] {
            let result = update(state.clone(), &action);
            assert_eq!(result, Transition::State(state.clone()));
        }
    }

    // -- Copy outcome fold --

    #[test]
    fn copy_success_sets_confirmation_status() {
        let state = apply_copy_outcome(TopOption::Ocor, 2, true);
        assert_eq!(
            state,
            MenuState::Detail {
                option: TopOption::Ocor,
                sub_cursor: 2,
                copy_status: COPY_CONFIRMATION.to_string(),
            }
        );
    }

    #[test]
    fn copy_failure_leaves_status_empty() {
        let state = apply_copy_outcome(TopOption::Craft, 0, false);
        assert_eq!(state, MenuState::detail(TopOption::Craft, 0));
    }

    // -- Whole-walk properties --

    #[test]
    fn quit_is_accepted_at_every_depth() {
        let states = [
            MenuState::new(),
            MenuState::submenu(TopOption::Ocor),
            MenuState::detail(TopOption::Craft, 3),
        ];
        for state in states {
            assert_eq!(update(state, &Action::Quit), Transition::Quit);
        }
    }

    #[test]
    fn cursors_stay_in_bounds_under_any_move_sequence() {
        let moves = [
            Action::MoveDown,
            Action::MoveDown,
            Action::MoveDown,
            Action::MoveUp,
            Action::MoveDown,
            Action::MoveUp,
            Action::MoveUp,
            Action::MoveUp,
        ];

        let mut state = MenuState::new();
        for action in moves.iter().cycle().take(40) {
            state = match update(state, action) {
                Transition::State(next) => next,
                other => panic!("Expected State, got {:?}", other),
            };
            match &state {
                MenuState::Top { cursor } => assert!(*cursor < TopOption::ALL.len()),
                other => panic!("Moves alone left the top menu: {:?}", other),
            }
        }

        let mut state = MenuState::submenu(TopOption::Craft);
        for action in moves.iter().cycle().take(40) {
            state = match update(state, action) {
                Transition::State(next) => next,
                other => panic!("Expected State, got {:?}", other),
            };
            match &state {
                MenuState::Submenu { cursor, .. } => assert!(*cursor < SUB_OPTION_COUNT),
                other => panic!("Moves alone left the submenu: {:?}", other),
            }
        }
    }

    #[test]
    fn phases_advance_and_retreat_one_step_at_a_time() {
        let submenu = match update(MenuState::new(), &Action::Confirm) {
            Transition::State(s @ MenuState::Submenu { .. }) => s,
            other => panic!("Expected Submenu, got {:?}", other),
        };
        let detail = match update(submenu.clone(), &Action::Confirm) {
            Transition::State(s @ MenuState::Detail { .. }) => s,
            other => panic!("Expected Detail, got {:?}", other),
        };
        let back_out = match update(detail, &Action::Cancel) {
            Transition::State(s) => s,
            other => panic!("Expected State, got {:?}", other),
        };
        assert_eq!(back_out, submenu);
        let back_home = match update(back_out, &Action::Cancel) {
            Transition::State(s) => s,
            other => panic!("Expected State, got {:?}", other),
        };
        assert_eq!(back_home, MenuState::new());
    }

    #[test]
    fn reselecting_other_option_updates_submenu_identity() {
        let craft_sub = match update(MenuState::Top { cursor: 1 }, &Action::Confirm) {
            Transition::State(s) => s,
            other => panic!("Expected State, got {:?}", other),
        };
        assert_eq!(craft_sub, MenuState::submenu(TopOption::Craft));

        let top = match update(craft_sub, &Action::Cancel) {
            Transition::State(s) => s,
            other => panic!("Expected State, got {:?}", other),
        };
        let top = match update(top, &Action::MoveUp) {
            Transition::State(s) => s,
            other => panic!("Expected State, got {:?}", other),
        };
        let ocor_sub = match update(top, &Action::Confirm) {
            Transition::State(s) => s,
            other => panic!("Expected State, got {:?}", other),
        };
        assert_eq!(ocor_sub, MenuState::submenu(TopOption::Ocor));
    }

    #[test]
    fn update_is_deterministic() {
        let state = MenuState::Submenu {
            option: TopOption::Craft,
            cursor: 3,
        };
        assert_eq!(
            update(state.clone(), &Action::Confirm),
            update(state, &Action::Confirm)
        );
    }
}
