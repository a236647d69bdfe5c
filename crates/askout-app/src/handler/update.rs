//! Main update function - handles state transitions (TEA pattern)

use askout_core::prelude::*;
use askout_core::DateOption;

use crate::message::Message;
use crate::state::{AppState, Flow};

use super::{keys::handle_key, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            info!("Quit requested, tearing down");
            state.teardown();
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick(elapsed) => {
            state.tick(elapsed);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Flow Messages
        // ─────────────────────────────────────────────────────────
        Message::AnswerYes => {
            applied(state.answer_yes(), "answer yes", state);
            UpdateResult::none()
        }

        Message::AnswerNo => {
            applied(state.answer_no(), "answer no", state);
            UpdateResult::none()
        }

        Message::CancelRejection => {
            applied(state.cancel_rejection(), "cancel rejection", state);
            UpdateResult::none()
        }

        Message::ConfirmRejection => {
            applied(state.confirm_rejection(), "confirm rejection", state);
            UpdateResult::none()
        }

        Message::PickDate(index) => {
            if !picking(state) {
                return UpdateResult::none();
            }
            pick_date(state, DateOption::by_index(index))
        }

        Message::PickDateByLabel(label) => {
            if !picking(state) {
                return UpdateResult::none();
            }
            pick_date(state, DateOption::by_label(&label))
        }

        Message::AskAgain => {
            applied(state.ask_again(), "ask again", state);
            UpdateResult::none()
        }

        Message::StartOver => {
            applied(state.start_over(), "start over", state);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Focus Messages
        // ─────────────────────────────────────────────────────────
        Message::FocusNext => {
            state.focus_next();
            UpdateResult::none()
        }

        Message::FocusPrevious => {
            state.focus_previous();
            UpdateResult::none()
        }

        Message::ActivateFocused => match state.focused_button() {
            Some(button) => UpdateResult::message(button.action.message()),
            None => UpdateResult::none(),
        },

        // ─────────────────────────────────────────────────────────
        // Celebration Timer Messages
        // ─────────────────────────────────────────────────────────
        Message::CelebrationStarted {
            celebration_id,
            timers,
        } => {
            if !state.attach_celebration_timers(celebration_id, timers) {
                debug!("Discarded timers of stale celebration {}", celebration_id);
            }
            UpdateResult::none()
        }

        Message::ConfettiExpired { celebration_id } => {
            if state.expire_confetti(celebration_id) {
                debug!("Confetti off");
            } else {
                trace!("Ignored confetti expiry of celebration {}", celebration_id);
            }
            UpdateResult::none()
        }

        Message::BackgroundRandomized {
            celebration_id,
            hue,
        } => {
            if !state.randomize_background(celebration_id, hue) {
                trace!("Ignored background of celebration {}", celebration_id);
            }
            UpdateResult::none()
        }
    }
}

/// Log triggers that do not belong to the current state
fn applied(applied: bool, trigger: &str, state: &AppState) {
    if !applied {
        debug!("Ignored '{}' in step {}", trigger, state.step());
    }
}

/// Picks only belong to the date options step; elsewhere they are ignored
/// before the option is looked up, so an unknown option is not an error there
fn picking(state: &AppState) -> bool {
    let picking = state.flow == Flow::DateOptions;
    applied(picking, "pick date", state);
    picking
}

fn pick_date(state: &mut AppState, option: Result<&'static DateOption>) -> UpdateResult {
    let option = match option {
        Ok(option) => option,
        Err(e) => {
            error!("Cannot pick date: {}", e);
            state.record_error(&e);
            return UpdateResult::none();
        }
    };

    match state.confirm_date(option) {
        Some(celebration_id) => {
            info!("Date confirmed: {}", option.label);
            UpdateResult::action(UpdateAction::StartCelebration { celebration_id })
        }
        None => {
            debug!(
                "Ignored pick of '{}' in step {}",
                option.label,
                state.step()
            );
            UpdateResult::none()
        }
    }
}
