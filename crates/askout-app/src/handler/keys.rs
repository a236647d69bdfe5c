//! Key event handlers for each card view

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, Flow};

/// Convert key events to messages based on the current view
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Quit works everywhere, dialog included
    match key {
        InputKey::CharCtrl('c') | InputKey::Char('q') => return Some(Message::Quit),
        _ => {}
    }

    match state.flow {
        Flow::Initial {
            confirm_dialog: true,
        } => handle_key_confirm_dialog(key),
        Flow::Initial {
            confirm_dialog: false,
        } => handle_key_initial(key),
        Flow::DateOptions => handle_key_date_options(key),
        Flow::Confirmed { .. } => handle_key_confirmed(key),
        Flow::Rejected => handle_key_rejected(key),
    }
    .or_else(|| handle_key_focus(key))
}

/// Opening question
fn handle_key_initial(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('y' | 'Y') => Some(Message::AnswerYes),
        InputKey::Char('n' | 'N') => Some(Message::AnswerNo),
        _ => None,
    }
}

/// "Are you sure?" dialog. Modal: the Yes/No keys of the card underneath
/// are not reachable.
fn handle_key_confirm_dialog(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('m' | 'M') | InputKey::Esc => Some(Message::CancelRejection),
        InputKey::Char('y' | 'Y') => Some(Message::ConfirmRejection),
        _ => None,
    }
}

fn handle_key_date_options(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char(c @ '1'..='9') => {
            let index = c.to_digit(10).map(|d| d as usize - 1)?;
            // Out-of-range digits are forwarded so the handler reports them
            Some(Message::PickDate(index))
        }
        _ => None,
    }
}

fn handle_key_confirmed(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('r' | 'R') => Some(Message::StartOver),
        _ => None,
    }
}

fn handle_key_rejected(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('a' | 'A') => Some(Message::AskAgain),
        _ => None,
    }
}

/// Focus movement and activation, shared by every view
fn handle_key_focus(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Right | InputKey::Down | InputKey::Tab => Some(Message::FocusNext),
        InputKey::Left | InputKey::Up | InputKey::BackTab => Some(Message::FocusPrevious),
        InputKey::Enter | InputKey::Char(' ') => Some(Message::ActivateFocused),
        _ => None,
    }
}
