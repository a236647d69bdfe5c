//! Message processing through the TEA update loop

use std::collections::VecDeque;

use tokio::sync::mpsc;

use crate::handler;
use crate::message::Message;
use crate::state::AppState;

use super::actions::handle_action;

/// Process a message and everything it leads to.
///
/// Follow-up messages from `update` and from dispatched actions are handled
/// in order before returning.
pub fn process_message(state: &mut AppState, message: Message, msg_tx: &mpsc::Sender<Message>) {
    let mut queue = VecDeque::from([message]);

    while let Some(msg) = queue.pop_front() {
        let result = handler::update(state, msg);

        if let Some(action) = result.action {
            if let Some(follow_up) = handle_action(action, msg_tx) {
                queue.push_back(follow_up);
            }
        }

        if let Some(next) = result.message {
            queue.push_back(next);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use askout_core::FlowStep;

    #[tokio::test(start_paused = true)]
    async fn test_pick_attaches_timers_in_same_pass() {
        let (tx, _rx) = mpsc::channel(16);
        let mut state = AppState::new();

        process_message(&mut state, Message::AnswerYes, &tx);
        process_message(&mut state, Message::PickDate(0), &tx);

        assert_eq!(state.step(), FlowStep::Confirmed);
        assert!(state.has_celebration_timers());
    }

    #[tokio::test]
    async fn test_key_follow_up_is_processed() {
        let (tx, _rx) = mpsc::channel(16);
        let mut state = AppState::new();

        process_message(
            &mut state,
            Message::Key(crate::input_key::InputKey::Char('y')),
            &tx,
        );
        assert_eq!(state.step(), FlowStep::DateOptions);
    }
}
