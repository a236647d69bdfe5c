//! Action dispatch: turns `UpdateAction`s into spawned work

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::handler::UpdateAction;
use crate::message::Message;
use crate::timers::CelebrationTimers;

/// Execute an action returned by `handler::update`.
///
/// Returns a follow-up message that must be processed before anything else
/// on the channel, so the state owns the timers before their first message
/// can arrive.
pub fn handle_action(action: UpdateAction, msg_tx: &mpsc::Sender<Message>) -> Option<Message> {
    match action {
        UpdateAction::StartCelebration { celebration_id } => {
            let timers = CelebrationTimers::spawn(celebration_id, msg_tx.clone());
            Some(Message::CelebrationStarted {
                celebration_id,
                timers: Arc::new(timers),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_start_celebration_hands_back_timers() {
        let (tx, _rx) = mpsc::channel(4);
        let msg = handle_action(UpdateAction::StartCelebration { celebration_id: 9 }, &tx);

        match msg {
            Some(Message::CelebrationStarted {
                celebration_id,
                timers,
            }) => {
                assert_eq!(celebration_id, 9);
                assert_eq!(timers.celebration_id(), 9);
            }
            other => panic!("expected CelebrationStarted, got {:?}", other),
        }
    }
}
