//! Engine - shared orchestration state for TUI and headless runners
//!
//! The Engine owns the TEA state, the unified message channel and the event
//! broadcaster. Both runners feed it messages and read state (TUI) or events
//! (headless) back out.

use tokio::sync::{broadcast, mpsc};
use tracing::{info, trace};

use askout_core::{Background, FlowStep};

use crate::config::Settings;
use crate::engine_event::EngineEvent;
use crate::message::Message;
use crate::process;
use crate::signals;
use crate::state::AppState;

/// Capacity of the message and event channels
const CHANNEL_CAPACITY: usize = 256;

/// Lightweight snapshot of state for change detection.
///
/// Captured before message processing, compared after to detect
/// what changed and emit appropriate EngineEvents.
#[derive(Debug, Clone, PartialEq)]
struct StateSnapshot {
    step: FlowStep,
    selection: Option<&'static str>,
    dialog_visible: bool,
    background: Background,
    confetti_visible: bool,
    error_count: u64,
}

impl StateSnapshot {
    fn capture(state: &AppState) -> Self {
        Self {
            step: state.step(),
            selection: state.selection().map(|o| o.label),
            dialog_visible: state.confirm_dialog_visible(),
            background: state.background,
            confetti_visible: state.confetti_visible,
            error_count: state.error_count,
        }
    }
}

/// Orchestration engine for the card.
pub struct Engine {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// Clone this to give to input sources (signal handler, key reader, timers).
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    pub msg_rx: mpsc::Receiver<Message>,

    /// Event broadcaster for external consumers
    event_tx: broadcast::Sender<EngineEvent>,
}

impl Engine {
    /// Create an Engine with the given settings.
    ///
    /// Does not install the signal handler; call
    /// [`Engine::install_signal_handler`] from a runner.
    pub fn new(settings: Settings) -> Self {
        let state = AppState::with_settings(settings);
        let (msg_tx, msg_rx) = mpsc::channel::<Message>(CHANNEL_CAPACITY);
        let (event_tx, _) = broadcast::channel(CHANNEL_CAPACITY);

        Self {
            state,
            msg_tx,
            msg_rx,
            event_tx,
        }
    }

    /// Route SIGINT/SIGTERM into `Message::Quit`
    pub fn install_signal_handler(&self) {
        signals::spawn_signal_handler(self.msg_tx.clone());
    }

    /// Subscribe to engine events.
    ///
    /// If the subscriber falls behind, older events are dropped
    /// (`broadcast::error::RecvError::Lagged`).
    pub fn subscribe(&self) -> broadcast::Receiver<EngineEvent> {
        self.event_tx.subscribe()
    }

    /// Process a single message through the TEA update cycle and emit
    /// events for whatever changed.
    pub fn process_message(&mut self, msg: Message) {
        let pre = StateSnapshot::capture(&self.state);

        process::process_message(&mut self.state, msg, &self.msg_tx);

        let post = StateSnapshot::capture(&self.state);
        self.emit_events(&pre, &post);
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Get a clone of the message sender for spawning input sources.
    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    /// Check if the application should quit.
    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    /// Release timers and announce shutdown.
    pub fn shutdown(&mut self) {
        self.state.teardown();
        self.emit(EngineEvent::Shutdown);
        info!("Engine shut down");
    }

    /// Compare snapshots and broadcast one event per changed aspect.
    fn emit_events(&self, pre: &StateSnapshot, post: &StateSnapshot) {
        if pre.step != post.step {
            self.emit(EngineEvent::StepChanged {
                old_step: pre.step,
                new_step: post.step,
                selection: post.selection,
            });
        }

        if pre.dialog_visible != post.dialog_visible {
            self.emit(EngineEvent::ConfirmDialogToggled {
                visible: post.dialog_visible,
            });
        }

        if pre.background != post.background {
            self.emit(EngineEvent::BackgroundChanged {
                background: post.background,
            });
        }

        if pre.confetti_visible != post.confetti_visible {
            self.emit(EngineEvent::ConfettiChanged {
                visible: post.confetti_visible,
            });
        }

        if post.error_count > pre.error_count {
            if let Some(ref message) = self.state.last_error {
                self.emit(EngineEvent::Error {
                    message: message.clone(),
                });
            }
        }
    }

    /// send() only fails without subscribers, which is fine
    fn emit(&self, event: EngineEvent) {
        trace!("Engine event: {}", event.event_type());
        let _ = self.event_tx.send(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain_events(rx: &mut broadcast::Receiver<EngineEvent>) -> Vec<EngineEvent> {
        let mut events = Vec::new();
        while let Ok(event) = rx.try_recv() {
            events.push(event);
        }
        events
    }

    #[tokio::test]
    async fn test_no_emits_dialog_and_background() {
        let mut engine = Engine::new(Settings::default());
        let mut rx = engine.subscribe();

        engine.process_message(Message::AnswerNo);

        assert_eq!(
            drain_events(&mut rx),
            vec![
                EngineEvent::ConfirmDialogToggled { visible: true },
                EngineEvent::BackgroundChanged {
                    background: Background::Alert
                },
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_pick_emits_step_and_confetti() {
        let mut engine = Engine::new(Settings::default());
        engine.process_message(Message::AnswerYes);
        let mut rx = engine.subscribe();

        engine.process_message(Message::PickDate(1));

        assert_eq!(
            drain_events(&mut rx),
            vec![
                EngineEvent::StepChanged {
                    old_step: FlowStep::DateOptions,
                    new_step: FlowStep::Confirmed,
                    selection: Some("Pizza Night"),
                },
                EngineEvent::ConfettiChanged { visible: true },
            ]
        );
        engine.shutdown();
    }

    #[tokio::test]
    async fn test_error_event_for_unknown_option() {
        let mut engine = Engine::new(Settings::default());
        engine.process_message(Message::AnswerYes);
        let mut rx = engine.subscribe();

        engine.process_message(Message::PickDateByLabel("Bowling".into()));

        let events = drain_events(&mut rx);
        assert_eq!(events.len(), 1);
        match &events[0] {
            EngineEvent::Error { message } => assert!(message.contains("Bowling")),
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unknown_pick_before_date_options_emits_nothing() {
        let mut engine = Engine::new(Settings::default());
        let mut rx = engine.subscribe();

        engine.process_message(Message::PickDateByLabel("Bowling".into()));
        engine.process_message(Message::PickDate(8));

        assert_eq!(engine.state.step(), FlowStep::Initial);
        assert_eq!(engine.state.error_count, 0);
        assert!(drain_events(&mut rx).is_empty());
    }

    #[tokio::test]
    async fn test_noop_emits_nothing() {
        let mut engine = Engine::new(Settings::default());
        let mut rx = engine.subscribe();

        engine.process_message(Message::AskAgain);
        assert!(drain_events(&mut rx).is_empty());
    }

    #[tokio::test]
    async fn test_drain_pending_messages() {
        let mut engine = Engine::new(Settings::default());
        let tx = engine.msg_sender();
        tx.send(Message::AnswerNo).await.unwrap();
        tx.send(Message::ConfirmRejection).await.unwrap();

        assert_eq!(engine.drain_pending_messages(), 2);
        assert_eq!(engine.state.step(), FlowStep::Rejected);
    }

    #[tokio::test]
    async fn test_shutdown_emits_event_and_quits() {
        let mut engine = Engine::new(Settings::default());
        let mut rx = engine.subscribe();

        engine.shutdown();

        assert!(engine.should_quit());
        assert_eq!(drain_events(&mut rx), vec![EngineEvent::Shutdown]);
    }
}
