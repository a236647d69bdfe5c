//! Domain events emitted by the Engine for external consumers
//!
//! Events are broadcast after each message processing cycle via
//! `Engine::subscribe()`. The headless runner turns them into NDJSON.

use askout_core::{Background, FlowStep};

/// Observable changes of the card
#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    /// The flow moved to another step
    StepChanged {
        old_step: FlowStep,
        new_step: FlowStep,
        /// Label of the picked date option, once confirmed
        selection: Option<&'static str>,
    },

    /// The "are you sure?" dialog opened or closed
    ConfirmDialogToggled { visible: bool },

    /// The card background changed
    BackgroundChanged { background: Background },

    /// Confetti turned on or off
    ConfettiChanged { visible: bool },

    /// A user action could not be carried out
    Error { message: String },

    /// The engine is shutting down
    Shutdown,
}

impl EngineEvent {
    /// Event name used in logs and the NDJSON stream
    pub fn event_type(&self) -> &'static str {
        match self {
            EngineEvent::StepChanged { .. } => "step_changed",
            EngineEvent::ConfirmDialogToggled { .. } => "dialog_toggled",
            EngineEvent::BackgroundChanged { .. } => "background_changed",
            EngineEvent::ConfettiChanged { .. } => "confetti_changed",
            EngineEvent::Error { .. } => "error",
            EngineEvent::Shutdown => "shutdown",
        }
    }
}
