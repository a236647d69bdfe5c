//! Headless mode - NDJSON event output instead of the TUI
//!
//! Commands are read from stdin one per line; every observable change of
//! the card is written to stdout as one JSON object per line. Each event has
//! an "event" field naming its type and a millisecond "timestamp".
//!
//! # Example Output
//!
//! ```json
//! {"event":"started","step":"initial","background":"#ffffff","timestamp":1704700001000}
//! {"event":"step_changed","from":"initial","to":"dateOptions","selection":null,"timestamp":1704700002000}
//! {"event":"confetti_changed","visible":true,"timestamp":1704700003000}
//! ```

pub mod runner;

use askout_app::EngineEvent;
use askout_core::{Background, FlowStep};
use chrono::Utc;
use serde::Serialize;
use std::io::{self, Write};
use tracing::error;

/// Events emitted in headless mode
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// Engine ready, card on its opening question
    Started {
        step: FlowStep,
        background: String,
        timestamp: i64,
    },

    /// The card moved to another step
    StepChanged {
        from: FlowStep,
        to: FlowStep,
        selection: Option<String>,
        timestamp: i64,
    },

    /// The "are you sure" dialog opened or closed
    DialogToggled { visible: bool, timestamp: i64 },

    /// CSS color of the new card background
    BackgroundChanged { background: String, timestamp: i64 },

    /// Confetti started or cleared
    ConfettiChanged { visible: bool, timestamp: i64 },

    /// A command could not be carried out
    Error {
        message: String,
        fatal: bool,
        timestamp: i64,
    },

    /// Engine shut down; always the last event
    Shutdown { timestamp: i64 },
}

impl HeadlessEvent {
    /// Emit this event to stdout as JSON
    pub fn emit(&self) {
        let json = match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize headless event: {}", e);
                return;
            }
        };

        // One line per event; the stdin reader thread may emit concurrently
        let mut stdout = io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", json) {
            error!("Failed to write headless event to stdout: {}", e);
            return;
        }

        if let Err(e) = stdout.flush() {
            error!("Failed to flush headless stdout: {}", e);
        }
    }

    /// Get current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    // ─────────────────────────────────────────────────────────
    // Convenience constructors
    // ─────────────────────────────────────────────────────────

    pub fn started(step: FlowStep, background: Background) -> Self {
        Self::Started {
            step,
            background: background.css(),
            timestamp: Self::now(),
        }
    }

    pub fn error(message: String, fatal: bool) -> Self {
        Self::Error {
            message,
            fatal,
            timestamp: Self::now(),
        }
    }
}

impl From<&EngineEvent> for HeadlessEvent {
    fn from(event: &EngineEvent) -> Self {
        let timestamp = Self::now();
        match event {
            EngineEvent::StepChanged {
                old_step,
                new_step,
                selection,
            } => Self::StepChanged {
                from: *old_step,
                to: *new_step,
                selection: selection.map(str::to_string),
                timestamp,
            },
            EngineEvent::ConfirmDialogToggled { visible } => Self::DialogToggled {
                visible: *visible,
                timestamp,
            },
            EngineEvent::BackgroundChanged { background } => Self::BackgroundChanged {
                background: background.css(),
                timestamp,
            },
            EngineEvent::ConfettiChanged { visible } => Self::ConfettiChanged {
                visible: *visible,
                timestamp,
            },
            EngineEvent::Error { message } => Self::Error {
                message: message.clone(),
                fatal: false,
                timestamp,
            },
            EngineEvent::Shutdown => Self::Shutdown { timestamp },
        }
    }
}
