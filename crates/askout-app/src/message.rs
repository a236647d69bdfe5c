//! Message types for the application (TEA pattern)

use std::sync::Arc;
use std::time::Duration;

use crate::input_key::InputKey;
use crate::timers::CelebrationTimers;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Animation frame, with the time measured since the previous one
    Tick(Duration),

    /// Quit with teardown (q, Ctrl+C, signal handler, headless `quit`)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Flow Messages
    // ─────────────────────────────────────────────────────────
    /// "Yes" on the opening question
    AnswerYes,

    /// "No" on the opening question (opens the confirm dialog)
    AnswerNo,

    /// "I changed my mind" in the confirm dialog
    CancelRejection,

    /// "Yes, I'm sure" in the confirm dialog
    ConfirmRejection,

    /// Pick a date option by 0-based index
    PickDate(usize),

    /// Pick a date option by label
    PickDateByLabel(String),

    /// "Ask me again?" on the rejected card
    AskAgain,

    /// Remount the card (only exit from `confirmed`)
    StartOver,

    // ─────────────────────────────────────────────────────────
    // Focus Messages
    // ─────────────────────────────────────────────────────────
    /// Move focus to the next button (Tab, arrows)
    FocusNext,
    /// Move focus to the previous button (Shift+Tab, arrows)
    FocusPrevious,

    /// Activate the focused button
    ActivateFocused,

    // ─────────────────────────────────────────────────────────
    // Celebration Timer Messages
    // ─────────────────────────────────────────────────────────
    /// Timers for a celebration were spawned.
    ///
    /// Arc is required because Message derives Clone and the timer handle
    /// owns task handles.
    CelebrationStarted {
        celebration_id: u64,
        timers: Arc<CelebrationTimers>,
    },

    /// The 5 s confetti one-shot fired
    ConfettiExpired { celebration_id: u64 },

    /// The 2 s background randomizer fired
    BackgroundRandomized { celebration_id: u64, hue: f32 },
}
