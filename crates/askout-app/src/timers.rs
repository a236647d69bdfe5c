//! Celebration timers for the confirmed step
//!
//! Entering `confirmed` starts two tasks that report back over the engine's
//! message channel:
//! - a one-shot that clears the confetti after [`CONFETTI_DURATION`];
//! - a recurring randomizer that picks a new pastel hue every
//!   [`BACKGROUND_INTERVAL`], first firing one interval after entry.
//!
//! Both tasks are owned by a [`CelebrationTimers`] handle. Cancelling (or
//! dropping) the handle aborts them, so no timer message is produced after
//! the celebration is released. Messages already queued before release carry
//! the celebration id and are ignored by the handler once the id is stale.

use std::fmt;
use std::time::Duration;

use rand::Rng;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, trace};

use crate::message::Message;

/// How long the confetti stays on after confirming
pub const CONFETTI_DURATION: Duration = Duration::from_secs(5);

/// Period of the background randomizer while confirmed
pub const BACKGROUND_INTERVAL: Duration = Duration::from_secs(2);

/// Handle owning the timer tasks of one celebration
pub struct CelebrationTimers {
    celebration_id: u64,
    confetti: JoinHandle<()>,
    background: JoinHandle<()>,
}

impl CelebrationTimers {
    /// Spawn both timer tasks for `celebration_id`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn(celebration_id: u64, msg_tx: mpsc::Sender<Message>) -> Self {
        let confetti = tokio::spawn(confetti_timer(celebration_id, msg_tx.clone()));
        let background = tokio::spawn(background_randomizer(celebration_id, msg_tx));
        debug!("Celebration {} timers started", celebration_id);

        Self {
            celebration_id,
            confetti,
            background,
        }
    }

    pub fn celebration_id(&self) -> u64 {
        self.celebration_id
    }

    /// Abort both tasks. Safe to call more than once.
    pub fn cancel(&self) {
        if !self.confetti.is_finished() || !self.background.is_finished() {
            debug!("Celebration {} timers cancelled", self.celebration_id);
        }
        self.confetti.abort();
        self.background.abort();
    }

    /// True once both tasks have stopped running
    pub fn is_released(&self) -> bool {
        self.confetti.is_finished() && self.background.is_finished()
    }
}

impl Drop for CelebrationTimers {
    fn drop(&mut self) {
        self.confetti.abort();
        self.background.abort();
    }
}

impl fmt::Debug for CelebrationTimers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CelebrationTimers")
            .field("celebration_id", &self.celebration_id)
            .field("confetti_finished", &self.confetti.is_finished())
            .field("background_finished", &self.background.is_finished())
            .finish()
    }
}

async fn confetti_timer(celebration_id: u64, msg_tx: mpsc::Sender<Message>) {
    tokio::time::sleep(CONFETTI_DURATION).await;
    trace!("Celebration {} confetti expired", celebration_id);
    let _ = msg_tx
        .send(Message::ConfettiExpired { celebration_id })
        .await;
}

async fn background_randomizer(celebration_id: u64, msg_tx: mpsc::Sender<Message>) {
    let mut ticker = tokio::time::interval_at(
        Instant::now() + BACKGROUND_INTERVAL,
        BACKGROUND_INTERVAL,
    );
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;
        let hue: f32 = rand::thread_rng().gen_range(0.0..360.0);
        trace!("Celebration {} background hue {:.0}", celebration_id, hue);

        if msg_tx
            .send(Message::BackgroundRandomized {
                celebration_id,
                hue,
            })
            .await
            .is_err()
        {
            // Engine gone
            break;
        }
    }
}
