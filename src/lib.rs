//! Ask Out
//!
//! Entry points for the interactive card and the headless NDJSON mode.
//! The flow itself lives in `askout-app`, rendering in `askout-tui`.

pub mod headless;

pub use headless::runner::run_headless;

use askout_app::config::Settings;
use askout_core::prelude::*;

/// Run the interactive card in the terminal
pub async fn run(settings: Settings) -> Result<()> {
    info!(
        "Starting TUI (glyphs={:?}, tick={}ms)",
        settings.ui.glyphs, settings.ui.tick_rate_ms
    );
    askout_tui::run(settings).await
}
