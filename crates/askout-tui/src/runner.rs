//! Main TUI runner - entry point and event loop

use std::time::{Duration, Instant};

use askout_app::config::Settings;
use askout_app::{Engine, Message};
use askout_core::{Error, Result};
use tracing::{debug, info};

use super::{event, render, terminal};

/// Run the card in the terminal until the user quits
pub async fn run(settings: Settings) -> Result<()> {
    terminal::install_panic_hook();

    let tick_rate = settings.ui.tick_rate();
    let mut engine = Engine::new(settings);
    engine.install_signal_handler();

    let mut term = ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))?;
    info!("TUI started (tick {:?})", tick_rate);

    let result = run_loop(&mut term, &mut engine, tick_rate);
    debug!("TUI loop finished (ok={})", result.is_ok());

    engine.shutdown();
    ratatui::restore();

    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    engine: &mut Engine,
    tick_rate: Duration,
) -> Result<()> {
    let mut last_tick = Instant::now();

    while !engine.should_quit() {
        // Timer and signal messages
        engine.drain_pending_messages();

        if engine.should_quit() {
            break;
        }

        terminal.draw(|frame| render::view(frame, &engine.state))?;

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if let Some(message) = event::poll(timeout)? {
            engine.process_message(message);
        }

        // Animations advance by wall time, however often keys arrive
        let elapsed = last_tick.elapsed();
        if elapsed >= tick_rate {
            engine.process_message(Message::Tick(elapsed));
            last_tick = Instant::now();
        }
    }

    Ok(())
}
