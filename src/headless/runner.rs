//! Headless mode runner - main event loop without TUI
//!
//! Reads commands from stdin, feeds them to the Engine and forwards every
//! engine event to stdout as NDJSON.

use tokio::sync::{broadcast, mpsc};
use tracing::{error, info, warn};

use askout_app::config::Settings;
use askout_app::{Engine, EngineEvent, Message};
use askout_core::prelude::*;

use super::HeadlessEvent;

/// A line read from stdin
#[derive(Debug)]
pub enum Command {
    Send(Message),
    Blank,
    Unknown(String),
}

/// Parse one stdin line.
///
/// `pick` takes a 1-based option number or a label; a number outside the
/// options is still forwarded so the engine reports it.
pub fn parse_command(line: &str) -> Command {
    let trimmed = line.trim();
    let (word, arg) = match trimmed.split_once(char::is_whitespace) {
        Some((word, arg)) => (word, arg.trim()),
        None => (trimmed, ""),
    };

    let message = match (word.to_ascii_lowercase().as_str(), arg) {
        ("", _) => return Command::Blank,
        ("yes", "") => Message::AnswerYes,
        ("no", "") => Message::AnswerNo,
        ("mind", "") => Message::CancelRejection,
        ("sure", "") => Message::ConfirmRejection,
        ("again", "") => Message::AskAgain,
        ("restart", "") => Message::StartOver,
        ("quit" | "q", "") => Message::Quit,
        ("pick", arg) if !arg.is_empty() => match arg.parse::<usize>() {
            Ok(n) if n >= 1 => Message::PickDate(n - 1),
            _ => Message::PickDateByLabel(arg.to_string()),
        },
        _ => return Command::Unknown(trimmed.to_string()),
    };
    Command::Send(message)
}

/// Run in headless mode - output NDJSON events instead of the TUI
pub async fn run_headless(settings: Settings) -> Result<()> {
    info!("═══════════════════════════════════════════════════════");
    info!("Ask Out starting in HEADLESS mode");
    info!("═══════════════════════════════════════════════════════");

    let mut engine = Engine::new(settings);
    engine.install_signal_handler();
    let mut events = engine.subscribe();

    HeadlessEvent::started(engine.state.step(), engine.state.background).emit();

    let stdin_tx = engine.msg_sender();
    std::thread::spawn(move || {
        spawn_stdin_reader_blocking(stdin_tx);
    });

    let result = headless_event_loop(&mut engine, &mut events).await;

    engine.shutdown();
    forward_events(&mut events);

    info!("Ask Out headless mode exiting");
    result
}

/// Main headless event loop
async fn headless_event_loop(
    engine: &mut Engine,
    events: &mut broadcast::Receiver<EngineEvent>,
) -> Result<()> {
    loop {
        if engine.should_quit() {
            info!("Quit requested");
            break;
        }

        match engine.msg_rx.recv().await {
            Some(msg) => {
                engine.process_message(msg);
                forward_events(events);
            }
            None => {
                info!("Message channel closed");
                break;
            }
        }
    }

    Ok(())
}

/// Write every pending engine event to stdout
fn forward_events(events: &mut broadcast::Receiver<EngineEvent>) {
    loop {
        match events.try_recv() {
            Ok(event) => HeadlessEvent::from(&event).emit(),
            Err(broadcast::error::TryRecvError::Lagged(n)) => {
                warn!("Headless output lagged, {} events dropped", n);
            }
            Err(_) => break,
        }
    }
}

/// Read commands from stdin until EOF or `quit` (blocking, own thread)
fn spawn_stdin_reader_blocking(msg_tx: mpsc::Sender<Message>) {
    use std::io::BufRead;

    let stdin = std::io::stdin();
    let reader = stdin.lock();

    for line in reader.lines() {
        match line {
            Ok(line) => match parse_command(&line) {
                Command::Send(msg) => {
                    let quit = matches!(msg, Message::Quit);
                    info!("Stdin: {:?}", msg);
                    if msg_tx.blocking_send(msg).is_err() || quit {
                        return;
                    }
                }
                Command::Blank => {}
                Command::Unknown(cmd) => {
                    warn!("Unknown stdin command: {}", cmd);
                    HeadlessEvent::error(format!("Unknown command: {}", cmd), false).emit();
                }
            },
            Err(e) => {
                error!("Failed to read stdin: {}", e);
                break;
            }
        }
    }

    // Closing stdin ends the session
    info!("Stdin closed");
    let _ = msg_tx.blocking_send(Message::Quit);
}
