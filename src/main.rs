//! Ask Out - ask someone on a date, from the terminal
//!
//! This is the binary entry point. All logic lives in the library crates.

use std::path::PathBuf;

use askout_app::config::{self, GlyphMode};
use askout_core::prelude::*;
use clap::Parser;

/// Ask Out - ask someone on a date, from the terminal
#[derive(Parser, Debug)]
#[command(name = "askout")]
#[command(about = "Ask someone on a date, from the terminal", long_about = None)]
struct Args {
    /// Settings file (defaults to <config_dir>/ask-out/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Use ASCII stand-ins instead of emoji
    #[arg(long)]
    ascii: bool,

    /// Run in headless mode (NDJSON events on stdout, commands on stdin)
    #[arg(long)]
    headless: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Logs go to a file; stdout belongs to the TUI or the NDJSON stream
    askout_core::logging::init()?;

    let mut settings = config::load_settings(args.config.as_deref());
    if args.ascii {
        settings.ui.glyphs = GlyphMode::Ascii;
    }

    let result = if args.headless {
        ask_out::run_headless(settings).await
    } else {
        ask_out::run(settings).await
    };

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("Ask Out exiting");
    result
}
