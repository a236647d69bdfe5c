//! Configuration file parsing for Ask Out
//!
//! Supports a single optional `config.toml` in the user config directory
//! (or any path given with `--config`).

pub mod settings;
pub mod types;

pub use settings::{default_config_path, load_settings, parse_settings};
pub use types::*;
