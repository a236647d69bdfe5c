//! Settings parser for config.toml

use super::types::Settings;
use askout_core::prelude::*;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "ask-out";

/// Default location of the settings file (`~/.config/ask-out/config.toml` on Linux)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILENAME))
}

/// Parse settings from TOML text.
///
/// `path` is only used for error reporting.
pub fn parse_settings(content: &str, path: &Path) -> Result<Settings> {
    toml::from_str(content).map_err(|e| Error::config_invalid(path, e.to_string()))
}

/// Load settings from an explicit path, or the default location.
///
/// A missing file yields defaults. A file that cannot be read or parsed is
/// logged and also yields defaults; a bad config never keeps the card from
/// opening.
pub fn load_settings(path: Option<&Path>) -> Settings {
    let config_path = match path {
        Some(p) => p.to_path_buf(),
        None => match default_config_path() {
            Some(p) => p,
            None => {
                debug!("No config directory available, using defaults");
                return Settings::default();
            }
        },
    };

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match parse_settings(&content, &config_path) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("{}", e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}
