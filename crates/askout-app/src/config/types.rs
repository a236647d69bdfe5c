//! Configuration types for Ask Out
//!
//! Defines:
//! - `Settings` - Application settings (`config.toml`)
//! - `UiSettings` - Presentation knobs (glyph mode, frame rate, confetti density)
//! - `GlyphMode` - Emoji glyphs or plain ASCII fallbacks

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Fastest allowed animation tick
pub const MIN_TICK_RATE_MS: u64 = 16;

/// Upper bound on confetti particles per burst
pub const MAX_CONFETTI_PARTICLES: usize = 400;

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub ui: UiSettings,
}

/// How decorative glyphs are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GlyphMode {
    /// Emoji glyphs (needs a terminal font with emoji coverage)
    #[default]
    Emoji,
    /// Plain ASCII stand-ins
    Ascii,
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UiSettings {
    #[serde(default)]
    pub glyphs: GlyphMode,

    /// Animation frame interval in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// Number of particles in the confetti burst
    #[serde(default = "default_confetti_particles")]
    pub confetti_particles: usize,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            glyphs: GlyphMode::default(),
            tick_rate_ms: default_tick_rate_ms(),
            confetti_particles: default_confetti_particles(),
        }
    }
}

impl UiSettings {
    /// Tick interval, clamped to [`MIN_TICK_RATE_MS`]
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(MIN_TICK_RATE_MS))
    }

    /// Particle count, clamped to [`MAX_CONFETTI_PARTICLES`]
    pub fn confetti_particles(&self) -> usize {
        self.confetti_particles.min(MAX_CONFETTI_PARTICLES)
    }
}

fn default_tick_rate_ms() -> u64 {
    50
}

fn default_confetti_particles() -> usize {
    80
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.ui.glyphs, GlyphMode::Emoji);
        assert_eq!(settings.ui.tick_rate(), Duration::from_millis(50));
        assert_eq!(settings.ui.confetti_particles(), 80);
    }

    #[test]
    fn test_tick_rate_is_clamped() {
        let ui = UiSettings {
            tick_rate_ms: 1,
            ..Default::default()
        };
        assert_eq!(ui.tick_rate(), Duration::from_millis(MIN_TICK_RATE_MS));
    }

    #[test]
    fn test_confetti_particles_are_clamped() {
        let ui = UiSettings {
            confetti_particles: 10_000,
            ..Default::default()
        };
        assert_eq!(ui.confetti_particles(), MAX_CONFETTI_PARTICLES);
    }
}
