//! Centralized theme for the card.
//!
//! This module provides:
//! - `palette` - Raw color constants
//! - `styles` - Semantic style builder functions
//! - `glyphs` - Emoji glyphs with ASCII fallbacks

pub mod glyphs;
pub mod palette;
pub mod styles;
