//! # askout-tui - Terminal UI for Ask Out
//!
//! Renders the card with ratatui and feeds crossterm key events into the
//! [`askout_app::Engine`].
//!
//! ## Public API
//!
//! - [`run()`] - Run the interactive card until quit
//! - [`render::view`] - Pure view function over `AppState`
//! - [`theme`] - Palette, styles and glyph fallbacks

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

pub use runner::run;
