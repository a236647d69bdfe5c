//! askout-app - Application state and orchestration for Ask Out
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the card:
//! messages, the flow state machine, the update function, celebration timers,
//! presentation effects, settings loading, and the Engine shared by the TUI
//! and headless runners.

pub mod actions;
pub mod config;
pub mod effects;
pub mod engine;
pub mod engine_event;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod signals;
pub mod state;
pub mod timers;

// Re-export primary types
pub use engine::Engine;
pub use engine_event::EngineEvent;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use state::{AppPhase, AppState, Button, ButtonAction, Flow};
pub use timers::{CelebrationTimers, BACKGROUND_INTERVAL, CONFETTI_DURATION};
