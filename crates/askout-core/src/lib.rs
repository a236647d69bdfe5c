//! # askout-core - Core Domain Types
//!
//! Foundation crate for Ask Out. Provides the flow step and date option
//! types, card background colors, error handling and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`FlowStep`] - Which screen of the card is active
//! - [`DateOption`] / [`DATE_OPTIONS`] - The three fixed date ideas
//! - [`HeaderContent`] - Title/description pair shown for each step
//!
//! ### Colors (`color`)
//! - [`Background`] - Default, alert tint, or random pastel
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use askout_core::prelude::*;
//! ```

pub mod color;
pub mod error;
pub mod logging;
pub mod types;

/// Prelude for common imports used throughout all Ask Out crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

pub use color::{hsl_to_rgb, Background};
pub use error::{Error, Result, ResultExt};
pub use types::{DateOption, FlowStep, HeaderContent, DATE_OPTIONS};
