//! Custom widgets for the card

pub mod buttons;
pub mod card;
pub mod confetti;
pub mod confirm_dialog;
pub mod floating_glyphs;
pub mod header;
pub mod key_hints;
pub mod modal_overlay;

pub use buttons::{ButtonGroup, ButtonLayout};
pub use card::CardBody;
pub use confetti::Confetti;
pub use confirm_dialog::ConfirmDialog;
pub use floating_glyphs::FloatingGlyphs;
pub use header::CardHeader;
pub use key_hints::KeyHints;
