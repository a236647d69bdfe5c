//! Color palette for the card.

use askout_core::Background;
use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Rgb(24, 16, 28); // Terminal background around the card
pub const POPUP_BG: Color = Color::Rgb(255, 250, 250); // Confirm dialog

// --- Borders ---
pub const CARD_BORDER: Color = Color::Rgb(236, 72, 153);
pub const POPUP_BORDER: Color = Color::Rgb(244, 63, 94);

// --- Text on the light card ---
pub const CARD_TEXT: Color = Color::Rgb(55, 65, 81);
pub const CARD_TEXT_MUTED: Color = Color::Rgb(107, 114, 128);
pub const CARD_TITLE: Color = Color::Rgb(219, 39, 119);

// --- Text on the dark surround ---
pub const TEXT_MUTED: Color = Color::Rgb(120, 110, 125);
pub const TEXT_BRIGHT: Color = Color::Rgb(240, 230, 240);

// --- Buttons ---
pub const BUTTON_PRIMARY: Color = Color::Rgb(236, 72, 153);
pub const BUTTON_SECONDARY: Color = Color::Rgb(156, 163, 175);
pub const BUTTON_TEXT: Color = Color::Rgb(255, 255, 255);
pub const BUTTON_FOCUS: Color = Color::Rgb(131, 24, 67);

// --- Effects ---
pub const SHADOW: Color = Color::Rgb(8, 4, 10);

/// Confetti piece colors, indexed by `Particle::color`
pub const CONFETTI: [Color; 8] = [
    Color::Rgb(244, 63, 94),
    Color::Rgb(251, 146, 60),
    Color::Rgb(250, 204, 21),
    Color::Rgb(74, 222, 128),
    Color::Rgb(56, 189, 248),
    Color::Rgb(129, 140, 248),
    Color::Rgb(232, 121, 249),
    Color::Rgb(236, 72, 153),
];

/// Terminal color of a card background
pub fn card_bg(background: Background) -> Color {
    let (r, g, b) = background.rgb();
    Color::Rgb(r, g, b)
}

pub fn confetti(index: u8) -> Color {
    CONFETTI[index as usize % CONFETTI.len()]
}
