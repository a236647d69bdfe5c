//! Glyph set for the card.
//!
//! Provides `GlyphSet` which resolves decorative glyphs at runtime based on
//! `GlyphMode`.
//! - `GlyphMode::Emoji` - emoji as written (needs an emoji-capable font)
//! - `GlyphMode::Ascii` - plain ASCII stand-ins

use std::borrow::Cow;

use askout_app::config::GlyphMode;

/// Emoji used anywhere on the card and their ASCII stand-ins
const ASCII_FALLBACKS: &[(&str, &str)] = &[
    ("💖", "<3"),
    ("🎉", "\\o/"),
    ("😍", ":D"),
    ("😊", ":)"),
    ("😢", ":'("),
    ("💔", "</3"),
    ("😿", ":("),
    ("☕", "[c]"),
    ("🍕", "[p]"),
    ("🎬", "[m]"),
    ("✓", "+"),
    ("✗", "x"),
];

/// Confetti piece shapes, indexed by `Particle::shape`
const CONFETTI_EMOJI: [&str; 4] = ["▪", "●", "▴", "◆"];
const CONFETTI_ASCII: [&str; 4] = ["*", "o", "+", "~"];

/// Runtime glyph resolver
#[derive(Debug, Clone, Copy)]
pub struct GlyphSet {
    mode: GlyphMode,
}

impl GlyphSet {
    pub fn new(mode: GlyphMode) -> Self {
        Self { mode }
    }

    /// Resolve a single glyph. Unknown emoji fall back to `*` in ASCII mode.
    pub fn glyph(&self, emoji: &'static str) -> &'static str {
        match self.mode {
            GlyphMode::Emoji => emoji,
            GlyphMode::Ascii => ASCII_FALLBACKS
                .iter()
                .find(|(e, _)| *e == emoji)
                .map(|(_, ascii)| *ascii)
                .unwrap_or("*"),
        }
    }

    /// Replace every known emoji inside `text`
    pub fn text<'a>(&self, text: &'a str) -> Cow<'a, str> {
        match self.mode {
            GlyphMode::Emoji => Cow::Borrowed(text),
            GlyphMode::Ascii => {
                if !ASCII_FALLBACKS.iter().any(|(e, _)| text.contains(e)) {
                    return Cow::Borrowed(text);
                }
                let mut out = text.to_string();
                for (emoji, ascii) in ASCII_FALLBACKS {
                    out = out.replace(emoji, ascii);
                }
                Cow::Owned(out)
            }
        }
    }

    pub fn heart(&self) -> &'static str {
        self.glyph("💖")
    }

    pub fn confetti(&self, shape: u8) -> &'static str {
        let shapes = match self.mode {
            GlyphMode::Emoji => &CONFETTI_EMOJI,
            GlyphMode::Ascii => &CONFETTI_ASCII,
        };
        shapes[shape as usize % shapes.len()]
    }
}
