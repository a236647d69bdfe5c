//! Glyphs floating up over the confirmed and rejected cards

use askout_app::effects::GlyphFrame;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use super::modal_overlay::draw_over_blank;
use crate::theme::glyphs::GlyphSet;

/// Below this opacity a glyph is not drawn at all
const MIN_VISIBLE_OPACITY: f32 = 0.15;

/// Below this opacity a glyph is drawn dimmed
const DIM_OPACITY: f32 = 0.5;

pub struct FloatingGlyphs<'a> {
    frames: &'a [(&'static str, GlyphFrame)],
    glyphs: GlyphSet,
}

impl<'a> FloatingGlyphs<'a> {
    pub fn new(frames: &'a [(&'static str, GlyphFrame)], glyphs: GlyphSet) -> Self {
        Self { frames, glyphs }
    }
}

/// Cell of a glyph in slot `slot` of `count`, or `None` if off-screen
pub fn glyph_position(
    area: Rect,
    slot: usize,
    count: usize,
    frame: &GlyphFrame,
) -> Option<(u16, u16)> {
    if area.is_empty() || count == 0 {
        return None;
    }

    let lane = area.width as f32 / count as f32;
    let center = area.x as f32 + lane * (slot as f32 + 0.5);
    let x = center + frame.drift * lane / 2.0;

    let travel = area.height.saturating_sub(1) as f32;
    let y = area.bottom() as f32 - 1.0 - frame.rise * travel;

    if x < area.x as f32 || y < area.y as f32 {
        return None;
    }
    Some((x.round() as u16, y.round() as u16))
}

impl ratatui::widgets::Widget for FloatingGlyphs<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let count = self.frames.len();
        for (slot, (glyph, frame)) in self.frames.iter().enumerate() {
            if frame.opacity < MIN_VISIBLE_OPACITY {
                continue;
            }
            let Some((x, y)) = glyph_position(area, slot, count, frame) else {
                continue;
            };
            let style = if frame.opacity < DIM_OPACITY {
                Style::default().add_modifier(Modifier::DIM)
            } else {
                Style::default()
            };
            draw_over_blank(buf, area, x, y, self.glyphs.glyph(glyph), style);
        }
    }
}
