//! Confetti drawn over the card while the celebration flag is on

use askout_app::effects::ConfettiBurst;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;

use super::modal_overlay::draw_over_blank;
use crate::theme::glyphs::GlyphSet;
use crate::theme::palette;

pub struct Confetti<'a> {
    burst: &'a ConfettiBurst,
    glyphs: GlyphSet,
}

impl<'a> Confetti<'a> {
    pub fn new(burst: &'a ConfettiBurst, glyphs: GlyphSet) -> Self {
        Self { burst, glyphs }
    }
}

impl Widget for Confetti<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let max_x = area.width.saturating_sub(1) as f32;
        let max_y = area.height.saturating_sub(1) as f32;

        for piece in self.burst.visible() {
            let x = area.x + (piece.x * max_x).round() as u16;
            let y = area.y + (piece.y * max_y).round() as u16;
            let style = Style::default().fg(palette::confetti(piece.color));
            // Pieces never cover text
            draw_over_blank(buf, area, x, y, self.glyphs.confetti(piece.shape), style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use askout_app::config::GlyphMode;
    use askout_app::effects::Particle;

    fn piece(x: f32, y: f32) -> Particle {
        Particle {
            x,
            y,
            vx: 0.0,
            vy: 0.1,
            color: 0,
            shape: 0,
        }
    }

    #[test]
    fn test_visible_pieces_are_drawn() {
        let burst = ConfettiBurst {
            particles: vec![piece(0.0, 0.0), piece(1.0, 1.0), piece(0.5, -0.2)],
        };
        let mut term = TestTerminal::with_size(11, 5);
        term.render_widget(
            Confetti::new(&burst, GlyphSet::new(GlyphMode::Ascii)),
            term.area(),
        );

        assert_eq!(term.cell_at(0, 0), Some("*"));
        assert_eq!(term.cell_at(10, 4), Some("*"));
        // Above the card: not drawn
        assert_eq!(term.content().matches('*').count(), 2);
    }

    #[test]
    fn test_pieces_skip_text() {
        let burst = ConfettiBurst {
            particles: vec![piece(0.0, 0.0)],
        };
        let glyphs = GlyphSet::new(GlyphMode::Ascii);
        let mut term = TestTerminal::with_size(10, 2);
        term.draw_with(|frame| {
            let area = frame.area();
            frame.buffer_mut().set_string(0, 0, "Hi", Style::default());
            frame.render_widget(Confetti::new(&burst, glyphs), area);
        });

        assert_eq!(term.cell_at(0, 0), Some("H"));
    }
}
