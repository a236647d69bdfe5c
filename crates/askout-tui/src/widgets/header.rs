//! Card header: title and description for the current step

use askout_core::HeaderContent;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Widget};

use crate::theme::glyphs::GlyphSet;
use crate::theme::styles;

pub struct CardHeader {
    content: HeaderContent,
    glyphs: GlyphSet,
}

impl CardHeader {
    pub fn new(content: HeaderContent, glyphs: GlyphSet) -> Self {
        Self { content, glyphs }
    }
}

impl Widget for CardHeader {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let title = Line::styled(self.glyphs.text(self.content.title), styles::card_title());
        Paragraph::new(title)
            .alignment(Alignment::Center)
            .render(Rect { height: 1, ..area }, buf);

        if area.height > 1 {
            let description = Line::styled(
                self.glyphs.text(self.content.description),
                styles::card_text_muted(),
            );
            Paragraph::new(description)
                .alignment(Alignment::Center)
                .render(
                    Rect {
                        y: area.y + 1,
                        height: 1,
                        ..area
                    },
                    buf,
                );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use askout_app::config::GlyphMode;
    use askout_core::FlowStep;

    #[test]
    fn test_header_renders_title_and_description() {
        let mut term = TestTerminal::new();
        let header = CardHeader::new(
            HeaderContent::for_step(FlowStep::DateOptions),
            GlyphSet::new(GlyphMode::Emoji),
        );
        term.render_widget(header, term.area());

        assert!(term.line_contains(0, "Yay! You said yes!"));
        assert!(term.line_contains(1, "Now, let's pick the perfect date idea..."));
    }

    #[test]
    fn test_header_ascii_glyphs() {
        let mut term = TestTerminal::new();
        let header = CardHeader::new(
            HeaderContent::for_step(FlowStep::Rejected),
            GlyphSet::new(GlyphMode::Ascii),
        );
        term.render_widget(header, term.area());

        assert!(term.line_contains(0, "Aw, maybe next time? :)"));
    }
}
