//! "Are you sure?" dialog shown before accepting a no

use askout_app::state::Button;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Clear, Paragraph, Widget, Wrap};

use super::buttons::ButtonGroup;
use super::modal_overlay::{centered_rect, render_shadow};
use crate::theme::glyphs::GlyphSet;
use crate::theme::styles;

pub const TITLE: &str = "Are you sure?";
pub const DESCRIPTION: &str =
    "You're about to say no to an amazing date! Are you absolutely certain?";

const DIALOG_WIDTH: u16 = 56;
const DIALOG_HEIGHT: u16 = 9;

/// Confirmation dialog widget
pub struct ConfirmDialog<'a> {
    buttons: &'a [Button],
    focus: usize,
    glyphs: GlyphSet,
}

impl<'a> ConfirmDialog<'a> {
    pub fn new(buttons: &'a [Button], focus: usize, glyphs: GlyphSet) -> Self {
        Self {
            buttons,
            focus,
            glyphs,
        }
    }
}

impl Widget for ConfirmDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal_area = centered_rect(DIALOG_WIDTH, DIALOG_HEIGHT, area);

        render_shadow(buf, modal_area);
        Clear.render(modal_area, buf);

        let block = styles::popup_block()
            .title(Line::styled(format!(" {} ", TITLE), styles::card_title()))
            .title_alignment(Alignment::Center);
        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        let chunks = Layout::vertical([
            Constraint::Length(1), // Spacer
            Constraint::Length(2), // Description
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Buttons
            Constraint::Min(0),
        ])
        .split(inner);

        Paragraph::new(DESCRIPTION)
            .style(styles::card_text())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(chunks[1], buf);

        ButtonGroup::new(self.buttons, self.glyphs)
            .focus(Some(self.focus))
            .render(chunks[3], buf);
    }
}
