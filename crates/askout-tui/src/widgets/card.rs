//! Card body for each step of the flow

use askout_app::state::{buttons_for, AppState, Flow};
use askout_core::DateOption;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Widget};
use unicode_width::UnicodeWidthStr;

use super::buttons::{ButtonGroup, ButtonLayout};
use crate::theme::glyphs::GlyphSet;
use crate::theme::styles;

pub const QUESTION: &str = "Wanna go on a date?";
pub const CONFIRMED_BANNER: &str = "🎉 It's a date! 🎉";
pub const REJECTED_TITLE: &str = "Aww, that's okay!";
pub const REJECTED_MESSAGE: &str = "Maybe we can hang out as friends sometime?";

pub struct CardBody<'a> {
    state: &'a AppState,
    glyphs: GlyphSet,
}

impl<'a> CardBody<'a> {
    pub fn new(state: &'a AppState, glyphs: GlyphSet) -> Self {
        Self { state, glyphs }
    }
}

/// Rows of the body: content starts one row down and is spaced by `gap`
struct Rows {
    area: Rect,
    gap: u16,
}

impl Rows {
    fn new(area: Rect) -> Self {
        let gap = if area.height >= 7 { 2 } else { 1 };
        Self { area, gap }
    }

    fn first(&self) -> u16 {
        if self.area.height >= 7 {
            1
        } else {
            0
        }
    }

    /// Rect of the n-th content row, if it fits
    fn row(&self, n: u16) -> Option<Rect> {
        let y = self.area.y + self.first() + n * self.gap;
        (y < self.area.bottom()).then_some(Rect {
            y,
            height: 1,
            ..self.area
        })
    }

    /// Everything from the n-th content row down
    fn rest(&self, n: u16) -> Option<Rect> {
        self.row(n).map(|r| Rect {
            height: self.area.bottom() - r.y,
            ..r
        })
    }
}

fn centered(buf: &mut Buffer, area: Option<Rect>, line: Line<'_>) {
    if let Some(area) = area {
        Paragraph::new(line)
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

impl CardBody<'_> {
    fn render_initial(&self, rows: &Rows, buf: &mut Buffer) {
        centered(
            buf,
            rows.row(0),
            Line::styled(self.glyphs.heart(), styles::card_title()),
        );
        centered(
            buf,
            rows.row(1),
            Line::styled(QUESTION, styles::card_text().add_modifier(Modifier::BOLD)),
        );

        // Under the dialog the Yes/No buttons stay visible but unfocused
        let buttons = buttons_for(&Flow::default());
        let focus = (!self.state.confirm_dialog_visible()).then_some(self.state.focus);
        if let Some(area) = rows.row(2) {
            ButtonGroup::new(&buttons, self.glyphs)
                .focus(focus)
                .render(area, buf);
        }
    }

    fn render_date_options(&self, rows: &Rows, buf: &mut Buffer) {
        let buttons = self.state.buttons();
        if let Some(area) = rows.rest(0) {
            ButtonGroup::new(&buttons, self.glyphs)
                .focus(Some(self.state.focus))
                .layout(ButtonLayout::Column)
                .render(area, buf);
        }
    }

    fn render_confirmed(&self, selection: &DateOption, rows: &Rows, buf: &mut Buffer) {
        centered(
            buf,
            rows.row(0),
            Line::styled(self.glyphs.text(CONFIRMED_BANNER), styles::card_title()),
        );
        centered(
            buf,
            rows.row(1),
            Line::styled(
                format!("Get ready for our amazing {}!", selection.label),
                styles::card_text(),
            ),
        );

        // Wiggling date glyph
        if let Some(area) = rows.row(2) {
            let glyph = self.glyphs.glyph(selection.glyph);
            let width = glyph.width() as u16;
            let center = area.x + area.width.saturating_sub(width) / 2;
            let x = center.saturating_add_signed(self.state.effects.wiggle());
            if x >= area.x && x + width <= area.right() {
                buf.set_string(x, area.y, glyph, Style::default());
            }
        }
    }

    fn render_rejected(&self, rows: &Rows, buf: &mut Buffer) {
        centered(
            buf,
            rows.row(0),
            Line::styled(REJECTED_TITLE, styles::card_title()),
        );
        centered(
            buf,
            rows.row(1),
            Line::styled(REJECTED_MESSAGE, styles::card_text()),
        );

        let buttons = self.state.buttons();
        if let Some(area) = rows.row(2) {
            ButtonGroup::new(&buttons, self.glyphs)
                .focus(Some(self.state.focus))
                .render(area, buf);
        }
    }
}

impl Widget for CardBody<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        let rows = Rows::new(area);

        match self.state.flow {
            Flow::Initial { .. } => self.render_initial(&rows, buf),
            Flow::DateOptions => self.render_date_options(&rows, buf),
            Flow::Confirmed { selection } => self.render_confirmed(selection, &rows, buf),
            Flow::Rejected => self.render_rejected(&rows, buf),
        }
    }
}
