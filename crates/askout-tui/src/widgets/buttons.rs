//! Row or column of card buttons with keyboard focus

use askout_app::state::{Button, ButtonAction};
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::theme::glyphs::GlyphSet;
use crate::theme::styles;

/// Gap between buttons in a row
const ROW_GAP: &str = "   ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonLayout {
    /// Side by side on one line
    Row,
    /// One button per line, with a blank line between when there is room
    Column,
}

pub struct ButtonGroup<'a> {
    buttons: &'a [Button],
    focus: Option<usize>,
    glyphs: GlyphSet,
    layout: ButtonLayout,
}

impl<'a> ButtonGroup<'a> {
    pub fn new(buttons: &'a [Button], glyphs: GlyphSet) -> Self {
        Self {
            buttons,
            focus: None,
            glyphs,
            layout: ButtonLayout::Row,
        }
    }

    /// Highlight the button at `focus`; `None` renders every button unfocused
    pub fn focus(mut self, focus: Option<usize>) -> Self {
        self.focus = focus;
        self
    }

    pub fn layout(mut self, layout: ButtonLayout) -> Self {
        self.layout = layout;
        self
    }

    fn span(&self, index: usize, button: &Button) -> Span<'static> {
        let text = match button.glyph {
            Some(glyph) => format!(
                " {} {} [{}] ",
                self.glyphs.glyph(glyph),
                button.label,
                button.key
            ),
            None => format!(" {} [{}] ", button.label, button.key),
        };
        let focused = self.focus == Some(index);
        Span::styled(text, styles::button(is_primary(button), focused))
    }
}

/// Secondary buttons are the ones that walk away from a date
fn is_primary(button: &Button) -> bool {
    !matches!(
        button.action,
        ButtonAction::AnswerNo | ButtonAction::ConfirmRejection
    )
}

impl Widget for ButtonGroup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || self.buttons.is_empty() {
            return;
        }

        match self.layout {
            ButtonLayout::Row => {
                let mut spans = Vec::with_capacity(self.buttons.len() * 2);
                for (i, button) in self.buttons.iter().enumerate() {
                    if i > 0 {
                        spans.push(Span::raw(ROW_GAP));
                    }
                    spans.push(self.span(i, button));
                }
                Paragraph::new(Line::from(spans))
                    .alignment(Alignment::Center)
                    .render(Rect { height: 1, ..area }, buf);
            }
            ButtonLayout::Column => {
                let needed = self.buttons.len() as u16 * 2 - 1;
                let step = if area.height >= needed { 2 } else { 1 };
                for (i, button) in self.buttons.iter().enumerate() {
                    let y = area.y + i as u16 * step;
                    if y >= area.bottom() {
                        break;
                    }
                    Paragraph::new(Line::from(self.span(i, button)))
                        .alignment(Alignment::Center)
                        .render(Rect::new(area.x, y, area.width, 1), buf);
                }
            }
        }
    }
}
