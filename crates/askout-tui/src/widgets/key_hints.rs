//! Key hint bar below the card

use askout_app::state::AppState;
use askout_core::FlowStep;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::theme::styles;

pub struct KeyHints<'a> {
    state: &'a AppState,
}

impl<'a> KeyHints<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// `(key, action)` pairs for the current view
    fn hints(&self) -> Vec<(&'static str, &'static str)> {
        let mut hints = Vec::new();

        if self.state.confirm_dialog_visible() {
            hints.push(("m/esc", "changed my mind"));
            hints.push(("y", "sure"));
        } else {
            match self.state.step() {
                FlowStep::Initial => {
                    hints.push(("y", "yes"));
                    hints.push(("n", "no"));
                }
                FlowStep::DateOptions => hints.push(("1-3", "pick")),
                FlowStep::Confirmed => hints.push(("r", "start over")),
                FlowStep::Rejected => hints.push(("a", "ask again")),
            }
        }

        if !self.state.buttons().is_empty() {
            hints.push(("tab", "focus"));
            hints.push(("enter", "select"));
        }
        hints.push(("q", "quit"));
        hints
    }
}

impl Widget for KeyHints<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();
        for (i, (key, action)) in self.hints().into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ·  ", styles::text_muted()));
            }
            spans.push(Span::styled(key, styles::keybinding()));
            spans.push(Span::styled(format!(" {}", action), styles::text_muted()));
        }

        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}
