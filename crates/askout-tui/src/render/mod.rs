//! Main render/view function (View in TEA pattern)


use askout_app::state::AppState;
use askout_core::FlowStep;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use crate::layout;
use crate::theme::glyphs::GlyphSet;
use crate::theme::{palette, styles};
use crate::widgets::{
    modal_overlay, CardBody, CardHeader, Confetti, ConfirmDialog, FloatingGlyphs, KeyHints,
};

/// Footer shown while picking a date
pub const DATE_OPTIONS_FOOTER: &str = "Choose a date option above!";

/// Render the complete UI (View function in TEA)
///
/// Pure rendering: reads state, never modifies it.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let glyphs = GlyphSet::new(state.settings.ui.glyphs);

    frame.render_widget(
        Block::default().style(Style::default().bg(palette::DEEPEST_BG)),
        area,
    );

    let areas = layout::create(area);
    let card_block = styles::card_block(state.background);
    let inner = card_block.inner(areas.card);
    frame.render_widget(card_block, areas.card);

    let card = layout::card_areas(inner);
    frame.render_widget(CardHeader::new(state.header(), glyphs), card.header);
    frame.render_widget(CardBody::new(state, glyphs), card.body);

    if state.step().has_floating_glyphs() {
        let frames = state.effects.floating_frames();
        frame.render_widget(FloatingGlyphs::new(&frames, glyphs), card.body);
    }

    render_footer(frame, state, card.footer);

    // Decorations go last so they only fill blank cells
    if state.confetti_visible {
        if let Some(ref burst) = state.effects.confetti {
            frame.render_widget(Confetti::new(burst, glyphs), inner);
        }
    }

    frame.render_widget(KeyHints::new(state), areas.hints);

    if state.confirm_dialog_visible() {
        modal_overlay::dim_background(frame.buffer_mut(), areas.main);
        let buttons = state.buttons();
        frame.render_widget(
            ConfirmDialog::new(&buttons, state.focus, glyphs),
            areas.main,
        );
    }
}

fn render_footer(frame: &mut Frame, state: &AppState, area: Rect) {
    if state.step() != FlowStep::DateOptions {
        return;
    }

    let footer = match state.last_error {
        Some(ref err) => Line::styled(err.as_str(), Style::default().fg(palette::POPUP_BORDER)),
        None => Line::styled(DATE_OPTIONS_FOOTER, styles::card_text_muted()),
    };
    frame.render_widget(Paragraph::new(footer).alignment(Alignment::Center), area);
}
