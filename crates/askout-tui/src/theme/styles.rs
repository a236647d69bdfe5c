//! Semantic style builders for the card.

use askout_core::Background;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn card_text() -> Style {
    Style::default().fg(palette::CARD_TEXT)
}

pub fn card_text_muted() -> Style {
    Style::default().fg(palette::CARD_TEXT_MUTED)
}

pub fn card_title() -> Style {
    Style::default()
        .fg(palette::CARD_TITLE)
        .add_modifier(Modifier::BOLD)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

pub fn keybinding() -> Style {
    Style::default()
        .fg(palette::TEXT_BRIGHT)
        .add_modifier(Modifier::BOLD)
}

// --- Buttons ---
pub fn button(primary: bool, focused: bool) -> Style {
    let bg = if focused {
        palette::BUTTON_FOCUS
    } else if primary {
        palette::BUTTON_PRIMARY
    } else {
        palette::BUTTON_SECONDARY
    };
    let style = Style::default().fg(palette::BUTTON_TEXT).bg(bg);
    if focused {
        style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    } else {
        style
    }
}

// --- Containers ---

/// Rounded card container filled with the card background
pub fn card_block(background: Background) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette::CARD_BORDER))
        .style(
            Style::default()
                .bg(palette::card_bg(background))
                .fg(palette::CARD_TEXT),
        )
}

/// Modal dialog container
pub fn popup_block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette::POPUP_BORDER))
        .style(
            Style::default()
                .bg(palette::POPUP_BG)
                .fg(palette::CARD_TEXT),
        )
}
