//! Screen layout definitions for the TUI
//!
//! The card is centered in the terminal with a one-line key hint bar at the
//! bottom. Inside the card: header, body, footer.

use ratatui::layout::{Constraint, Layout, Rect};

use crate::widgets::modal_overlay::centered_rect;

/// Preferred outer size of the card
pub const CARD_WIDTH: u16 = 64;
pub const CARD_HEIGHT: u16 = 18;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Area the card is centered in
    pub main: Rect,
    /// The card itself (border included)
    pub card: Rect,
    /// Key hint bar
    pub hints: Rect,
}

/// Areas inside the card border
#[derive(Debug, Clone, Copy)]
pub struct CardAreas {
    /// Title + description
    pub header: Rect,
    /// Step-specific content
    pub body: Rect,
    /// Hint line at the bottom of the card
    pub footer: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).split(area);

    ScreenAreas {
        main: chunks[0],
        card: centered_rect(CARD_WIDTH, CARD_HEIGHT, chunks[0]),
        hints: chunks[1],
    }
}

/// Split the inside of the card
pub fn card_areas(inner: Rect) -> CardAreas {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Title, description, breathing row
        Constraint::Min(1),    // Body
        Constraint::Length(1), // Footer
    ])
    .split(inner);

    CardAreas {
        header: chunks[0],
        body: chunks[1],
        footer: chunks[2],
    }
}
