//! Shared overlay utilities.
//!
//! Centering rects, dimming the screen behind a modal, drop shadows, and
//! drawing decorations over blank cells only.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use unicode_width::UnicodeWidthStr;

use crate::theme::palette;

/// Center a fixed-size rect within an area, clamped to the area.
///
/// # Examples
/// ```
/// use ratatui::layout::Rect;
/// use askout_tui::widgets::modal_overlay::centered_rect;
///
/// let area = Rect::new(0, 0, 80, 24);
/// assert_eq!(centered_rect(40, 10, area), Rect::new(20, 7, 40, 10));
/// ```
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}

/// Dim every cell of `area`, leaving its symbols in place.
pub fn dim_background(buf: &mut Buffer, area: Rect) {
    let dim_style = Style::default()
        .fg(palette::TEXT_MUTED)
        .bg(palette::DEEPEST_BG);

    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_style(dim_style);
            }
        }
    }
}

/// 1-cell shadow along the right and bottom edges of `modal_rect`
pub fn render_shadow(buf: &mut Buffer, modal_rect: Rect) {
    let shadow_style = Style::default().fg(palette::SHADOW).bg(palette::SHADOW);

    let right_x = modal_rect.right();
    for y in modal_rect.y.saturating_add(1)..=modal_rect.bottom() {
        if let Some(cell) = buf.cell_mut((right_x, y)) {
            cell.set_char(' ').set_style(shadow_style);
        }
    }

    let bottom_y = modal_rect.bottom();
    for x in modal_rect.x.saturating_add(1)..=modal_rect.right() {
        if let Some(cell) = buf.cell_mut((x, bottom_y)) {
            cell.set_char(' ').set_style(shadow_style);
        }
    }
}

/// Draw `symbol` at `(x, y)` only if every cell it covers is blank and
/// inside `bounds`. Returns whether it was drawn.
pub fn draw_over_blank(
    buf: &mut Buffer,
    bounds: Rect,
    x: u16,
    y: u16,
    symbol: &str,
    style: Style,
) -> bool {
    let width = symbol.width().max(1) as u16;
    let fits = y >= bounds.top()
        && y < bounds.bottom()
        && x >= bounds.left()
        && x.saturating_add(width) <= bounds.right();
    if !fits {
        return false;
    }

    let blank = (x..x + width).all(|cx| {
        buf.cell((cx, y))
            .map(|cell| cell.symbol() == " ")
            .unwrap_or(false)
    });
    if !blank {
        return false;
    }

    buf.set_string(x, y, symbol, style);
    true
}
