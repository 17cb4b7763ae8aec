use crate::app::state::ResultsState;
use crate::domain::models::parse_hex;
use crate::theme::{contrast_color, Theme};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Widget},
};

/// One card: 2 border rows + 3 swatch rows.
pub const CARD_HEIGHT: u16 = 5;
/// One swatch cell, wide enough for a bracketed `#RRGGBB` label.
pub const SWATCH_WIDTH: u16 = 11;

/// Rect of card `index` inside the grid's inner area.
#[must_use]
pub fn card_area(inner: Rect, index: usize) -> Rect {
    Rect {
        x: inner.x,
        y: inner.y.saturating_add(index as u16 * CARD_HEIGHT),
        width: inner.width,
        height: CARD_HEIGHT,
    }
}

/// Map a terminal coordinate to the `(card, swatch)` under it, if any.
/// Used by the mouse handler; must agree with the render layout below.
#[must_use]
pub fn swatch_hit(results: &ResultsState, inner: Rect, x: u16, y: u16) -> Option<(usize, usize)> {
    for (i, palette) in results.palettes.iter().enumerate() {
        let card = card_area(inner, i);
        if card.bottom() > inner.bottom() {
            return None;
        }
        // Swatch rows are the card interior, inside its border.
        if y >= card.y + 1 && y < card.y + CARD_HEIGHT - 1 {
            if x < card.x + 1 {
                return None;
            }
            let j = ((x - card.x - 1) / SWATCH_WIDTH) as usize;
            let row_end = card.x + 1 + palette.colors.len() as u16 * SWATCH_WIDTH;
            if j < palette.colors.len() && x < row_end && x < card.right().saturating_sub(1) {
                return Some((i, j));
            }
            return None;
        }
    }
    None
}

pub struct PaletteGrid<'a> {
    pub results: &'a ResultsState,
    pub theme: &'a Theme,
}

impl Widget for PaletteGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (i, palette) in self.results.palettes.iter().enumerate() {
            let card = card_area(area, i);
            if card.bottom() > area.bottom() {
                break;
            }

            let is_selected_card = i == self.results.selected_card;
            let border_style = if is_selected_card {
                self.theme.border_focus
            } else {
                self.theme.border
            };

            let block = Block::default()
                .title(Line::from(vec![
                    Span::raw(" "),
                    Span::styled(palette.name.clone(), self.theme.card_title),
                    Span::styled(
                        format!(" · {} colors ", palette.colors.len()),
                        self.theme.dimmed,
                    ),
                ]))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(border_style);

            let card_inner = block.inner(card);
            block.render(card, buf);

            for (j, color) in palette.colors.iter().enumerate() {
                let cell = Rect {
                    x: card_inner.x + j as u16 * SWATCH_WIDTH,
                    y: card_inner.y,
                    width: SWATCH_WIDTH,
                    height: card_inner.height,
                };
                let cell = cell.intersection(card_inner);
                if cell.width == 0 || cell.height == 0 {
                    continue;
                }

                // Unparseable colors get a neutral surface instead of a crash.
                let bg = parse_hex(color)
                    .map(|(r, g, b)| Color::Rgb(r, g, b))
                    .unwrap_or(Color::DarkGray);
                let fill = Style::default().bg(bg);
                for y in cell.top()..cell.bottom() {
                    for x in cell.left()..cell.right() {
                        buf[(x, y)].set_style(fill).set_symbol(" ");
                    }
                }

                // The hex value doubles as the tooltip: always visible,
                // bracketed and bold under the cursor.
                let is_cursor = is_selected_card && j == self.results.selected_swatch;
                let label = if is_cursor {
                    format!("[{color}]")
                } else {
                    format!(" {color} ")
                };
                let mut label_style = Style::default().bg(bg).fg(contrast_color(bg));
                if is_cursor {
                    label_style = label_style.add_modifier(Modifier::BOLD);
                }

                let label_y = cell.y + cell.height / 2;
                let label_x = cell.x + (cell.width.saturating_sub(label.len() as u16)) / 2;
                buf.set_stringn(
                    label_x,
                    label_y,
                    &label,
                    (cell.right() - label_x) as usize,
                    label_style,
                );
            }
        }
    }
}
