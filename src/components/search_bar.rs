use crate::app::state::{AppMode, AppState};
use crate::theme::{glyphs, Theme};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

pub struct SearchBar<'a> {
    pub state: &'a AppState<'a>,
    pub theme: &'a Theme,
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let focused = self.state.mode == AppMode::SearchInput;
        let (border_style, title_style) = if focused {
            (self.theme.border_focus, self.theme.header_active)
        } else {
            (self.theme.border, self.theme.header_item)
        };

        let title = if self.state.is_searching() {
            Span::styled(" SEARCHING ", self.theme.header_warn)
        } else {
            Span::styled(format!(" {} SEARCH ", glyphs::SEARCH), title_style)
        };

        let mut block = Block::default()
            .title(Line::from(vec![Span::raw(" "), title, Span::raw(" ")]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style);

        if focused {
            if let Some(index) = self.state.search.recent_index {
                block = block.title_bottom(Line::from(vec![
                    Span::raw(" "),
                    Span::styled(
                        format!("recent {}/{}", index + 1, self.state.search.recent.len()),
                        self.theme.dimmed,
                    ),
                    Span::raw(" "),
                ]));
            }
        }

        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let text = self.state.search.text();
        if text.is_empty() && !focused {
            Paragraph::new(Line::from(Span::styled(
                "Press / and type a category, e.g. \"ocean\" or \"sunset\"",
                self.theme.dimmed,
            )))
            .render(inner, buf);
        } else {
            Widget::render(&self.state.search.input, inner, buf);
        }
    }
}
