use crate::app::state::AppState;
use crate::theme::{glyphs, Theme};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct Header<'a> {
    pub state: &'a AppState<'a>,
    pub theme: &'a Theme,
    pub terminal_width: u16,
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Segment background colors for separator transitions
        let logo_bg = self.theme.header_logo.bg.unwrap_or(Color::Reset);
        let query_bg = self.theme.header_item.bg.unwrap_or(Color::Reset);
        let stats_bg = self.theme.header_stats.bg.unwrap_or(Color::Reset);
        let base_bg = self.theme.header.bg.unwrap_or(Color::Reset);

        // Separator styles: fg = current segment bg, bg = next segment bg
        let sep_logo_query = Style::default().fg(logo_bg).bg(query_bg);
        let sep_query_stats = Style::default().fg(query_bg).bg(stats_bg);
        let sep_stats_base = Style::default().fg(stats_bg).bg(base_bg);

        let query_text = match &self.state.search.last_query {
            Some(query) => format!(" {} {query} ", glyphs::SEARCH),
            None => " no search yet ".to_string(),
        };

        let stats_text = match &self.state.results.category {
            Some(category) => format!(
                " {} {category} · {} palettes ",
                glyphs::SWATCH,
                self.state.results.palettes.len()
            ),
            None => " 6 categories ".to_string(),
        };

        let spans = vec![
            Span::styled(
                format!(" {} SWATCHBOOK ", glyphs::LOGO),
                self.theme.header_logo,
            ),
            Span::styled(glyphs::SEP_RIGHT, sep_logo_query),
            Span::styled(query_text, self.theme.header_item),
            Span::styled(glyphs::SEP_RIGHT, sep_query_stats),
            Span::styled(stats_text, self.theme.header_stats),
            Span::styled(glyphs::SEP_RIGHT, sep_stats_base),
            // Fill rest of line
            Span::styled(" ".repeat(self.terminal_width as usize), self.theme.header),
        ];

        Paragraph::new(Line::from(spans))
            .style(self.theme.header)
            .render(area, buf);
    }
}
