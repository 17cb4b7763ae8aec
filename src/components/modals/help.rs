use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use super::helpers::{centered_rect_fixed_height, draw_drop_shadow};

const BINDINGS: [(&str, &str); 10] = [
    ("/ or s", "focus the search bar"),
    ("Enter", "run the search (in the search bar)"),
    ("Up/Down", "cycle recent searches (in the search bar)"),
    ("j / k", "previous / next palette"),
    ("h / l", "previous / next swatch"),
    ("y or Enter", "copy the selected swatch"),
    ("click", "copy the swatch under the mouse"),
    ("T", "choose a color theme"),
    ("?", "toggle this overlay"),
    ("q", "quit"),
];

pub struct HelpModal<'a> {
    pub theme: &'a Theme,
}

impl Widget for HelpModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let height = BINDINGS.len() as u16 + 4;
        let modal_area = centered_rect_fixed_height(50, height, area);
        if modal_area.width == 0 || modal_area.height == 0 {
            return;
        }

        draw_drop_shadow(buf, modal_area, area);
        Clear.render(modal_area, buf);

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(" HELP ", self.theme.header_active),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_focus);

        let mut lines = vec![Line::from("")];
        for (key, desc) in BINDINGS {
            lines.push(Line::from(vec![
                Span::styled(format!("  {key:<12}"), self.theme.footer_segment_key),
                Span::raw(" "),
                Span::styled(desc, self.theme.list_item),
            ]));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::raw(" Press "),
            Span::styled("Esc", self.theme.footer_segment_key),
            Span::raw(" to close "),
        ]));

        Paragraph::new(lines).block(block).render(modal_area, buf);
    }
}
