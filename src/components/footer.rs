use crate::app::state::{AppMode, AppState, ErrorSeverity, StatusKind};
use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub struct Footer<'a> {
    pub state: &'a AppState<'a>,
    pub theme: &'a Theme,
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let state = self.state;

        // Status segment: error > loading > message > ready.
        let status_span = if let Some(error) = &state.last_error {
            let style = match error.severity {
                ErrorSeverity::Warning => theme.status_warn,
                ErrorSeverity::Error => theme.status_error,
            };
            let timestamp = error.timestamp.format("%H:%M:%S");
            Span::styled(format!("  {} ({timestamp})  ", error.message), style)
        } else if state.is_searching() {
            let frame = SPINNER_FRAMES[state.frame_count as usize % SPINNER_FRAMES.len()];
            Span::styled(format!("  {frame} SEARCHING  "), theme.status_info)
        } else if let Some(line) = state.status.current() {
            let style = match line.kind {
                StatusKind::Info => theme.status_info,
                StatusKind::Success => theme.status_ready,
                StatusKind::Error => theme.status_error,
            };
            Span::styled(format!("  {}  ", line.text), style)
        } else {
            Span::styled("  READY  ", theme.status_info)
        };

        let mut spans = vec![status_span, Span::raw(" ")];

        let mut current_width = spans
            .iter()
            .map(ratatui::prelude::Span::width)
            .sum::<usize>();
        let available_width = area.width.saturating_sub(2) as usize;

        for (key, desc) in hints_for(state.mode) {
            let key_str = format!(" {key} ");
            let desc_str = format!(" {desc} ");
            let item_width = key_str.len() + desc_str.chars().count();
            if current_width + item_width + 1 > available_width {
                break;
            }
            spans.push(Span::styled(key_str, theme.footer_segment_key));
            spans.push(Span::styled(desc_str, theme.footer_segment_val));
            spans.push(Span::raw(" "));
            current_width += item_width + 1;
        }

        if area.width > 70 && state.mode == AppMode::Normal {
            spans.push(Span::styled("theme: ", theme.footer_group_name));
            spans.push(Span::styled(
                state.palette_type.label(),
                theme.footer_group_name,
            ));
        }

        Paragraph::new(Line::from(spans))
            .style(theme.footer)
            .render(area, buf);
    }
}

fn hints_for(mode: AppMode) -> &'static [(&'static str, &'static str)] {
    match mode {
        AppMode::Normal => &[
            ("/", "search"),
            ("j/k", "palette"),
            ("h/l", "swatch"),
            ("y", "copy"),
            ("T", "theme"),
            ("?", "help"),
            ("q", "quit"),
        ],
        AppMode::SearchInput => &[
            ("Enter", "search"),
            ("↑/↓", "recent"),
            ("Esc", "cancel"),
        ],
        AppMode::Loading => &[("q", "quit")],
        AppMode::Help => &[("Esc", "close")],
        AppMode::ThemeSelection => &[("j/k", "select"), ("Enter", "apply"), ("Esc", "cancel")],
    }
}
