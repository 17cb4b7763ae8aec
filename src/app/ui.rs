use crate::app::state::{AppMode, AppState};
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::modals::help::HelpModal;
use crate::components::modals::helpers::dim_area;
use crate::components::modals::theme_selection::ThemeSelectionModal;
use crate::components::palette_grid::PaletteGrid;
use crate::components::search_bar::SearchBar;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

pub struct AppLayout {
    pub header: Rect,
    pub search: Rect,
    pub body: Rect,
    pub footer: Rect,
}

#[must_use]
pub fn get_layout(area: Rect) -> AppLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Length(3), // Search bar
            Constraint::Min(0),    // Results
            Constraint::Length(1), // Footer
        ])
        .split(area);

    AppLayout {
        header: rows[0],
        search: rows[1],
        body: rows[2],
        footer: rows[3],
    }
}

/// Inner area of the results block; the mouse handler maps clicks against
/// the same rect the grid renders into.
#[must_use]
pub fn results_inner(body: Rect) -> Rect {
    body.inner(Margin {
        horizontal: 1,
        vertical: 1,
    })
}

pub fn draw(f: &mut Frame, app_state: &mut AppState) {
    if f.area().width == 0 || f.area().height == 0 {
        return;
    }

    let theme = app_state.theme.clone();
    let layout = get_layout(f.area());

    if layout.header.width > 0 && layout.header.height > 0 {
        f.render_widget(
            Header {
                state: app_state,
                theme: &theme,
                terminal_width: f.area().width,
            },
            layout.header,
        );
    }

    if layout.search.width > 0 && layout.search.height > 0 {
        f.render_widget(
            SearchBar {
                state: app_state,
                theme: &theme,
            },
            layout.search,
        );
    }

    if layout.body.width > 0 && layout.body.height > 0 {
        draw_body(f, app_state, &theme, layout.body);
    }

    if layout.footer.width > 0 && layout.footer.height > 0 {
        f.render_widget(
            Footer {
                state: app_state,
                theme: &theme,
            },
            layout.footer,
        );
    }

    // Overlays
    let area = f.area();
    match app_state.mode {
        AppMode::Help => {
            dim_area(f.buffer_mut(), area);
            f.render_widget(HelpModal { theme: &theme }, area);
        }
        AppMode::ThemeSelection => {
            if let Some(selection) = &app_state.theme_selection {
                dim_area(f.buffer_mut(), area);
                f.render_widget(
                    ThemeSelectionModal {
                        theme: &theme,
                        state: selection,
                    },
                    area,
                );
            }
        }
        _ => {}
    }
}

fn draw_body(f: &mut Frame, app_state: &AppState, theme: &crate::theme::Theme, body: Rect) {
    let focused = app_state.mode == AppMode::Normal && !app_state.results.is_empty();
    let (border_style, title_style) = if focused {
        (theme.border_focus, theme.header_active)
    } else {
        (theme.border, theme.header_item)
    };

    let mut title_spans = vec![
        Span::raw(" "),
        Span::styled("RESULTS", title_style),
        Span::raw(" "),
    ];
    if let Some(category) = &app_state.results.category {
        title_spans.push(Span::styled(format!(" {category} "), theme.category_badge));
        title_spans.push(Span::raw(" "));
    }

    let block = Block::default()
        .title(Line::from(title_spans))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style);

    let inner = block.inner(body);
    f.render_widget(block, body);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    if app_state.is_searching() {
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled("Searching palettes…", theme.list_item)),
        ];
        f.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center),
            inner,
        );
        return;
    }

    if app_state.results.is_empty() {
        draw_empty_state(f, theme, inner);
        return;
    }

    f.render_widget(
        PaletteGrid {
            results: &app_state.results,
            theme,
        },
        inner,
    );
}

fn draw_empty_state(f: &mut Frame, theme: &crate::theme::Theme, area: Rect) {
    let logo_ascii = [
        r" ___ _ _ ___ _____ ___ _  _ ",
        r"/ __| | | / __|_   _/ __| || |",
        r"\__ \ \_/ \__ \ | || (__| __ |",
        r"|___/\___/|___/ |_| \___|_||_|",
    ];

    let mut lines: Vec<Line> = logo_ascii
        .iter()
        .map(|l| Line::from(Span::styled(*l, theme.dimmed)))
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Search a category to see its palettes: ", theme.list_item),
        Span::styled(
            "sunset, ocean, forest, pastel, vibrant, cool",
            theme.highlight,
        ),
    ]));

    let hint = Paragraph::new(lines).alignment(Alignment::Center);

    let logo_height = 6;
    let centered_area = Rect {
        x: area.x,
        y: (area.y + area.height / 2).saturating_sub(logo_height / 2),
        width: area.width,
        height: logo_height.min(area.height),
    };
    if centered_area.width > 0 && centered_area.height > 0 {
        f.render_widget(hint, centered_area);
    }
}
