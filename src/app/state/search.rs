use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use std::ops::{Deref, DerefMut};
use tui_textarea::{CursorMove, TextArea};

/// Searches remembered for Up/Down cycling in the search bar.
pub const MAX_RECENT: usize = 10;

/// Single-line text area for the search query.
///
/// `TextArea` itself is neither `Clone` nor `PartialEq`, so the wrapper
/// supplies both in terms of content and cursor.
#[derive(Default)]
pub struct SearchInput<'a>(pub TextArea<'a>);

impl SearchInput<'_> {
    /// Current query text. Multi-line paste is flattened; the query is
    /// logically one line.
    #[must_use]
    pub fn text(&self) -> String {
        self.0.lines().join(" ")
    }

    pub fn set_text(&mut self, text: &str) {
        self.0 = TextArea::new(vec![text.to_string()]);
        self.0.move_cursor(CursorMove::End);
    }
}

impl Clone for SearchInput<'_> {
    fn clone(&self) -> Self {
        let mut area = TextArea::new(self.0.lines().to_vec());
        let (row, col) = self.0.cursor();
        area.move_cursor(CursorMove::Jump(row as u16, col as u16));
        Self(area)
    }
}

impl std::fmt::Debug for SearchInput<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchInput")
            .field("lines", &self.0.lines())
            .field("cursor", &self.0.cursor())
            .finish()
    }
}

impl PartialEq for SearchInput<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.0.lines() == other.0.lines() && self.0.cursor() == other.0.cursor()
    }
}

impl<'a> Deref for SearchInput<'a> {
    type Target = TextArea<'a>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for SearchInput<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl Widget for &SearchInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Widget::render(&self.0, area, buf);
    }
}

/// The search bar's input plus its recent-query history.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchState<'a> {
    pub input: SearchInput<'a>,
    pub recent: Vec<String>,
    pub recent_index: Option<usize>,
    /// Most recently submitted (non-empty) query, shown alongside results.
    pub last_query: Option<String>,
}

impl SearchState<'_> {
    #[must_use]
    pub fn with_recent(recent: Vec<String>) -> Self {
        Self {
            recent,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn text(&self) -> String {
        self.input.text()
    }

    /// Record a submitted query at the front of the history, deduplicated
    /// and capped at [`MAX_RECENT`].
    pub fn remember(&mut self, query: &str) {
        if let Some(pos) = self.recent.iter().position(|q| q == query) {
            self.recent.remove(pos);
        }
        self.recent.insert(0, query.to_string());
        self.recent.truncate(MAX_RECENT);
        self.recent_index = None;
    }

    /// Cycle to the next-older recent query, filling the input.
    pub fn recall_prev(&mut self) {
        if self.recent.is_empty() {
            return;
        }
        let next = match self.recent_index {
            Some(i) => (i + 1) % self.recent.len(),
            None => 0,
        };
        self.recent_index = Some(next);
        let text = self.recent[next].clone();
        self.input.set_text(&text);
    }

    /// Cycle back toward the most recent query.
    pub fn recall_next(&mut self) {
        if self.recent.is_empty() {
            return;
        }
        let next = match self.recent_index {
            Some(0) | None => self.recent.len() - 1,
            Some(i) => i - 1,
        };
        self.recent_index = Some(next);
        let text = self.recent[next].clone();
        self.input.set_text(&text);
    }
}
