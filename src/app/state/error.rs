use chrono::{DateTime, Local};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Warning,
    Error,
}

/// Structured record of an unexpected failure, kept alongside the plain
/// status line so the footer can show when it happened and how bad it is.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorState {
    pub message: String,
    pub detail: Option<String>,
    pub timestamp: DateTime<Local>,
    pub severity: ErrorSeverity,
}

impl ErrorState {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            detail: None,
            timestamp: Local::now(),
            severity: ErrorSeverity::Error,
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            detail: None,
            timestamp: Local::now(),
            severity: ErrorSeverity::Warning,
        }
    }

    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}
