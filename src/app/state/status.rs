use std::time::{Duration, Instant};

/// How long a copy confirmation stays on screen before reverting.
pub const TRANSIENT_TTL: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Error,
}

/// One line of user-facing feedback with its display color.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusLine {
    pub text: String,
    pub kind: StatusKind,
}

impl StatusLine {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: StatusKind::Info,
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: StatusKind::Success,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: StatusKind::Error,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct PendingRevert {
    deadline: Instant,
    previous: Option<StatusLine>,
}

/// The single message slot of the UI plus the revert bookkeeping for
/// transient confirmations.
///
/// The revert is a stored deadline evaluated on tick, not a detached
/// timer: replacing or clearing the slot drops the deadline, so a stale
/// revert can never overwrite a newer message.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StatusState {
    current: Option<StatusLine>,
    revert: Option<PendingRevert>,
}

impl StatusState {
    #[must_use]
    pub fn current(&self) -> Option<&StatusLine> {
        self.current.as_ref()
    }

    /// Replace the message and cancel any pending revert.
    pub fn set(&mut self, line: StatusLine) {
        self.revert = None;
        self.current = Some(line);
    }

    /// Clear the message and cancel any pending revert.
    pub fn clear(&mut self) {
        self.revert = None;
        self.current = None;
    }

    /// Show `line` for `ttl`, then fall back to what was current before.
    ///
    /// A transient shown while another transient is still pending inherits
    /// the older one's baseline, so back-to-back copies revert to the
    /// message that preceded the first copy rather than to a confirmation.
    pub fn set_transient(&mut self, line: StatusLine, now: Instant, ttl: Duration) {
        let previous = match self.revert.take() {
            Some(pending) => pending.previous,
            None => self.current.take(),
        };
        self.current = Some(line);
        self.revert = Some(PendingRevert {
            deadline: now + ttl,
            previous,
        });
    }

    /// Apply a due revert, if any.
    pub fn tick(&mut self, now: Instant) {
        if self.revert.as_ref().is_some_and(|p| now >= p.deadline) {
            if let Some(pending) = self.revert.take() {
                self.current = pending.previous;
            }
        }
    }
}
