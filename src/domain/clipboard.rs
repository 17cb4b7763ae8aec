use anyhow::Result;

/// Platform clipboard seam.
///
/// Writes are fire-and-forget from the controller's point of view; a
/// failure must never take the app down, it only surfaces as a transient
/// status message.
#[cfg_attr(test, mockall::automock)]
pub trait ClipboardWriter: Send + Sync {
    fn set_text(&self, text: &str) -> Result<()>;
}
