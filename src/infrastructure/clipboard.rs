use crate::domain::clipboard::ClipboardWriter;
use anyhow::{Context, Result};

/// `ClipboardWriter` backed by the system clipboard via `arboard`.
///
/// A fresh handle is opened per write: on some platforms (and in headless
/// CI) clipboard initialization can fail, and holding a long-lived handle
/// would turn that into a startup error instead of a recoverable per-copy
/// one.
pub struct SystemClipboard;

impl ClipboardWriter for SystemClipboard {
    fn set_text(&self, text: &str) -> Result<()> {
        let mut clipboard = arboard::Clipboard::new().context("clipboard init")?;
        clipboard
            .set_text(text.to_owned())
            .context("clipboard write")?;
        Ok(())
    }
}
