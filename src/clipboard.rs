//! Clipboard access

use anyhow::Result;

/// Writes text to a clipboard
#[cfg_attr(test, mockall::automock)]
pub trait ClipboardWriter {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// The system clipboard via arboard
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl ClipboardWriter for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        let mut clipboard = arboard::Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }
}
