//! Clipboard integration.

use crate::error::Result;
use arboard::Clipboard;

/// Copy text to the system clipboard.
pub fn copy_text(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text)?;
    Ok(())
}
