//! Cross-platform clipboard adapter using arboard
//!
//! Works on Windows, macOS, and Linux (X11/Wayland).

use crate::application::ports::{ClipboardError, ClipboardService};

/// Cross-platform clipboard adapter using arboard
///
/// Holds the platform clipboard handle for the adapter's lifetime.
pub struct ArboardClipboard {
    clip: arboard::Clipboard,
}

impl ArboardClipboard {
    /// Create a new arboard clipboard adapter.
    ///
    /// Fails with [`ClipboardError::Unavailable`] when the platform
    /// clipboard handle cannot be acquired (e.g. no display server).
    pub fn new() -> Result<Self, ClipboardError> {
        let clip = arboard::Clipboard::new()
            .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        Ok(Self { clip })
    }
}

impl ClipboardService for ArboardClipboard {
    fn has_text(&mut self) -> Result<bool, ClipboardError> {
        // arboard exposes no separate "has" query; probing the text content
        // distinguishes a text entry from an empty or non-text clipboard.
        match self.clip.get_text() {
            Ok(_) => Ok(true),
            Err(arboard::Error::ContentNotAvailable) => Ok(false),
            Err(e) => Err(ClipboardError::ReadFailed(e.to_string())),
        }
    }

    fn get_text(&mut self) -> Result<String, ClipboardError> {
        self.clip.get_text().map_err(|e| match e {
            arboard::Error::ContentNotAvailable => ClipboardError::Empty,
            e => ClipboardError::ReadFailed(e.to_string()),
        })
    }

    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.clip
            .set_text(text)
            .map_err(|e| ClipboardError::WriteFailed(e.to_string()))
    }
}
