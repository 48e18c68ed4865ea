//! In-memory clipboard adapter
//!
//! Deterministic backend holding a single entry in process memory.
//! Used by tests and as a fallback for headless environments where no
//! host clipboard service exists.

use crate::application::ports::{ClipboardError, ClipboardService};
use crate::domain::ClipEntry;

/// In-memory clipboard adapter holding at most one entry
pub struct MemoryClipboard {
    entry: Option<ClipEntry>,
}

impl MemoryClipboard {
    /// Create an empty in-memory clipboard
    pub fn new() -> Self {
        Self { entry: None }
    }

    /// Create an in-memory clipboard pre-populated with the given entry,
    /// modelling a host clipboard that already holds content
    pub fn with_entry(entry: ClipEntry) -> Self {
        Self { entry: Some(entry) }
    }

    /// Get the current primary entry, if any
    pub fn entry(&self) -> Option<&ClipEntry> {
        self.entry.as_ref()
    }
}

impl Default for MemoryClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipboardService for MemoryClipboard {
    fn has_text(&mut self) -> Result<bool, ClipboardError> {
        Ok(self.entry.as_ref().is_some_and(ClipEntry::is_text))
    }

    fn get_text(&mut self) -> Result<String, ClipboardError> {
        self.entry
            .as_ref()
            .and_then(ClipEntry::as_text)
            .map(str::to_owned)
            .ok_or(ClipboardError::Empty)
    }

    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.entry = Some(ClipEntry::text(text));
        Ok(())
    }
}
