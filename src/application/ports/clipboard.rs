//! Clipboard service port interface

use std::cell::RefCell;
use std::rc::Rc;

use thiserror::Error;

/// Clipboard errors
#[derive(Debug, Clone, Error)]
pub enum ClipboardError {
    #[error("Clipboard service unavailable: {0}")]
    Unavailable(String),

    #[error("Clipboard holds no text entry")]
    Empty,

    #[error("Failed to read from clipboard: {0}")]
    ReadFailed(String),

    #[error("Failed to write to clipboard: {0}")]
    WriteFailed(String),

    #[error("wl-copy/wl-paste not found. Please install wl-clipboard.")]
    WlClipboardNotFound,
}

/// Port for host clipboard service operations
///
/// One implementation per platform API; each method maps to a single atomic
/// platform operation. Methods take `&mut self` because the underlying
/// platform handles are not shareable; clipboard usage is expected to stay
/// on the GUI thread.
pub trait ClipboardService {
    /// Check whether the clipboard currently holds a plain-text entry.
    ///
    /// # Returns
    /// Ok(true) only if an entry exists and its declared content type is
    /// plain text. No side effects.
    fn has_text(&mut self) -> Result<bool, ClipboardError>;

    /// Read the text content of the clipboard's primary entry.
    ///
    /// # Returns
    /// The entry's text, or [`ClipboardError::Empty`] when the clipboard
    /// holds no text entry. Callers should check [`has_text`] first.
    ///
    /// [`has_text`]: ClipboardService::has_text
    fn get_text(&mut self) -> Result<String, ClipboardError>;

    /// Replace the clipboard's primary entry with a plain-text entry.
    ///
    /// # Arguments
    /// * `text` - The text to place on the clipboard
    ///
    /// # Returns
    /// Ok(()) on success; whatever was previously on the clipboard is
    /// overwritten.
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Blanket implementation for boxed clipboard services
impl ClipboardService for Box<dyn ClipboardService> {
    fn has_text(&mut self) -> Result<bool, ClipboardError> {
        self.as_mut().has_text()
    }

    fn get_text(&mut self) -> Result<String, ClipboardError> {
        self.as_mut().get_text()
    }

    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.as_mut().set_text(text)
    }
}

/// Shared handle to the process-wide clipboard service.
///
/// The host operating system owns the real clipboard; components hold only a
/// reference to the service, acquired once at construction. Single-threaded
/// (GUI-thread-bound) by design, hence `Rc<RefCell<..>>` rather than a lock.
pub type SharedClipboard = Rc<RefCell<Box<dyn ClipboardService>>>;
