//! Clipboard accessor use case

use crate::application::ports::{ClipboardError, SharedClipboard};
use crate::infrastructure::AppContext;

/// Uniform interface for reading and writing plain-text clipboard content.
///
/// The accessor acquires its clipboard service handle once, at construction,
/// from the application-wide context, and holds it for its lifetime. Each
/// operation is stateless beyond that handle and delegates directly to the
/// platform service.
///
/// If the host platform provides no clipboard service, construction still
/// succeeds; every subsequent call fails with
/// [`ClipboardError::Unavailable`].
pub struct ClipboardAccessor {
    service: Option<SharedClipboard>,
}

impl ClipboardAccessor {
    /// Create an accessor bound to the context's clipboard service
    pub fn new(context: &AppContext) -> Self {
        Self {
            service: context.clipboard_service(),
        }
    }

    fn service(&self) -> Result<&SharedClipboard, ClipboardError> {
        self.service.as_ref().ok_or_else(|| {
            ClipboardError::Unavailable("no clipboard service on this platform".to_string())
        })
    }

    /// Check whether the clipboard currently holds a plain-text entry.
    ///
    /// Returns false when the clipboard is empty or holds an entry of a
    /// different content type (e.g. an image). No side effects.
    pub fn has_text(&self) -> Result<bool, ClipboardError> {
        self.service()?.borrow_mut().has_text()
    }

    /// Read the text content of the clipboard's primary entry.
    ///
    /// Fails with [`ClipboardError::Empty`] when the clipboard holds no text
    /// entry; callers should check [`has_text`] first.
    ///
    /// [`has_text`]: ClipboardAccessor::has_text
    pub fn get_text(&self) -> Result<String, ClipboardError> {
        self.service()?.borrow_mut().get_text()
    }

    /// Replace the clipboard's primary entry with a plain-text entry
    /// containing the given text, overwriting whatever was there before.
    pub fn set_text(&self, text: &str) -> Result<(), ClipboardError> {
        self.service()?.borrow_mut().set_text(text)
    }
}
