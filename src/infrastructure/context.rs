//! Application-wide context
//!
//! Owns the process-wide clipboard service handle and hands out shared
//! references to it. The real clipboard belongs to the host operating
//! system; this is only the wiring point between accessors and the
//! selected backend.

use std::cell::RefCell;
use std::rc::Rc;

use crate::application::ports::{ClipboardService, SharedClipboard};

use super::clipboard::{create_clipboard, ClipboardBackendPreference};

/// Application-wide context providing access to system services.
///
/// Construction never fails: when no clipboard backend can be set up, the
/// context simply holds no service and accessors surface the failure on
/// their first call.
pub struct AppContext {
    clipboard: Option<SharedClipboard>,
}

impl AppContext {
    /// Create a context with the auto-detected platform clipboard backend
    pub fn new() -> Self {
        Self::with_preference(ClipboardBackendPreference::default())
    }

    /// Create a context using the given backend preference
    pub fn with_preference(preference: ClipboardBackendPreference) -> Self {
        match create_clipboard(preference) {
            Ok((service, backend)) => {
                log::debug!("using {} clipboard backend", backend);
                Self {
                    clipboard: Some(Rc::new(RefCell::new(service))),
                }
            }
            Err(err) => {
                log::warn!("clipboard service unavailable: {}", err);
                Self { clipboard: None }
            }
        }
    }

    /// Create a context with no clipboard service at all
    pub fn headless() -> Self {
        Self { clipboard: None }
    }

    /// Create a context around a specific clipboard service (tests,
    /// embedders supplying their own backend)
    pub fn with_clipboard(service: impl ClipboardService + 'static) -> Self {
        let boxed: Box<dyn ClipboardService> = Box::new(service);
        Self {
            clipboard: Some(Rc::new(RefCell::new(boxed))),
        }
    }

    /// Get a shared handle to the clipboard service, if one exists
    pub fn clipboard_service(&self) -> Option<SharedClipboard> {
        self.clipboard.clone()
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::MemoryClipboard;

    #[test]
    fn headless_context_has_no_service() {
        let context = AppContext::headless();
        assert!(context.clipboard_service().is_none());
    }

    #[test]
    fn memory_preference_context_has_a_service() {
        let context = AppContext::with_preference(ClipboardBackendPreference::Memory);
        assert!(context.clipboard_service().is_some());
    }

    #[test]
    fn service_handles_point_at_the_same_backend() {
        let context = AppContext::with_clipboard(MemoryClipboard::new());
        let first = context.clipboard_service().unwrap();
        let second = context.clipboard_service().unwrap();
        assert!(Rc::ptr_eq(&first, &second));
    }
}
