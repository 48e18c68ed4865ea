//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the clipboard service port,
//! integrating with the host platform's clipboard APIs, and the
//! application-wide context they are wired into.

pub mod clipboard;
pub mod context;

// Re-export adapters
pub use clipboard::{
    create_clipboard, detect_clipboard_backend, ArboardClipboard, ClipboardBackend,
    ClipboardBackendPreference, MemoryClipboard,
};
#[cfg(target_os = "linux")]
pub use clipboard::WaylandClipboard;
pub use context::AppContext;
