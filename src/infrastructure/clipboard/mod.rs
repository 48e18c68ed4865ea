//! Clipboard infrastructure module
//!
//! Provides cross-platform clipboard support using arboard (primary)
//! or the wl-clipboard tools on pure Wayland sessions, with backend
//! detection and selection by preference.

mod arboard;
mod memory;
#[cfg(target_os = "linux")]
mod wayland;

pub use arboard::ArboardClipboard;
pub use memory::MemoryClipboard;
#[cfg(target_os = "linux")]
pub use wayland::WaylandClipboard;

use std::fmt;
use std::str::FromStr;

#[cfg(target_os = "linux")]
use std::env;
#[cfg(target_os = "linux")]
use std::process::{Command, Stdio};

use crate::application::ports::{ClipboardError, ClipboardService};

/// Available clipboard backends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardBackend {
    /// Cross-platform arboard library
    Arboard,
    /// Linux: wl-clipboard tools (Wayland native)
    #[cfg(target_os = "linux")]
    Wayland,
    /// In-process memory, no host clipboard involved
    Memory,
}

impl fmt::Display for ClipboardBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClipboardBackend::Arboard => write!(f, "arboard"),
            #[cfg(target_os = "linux")]
            ClipboardBackend::Wayland => write!(f, "wayland"),
            ClipboardBackend::Memory => write!(f, "memory"),
        }
    }
}

/// User preference for clipboard backend selection.
///
/// - All platforms support `Auto` (the default), `Arboard`, and `Memory`.
/// - Linux additionally supports `Wayland`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClipboardBackendPreference {
    /// Auto-detect the best backend for the current session (default)
    #[default]
    Auto,
    /// Use the cross-platform arboard library
    Arboard,
    /// Use the wl-clipboard tools (Linux only, Wayland native)
    #[cfg(target_os = "linux")]
    Wayland,
    /// Use the in-memory backend (tests, headless environments)
    Memory,
}

impl fmt::Display for ClipboardBackendPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClipboardBackendPreference::Auto => write!(f, "auto"),
            ClipboardBackendPreference::Arboard => write!(f, "arboard"),
            #[cfg(target_os = "linux")]
            ClipboardBackendPreference::Wayland => write!(f, "wayland"),
            ClipboardBackendPreference::Memory => write!(f, "memory"),
        }
    }
}

/// Error type for parsing clipboard backend preference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseClipboardBackendError {
    pub value: String,
    pub valid_options: &'static str,
}

impl fmt::Display for ParseClipboardBackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid clipboard backend '{}'. Valid options: {}",
            self.value, self.valid_options
        )
    }
}

impl std::error::Error for ParseClipboardBackendError {}

impl FromStr for ClipboardBackendPreference {
    type Err = ParseClipboardBackendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(ClipboardBackendPreference::Auto),
            "arboard" => Ok(ClipboardBackendPreference::Arboard),
            #[cfg(target_os = "linux")]
            "wayland" => Ok(ClipboardBackendPreference::Wayland),
            "memory" => Ok(ClipboardBackendPreference::Memory),
            _ => Err(ParseClipboardBackendError {
                value: s.to_string(),
                #[cfg(target_os = "linux")]
                valid_options: "auto, arboard, wayland, memory",
                #[cfg(not(target_os = "linux"))]
                valid_options: "auto, arboard, memory",
            }),
        }
    }
}

/// Check if a tool binary is available using `which`
#[cfg(target_os = "linux")]
fn is_tool_available(tool: &str) -> bool {
    Command::new("which")
        .arg(tool)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

/// Check if both wl-clipboard tools are installed
#[cfg(target_os = "linux")]
fn is_wl_clipboard_available() -> bool {
    is_tool_available("wl-copy") && is_tool_available("wl-paste")
}

/// Detect the best clipboard backend for the current session
///
/// On Windows/macOS: Always uses arboard.
/// On Linux: wl-clipboard on a pure Wayland session (no X11 display),
/// arboard otherwise.
pub fn detect_clipboard_backend() -> ClipboardBackend {
    #[cfg(target_os = "linux")]
    {
        let pure_wayland =
            env::var_os("WAYLAND_DISPLAY").is_some() && env::var_os("DISPLAY").is_none();
        if pure_wayland && is_wl_clipboard_available() {
            return ClipboardBackend::Wayland;
        }
    }

    ClipboardBackend::Arboard
}

/// Create a clipboard service using the specified preference.
///
/// Returns the service and the selected backend, or an error when the
/// requested backend cannot be set up.
pub fn create_clipboard(
    preference: ClipboardBackendPreference,
) -> Result<(Box<dyn ClipboardService>, ClipboardBackend), ClipboardError> {
    match preference {
        ClipboardBackendPreference::Auto => create_backend(detect_clipboard_backend()),
        ClipboardBackendPreference::Arboard => create_backend(ClipboardBackend::Arboard),
        #[cfg(target_os = "linux")]
        ClipboardBackendPreference::Wayland => {
            if is_wl_clipboard_available() {
                create_backend(ClipboardBackend::Wayland)
            } else {
                Err(ClipboardError::WlClipboardNotFound)
            }
        }
        ClipboardBackendPreference::Memory => create_backend(ClipboardBackend::Memory),
    }
}

/// Create a specific clipboard backend
fn create_backend(
    backend: ClipboardBackend,
) -> Result<(Box<dyn ClipboardService>, ClipboardBackend), ClipboardError> {
    let service: Box<dyn ClipboardService> = match backend {
        ClipboardBackend::Arboard => Box::new(ArboardClipboard::new()?),
        #[cfg(target_os = "linux")]
        ClipboardBackend::Wayland => Box::new(WaylandClipboard::new()),
        ClipboardBackend::Memory => Box::new(MemoryClipboard::new()),
    };
    Ok((service, backend))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clipboard_backend_display() {
        assert_eq!(ClipboardBackend::Arboard.to_string(), "arboard");
        assert_eq!(ClipboardBackend::Memory.to_string(), "memory");
        #[cfg(target_os = "linux")]
        assert_eq!(ClipboardBackend::Wayland.to_string(), "wayland");
    }

    #[test]
    fn clipboard_backend_preference_display() {
        assert_eq!(ClipboardBackendPreference::Auto.to_string(), "auto");
        assert_eq!(ClipboardBackendPreference::Arboard.to_string(), "arboard");
        assert_eq!(ClipboardBackendPreference::Memory.to_string(), "memory");
        #[cfg(target_os = "linux")]
        assert_eq!(ClipboardBackendPreference::Wayland.to_string(), "wayland");
    }

    #[test]
    fn clipboard_backend_preference_from_str() {
        assert_eq!(
            "auto".parse::<ClipboardBackendPreference>().unwrap(),
            ClipboardBackendPreference::Auto
        );
        assert_eq!(
            "ARBOARD".parse::<ClipboardBackendPreference>().unwrap(),
            ClipboardBackendPreference::Arboard
        );
        assert_eq!(
            "memory".parse::<ClipboardBackendPreference>().unwrap(),
            ClipboardBackendPreference::Memory
        );
        #[cfg(target_os = "linux")]
        assert_eq!(
            "wayland".parse::<ClipboardBackendPreference>().unwrap(),
            ClipboardBackendPreference::Wayland
        );
    }

    #[test]
    fn clipboard_backend_preference_from_str_invalid() {
        let err = "invalid".parse::<ClipboardBackendPreference>().unwrap_err();
        assert_eq!(err.value, "invalid");
    }

    #[test]
    fn clipboard_backend_preference_default() {
        assert_eq!(
            ClipboardBackendPreference::default(),
            ClipboardBackendPreference::Auto
        );
    }

    #[test]
    fn memory_preference_always_creates() {
        let (_, backend) = create_clipboard(ClipboardBackendPreference::Memory).unwrap();
        assert_eq!(backend, ClipboardBackend::Memory);
    }
}
