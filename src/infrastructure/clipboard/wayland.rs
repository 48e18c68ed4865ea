//! Wayland clipboard adapter using the wl-clipboard tools

use std::io::Write;
use std::process::{Command, Stdio};

use crate::application::ports::{ClipboardError, ClipboardService};
use crate::domain::ContentKind;

/// Wayland clipboard adapter using wl-copy / wl-paste
///
/// Used on pure Wayland sessions where no X11 display is available.
pub struct WaylandClipboard;

impl WaylandClipboard {
    /// Create a new Wayland clipboard adapter
    pub fn new() -> Self {
        Self
    }
}

impl Default for WaylandClipboard {
    fn default() -> Self {
        Self::new()
    }
}

fn spawn_read_error(e: std::io::Error) -> ClipboardError {
    if e.kind() == std::io::ErrorKind::NotFound {
        ClipboardError::WlClipboardNotFound
    } else {
        ClipboardError::ReadFailed(e.to_string())
    }
}

impl ClipboardService for WaylandClipboard {
    fn has_text(&mut self) -> Result<bool, ClipboardError> {
        let output = Command::new("wl-paste")
            .arg("--list-types")
            .stdin(Stdio::null())
            .output()
            .map_err(spawn_read_error)?;

        // wl-paste exits non-zero when the clipboard holds no selection
        if !output.status.success() {
            return Ok(false);
        }

        let types = String::from_utf8_lossy(&output.stdout);
        Ok(types
            .lines()
            .any(|t| t.trim().starts_with(ContentKind::PlainText.as_str())))
    }

    fn get_text(&mut self) -> Result<String, ClipboardError> {
        let output = Command::new("wl-paste")
            .args(["--no-newline", "--type", ContentKind::PlainText.as_str()])
            .stdin(Stdio::null())
            .output()
            .map_err(spawn_read_error)?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            if stderr.contains("No selection") || stderr.contains("No suitable type") {
                return Err(ClipboardError::Empty);
            }
            return Err(ClipboardError::ReadFailed(stderr.trim().to_string()));
        }

        String::from_utf8(output.stdout)
            .map_err(|e| ClipboardError::ReadFailed(e.to_string()))
    }

    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut child = Command::new("wl-copy")
            .arg("--type")
            .arg(ContentKind::PlainText.as_str())
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    ClipboardError::WlClipboardNotFound
                } else {
                    ClipboardError::WriteFailed(e.to_string())
                }
            })?;

        // Write text to stdin
        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(text.as_bytes())
                .map_err(|e| ClipboardError::WriteFailed(e.to_string()))?;
        }

        // Wait for process to complete
        let status = child
            .wait()
            .map_err(|e| ClipboardError::WriteFailed(e.to_string()))?;

        if !status.success() {
            return Err(ClipboardError::WriteFailed(format!(
                "wl-copy exited with status: {}",
                status
            )));
        }

        Ok(())
    }
}
