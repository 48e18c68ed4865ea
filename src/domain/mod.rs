//! Domain layer - Clipboard entry model
//!
//! Contains value objects only.
//! This layer has no dependencies on external systems.

pub mod entry;

// Re-export common types
pub use entry::{ClipEntry, ContentKind};
