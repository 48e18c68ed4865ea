//! Application layer - The clipboard accessor and its port interface
//!
//! Contains the core clipboard operations and the trait definition
//! for host clipboard service interaction.

pub mod accessor;
pub mod ports;

// Re-export use cases
pub use accessor::ClipboardAccessor;
