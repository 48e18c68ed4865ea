//! TermClip - plain-text system clipboard access for terminal frontends
//!
//! This crate provides a small, uniform interface for reading and writing
//! plain-text clipboard content regardless of the underlying platform API.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: The clipboard entry value object and its content-type tag
//! - **Application**: The [`ClipboardAccessor`] use case and the
//!   `ClipboardService` port interface (trait)
//! - **Infrastructure**: Adapter implementations (arboard, wl-clipboard,
//!   in-memory) and the application-wide context they are wired into
//!
//! # Usage
//!
//! ```no_run
//! use termclip::application::ClipboardAccessor;
//! use termclip::infrastructure::AppContext;
//!
//! let context = AppContext::new();
//! let clipboard = ClipboardAccessor::new(&context);
//!
//! clipboard.set_text("hello")?;
//! if clipboard.has_text()? {
//!     println!("{}", clipboard.get_text()?);
//! }
//! # Ok::<(), termclip::application::ports::ClipboardError>(())
//! ```
//!
//! [`ClipboardAccessor`]: application::ClipboardAccessor

pub mod application;
pub mod domain;
pub mod infrastructure;
