//! smartnotes - A small terminal note manager with tags.
//!
//! Notes are kept in memory as an ordered title to note mapping and written
//! to a JSON file after every change. The crate follows a layered layout:
//! domain entities and ports, application use cases, infrastructure
//! adapters and a ratatui presentation layer.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing use cases and DTOs.
pub mod application;
/// Domain layer containing entities, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing adapters for storage and configuration.
pub mod infrastructure;
/// Presentation layer containing UI components and event handling.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "smartnotes";
