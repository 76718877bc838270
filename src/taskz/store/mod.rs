//! # Storage Layer
//!
//! Tasks are persisted as plain text, one task per line. The [`DataStore`] trait
//! only moves those lines in and out; turning them into tasks is the job of
//! [`codec`], which keeps the format in one place for every backend.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: a single text file, read and written whole.
//! - [`memory::InMemoryStore`]: rows kept in memory, for tests.
//!
//! ## Storage Format
//!
//! ```text
//! T;0;1;read the style guide
//! D;0;0;submit report;2026-03-31
//! E;1;0;team dinner;2026-01-15
//! ```
//!
//! Columns are: task type, done flag, high-priority flag, description and, for
//! deadlines and events, the date.

use crate::error::Result;

pub mod codec;
pub mod fs;
pub mod memory;

/// Abstract interface for task persistence.
pub trait DataStore {
    /// Read every stored row. A store that has never been written to yields none.
    fn load_rows(&self) -> Result<Vec<String>>;

    /// Replace the stored rows.
    fn save_rows(&mut self, rows: &[String]) -> Result<()>;

    /// Human-readable description of where rows are kept.
    fn location(&self) -> String;
}
