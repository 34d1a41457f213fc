//! Error types for extraction operations.
//!
//! This module defines the main error type [`PolarisError`] which covers
//! everything that can fail while pulling a book out of the CD-ROM export:
//! filesystem failures and content pages whose structure does not match the
//! export's known layout.
//!
//! # Example
//!
//! ```rust
//! use std::path::Path;
//! use polaris_core::{PolarisError, Result};
//!
//! fn require_cell<'a>(cell: Option<&'a str>, path: &Path) -> Result<&'a str> {
//!     cell.ok_or_else(|| PolarisError::MissingCell(path.to_path_buf()))
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for catalog extraction operations.
///
/// Every variant carries the path it failed on. A batch run aborts on the
/// first error, so the message is exactly what the user sees.
#[derive(Error, Debug)]
pub enum PolarisError {
    /// A catalog index, menu page, or content page could not be read.
    #[error("Failed to read {}: {}", .path.display(), .source)]
    Read { path: PathBuf, source: std::io::Error },

    /// A content page with no table cell to extract.
    ///
    /// Content pages keep all of their text in one `<td>` cell; a page
    /// without one is malformed beyond repair.
    #[error("No table cell found in {}", .0.display())]
    MissingCell(PathBuf),
}

/// Result type alias for PolarisError.
pub type Result<T> = std::result::Result<T, PolarisError>;
