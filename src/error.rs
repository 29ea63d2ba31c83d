//! Error types for the sectionize library.

use std::io;
use thiserror::Error;

/// Result type alias for sectionize operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while structuring and splitting documents.
///
/// Malformed layout geometry is never an error: it is rendered or skipped on
/// a best-effort basis. Only contract violations and I/O surface here.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The analysis result could not be deserialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A page map entry does not start where the previous fragment ended.
    #[error("Invalid page map: entry {index} starts at offset {found}, expected {expected}")]
    InvalidPageMap {
        /// Position of the offending entry
        index: usize,
        /// Offset implied by the preceding fragments
        expected: usize,
        /// Offset carried by the entry
        found: usize,
    },

    /// A blob name pattern failed to compile.
    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),

    /// Split options that would not make forward progress.
    #[error("Invalid split options: {0}")]
    InvalidOptions(String),

    /// The input is neither an analysis result nor plain text.
    #[error("Unknown input format")]
    UnknownFormat,

    /// Error while serializing output records.
    #[error("Rendering error: {0}")]
    Render(String),
}
