//! Input format detection.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Kind of input the pipeline accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// Layout analysis result serialized as JSON
    AnalysisJson,
    /// UTF-8 text, pages separated by form feeds
    PlainText,
}

impl std::fmt::Display for InputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputFormat::AnalysisJson => write!(f, "analysis JSON"),
            InputFormat::PlainText => write!(f, "plain text"),
        }
    }
}

/// UTF-8 byte order mark.
const BOM: &[u8] = b"\xef\xbb\xbf";

/// Bytes inspected when detecting from a file.
const SNIFF_LEN: usize = 4096;

/// Detect the input format from a file path.
///
/// # Example
/// ```no_run
/// use sectionize::detect::detect_format_from_path;
///
/// let format = detect_format_from_path("report.json").unwrap();
/// println!("Input: {}", format);
/// ```
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<InputFormat> {
    let file = File::open(path)?;
    let mut header = Vec::with_capacity(SNIFF_LEN);
    file.take(SNIFF_LEN as u64).read_to_end(&mut header)?;
    detect_format_from_bytes(&header)
}

/// Detect the input format from leading bytes.
///
/// # Returns
/// * `Ok(InputFormat::AnalysisJson)` if the first non-blank byte opens an object
/// * `Ok(InputFormat::PlainText)` for other text, including empty or blank input
/// * `Err(Error::UnknownFormat)` for binary data
pub fn detect_format_from_bytes(data: &[u8]) -> Result<InputFormat> {
    let data = data.strip_prefix(BOM).unwrap_or(data);
    if looks_binary(data) {
        return Err(Error::UnknownFormat);
    }

    match data.iter().find(|b| !b.is_ascii_whitespace()) {
        Some(b'{') => Ok(InputFormat::AnalysisJson),
        _ => Ok(InputFormat::PlainText),
    }
}

// NUL bytes never appear in text; a truncated sniff buffer may split a
// multibyte char, so only the valid prefix is required.
fn looks_binary(data: &[u8]) -> bool {
    if data.contains(&0) {
        return true;
    }
    match std::str::from_utf8(data) {
        Ok(_) => false,
        Err(e) => e.error_len().is_some(),
    }
}

/// Check if bytes look like an analysis result.
pub fn is_analysis_json(data: &[u8]) -> bool {
    matches!(detect_format_from_bytes(data), Ok(InputFormat::AnalysisJson))
}
