//! JSON rendering for section records.

use crate::error::{Error, Result};
use crate::model::SectionRecord;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed array with indentation
    #[default]
    Pretty,
    /// Compact array without extra whitespace
    Compact,
    /// One compact record per line
    Lines,
}

/// Serialize records in the requested format.
pub fn to_json(records: &[SectionRecord], format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(records),
        JsonFormat::Compact => serde_json::to_string(records),
        JsonFormat::Lines => {
            let mut output = String::new();
            for record in records {
                let line = serde_json::to_string(record)
                    .map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))?;
                output.push_str(&line);
                output.push('\n');
            }
            return Ok(output);
        }
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}
