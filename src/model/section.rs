//! Section and index record types.

use serde::{Deserialize, Serialize};

/// A bounded slice of the linearized document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Section text
    pub content: String,

    /// Page the section starts on (0-indexed)
    pub page_number: u32,

    /// Start offset in the full text, in chars
    pub start: usize,

    /// Exclusive end offset in the full text, in chars
    pub end: usize,
}

impl Section {
    /// Length of the section in chars.
    pub fn char_len(&self) -> usize {
        self.end - self.start
    }
}

/// A document ready for upload to a search index keyed by `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionRecord {
    /// Unique key, restricted to `[0-9a-zA-Z_-]`
    pub id: String,

    /// Section text
    pub content: String,

    /// Caller-supplied category
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Name of the per-page blob holding the section's first page
    pub sourcepage: String,

    /// Source file name
    pub sourcefile: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_range() {
        let section = Section {
            content: "abcde".to_string(),
            page_number: 0,
            start: 10,
            end: 15,
        };
        assert_eq!(section.char_len(), 5);
    }

    #[test]
    fn test_record_omits_missing_category() {
        let record = SectionRecord {
            id: "a_pdf-0".to_string(),
            content: "text".to_string(),
            category: None,
            sourcepage: "a-0.pdf".to_string(),
            sourcefile: "a.pdf".to_string(),
        };
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"id":"a_pdf-0","content":"text","sourcepage":"a-0.pdf","sourcefile":"a.pdf"}"#
        );
    }
}
