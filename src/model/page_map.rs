//! Character-offset to page bookkeeping.
//!
//! A [`PageMap`] records, for every text fragment contributed by a page, where
//! that fragment starts in the concatenated document text. All offsets are in
//! chars. Page numbers are 0-indexed positions of the page in the analysis
//! result.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// One fragment of the linearized document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMapEntry {
    /// Page the fragment came from (0-indexed)
    pub page_number: u32,

    /// Start of the fragment in the full text, in chars
    pub offset: usize,

    /// Fragment text
    pub text: String,
}

impl PageMapEntry {
    /// Create a new entry.
    pub fn new(page_number: u32, offset: usize, text: impl Into<String>) -> Self {
        Self {
            page_number,
            offset,
            text: text.into(),
        }
    }

    /// Length of the fragment in chars.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Ordered, contiguous list of page map entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PageMap {
    entries: Vec<PageMapEntry>,
    len: usize,
}

impl PageMap {
    /// Create an empty page map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a page map from existing entries.
    ///
    /// Every entry must start exactly where the previous fragment ended, with
    /// the first at offset 0.
    pub fn from_entries(entries: Vec<PageMapEntry>) -> Result<Self> {
        let mut expected = 0;
        for (index, entry) in entries.iter().enumerate() {
            if entry.offset != expected {
                return Err(Error::InvalidPageMap {
                    index,
                    expected,
                    found: entry.offset,
                });
            }
            expected += entry.char_len();
        }
        Ok(Self {
            entries,
            len: expected,
        })
    }

    /// Build a page map with one entry per page from already extracted page text.
    pub fn from_page_texts<S: Into<String>>(pages: impl IntoIterator<Item = S>) -> Self {
        let mut map = Self::new();
        for (page_number, text) in pages.into_iter().enumerate() {
            map.push(page_number as u32, text);
        }
        map
    }

    /// Append a fragment at the current end of the text and return its offset.
    pub fn push(&mut self, page_number: u32, text: impl Into<String>) -> usize {
        let entry = PageMapEntry::new(page_number, self.len, text);
        let offset = entry.offset;
        self.len += entry.char_len();
        self.entries.push(entry);
        offset
    }

    /// All entries in offset order.
    pub fn entries(&self) -> &[PageMapEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Length of the full text in chars.
    pub fn char_len(&self) -> usize {
        self.len
    }

    /// Check if the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Concatenation of every fragment.
    pub fn full_text(&self) -> String {
        self.entries.iter().map(|e| e.text.as_str()).collect()
    }

    /// Resolve a char offset to the page it came from.
    ///
    /// Offsets past the end resolve to the last entry's page. Returns `None`
    /// only for an empty map.
    pub fn page_for_offset(&self, offset: usize) -> Option<u32> {
        let index = self
            .entries
            .partition_point(|e| e.offset <= offset)
            .saturating_sub(1);
        self.entries.get(index).map(|e| e.page_number)
    }
}
