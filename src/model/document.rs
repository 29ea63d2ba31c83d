//! Document-level types.

use super::{AnalyzedPage, Table};
use serde::{Deserialize, Serialize};

/// Output of a layout-analysis service for one document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResult {
    /// The document's underlying character stream
    #[serde(default)]
    pub content: String,

    /// Pages in document order
    #[serde(default)]
    pub pages: Vec<AnalyzedPage>,

    /// Every table detected in the document
    #[serde(default)]
    pub tables: Vec<Table>,
}

impl AnalyzeResult {
    /// Create a new empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a result over the given content stream.
    pub fn with_content(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    /// Add a page.
    pub fn add_page(&mut self, page: AnalyzedPage) {
        self.pages.push(page);
    }

    /// Add a table.
    pub fn add_table(&mut self, table: Table) {
        self.tables.push(table);
    }

    /// Get the number of pages.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Check if the result has any pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Tables whose first bounding region is on the given page (1-indexed).
    pub fn tables_on_page(&self, page_number: u32) -> Vec<&Table> {
        self.tables
            .iter()
            .filter(|t| t.page_number() == Some(page_number))
            .collect()
    }
}
