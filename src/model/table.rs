//! Table types.

use super::Span;
use serde::{Deserialize, Serialize};

/// A detected table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    /// Number of rows
    pub row_count: usize,

    /// Number of columns
    pub column_count: usize,

    /// Cells in no particular order
    #[serde(default)]
    pub cells: Vec<TableCell>,

    /// Regions the table occupies; the first one decides its page
    #[serde(default)]
    pub bounding_regions: Vec<BoundingRegion>,

    /// Where the table's text sits in the document content
    #[serde(default)]
    pub spans: Vec<Span>,
}

impl Table {
    /// Create a new empty table with the given geometry.
    pub fn new(row_count: usize, column_count: usize) -> Self {
        Self {
            row_count,
            column_count,
            ..Default::default()
        }
    }

    /// Place the table on a page (1-indexed) and return self.
    pub fn on_page(mut self, page_number: u32) -> Self {
        self.bounding_regions.push(BoundingRegion { page_number });
        self
    }

    /// Add a content span and return self.
    pub fn with_span(mut self, offset: usize, length: usize) -> Self {
        self.spans.push(Span::new(offset, length));
        self
    }

    /// Add a cell to the table.
    pub fn add_cell(&mut self, cell: TableCell) {
        self.cells.push(cell);
    }

    /// Page number (1-indexed) of the first bounding region.
    pub fn page_number(&self) -> Option<u32> {
        self.bounding_regions.first().map(|r| r.page_number)
    }

    /// Cells of one row ordered by column index.
    pub fn row(&self, row_index: usize) -> Vec<&TableCell> {
        let mut cells: Vec<&TableCell> = self
            .cells
            .iter()
            .filter(|c| c.row_index == row_index)
            .collect();
        cells.sort_by_key(|c| c.column_index);
        cells
    }

    /// Check if the table has merged cells.
    pub fn has_merged_cells(&self) -> bool {
        self.cells.iter().any(|c| c.is_merged())
    }
}

/// A region of a page covered by a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundingRegion {
    /// Page number (1-indexed)
    pub page_number: u32,
}

/// A table cell.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableCell {
    /// Row index (0-indexed)
    pub row_index: usize,

    /// Column index (0-indexed)
    pub column_index: usize,

    /// Number of rows this cell spans
    #[serde(default = "default_span")]
    pub row_span: usize,

    /// Number of columns this cell spans
    #[serde(default = "default_span")]
    pub column_span: usize,

    /// Cell role
    #[serde(default)]
    pub kind: CellKind,

    /// Cell text
    #[serde(default)]
    pub content: String,
}

fn default_span() -> usize {
    1
}

impl TableCell {
    /// Create a data cell.
    pub fn new(row_index: usize, column_index: usize, content: impl Into<String>) -> Self {
        Self {
            row_index,
            column_index,
            row_span: 1,
            column_span: 1,
            kind: CellKind::Content,
            content: content.into(),
        }
    }

    /// Create a column header cell.
    pub fn header(row_index: usize, column_index: usize, content: impl Into<String>) -> Self {
        Self::new(row_index, column_index, content).kind(CellKind::ColumnHeader)
    }

    /// Set the cell kind and return self.
    pub fn kind(mut self, kind: CellKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set the column span and return self.
    pub fn colspan(mut self, span: usize) -> Self {
        self.column_span = span;
        self
    }

    /// Set the row span and return self.
    pub fn rowspan(mut self, span: usize) -> Self {
        self.row_span = span;
        self
    }

    /// Check if the cell is rendered as a header.
    pub fn is_header(&self) -> bool {
        matches!(self.kind, CellKind::ColumnHeader | CellKind::RowHeader)
    }

    /// Check if this cell spans multiple rows or columns.
    pub fn is_merged(&self) -> bool {
        self.row_span > 1 || self.column_span > 1
    }
}

/// Role of a cell within its table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CellKind {
    /// Regular data cell
    #[default]
    Content,
    /// Column header
    ColumnHeader,
    /// Row header
    RowHeader,
    /// Top-left corner header
    StubHead,
    /// Caption-like description cell
    Description,
    /// Any kind this crate does not know about
    #[serde(other)]
    Other,
}
