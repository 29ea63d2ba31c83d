//! Document model types.
//!
//! The input side mirrors a layout-analysis result (pages, lines, words,
//! tables). The output side is the page map, the sections cut from it and
//! the records handed to a search index.

mod document;
mod page;
mod page_map;
mod section;
mod table;

pub use document::AnalyzeResult;
pub use page::{AnalyzedPage, Line, Span, Word};
pub use page_map::{PageMap, PageMapEntry};
pub use section::{Section, SectionRecord};
pub use table::{BoundingRegion, CellKind, Table, TableCell};
