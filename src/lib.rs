//! # sectionize
//!
//! Turns layout-analysis results into overlapping, page-attributed sections
//! ready for a search index.
//!
//! A document's analysis result (pages, lines, words and detected tables) is
//! linearized into a single text stream with each table inlined as HTML. The
//! stream is cut into sections of about 1000 chars that end on sentence
//! boundaries where possible, overlap their neighbours, and avoid splitting
//! tables. Each section becomes a record carrying a stable key and the page
//! blob it cites.
//!
//! ## Quick Start
//!
//! ```no_run
//! use sectionize::Sectionizer;
//!
//! fn main() -> sectionize::Result<()> {
//!     let result = Sectionizer::new()
//!         .with_category("contracts")
//!         .load("analysis/lease.json")?;
//!
//!     for record in result.records()? {
//!         println!("{} -> {}", record.id, record.sourcepage);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Pipeline
//!
//! - [`mod@linearize`]: analysis result to [`PageMap`]
//! - [`split`]: page map to [`Section`]s
//! - [`index`]: sections to [`SectionRecord`]s, batching and index schema
//! - [`render`]: table HTML and record JSON

pub mod detect;
pub mod error;
pub mod index;
pub mod linearize;
pub mod model;
pub mod render;
pub mod split;

// Re-export commonly used types
pub use detect::{detect_format_from_bytes, detect_format_from_path, InputFormat};
pub use error::{Error, Result};
pub use index::{Batches, IndexSchema, RecordBuilder, INDEX_BATCH_SIZE};
pub use linearize::linearize;
pub use model::{
    AnalyzeResult, AnalyzedPage, PageMap, PageMapEntry, Section, SectionRecord, Table, TableCell,
};
pub use render::JsonFormat;
pub use split::{split_sections, SectionSplitter, SplitOptions};

use std::io::Read;
use std::path::Path;

/// Separates pages in plain-text input.
pub const PAGE_SEPARATOR: char = '\x0c';

/// Source file name used when none is given and none can be derived.
pub const DEFAULT_SOURCE_FILE: &str = "document";

/// Parse an analysis result from a JSON file.
///
/// # Example
///
/// ```no_run
/// use sectionize::parse_file;
///
/// let result = parse_file("analysis.json").unwrap();
/// println!("Pages: {}", result.page_count());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<AnalyzeResult> {
    let data = std::fs::read(path)?;
    parse_bytes(&data)
}

/// Parse an analysis result from JSON bytes.
pub fn parse_bytes(data: &[u8]) -> Result<AnalyzeResult> {
    let result: AnalyzeResult = serde_json::from_slice(data)?;
    log::debug!(
        "Parsed analysis result with {} pages and {} tables",
        result.page_count(),
        result.tables.len()
    );
    Ok(result)
}

/// Parse an analysis result from a reader.
pub fn parse_reader<R: Read>(reader: R) -> Result<AnalyzeResult> {
    Ok(serde_json::from_reader(reader)?)
}

/// Build a page map from plain text, one page per form-feed separated chunk.
///
/// # Example
///
/// ```
/// use sectionize::page_map_from_text;
///
/// let map = page_map_from_text("first page\x0csecond page");
/// assert_eq!(map.entry_count(), 2);
/// assert_eq!(map.page_for_offset(12), Some(1));
/// ```
pub fn page_map_from_text(text: &str) -> PageMap {
    PageMap::from_page_texts(text.split(PAGE_SEPARATOR))
}

/// Load a page map from a file, detecting whether it holds an analysis
/// result or plain text.
pub fn load_page_map<P: AsRef<Path>>(path: P) -> Result<PageMap> {
    let data = std::fs::read(path)?;
    page_map_from_bytes(&data)
}

/// Build a page map from raw input bytes.
pub fn page_map_from_bytes(data: &[u8]) -> Result<PageMap> {
    match detect_format_from_bytes(data)? {
        InputFormat::AnalysisJson => Ok(linearize(&parse_bytes(data)?)),
        InputFormat::PlainText => {
            let text = std::str::from_utf8(data).map_err(|_| Error::UnknownFormat)?;
            Ok(page_map_from_text(text.trim_start_matches('\u{feff}')))
        }
    }
}

/// Split a file into index records with default options.
///
/// # Example
///
/// ```no_run
/// use sectionize::sectionize_file;
///
/// let records = sectionize_file("report.json").unwrap();
/// println!("{} records", records.len());
/// ```
pub fn sectionize_file<P: AsRef<Path>>(path: P) -> Result<Vec<SectionRecord>> {
    Sectionizer::new().load(path)?.records()
}

/// Builder for the linearize, split and record pipeline.
///
/// # Example
///
/// ```no_run
/// use sectionize::{Sectionizer, SplitOptions};
///
/// let loaded = Sectionizer::new()
///     .with_split_options(SplitOptions::new().with_max_section_length(800))
///     .with_source_file("lease.pdf")
///     .with_batch_size(500)
///     .load("analysis/lease.json")?;
/// let batches = loaded.batches()?;
/// for batch in batches {
///     println!("uploading {} records", batch.len());
/// }
/// # Ok::<(), sectionize::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Sectionizer {
    split_options: SplitOptions,
    category: Option<String>,
    source_file: Option<String>,
    batch_size: usize,
}

impl Sectionizer {
    /// Create a new Sectionizer builder.
    pub fn new() -> Self {
        Self {
            split_options: SplitOptions::default(),
            category: None,
            source_file: None,
            batch_size: INDEX_BATCH_SIZE,
        }
    }

    /// Set split options.
    pub fn with_split_options(mut self, options: SplitOptions) -> Self {
        self.split_options = options;
        self
    }

    /// Set the category attached to every record.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the source file name recorded on every record.
    ///
    /// Defaults to the base name of the loaded path.
    pub fn with_source_file(mut self, name: impl Into<String>) -> Self {
        self.source_file = Some(name.into());
        self
    }

    /// Set the number of records per upload batch.
    pub fn with_batch_size(mut self, size: usize) -> Self {
        self.batch_size = size;
        self
    }

    /// Load a file, detecting its format.
    pub fn load<P: AsRef<Path>>(mut self, path: P) -> Result<SectionizeResult> {
        let path = path.as_ref();
        if self.source_file.is_none() {
            self.source_file = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned());
        }
        let page_map = load_page_map(path)?;
        self.finish(page_map)
    }

    /// Use raw input bytes, detecting their format.
    pub fn load_bytes(self, data: &[u8]) -> Result<SectionizeResult> {
        let page_map = page_map_from_bytes(data)?;
        self.finish(page_map)
    }

    /// Use an already parsed analysis result.
    pub fn load_analysis(self, result: &AnalyzeResult) -> Result<SectionizeResult> {
        self.finish(linearize(result))
    }

    /// Use plain text with form-feed separated pages.
    pub fn load_text(self, text: &str) -> Result<SectionizeResult> {
        self.finish(page_map_from_text(text))
    }

    fn finish(self, page_map: PageMap) -> Result<SectionizeResult> {
        self.split_options.validate()?;
        let source_file = self
            .source_file
            .unwrap_or_else(|| DEFAULT_SOURCE_FILE.to_string());
        let records = RecordBuilder::new(source_file).with_optional_category(self.category);
        Ok(SectionizeResult {
            page_map,
            split_options: self.split_options,
            records,
            batch_size: self.batch_size,
        })
    }
}

impl Default for Sectionizer {
    fn default() -> Self {
        Self::new()
    }
}

/// A linearized document with the settings to split and index it.
pub struct SectionizeResult {
    /// The linearized document
    pub page_map: PageMap,
    split_options: SplitOptions,
    records: RecordBuilder,
    batch_size: usize,
}

impl SectionizeResult {
    /// Lazily iterate over sections.
    pub fn splitter(&self) -> Result<SectionSplitter<'_>> {
        SectionSplitter::new(&self.page_map, self.split_options.clone())
    }

    /// All sections in order.
    pub fn sections(&self) -> Result<Vec<Section>> {
        split_sections(&self.page_map, &self.split_options)
    }

    /// All index records in order.
    pub fn records(&self) -> Result<Vec<SectionRecord>> {
        let splitter = self.splitter()?;
        let records: Vec<SectionRecord> = self.records.build(splitter).collect();
        log::debug!(
            "Built {} records for '{}'",
            records.len(),
            self.records.filename()
        );
        Ok(records)
    }

    /// Index records grouped into upload batches.
    ///
    /// Records are built as the batches are drawn, so at most one batch is
    /// held in memory.
    pub fn batches(&self) -> Result<Batches<impl Iterator<Item = SectionRecord> + '_>> {
        let splitter = self.splitter()?;
        Ok(Batches::new(self.records.build(splitter), self.batch_size))
    }

    /// Records serialized as JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.records()?, format)
    }

    /// Source file name recorded on every record.
    pub fn source_file(&self) -> &str {
        self.records.filename()
    }

    /// Get the page map.
    pub fn page_map(&self) -> &PageMap {
        &self.page_map
    }
}
