//! Search index records built from sections.

use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::Result;
use crate::model::{Section, SectionRecord};

fn invalid_key_chars() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[^0-9a-zA-Z_-]").expect("static pattern"))
}

/// Replace every character outside `[0-9a-zA-Z_-]` with `_`.
pub fn sanitize_key(key: &str) -> String {
    invalid_key_chars().replace_all(key, "_").into_owned()
}

/// Stable record key for the `index`-th section of a file.
pub fn section_id(filename: &str, index: usize) -> String {
    sanitize_key(&format!("{}-{}", filename, index))
}

fn is_pdf(filename: &str) -> bool {
    Path::new(filename)
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false)
}

fn base_name(filename: &str) -> String {
    Path::new(filename)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| filename.to_string())
}

/// Name of the blob holding one page of a file.
///
/// PDFs are stored one page per blob as `{stem}-{page}.pdf`; any other file
/// is stored whole under its base name.
pub fn blob_name_from_file_page(filename: &str, page: u32) -> String {
    if is_pdf(filename) {
        let stem = Path::new(filename)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        format!("{}-{}.pdf", stem, page)
    } else {
        base_name(filename)
    }
}

/// Matches the per-page blob names produced for one file.
#[derive(Debug, Clone)]
pub struct PageBlobPattern {
    prefix: String,
    pattern: Regex,
}

impl PageBlobPattern {
    /// Build the pattern for a source file.
    pub fn new(filename: &str) -> Result<Self> {
        let prefix = Path::new(filename)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let pattern = Regex::new(&format!(r"^{}-\d+\.pdf", regex::escape(&prefix)))?;
        Ok(Self { prefix, pattern })
    }

    /// Prefix usable to narrow a blob listing.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Check if a blob holds a page of the file.
    pub fn matches(&self, blob_name: &str) -> bool {
        self.pattern.is_match(blob_name)
    }
}

/// Index filter selecting every record of a source file.
pub fn source_file_filter(filename: &str) -> String {
    format!("sourcefile eq '{}'", base_name(filename).replace('\'', "''"))
}

/// Builds [`SectionRecord`]s for one source file.
#[derive(Debug, Clone)]
pub struct RecordBuilder {
    filename: String,
    category: Option<String>,
}

impl RecordBuilder {
    /// Create a builder for the given source file name.
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            category: None,
        }
    }

    /// Set the category attached to every record.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set or clear the category.
    pub fn with_optional_category(mut self, category: Option<String>) -> Self {
        self.category = category;
        self
    }

    /// Source file name.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Build the record for the `index`-th section.
    pub fn record(&self, index: usize, section: Section) -> SectionRecord {
        SectionRecord {
            id: section_id(&self.filename, index),
            sourcepage: blob_name_from_file_page(&self.filename, section.page_number),
            content: section.content,
            category: self.category.clone(),
            sourcefile: self.filename.clone(),
        }
    }

    /// Lazily turn a section sequence into records.
    pub fn build<'a, I>(&'a self, sections: I) -> impl Iterator<Item = SectionRecord> + 'a
    where
        I: IntoIterator<Item = Section>,
        I::IntoIter: 'a,
    {
        log::debug!("Building records for '{}'", self.filename);
        sections
            .into_iter()
            .enumerate()
            .map(move |(index, section)| self.record(index, section))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(page_number: u32, content: &str) -> Section {
        Section {
            content: content.to_string(),
            page_number,
            start: 0,
            end: content.chars().count(),
        }
    }

    #[test]
    fn test_section_id() {
        assert_eq!(section_id("report.pdf", 0), "report_pdf-0");
        assert_eq!(section_id("my file (v2).docx", 12), "my_file__v2__docx-12");
        assert_eq!(section_id("dir/naïve.pdf", 3), "dir_na_ve_pdf-3");
    }

    #[test]
    fn test_blob_name_from_file_page() {
        assert_eq!(blob_name_from_file_page("report.pdf", 4), "report-4.pdf");
        assert_eq!(blob_name_from_file_page("data/Report.PDF", 0), "Report-0.pdf");
        assert_eq!(blob_name_from_file_page("data/notes.txt", 7), "notes.txt");
        assert_eq!(blob_name_from_file_page("README", 1), "README");
    }

    #[test]
    fn test_page_blob_pattern() {
        let pattern = PageBlobPattern::new("docs/contract.v1.pdf").unwrap();
        assert_eq!(pattern.prefix(), "contract.v1");
        assert!(pattern.matches("contract.v1-0.pdf"));
        assert!(pattern.matches("contract.v1-12.pdf"));
        assert!(!pattern.matches("contractXv1-0.pdf"));
        assert!(!pattern.matches("other-0.pdf"));
        assert!(!pattern.matches("contract.v1.pdf"));
    }

    #[test]
    fn test_source_file_filter() {
        assert_eq!(source_file_filter("a/b.pdf"), "sourcefile eq 'b.pdf'");
        assert_eq!(source_file_filter("o'neil.pdf"), "sourcefile eq 'o''neil.pdf'");
    }

    #[test]
    fn test_build_records() {
        let builder = RecordBuilder::new("report.pdf").with_category("finance");
        let sections = vec![section(0, "first"), section(2, "second")];
        let records: Vec<_> = builder.build(sections).collect();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "report_pdf-0");
        assert_eq!(records[1].id, "report_pdf-1");
        assert_eq!(records[1].sourcepage, "report-2.pdf");
        assert_eq!(records[1].sourcefile, "report.pdf");
        assert_eq!(records[0].category.as_deref(), Some("finance"));
    }

    #[test]
    fn test_build_without_category() {
        let builder = RecordBuilder::new("notes.txt");
        let record = builder.record(5, section(3, "body"));
        assert_eq!(record.id, "notes_txt-5");
        assert_eq!(record.sourcepage, "notes.txt");
        assert!(record.category.is_none());
    }
}
