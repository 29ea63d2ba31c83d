//! Page-level types.

use serde::{Deserialize, Serialize};

/// A character span inside the analysis result's `content` stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    /// Start offset in chars
    pub offset: usize,

    /// Length in chars
    pub length: usize,
}

impl Span {
    /// Create a new span.
    pub fn new(offset: usize, length: usize) -> Self {
        Self { offset, length }
    }

    /// Exclusive end offset.
    pub fn end(&self) -> usize {
        self.offset.saturating_add(self.length)
    }

    /// Check if the span covers no characters.
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }
}

/// A single analyzed page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzedPage {
    /// Page number as reported by the analysis service (1-indexed)
    pub page_number: u32,

    /// Spans locating this page in the document content; only the first is used
    #[serde(default)]
    pub spans: Vec<Span>,

    /// Text lines in reading order
    #[serde(default)]
    pub lines: Vec<Line>,
}

impl AnalyzedPage {
    /// Create a new page without lines or spans.
    pub fn new(page_number: u32) -> Self {
        Self {
            page_number,
            ..Default::default()
        }
    }

    /// Set the page's content span and return self.
    pub fn with_span(mut self, offset: usize, length: usize) -> Self {
        self.spans = vec![Span::new(offset, length)];
        self
    }

    /// Add a line to the page.
    pub fn add_line(&mut self, line: Line) {
        self.lines.push(line);
    }

    /// The span of the page inside the document content, if any.
    pub fn content_span(&self) -> Option<Span> {
        self.spans.first().copied()
    }

    /// Words of every line joined by single spaces, each line followed by a space.
    pub fn plain_text(&self) -> String {
        let mut text = String::new();
        for line in &self.lines {
            text.push_str(&line.text());
            text.push(' ');
        }
        text
    }
}

/// A line of text on a page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Line {
    /// Raw line text as reported by the service
    #[serde(default)]
    pub content: String,

    /// Words making up the line
    #[serde(default)]
    pub words: Vec<Word>,
}

impl Line {
    /// Create a line from words.
    pub fn from_words<S: Into<String>>(words: impl IntoIterator<Item = S>) -> Self {
        Self {
            content: String::new(),
            words: words.into_iter().map(Word::new).collect(),
        }
    }

    /// Line text: the words joined by single spaces, or the raw content when
    /// the service reported no words.
    pub fn text(&self) -> String {
        if self.words.is_empty() {
            return self.content.clone();
        }
        self.words
            .iter()
            .map(|w| w.content.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// A single recognized word.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Word {
    /// Word text
    pub content: String,
}

impl Word {
    /// Create a new word.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}
