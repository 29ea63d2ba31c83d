//! Section splitting options.

use crate::error::{Error, Result};

/// Default target length of a section, in chars.
pub const MAX_SECTION_LENGTH: usize = 1000;

/// How far past the target length to look for a sentence ending.
pub const SENTENCE_SEARCH_LIMIT: usize = 100;

/// Chars shared between consecutive sections.
pub const SECTION_OVERLAP: usize = 100;

/// Preferred split points.
pub const SENTENCE_ENDINGS: &[char] = &['.', '!', '?'];

/// Fallback split points.
pub const WORD_BREAKS: &[char] = &[
    ',', ';', ':', ' ', '(', ')', '[', ']', '{', '}', '\t', '\n',
];

/// Options controlling where sections are cut.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitOptions {
    /// Target section length in chars
    pub max_section_length: usize,

    /// Extra chars scanned past the target length for a boundary
    pub sentence_search_limit: usize,

    /// Chars repeated at the start of the next section
    pub section_overlap: usize,

    /// Characters that end a sentence
    pub sentence_endings: Vec<char>,

    /// Characters that separate words
    pub word_breaks: Vec<char>,
}

impl SplitOptions {
    /// Create new split options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target section length.
    pub fn with_max_section_length(mut self, length: usize) -> Self {
        self.max_section_length = length;
        self
    }

    /// Set the boundary search limit.
    pub fn with_sentence_search_limit(mut self, limit: usize) -> Self {
        self.sentence_search_limit = limit;
        self
    }

    /// Set the overlap between sections.
    pub fn with_section_overlap(mut self, overlap: usize) -> Self {
        self.section_overlap = overlap;
        self
    }

    /// Replace the sentence ending characters.
    pub fn with_sentence_endings(mut self, endings: impl IntoIterator<Item = char>) -> Self {
        self.sentence_endings = endings.into_iter().collect();
        self
    }

    /// Replace the word break characters.
    pub fn with_word_breaks(mut self, breaks: impl IntoIterator<Item = char>) -> Self {
        self.word_breaks = breaks.into_iter().collect();
        self
    }

    /// Check that splitting with these options always moves forward.
    pub fn validate(&self) -> Result<()> {
        if self.max_section_length == 0 {
            return Err(Error::InvalidOptions(
                "max section length must be positive".to_string(),
            ));
        }
        if self.section_overlap >= self.max_section_length {
            return Err(Error::InvalidOptions(format!(
                "overlap ({}) must be smaller than the max section length ({})",
                self.section_overlap, self.max_section_length
            )));
        }
        let fits = self
            .max_section_length
            .checked_add(self.sentence_search_limit)
            .and_then(|budget| budget.checked_add(1))
            .is_some()
            && self.sentence_search_limit.checked_mul(2).is_some();
        if !fits {
            return Err(Error::InvalidOptions(format!(
                "max section length ({}) and search limit ({}) are too large",
                self.max_section_length, self.sentence_search_limit
            )));
        }
        Ok(())
    }

    /// Upper bound on the length of any section produced with these options.
    pub fn max_emitted_length(&self) -> usize {
        self.max_section_length
            .saturating_add(self.sentence_search_limit)
            .saturating_add(1)
    }

    pub(crate) fn is_sentence_ending(&self, c: char) -> bool {
        self.sentence_endings.contains(&c)
    }

    pub(crate) fn is_word_break(&self, c: char) -> bool {
        self.word_breaks.contains(&c)
    }
}

impl Default for SplitOptions {
    fn default() -> Self {
        Self {
            max_section_length: MAX_SECTION_LENGTH,
            sentence_search_limit: SENTENCE_SEARCH_LIMIT,
            section_overlap: SECTION_OVERLAP,
            sentence_endings: SENTENCE_ENDINGS.to_vec(),
            word_breaks: WORD_BREAKS.to_vec(),
        }
    }
}
