//! Splitting of linearized documents into overlapping sections.

mod options;
mod splitter;

pub use options::{
    SplitOptions, MAX_SECTION_LENGTH, SECTION_OVERLAP, SENTENCE_ENDINGS, SENTENCE_SEARCH_LIMIT,
    WORD_BREAKS,
};
pub use splitter::{split_sections, SectionSplitter};
