//! Section splitter.
//!
//! Cuts the linearized text into overlapping sections, preferring sentence
//! endings over word breaks over a hard cut, and restarting the next section
//! at an inlined table the current one cuts through.
//!
//! # Example
//!
//! ```
//! use sectionize::model::PageMap;
//! use sectionize::split::{SectionSplitter, SplitOptions};
//!
//! let map = PageMap::from_page_texts(["A. B. C. ".repeat(200)]);
//! let splitter = SectionSplitter::new(&map, SplitOptions::default())?;
//! for section in splitter {
//!     println!("page {}: {} chars", section.page_number, section.char_len());
//! }
//! # Ok::<(), sectionize::Error>(())
//! ```

use crate::error::Result;
use crate::model::{PageMap, Section};

use super::SplitOptions;

const TABLE_OPEN: &str = "<table";
const TABLE_CLOSE: &str = "</table";

/// Forward-only iterator over the sections of a page map.
pub struct SectionSplitter<'a> {
    page_map: &'a PageMap,
    text: Vec<char>,
    options: SplitOptions,
    start: usize,
    end: usize,
    // Start was placed on an unclosed table and must not be moved.
    anchored: bool,
    done: bool,
}

impl<'a> SectionSplitter<'a> {
    /// Create a splitter over the page map's full text.
    pub fn new(page_map: &'a PageMap, options: SplitOptions) -> Result<Self> {
        options.validate()?;
        let text: Vec<char> = page_map.full_text().chars().collect();
        let end = text.len();
        Ok(Self {
            page_map,
            text,
            options,
            start: 0,
            end,
            anchored: false,
            done: false,
        })
    }

    /// Check if every section has been yielded.
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Extend the section end to a sentence ending, or back to the last word
    /// break seen, within the search limit.
    fn find_end(&self, start: usize) -> usize {
        let length = self.text.len();
        let max = self.options.max_section_length;
        let budget = max.saturating_add(self.options.sentence_search_limit);

        let mut end = start.saturating_add(max);
        if end >= length {
            return length;
        }

        let mut last_word = None;
        while end < length
            && end - start < budget
            && !self.options.is_sentence_ending(self.text[end])
        {
            if self.options.is_word_break(self.text[end]) {
                last_word = Some(end);
            }
            end += 1;
        }
        if end < length && !self.options.is_sentence_ending(self.text[end]) {
            if let Some(word) = last_word {
                end = word;
            }
        }
        (end + 1).min(length)
    }

    /// Move the section start back to just after a sentence ending, or a word
    /// break, without growing the section past the search limit.
    fn find_start(&self, mut start: usize, end: usize) -> usize {
        let budget = self
            .options
            .max_section_length
            .saturating_add(self.options.sentence_search_limit);

        let mut last_word = None;
        while start > 0
            && end - start < budget
            && !self.options.is_sentence_ending(self.text[start])
        {
            if self.options.is_word_break(self.text[start]) {
                last_word = Some(start);
            }
            start -= 1;
        }
        if !self.options.is_sentence_ending(self.text[start]) {
            if let Some(word) = last_word {
                start = word;
            }
        }
        if start > 0 {
            start += 1;
        }
        start
    }

    /// Where the next section starts: `overlap` chars before this one ends,
    /// or at the opening tag when this section ends inside a table. The flag
    /// is set when the start sits on that tag.
    fn next_start(&self, section: &Section, origin: usize) -> (usize, bool) {
        let default = section.end - self.options.section_overlap;

        let Some(open) = section.content.rfind(TABLE_OPEN) else {
            return (default, false);
        };
        let unclosed = match section.content.rfind(TABLE_CLOSE) {
            Some(close) => open > close,
            None => true,
        };
        let table_start = section.content[..open].chars().count();
        // A table opening near the section start would restart at the same
        // place forever when it is longer than a section.
        if !unclosed || table_start <= self.options.sentence_search_limit.saturating_mul(2) {
            return (default, false);
        }

        let table_offset = section.start + table_start;
        let candidate = default.min(table_offset);
        if candidate <= origin {
            log::debug!(
                "Unclosed table at offset {} would not advance past {}, keeping overlap",
                table_offset,
                origin
            );
            return (default, false);
        }
        log::debug!(
            "Section ends with unclosed table, starting next section at page {:?} offset {}",
            self.page_map.page_for_offset(candidate),
            candidate
        );
        (candidate, candidate == table_offset)
    }

    fn section(&self, start: usize, end: usize) -> Section {
        Section {
            content: self.text[start..end].iter().collect(),
            page_number: self.page_map.page_for_offset(start).unwrap_or_default(),
            start,
            end,
        }
    }
}

impl<'a> Iterator for SectionSplitter<'a> {
    type Item = Section;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let overlap = self.options.section_overlap;
        if self.start.saturating_add(overlap) < self.text.len() {
            let origin = self.start;
            let end = self.find_end(origin);
            let start = if self.anchored {
                origin
            } else {
                self.find_start(origin, end)
            };

            let section = self.section(start, end);
            self.end = end;
            (self.start, self.anchored) = self.next_start(&section, origin);
            return Some(section);
        }

        self.done = true;
        if self.start.saturating_add(overlap) < self.end {
            return Some(self.section(self.start, self.end));
        }
        None
    }
}

/// Split a page map into sections, collected in order.
pub fn split_sections(page_map: &PageMap, options: &SplitOptions) -> Result<Vec<Section>> {
    let splitter = SectionSplitter::new(page_map, options.clone())?;
    let sections: Vec<Section> = splitter.collect();
    log::debug!(
        "Split {} chars into {} sections",
        page_map.char_len(),
        sections.len()
    );
    Ok(sections)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(text: &str) -> Vec<Section> {
        let map = PageMap::from_page_texts([text]);
        split_sections(&map, &SplitOptions::default()).unwrap()
    }

    #[test]
    fn test_short_text_yields_nothing() {
        assert!(split(&"x".repeat(50)).is_empty());
        assert!(split(&"x".repeat(100)).is_empty());
        assert!(split("").is_empty());
    }

    #[test]
    fn test_just_over_overlap_is_one_section() {
        let text = "y".repeat(101);
        let sections = split(&text);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].content, text);
    }

    #[test]
    fn test_sentence_boundaries() {
        let text = "A. B. C. ".repeat(200);
        let sections = split(&text);

        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].start, 0);
        assert_eq!(sections[0].end, 1001);
        assert!(sections[0].content.ends_with('.'));
        // Next section starts right after a sentence ending
        assert_eq!(sections[1].start, 902);
        assert_eq!(sections[1].end, text.len());
    }

    #[test]
    fn test_falls_back_to_word_break() {
        // No sentence endings at all, only spaces every 10 chars
        let text = "abcdefghi ".repeat(300);
        let sections = split(&text);

        assert!(sections.len() >= 3);
        for section in &sections[..sections.len() - 1] {
            assert!(section.content.ends_with(' '), "{:?}", section.content);
        }
    }

    #[test]
    fn test_unbroken_token_hard_cut() {
        let text = "x".repeat(3000);
        let sections = split(&text);

        assert_eq!(sections[0].char_len(), 1101);
        for section in &sections {
            assert!(section.char_len() <= 1101);
        }
        assert_eq!(sections.last().unwrap().end, 3000);
    }

    #[test]
    fn test_next_section_restarts_at_unclosed_table() {
        let prose = "Lorem ipsum dolor sit amet. ".repeat(20);
        let table = format!(
            "<table>{}</table>",
            "<tr><td>cell</td></tr>".repeat(60)
        );
        let text = format!("{}{}{}", prose, table, prose);
        let table_offset = prose.chars().count();

        let sections = split(&text);
        assert!(sections[0].content.contains("<table>"));
        assert!(!sections[0].content.contains("</table>"));
        assert_eq!(sections[1].start, table_offset);
        assert!(sections[1].content.starts_with("<table>"));
    }

    #[test]
    fn test_table_near_section_start_keeps_overlap() {
        let text = format!("Intro. <table>{}", "<tr><td>x</td></tr>".repeat(200));
        let sections = split(&text);

        assert!(sections.len() > 1);
        assert!(sections[1].start > sections[0].start + 200);
    }

    #[test]
    fn test_page_attribution() {
        let map = PageMap::from_page_texts(["a".repeat(2000), "b".repeat(2000)]);
        let sections = split_sections(&map, &SplitOptions::default()).unwrap();

        assert_eq!(sections[0].page_number, 0);
        assert_eq!(sections.last().unwrap().page_number, 1);
    }

    #[test]
    fn test_invalid_options() {
        let map = PageMap::from_page_texts(["text"]);
        let options = SplitOptions::new().with_section_overlap(5000);
        assert!(SectionSplitter::new(&map, options).is_err());
    }

    #[test]
    fn test_near_limit_max_length_yields_whole_text() {
        let map = PageMap::from_page_texts(["Sentence one. ".repeat(40)]);
        let options = SplitOptions::new().with_max_section_length(usize::MAX - 101);
        let sections = split_sections(&map, &options).unwrap();

        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].start, 0);
        assert_eq!(sections[0].end, map.char_len());
    }

    #[test]
    fn test_overflowing_max_length_rejected() {
        let map = PageMap::from_page_texts(["text"]);
        let options = SplitOptions::new().with_max_section_length(usize::MAX);
        assert!(split_sections(&map, &options).is_err());
    }

    #[test]
    fn test_iterator_is_fused_after_done() {
        let map = PageMap::from_page_texts(["z".repeat(500)]);
        let mut splitter = SectionSplitter::new(&map, SplitOptions::default()).unwrap();
        assert!(splitter.next().is_some());
        assert!(splitter.next().is_none());
        assert!(splitter.is_done());
        assert!(splitter.next().is_none());
    }
}
