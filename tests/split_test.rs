//! Integration tests for section splitting properties.

use sectionize::model::{PageMap, PageMapEntry};
use sectionize::split::{split_sections, SplitOptions, SECTION_OVERLAP, SENTENCE_SEARCH_LIMIT};
use sectionize::Section;

fn sample_texts() -> Vec<String> {
    vec![
        "A. B. C. ".repeat(200),
        "The quick brown fox jumps over the lazy dog! ".repeat(120),
        "no sentence endings here just words separated by spaces ".repeat(90),
        "x".repeat(4321),
        format!(
            "{}<table>{}</table>{}",
            "Intro sentence. ".repeat(40),
            "<tr><td>value</td><td>other</td></tr>".repeat(80),
            "Closing remark. ".repeat(40)
        ),
        "Ünïcödé tëxt wïth äccents. ".repeat(150),
    ]
}

fn split(text: &str) -> Vec<Section> {
    let map = PageMap::from_page_texts([text]);
    split_sections(&map, &SplitOptions::default()).unwrap()
}

#[test]
fn test_coverage_without_gaps() {
    for text in sample_texts() {
        let length = text.chars().count();
        let sections = split(&text);

        assert!(!sections.is_empty());
        assert_eq!(sections[0].start, 0);
        assert_eq!(sections.last().unwrap().end, length);
        for pair in sections.windows(2) {
            assert!(
                pair[1].start <= pair[0].end,
                "gap between {}..{} and {}..{}",
                pair[0].start,
                pair[0].end,
                pair[1].start,
                pair[1].end
            );
        }
    }
}

#[test]
fn test_bounded_length() {
    let bound = SplitOptions::default().max_emitted_length();
    for text in sample_texts() {
        for section in split(&text) {
            assert!(section.char_len() <= bound, "{} > {}", section.char_len(), bound);
            assert_eq!(section.content.chars().count(), section.char_len());
        }
    }
}

#[test]
fn test_overlap_lower_bound() {
    for text in sample_texts() {
        let has_table = text.contains("<table");
        for pair in split(&text).windows(2) {
            assert!(pair[0].end >= pair[1].start);
            assert!(pair[1].start >= pair[0].start);
            if !has_table {
                // Boundary search may land one char past the overlap origin
                assert!(pair[0].end - pair[1].start >= SECTION_OVERLAP - 1);
            }
        }
    }
}

#[test]
fn test_content_matches_source_range() {
    let text = "Alpha beta gamma. Delta epsilon! ".repeat(100);
    let chars: Vec<char> = text.chars().collect();
    for section in split(&text) {
        let expected: String = chars[section.start..section.end].iter().collect();
        assert_eq!(section.content, expected);
    }
}

#[test]
fn test_sections_end_on_sentence_endings() {
    let text = "A. B. C. ".repeat(200);
    let sections = split(&text);

    assert!(sections.len() >= 2);
    for section in &sections[..sections.len() - 1] {
        assert!(section.content.ends_with('.'), "{:?}", section.content);
    }
}

#[test]
fn test_short_input_yields_no_sections() {
    assert!(split(&"a".repeat(50)).is_empty());
}

#[test]
fn test_table_not_bisected() {
    let prose = "Lorem ipsum dolor sit amet, consectetur. ".repeat(10);
    let table = format!("<table>{}</table>", "<tr><td>cell text</td></tr>".repeat(50));
    let text = format!("{}{}{}", prose, table, prose);
    let table_offset = prose.chars().count();

    let sections = split(&text);
    for pair in sections.windows(2) {
        let content = &pair[0].content;
        let Some(open) = content.rfind("<table") else {
            continue;
        };
        let unclosed = content.rfind("</table").map_or(true, |close| open > close);
        let open_chars = content[..open].chars().count();
        if unclosed && open_chars > 2 * SENTENCE_SEARCH_LIMIT {
            assert!(pair[1].start <= pair[0].start + open_chars);
            assert_eq!(pair[1].start, table_offset);
        }
    }
}

#[test]
fn test_long_table_terminates() {
    // A table far longer than a section, opening past the continuation threshold
    let text = format!(
        "{}<table>{}",
        "Prefix sentence here. ".repeat(20),
        "<tr><td>row</td></tr>".repeat(500)
    );
    let length = text.chars().count();
    let sections = split(&text);

    assert_eq!(sections.last().unwrap().end, length);
    assert!(sections.len() < length);
}

#[test]
fn test_page_attribution_monotonic() {
    let map = PageMap::from_page_texts(
        (0..6).map(|page| format!("Page {} sentence. ", page).repeat(40)),
    );
    let sections = split_sections(&map, &SplitOptions::default()).unwrap();

    let mut last_page = 0;
    for section in &sections {
        assert!(section.page_number >= last_page);
        assert_eq!(map.page_for_offset(section.start), Some(section.page_number));
        last_page = section.page_number;
    }
    assert_eq!(last_page, 5);

    let mut last = 0;
    for offset in (0..map.char_len()).step_by(37) {
        let page = map.page_for_offset(offset).unwrap();
        assert!(page >= last);
        last = page;
    }
}

#[test]
fn test_page_resolution_scenario() {
    let map = PageMap::from_entries(vec![
        PageMapEntry::new(0, 0, "abc"),
        PageMapEntry::new(0, 3, "<table>x</table>"),
        PageMapEntry::new(1, 19, "def"),
    ])
    .unwrap();

    assert_eq!(map.page_for_offset(10), Some(0));
    assert_eq!(map.page_for_offset(20), Some(1));
}

#[test]
fn test_custom_options() {
    let options = SplitOptions::new()
        .with_max_section_length(200)
        .with_sentence_search_limit(20)
        .with_section_overlap(20);
    let map = PageMap::from_page_texts(["Short one. Another one. ".repeat(50)]);
    let sections = split_sections(&map, &options).unwrap();

    assert!(sections.len() > 5);
    for section in &sections {
        assert!(section.char_len() <= options.max_emitted_length());
    }
}
