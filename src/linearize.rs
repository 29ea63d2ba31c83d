//! Page linearization.
//!
//! Turns an [`AnalyzeResult`] into a [`PageMap`]. Every page contributes two
//! fragments: its words as plain text, then its raw content with each table's
//! character span replaced by the table's HTML.

use crate::model::{AnalyzeResult, AnalyzedPage, PageMap, Table};
use crate::render::table_to_html;

/// Linearize every page of an analysis result.
///
/// Page numbers in the returned map are 0-indexed positions in
/// `result.pages`. Tables are matched to pages through the 1-indexed page
/// number of their first bounding region.
pub fn linearize(result: &AnalyzeResult) -> PageMap {
    let content: Vec<char> = result.content.chars().collect();
    let mut map = PageMap::new();

    let orphans = result
        .tables
        .iter()
        .filter(|t| t.page_number().is_none())
        .count();
    if orphans > 0 {
        log::warn!("Skipping {} tables without bounding regions", orphans);
    }

    for (index, page) in result.pages.iter().enumerate() {
        let page_index = index as u32;
        map.push(page_index, page.plain_text());

        let tables = result.tables_on_page(page.page_number);
        let fragment = substitute_tables(&content, page, &tables);
        map.push(page_index, fragment);
    }

    log::debug!(
        "Linearized {} pages and {} tables into {} chars",
        result.page_count(),
        result.tables.len() - orphans,
        map.char_len()
    );
    map
}

/// Copy the page's raw content, emitting each table's HTML once in place of
/// the characters its spans cover.
fn substitute_tables(content: &[char], page: &AnalyzedPage, tables: &[&Table]) -> String {
    let Some(span) = page.content_span() else {
        return String::new();
    };

    let page_offset = span.offset.min(content.len());
    let page_end = span.end().min(content.len());
    if page_end < span.end() {
        log::warn!(
            "Page {} span {}..{} runs past the content ({} chars), clipping",
            page.page_number,
            span.offset,
            span.end(),
            content.len()
        );
    }
    let page_length = page_end - page_offset;
    if page_length == 0 {
        return String::new();
    }

    // Later spans overwrite earlier ones.
    let mut owners: Vec<Option<usize>> = vec![None; page_length];
    for (table_id, table) in tables.iter().enumerate() {
        for table_span in &table.spans {
            let start = table_span.offset.max(page_offset);
            let end = table_span.end().min(page_end);
            if start < end {
                for owner in &mut owners[start - page_offset..end - page_offset] {
                    *owner = Some(table_id);
                }
            }
        }
    }

    let mut output = String::with_capacity(page_length);
    let mut emitted = vec![false; tables.len()];
    for (idx, owner) in owners.iter().enumerate() {
        match *owner {
            None => output.push(content[page_offset + idx]),
            Some(table_id) if !emitted[table_id] => {
                output.push_str(&table_to_html(tables[table_id]));
                emitted[table_id] = true;
            }
            Some(_) => {}
        }
    }
    output
}
