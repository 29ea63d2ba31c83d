//! HTML rendering for detected tables.

use crate::model::Table;

/// Render a table's cell grid as a single-line HTML table.
///
/// Rows are emitted for indices `0..row_count`; cells with an index outside
/// that range are never selected. No structural validation is performed.
pub fn table_to_html(table: &Table) -> String {
    let mut output = String::from("<table>");

    for row_index in 0..table.row_count {
        output.push_str("<tr>");
        for cell in table.row(row_index) {
            let tag = if cell.is_header() { "th" } else { "td" };
            output.push('<');
            output.push_str(tag);
            if cell.column_span > 1 {
                output.push_str(&format!(" colSpan={}", cell.column_span));
            }
            if cell.row_span > 1 {
                output.push_str(&format!(" rowSpan={}", cell.row_span));
            }
            output.push('>');
            output.push_str(&escape_html(&cell.content));
            output.push_str("</");
            output.push_str(tag);
            output.push('>');
        }
        output.push_str("</tr>");
    }

    output.push_str("</table>");
    output
}

/// Escape HTML special characters, quotes included.
pub fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}
