//! Rendering of tables into inline HTML and of records into JSON.

mod html;
mod json;

pub use html::{escape_html, table_to_html};
pub use json::{to_json, JsonFormat};
