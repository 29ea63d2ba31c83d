//! Search index support: records, batching and schema.

mod batch;
mod records;
mod schema;

pub use batch::{batched, Batches, INDEX_BATCH_SIZE};
pub use records::{
    blob_name_from_file_page, sanitize_key, section_id, source_file_filter, PageBlobPattern,
    RecordBuilder,
};
pub use schema::{FieldType, IndexField, IndexSchema};
