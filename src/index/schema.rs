//! Search index field schema for section records.

use serde::Serialize;

/// Field data types used by the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FieldType {
    /// Plain string field
    #[serde(rename = "Edm.String")]
    String,
}

/// One field of the search index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexField {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub key: bool,
    pub searchable: bool,
    pub filterable: bool,
    pub facetable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analyzer: Option<String>,
}

impl IndexField {
    fn string(name: &str) -> Self {
        Self {
            name: name.to_string(),
            field_type: FieldType::String,
            key: false,
            searchable: false,
            filterable: false,
            facetable: false,
            analyzer: None,
        }
    }

    /// A key field.
    pub fn key(name: &str) -> Self {
        Self {
            key: true,
            ..Self::string(name)
        }
    }

    /// A full-text searchable field.
    pub fn searchable(name: &str, analyzer: &str) -> Self {
        Self {
            searchable: true,
            analyzer: Some(analyzer.to_string()),
            ..Self::string(name)
        }
    }

    /// A field usable in filters and facets.
    pub fn filterable(name: &str) -> Self {
        Self {
            filterable: true,
            facetable: true,
            ..Self::string(name)
        }
    }
}

/// Index definition matching [`crate::model::SectionRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexSchema {
    pub name: String,
    pub fields: Vec<IndexField>,
}

impl IndexSchema {
    /// Default content analyzer.
    pub const CONTENT_ANALYZER: &'static str = "en.microsoft";

    /// Schema for an index with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: vec![
                IndexField::key("id"),
                IndexField::searchable("content", Self::CONTENT_ANALYZER),
                IndexField::filterable("category"),
                IndexField::filterable("sourcepage"),
                IndexField::filterable("sourcefile"),
            ],
        }
    }

    /// Look up a field by name.
    pub fn field(&self, name: &str) -> Option<&IndexField> {
        self.fields.iter().find(|f| f.name == name)
    }
}
