//! Schema extraction for classified notes.
//!
//! # Responsibility
//! - Supply field, column, and document templates to the model builder.
//!
//! # Invariants
//! - `CanonicalSchema` ignores note bytes and always returns the same templates.
//!   Real field/layout recovery from design notes is not implemented.
//! - Placeholder document `created_date` values are Unix epoch milliseconds
//!   rendered as decimal strings, matching the model's timestamp unit rather
//!   than an ISO-8601 string.

use crate::format::scanner::RawNote;
use crate::model::application::{ColumnModel, FieldModel, FieldType};
use std::collections::BTreeMap;

/// Form name stamped on synthesized documents and the fallback form.
pub const DEFAULT_FORM_NAME: &str = "DefaultForm";

/// Source of form fields, view columns, and document values for notes.
pub trait SchemaExtractor {
    fn form_name(&self, note: &RawNote) -> String {
        format!("Form_{}", note.note_id)
    }

    fn view_name(&self, note: &RawNote) -> String {
        format!("View_{}", note.note_id)
    }

    /// Fields of a form. `None` is passed for the synthesized fallback form.
    fn form_fields(&self, note: Option<&RawNote>) -> Vec<FieldModel>;

    /// Columns of a view. `None` is passed for the synthesized fallback view.
    fn view_columns(&self, note: Option<&RawNote>) -> Vec<ColumnModel>;

    fn document_form_name(&self, _note: &RawNote) -> String {
        DEFAULT_FORM_NAME.to_string()
    }

    fn document_fields(&self, note: &RawNote, now_ms: i64) -> BTreeMap<String, String>;
}

/// Fixed templates substituted for real schema recovery.
#[derive(Debug, Clone, Copy, Default)]
pub struct CanonicalSchema;

impl SchemaExtractor for CanonicalSchema {
    fn form_fields(&self, _note: Option<&RawNote>) -> Vec<FieldModel> {
        vec![
            FieldModel::new("title", "Title", FieldType::Text, "Title").required(),
            FieldModel::new("content", "Content", FieldType::RichText, "Content"),
            FieldModel::new("created_date", "Created", FieldType::Datetime, "Created Date"),
        ]
    }

    fn view_columns(&self, _note: Option<&RawNote>) -> Vec<ColumnModel> {
        vec![
            ColumnModel::new("title", "title", "Title", FieldType::Text),
            ColumnModel::new("created_date", "created_date", "Created", FieldType::Datetime),
            ColumnModel::new("author", "author", "Author", FieldType::Text),
        ]
    }

    fn document_fields(&self, note: &RawNote, now_ms: i64) -> BTreeMap<String, String> {
        BTreeMap::from([
            ("title".to_string(), format!("Document {}", note.note_id)),
            (
                "content".to_string(),
                "Sample document content".to_string(),
            ),
            ("created_date".to_string(), now_ms.to_string()),
        ])
    }
}
