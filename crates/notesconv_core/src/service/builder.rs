//! Application model assembly.
//!
//! # Responsibility
//! - Turn classified notes into forms, views, and documents.
//! - Guarantee a directly usable model through fallback synthesis.
//!
//! # Invariants
//! - Output order follows note order within each collection.
//! - `Unknown` notes are dropped.
//! - A built model has at least one form and at least one view; each empty
//!   collection receives exactly one default entry.

use crate::classify::NoteRole;
use crate::format::db_header::DatabaseHeader;
use crate::format::file_header::FileHeader;
use crate::format::scanner::RawNote;
use crate::model::application::{ApplicationModel, DocumentModel, FormModel, ViewModel};
use crate::schema::{SchemaExtractor, DEFAULT_FORM_NAME};
use log::{debug, trace};

pub const DEFAULT_FORM_ID: &str = "default_form";
pub const DEFAULT_VIEW_ID: &str = "default_view";
pub const DEFAULT_VIEW_NAME: &str = "AllDocuments";

/// Assembles one `ApplicationModel` from parsed parts.
pub struct ModelBuilder<'s, S: SchemaExtractor> {
    source_name: String,
    now_ms: i64,
    schema: &'s S,
}

impl<'s, S: SchemaExtractor> ModelBuilder<'s, S> {
    /// `source_name` is the input file name; `now_ms` stamps every timestamp.
    pub fn new(source_name: impl Into<String>, now_ms: i64, schema: &'s S) -> Self {
        Self {
            source_name: source_name.into(),
            now_ms,
            schema,
        }
    }

    pub fn build(
        &self,
        file_header: &FileHeader,
        db_header: &DatabaseHeader,
        notes: impl IntoIterator<Item = (RawNote, NoteRole)>,
    ) -> ApplicationModel {
        let name = if db_header.title.is_empty() {
            self.source_name.clone()
        } else {
            db_header.title.clone()
        };

        let mut app = ApplicationModel {
            id: self.source_name.clone(),
            name,
            description: Some(format!("Converted from {}", self.source_name)),
            format_version: file_header.version,
            created_date: Some(self.now_ms),
            modified_date: Some(self.now_ms),
            forms: Vec::new(),
            views: Vec::new(),
            documents: Vec::new(),
        };

        let mut dropped = 0usize;
        for (note, role) in notes {
            trace!(
                "event=note_classified module=service note_id={} note_class={} role={}",
                note.note_id,
                note.note_class,
                role.as_str()
            );
            match role {
                NoteRole::Form => app.forms.push(self.form_from_note(&note)),
                NoteRole::View => app.views.push(self.view_from_note(&note)),
                NoteRole::Document => app.documents.push(self.document_from_note(&note)),
                NoteRole::Unknown => dropped += 1,
            }
        }

        if app.forms.is_empty() {
            app.forms.push(self.default_form());
        }
        if app.views.is_empty() {
            app.views.push(self.default_view());
        }

        debug!(
            "event=model_assemble module=service status=ok forms={} views={} documents={} dropped={}",
            app.forms.len(),
            app.views.len(),
            app.documents.len(),
            dropped
        );
        app
    }

    fn form_from_note(&self, note: &RawNote) -> FormModel {
        FormModel {
            id: note.note_id.to_string(),
            name: self.schema.form_name(note),
            description: Some(format!("Form extracted from note {}", note.note_id)),
            fields: self.schema.form_fields(Some(note)),
            created_date: Some(self.now_ms),
        }
    }

    fn view_from_note(&self, note: &RawNote) -> ViewModel {
        ViewModel {
            id: note.note_id.to_string(),
            name: self.schema.view_name(note),
            description: Some(format!("View extracted from note {}", note.note_id)),
            columns: self.schema.view_columns(Some(note)),
            created_date: Some(self.now_ms),
            default_view: false,
        }
    }

    fn document_from_note(&self, note: &RawNote) -> DocumentModel {
        DocumentModel {
            id: note.note_id.to_string(),
            form_name: self.schema.document_form_name(note),
            fields: self.schema.document_fields(note, self.now_ms),
            created_date: Some(self.now_ms),
        }
    }

    fn default_form(&self) -> FormModel {
        FormModel {
            id: DEFAULT_FORM_ID.to_string(),
            name: DEFAULT_FORM_NAME.to_string(),
            description: Some("Default form created during conversion".to_string()),
            fields: self.schema.form_fields(None),
            created_date: Some(self.now_ms),
        }
    }

    fn default_view(&self) -> ViewModel {
        ViewModel {
            id: DEFAULT_VIEW_ID.to_string(),
            name: DEFAULT_VIEW_NAME.to_string(),
            description: Some("Default view showing all documents".to_string()),
            columns: self.schema.view_columns(None),
            created_date: Some(self.now_ms),
            default_view: true,
        }
    }
}
