//! Ingestion core for Notes-style document database containers.
//! Reads the binary container and produces an `ApplicationModel` for
//! downstream generators.

pub mod classify;
pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod model;
pub mod schema;
pub mod service;
pub mod text;

pub use classify::{classify, NoteClassifier, NoteRole, SubstringClassifier};
pub use config::{
    ConfigError, ParserConfig, ScanLimits, VersionPolicy, DEFAULT_MAX_NOTES,
    DEFAULT_MAX_NOTE_BYTES,
};
pub use error::{ParseError, ParseResult};
pub use format::db_header::DatabaseHeader;
pub use format::file_header::FileHeader;
pub use format::item::{decode_items, Item, NoteItems};
pub use format::scanner::{scan_notes, RawNote, ScanOutcome, ScanStop};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::application::{
    ApplicationModel, ColumnModel, DocumentModel, FieldModel, FieldType, FormModel, ViewModel,
};
pub use schema::{CanonicalSchema, SchemaExtractor};
pub use service::builder::ModelBuilder;
pub use service::parser::NotesParser;
pub use text::legacy::decode_legacy_text;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
