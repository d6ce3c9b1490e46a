//! Ingestion pipeline facade.
//!
//! # Responsibility
//! - Drive header reads, the note scan, classification, and model assembly.
//! - Map header-region failures to a single `ParseError`.
//!
//! # Invariants
//! - The input is read once, front to back.
//! - A call either fails at the header or returns a complete model.
//!
//! # See also
//! - `format::scanner` for record-level recovery rules.

use crate::classify::{NoteClassifier, SubstringClassifier};
use crate::config::ParserConfig;
use crate::error::{ParseError, ParseResult};
use crate::format::db_header::DatabaseHeader;
use crate::format::file_header::FileHeader;
use crate::format::scanner::scan_notes;
use crate::format::{read_up_to, FILE_HEADER_LEN};
use crate::model::application::ApplicationModel;
use crate::schema::{CanonicalSchema, SchemaExtractor};
use crate::service::builder::ModelBuilder;
use log::{error, info};
use std::fs::File;
use std::io::{BufReader, Cursor, Read};
use std::path::Path;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

/// Parses notes containers into `ApplicationModel`s.
pub struct NotesParser<
    C: NoteClassifier = SubstringClassifier,
    S: SchemaExtractor = CanonicalSchema,
> {
    config: ParserConfig,
    classifier: C,
    schema: S,
}

impl NotesParser {
    /// Creates a parser with the substring classifier and canonical schema.
    pub fn new(config: ParserConfig) -> Self {
        Self::with_components(config, SubstringClassifier, CanonicalSchema)
    }
}

impl Default for NotesParser {
    fn default() -> Self {
        Self::new(ParserConfig::default())
    }
}

impl<C: NoteClassifier, S: SchemaExtractor> NotesParser<C, S> {
    pub fn with_components(config: ParserConfig, classifier: C, schema: S) -> Self {
        Self {
            config,
            classifier,
            schema,
        }
    }

    /// Parses a container file; its file name becomes the model id.
    ///
    /// # Errors
    /// - `Open` when the file cannot be opened.
    /// - Any header-level error from [`NotesParser::parse_reader`].
    pub fn parse_file(&self, path: impl AsRef<Path>) -> ParseResult<ApplicationModel> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| {
            let err = ParseError::Open {
                path: path.to_path_buf(),
                source,
            };
            error!(
                "event=parse_failed module=service status=error error_code={} error={}",
                err.code(),
                err
            );
            err
        })?;
        let source_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        self.parse_reader(BufReader::new(file), &source_name)
    }

    pub fn parse_bytes(&self, bytes: &[u8], source_name: &str) -> ParseResult<ApplicationModel> {
        self.parse_reader(Cursor::new(bytes), source_name)
    }

    /// Parses a container from any reader.
    ///
    /// # Errors
    /// - `Config` when scan limits are invalid.
    /// - `InvalidFormat` on a short header or bad signature.
    /// - `UnsupportedVersion` when the version policy rejects the file.
    /// - `TruncatedInput` on an I/O error inside the header region.
    pub fn parse_reader<R: Read>(
        &self,
        mut reader: R,
        source_name: &str,
    ) -> ParseResult<ApplicationModel> {
        let started_at = Instant::now();
        info!("event=parse_start module=service status=start source={source_name}");

        match self.run(&mut reader, source_name) {
            Ok(app) => {
                info!(
                    "event=model_built module=service status=ok source={} forms={} views={} documents={} duration_ms={}",
                    source_name,
                    app.forms.len(),
                    app.views.len(),
                    app.documents.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(app)
            }
            Err(err) => {
                error!(
                    "event=parse_failed module=service status=error source={} duration_ms={} error_code={} error={}",
                    source_name,
                    started_at.elapsed().as_millis(),
                    err.code(),
                    err
                );
                Err(err)
            }
        }
    }

    fn run<R: Read>(&self, reader: &mut R, source_name: &str) -> ParseResult<ApplicationModel> {
        self.config.limits.validate()?;

        let header_bytes =
            read_up_to(reader, FILE_HEADER_LEN).map_err(|source| ParseError::TruncatedInput {
                region: "file header",
                source,
            })?;
        let file_header = FileHeader::parse(&header_bytes)?;
        if !self.config.version_policy.accepts(file_header.version) {
            return Err(ParseError::UnsupportedVersion {
                version: file_header.version,
            });
        }
        info!(
            "event=file_header module=service status=ok version={} class_id={} info_buffer_size={}",
            file_header.version, file_header.class_id, file_header.info_buffer_size
        );

        let info_buffer = read_up_to(reader, usize::from(file_header.info_buffer_size)).map_err(
            |source| ParseError::TruncatedInput {
                region: "database header",
                source,
            },
        )?;
        let db_header = DatabaseHeader::parse(&info_buffer);

        let outcome = scan_notes(reader, &self.config.limits);
        info!(
            "event=notes_scanned module=service status=ok accepted={} stop_reason={}",
            outcome.notes.len(),
            outcome.stop.as_str()
        );

        let classified: Vec<_> = outcome
            .notes
            .into_iter()
            .map(|note| {
                let role = self.classifier.classify(&note);
                (note, role)
            })
            .collect();

        let now_ms = self.config.clock_ms.unwrap_or_else(epoch_millis);
        let builder = ModelBuilder::new(source_name, now_ms, &self.schema);
        Ok(builder.build(&file_header, &db_header, classified))
    }
}

fn epoch_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}
