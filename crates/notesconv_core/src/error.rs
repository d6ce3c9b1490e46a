//! Fatal parse errors surfaced to pipeline callers.
//!
//! # Responsibility
//! - Define the single error type returned by the ingestion pipeline.
//! - Keep header-level failures distinct from recovered record-level faults.
//!
//! # Invariants
//! - Only header-region problems (and input open failures) are fatal.
//! - Record and item malformation never reaches this type.

use crate::config::ConfigError;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;
use std::path::PathBuf;

pub type ParseResult<T> = Result<T, ParseError>;

/// Fatal ingestion failure. No partial model accompanies it.
#[derive(Debug)]
pub enum ParseError {
    /// Signature mismatch or a header shorter than its fixed size.
    InvalidFormat(String),
    /// I/O failure while reading a mandatory header region.
    TruncatedInput {
        region: &'static str,
        source: io::Error,
    },
    /// File version rejected by an allow-list `VersionPolicy`.
    UnsupportedVersion { version: u16 },
    /// Input file could not be opened.
    Open { path: PathBuf, source: io::Error },
    /// Parser configured with invalid limits.
    Config(ConfigError),
}

impl ParseError {
    /// Stable short code used in `error_code=` log fields.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidFormat(_) => "invalid_format",
            Self::TruncatedInput { .. } => "truncated_input",
            Self::UnsupportedVersion { .. } => "unsupported_version",
            Self::Open { .. } => "open_failed",
            Self::Config(_) => "invalid_config",
        }
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidFormat(message) => write!(f, "invalid notes file: {message}"),
            Self::TruncatedInput { region, source } => {
                write!(f, "failed to read {region}: {source}")
            }
            Self::UnsupportedVersion { version } => {
                write!(f, "unsupported notes file version: {version}")
            }
            Self::Open { path, source } => {
                write!(f, "failed to open `{}`: {source}", path.display())
            }
            Self::Config(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::TruncatedInput { source, .. } => Some(source),
            Self::Open { source, .. } => Some(source),
            Self::Config(err) => Some(err),
            Self::InvalidFormat(_) | Self::UnsupportedVersion { .. } => None,
        }
    }
}

impl From<ConfigError> for ParseError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}
