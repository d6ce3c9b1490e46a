//! Parser tuning knobs.
//!
//! # Responsibility
//! - Carry the resource caps that bound every scan.
//! - Hold the file-version acceptance policy and clock override.
//!
//! # Invariants
//! - Defaults reproduce the documented caps: 100 notes, 1 MiB per note.
//! - `max_note_bytes` is never zero.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Maximum number of notes accepted by one scan.
pub const DEFAULT_MAX_NOTES: usize = 100;
/// Maximum payload length (bytes) of a single note frame.
pub const DEFAULT_MAX_NOTE_BYTES: u32 = 1024 * 1024;

/// Hard caps applied by the note stream scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanLimits {
    /// Scan stops once this many notes were accepted.
    pub max_notes: usize,
    /// Frames declaring a longer payload end the scan.
    pub max_note_bytes: u32,
}

impl ScanLimits {
    /// Creates validated limits.
    ///
    /// # Errors
    /// - Returns `ConfigError::ZeroNoteBytes` when `max_note_bytes == 0`.
    pub fn new(max_notes: usize, max_note_bytes: u32) -> Result<Self, ConfigError> {
        let limits = Self {
            max_notes,
            max_note_bytes,
        };
        limits.validate()?;
        Ok(limits)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_note_bytes == 0 {
            return Err(ConfigError::ZeroNoteBytes);
        }
        Ok(())
    }
}

impl Default for ScanLimits {
    fn default() -> Self {
        Self {
            max_notes: DEFAULT_MAX_NOTES,
            max_note_bytes: DEFAULT_MAX_NOTE_BYTES,
        }
    }
}

/// Which file header versions the parser accepts.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum VersionPolicy {
    /// Every version value is accepted.
    #[default]
    AcceptAll,
    /// Only the listed versions are accepted.
    AllowList(Vec<u16>),
}

impl VersionPolicy {
    pub fn accepts(&self, version: u16) -> bool {
        match self {
            Self::AcceptAll => true,
            Self::AllowList(versions) => versions.contains(&version),
        }
    }
}

/// Full parser configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParserConfig {
    pub limits: ScanLimits,
    pub version_policy: VersionPolicy,
    /// Unix epoch milliseconds stamped on the model. `None` reads the wall clock.
    pub clock_ms: Option<i64>,
}

impl ParserConfig {
    pub fn with_limits(mut self, limits: ScanLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn with_version_policy(mut self, policy: VersionPolicy) -> Self {
        self.version_policy = policy;
        self
    }

    /// Pins model timestamps, making output deterministic.
    pub fn with_clock_ms(mut self, clock_ms: i64) -> Self {
        self.clock_ms = Some(clock_ms);
        self
    }
}

/// Configuration validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    ZeroNoteBytes,
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroNoteBytes => write!(f, "max_note_bytes must be greater than zero"),
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::{ConfigError, ScanLimits, VersionPolicy, DEFAULT_MAX_NOTES};

    #[test]
    fn default_limits_match_documented_caps() {
        let limits = ScanLimits::default();
        assert_eq!(limits.max_notes, DEFAULT_MAX_NOTES);
        assert_eq!(limits.max_note_bytes, 1_048_576);
    }

    #[test]
    fn rejects_zero_note_bytes() {
        let err = ScanLimits::new(10, 0).expect_err("zero byte cap must fail");
        assert_eq!(err, ConfigError::ZeroNoteBytes);
    }

    #[test]
    fn allow_list_only_accepts_listed_versions() {
        let policy = VersionPolicy::AllowList(vec![41, 43]);
        assert!(policy.accepts(43));
        assert!(!policy.accepts(20));
        assert!(VersionPolicy::AcceptAll.accepts(u16::MAX));
    }
}
