//! Database info buffer reader.

use crate::text::legacy::decode_lossless_prefix;
use serde::{Deserialize, Serialize};

/// Start of the title window inside the info buffer.
pub const TITLE_OFFSET: usize = 64;
/// End (exclusive) of the title window inside the info buffer.
pub const TITLE_END: usize = 128;

/// Metadata recovered from the database info buffer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DatabaseHeader {
    /// May be empty when the buffer is short or the window is blank.
    pub title: String,
}

impl DatabaseHeader {
    /// Reads the header from the info buffer. Never fails.
    pub fn parse(info_buffer: &[u8]) -> Self {
        let end = info_buffer.len().min(TITLE_END);
        let title = info_buffer
            .get(TITLE_OFFSET..end)
            .map(decode_lossless_prefix)
            .unwrap_or_default();
        Self { title }
    }
}
