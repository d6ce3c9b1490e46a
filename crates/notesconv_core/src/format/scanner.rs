//! Bounded, fault-tolerant note stream scanner.
//!
//! # Responsibility
//! - Frame notes from the byte stream that follows the info buffer.
//! - Decode each accepted payload into items.
//!
//! # Invariants
//! - Note ids start at 1 and increase by one per accepted note.
//! - At most `ScanLimits::max_notes` notes are returned; no frame is read
//!   after the cap is reached.
//! - A payload buffer is allocated only after its length passed the byte cap.
//! - Malformed frames and read errors end the scan; they are never errors.

use super::item::{decode_items, NoteItems};
use super::{read_u16_le, read_u32_le, read_up_to, NOTE_PREFIX_LEN};
use crate::config::ScanLimits;
use crate::text::legacy::decode_legacy_text;
use log::{debug, warn};
use std::io::Read;

/// One framed note as read from the stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawNote {
    pub note_id: u32,
    pub note_class: u16,
    pub payload: Vec<u8>,
    pub items: NoteItems,
}

impl RawNote {
    /// Builds a note and decodes its payload items.
    pub fn new(note_id: u32, note_class: u16, payload: Vec<u8>) -> Self {
        let items = decode_items(&payload);
        Self {
            note_id,
            note_class,
            payload,
            items,
        }
    }

    /// Returns an item's bytes decoded as legacy text.
    pub fn text_item(&self, key: &str) -> Option<String> {
        self.items.get(key).map(decode_legacy_text)
    }
}

/// Why a scan stopped accepting notes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanStop {
    /// Stream ended cleanly at a frame boundary.
    EndOfStream,
    /// Fewer than 16 bytes were left for a frame prefix.
    ShortPrefix { available: usize },
    /// A frame declared a zero-length payload.
    ZeroLength,
    /// A frame declared a payload larger than the byte cap.
    OversizedNote { length: u32 },
    /// Fewer payload bytes remained than the frame declared.
    TruncatedPayload { expected: usize, available: usize },
    /// The note cap was reached.
    NoteCapReached,
    /// The underlying reader failed.
    ReadError(String),
}

impl ScanStop {
    /// Stable reason string for log fields.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EndOfStream => "end_of_stream",
            Self::ShortPrefix { .. } => "short_prefix",
            Self::ZeroLength => "zero_length",
            Self::OversizedNote { .. } => "oversized_note",
            Self::TruncatedPayload { .. } => "truncated_payload",
            Self::NoteCapReached => "note_cap_reached",
            Self::ReadError(_) => "read_error",
        }
    }
}

/// Notes accepted by one scan plus the reason it ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOutcome {
    pub notes: Vec<RawNote>,
    pub stop: ScanStop,
}

/// Scans notes from `reader` until a stop condition is met.
pub fn scan_notes<R: Read>(reader: &mut R, limits: &ScanLimits) -> ScanOutcome {
    let mut notes = Vec::new();
    let stop = loop {
        if notes.len() >= limits.max_notes {
            break ScanStop::NoteCapReached;
        }
        match next_note(reader, limits, notes.len() as u32 + 1) {
            Ok(note) => notes.push(note),
            Err(stop) => break stop,
        }
    };

    match &stop {
        ScanStop::ReadError(message) => warn!(
            "event=note_scan module=format status=recovered reason={} accepted={} error={}",
            stop.as_str(),
            notes.len(),
            message
        ),
        _ => debug!(
            "event=note_scan module=format status=ok reason={} accepted={}",
            stop.as_str(),
            notes.len()
        ),
    }

    ScanOutcome { notes, stop }
}

fn next_note<R: Read>(
    reader: &mut R,
    limits: &ScanLimits,
    note_id: u32,
) -> Result<RawNote, ScanStop> {
    let prefix = read_up_to(reader, NOTE_PREFIX_LEN).map_err(read_error)?;
    if prefix.is_empty() {
        return Err(ScanStop::EndOfStream);
    }
    if prefix.len() < NOTE_PREFIX_LEN {
        return Err(ScanStop::ShortPrefix {
            available: prefix.len(),
        });
    }

    let (Some(note_class), Some(length)) = (read_u16_le(&prefix, 0), read_u32_le(&prefix, 4))
    else {
        return Err(ScanStop::ShortPrefix {
            available: prefix.len(),
        });
    };
    if length == 0 {
        return Err(ScanStop::ZeroLength);
    }
    if length > limits.max_note_bytes {
        return Err(ScanStop::OversizedNote { length });
    }

    let expected = length as usize;
    let payload = read_up_to(reader, expected).map_err(read_error)?;
    if payload.len() < expected {
        return Err(ScanStop::TruncatedPayload {
            expected,
            available: payload.len(),
        });
    }

    Ok(RawNote::new(note_id, note_class, payload))
}

fn read_error(err: std::io::Error) -> ScanStop {
    ScanStop::ReadError(err.to_string())
}
