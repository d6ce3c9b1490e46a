#![allow(dead_code)]

//! Byte-level fixture builder for integration tests.

pub const SIGNATURE: [u8; 2] = [0x1A, 0x00];

#[derive(Default)]
pub struct Fixture {
    bytes: Vec<u8>,
}

impl Fixture {
    /// Starts a container with a valid 22-byte header and zeroed info buffer.
    pub fn new(version: u16, info_buffer_size: u16, class_id: u16) -> Self {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&SIGNATURE);
        bytes.extend_from_slice(&version.to_le_bytes());
        bytes.extend_from_slice(&info_buffer_size.to_le_bytes());
        bytes.extend_from_slice(&class_id.to_le_bytes());
        bytes.resize(22 + usize::from(info_buffer_size), 0);
        Self { bytes }
    }

    /// Writes `title` at offset 64 of the info buffer.
    pub fn title(mut self, title: &str) -> Self {
        let start = 22 + 64;
        self.bytes[start..start + title.len()].copy_from_slice(title.as_bytes());
        self
    }

    /// Appends a framed note with the given raw payload.
    pub fn note(mut self, note_class: u16, payload: &[u8]) -> Self {
        self.bytes.extend(frame(note_class, payload.len() as u32));
        self.bytes.extend_from_slice(payload);
        self
    }

    /// Appends a note whose payload is a single item carrying `text`.
    pub fn text_note(self, note_class: u16, text: &str) -> Self {
        self.note(note_class, &item(1, text.as_bytes()))
    }

    pub fn raw(mut self, bytes: &[u8]) -> Self {
        self.bytes.extend_from_slice(bytes);
        self
    }

    pub fn build(self) -> Vec<u8> {
        self.bytes
    }
}

/// 16-byte note prefix.
pub fn frame(note_class: u16, note_length: u32) -> Vec<u8> {
    let mut bytes = vec![0u8; 16];
    bytes[0..2].copy_from_slice(&note_class.to_le_bytes());
    bytes[4..8].copy_from_slice(&note_length.to_le_bytes());
    bytes
}

/// One item: type, length, body.
pub fn item(item_type: u16, data: &[u8]) -> Vec<u8> {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&item_type.to_le_bytes());
    bytes.extend_from_slice(&(data.len() as u16).to_le_bytes());
    bytes.extend_from_slice(data);
    bytes
}

/// The reference sample: version 43, 128-byte info buffer, one form note,
/// one document note.
pub fn sample_database() -> Vec<u8> {
    Fixture::new(43, 128, 1)
        .title("Sample Notes Database")
        .text_note(1024, "Main form")
        .text_note(512, "Document 1 content")
        .build()
}
