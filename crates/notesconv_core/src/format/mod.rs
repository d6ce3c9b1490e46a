//! Binary container layout and readers.
//!
//! # Responsibility
//! - Describe the fixed header layout and record framing.
//! - Parse headers, frame notes, and split note payloads into items.
//!
//! # Invariants
//! - All multi-byte integers are little-endian.
//! - No reader ever indexes past the bytes it was given.
//!
//! Layout:
//! ```text
//! [file header: 22 bytes][info buffer: info_buffer_size bytes]
//! [note prefix: 16 bytes][payload: note_length bytes] ...
//! ```

use std::io::{self, Read};

pub mod db_header;
pub mod file_header;
pub mod item;
pub mod scanner;

/// Leading bytes every container must start with.
pub const FILE_SIGNATURE: [u8; 2] = [0x1A, 0x00];
/// Size of the fixed file header.
pub const FILE_HEADER_LEN: usize = 22;
/// Size of the prefix framing each note.
pub const NOTE_PREFIX_LEN: usize = 16;
/// Size of the prefix framing each item inside a note payload.
pub const ITEM_PREFIX_LEN: usize = 4;

/// Note class tag used by design notes (forms, views).
pub const NOTE_CLASS_DESIGN: u16 = 1024;
/// Note class tag used by data documents.
pub const NOTE_CLASS_DOCUMENT: u16 = 512;

/// Upper bound on the buffer reserved before any byte has been read.
const READ_RESERVE_LIMIT: usize = 64 * 1024;

/// Reads up to `len` bytes, returning fewer only at end of stream.
///
/// The buffer grows with the bytes actually read, so a large declared length
/// on a short stream does not reserve memory up front.
pub(crate) fn read_up_to<R: Read>(reader: &mut R, len: usize) -> io::Result<Vec<u8>> {
    let mut buf = Vec::with_capacity(len.min(READ_RESERVE_LIMIT));
    reader.by_ref().take(len as u64).read_to_end(&mut buf)?;
    Ok(buf)
}

pub(crate) fn read_u16_le(bytes: &[u8], offset: usize) -> Option<u16> {
    let raw = bytes.get(offset..offset.checked_add(2)?)?;
    Some(u16::from_le_bytes([raw[0], raw[1]]))
}

pub(crate) fn read_u32_le(bytes: &[u8], offset: usize) -> Option<u32> {
    let raw = bytes.get(offset..offset.checked_add(4)?)?;
    Some(u32::from_le_bytes([raw[0], raw[1], raw[2], raw[3]]))
}

#[cfg(test)]
mod tests {
    use super::{read_u16_le, read_u32_le, read_up_to};
    use std::io::Cursor;

    #[test]
    fn reads_little_endian_values() {
        let bytes = [0x2B, 0x00, 0x00, 0x01, 0x00, 0x00];
        assert_eq!(read_u16_le(&bytes, 0), Some(43));
        assert_eq!(read_u32_le(&bytes, 2), Some(65_536));
    }

    #[test]
    fn out_of_range_reads_return_none() {
        let bytes = [0x01, 0x02, 0x03];
        assert_eq!(read_u16_le(&bytes, 2), None);
        assert_eq!(read_u32_le(&bytes, 0), None);
        assert_eq!(read_u16_le(&bytes, usize::MAX), None);
    }

    #[test]
    fn read_up_to_returns_short_buffer_at_eof() {
        let mut cursor = Cursor::new(vec![1u8, 2, 3]);
        assert_eq!(read_up_to(&mut cursor, 2).unwrap(), vec![1, 2]);
        assert_eq!(read_up_to(&mut cursor, 16).unwrap(), vec![3]);
        assert!(read_up_to(&mut cursor, 16).unwrap().is_empty());
    }

    #[test]
    fn read_up_to_does_not_reserve_declared_length() {
        let mut cursor = Cursor::new(vec![7u8; 4]);
        let buf = read_up_to(&mut cursor, usize::MAX).unwrap();
        assert_eq!(buf, vec![7u8; 4]);
        assert!(buf.capacity() <= 64 * 1024);
    }
}
