//! Fixed-size file header reader.

use super::{read_u16_le, FILE_HEADER_LEN, FILE_SIGNATURE};
use crate::error::{ParseError, ParseResult};
use serde::{Deserialize, Serialize};

/// Parsed 22-byte file header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileHeader {
    pub signature: [u8; 2],
    pub version: u16,
    /// Length of the database info buffer that follows the header.
    pub info_buffer_size: u16,
    pub class_id: u16,
}

impl FileHeader {
    /// Parses the header from the first bytes of a container.
    ///
    /// Bytes beyond `FILE_HEADER_LEN` are ignored. The version is not checked
    /// here; see `VersionPolicy`.
    ///
    /// # Errors
    /// - `InvalidFormat` when fewer than 22 bytes are given.
    /// - `InvalidFormat` when the signature does not match.
    pub fn parse(bytes: &[u8]) -> ParseResult<Self> {
        if bytes.len() < FILE_HEADER_LEN {
            return Err(ParseError::InvalidFormat(format!(
                "file header requires {FILE_HEADER_LEN} bytes, got {}",
                bytes.len()
            )));
        }

        let signature = [bytes[0], bytes[1]];
        if signature != FILE_SIGNATURE {
            return Err(ParseError::InvalidFormat(format!(
                "bad signature {:02x}{:02x}",
                signature[0], signature[1]
            )));
        }

        let field = |offset| {
            read_u16_le(bytes, offset).ok_or_else(|| {
                ParseError::InvalidFormat(format!("header field at offset {offset} out of range"))
            })
        };

        Ok(Self {
            signature,
            version: field(2)?,
            info_buffer_size: field(4)?,
            class_id: field(6)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::FileHeader;
    use crate::error::ParseError;

    fn header_bytes(version: u16, info_size: u16, class_id: u16) -> Vec<u8> {
        let mut bytes = vec![0x1A, 0x00];
        bytes.extend_from_slice(&version.to_le_bytes());
        bytes.extend_from_slice(&info_size.to_le_bytes());
        bytes.extend_from_slice(&class_id.to_le_bytes());
        bytes.resize(22, 0);
        bytes
    }

    #[test]
    fn parses_fields_bit_exact() {
        let header = FileHeader::parse(&header_bytes(0xBEEF, 0x0102, 0xFFFF)).unwrap();
        assert_eq!(header.version, 0xBEEF);
        assert_eq!(header.info_buffer_size, 0x0102);
        assert_eq!(header.class_id, 0xFFFF);
    }

    #[test]
    fn rejects_short_header() {
        let bytes = header_bytes(43, 128, 1);
        let err = FileHeader::parse(&bytes[..21]).unwrap_err();
        assert!(matches!(err, ParseError::InvalidFormat(_)));
    }

    #[test]
    fn rejects_bad_signature() {
        let mut bytes = header_bytes(43, 128, 1);
        bytes[1] = 0x01;
        let err = FileHeader::parse(&bytes).unwrap_err();
        assert!(err.to_string().contains("signature"));
    }
}
