mod common;

use common::Fixture;
use notesconv_core::{DatabaseHeader, FileHeader, ParseError};

#[test]
fn header_fields_round_trip_bit_exact() {
    for (version, info_size, class_id) in [(43, 128, 1), (0, 0, 0), (u16::MAX, 300, 0x8001)] {
        let bytes = Fixture::new(version, info_size, class_id).build();
        let header = FileHeader::parse(&bytes).unwrap();
        assert_eq!(header.signature, [0x1A, 0x00]);
        assert_eq!(header.version, version);
        assert_eq!(header.info_buffer_size, info_size);
        assert_eq!(header.class_id, class_id);
    }
}

#[test]
fn any_signature_corruption_is_rejected() {
    for index in 0..2 {
        let mut bytes = Fixture::new(43, 0, 1).build();
        bytes[index] ^= 0x40;
        let err = FileHeader::parse(&bytes).unwrap_err();
        assert!(matches!(err, ParseError::InvalidFormat(_)));
    }
}

#[test]
fn database_title_comes_from_info_buffer() {
    let bytes = Fixture::new(43, 128, 1).title("Sample Notes Database").build();
    let header = DatabaseHeader::parse(&bytes[22..]);
    assert_eq!(header.title, "Sample Notes Database");
}
