use notesconv_core::decode_legacy_text;

#[test]
fn ascii_prefix_before_nul_is_exact() {
    let input = b"Subject: quarterly report\0\x01\x02garbage";
    assert_eq!(decode_legacy_text(input), "Subject: quarterly report");
}

#[test]
fn all_ascii_bytes_pass_through() {
    let input: Vec<u8> = (1u8..0x80).collect();
    let decoded = decode_legacy_text(&input);
    assert_eq!(decoded.as_bytes(), input.as_slice());
}

#[test]
fn invalid_high_bytes_become_replacement_markers() {
    let decoded = decode_legacy_text(b"name=\x80\x81");
    assert_eq!(decoded, "name=\u{fffd}\u{fffd}");
}
