use rstest::rstest;
use serde_ubjson::{decode, decode_with_options, DecodeOptions, Error, ErrorKind};

#[rstest]
#[case(b"".to_vec())]
#[case(vec![b'I', 0x00])]
#[case(vec![b'l', 0x00, 0x00, 0x00])]
#[case(vec![b'L', 0x00])]
#[case(vec![b'd', 0x00, 0x00])]
#[case(vec![b'D'])]
#[case(vec![b'S', b'U', 0x05, b'a', b'b'])]
#[case(vec![b'S', b'U'])]
fn truncated_scalars_fail_with_eof(#[case] input: Vec<u8>) {
    let err = decode(&input).unwrap_err();
    assert!(matches!(err, Error::UnexpectedEof { .. }), "{err}");
    assert_eq!(err.kind(), ErrorKind::Decode);
}

#[rstest]
#[case(b"{".to_vec())]
#[case(b"{U\x01aT".to_vec())]
#[case(b"{#U\x02U\x01aT".to_vec())]
fn unterminated_objects(#[case] input: Vec<u8>) {
    let err = decode(&input).unwrap_err();
    assert!(matches!(err, Error::UnterminatedObject { start: 1 }), "{err}");
}

#[rstest]
#[case(b"[".to_vec())]
#[case(b"[U\x01U\x02".to_vec())]
#[case(b"[#U\x03$i\x01\x02".to_vec())]
#[case(b"[$i\x01\x02".to_vec())]
fn unterminated_arrays(#[case] input: Vec<u8>) {
    let err = decode(&input).unwrap_err();
    assert!(matches!(err, Error::UnterminatedArray { start: 1 }), "{err}");
}

#[rstest]
fn unterminated_inner_array_reports_its_own_start() {
    let err = decode(b"{U\x01a[T}").unwrap_err();
    assert!(matches!(err, Error::UnterminatedArray { start: 5 }), "{err}");
}

#[rstest]
fn truncated_key_fails_with_eof() {
    let err = decode(b"{U\x05ab").unwrap_err();
    assert!(matches!(err, Error::UnexpectedEof { offset: 3, needed: 5 }), "{err}");
}

#[rstest]
#[case(b"[#i\xFFU\x01]".to_vec())]
#[case(b"[#SU\x013".to_vec())]
#[case(b"{#T}".to_vec())]
fn invalid_counts(#[case] input: Vec<u8>) {
    let err = decode(&input).unwrap_err();
    assert!(matches!(err, Error::InvalidCount { offset: 2, .. }), "{err}");
}

#[rstest]
fn invalid_utf8_is_reported() {
    let err = decode(&[b'S', b'U', 0x02, 0xC3, 0x28]).unwrap_err();
    assert!(matches!(err, Error::InvalidUtf8 { offset: 3, .. }), "{err}");
}

#[rstest]
fn nesting_beyond_max_depth_fails() {
    let options = DecodeOptions::new().with_max_depth(3);
    assert!(decode_with_options(b"[[[]]]", &options).is_ok());
    let err = decode_with_options(b"[[[[]]]]", &options).unwrap_err();
    assert!(matches!(err, Error::DepthLimitExceeded { max_depth: 3, .. }), "{err}");
}

#[rstest]
fn deep_input_does_not_overflow_with_default_limit() {
    let input = vec![b'['; 100_000];
    let err = decode(&input).unwrap_err();
    assert!(matches!(err, Error::DepthLimitExceeded { max_depth: 256, .. }));
}

#[rstest]
fn huge_declared_count_fails_instead_of_allocating() {
    let err = decode(&[b'[', b'#', b'l', 0x7F, 0xFF, 0xFF, 0xFF, b'Z']).unwrap_err();
    assert!(matches!(err, Error::UnterminatedArray { start: 1 }), "{err}");
}
