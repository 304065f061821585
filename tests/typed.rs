use rstest::rstest;
use serde::Deserialize;
use serde_ubjson::{from_slice, Error, ErrorKind};

#[derive(Debug, Deserialize, PartialEq)]
struct Repo {
    name: String,
    stars: u32,
    private: bool,
    topics: Vec<String>,
    license: Option<String>,
    score: f64,
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
struct Header {
    version: u8,
    kind: String,
}

fn repo_bytes() -> Vec<u8> {
    let mut out = b"{U\x04nameSU\x04packU\x05starsI\x01\x2cU\x07privateF".to_vec();
    out.extend_from_slice(b"U\x06topics[$S#U\x02U\x03bin3fmtU\x07licenseZU\x05scored");
    out.extend_from_slice(&0.25f32.to_be_bytes());
    out.push(b'}');
    out
}

#[rstest]
fn object_root_deserializes_into_struct() {
    let repo: Repo = from_slice(&repo_bytes()).unwrap();
    assert_eq!(
        repo,
        Repo {
            name: "pack".to_string(),
            stars: 300,
            private: false,
            topics: vec!["bin".to_string(), "fmt".to_string()],
            license: None,
            score: 0.25,
        }
    );
}

#[rstest]
fn renamed_fields_follow_serde_attributes() {
    let header: Header = from_slice(b"{U\x07VersionU\x02U\x04KindSU\x03raw}").unwrap();
    assert_eq!(
        header,
        Header {
            version: 2,
            kind: "raw".to_string()
        }
    );
}

#[rstest]
#[case(b"[U\x01]".to_vec(), "an array")]
#[case(b"SU\x01x".to_vec(), "a string")]
#[case(b"Z".to_vec(), "null")]
fn non_object_root_is_shape_mismatch(#[case] input: Vec<u8>, #[case] found: &str) {
    let err = from_slice::<Header>(&input).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Deserialize);
    assert!(matches!(err, Error::RootNotObject { found: f } if f == found));
}

#[rstest]
fn wrong_field_type_is_deserialize_error() {
    let err = from_slice::<Header>(b"{U\x07VersionSU\x01xU\x04KindSU\x03raw}").unwrap_err();
    assert!(matches!(err, Error::Deserialize(_)));
    assert_eq!(err.kind(), ErrorKind::Deserialize);
}

#[rstest]
fn malformed_input_is_decode_error() {
    let err = from_slice::<Header>(b"{U\x07Version").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Decode);
}
