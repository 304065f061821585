pub mod constants;
pub mod decode;
pub mod error;
pub mod options;
pub mod value;

use serde::de::DeserializeOwned;

pub use crate::decode::{Decoder, Tag};
pub use crate::error::{Error, ErrorKind};
pub use crate::options::{DecodeOptions, DuplicateKeys};
pub use crate::value::{Map, Value};

pub type Result<T> = std::result::Result<T, Error>;

pub fn decode(input: &[u8]) -> Result<Value> {
    decode_with_options(input, &DecodeOptions::default())
}

pub fn decode_with_options(input: &[u8], options: &DecodeOptions) -> Result<Value> {
    decode::decode(input, options)
}

pub fn decode_to_json(input: &[u8]) -> Result<serde_json::Value> {
    decode_to_json_with_options(input, &DecodeOptions::default())
}

pub fn decode_to_json_with_options(
    input: &[u8],
    options: &DecodeOptions,
) -> Result<serde_json::Value> {
    decode::decode(input, options).map(serde_json::Value::from)
}

/// Decodes an object root straight into `T`.
pub fn from_slice<T: DeserializeOwned>(input: &[u8]) -> Result<T> {
    from_slice_with_options(input, &DecodeOptions::default())
}

pub fn from_slice_with_options<T: DeserializeOwned>(
    input: &[u8],
    options: &DecodeOptions,
) -> Result<T> {
    decode::from_slice(input, options)
}
