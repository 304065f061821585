mod cursor;
mod parser;
mod serde;
mod tag;

use ::serde::de::DeserializeOwned;

pub use parser::Decoder;
pub use tag::Tag;

use crate::value::Value;
use crate::{DecodeOptions, Result};

pub fn decode(input: &[u8], options: &DecodeOptions) -> Result<Value> {
    Decoder::with_options(input, options.clone()).decode()
}

pub fn from_slice<T: DeserializeOwned>(input: &[u8], options: &DecodeOptions) -> Result<T> {
    let value = decode(input, options)?;
    serde::from_value(value)
}
