//! Typed bridge: maps a decoded object tree onto a caller's `Deserialize` type.
//!
//! The tree goes through `serde_json::Value`, so field matching follows serde's
//! rules for JSON (exact names unless the target uses `rename`/`alias`).

use serde::de::DeserializeOwned;

use crate::value::Value;
use crate::{Error, Result};

pub fn from_value<T: DeserializeOwned>(value: Value) -> Result<T> {
    if !matches!(value, Value::Object(_)) {
        return Err(Error::RootNotObject {
            found: value.type_name(),
        });
    }
    let json = serde_json::Value::from(value);
    Ok(serde_json::from_value(json)?)
}
