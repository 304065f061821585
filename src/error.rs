use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed or truncated input.
    Decode,
    /// The decoded tree does not fit the requested target type.
    Deserialize,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("unexpected end of input at offset {offset}: needed {needed} byte(s)")]
    UnexpectedEof { offset: usize, needed: usize },

    #[error("unterminated object starting at offset {start}")]
    UnterminatedObject { start: usize },

    #[error("unterminated array starting at offset {start}")]
    UnterminatedArray { start: usize },

    #[error("invalid container count at offset {offset}: {reason}")]
    InvalidCount { offset: usize, reason: String },

    #[error("invalid string length at offset {offset}: {reason}")]
    InvalidLength { offset: usize, reason: String },

    #[error("invalid utf-8 in string at offset {offset}")]
    InvalidUtf8 {
        offset: usize,
        #[source]
        source: std::str::Utf8Error,
    },

    #[error("duplicate key \"{key}\" at offset {offset}")]
    DuplicateKey { key: String, offset: usize },

    #[error("nesting deeper than {max_depth} at offset {offset}")]
    DepthLimitExceeded { max_depth: usize, offset: usize },

    #[error("{remaining} trailing byte(s) after root value at offset {offset}")]
    TrailingBytes { offset: usize, remaining: usize },

    #[error("root value is {found}, expected an object")]
    RootNotObject { found: &'static str },

    #[error("deserialize failed: {0}")]
    Deserialize(#[from] serde_json::Error),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::RootNotObject { .. } | Error::Deserialize(_) => ErrorKind::Deserialize,
            _ => ErrorKind::Decode,
        }
    }

    /// Byte offset the failure was detected at, when the input position is known.
    pub fn offset(&self) -> Option<usize> {
        match self {
            Error::UnexpectedEof { offset, .. }
            | Error::InvalidCount { offset, .. }
            | Error::InvalidLength { offset, .. }
            | Error::InvalidUtf8 { offset, .. }
            | Error::DuplicateKey { offset, .. }
            | Error::DepthLimitExceeded { offset, .. }
            | Error::TrailingBytes { offset, .. } => Some(*offset),
            Error::UnterminatedObject { start } | Error::UnterminatedArray { start } => {
                Some(*start)
            }
            Error::RootNotObject { .. } | Error::Deserialize(_) => None,
        }
    }
}
