use crate::constants::*;

/// The decode rule selected by a type byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Null,
    NoOp,
    True,
    False,
    Int8,
    UInt8,
    Int16,
    Int32,
    Int64,
    Float32,
    Float64,
    Char,
    String,
    HighPrecision,
    ObjectStart,
    ObjectEnd,
    ArrayStart,
    ArrayEnd,
    Count,
    ElementType,
    /// Any byte with no decode rule. Decodes to null rather than failing.
    Unsupported(u8),
}

impl Tag {
    pub fn from_byte(byte: u8) -> Self {
        match byte {
            NULL => Tag::Null,
            NO_OP => Tag::NoOp,
            TRUE => Tag::True,
            FALSE => Tag::False,
            INT8 => Tag::Int8,
            UINT8 => Tag::UInt8,
            INT16 => Tag::Int16,
            INT32 => Tag::Int32,
            INT64 => Tag::Int64,
            FLOAT32 => Tag::Float32,
            FLOAT64 => Tag::Float64,
            CHAR => Tag::Char,
            STRING => Tag::String,
            HIGH_PRECISION => Tag::HighPrecision,
            OBJECT_START => Tag::ObjectStart,
            OBJECT_END => Tag::ObjectEnd,
            ARRAY_START => Tag::ArrayStart,
            ARRAY_END => Tag::ArrayEnd,
            COUNT => Tag::Count,
            ELEMENT_TYPE => Tag::ElementType,
            other => Tag::Unsupported(other),
        }
    }

    pub fn as_byte(self) -> u8 {
        match self {
            Tag::Null => NULL,
            Tag::NoOp => NO_OP,
            Tag::True => TRUE,
            Tag::False => FALSE,
            Tag::Int8 => INT8,
            Tag::UInt8 => UINT8,
            Tag::Int16 => INT16,
            Tag::Int32 => INT32,
            Tag::Int64 => INT64,
            Tag::Float32 => FLOAT32,
            Tag::Float64 => FLOAT64,
            Tag::Char => CHAR,
            Tag::String => STRING,
            Tag::HighPrecision => HIGH_PRECISION,
            Tag::ObjectStart => OBJECT_START,
            Tag::ObjectEnd => OBJECT_END,
            Tag::ArrayStart => ARRAY_START,
            Tag::ArrayEnd => ARRAY_END,
            Tag::Count => COUNT,
            Tag::ElementType => ELEMENT_TYPE,
            Tag::Unsupported(byte) => byte,
        }
    }
}
