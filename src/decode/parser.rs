use indexmap::map::Entry;

use super::cursor::Cursor;
use super::tag::Tag;
use crate::value::{Map, Value};
use crate::{DecodeOptions, DuplicateKeys, Error, Result};

/// Single-use decoder over one in-memory buffer.
///
/// The read offset lives inside the decoder and is only moved by its own methods.
/// [`Decoder::decode`] consumes the decoder, so a buffer is decoded at most once per
/// instance.
#[derive(Debug)]
pub struct Decoder<'a> {
    cursor: Cursor<'a>,
    options: DecodeOptions,
    depth: usize,
}

impl<'a> Decoder<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Self::with_options(input, DecodeOptions::default())
    }

    pub fn with_options(input: &'a [u8], options: DecodeOptions) -> Self {
        Self {
            cursor: Cursor::new(input),
            options,
            depth: 0,
        }
    }

    pub fn offset(&self) -> usize {
        self.cursor.offset()
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor.is_exhausted()
    }

    /// Decodes the value at the current offset without moving it.
    pub fn peek_value(&self) -> Result<Value> {
        let mut ahead = Decoder {
            cursor: self.cursor,
            options: self.options.clone(),
            depth: self.depth,
        };
        ahead.decode_value(None)
    }

    /// Decodes the root value. In strict mode the whole buffer must be consumed.
    pub fn decode(mut self) -> Result<Value> {
        let result = self.decode_value(None).and_then(|value| {
            if self.options.strict {
                self.check_consumed()?;
            }
            Ok(value)
        });
        if let Err(err) = &result {
            tracing::debug!(offset = self.cursor.offset(), error = %err, "ubjson decode failed");
        }
        result
    }

    /// Ends an incremental decode, failing if any input is left unread.
    pub fn finish(self) -> Result<()> {
        self.check_consumed()
    }

    fn check_consumed(&self) -> Result<()> {
        if self.cursor.is_exhausted() {
            return Ok(());
        }
        Err(Error::TrailingBytes {
            offset: self.cursor.offset(),
            remaining: self.cursor.remaining(),
        })
    }

    /// Decodes one value. `tag` is supplied when the caller already knows it, in which
    /// case no tag byte is read from the buffer.
    pub fn decode_value(&mut self, tag: Option<Tag>) -> Result<Value> {
        let tag = match tag {
            Some(tag) => tag,
            None => Tag::from_byte(self.cursor.next_byte()?),
        };

        match tag {
            Tag::ObjectStart => {
                self.enter()?;
                let value = self.decode_object();
                self.depth -= 1;
                value
            }
            Tag::ArrayStart => {
                self.enter()?;
                let value = self.decode_array();
                self.depth -= 1;
                value
            }
            Tag::Null | Tag::NoOp => Ok(Value::Null),
            Tag::True => Ok(Value::Bool(true)),
            Tag::False => Ok(Value::Bool(false)),
            Tag::Int8 => Ok(Value::Int8(self.cursor.read_i8()?)),
            Tag::UInt8 => Ok(Value::UInt8(self.cursor.read_u8()?)),
            Tag::Int16 => Ok(Value::Int16(self.cursor.read_i16()?)),
            Tag::Int32 => Ok(Value::Int32(self.cursor.read_i32()?)),
            Tag::Int64 => Ok(Value::Int64(self.cursor.read_i64()?)),
            Tag::Float32 => Ok(Value::Float32(self.cursor.read_f32()?)),
            Tag::Float64 => Ok(Value::Float64(self.cursor.read_f64()?)),
            Tag::Char => {
                let byte = self.cursor.read_u8()?;
                Ok(Value::String(char::from(byte).to_string()))
            }
            Tag::String | Tag::HighPrecision => self.read_string().map(Value::String),
            // Closers only reach here when they are not where a container expects them.
            Tag::ObjectEnd | Tag::ArrayEnd => {
                Ok(Value::String(char::from(tag.as_byte()).to_string()))
            }
            Tag::Count | Tag::ElementType | Tag::Unsupported(_) => {
                tracing::debug!(
                    tag = tag.as_byte(),
                    offset = self.cursor.offset(),
                    "unsupported tag decoded as null"
                );
                Ok(Value::Null)
            }
        }
    }

    fn enter(&mut self) -> Result<()> {
        if self.depth >= self.options.max_depth {
            return Err(Error::DepthLimitExceeded {
                max_depth: self.options.max_depth,
                offset: self.cursor.offset(),
            });
        }
        self.depth += 1;
        Ok(())
    }

    fn decode_object(&mut self) -> Result<Value> {
        let start = self.cursor.offset();
        let mut map = Map::new();
        let mut count = None;
        let mut entries = 0usize;

        loop {
            if count.is_some_and(|n| entries >= n) {
                return Ok(Value::Object(map));
            }
            if self.cursor.is_exhausted() {
                return Err(Error::UnterminatedObject { start });
            }

            match Tag::from_byte(self.cursor.peek_byte()?) {
                Tag::Count => {
                    self.cursor.next_byte()?;
                    let n = self.decode_count()?;
                    map.reserve(n.saturating_sub(entries).min(self.cursor.remaining()));
                    count = Some(n);
                }
                Tag::ObjectEnd => {
                    self.cursor.next_byte()?;
                    return Ok(Value::Object(map));
                }
                _ => {
                    let key_offset = self.cursor.offset();
                    let key = self.decode_key()?;
                    let value = self.decode_value(None)?;
                    self.insert_entry(&mut map, key, value, key_offset)?;
                    entries += 1;
                }
            }
        }
    }

    fn insert_entry(&self, map: &mut Map, key: String, value: Value, offset: usize) -> Result<()> {
        match map.entry(key) {
            Entry::Vacant(slot) => {
                slot.insert(value);
                Ok(())
            }
            Entry::Occupied(mut slot) => match self.options.duplicate_keys {
                DuplicateKeys::Reject => Err(Error::DuplicateKey {
                    key: slot.key().clone(),
                    offset,
                }),
                DuplicateKeys::LastWins => {
                    slot.insert(value);
                    Ok(())
                }
            },
        }
    }

    fn decode_array(&mut self) -> Result<Value> {
        let start = self.cursor.offset();
        let mut items = Vec::new();
        let mut count: Option<usize> = None;
        let mut element_type: Option<Tag> = None;

        loop {
            let in_header = items.is_empty();
            // With both a count and a type, elements are bare payloads and no byte
            // may be read as a marker.
            let raw = count.is_some() && element_type.is_some();

            if let Some(n) = count {
                let type_follows = in_header
                    && element_type.is_none()
                    && self.cursor.peek_byte().ok() == Some(Tag::ElementType.as_byte());
                if items.len() >= n && !type_follows {
                    return Ok(Value::Array(items));
                }
            }
            if self.cursor.is_exhausted() {
                return Err(Error::UnterminatedArray { start });
            }
            if raw {
                items.push(self.decode_value(element_type)?);
                continue;
            }

            match Tag::from_byte(self.cursor.peek_byte()?) {
                Tag::Count => {
                    self.cursor.next_byte()?;
                    let n = self.decode_count()?;
                    let missing = n.saturating_sub(items.len());
                    items.reserve_exact(missing.min(self.cursor.remaining()));
                    count = Some(n);
                }
                Tag::ElementType => {
                    self.cursor.next_byte()?;
                    element_type = Some(Tag::from_byte(self.cursor.next_byte()?));
                }
                Tag::ArrayEnd => {
                    self.cursor.next_byte()?;
                    return Ok(Value::Array(items));
                }
                _ => items.push(self.decode_value(element_type)?),
            }
        }
    }

    fn decode_count(&mut self) -> Result<usize> {
        let offset = self.cursor.offset();
        let value = self.decode_value(None)?;
        let n = value.as_i64().ok_or_else(|| Error::InvalidCount {
            offset,
            reason: format!("expected an integer, found {}", value.type_name()),
        })?;
        usize::try_from(n).map_err(|_| Error::InvalidCount {
            offset,
            reason: format!("negative count {n}"),
        })
    }

    /// Object keys are string payloads written without the leading `S`.
    fn decode_key(&mut self) -> Result<String> {
        self.read_string()
    }

    fn read_string(&mut self) -> Result<String> {
        let len = self.read_length()?;
        let offset = self.cursor.offset();
        let bytes = self.cursor.take(len)?;
        std::str::from_utf8(bytes)
            .map(str::to_owned)
            .map_err(|source| Error::InvalidUtf8 { offset, source })
    }

    fn read_length(&mut self) -> Result<usize> {
        let offset = self.cursor.offset();
        let marker = self.cursor.next_byte()?;
        if marker.is_ascii_digit() {
            return Ok(usize::from(marker - b'0'));
        }
        let len = match Tag::from_byte(marker) {
            Tag::Int16 if self.options.wide_lengths => i64::from(self.cursor.read_i16()?),
            Tag::Int32 if self.options.wide_lengths => i64::from(self.cursor.read_i32()?),
            Tag::Int64 if self.options.wide_lengths => self.cursor.read_i64()?,
            _ => i64::from(self.cursor.read_u8()?),
        };
        usize::try_from(len).map_err(|_| Error::InvalidLength {
            offset,
            reason: format!("negative length {len}"),
        })
    }
}
