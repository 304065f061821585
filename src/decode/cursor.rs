use crate::{Error, Result};

/// Read position over a borrowed buffer.
///
/// Copying a cursor is how lookahead works: decode on the copy, drop it, and the
/// original offset is untouched.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Cursor<'a> {
    input: &'a [u8],
    offset: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Self { input, offset: 0 }
    }

    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.input.len() - self.offset
    }

    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.offset >= self.input.len()
    }

    #[inline]
    fn check(&self, needed: usize) -> Result<()> {
        if needed > self.remaining() {
            Err(Error::UnexpectedEof {
                offset: self.offset,
                needed,
            })
        } else {
            Ok(())
        }
    }

    #[inline]
    pub fn peek_byte(&self) -> Result<u8> {
        self.check(1)?;
        Ok(self.input[self.offset])
    }

    #[inline]
    pub fn next_byte(&mut self) -> Result<u8> {
        let byte = self.peek_byte()?;
        self.offset += 1;
        Ok(byte)
    }

    pub fn take(&mut self, len: usize) -> Result<&'a [u8]> {
        self.check(len)?;
        let bytes = &self.input[self.offset..self.offset + len];
        self.offset += len;
        Ok(bytes)
    }

    #[inline]
    fn take_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.take(N)?);
        Ok(out)
    }

    pub fn read_i8(&mut self) -> Result<i8> {
        Ok(i8::from_be_bytes(self.take_array()?))
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        self.next_byte()
    }

    pub fn read_i16(&mut self) -> Result<i16> {
        Ok(i16::from_be_bytes(self.take_array()?))
    }

    pub fn read_i32(&mut self) -> Result<i32> {
        Ok(i32::from_be_bytes(self.take_array()?))
    }

    pub fn read_i64(&mut self) -> Result<i64> {
        Ok(i64::from_be_bytes(self.take_array()?))
    }

    pub fn read_f32(&mut self) -> Result<f32> {
        Ok(f32::from_be_bytes(self.take_array()?))
    }

    pub fn read_f64(&mut self) -> Result<f64> {
        Ok(f64::from_be_bytes(self.take_array()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[rstest::rstest]
    fn test_peek_does_not_advance() {
        let cursor = Cursor::new(b"ZT");
        assert_eq!(cursor.peek_byte().unwrap(), b'Z');
        assert_eq!(cursor.peek_byte().unwrap(), b'Z');
        assert_eq!(cursor.offset(), 0);
    }

    #[rstest::rstest]
    fn test_big_endian_widths_advance_exactly() {
        let mut cursor = Cursor::new(&[0xFF, 0x00, 0x0A, 0xFF, 0xFF, 0xFF, 0xFE]);
        assert_eq!(cursor.read_i8().unwrap(), -1);
        assert_eq!(cursor.offset(), 1);
        assert_eq!(cursor.read_i16().unwrap(), 10);
        assert_eq!(cursor.offset(), 3);
        assert_eq!(cursor.read_i32().unwrap(), -2);
        assert_eq!(cursor.offset(), 7);
        assert!(cursor.is_exhausted());
    }

    #[rstest::rstest]
    fn test_floats() {
        let mut cursor = Cursor::new(&[0x3F, 0xC0, 0x00, 0x00]);
        assert_eq!(cursor.read_f32().unwrap(), 1.5);
        let bytes = (-2.25f64).to_be_bytes();
        let mut cursor = Cursor::new(&bytes);
        assert_eq!(cursor.read_f64().unwrap(), -2.25);
    }

    #[rstest::rstest]
    fn test_short_read_fails_without_moving() {
        let mut cursor = Cursor::new(&[0x00, 0x01, 0x02]);
        cursor.next_byte().unwrap();
        let err = cursor.read_i32().unwrap_err();
        assert!(matches!(
            err,
            Error::UnexpectedEof {
                offset: 1,
                needed: 4
            }
        ));
        assert_eq!(cursor.offset(), 1);
    }

    #[rstest::rstest]
    fn test_copy_is_independent_lookahead() {
        let mut cursor = Cursor::new(&[0x01, 0x02]);
        let mut ahead = cursor;
        ahead.take(2).unwrap();
        assert!(ahead.is_exhausted());
        assert_eq!(cursor.read_u8().unwrap(), 1);
    }
}
