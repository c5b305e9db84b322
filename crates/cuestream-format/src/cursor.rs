//! Forward-only checked reader over a resource buffer.

use crate::{Error, Result};
use bytes::Buf;
use std::ffi::CString;

/// Read cursor over a borrowed byte buffer.
///
/// Every read consumes exactly the width of the field it decodes, or fails
/// with [`Error::BufferUnderflow`] and leaves the position untouched. The
/// cursor is `Copy`, so decoders can read from a scratch copy and only
/// write the position back once a whole record has been accepted.
#[derive(Debug, Clone, Copy)]
pub struct ByteCursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    /// Create a cursor positioned at the start of `buf`.
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Create a cursor positioned at `offset`, clamped to the buffer end.
    pub fn at(buf: &'a [u8], offset: usize) -> Self {
        Self {
            buf,
            pos: offset.min(buf.len()),
        }
    }

    /// Current offset from the start of the buffer.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes left to read.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Unread portion of the buffer.
    pub fn rest(&self) -> &'a [u8] {
        &self.buf[self.pos..]
    }

    fn ensure(&self, need: usize) -> Result<()> {
        let have = self.remaining();
        if need > have {
            return Err(Error::BufferUnderflow { need, have });
        }
        Ok(())
    }

    /// Take the next `n` bytes.
    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8]> {
        self.ensure(n)?;
        let bytes = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Ok(bytes)
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        self.ensure(2)?;
        let mut rest = self.rest();
        let value = rest.get_u16_le();
        self.pos += 2;
        Ok(value)
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        self.ensure(4)?;
        let mut rest = self.rest();
        let value = rest.get_u32_le();
        self.pos += 4;
        Ok(value)
    }

    pub fn read_i32(&mut self) -> Result<i32> {
        self.ensure(4)?;
        let mut rest = self.rest();
        let value = rest.get_i32_le();
        self.pos += 4;
        Ok(value)
    }

    pub fn read_f64(&mut self) -> Result<f64> {
        self.ensure(8)?;
        let mut rest = self.rest();
        let value = rest.get_f64_le();
        self.pos += 8;
        Ok(value)
    }

    /// Read three consecutive `f64` values.
    pub fn read_f64x3(&mut self) -> Result<[f64; 3]> {
        self.ensure(24)?;
        let mut rest = self.rest();
        let value = [rest.get_f64_le(), rest.get_f64_le(), rest.get_f64_le()];
        self.pos += 24;
        Ok(value)
    }

    /// Read a NUL-terminated string.
    ///
    /// Consumes the string bytes and the terminator. An empty string (a lone
    /// terminator) decodes to `None`.
    pub fn read_cstring(&mut self) -> Result<Option<CString>> {
        let rest = self.rest();
        let len = rest
            .iter()
            .position(|&b| b == 0)
            .ok_or(Error::UnterminatedString { offset: self.pos })?;

        let bytes = &rest[..len];
        self.pos += len + 1;

        if bytes.is_empty() {
            return Ok(None);
        }
        // No interior NUL: `len` is the first one.
        Ok(Some(CString::new(bytes)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_reads_are_little_endian() {
        let data = [
            0x34, 0x12, // u16
            0x78, 0x56, 0x34, 0x12, // u32
            0xfe, 0xff, 0xff, 0xff, // i32 -2
        ];
        let mut cursor = ByteCursor::new(&data);

        assert_eq!(cursor.read_u16().unwrap(), 0x1234);
        assert_eq!(cursor.read_u32().unwrap(), 0x1234_5678);
        assert_eq!(cursor.read_i32().unwrap(), -2);
        assert!(cursor.is_empty());
        assert_eq!(cursor.position(), 10);
    }

    #[test]
    fn test_f64_read() {
        let mut data = Vec::new();
        data.extend_from_slice(&1.5f64.to_le_bytes());
        data.extend_from_slice(&(-2.0f64).to_le_bytes());
        data.extend_from_slice(&0.25f64.to_le_bytes());

        let mut cursor = ByteCursor::new(&data);
        assert_eq!(cursor.read_f64x3().unwrap(), [1.5, -2.0, 0.25]);
        assert!(cursor.is_empty());
    }

    #[test]
    fn test_underflow_does_not_advance() {
        let data = [1, 2, 3];
        let mut cursor = ByteCursor::new(&data);

        let err = cursor.read_u32().unwrap_err();
        assert!(matches!(err, Error::BufferUnderflow { need: 4, have: 3 }));
        assert_eq!(cursor.position(), 0);

        assert_eq!(cursor.read_u16().unwrap(), 0x0201);
        assert!(cursor.read_bytes(2).is_err());
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn test_read_cstring() {
        let data = b"movie.smk\0\0tail";
        let mut cursor = ByteCursor::new(data);

        let s = cursor.read_cstring().unwrap().unwrap();
        assert_eq!(s.as_bytes(), b"movie.smk");
        assert_eq!(cursor.position(), 10);

        // Lone terminator is an absent string
        assert!(cursor.read_cstring().unwrap().is_none());
        assert_eq!(cursor.position(), 11);

        let err = cursor.read_cstring().unwrap_err();
        assert!(matches!(err, Error::UnterminatedString { offset: 11 }));
        assert_eq!(cursor.position(), 11);
    }

    #[test]
    fn test_cursor_at_offset() {
        let data = [0u8, 0, 7, 0];
        let mut cursor = ByteCursor::at(&data, 2);
        assert_eq!(cursor.read_u16().unwrap(), 7);

        let cursor = ByteCursor::at(&data, 100);
        assert!(cursor.is_empty());
    }
}
