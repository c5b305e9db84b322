//! Base action record and the decode contract shared by every action class.

use crate::{ActionKind, ByteCursor, Error, Result};
use bytes::{BufMut, BytesMut};
use std::ffi::{CStr, CString};
use std::fmt;

/// Width of the type tag that precedes every record.
pub const TYPE_TAG_SIZE: u32 = 2;

/// Fixed-width action fields: flags, start time, duration, loop count,
/// three placement vectors and the extra-data length prefix.
const ACTION_FIXED_SIZE: u32 = 4 * 4 + 9 * 8 + 2;

/// Behaviour common to every decodable action class.
///
/// Subtypes extend the base record: their `deserialize` reads the base
/// fields first and then their own, in on-disk order.
pub trait Action: fmt::Debug + Send + Sync {
    /// Concrete class of this record.
    fn kind(&self) -> ActionKind;

    fn class_name(&self) -> &'static str {
        self.kind().class_name()
    }

    /// Whether this record is of class `kind` or derives from it.
    fn is_a(&self, kind: ActionKind) -> bool {
        self.kind().is_a(kind)
    }

    /// Base fields shared by all actions.
    fn base(&self) -> &ActionRecord;

    /// Encoded length of the record, type tag included.
    fn size_on_disk(&self) -> u32;

    /// Decode this record's fields from `cursor`, which must be positioned
    /// just past the type tag.
    ///
    /// On success the record is replaced and the cursor sits after the last
    /// consumed byte. On failure neither the record nor the cursor changes.
    fn deserialize(&mut self, cursor: &mut ByteCursor<'_>, format_hint: i16) -> Result<()>;

    /// Encode every field after the type tag.
    fn write_body(&self, buf: &mut BytesMut);
}

/// Decode a fresh value from a scratch copy of `cursor` and commit both the
/// value and the cursor position only if decoding succeeded.
pub(crate) fn decode_in_place<'a, T>(
    target: &mut T,
    cursor: &mut ByteCursor<'a>,
    read: impl FnOnce(&mut ByteCursor<'a>) -> Result<T>,
) -> Result<()> {
    let mut scratch = *cursor;
    let decoded = read(&mut scratch)?;
    *target = decoded;
    *cursor = scratch;
    Ok(())
}

/// Encoded size of an optional NUL-terminated string.
pub(crate) fn cstring_size(value: Option<&CStr>) -> u32 {
    value.map_or(0, |s| s.to_bytes().len() as u32) + 1
}

/// Write an optional string followed by its terminator.
pub(crate) fn put_cstring(buf: &mut BytesMut, value: Option<&CStr>) {
    if let Some(s) = value {
        buf.put_slice(s.to_bytes());
    }
    buf.put_u8(0);
}

/// Convert caller bytes into an owned string slot; empty input is absent.
pub(crate) fn owned_cstring(value: Option<&[u8]>) -> Result<Option<CString>> {
    match value {
        Some(bytes) if !bytes.is_empty() => Ok(Some(CString::new(bytes)?)),
        _ => Ok(None),
    }
}

/// Base action: object identity, timing and placement.
///
/// Names are only set through their setters, which store empty input as
/// absent so every name survives an encode/decode round trip.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActionRecord {
    /// Name of the resource the action was authored in.
    source_name: Option<CString>,
    /// Opaque object-header slot, carried verbatim.
    pub object_reserved: u32,
    /// Name of the object the action drives.
    object_name: Option<CString>,
    pub object_id: u32,
    /// Opaque behaviour flags.
    pub flags: u32,
    pub start_time: u32,
    pub duration: i32,
    pub loop_count: i32,
    pub location: [f64; 3],
    pub direction: [f64; 3],
    pub up: [f64; 3],
    /// Format hint the record was decoded with. Stored, never interpreted.
    pub format_hint: i16,
    extra_data: Vec<u8>,
}

impl ActionRecord {
    /// Create an empty action with zeroed fields.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn source_name(&self) -> Option<&CStr> {
        self.source_name.as_deref()
    }

    pub fn object_name(&self) -> Option<&CStr> {
        self.object_name.as_deref()
    }

    pub fn set_source_name(&mut self, name: Option<&[u8]>) -> Result<()> {
        self.source_name = owned_cstring(name)?;
        Ok(())
    }

    pub fn set_object_name(&mut self, name: Option<&[u8]>) -> Result<()> {
        self.object_name = owned_cstring(name)?;
        Ok(())
    }

    /// Opaque trailing payload.
    pub fn extra_data(&self) -> &[u8] {
        &self.extra_data
    }

    /// Replace the extra data. Fails if it cannot fit the 16-bit length prefix.
    pub fn set_extra_data(&mut self, data: &[u8]) -> Result<()> {
        if data.len() > u16::MAX as usize {
            return Err(Error::ExtraDataTooLong(data.len()));
        }
        self.extra_data = data.to_vec();
        Ok(())
    }

    /// Encoded length of the base fields, type tag included.
    pub fn size_on_disk(&self) -> u32 {
        TYPE_TAG_SIZE
            + cstring_size(self.source_name())
            + 4
            + cstring_size(self.object_name())
            + 4
            + ACTION_FIXED_SIZE
            + self.extra_data.len() as u32
    }

    /// Read the base fields from `cursor`.
    pub(crate) fn read(cursor: &mut ByteCursor<'_>, format_hint: i16) -> Result<Self> {
        let source_name = cursor.read_cstring()?;
        let object_reserved = cursor.read_u32()?;
        let object_name = cursor.read_cstring()?;
        let object_id = cursor.read_u32()?;

        let flags = cursor.read_u32()?;
        let start_time = cursor.read_u32()?;
        let duration = cursor.read_i32()?;
        let loop_count = cursor.read_i32()?;
        let location = cursor.read_f64x3()?;
        let direction = cursor.read_f64x3()?;
        let up = cursor.read_f64x3()?;

        let extra_length = cursor.read_u16()?;
        let extra_data = cursor.read_bytes(extra_length as usize)?.to_vec();

        Ok(Self {
            source_name,
            object_reserved,
            object_name,
            object_id,
            flags,
            start_time,
            duration,
            loop_count,
            location,
            direction,
            up,
            format_hint,
            extra_data,
        })
    }

    /// Write the base fields in on-disk order.
    pub(crate) fn write(&self, buf: &mut BytesMut) {
        put_cstring(buf, self.source_name());
        buf.put_u32_le(self.object_reserved);
        put_cstring(buf, self.object_name());
        buf.put_u32_le(self.object_id);

        buf.put_u32_le(self.flags);
        buf.put_u32_le(self.start_time);
        buf.put_i32_le(self.duration);
        buf.put_i32_le(self.loop_count);
        for v in self.location.iter().chain(&self.direction).chain(&self.up) {
            buf.put_f64_le(*v);
        }

        // set_extra_data bounds the length
        buf.put_u16_le(self.extra_data.len() as u16);
        buf.put_slice(&self.extra_data);
    }
}

impl Action for ActionRecord {
    fn kind(&self) -> ActionKind {
        ActionKind::Action
    }

    fn base(&self) -> &ActionRecord {
        self
    }

    fn size_on_disk(&self) -> u32 {
        ActionRecord::size_on_disk(self)
    }

    fn deserialize(&mut self, cursor: &mut ByteCursor<'_>, format_hint: i16) -> Result<()> {
        decode_in_place(self, cursor, |c| Self::read(c, format_hint))
    }

    fn write_body(&self, buf: &mut BytesMut) {
        self.write(buf);
    }
}
