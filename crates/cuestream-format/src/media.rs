//! Media action record.
//!
//! A media action is a base action followed by the media source path, two
//! opaque reserved slots, frame rate, media format code, palette-management
//! code, sustain time and one trailing opaque slot:
//!
//! ```text
//! [base action fields]
//! media_src_path      NUL-terminated (lone NUL = no path)
//! reserved[0]         u32
//! reserved[1]         u32
//! frames_per_second   i32
//! media_format        i32
//! palette_management  i32
//! sustain_time        i32
//! trailing_reserved   u32
//! ```
//!
//! All scalars are little-endian. Reserved slots are never interpreted.

use crate::action::{cstring_size, decode_in_place, owned_cstring, put_cstring};
use crate::{Action, ActionKind, ActionRecord, ByteCursor, Error, Result};
use bytes::{BufMut, BytesMut};
use std::ffi::{CStr, CString};

/// Width of the fixed scalar fields following the media path.
pub const MEDIA_FIXED_SIZE: u32 = 7 * 4;

/// Action that plays or displays a media resource.
///
/// `Clone` and [`MediaActionRecord::copy_from`] deep-copy the path, so two
/// records never share a path buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaActionRecord {
    base: ActionRecord,
    kind: ActionKind,
    size_on_disk: u32,
    media_src_path: Option<CString>,
    reserved: [u32; 2],
    frames_per_second: i32,
    media_format: i32,
    palette_management: i32,
    sustain_time: i32,
    trailing_reserved: u32,
}

impl Default for MediaActionRecord {
    fn default() -> Self {
        Self {
            base: ActionRecord::default(),
            kind: ActionKind::MediaAction,
            size_on_disk: 0,
            media_src_path: None,
            reserved: [0; 2],
            frames_per_second: 0,
            media_format: 0,
            palette_management: 0,
            sustain_time: 0,
            trailing_reserved: 0,
        }
    }
}

impl MediaActionRecord {
    /// Create an empty media action: zeroed scalars, no path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty record of a media-derived class (anim, event, still, ...).
    pub fn with_kind(kind: ActionKind) -> Result<Self> {
        if !kind.is_media() {
            return Err(Error::unsupported(format!(
                "{} is not a media action class",
                kind
            )));
        }
        Ok(Self::empty_of(kind))
    }

    pub(crate) fn empty_of(kind: ActionKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    /// Copy every field of `other` into this record, keeping this record's
    /// class.
    ///
    /// Every scalar, reserved slot included, is copied bit for bit; the path
    /// is copied into a fresh buffer and the previous one is released.
    /// `Clone` differs here: a clone has the source's class.
    pub fn copy_from(&mut self, other: &MediaActionRecord) {
        let kind = self.kind;
        self.clone_from(other);
        self.kind = kind;
    }

    pub fn base(&self) -> &ActionRecord {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut ActionRecord {
        &mut self.base
    }

    /// Stored encoded length, set by decoding or [`Self::refresh_size_on_disk`].
    pub fn size_on_disk(&self) -> u32 {
        self.size_on_disk
    }

    /// Recompute the encoded length from the current fields and store it.
    pub fn refresh_size_on_disk(&mut self) -> u32 {
        self.size_on_disk = self.encoded_size();
        self.size_on_disk
    }

    fn encoded_size(&self) -> u32 {
        self.base.size_on_disk() + cstring_size(self.media_src_path()) + MEDIA_FIXED_SIZE
    }

    pub fn media_src_path(&self) -> Option<&CStr> {
        self.media_src_path.as_deref()
    }

    /// Replace the media path with a copy of `path`. Empty input clears it.
    pub fn set_media_src_path(&mut self, path: Option<&[u8]>) -> Result<()> {
        self.media_src_path = owned_cstring(path)?;
        Ok(())
    }

    pub fn reserved(&self) -> [u32; 2] {
        self.reserved
    }

    pub fn set_reserved(&mut self, reserved: [u32; 2]) {
        self.reserved = reserved;
    }

    pub fn frames_per_second(&self) -> i32 {
        self.frames_per_second
    }

    pub fn set_frames_per_second(&mut self, fps: i32) {
        self.frames_per_second = fps;
    }

    /// Backend-specific media format code.
    pub fn media_format(&self) -> i32 {
        self.media_format
    }

    pub fn set_media_format(&mut self, format: i32) {
        self.media_format = format;
    }

    /// Backend-specific palette-management code.
    pub fn palette_management(&self) -> i32 {
        self.palette_management
    }

    pub fn set_palette_management(&mut self, mode: i32) {
        self.palette_management = mode;
    }

    /// How long a decoded frame stays current.
    pub fn sustain_time(&self) -> i32 {
        self.sustain_time
    }

    pub fn set_sustain_time(&mut self, sustain: i32) {
        self.sustain_time = sustain;
    }

    pub fn trailing_reserved(&self) -> u32 {
        self.trailing_reserved
    }

    pub fn set_trailing_reserved(&mut self, value: u32) {
        self.trailing_reserved = value;
    }

    /// Read base and media fields. The result keeps `kind`.
    pub(crate) fn read(
        kind: ActionKind,
        cursor: &mut ByteCursor<'_>,
        format_hint: i16,
    ) -> Result<Self> {
        let base = ActionRecord::read(cursor, format_hint)?;

        let media_src_path = cursor.read_cstring()?;
        let reserved = [cursor.read_u32()?, cursor.read_u32()?];
        let frames_per_second = cursor.read_i32()?;
        let media_format = cursor.read_i32()?;
        let palette_management = cursor.read_i32()?;
        let sustain_time = cursor.read_i32()?;
        let trailing_reserved = cursor.read_u32()?;

        let mut record = Self {
            base,
            kind,
            size_on_disk: 0,
            media_src_path,
            reserved,
            frames_per_second,
            media_format,
            palette_management,
            sustain_time,
            trailing_reserved,
        };
        record.refresh_size_on_disk();
        Ok(record)
    }

    pub(crate) fn write(&self, buf: &mut BytesMut) {
        self.base.write(buf);

        put_cstring(buf, self.media_src_path());
        buf.put_u32_le(self.reserved[0]);
        buf.put_u32_le(self.reserved[1]);
        buf.put_i32_le(self.frames_per_second);
        buf.put_i32_le(self.media_format);
        buf.put_i32_le(self.palette_management);
        buf.put_i32_le(self.sustain_time);
        buf.put_u32_le(self.trailing_reserved);
    }
}

impl Action for MediaActionRecord {
    fn kind(&self) -> ActionKind {
        self.kind
    }

    fn base(&self) -> &ActionRecord {
        &self.base
    }

    fn size_on_disk(&self) -> u32 {
        self.size_on_disk
    }

    fn deserialize(&mut self, cursor: &mut ByteCursor<'_>, format_hint: i16) -> Result<()> {
        let kind = self.kind;
        decode_in_place(self, cursor, |c| Self::read(kind, c, format_hint))?;
        tracing::trace!(
            kind = %kind,
            object_id = self.base.object_id,
            size = self.size_on_disk,
            "decoded media action"
        );
        Ok(())
    }

    fn write_body(&self, buf: &mut BytesMut) {
        self.write(buf);
    }
}
