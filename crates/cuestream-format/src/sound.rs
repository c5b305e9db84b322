//! Sound action record: a media action followed by a volume.

use crate::action::decode_in_place;
use crate::{Action, ActionKind, ActionRecord, ByteCursor, MediaActionRecord, Result};
use bytes::{BufMut, BytesMut};

/// Media action that plays an audio resource.
#[derive(Debug, Clone, PartialEq)]
pub struct SoundActionRecord {
    media: MediaActionRecord,
    volume: i32,
}

impl Default for SoundActionRecord {
    fn default() -> Self {
        Self {
            media: MediaActionRecord::empty_of(ActionKind::Sound),
            volume: 0,
        }
    }
}

impl SoundActionRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn media(&self) -> &MediaActionRecord {
        &self.media
    }

    pub fn media_mut(&mut self) -> &mut MediaActionRecord {
        &mut self.media
    }

    pub fn volume(&self) -> i32 {
        self.volume
    }

    pub fn set_volume(&mut self, volume: i32) {
        self.volume = volume;
    }

    pub fn size_on_disk(&self) -> u32 {
        self.media.size_on_disk() + 4
    }

    /// Recompute and store the media portion's length; returns the total.
    pub fn refresh_size_on_disk(&mut self) -> u32 {
        self.media.refresh_size_on_disk() + 4
    }

    fn read(cursor: &mut ByteCursor<'_>, format_hint: i16) -> Result<Self> {
        let media = MediaActionRecord::read(ActionKind::Sound, cursor, format_hint)?;
        let volume = cursor.read_i32()?;
        Ok(Self { media, volume })
    }
}

impl Action for SoundActionRecord {
    fn kind(&self) -> ActionKind {
        ActionKind::Sound
    }

    fn base(&self) -> &ActionRecord {
        self.media.base()
    }

    fn size_on_disk(&self) -> u32 {
        SoundActionRecord::size_on_disk(self)
    }

    fn deserialize(&mut self, cursor: &mut ByteCursor<'_>, format_hint: i16) -> Result<()> {
        decode_in_place(self, cursor, |c| Self::read(c, format_hint))
    }

    fn write_body(&self, buf: &mut BytesMut) {
        self.media.write(buf);
        buf.put_i32_le(self.volume);
    }
}
