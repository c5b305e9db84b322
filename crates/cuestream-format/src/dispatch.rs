//! Tag-driven decoding of action records.
//!
//! Every record begins with a 16-bit type tag. The dispatcher reads the tag,
//! builds an empty record of the matching class and hands the cursor to the
//! record's own [`Action::deserialize`].

use crate::{
    Action, ActionKind, ActionRecord, ByteCursor, Error, MediaActionRecord, Result,
    SoundActionRecord,
};
use bytes::{BufMut, BytesMut};

/// A decoded record of any supported class.
#[derive(Debug, Clone, PartialEq)]
pub enum DecodedAction {
    Action(ActionRecord),
    /// Media actions and the media-derived classes without extra fields
    /// (anim, event, still, object action).
    Media(MediaActionRecord),
    Sound(SoundActionRecord),
}

impl DecodedAction {
    /// Empty record for `kind`, ready to be deserialized.
    pub fn empty(kind: ActionKind) -> Result<Self> {
        match kind {
            ActionKind::Action => Ok(Self::Action(ActionRecord::new())),
            ActionKind::Sound => Ok(Self::Sound(SoundActionRecord::new())),
            ActionKind::MediaAction
            | ActionKind::Anim
            | ActionKind::Event
            | ActionKind::Still
            | ActionKind::ObjectAction => Ok(Self::Media(MediaActionRecord::with_kind(kind)?)),
            ActionKind::Object
            | ActionKind::MultiAction
            | ActionKind::SerialAction
            | ActionKind::ParallelAction
            | ActionKind::SelectAction => Err(Error::unsupported(format!(
                "{} records are not decoded",
                kind
            ))),
        }
    }

    pub fn as_action(&self) -> &dyn Action {
        match self {
            Self::Action(a) => a,
            Self::Media(m) => m,
            Self::Sound(s) => s,
        }
    }

    pub fn as_action_mut(&mut self) -> &mut dyn Action {
        match self {
            Self::Action(a) => a,
            Self::Media(m) => m,
            Self::Sound(s) => s,
        }
    }

    pub fn kind(&self) -> ActionKind {
        self.as_action().kind()
    }

    pub fn base(&self) -> &ActionRecord {
        self.as_action().base()
    }

    pub fn size_on_disk(&self) -> u32 {
        self.as_action().size_on_disk()
    }

    /// Media fields, if this record carries them.
    pub fn media(&self) -> Option<&MediaActionRecord> {
        match self {
            Self::Action(_) => None,
            Self::Media(m) => Some(m),
            Self::Sound(s) => Some(s.media()),
        }
    }
}

/// Decode one tagged record.
///
/// The cursor must sit on the type tag. On failure the cursor is not moved.
pub fn decode_action(cursor: &mut ByteCursor<'_>, format_hint: i16) -> Result<DecodedAction> {
    let mut scratch = *cursor;
    let start = scratch.position();

    let tag = scratch.read_u16()?;
    let kind = ActionKind::from_tag(tag).ok_or(Error::UnknownType(tag))?;

    let mut action = DecodedAction::empty(kind)?;
    action
        .as_action_mut()
        .deserialize(&mut scratch, format_hint)?;

    tracing::debug!(
        offset = start,
        kind = %kind,
        object_id = action.base().object_id,
        size = action.size_on_disk(),
        "decoded action record"
    );

    *cursor = scratch;
    Ok(action)
}

/// Iterator over back-to-back records in a buffer.
///
/// Stops after the buffer is exhausted or after the first error.
pub struct ActionStream<'a> {
    cursor: ByteCursor<'a>,
    format_hint: i16,
    failed: bool,
}

impl<'a> ActionStream<'a> {
    pub fn new(cursor: ByteCursor<'a>, format_hint: i16) -> Self {
        Self {
            cursor,
            format_hint,
            failed: false,
        }
    }

    /// Offset of the next record.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Whether `next` will yield nothing more: input exhausted or a record failed.
    pub fn is_finished(&self) -> bool {
        self.failed || self.cursor.is_empty()
    }
}

impl Iterator for ActionStream<'_> {
    type Item = Result<DecodedAction>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.is_finished() {
            return None;
        }
        let result = decode_action(&mut self.cursor, self.format_hint);
        if let Err(ref e) = result {
            tracing::warn!(offset = self.cursor.position(), error = %e, "stopping action stream");
            self.failed = true;
        }
        Some(result)
    }
}

/// Decode every record in `data`.
pub fn decode_stream(data: &[u8], format_hint: i16) -> Result<Vec<DecodedAction>> {
    ActionStream::new(ByteCursor::new(data), format_hint).collect()
}

/// Encode a record with its type tag.
pub fn encode_action(action: &dyn Action, buf: &mut BytesMut) {
    buf.reserve(action.size_on_disk() as usize);
    buf.put_u16_le(action.kind().tag());
    action.write_body(buf);
}
