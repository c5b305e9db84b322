//! Cuestream-Format: binary decoding of streamed action records
//!
//! An action stream is a sequence of self-describing, little-endian records.
//! Every record starts with a 16-bit type tag followed by the base action
//! fields (identity, timing, placement vectors, opaque extra data); subtypes
//! such as media and sound actions append their own fields after the base.
//!
//! # Modules
//!
//! - `cursor` - Forward-only checked reader over a byte slice
//! - `kind` - Type tags and the action class hierarchy
//! - `action` - Base action record and the `Action` decode contract
//! - `media` - Media action record (frame rate, format, palette, path)
//! - `sound` - Sound action record (media action plus volume)
//! - `dispatch` - Tag-driven decoding of single records and whole streams
//!
//! # Decoding
//!
//! Decoding is transactional: each record is read from a copy of the
//! cursor, and the record and the caller's cursor are only updated once
//! every field has been read successfully.

pub mod action;
pub mod cursor;
pub mod dispatch;
pub mod error;
pub mod kind;
pub mod media;
pub mod sound;

pub use action::{Action, ActionRecord};
pub use cursor::ByteCursor;
pub use dispatch::{decode_action, decode_stream, encode_action, ActionStream, DecodedAction};
pub use error::{Error, Result};
pub use kind::ActionKind;
pub use media::MediaActionRecord;
pub use sound::SoundActionRecord;
