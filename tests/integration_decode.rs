//! Decoding integration tests
//!
//! Encode records through the public API, decode them back and derive
//! placement transforms the way the CLI does.

use assert_matches::assert_matches;
use bytes::BytesMut;
use cuestream::config::{DecodeConfig, OutputConfig};
use cuestream::format::{
    decode_action, decode_stream, encode_action, ActionKind, ActionRecord, ByteCursor,
    DecodedAction, Error, MediaActionRecord, SoundActionRecord,
};
use cuestream::geometry::{Transform3DF, Vector4F};
use cuestream::inspect::inspect_bytes;
use cuestream::placement::{placement_transform, try_placement};

fn intro_movie() -> MediaActionRecord {
    let mut media = MediaActionRecord::new();
    let base = media.base_mut();
    base.set_source_name(Some(b"\\lego\\scripts\\isle")).unwrap();
    base.set_object_name(Some(b"IntroMovie")).unwrap();
    base.object_id = 3;
    base.flags = 0x10;
    base.start_time = 250;
    base.duration = 12_000;
    base.loop_count = 1;
    base.location = [1.0, 2.0, 3.0];
    base.direction = [0.0, 0.0, 1.0];
    base.up = [0.0, 1.0, 0.0];
    base.set_extra_data(b"Device:0").unwrap();
    media.set_media_src_path(Some(b"\\lego\\media\\intro.smk")).unwrap();
    media.set_reserved([0x11, 0x22]);
    media.set_frames_per_second(15);
    media.set_media_format(1);
    media.set_palette_management(2);
    media.set_sustain_time(-1);
    media.set_trailing_reserved(0xcafe);
    media.refresh_size_on_disk();
    media
}

fn background_music() -> SoundActionRecord {
    let mut sound = SoundActionRecord::new();
    sound.media_mut().base_mut().object_id = 4;
    sound
        .media_mut()
        .set_media_src_path(Some(b"\\lego\\audio\\theme.wav"))
        .unwrap();
    sound.set_volume(79);
    sound.refresh_size_on_disk();
    sound
}

#[test]
fn test_media_round_trip_through_dispatch() {
    let media = intro_movie();
    let mut buf = BytesMut::new();
    encode_action(&media, &mut buf);
    assert_eq!(buf.len() as u32, media.size_on_disk());

    let mut cursor = ByteCursor::new(&buf);
    let decoded = decode_action(&mut cursor, 0).unwrap();
    assert!(cursor.is_empty());

    match decoded {
        DecodedAction::Media(ref m) => assert_eq!(m, &media),
        ref other => panic!("expected media action, got {:?}", other.kind()),
    }
}

#[test]
fn test_mixed_stream() {
    let mut buf = BytesMut::new();
    encode_action(&ActionRecord::new(), &mut buf);
    encode_action(&intro_movie(), &mut buf);
    encode_action(&background_music(), &mut buf);

    let decoded = decode_stream(&buf, 0).unwrap();
    let kinds: Vec<ActionKind> = decoded.iter().map(DecodedAction::kind).collect();
    assert_eq!(
        kinds,
        [ActionKind::Action, ActionKind::MediaAction, ActionKind::Sound]
    );

    let total: u32 = decoded.iter().map(DecodedAction::size_on_disk).sum();
    assert_eq!(total as usize, buf.len());
}

#[test]
fn test_every_truncation_is_rejected() {
    let mut buf = BytesMut::new();
    encode_action(&intro_movie(), &mut buf);

    for len in 0..buf.len() {
        let mut cursor = ByteCursor::new(&buf[..len]);
        let err = decode_action(&mut cursor, 0).unwrap_err();
        assert!(
            err.is_truncation(),
            "length {} gave unexpected error {:?}",
            len,
            err
        );
        assert_eq!(cursor.position(), 0);
    }
}

#[test]
fn test_unknown_tag_is_rejected() {
    let buf = 42u16.to_le_bytes();
    let err = decode_action(&mut ByteCursor::new(&buf), 0).unwrap_err();
    assert_matches!(err, Error::UnknownType(42));
}

#[test]
fn test_copy_is_independent() {
    let original = intro_movie();
    let mut copy = MediaActionRecord::new();
    copy.copy_from(&original);
    assert_eq!(copy, original);

    copy.set_media_src_path(Some(b"other.smk")).unwrap();
    copy.set_frames_per_second(30);
    assert_eq!(
        original.media_src_path().unwrap().to_bytes(),
        b"\\lego\\media\\intro.smk"
    );
    assert_eq!(original.frames_per_second(), 15);
}

#[test]
fn test_placement_of_decoded_record() {
    let mut buf = BytesMut::new();
    encode_action(&intro_movie(), &mut buf);
    let decoded = decode_stream(&buf, 0).unwrap();

    let t = placement_transform(decoded[0].base()).unwrap();
    assert_eq!(t.c0, Vector4F::new(1.0, 0.0, 0.0, 0.0));
    assert_eq!(t.c1, Vector4F::new(0.0, 1.0, 0.0, 0.0));
    assert_eq!(t.c2, Vector4F::new(0.0, 0.0, 1.0, 0.0));
    assert_eq!(t.c3, Vector4F::new(1.0, 2.0, 3.0, 1.0));

    let expected = Transform3DF::row_major([
        [1.0, 0.0, 0.0, 1.0],
        [0.0, 1.0, 0.0, 2.0],
        [0.0, 0.0, 1.0, 3.0],
        [0.0, 0.0, 0.0, 1.0],
    ]);
    assert!(t.bit_eq(&expected));
}

#[test]
fn test_unplaced_record_has_no_transform() {
    assert!(try_placement(&ActionRecord::new()).is_none());
    assert!(try_placement(background_music().media().base()).is_none());
}

#[test]
fn test_inspect_summaries() {
    let mut buf = BytesMut::new();
    encode_action(&intro_movie(), &mut buf);
    encode_action(&background_music(), &mut buf);

    let summaries =
        inspect_bytes(&buf, &DecodeConfig::default(), &OutputConfig::default()).unwrap();
    assert_eq!(summaries.len(), 2);

    let movie = &summaries[0];
    assert_eq!(movie.kind, "MediaAction");
    assert_eq!(movie.source_name.as_deref(), Some("\\lego\\scripts\\isle"));
    assert_eq!(movie.extra_data.as_deref(), Some("Device:0"));
    let media = movie.media.as_ref().unwrap();
    assert_eq!(media.sustain_time, -1);
    assert_eq!(media.reserved, [0x11, 0x22]);
    assert!(movie.placement.is_some());

    let music = &summaries[1];
    assert_eq!(music.kind, "SoundAction");
    assert_eq!(music.volume, Some(79));
    assert!(music.placement.is_none());

    let json = serde_json::to_value(&summaries).unwrap();
    assert_eq!(json[1]["volume"], 79);
    assert_eq!(json[0]["media"]["frames_per_second"], 15);
}
