//! Decode an action stream into printable summaries.

use crate::config::{DecodeConfig, OutputConfig};
use crate::placement::try_placement;
use anyhow::{Context, Result};
use cuestream_format::{ActionStream, ByteCursor, DecodedAction};
use serde::Serialize;
use std::ffi::CStr;
use std::fmt::Write as _;
use std::path::Path;

/// Media fields of a decoded record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MediaSummary {
    pub path: Option<String>,
    pub frames_per_second: i32,
    pub media_format: i32,
    pub palette_management: i32,
    pub sustain_time: i32,
    pub reserved: [u32; 2],
    pub trailing_reserved: u32,
}

/// One decoded record, flattened for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionSummary {
    /// Offset of the record's type tag in the input
    pub offset: usize,
    pub kind: String,
    pub tag: u16,
    pub object_id: u32,
    pub object_name: Option<String>,
    pub source_name: Option<String>,
    pub flags: u32,
    pub start_time: u32,
    pub duration: i32,
    pub loop_count: i32,
    pub size_on_disk: u32,
    pub extra_data: Option<String>,
    pub media: Option<MediaSummary>,
    pub volume: Option<i32>,
    /// Placement transform rows
    pub placement: Option<[[f32; 4]; 4]>,
    pub placement_error: Option<String>,
}

fn lossy(value: Option<&CStr>) -> Option<String> {
    value.map(|s| s.to_string_lossy().into_owned())
}

impl ActionSummary {
    pub fn new(offset: usize, action: &DecodedAction, include_placement: bool) -> Self {
        let base = action.base();
        let kind = action.kind();

        let media = action.media().map(|m| MediaSummary {
            path: lossy(m.media_src_path()),
            frames_per_second: m.frames_per_second(),
            media_format: m.media_format(),
            palette_management: m.palette_management(),
            sustain_time: m.sustain_time(),
            reserved: m.reserved(),
            trailing_reserved: m.trailing_reserved(),
        });

        let volume = match action {
            DecodedAction::Sound(s) => Some(s.volume()),
            _ => None,
        };

        let (placement, placement_error) = match include_placement.then(|| try_placement(base)) {
            Some(Some(Ok(t))) => (Some(t.to_rows()), None),
            Some(Some(Err(e))) => (None, Some(e.to_string())),
            _ => (None, None),
        };

        let extra = base.extra_data();

        Self {
            offset,
            kind: kind.class_name().to_string(),
            tag: kind.tag(),
            object_id: base.object_id,
            object_name: lossy(base.object_name()),
            source_name: lossy(base.source_name()),
            flags: base.flags,
            start_time: base.start_time,
            duration: base.duration,
            loop_count: base.loop_count,
            size_on_disk: action.size_on_disk(),
            extra_data: (!extra.is_empty()).then(|| String::from_utf8_lossy(extra).into_owned()),
            media,
            volume,
            placement,
            placement_error,
        }
    }
}

/// Decode records from `data`, honouring the configured offset and limit.
pub fn inspect_bytes(
    data: &[u8],
    decode: &DecodeConfig,
    output: &OutputConfig,
) -> Result<Vec<ActionSummary>> {
    if decode.offset > data.len() {
        anyhow::bail!(
            "Offset {} is past the end of the input ({} bytes)",
            decode.offset,
            data.len()
        );
    }

    let mut stream = ActionStream::new(ByteCursor::at(data, decode.offset), decode.format_hint);
    let mut summaries = Vec::new();

    loop {
        if summaries.len() >= decode.max_records {
            if !stream.is_finished() {
                tracing::warn!(
                    max_records = decode.max_records,
                    offset = stream.position(),
                    "record limit reached, ignoring the rest of the input"
                );
            }
            break;
        }

        let offset = stream.position();
        let Some(result) = stream.next() else {
            break;
        };
        let action = result.with_context(|| format!("Failed to decode record at offset {}", offset))?;
        summaries.push(ActionSummary::new(offset, &action, output.include_placement));
    }

    tracing::info!(records = summaries.len(), "decoded action stream");
    Ok(summaries)
}

/// Read a file and decode its records.
pub fn inspect_file(
    path: &Path,
    decode: &DecodeConfig,
    output: &OutputConfig,
) -> Result<Vec<ActionSummary>> {
    let data = std::fs::read(path).with_context(|| format!("Failed to read {:?}", path))?;
    tracing::debug!(bytes = data.len(), "read action stream from {:?}", path);
    inspect_bytes(&data, decode, output)
}

/// Human-readable listing of decoded records.
pub fn render_text(summaries: &[ActionSummary]) -> String {
    let mut out = String::new();

    for (i, s) in summaries.iter().enumerate() {
        let _ = writeln!(
            out,
            "[{}] {} (tag {}) at offset {}, {} bytes",
            i, s.kind, s.tag, s.offset, s.size_on_disk
        );
        let _ = writeln!(
            out,
            "    Object: {} \"{}\"",
            s.object_id,
            s.object_name.as_deref().unwrap_or("")
        );
        if let Some(ref source) = s.source_name {
            let _ = writeln!(out, "    Source: {}", source);
        }
        let _ = writeln!(
            out,
            "    Timing: start {} duration {} loops {} flags {:#010x}",
            s.start_time, s.duration, s.loop_count, s.flags
        );
        if let Some(ref extra) = s.extra_data {
            let _ = writeln!(out, "    Extra: {}", extra);
        }
        if let Some(ref m) = s.media {
            let _ = writeln!(out, "    Media: {}", m.path.as_deref().unwrap_or("<none>"));
            let _ = writeln!(
                out,
                "      {} fps, format {}, palette {}, sustain {}",
                m.frames_per_second, m.media_format, m.palette_management, m.sustain_time
            );
        }
        if let Some(volume) = s.volume {
            let _ = writeln!(out, "    Volume: {}", volume);
        }
        if let Some(ref rows) = s.placement {
            let _ = writeln!(out, "    Placement:");
            for row in rows {
                let _ = writeln!(
                    out,
                    "      {:>10.6} {:>10.6} {:>10.6} {:>10.6}",
                    row[0], row[1], row[2], row[3]
                );
            }
        }
        if let Some(ref err) = s.placement_error {
            let _ = writeln!(out, "    Placement: invalid ({})", err);
        }
    }

    out
}
