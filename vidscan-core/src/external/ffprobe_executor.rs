//! FFprobe integration for media analysis and information extraction
//!
//! This module executes ffprobe against a single media file and converts
//! the loosely-typed output into the crate's own [`ProbeDocument`] model
//! at the boundary. Numeric fields arriving as strings are parsed here;
//! anything unparseable becomes an explicit absence for the report
//! builder's fallback policy to handle.

use crate::error::{CoreError, CoreResult};
use crate::media::{AudioStream, FormatInfo, ProbeDocument, StreamDescriptor, VideoStream};
use ffprobe::{FfProbeError, ffprobe};
use std::path::Path;

/// Probes a media file and returns its document.
///
/// Fails only when ffprobe cannot produce a document at all; an incomplete
/// document is handled downstream by the report builder.
pub fn probe_file(input_path: &Path) -> CoreResult<ProbeDocument> {
    log::debug!(
        "Running ffprobe (via crate) on: {}",
        input_path.display()
    );
    match ffprobe(input_path) {
        Ok(metadata) => Ok(convert(metadata)),
        Err(err) => {
            log::error!("ffprobe failed on {}: {:?}", input_path.display(), err);
            Err(map_ffprobe_error(err))
        }
    }
}

fn convert(metadata: ffprobe::FfProbe) -> ProbeDocument {
    let format = FormatInfo {
        format_name: Some(metadata.format.format_name.clone()),
        bit_rate: parse_number(metadata.format.bit_rate.as_deref()),
        duration: metadata
            .format
            .duration
            .as_deref()
            .and_then(|d| d.parse::<f64>().ok()),
        filename: Some(metadata.format.filename.clone()),
    };
    let streams = metadata.streams.into_iter().map(convert_stream).collect();
    ProbeDocument { format, streams }
}

fn convert_stream(stream: ffprobe::Stream) -> StreamDescriptor {
    match stream.codec_type.as_deref() {
        Some("video") => StreamDescriptor::Video(VideoStream {
            codec_name: stream.codec_name,
            profile: stream.profile,
            width: stream.width,
            height: stream.height,
            bit_rate: parse_number(stream.bit_rate.as_deref()),
            is_avc: stream.is_avc,
        }),
        Some("audio") => StreamDescriptor::Audio(AudioStream {
            codec_name: stream.codec_name,
        }),
        _ => StreamDescriptor::Other,
    }
}

fn parse_number(raw: Option<&str>) -> Option<u64> {
    raw.and_then(|value| value.parse::<u64>().ok())
}

fn map_ffprobe_error(err: FfProbeError) -> CoreError {
    match err {
        FfProbeError::Io(io_err) => {
            CoreError::FfprobeExecution(format!("failed to start ffprobe: {io_err}"))
        }
        FfProbeError::Status(output) => {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            CoreError::FfprobeExecution(format!(
                "ffprobe exited with {}: {}",
                output.status, stderr
            ))
        }
        FfProbeError::Deserialize(err) => {
            CoreError::FfprobeParse(format!("output deserialization: {err}"))
        }
        _ => CoreError::FfprobeParse(format!("unknown ffprobe error: {err:?}")),
    }
}
