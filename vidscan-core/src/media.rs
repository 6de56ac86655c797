//! Typed model of the probe output consumed by the report builder.
//!
//! The external probe returns loosely-typed JSON; this module pins down
//! the fields the report needs as explicit optional values, validated once
//! at the boundary. "Field missing" is an [`Option`] checked by the report
//! builder, not a runtime lookup failure.

use serde::{Deserialize, Serialize};

/// Container-level metadata from the probe's `format` block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormatInfo {
    pub format_name: Option<String>,
    pub bit_rate: Option<u64>,
    pub duration: Option<f64>,
    pub filename: Option<String>,
}

/// Fields of a video stream used by the report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VideoStream {
    pub codec_name: Option<String>,
    pub profile: Option<String>,
    pub width: Option<i64>,
    pub height: Option<i64>,
    pub bit_rate: Option<u64>,
    pub is_avc: Option<String>,
}

impl VideoStream {
    /// Interprets the probe's `is_avc` string defensively: `"true"` is 1,
    /// any other value or absence is 0. Never fails.
    #[must_use]
    pub fn is_avc_flag(&self) -> u8 {
        match self.is_avc.as_deref() {
            Some("true") => 1,
            _ => 0,
        }
    }
}

/// Fields of an audio stream used by the report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AudioStream {
    pub codec_name: Option<String>,
}

/// One elementary stream, tagged by its codec type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "codec_type", rename_all = "lowercase")]
pub enum StreamDescriptor {
    Video(VideoStream),
    Audio(AudioStream),
    #[serde(other)]
    Other,
}

/// Full per-file probe document, read-only input to the report builder.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProbeDocument {
    pub format: FormatInfo,
    pub streams: Vec<StreamDescriptor>,
}

impl ProbeDocument {
    /// First stream with codec type `video`, if any.
    #[must_use]
    pub fn first_video(&self) -> Option<&VideoStream> {
        self.streams.iter().find_map(|stream| match stream {
            StreamDescriptor::Video(video) => Some(video),
            _ => None,
        })
    }

    /// First stream with codec type `audio`, if any.
    #[must_use]
    pub fn first_audio(&self) -> Option<&AudioStream> {
        self.streams.iter().find_map(|stream| match stream {
            StreamDescriptor::Audio(audio) => Some(audio),
            _ => None,
        })
    }
}
