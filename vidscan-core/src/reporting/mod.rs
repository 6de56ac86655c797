//! Report assembly from per-file probe documents.
//!
//! [`build_report`] turns `(path, document)` pairs into flat
//! [`ReportRow`]s, applying the fallback policy for missing fields:
//! files with no readable duration, no video stream or no resolvable
//! bitrate are logged and skipped, never aborting the batch.

pub mod duration;
pub mod export;

use crate::error::{CoreError, CoreResult};
use crate::media::ProbeDocument;
use duration::duration_from_format;

use serde::Serialize;
use std::path::{Path, PathBuf};

/// One flat report row.
///
/// The field order here is the column order of the exported report; never
/// mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    pub duration: String,
    pub duration_seconds: f64,
    pub file_size: u64,
    pub format_name: String,
    pub total_bitrate: u64,
    pub video_bitrate: u64,
    pub video_codec: String,
    pub audio_codec: String,
    pub is_avc: u8,
    pub video_profile: String,
    pub video_resolution_height: i64,
    pub video_resolution_width: i64,
    pub path_file: String,
    pub file_path_folder: String,
    pub file_name: String,
}

impl ReportRow {
    /// Column order of the exported report, matching the field order.
    pub const COLUMNS: [&'static str; 15] = [
        "duration",
        "duration_seconds",
        "file_size",
        "format_name",
        "total_bitrate",
        "video_bitrate",
        "video_codec",
        "audio_codec",
        "is_avc",
        "video_profile",
        "video_resolution_height",
        "video_resolution_width",
        "path_file",
        "file_path_folder",
        "file_name",
    ];
}

/// Builds the report from probed files, preserving input order.
///
/// Any single-file failure is absorbed: the error is logged, the file is
/// excluded from the report, and the batch continues. A skip count is
/// logged at the end for visibility.
#[must_use]
pub fn build_report(documents: &[(PathBuf, ProbeDocument)]) -> Vec<ReportRow> {
    let mut rows = Vec::with_capacity(documents.len());
    let mut skipped = 0usize;

    for (path, document) in documents {
        log::info!("Parsing: {}", path.display());
        match build_row(path, document) {
            Ok(row) => rows.push(row),
            Err(err @ CoreError::BitrateMissing(_)) => {
                // A sparse document from the probe; keep the raw document
                // in the log for diagnosis.
                let raw = serde_json::to_string(document)
                    .unwrap_or_else(|_| "<unserializable document>".to_string());
                log::error!("{err}; raw document: {raw}");
                skipped += 1;
            }
            Err(err) => {
                log::error!("Skipping {}: {err}", path.display());
                skipped += 1;
            }
        }
    }

    if skipped > 0 {
        log::warn!("Skipped {skipped} of {} file(s)", documents.len());
    }
    rows
}

/// Builds a single report row from one probe document.
///
/// # Errors
///
/// * [`CoreError::CorruptDuration`] - no readable duration
/// * [`CoreError::FieldMissing`] - `format_name` or container `bit_rate` absent
/// * [`CoreError::NoVideoStream`] - no video stream in the document
/// * [`CoreError::BitrateMissing`] - bitrate absent at both stream and container level
/// * [`CoreError::Io`] - file size could not be read
fn build_row(path: &Path, document: &ProbeDocument) -> CoreResult<ReportRow> {
    let duration = duration_from_format(&document.format)
        .ok_or_else(|| CoreError::CorruptDuration(path.to_path_buf()))?;

    let format_name = document
        .format
        .format_name
        .clone()
        .ok_or(CoreError::FieldMissing {
            field: "format_name",
            path: path.to_path_buf(),
        })?;

    let video = document
        .first_video()
        .ok_or_else(|| CoreError::NoVideoStream(path.to_path_buf()))?;

    let audio_codec = match document.first_audio() {
        Some(audio) => audio.codec_name.clone().unwrap_or_default(),
        None => {
            // Absence of audio is not an error; many files are audio-less.
            log::info!("No audio stream in {}", path.display());
            String::new()
        }
    };

    // Bitrate search: it may be in one of two possible places. Checked
    // before the container total so a document sparse in both places
    // surfaces as BitrateMissing rather than FieldMissing.
    let video_bitrate = video
        .bit_rate
        .or(document.format.bit_rate)
        .ok_or_else(|| CoreError::BitrateMissing(path.to_path_buf()))?;

    let total_bitrate = document.format.bit_rate.ok_or(CoreError::FieldMissing {
        field: "bit_rate",
        path: path.to_path_buf(),
    })?;

    let file_size = std::fs::metadata(path)?.len();

    Ok(ReportRow {
        duration: duration.text,
        duration_seconds: duration.seconds,
        file_size,
        format_name,
        total_bitrate,
        video_bitrate,
        video_codec: video.codec_name.clone().unwrap_or_default(),
        audio_codec,
        is_avc: video.is_avc_flag(),
        video_profile: video.profile.clone().unwrap_or_default(),
        video_resolution_height: video.height.unwrap_or_default(),
        video_resolution_width: video.width.unwrap_or_default(),
        path_file: path.display().to_string(),
        file_path_folder: path
            .parent()
            .map(|parent| parent.display().to_string())
            .unwrap_or_default(),
        file_name: path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default(),
    })
}
