//! Duration extraction from a probe document.

use crate::media::FormatInfo;
use crate::utils::format_duration;

/// Duration of a media file in both display and numeric form.
#[derive(Debug, Clone, PartialEq)]
pub struct DurationInfo {
    /// "HH:MM:SS" rendering of the duration
    pub text: String,
    pub seconds: f64,
}

/// Reads the container duration from the `format` block.
///
/// `None` marks the file as corrupt or unparseable; callers skip the file
/// and continue with the batch.
#[must_use]
pub fn duration_from_format(format: &FormatInfo) -> Option<DurationInfo> {
    let seconds = format.duration?;
    if !seconds.is_finite() || seconds < 0.0 {
        return None;
    }
    Some(DurationInfo {
        text: format_duration(seconds),
        seconds,
    })
}
