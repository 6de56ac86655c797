//! Flat CSV export of the assembled report.

use crate::error::CoreResult;
use crate::reporting::ReportRow;
use std::path::Path;

/// Writes rows to `output_path` as CSV.
///
/// Column order follows the [`ReportRow`] field order; a header row is
/// written even when the report is empty.
pub fn write_csv(rows: &[ReportRow], output_path: &Path) -> CoreResult<()> {
    let mut writer = csv::Writer::from_path(output_path)?;
    if rows.is_empty() {
        writer.write_record(ReportRow::COLUMNS)?;
    }
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row() -> ReportRow {
        ReportRow {
            duration: "00:01:00".to_string(),
            duration_seconds: 60.0,
            file_size: 1024,
            format_name: "matroska,webm".to_string(),
            total_bitrate: 256_000,
            video_bitrate: 200_000,
            video_codec: "h264".to_string(),
            audio_codec: "aac".to_string(),
            is_avc: 1,
            video_profile: "High".to_string(),
            video_resolution_height: 1080,
            video_resolution_width: 1920,
            path_file: "/videos/a.mkv".to_string(),
            file_path_folder: "/videos".to_string(),
            file_name: "a.mkv".to_string(),
        }
    }

    #[test]
    fn test_empty_report_still_writes_header() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("report.csv");
        write_csv(&[], &output).unwrap();

        let contents = std::fs::read_to_string(&output).unwrap();
        assert_eq!(contents.lines().count(), 1);
        assert_eq!(
            contents.lines().next().unwrap(),
            ReportRow::COLUMNS.join(",")
        );
    }

    #[test]
    fn test_rows_serialize_in_column_order() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("report.csv");
        write_csv(&[sample_row()], &output).unwrap();

        let contents = std::fs::read_to_string(&output).unwrap();
        let mut lines = contents.lines();
        assert_eq!(lines.next().unwrap(), ReportRow::COLUMNS.join(","));
        let row = lines.next().unwrap();
        assert!(row.starts_with("00:01:00,60.0,1024,"));
        assert!(row.ends_with("/videos/a.mkv,/videos,a.mkv"));
    }
}
