use std::path::PathBuf;
use thiserror::Error;

/// Custom error types for vidscan
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Scan root does not exist: {0}")]
    NotFound(PathBuf),

    #[error("{count} discovered path(s) were unreachable during scan")]
    PathTooLong { count: usize },

    #[error("Field '{field}' missing from probe data for {path}")]
    FieldMissing { field: &'static str, path: PathBuf },

    #[error("No 'bit_rate' in stream or container for {0}")]
    BitrateMissing(PathBuf),

    #[error("No video stream found in {0}")]
    NoVideoStream(PathBuf),

    #[error("Could not determine duration for {0}, file may be corrupt")]
    CorruptDuration(PathBuf),

    #[error("ffprobe execution failed: {0}")]
    FfprobeExecution(String),

    #[error("ffprobe output parse failed: {0}")]
    FfprobeParse(String),

    #[error("CSV export error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type for vidscan operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;
