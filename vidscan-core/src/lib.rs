//! Core library for video file inventory and report assembly using ffprobe.
//!
//! This crate provides recursive video file discovery with natural,
//! accent-insensitive path ordering, extension-based selection, ffprobe
//! metadata extraction, and flat report assembly that tolerates partially
//! missing per-file data.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! let scan = vidscan_core::scan_tree(Path::new("/path/to/videos"), true).unwrap();
//! let extensions = vec!["mp4".to_string(), "mkv".to_string()];
//! let files = vidscan_core::select_videos(&scan, &extensions).unwrap();
//!
//! let documents: Vec<_> = files
//!     .into_iter()
//!     .map(|path| {
//!         let document = vidscan_core::probe_file(&path).unwrap();
//!         (path, document)
//!     })
//!     .collect();
//!
//! let rows = vidscan_core::build_report(&documents);
//! vidscan_core::write_csv(&rows, Path::new("report.csv")).unwrap();
//! ```

pub mod discovery;
pub mod error;
pub mod external;
pub mod media;
pub mod ordering;
pub mod reporting;
pub mod utils;

// Re-exports for public API
pub use discovery::{ScanResult, filter_by_extension, scan_tree, select_videos};
pub use error::{CoreError, CoreResult};
pub use external::probe_file;
pub use media::{AudioStream, FormatInfo, ProbeDocument, StreamDescriptor, VideoStream};
pub use reporting::{ReportRow, build_report, export::write_csv};
pub use utils::format_duration;
