//! Boundaries to external tools.
//!
//! The only external collaborator of the core is ffprobe, wrapped so the
//! rest of the crate consumes the typed [`crate::media::ProbeDocument`]
//! model instead of raw probe output.

mod ffprobe_executor;

pub use ffprobe_executor::probe_file;
