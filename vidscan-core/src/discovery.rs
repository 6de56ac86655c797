//! File discovery module for finding video files to report on.
//!
//! This module handles the recursive scan of a directory tree with error
//! isolation for unreachable paths, and the extension-based selection of
//! video files from a scan.

use crate::error::{CoreError, CoreResult};
use crate::ordering;

use std::path::{Path, PathBuf};

/// Outcome of a tree scan.
///
/// `content` holds every regular file that passed an existence check at
/// visit time; `errors` holds every discovered entry that failed one
/// (stale entries, platform path-length limits). The two sequences
/// partition all discovered entries.
#[derive(Debug, Default, Clone)]
pub struct ScanResult {
    pub content: Vec<PathBuf>,
    pub errors: Vec<PathBuf>,
}

/// Recursively lists all regular files under `root`.
///
/// Entries that cannot be accessed are recorded in [`ScanResult::errors`]
/// instead of aborting the scan. Directories are traversed but not
/// reported. With `sort`, `content` and `errors` are each independently
/// natural-sorted so two scans of an unchanged tree produce identical
/// output.
///
/// Error isolation covers failed existence checks and unreadable
/// subdirectories; an IO failure while iterating a directory's entries has
/// no path to record and aborts the scan instead.
///
/// # Errors
///
/// * [`CoreError::NotFound`] - if `root` does not exist
/// * [`CoreError::Io`] - if the root directory itself cannot be read, or
///   directory iteration fails mid-stream
pub fn scan_tree(root: &Path, sort: bool) -> CoreResult<ScanResult> {
    if !root.exists() {
        log::error!("Folder does not exist: {}", root.display());
        return Err(CoreError::NotFound(root.to_path_buf()));
    }

    let mut result = ScanResult::default();
    // Iterative worklist instead of recursion: no depth limit and no
    // accumulator threading through recursive calls.
    let mut pending: Vec<PathBuf> = vec![root.to_path_buf()];

    while let Some(dir) = pending.pop() {
        let entries = match std::fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(err) if dir.as_path() != root => {
                log::error!("Cannot read directory {}: {}", dir.display(), err);
                result.errors.push(dir);
                continue;
            }
            Err(err) => return Err(err.into()),
        };
        for entry in entries {
            let path = entry?.path();
            if !path.exists() {
                log::error!("path_too_long: {}", path.display());
                result.errors.push(path);
                continue;
            }
            if path.is_dir() {
                pending.push(path);
            } else {
                result.content.push(path);
            }
        }
    }

    if sort {
        result.content.sort_by(|a, b| ordering::compare(a, b));
        result.errors.sort_by(|a, b| ordering::compare(a, b));
    }

    Ok(result)
}

/// Filters `files` down to those whose extension matches the allow-list.
///
/// Extensions are supplied without a leading dot (e.g. `"mp4"`); matching
/// is a case-insensitive suffix match against `"." + extension`. Input
/// order and original casing are preserved. An empty allow-list selects
/// nothing.
#[must_use]
pub fn filter_by_extension(files: &[PathBuf], extensions: &[String]) -> Vec<PathBuf> {
    let suffixes: Vec<String> = extensions
        .iter()
        .map(|ext| format!(".{}", ext.to_lowercase()))
        .collect();

    files
        .iter()
        .filter(|path| {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().to_lowercase())
                .unwrap_or_default();
            let selected = suffixes.iter().any(|suffix| name.ends_with(suffix.as_str()));
            if selected {
                log::info!("Selected file: {}", path.display());
            } else {
                log::debug!("___Unselected: {}", path.display());
            }
            selected
        })
        .cloned()
        .collect()
}

/// Selects video files from a scan by extension.
///
/// Fails fast when any discovered path was unreachable during the scan:
/// a partial tree would produce a misleading report, so "some files
/// unreachable" aborts the whole selection while "some files unusable" is
/// handled later, per file, by the report builder.
///
/// # Errors
///
/// * [`CoreError::PathTooLong`] - if the scan recorded unreachable paths
pub fn select_videos(scan: &ScanResult, extensions: &[String]) -> CoreResult<Vec<PathBuf>> {
    if !scan.errors.is_empty() {
        for path in &scan.errors {
            log::error!("File path too long: {}", path.display());
        }
        return Err(CoreError::PathTooLong {
            count: scan.errors.len(),
        });
    }

    let listed = extensions
        .iter()
        .map(|ext| format!(".{ext}"))
        .collect::<Vec<_>>()
        .join(", ");
    log::info!("Find for video with extension: {listed}");

    Ok(filter_by_extension(&scan.content, extensions))
}
