//! Natural, accent-insensitive ordering of file-system paths.
//!
//! Report rows should come out in the order a human expects from a file
//! browser: "clip2.mp4" before "clip10.mp4", with case and diacritics
//! ignored. [`sort_key`] builds a normalized key per path and [`compare`]
//! applies natural (numeric-aware) ordering to two paths via their keys.

use std::cmp::Ordering;
use std::path::Path;

/// Marker prefixed to the final path segment before comparison. `#` orders
/// before alphanumerics, so a file's key sorts before the keys of entries
/// inside a same-named sibling directory, giving a stable tie-break.
const SEGMENT_MARKER: &str = "###";

/// Builds the normalized sort key for a path.
///
/// Prefixes the final segment with a fixed marker, lower-cases the whole
/// path, and transliterates accented characters to their closest ASCII
/// equivalent ("módulo" and "Modulo" share a key). Total: any
/// syntactically valid path produces a key.
#[must_use]
pub fn sort_key(path: &Path) -> String {
    let masked = match path.file_name() {
        Some(name) => {
            path.with_file_name(format!("{SEGMENT_MARKER}{}", name.to_string_lossy()))
        }
        None => path.to_path_buf(),
    };
    deunicode::deunicode(&masked.to_string_lossy().to_lowercase())
}

/// Natural comparison of two paths by their normalized keys.
#[must_use]
pub fn compare(a: &Path, b: &Path) -> Ordering {
    natord::compare(&sort_key(a), &sort_key(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_embedded_integers_compare_numerically() {
        assert_eq!(
            compare(Path::new("clips/clip2.mp4"), Path::new("clips/clip10.mp4")),
            Ordering::Less
        );
        assert_eq!(
            compare(Path::new("clips/clip10.mp4"), Path::new("clips/clip2.mp4")),
            Ordering::Greater
        );
    }

    #[test]
    fn test_case_and_accent_insensitive_key() {
        assert_eq!(
            sort_key(Path::new("Modulo.mp4")),
            sort_key(Path::new("módulo.mp4"))
        );
        assert_eq!(
            sort_key(Path::new("Fácil/VÍDEO.mkv")),
            sort_key(Path::new("facil/video.mkv"))
        );
    }

    #[test]
    fn test_marker_separates_file_from_same_named_directory() {
        // A file "sample.mp4" and entries under a directory "sample.mp4"
        // get distinct keys, and the file orders first.
        let file = Path::new("movies/sample.mp4");
        let nested = Path::new("movies/sample.mp4/part1.mp4");
        assert_ne!(sort_key(file), sort_key(nested));
        assert_eq!(compare(file, nested), Ordering::Less);
    }

    #[test]
    fn test_key_is_total_for_odd_paths() {
        // No panic on root, empty, or exotic input
        assert_eq!(sort_key(Path::new("/")), "/");
        assert_eq!(sort_key(Path::new("")), "");
        let _ = sort_key(Path::new("日本語/ファイル.mp4"));
    }

    #[test]
    fn test_key_applies_marker_and_folding() {
        assert_eq!(sort_key(Path::new("Videos/Clip.MP4")), "videos/###clip.mp4");
    }
}
