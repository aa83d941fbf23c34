//! Video file path resolution, MIME lookup, and inventory listing
//!
//! All lookups are relative to a configured root directory. Resolution is
//! lexical before any filesystem access: a path that escapes the root is
//! rejected as invalid, which is a distinct failure from a missing file.

use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

/// Extensions considered video files for the inventory listing
const VIDEO_EXTENSIONS: [&str; 3] = ["mp4", "webm", "mov"];

/// Why a relative video path could not be resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoPathError {
    /// No root configured; checked before touching the filesystem
    RootNotSet,
    /// Path is absolute or escapes the root after normalization
    PathInvalid,
    /// In-root path that does not name an existing file
    NotFound,
}

/// Resolve a relative path against the configured root.
///
/// Returns the absolute path of an existing regular file, or the first
/// failure in the order: root unset, path invalid, file missing.
pub fn resolve_video_path(
    root: Option<&Path>,
    relative: &str,
) -> Result<PathBuf, VideoPathError> {
    let Some(root) = root else {
        return Err(VideoPathError::RootNotSet);
    };

    let rel = Path::new(relative);
    if rel.is_absolute() {
        return Err(VideoPathError::PathInvalid);
    }
    // Track directory depth so `a/../b` stays legal while `../x` is not
    let mut depth: i32 = 0;
    for component in rel.components() {
        match component {
            Component::Normal(_) => depth += 1,
            Component::CurDir => {}
            Component::ParentDir => {
                depth -= 1;
                if depth < 0 {
                    return Err(VideoPathError::PathInvalid);
                }
            }
            Component::RootDir | Component::Prefix(_) => {
                return Err(VideoPathError::PathInvalid);
            }
        }
    }

    let full = root.join(rel);
    match std::fs::metadata(&full) {
        Ok(meta) if meta.is_file() => Ok(full),
        _ => Err(VideoPathError::NotFound),
    }
}

/// MIME type by file extension, case-insensitive
pub fn mime_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("mp4") => "video/mp4",
        Some("webm") => "video/webm",
        Some("ogg") => "video/ogg",
        Some("mov") => "video/quicktime",
        Some("m4v") => "video/x-m4v",
        _ => "application/octet-stream",
    }
}

/// List video files under the root as sorted, forward-slash relative paths.
///
/// Best effort: an unreadable or missing root degrades to an empty list.
pub fn list_video_files(root: &Path) -> Vec<String> {
    let mut files: Vec<String> = WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            entry
                .path()
                .extension()
                .and_then(|e| e.to_str())
                .map(|e| {
                    let lower = e.to_ascii_lowercase();
                    VIDEO_EXTENSIONS.contains(&lower.as_str())
                })
                .unwrap_or(false)
        })
        .filter_map(|entry| {
            entry
                .path()
                .strip_prefix(root)
                .ok()
                .map(|rel| rel.to_string_lossy().replace('\\', "/"))
        })
        .collect();
    files.sort();
    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn video_root() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("a.mp4"), b"a").unwrap();
        fs::write(dir.path().join("sub").join("b.mp4"), b"b").unwrap();
        fs::write(dir.path().join("notes.txt"), b"n").unwrap();
        dir
    }

    #[test]
    fn resolves_nested_file_under_root() {
        let dir = video_root();
        let full = resolve_video_path(Some(dir.path()), "sub/b.mp4").unwrap();
        assert_eq!(full, dir.path().join("sub").join("b.mp4"));
    }

    #[test]
    fn unset_root_fails_before_filesystem_check() {
        assert_eq!(
            resolve_video_path(None, "a.mp4"),
            Err(VideoPathError::RootNotSet)
        );
    }

    #[test]
    fn traversal_is_invalid_not_missing() {
        let dir = video_root();
        assert_eq!(
            resolve_video_path(Some(dir.path()), "../x"),
            Err(VideoPathError::PathInvalid)
        );
        assert_eq!(
            resolve_video_path(Some(dir.path()), "sub/../../x"),
            Err(VideoPathError::PathInvalid)
        );
        assert_eq!(
            resolve_video_path(Some(dir.path()), "/etc/passwd"),
            Err(VideoPathError::PathInvalid)
        );
    }

    #[test]
    fn internal_parent_components_stay_in_root() {
        let dir = video_root();
        let full = resolve_video_path(Some(dir.path()), "sub/../a.mp4").unwrap();
        assert_eq!(full, dir.path().join("sub").join("..").join("a.mp4"));
    }

    #[test]
    fn missing_file_in_root_is_not_found() {
        let dir = video_root();
        assert_eq!(
            resolve_video_path(Some(dir.path()), "missing.mp4"),
            Err(VideoPathError::NotFound)
        );
    }

    #[test]
    fn directory_is_not_a_video_file() {
        let dir = video_root();
        assert_eq!(
            resolve_video_path(Some(dir.path()), "sub"),
            Err(VideoPathError::NotFound)
        );
    }

    #[test]
    fn mime_lookup_is_case_insensitive() {
        assert_eq!(mime_for_path(Path::new("a.mp4")), "video/mp4");
        assert_eq!(mime_for_path(Path::new("a.MP4")), "video/mp4");
        assert_eq!(mime_for_path(Path::new("a.WebM")), "video/webm");
        assert_eq!(mime_for_path(Path::new("a.mov")), "video/quicktime");
        assert_eq!(mime_for_path(Path::new("a.m4v")), "video/x-m4v");
        assert_eq!(mime_for_path(Path::new("a.xyz")), "application/octet-stream");
        assert_eq!(mime_for_path(Path::new("noext")), "application/octet-stream");
    }

    #[test]
    fn inventory_lists_only_videos_relative_to_root() {
        let dir = video_root();
        let files = list_video_files(dir.path());
        assert_eq!(files, vec!["a.mp4".to_string(), "sub/b.mp4".to_string()]);
    }

    #[test]
    fn inventory_of_missing_root_is_empty() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        assert!(list_video_files(&missing).is_empty());
    }
}
