//! Collision-free save paths within a flat target directory.

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::error::DownloadError;

/// A directory plus a filename that did not exist when it was resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavePath {
    /// Target directory (created if absent).
    pub directory: PathBuf,
    /// Filename unique within `directory` at resolution time.
    pub filename: String,
}

impl SavePath {
    /// Full path of the file.
    #[must_use]
    pub fn path(&self) -> PathBuf {
        self.directory.join(&self.filename)
    }
}

impl fmt::Display for SavePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path().display())
    }
}

/// Ensures `directory` exists and returns a path for `filename` that is not taken.
///
/// When `directory/filename` exists, `base_1.ext`, `base_2.ext`, ... are probed
/// until a free name is found. The check is not atomic; callers that create the
/// file must open it with `create_new` and resolve again on `AlreadyExists`.
///
/// # Errors
///
/// Returns `DownloadError::Io` if the directory cannot be created.
pub fn unique_path(directory: &Path, filename: &str) -> Result<SavePath, DownloadError> {
    std::fs::create_dir_all(directory).map_err(|e| DownloadError::io(directory, e))?;

    if !is_taken(&directory.join(filename)) {
        return Ok(SavePath {
            directory: directory.to_path_buf(),
            filename: filename.to_string(),
        });
    }

    let (base, ext) = split_extension(filename);
    let filename = (1u64..)
        .map(|counter| format!("{base}_{counter}{ext}"))
        .find(|candidate| !is_taken(&directory.join(candidate)))
        .unwrap_or_else(|| filename.to_string());
    debug!(dir = %directory.display(), filename = %filename, "resolved name collision");

    Ok(SavePath {
        directory: directory.to_path_buf(),
        filename,
    })
}

/// Any directory entry counts, including a symlink whose target is missing.
fn is_taken(path: &Path) -> bool {
    std::fs::symlink_metadata(path).is_ok()
}

/// Splits `name` into base and extension (with dot); a leading dot is not an extension.
fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(pos) if pos > 0 && !name[..pos].chars().all(|c| c == '.') => {
            (&name[..pos], &name[pos..])
        }
        _ => (name, ""),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_unique_path_no_conflict() {
        let temp_dir = TempDir::new().unwrap();
        let save = unique_path(temp_dir.path(), "video.mp4").unwrap();
        assert_eq!(save.filename, "video.mp4");
        assert_eq!(save.path(), temp_dir.path().join("video.mp4"));
    }

    #[test]
    fn test_unique_path_appends_counter_on_each_collision() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("video.mp4"), b"1").unwrap();

        let second = unique_path(temp_dir.path(), "video.mp4").unwrap();
        assert_eq!(second.filename, "video_1.mp4");
        std::fs::write(second.path(), b"2").unwrap();

        let third = unique_path(temp_dir.path(), "video.mp4").unwrap();
        assert_eq!(third.filename, "video_2.mp4");
    }

    #[test]
    fn test_unique_path_creates_missing_directories() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b");

        let save = unique_path(&nested, "clip.webm").unwrap();
        assert!(nested.is_dir());
        assert_eq!(save.directory, nested);

        // Idempotent on an existing directory.
        assert!(unique_path(&nested, "clip.webm").is_ok());
    }

    #[test]
    fn test_unique_path_without_extension() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("README"), b"x").unwrap();
        let save = unique_path(temp_dir.path(), "README").unwrap();
        assert_eq!(save.filename, "README_1");
    }

    #[test]
    fn test_unique_path_directory_is_a_file_returns_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        std::fs::write(&blocker, b"x").unwrap();

        let result = unique_path(&blocker.join("videos"), "clip.mp4");
        assert!(matches!(result, Err(DownloadError::Io { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn test_unique_path_dangling_symlink_counts_as_taken() {
        let temp_dir = TempDir::new().unwrap();
        std::os::unix::fs::symlink(
            temp_dir.path().join("nowhere"),
            temp_dir.path().join("clip.mp4"),
        )
        .unwrap();

        let save = unique_path(temp_dir.path(), "clip.mp4").unwrap();
        assert_eq!(save.filename, "clip_1.mp4");
    }

    #[test]
    fn test_split_extension() {
        assert_eq!(split_extension("video.mp4"), ("video", ".mp4"));
        assert_eq!(split_extension("archive.tar.gz"), ("archive.tar", ".gz"));
        assert_eq!(split_extension(".hidden"), (".hidden", ""));
        assert_eq!(split_extension("plain"), ("plain", ""));
    }
}
