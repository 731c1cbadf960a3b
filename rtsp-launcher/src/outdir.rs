//! Output directory preparation.

use std::fs;
use std::path::Path;

use crate::error::LaunchError;

/// Create `path` and any missing parents. Succeeds if it already exists.
pub fn ensure_output_dir(path: &Path) -> Result<(), LaunchError> {
    if let Err(source) = fs::create_dir_all(path) {
        if path.exists() && !path.is_dir() {
            return Err(LaunchError::NotADirectory(path.to_path_buf()));
        }
        return Err(LaunchError::CreateDir {
            path: path.to_path_buf(),
            source,
        });
    }

    tracing::debug!(path = %path.display(), "output directory ready");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_creates_missing_parents() {
        let root = TempDir::new().unwrap();
        let target = root.path().join("media").join("rtsp-recordings");

        ensure_output_dir(&target).unwrap();

        assert!(target.is_dir());
    }

    #[test]
    fn test_is_idempotent() {
        let root = TempDir::new().unwrap();
        let target = root.path().join("recordings");

        ensure_output_dir(&target).unwrap();
        fs::write(target.join("clip.mp4"), b"data").unwrap();
        ensure_output_dir(&target).unwrap();

        // Existing contents survive the second call
        assert!(target.join("clip.mp4").is_file());
    }

    #[test]
    fn test_file_at_path_fails() {
        let root = TempDir::new().unwrap();
        let target = root.path().join("recordings");
        fs::write(&target, b"not a directory").unwrap();

        let err = ensure_output_dir(&target).unwrap_err();
        assert!(matches!(err, LaunchError::NotADirectory(_)), "got {:?}", err);
    }

    #[test]
    fn test_file_as_parent_fails() {
        let root = TempDir::new().unwrap();
        let blocker = root.path().join("media");
        fs::write(&blocker, b"file").unwrap();

        let err = ensure_output_dir(&blocker.join("rtsp-recordings")).unwrap_err();
        assert!(matches!(err, LaunchError::CreateDir { .. }), "got {:?}", err);
    }
}
