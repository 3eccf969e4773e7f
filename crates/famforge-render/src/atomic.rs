//! Atomic file persistence: write to a temp sibling, sync, then rename.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::errors::RenderError;

/// Write `data` so the target either receives the whole file or is left
/// untouched. The bytes land in a `.tmp` sibling first and are renamed
/// over the target only after a successful sync; on any failure the
/// sibling is removed.
pub fn write_bytes_atomic(path: &Path, data: &[u8]) -> Result<(), RenderError> {
    let tmp_path = temp_path(path)?;
    let result = write_and_rename(&tmp_path, path, data);
    if result.is_err() {
        let _ = std::fs::remove_file(&tmp_path);
    }
    result
}

fn write_and_rename(tmp_path: &Path, path: &Path, data: &[u8]) -> Result<(), RenderError> {
    let mut file = OpenOptions::new()
        .create(true)
        .truncate(true)
        .write(true)
        .open(tmp_path)?;
    file.write_all(data)?;
    file.sync_all()?;
    std::fs::rename(tmp_path, path)?;
    Ok(())
}

fn temp_path(path: &Path) -> Result<PathBuf, RenderError> {
    let file_name = path
        .file_name()
        .ok_or_else(|| RenderError::Persist(format!("invalid output path: {}", path.display())))?;
    Ok(path.with_file_name(format!("{}.tmp", file_name.to_string_lossy())))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("famforge-atomic-{}-{}", name, std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn successful_write_leaves_no_temp_sibling() {
        let dir = test_dir("ok");
        let target = dir.join("doc.pdf");

        write_bytes_atomic(&target, b"payload").unwrap();

        assert_eq!(std::fs::read(&target).unwrap(), b"payload");
        assert!(!dir.join("doc.pdf.tmp").exists());
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn failed_rename_leaves_the_target_untouched() {
        let dir = test_dir("rename");
        // Occupying the target path with a directory makes the rename fail.
        let target = dir.join("doc.pdf");
        std::fs::create_dir(&target).unwrap();

        let err = write_bytes_atomic(&target, b"payload").unwrap_err();

        assert!(matches!(err, RenderError::Io(_)));
        assert!(target.is_dir());
        assert!(!dir.join("doc.pdf.tmp").exists());
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn pathless_target_is_rejected() {
        let err = write_bytes_atomic(Path::new("/"), b"payload").unwrap_err();
        assert!(matches!(err, RenderError::Persist(_)));
    }
}
