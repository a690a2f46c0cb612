// crates/parcelmap-core/src/writer.rs
use crate::error::{ConvertError, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Replaces `path` with `bytes`.
///
/// The data goes to a hidden, per-process sibling file first and is renamed
/// into place, so the destination is either the old content or the complete
/// new one.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let tmp_path = temp_path_for(path)?;

    if let Err(e) = fs::write(&tmp_path, bytes) {
        fs::remove_file(&tmp_path).ok();
        return Err(ConvertError::io(tmp_path, e));
    }
    if let Err(e) = fs::rename(&tmp_path, path) {
        fs::remove_file(&tmp_path).ok();
        return Err(ConvertError::io(path, e));
    }
    Ok(())
}

fn temp_path_for(path: &Path) -> Result<PathBuf> {
    let filename = path.file_name().ok_or_else(|| {
        ConvertError::io(
            path,
            io::Error::new(io::ErrorKind::InvalidInput, "output path has no file name"),
        )
    })?;
    let tmp_name = format!(".{}.tmp.{}", filename.to_string_lossy(), std::process::id());
    Ok(path.with_file_name(tmp_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overwrites_existing_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let out = tmp.path().join("output.kml");
        fs::write(&out, "old content that is longer than the new one").unwrap();

        write_atomic(&out, b"<kml/>").unwrap();

        assert_eq!(fs::read_to_string(&out).unwrap(), "<kml/>");
        // No leftover temporary file.
        assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 1);
    }

    #[test]
    fn missing_directory_is_an_io_error() {
        let tmp = tempfile::TempDir::new().unwrap();
        let out = tmp.path().join("no/such/dir/output.kml");

        let err = write_atomic(&out, b"x").unwrap_err();
        assert!(matches!(err, ConvertError::Io { .. }));
        assert!(!out.exists());
    }

    #[test]
    fn temp_name_is_hidden_and_per_process() {
        let tmp = temp_path_for(Path::new("out/output.kml")).unwrap();
        assert_eq!(tmp.parent(), Some(Path::new("out")));
        let expected = format!(".output.kml.tmp.{}", std::process::id());
        assert_eq!(tmp.file_name().unwrap().to_string_lossy(), expected);
    }

    #[test]
    fn path_without_file_name_is_rejected() {
        let err = write_atomic(Path::new(".."), b"x").unwrap_err();
        assert!(matches!(err, ConvertError::Io { .. }));
    }
}
