// crates/parcelmap-core/src/loader/common_io.rs
use crate::error::{ConvertError, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

#[cfg(feature = "compact")]
use flate2::read::GzDecoder;

/// Opens a file, buffers it, and unwraps gzip when the name ends in `.gz`.
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| ConvertError::io(path, e))?;
    let reader = BufReader::new(file);

    #[cfg(feature = "compact")]
    {
        if is_gzip_path(path) {
            return Ok(Box::new(GzDecoder::new(reader)));
        }
    }

    Ok(Box::new(reader))
}

/// Reads the whole (possibly decompressed) file into memory.
pub fn read_all(path: &Path) -> Result<Vec<u8>> {
    let mut stream = open_stream(path)?;
    let mut data = Vec::new();
    stream
        .read_to_end(&mut data)
        .map_err(|e| ConvertError::io(path, e))?;
    Ok(data)
}

#[cfg_attr(not(feature = "compact"), allow(dead_code))]
fn is_gzip_path(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gzip_detection_uses_extension() {
        assert!(is_gzip_path(Path::new("input.json.gz")));
        assert!(is_gzip_path(Path::new("dump.GZ")));
        assert!(!is_gzip_path(Path::new("input.json")));
        assert!(!is_gzip_path(Path::new("gz")));
    }

    #[test]
    fn missing_file_reports_its_path() {
        let err = read_all(Path::new("definitely/not/here.json")).unwrap_err();
        match err {
            ConvertError::Io { path, .. } => {
                assert_eq!(path, Path::new("definitely/not/here.json"))
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
