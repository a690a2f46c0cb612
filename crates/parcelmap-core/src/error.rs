// crates/parcelmap-core/src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    /// The outer document is not JSON or does not have the expected shape.
    #[error("malformed input document: {0}")]
    MalformedInput(#[source] serde_json::Error),

    /// The sub-parcel list embedded in a contract could not be decoded.
    #[error("malformed sub-parcel payload in contract {id:?} (item {index}): {source}")]
    MalformedSubParcels {
        id: String,
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("i/o error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("kml serialization failed: {0}")]
    Serialization(#[from] quick_xml::Error),
}

impl ConvertError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConvertError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T, E = ConvertError> = std::result::Result<T, E>;
