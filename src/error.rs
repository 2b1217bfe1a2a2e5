use std::path::PathBuf;
use thiserror::Error;

/// Fatal failures while building the record store. There is no partial load.
#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("Failed to read data file at {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed data file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl DataLoadError {
    pub fn path(&self) -> &std::path::Path {
        match self {
            DataLoadError::Read { path, .. } | DataLoadError::Parse { path, .. } => path,
        }
    }
}
