use std::path::PathBuf;
use thiserror::Error;

/// Failure to obtain a `MetadataDocument`. No partial document is ever returned.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read metadata from '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Metadata does not match the expected schema: {0}")]
    Decode(#[from] serde_json::Error),
}
