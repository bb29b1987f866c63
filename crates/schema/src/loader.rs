use crate::error::LoadError;
use crate::model::MetadataDocument;
use serde_json::Value;
use std::fs;
use std::path::Path;
use std::str::FromStr;

impl MetadataDocument {
    /// Decodes a metadata document from raw JSON bytes.
    ///
    /// A repeated key keeps its last value and a top-level `null` yields an
    /// empty document; only malformed JSON and type mismatches are errors.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, LoadError> {
        let value: Value = serde_json::from_slice(bytes)?;
        let document = match value {
            Value::Null => MetadataDocument::default(),
            value => serde_json::from_value(value)?,
        };
        log::debug!(
            "Loaded metadata document '{}' ({} creators, {} contributors)",
            document.title,
            document.creator.len(),
            document.contributor.len()
        );
        Ok(document)
    }
}

impl FromStr for MetadataDocument {
    type Err = LoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_slice(s.as_bytes())
    }
}

/// Reads the raw bytes of a metadata file without decoding them.
pub fn read_document_bytes<P: AsRef<Path>>(path: P) -> Result<Vec<u8>, LoadError> {
    let path = path.as_ref();
    log::info!("Reading metadata from {}", path.display());
    fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads and decodes a metadata file, returning the raw bytes alongside the document.
pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<(Vec<u8>, MetadataDocument), LoadError> {
    let bytes = read_document_bytes(path)?;
    let document = MetadataDocument::from_slice(&bytes)?;
    Ok((bytes, document))
}
