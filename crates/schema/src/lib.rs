//! The Yoda metadata schema.
//!
//! A single `MetadataDocument` record mirrors the keyed JSON document written
//! by Yoda for a research data package. Every field is optional: absent keys
//! and explicit `null`s decode to empty strings, zero or empty sequences.
//! Unknown keys are ignored. A value of the wrong type fails the whole load.

mod error;
mod loader;
mod model;

pub use error::LoadError;
pub use loader::{load_from_path, read_document_bytes};
pub use model::{
    Contributor, Creator, DateRange, FundingReference, Link, MetadataDocument, PersistentIdentifier,
    PersonIdentifier, PersonName, RelatedDatapackage,
};

/// Conventional file name of the metadata document inside a data package.
pub const DEFAULT_METADATA_FILE: &str = "yoda-metadata.json";
