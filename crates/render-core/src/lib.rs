//! Core rendering abstractions for PDF generation.
//!
//! This crate provides the pieces shared by PDF rendering backends:
//! - `DocumentRenderer` trait for abstracting PDF writing operations
//! - `RenderError`, the error type for assembling and persisting documents
//! - Helpers for coordinate conversion and string encoding

mod error;
mod traits;
mod types;
pub mod utils;

pub use error::RenderError;
pub use traits::DocumentRenderer;
pub use types::DocumentInfo;
