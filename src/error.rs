// src/error.rs
use readymeta_render_core::RenderError;
use readymeta_schema::LoadError;
use thiserror::Error;

/// Everything that can stop a report from being produced.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Loading metadata failed: {0}")]
    Load(#[from] LoadError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
