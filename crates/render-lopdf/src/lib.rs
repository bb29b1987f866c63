//! Streaming PDF renderer using lopdf.
//!
//! Pages are encoded with lopdf's content operations and written to the
//! output as soon as they are rendered; only the small document-level objects
//! (resources, page tree, catalog, info) are held back until `finish`.

mod helpers;
mod renderer;
mod writer;

pub use helpers::{FONT_RESOURCE_NAME, render_elements_to_content};
pub use renderer::LopdfRenderer;
pub use writer::StreamingPdfWriter;
