use crate::error::RenderError;
use crate::types::DocumentInfo;
use lopdf::ObjectId;
use readymeta_layout::PositionedElement;
use readymeta_types::geometry::Size;
use std::io::{Seek, Write};

/// A trait for document renderers, abstracting the PDF-writing primitives.
///
/// Call order: `begin_document`, then per page `render_page_content` followed by
/// `write_page_object`, then `finish` with the page ids in display order.
pub trait DocumentRenderer<W: Write + Seek> {
    fn begin_document(&mut self, writer: W) -> Result<(), RenderError>;

    fn set_document_info(&mut self, info: DocumentInfo);

    fn render_page_content(
        &mut self,
        elements: &[PositionedElement],
        page_size: Size,
    ) -> Result<ObjectId, RenderError>;

    fn write_page_object(
        &mut self,
        content_stream_ids: Vec<ObjectId>,
        page_size: Size,
    ) -> Result<ObjectId, RenderError>;

    /// Writes the page tree, catalog and cross-reference table and returns the
    /// flushed writer.
    fn finish(self: Box<Self>, page_ids: Vec<ObjectId>) -> Result<W, RenderError>;
}
