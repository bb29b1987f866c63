use crate::helpers::{self, FONT_RESOURCE_NAME};
use crate::writer::StreamingPdfWriter;
use lopdf::{Dictionary, Object, ObjectId, StringFormat, dictionary};
use readymeta_layout::PositionedElement;
use readymeta_layout::fonts::BASE_FONT;
use readymeta_render_core::utils::to_win_ansi;
use readymeta_render_core::{DocumentInfo, DocumentRenderer, RenderError};
use readymeta_types::geometry::Size;
use std::io::{Seek, Write};

/// A streaming PDF renderer using the `lopdf` object model.
pub struct LopdfRenderer<W: Write + Seek> {
    writer: Option<StreamingPdfWriter<W>>,
    info: DocumentInfo,
}

impl<W: Write + Seek> Default for LopdfRenderer<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write + Seek> LopdfRenderer<W> {
    pub fn new() -> Self {
        Self {
            writer: None,
            info: DocumentInfo::default(),
        }
    }

    fn writer_mut(&mut self) -> Result<&mut StreamingPdfWriter<W>, RenderError> {
        self.writer
            .as_mut()
            .ok_or_else(|| RenderError::Other("Document not started".into()))
    }

    fn info_dictionary(&self) -> Dictionary {
        let mut dict = Dictionary::new();
        let entries = [
            ("Title", &self.info.title),
            ("Producer", &self.info.producer),
            ("CreationDate", &self.info.creation_date),
        ];
        for (key, value) in entries {
            if let Some(value) = value {
                dict.set(key, Object::String(to_win_ansi(value), StringFormat::Literal));
            }
        }
        dict
    }
}

impl<W: Write + Seek> DocumentRenderer<W> for LopdfRenderer<W> {
    fn begin_document(&mut self, writer: W) -> Result<(), RenderError> {
        let helvetica = dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => BASE_FONT,
            "Encoding" => "WinAnsiEncoding",
        };
        let mut font_dict = Dictionary::new();
        font_dict.set(FONT_RESOURCE_NAME, Object::Dictionary(helvetica));

        self.writer = Some(StreamingPdfWriter::new(writer, "1.7", font_dict)?);
        Ok(())
    }

    fn set_document_info(&mut self, info: DocumentInfo) {
        self.info = info;
    }

    fn render_page_content(
        &mut self,
        elements: &[PositionedElement],
        page_size: Size,
    ) -> Result<ObjectId, RenderError> {
        let content = helpers::render_elements_to_content(elements, page_size.height);
        self.writer_mut()?.write_content_stream(&content)
    }

    fn write_page_object(
        &mut self,
        content_stream_ids: Vec<ObjectId>,
        page_size: Size,
    ) -> Result<ObjectId, RenderError> {
        let writer = self.writer_mut()?;
        let page_dict = dictionary! {
            "Type" => "Page",
            "Parent" => writer.pages_id,
            "MediaBox" => vec![0.into(), 0.into(), page_size.width.into(), page_size.height.into()],
            "Contents" => Object::Array(content_stream_ids.into_iter().map(Object::Reference).collect()),
            "Resources" => writer.resources_id,
        };
        Ok(writer.write_object(page_dict.into())?)
    }

    fn finish(self: Box<Self>, page_ids: Vec<ObjectId>) -> Result<W, RenderError> {
        let mut renderer = *self;
        let info = renderer.info_dictionary();
        match renderer.writer.take() {
            Some(mut internal_writer) => {
                internal_writer.set_page_ids(page_ids);
                if !info.is_empty() {
                    internal_writer.set_info(info);
                }
                Ok(internal_writer.finish()?)
            }
            None => Err(RenderError::Other(
                "Document was never started with begin_document".into(),
            )),
        }
    }
}
