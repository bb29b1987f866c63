use lopdf::content::Content;
use lopdf::xref::{Xref, XrefEntry, XrefType};
use lopdf::{Dictionary, Object, ObjectId, Stream, dictionary};
use readymeta_render_core::RenderError;
use std::collections::BTreeMap;
use std::io::{self, Seek, Write};

/// Writes a PDF incrementally: objects go straight to the underlying writer,
/// except those registered with `buffer_object*`, which are written on `finish`.
pub struct StreamingPdfWriter<W: Write + Seek> {
    writer: W,
    xref: Xref,
    max_id: u32,
    pub catalog_id: ObjectId,
    pub pages_id: ObjectId,
    pub resources_id: ObjectId,
    page_ids: Vec<ObjectId>,
    info_id: Option<ObjectId>,
    buffered_objects: BTreeMap<ObjectId, Object>,
}

impl<W: Write + Seek> StreamingPdfWriter<W> {
    pub fn new(mut writer: W, version: &str, font_dict: Dictionary) -> io::Result<Self> {
        writer.write_all(format!("%PDF-{}\n", version).as_bytes())?;
        // Binary marker comment so transfer tools treat the file as binary.
        writer.write_all(b"%\xE2\xE3\xCF\xD3\n")?;

        let resources_id = (1, 0);
        let pages_id = (2, 0);
        let catalog_id = (3, 0);

        let mut buffered_objects = BTreeMap::new();
        buffered_objects.insert(resources_id, dictionary! { "Font" => font_dict }.into());

        Ok(Self {
            writer,
            xref: Xref::new(0, XrefType::CrossReferenceTable),
            max_id: 3,
            catalog_id,
            pages_id,
            resources_id,
            page_ids: Vec::new(),
            info_id: None,
            buffered_objects,
        })
    }

    pub fn new_object_id(&mut self) -> ObjectId {
        self.max_id += 1;
        (self.max_id, 0)
    }

    pub fn buffer_object(&mut self, object: Object) -> ObjectId {
        let id = self.new_object_id();
        self.buffered_objects.insert(id, object);
        id
    }

    pub fn buffer_object_at_id(&mut self, id: ObjectId, object: Object) {
        if id.0 > self.max_id {
            self.max_id = id.0;
        }
        self.buffered_objects.insert(id, object);
    }

    /// Writes an object immediately and returns its id.
    pub fn write_object(&mut self, object: Object) -> io::Result<ObjectId> {
        let id = self.new_object_id();
        self.write_indirect_object(id, &object)?;
        Ok(id)
    }

    pub fn write_content_stream(&mut self, content: &Content) -> Result<ObjectId, RenderError> {
        let stream = Stream::new(dictionary! {}, content.encode()?);
        Ok(self.write_object(Object::Stream(stream))?)
    }

    pub fn set_page_ids(&mut self, page_ids: Vec<ObjectId>) {
        self.page_ids = page_ids;
    }

    pub fn set_info(&mut self, info: Dictionary) {
        self.info_id = Some(self.buffer_object(info.into()));
    }

    pub fn finish(mut self) -> io::Result<W> {
        let pages_dict = dictionary! {
            "Type" => "Pages",
            "Kids" => self.page_ids.iter().map(|id| Object::Reference(*id)).collect::<Vec<Object>>(),
            "Count" => self.page_ids.len() as i64,
        };
        self.buffer_object_at_id(self.pages_id, pages_dict.into());

        let catalog_dict = dictionary! { "Type" => "Catalog", "Pages" => self.pages_id };
        self.buffer_object_at_id(self.catalog_id, catalog_dict.into());

        let buffered = std::mem::take(&mut self.buffered_objects);
        for (id, object) in &buffered {
            self.write_indirect_object(*id, object)?;
        }

        let xref_start = self.writer.stream_position()?;
        self.xref.size = self.max_id + 1;
        internal_writer::write_xref(&mut self.writer, &self.xref)?;

        let mut trailer = dictionary! { "Size" => i64::from(self.xref.size), "Root" => self.catalog_id };
        if let Some(info_id) = self.info_id {
            trailer.set("Info", info_id);
        }
        writeln!(self.writer, "trailer")?;
        internal_writer::write_dictionary(&mut self.writer, &trailer)?;
        writeln!(self.writer, "\nstartxref")?;
        writeln!(self.writer, "{}", xref_start)?;
        write!(self.writer, "%%EOF")?;

        self.writer.flush()?;
        log::debug!("Finished PDF with {} objects", self.xref.entries.len());
        Ok(self.writer)
    }

    fn write_indirect_object(&mut self, id: ObjectId, object: &Object) -> io::Result<()> {
        let offset = self.writer.stream_position()?;
        // Classic xref tables hold 10-digit offsets.
        let offset = u32::try_from(offset).map_err(|_| {
            io::Error::new(io::ErrorKind::InvalidData, format!("object {} starts beyond the 4 GiB xref limit", id.0))
        })?;
        self.xref.insert(id.0, XrefEntry::Normal { offset, generation: id.1 });
        writeln!(self.writer, "{} {} obj", id.0, id.1)?;
        internal_writer::write_object(&mut self.writer, object)?;
        writeln!(self.writer, "\nendobj")?;
        Ok(())
    }
}

mod internal_writer {
    use super::*;
    use lopdf::StringFormat;

    pub fn write_object(writer: &mut dyn Write, object: &Object) -> io::Result<()> {
        match object {
            Object::Null => writer.write_all(b"null"),
            Object::Boolean(b) => writer.write_all(if *b { b"true" } else { b"false" }),
            Object::Integer(i) => write!(writer, "{}", i),
            Object::Real(r) => write!(writer, "{:.3}", r),
            Object::Name(n) => {
                writer.write_all(b"/")?;
                writer.write_all(n)
            }
            Object::String(s, format) => match format {
                StringFormat::Literal => {
                    writer.write_all(b"(")?;
                    for &byte in s {
                        if byte == b'(' || byte == b')' || byte == b'\\' {
                            writer.write_all(b"\\")?;
                        }
                        writer.write_all(&[byte])?;
                    }
                    writer.write_all(b")")
                }
                StringFormat::Hexadecimal => {
                    write!(writer, "<{}>", s.iter().map(|b| format!("{:02X}", b)).collect::<String>())
                }
            },
            Object::Array(arr) => {
                writer.write_all(b"[")?;
                for (i, obj) in arr.iter().enumerate() {
                    if i > 0 {
                        writer.write_all(b" ")?;
                    }
                    write_object(writer, obj)?;
                }
                writer.write_all(b"]")
            }
            Object::Dictionary(dict) => write_dictionary(writer, dict),
            Object::Stream(stream) => {
                let mut dict = stream.dict.clone();
                dict.set("Length", stream.content.len() as i64);
                write_dictionary(writer, &dict)?;
                writer.write_all(b"\nstream\n")?;
                writer.write_all(&stream.content)?;
                writer.write_all(b"\nendstream")
            }
            Object::Reference(id) => write!(writer, "{} {} R", id.0, id.1),
        }
    }

    pub fn write_dictionary(writer: &mut dyn Write, dict: &Dictionary) -> io::Result<()> {
        writer.write_all(b"<<")?;
        let sorted_keys: BTreeMap<_, _> = dict.iter().collect();
        for (key, value) in sorted_keys {
            writer.write_all(b"/")?;
            writer.write_all(key)?;
            writer.write_all(b" ")?;
            write_object(writer, value)?;
            writer.write_all(b" ")?;
        }
        writer.write_all(b">>")
    }

    /// Writes a single-section cross-reference table covering ids `0..xref.size`.
    /// Ids that were never written are listed as free entries.
    pub fn write_xref<W: Write>(writer: &mut W, xref: &Xref) -> io::Result<()> {
        writeln!(writer, "xref")?;
        writeln!(writer, "0 {}", xref.size.max(1))?;
        writeln!(writer, "0000000000 65535 f ")?;
        for id in 1..xref.size {
            match xref.entries.get(&id) {
                Some(XrefEntry::Normal { offset, generation }) => {
                    writeln!(writer, "{:010} {:05} n ", offset, generation)?
                }
                _ => writeln!(writer, "0000000000 65535 f ")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn empty_fonts() -> Dictionary {
        Dictionary::new()
    }

    #[test]
    fn test_header_and_trailer() {
        let writer = StreamingPdfWriter::new(Cursor::new(Vec::new()), "1.7", empty_fonts()).unwrap();
        let bytes = writer.finish().unwrap().into_inner();
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.starts_with("%PDF-1.7\n"));
        assert!(text.contains("trailer"));
        assert!(text.contains("/Root 3 0 R"));
        assert!(text.ends_with("%%EOF"));
    }

    #[test]
    fn test_xref_offsets_point_at_objects() {
        let mut writer =
            StreamingPdfWriter::new(Cursor::new(Vec::new()), "1.7", empty_fonts()).unwrap();
        let id = writer.write_object(Object::Integer(42)).unwrap();
        assert_eq!(id, (4, 0));
        let bytes = writer.finish().unwrap().into_inner();
        let text = String::from_utf8_lossy(&bytes);

        let xref_at = text.find("xref\n").unwrap();
        let entries: Vec<&str> = text[xref_at..].lines().skip(2).take(5).collect();
        // Object 4 is the first object written after the header.
        let offset: usize = entries[4][..10].parse().unwrap();
        assert!(text[offset..].starts_with("4 0 obj\n42"));
    }

    #[test]
    fn test_unwritten_ids_are_free_xref_entries() {
        let mut writer =
            StreamingPdfWriter::new(Cursor::new(Vec::new()), "1.7", empty_fonts()).unwrap();
        let reserved = writer.new_object_id();
        let written = writer.write_object(Object::Integer(7)).unwrap();
        assert_eq!((reserved, written), ((4, 0), (5, 0)));
        let bytes = writer.finish().unwrap().into_inner();
        let text = String::from_utf8_lossy(&bytes);

        let xref_at = text.find("xref\n").unwrap();
        let mut lines = text[xref_at..].lines().skip(1);
        assert_eq!(lines.next(), Some("0 6"));
        let entries: Vec<&str> = lines.take(6).collect();
        assert_eq!(entries[0], "0000000000 65535 f ");
        assert_eq!(entries[4], "0000000000 65535 f ");
        assert!(entries[5].ends_with(" 00000 n "));
        assert!(text.contains("/Size 6"));
    }

    #[test]
    fn test_literal_strings_are_escaped() {
        let mut out = Vec::new();
        let obj = Object::String(b"a(b)c\\".to_vec(), lopdf::StringFormat::Literal);
        internal_writer::write_object(&mut out, &obj).unwrap();
        assert_eq!(out, b"(a\\(b\\)c\\\\)".to_vec());
    }

    #[test]
    fn test_output_loads_with_lopdf() {
        let mut writer =
            StreamingPdfWriter::new(Cursor::new(Vec::new()), "1.7", empty_fonts()).unwrap();
        let content = Content { operations: vec![] };
        let content_id = writer.write_content_stream(&content).unwrap();
        let page_id = writer
            .write_object(
                dictionary! {
                    "Type" => "Page",
                    "Parent" => writer.pages_id,
                    "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
                    "Contents" => vec![Object::Reference(content_id)],
                    "Resources" => writer.resources_id,
                }
                .into(),
            )
            .unwrap();
        writer.set_page_ids(vec![page_id]);
        let bytes = writer.finish().unwrap().into_inner();

        let doc = lopdf::Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 1);
    }
}
