pub mod fixtures;
pub mod pdf_assertions;

use lopdf::Document as LopdfDocument;
use readymeta::{PipelineBuilder, PipelineError, ReportLine};
use std::io::Cursor;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    /// Create a GeneratedPdf from raw bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    /// Read and parse a PDF written to disk
    pub fn from_path(path: &std::path::Path) -> Result<Self, Box<dyn std::error::Error>> {
        Self::from_bytes(std::fs::read(path)?)
    }

    /// Get the number of pages in the PDF
    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Save PDF to a file for manual debugging
    #[allow(dead_code)]
    pub fn save_for_debug(&self, name: &str) -> std::io::Result<()> {
        std::fs::write(format!("test_output_{}.pdf", name), &self.bytes)
    }
}

/// Render report lines with the default pipeline into memory
pub fn generate_pdf(lines: &[ReportLine]) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    generate_pdf_with(PipelineBuilder::new(), lines)
}

/// Render report lines with a customised pipeline into memory
pub fn generate_pdf_with(
    builder: PipelineBuilder,
    lines: &[ReportLine],
) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    let pipeline = builder.build();
    let writer = pipeline.generate(lines, Cursor::new(Vec::new()))?;
    GeneratedPdf::from_bytes(writer.into_inner())
}

/// Render report lines, surfacing the pipeline error untouched
#[allow(dead_code)]
pub fn try_generate(builder: PipelineBuilder, lines: &[ReportLine]) -> Result<Vec<u8>, PipelineError> {
    let writer = builder.build().generate(lines, Cursor::new(Vec::new()))?;
    Ok(writer.into_inner())
}
