// src/pipeline/orchestrator.rs
use super::config::PipelineConfig;
use crate::error::PipelineError;
use crate::report::ReportLine;
use readymeta_layout::{LaidOutDocument, LayoutEngine};
use readymeta_render_core::{DocumentInfo, DocumentRenderer, RenderError};
use readymeta_render_lopdf::LopdfRenderer;
use std::fs;
use std::io::{self, BufWriter, Seek, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Lays out report lines and renders them to PDF.
#[derive(Debug, Clone)]
pub struct ReportPipeline {
    config: PipelineConfig,
    engine: LayoutEngine,
}

impl ReportPipeline {
    pub fn new(config: PipelineConfig) -> Self {
        let engine = LayoutEngine::new(config.layout);
        Self { config, engine }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Places the banner, the rule and every line on pages, echoing each line
    /// to the log before it is placed.
    pub fn layout(&self, lines: &[ReportLine]) -> Result<LaidOutDocument, PipelineError> {
        for (index, line) in lines.iter().enumerate() {
            log::info!("Index: {} Element: {}", index, line);
        }
        let nodes = self.config.template.build(lines);
        let document = self.engine.layout(&nodes).map_err(RenderError::from)?;
        log::debug!(
            "Report laid out: {} rows on {} page(s)",
            document.row_count(),
            document.page_count()
        );
        Ok(document)
    }

    /// Renders the report into `writer` and hands it back once the PDF is complete.
    pub fn generate<W: Write + Seek>(
        &self,
        lines: &[ReportLine],
        writer: W,
    ) -> Result<W, PipelineError> {
        let document = self.layout(lines)?;

        let mut renderer: Box<LopdfRenderer<W>> = Box::new(LopdfRenderer::new());
        renderer.begin_document(writer)?;
        renderer.set_document_info(self.document_info());

        let mut page_ids = Vec::with_capacity(document.page_count());
        for (page_index, elements) in document.pages.iter().enumerate() {
            let content_id = renderer.render_page_content(elements, document.page_size)?;
            let page_id = renderer.write_page_object(vec![content_id], document.page_size)?;
            log::debug!("Wrote page {} as object {:?}", page_index + 1, page_id);
            page_ids.push(page_id);
        }

        Ok(renderer.finish(page_ids)?)
    }

    /// Writes the report to `<basename>.pdf` inside the configured output directory.
    ///
    /// The PDF is assembled in a temporary file next to the target and only moved
    /// into place once it is complete, so a failed run leaves no output file.
    pub fn generate_to_file<P: AsRef<Path>>(
        &self,
        lines: &[ReportLine],
        basename: P,
    ) -> Result<PathBuf, PipelineError> {
        let mut file_name = basename.as_ref().as_os_str().to_owned();
        file_name.push(".pdf");
        let output_path = self.config.output_dir.join(file_name);
        let target_dir = match output_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&target_dir).map_err(RenderError::from)?;

        let temp = NamedTempFile::new_in(&target_dir).map_err(RenderError::from)?;
        let writer = self.generate(lines, BufWriter::new(temp))?;
        let temp = writer
            .into_inner()
            .map_err(|e| RenderError::from(e.into_error()))?;
        temp.as_file().sync_all().map_err(RenderError::from)?;
        temp.persist(&output_path)
            .map_err(|e| RenderError::from(io::Error::from(e)))?;

        log::info!("Report written to {}", output_path.display());
        Ok(output_path)
    }

    fn document_info(&self) -> DocumentInfo {
        DocumentInfo {
            title: self.config.title.clone(),
            producer: Some(format!("readYmeta v{}", env!("CARGO_PKG_VERSION"))),
            creation_date: Some(chrono::Local::now().format("D:%Y%m%d%H%M%S").to_string()),
        }
    }
}
