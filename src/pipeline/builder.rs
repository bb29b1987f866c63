// src/pipeline/builder.rs
use super::config::PipelineConfig;
use super::orchestrator::ReportPipeline;
use crate::template::ReportTemplate;
use readymeta_types::page::{Margins, Orientation, PageSize};
use std::path::PathBuf;

/// A builder for creating a `ReportPipeline`.
#[derive(Debug, Clone, Default)]
pub struct PipelineBuilder {
    config: PipelineConfig,
}

impl PipelineBuilder {
    /// Creates a builder with A4 portrait pages, 10mm margins and the default report template.
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_page_size(mut self, page_size: PageSize) -> Self {
        self.config.layout.page_size = page_size;
        self
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.config.layout.orientation = orientation;
        self
    }

    /// Page margins in millimetres.
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.config.layout.margins = margins;
        self
    }

    /// Overrides the row geometry of the report.
    pub fn with_template(mut self, template: ReportTemplate) -> Self {
        self.config.template = template;
        self
    }

    /// Directory that `generate_to_file` writes into. Created if missing.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.output_dir = dir.into();
        self
    }

    /// Records a document title in the PDF information dictionary. Empty titles are ignored.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        let title = title.into();
        self.config.title = (!title.trim().is_empty()).then_some(title);
        self
    }

    pub fn build(self) -> ReportPipeline {
        ReportPipeline::new(self.config)
    }
}
