use crate::template::ReportTemplate;
use readymeta_layout::LayoutConfig;
use std::path::PathBuf;

/// Settings shared by every report a pipeline produces.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    /// Page format, orientation and margins.
    pub layout: LayoutConfig,
    pub template: ReportTemplate,
    /// Directory that `generate_to_file` writes into.
    pub output_dir: PathBuf,
    /// Document title recorded in the PDF information dictionary.
    pub title: Option<String>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            layout: LayoutConfig::default(),
            template: ReportTemplate::default(),
            output_dir: PathBuf::from("."),
            title: None,
        }
    }
}
