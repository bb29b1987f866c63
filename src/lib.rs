//! readymeta converts a Yoda research-data metadata document into a short PDF
//! report: a banner, a horizontal rule, then one `Label: value` line per
//! projected field.
//!
//! ```no_run
//! use readymeta::{PipelineBuilder, project};
//! use readymeta_schema::load_from_path;
//!
//! # fn main() -> Result<(), readymeta::PipelineError> {
//! let (_, document) = load_from_path("yoda-metadata.json")?;
//! let pipeline = PipelineBuilder::new().build();
//! let path = pipeline.generate_to_file(&project(&document), "dumpfile")?;
//! println!("Wrote {}", path.display());
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod error;
pub mod pipeline;
pub mod report;
pub mod template;

pub use error::PipelineError;
pub use pipeline::{PipelineBuilder, PipelineConfig, ReportPipeline};
pub use report::{BASIC_FIELD_LABELS, ReportLine, project};
pub use template::ReportTemplate;
