//! Command-line front end of the `readymeta` binary.

use crate::error::PipelineError;
use crate::pipeline::PipelineBuilder;
use crate::report::project;
use clap::Parser;
use readymeta_schema::{DEFAULT_METADATA_FILE, MetadataDocument, read_document_bytes};
use readymeta_types::page::PageSize;
use std::io::Write;
use std::path::PathBuf;

/// Printed once at startup.
pub const WELCOME_BANNER: &str = "Welcome to the Yoda metadata translator\n\
(C)Brett G. Olivier, Vrije Universiteit Amsterdam, 2022";

/// Converts a Yoda metadata file into a PDF report.
#[derive(Parser, Debug, Clone)]
#[command(name = "readymeta", version, about, long_about = None)]
pub struct Cli {
    /// Metadata file to read
    #[arg(short, long, default_value = DEFAULT_METADATA_FILE)]
    pub input: PathBuf,

    /// Output file name, without the .pdf extension
    #[arg(short, long, default_value = "dumpfile")]
    pub output: String,

    /// Directory the report is written to
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Page format (a4, letter or legal)
    #[arg(long, default_value = "a4")]
    pub page_size: PageSize,

    /// Enable debug logging
    #[arg(long, default_value_t = false)]
    pub debug: bool,
}

/// Runs one conversion, writing the console transcript to `out`.
///
/// The transcript is the welcome banner followed by the input file exactly as
/// read. Returns the path of the written report.
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<PathBuf, PipelineError> {
    writeln!(out, "{}", WELCOME_BANNER)?;

    let raw = read_document_bytes(&cli.input).inspect_err(|e| log::error!("{}", e))?;
    out.write_all(&raw)?;
    out.flush()?;

    let document = MetadataDocument::from_slice(&raw).inspect_err(|e| log::error!("{}", e))?;
    let lines = project(&document);

    let pipeline = PipelineBuilder::new()
        .with_page_size(cli.page_size)
        .with_output_dir(&cli.output_dir)
        .with_title(document.title.as_str())
        .build();

    pipeline
        .generate_to_file(&lines, &cli.output)
        .inspect_err(|e| log::error!("{}", e))
}
