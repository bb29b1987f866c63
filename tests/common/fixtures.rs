#![allow(dead_code)]

use readymeta::ReportLine;
use readymeta_schema::MetadataDocument;
use std::path::PathBuf;

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// The complete sample document shipped with the tests
pub fn full_document() -> MetadataDocument {
    let bytes = std::fs::read(fixture_path("yoda-metadata.json")).expect("fixture is readable");
    MetadataDocument::from_slice(&bytes).expect("fixture decodes")
}

pub fn sample_document() -> MetadataDocument {
    r#"{"Title":"Sample","Retention_Period":10,"License":"CC-BY-4.0"}"#
        .parse()
        .expect("sample decodes")
}

/// `count` distinct remark lines, for pagination tests
pub fn numbered_lines(count: usize) -> Vec<ReportLine> {
    (1..=count)
        .map(|i| ReportLine::new("Remarks", format!("entry-{:03}", i)))
        .collect()
}
