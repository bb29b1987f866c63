//! Field projection: picks the basic descriptive fields out of a metadata
//! document and formats each as one `Label: value` report line.

use readymeta_schema::MetadataDocument;
use std::fmt;

/// Labels of the projected fields, in report order.
///
/// The spellings (`Licence`, `Rentention_Period`) match reports produced by
/// earlier releases and are kept as-is.
pub const BASIC_FIELD_LABELS: [&str; 13] = [
    "Title",
    "Description",
    "Version",
    "Licence",
    "Language",
    "Rentention_Period",
    "Data_Type",
    "Data_Access_Restriction",
    "Retention_Information",
    "Embargo_End_Date",
    "Data_Classification",
    "Collection_Name",
    "Remarks",
];

/// One line of the report body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine {
    text: String,
    label_len: usize,
}

impl ReportLine {
    pub fn new(label: &str, value: impl fmt::Display) -> Self {
        Self {
            text: format!("{}: {}", label, value),
            label_len: label.len(),
        }
    }

    pub fn label(&self) -> &str {
        &self.text[..self.label_len]
    }

    pub fn value(&self) -> &str {
        &self.text[self.label_len + 2..]
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for ReportLine {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

/// Projects the basic descriptive fields of `doc` into report lines.
///
/// Always returns exactly `BASIC_FIELD_LABELS.len()` lines in label order.
/// Absent fields render as an empty value.
pub fn project(doc: &MetadataDocument) -> Vec<ReportLine> {
    let values: [&dyn fmt::Display; 13] = [
        &doc.title,
        &doc.description,
        &doc.version,
        &doc.license,
        &doc.language,
        &doc.retention_period,
        &doc.data_type,
        &doc.data_access_restriction,
        &doc.retention_information,
        &doc.embargo_end_date,
        &doc.data_classification,
        &doc.collection_name,
        &doc.remarks,
    ];

    BASIC_FIELD_LABELS
        .iter()
        .zip(values)
        .map(|(label, value)| ReportLine::new(label, value))
        .collect()
}
