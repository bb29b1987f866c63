/// Entries for the PDF document information dictionary.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentInfo {
    pub title: Option<String>,
    pub producer: Option<String>,
    /// A PDF date string, e.g. `D:20240131120000`.
    pub creation_date: Option<String>,
}

impl DocumentInfo {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.producer.is_none() && self.creation_date.is_none()
    }
}
