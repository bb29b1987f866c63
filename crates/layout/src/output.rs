//! Output of the layout pass.

use crate::{LayoutElement, PositionedElement, Size};

/// A laid-out document: positioned elements grouped by page.
#[derive(Debug, Clone, PartialEq)]
pub struct LaidOutDocument {
    pub pages: Vec<Vec<PositionedElement>>,
    pub page_size: Size,
    /// Number of grid rows placed, across all pages.
    pub row_count: usize,
}

impl LaidOutDocument {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// All text runs in document order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.pages.iter().flatten().filter_map(|el| el.text())
    }

    pub fn rule_count(&self) -> usize {
        self.pages
            .iter()
            .flatten()
            .filter(|el| matches!(el.element, LayoutElement::Rule(_)))
            .count()
    }
}
