use crate::{GridNode, LaidOutDocument, LayoutConfig, LayoutEngine, LayoutError, Row, TextProps};
use readymeta_types::page::Margins;

/// A layout engine with an A4 portrait page and 10mm margins.
pub fn create_test_engine() -> LayoutEngine {
    LayoutEngine::new(LayoutConfig::default())
}

pub fn text_row(height: f32, span: u8, text: &str, props: TextProps) -> GridNode {
    Row::new(height).text(span, text, props).into()
}

/// `count` rows of `height` mm, each holding one extrapolated line.
pub fn numbered_rows(count: usize, height: f32) -> Vec<GridNode> {
    (1..=count)
        .map(|i| text_row(height, 4, &format!("Line {}", i), TextProps::sized(10.0).extrapolated()))
        .collect()
}

pub fn paginate_test_nodes(nodes: &[GridNode]) -> Result<LaidOutDocument, LayoutError> {
    create_test_engine().layout(nodes)
}

pub fn zero_margin_config() -> LayoutConfig {
    LayoutConfig {
        margins: Margins::all(0.0),
        ..Default::default()
    }
}
