use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum LayoutError {
    #[error("Node has a height of {0:.2} which exceeds the total page content height of {1:.2}.")]
    ElementTooLarge(f32, f32),
    #[error("Row columns span {0} grid units, but the grid only has {max}.", max = grid::GRID_COLUMNS)]
    GridOverflow(u16),
    #[error("Column spans must be at least one grid unit.")]
    EmptySpan,
}

pub mod algorithms;
pub mod config;
pub mod engine;
pub mod fonts;
pub mod grid;
pub mod output;
pub mod text;

mod elements;

pub use self::config::LayoutConfig;
pub use self::elements::{LayoutElement, PositionedElement, RuleElement, TextElement};
pub use self::engine::LayoutEngine;
pub use self::grid::{Align, Col, GRID_COLUMNS, GridNode, Row, Rule, TextProps};
pub use self::output::LaidOutDocument;

// Re-export geometry types so downstream crates agree on them
pub use readymeta_types::geometry::{Rect, Size};

#[cfg(test)]
mod test_utils;
