use crate::algorithms::pagination::{check_block_fit, exceeds_page};
use crate::fonts::text_width;
use crate::grid::{Align, Col, GRID_COLUMNS, GridNode, Row, Rule, TextProps};
use crate::text::{break_lines, single_line};
use crate::{
    LaidOutDocument, LayoutConfig, LayoutElement, LayoutError, PositionedElement, RuleElement,
    TextElement,
};
use readymeta_types::geometry::{Rect, mm_to_pt};

/// Line height as a multiple of the font size.
pub const LINE_HEIGHT_FACTOR: f32 = 1.2;

/// A node measured and positioned relative to its own top edge.
struct Block {
    height: f32,
    elements: Vec<PositionedElement>,
}

/// Places grid nodes onto fixed-size pages, starting a new page whenever the
/// next node does not fit in the remaining content height.
#[derive(Debug, Clone, Default)]
pub struct LayoutEngine {
    config: LayoutConfig,
}

impl LayoutEngine {
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn layout(&self, nodes: &[GridNode]) -> Result<LaidOutDocument, LayoutError> {
        let content = self.config.content_rect();
        let mut pages: Vec<Vec<PositionedElement>> = vec![Vec::new()];
        let mut cursor_y = 0.0;
        let mut row_count = 0;

        for node in nodes {
            let block = match node {
                GridNode::Row(row) => {
                    row_count += 1;
                    self.layout_row(row, content)?
                }
                GridNode::Rule(rule) => self.layout_rule(rule, content),
            };

            if exceeds_page(block.height, content.height) {
                return Err(LayoutError::ElementTooLarge(block.height, content.height));
            }

            let fit = check_block_fit(cursor_y, block.height, content.height);
            if fit.should_break && cursor_y > 0.0 {
                log::debug!(
                    "Page {} full ({:.2}pt left, {:.2}pt needed), starting a new page",
                    pages.len(),
                    fit.remaining_height,
                    block.height
                );
                pages.push(Vec::new());
                cursor_y = 0.0;
            }

            let top = content.y + cursor_y;
            if let Some(page) = pages.last_mut() {
                page.extend(block.elements.into_iter().map(|mut el| {
                    el.y += top;
                    el
                }));
            }
            cursor_y += block.height;
        }

        log::debug!(
            "Laid out {} rows on {} page(s)",
            row_count,
            pages.len()
        );
        Ok(LaidOutDocument {
            pages,
            page_size: self.config.page_dimensions(),
            row_count,
        })
    }

    fn layout_row(&self, row: &Row, content: Rect) -> Result<Block, LayoutError> {
        if row.cols.iter().any(|c| c.span() == 0) {
            return Err(LayoutError::EmptySpan);
        }
        let used = row.used_span();
        if used > u16::from(GRID_COLUMNS) {
            return Err(LayoutError::GridOverflow(used));
        }

        let unit_width = content.width / f32::from(GRID_COLUMNS);
        let mut height = mm_to_pt(row.height);
        let mut elements = Vec::new();
        let mut col_x = content.x;

        for col in &row.cols {
            let col_width = unit_width * f32::from(col.span());
            if let Col::Text { text, props, .. } = col {
                let cell = Rect::new(col_x, 0.0, col_width, height);
                let (text_height, runs) = layout_text(text, props, cell);
                height = height.max(text_height);
                elements.extend(runs);
            }
            col_x += col_width;
        }

        Ok(Block { height, elements })
    }

    fn layout_rule(&self, rule: &Rule, content: Rect) -> Block {
        let height = mm_to_pt(rule.spacing);
        let element = PositionedElement {
            x: content.x,
            y: height / 2.0,
            width: content.width,
            height: rule.thickness,
            element: LayoutElement::Rule(RuleElement {
                thickness: rule.thickness,
            }),
        };
        Block {
            height,
            elements: vec![element],
        }
    }
}

/// Lays out the text of one cell. Returns the height the text needs (zero when
/// extrapolated, since overflowing text never grows its row) and its runs.
fn layout_text(text: &str, props: &TextProps, cell: Rect) -> (f32, Vec<PositionedElement>) {
    let line_height = props.size * LINE_HEIGHT_FACTOR;
    let top = cell.y + mm_to_pt(props.top);

    let lines = if props.extrapolate {
        vec![single_line(text)]
    } else {
        break_lines(text, cell.width, props.size)
    };

    let runs = lines
        .into_iter()
        .enumerate()
        .map(|(i, line)| {
            let width = text_width(&line, props.size);
            let slack = (cell.width - width).max(0.0);
            let x = match props.align {
                Align::Left => cell.x,
                Align::Center => cell.x + slack / 2.0,
                Align::Right => cell.x + slack,
            };
            PositionedElement {
                x,
                y: top + i as f32 * line_height,
                width,
                height: line_height,
                element: LayoutElement::Text(TextElement {
                    content: line,
                    font_size: props.size,
                }),
            }
        })
        .collect::<Vec<_>>();

    let needed = if props.extrapolate {
        0.0
    } else {
        mm_to_pt(props.top) + runs.len() as f32 * line_height
    };
    (needed, runs)
}
