//! Page content encoding: turns positioned layout elements into PDF content
//! stream operations.

use lopdf::content::{Content, Operation};
use lopdf::{Object, StringFormat};
use readymeta_layout::{LayoutElement, PositionedElement, RuleElement, TextElement};
use readymeta_render_core::utils::{flip_y, to_win_ansi};

/// Resource name under which the Helvetica face is registered on every page.
pub const FONT_RESOURCE_NAME: &str = "F1";

// Distance from the top of a text line to its baseline, as a fraction of the font size.
const BASELINE_RATIO: f32 = 0.8;

pub fn render_elements_to_content(elements: &[PositionedElement], page_height: f32) -> Content {
    let mut page_ctx = PageContext::new(page_height);
    for el in elements {
        page_ctx.draw_element(el);
    }
    page_ctx.finish()
}

struct PageContext {
    page_height: f32,
    content: Content,
    font_size: Option<f32>,
}

impl PageContext {
    fn new(page_height: f32) -> Self {
        Self {
            page_height,
            content: Content { operations: vec![] },
            font_size: None,
        }
    }

    fn finish(self) -> Content {
        self.content
    }

    fn push(&mut self, operator: &str, operands: Vec<Object>) {
        self.content.operations.push(Operation::new(operator, operands));
    }

    fn draw_element(&mut self, el: &PositionedElement) {
        match &el.element {
            LayoutElement::Text(text) => self.draw_text(text, el),
            LayoutElement::Rule(rule) => self.draw_rule(rule, el),
        }
    }

    fn draw_text(&mut self, text: &TextElement, el: &PositionedElement) {
        if text.content.trim().is_empty() {
            return;
        }
        self.push("BT", vec![]);
        // Tf is part of the graphics state, which BT/ET do not reset; only emit it on change.
        if self.font_size != Some(text.font_size) {
            self.push(
                "Tf",
                vec![
                    Object::Name(FONT_RESOURCE_NAME.as_bytes().to_vec()),
                    text.font_size.into(),
                ],
            );
            self.font_size = Some(text.font_size);
        }
        let baseline_y = el.y + text.font_size * BASELINE_RATIO;
        let pdf_y = flip_y(baseline_y, self.page_height);
        self.push("Td", vec![el.x.into(), pdf_y.into()]);
        self.push(
            "Tj",
            vec![Object::String(to_win_ansi(&text.content), StringFormat::Literal)],
        );
        self.push("ET", vec![]);
    }

    fn draw_rule(&mut self, rule: &RuleElement, el: &PositionedElement) {
        let line_y = flip_y(el.y, self.page_height);
        self.push("w", vec![rule.thickness.into()]);
        self.push("m", vec![el.x.into(), line_y.into()]);
        self.push("l", vec![(el.x + el.width).into(), line_y.into()]);
        self.push("S", vec![]);
    }
}
