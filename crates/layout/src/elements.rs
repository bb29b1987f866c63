/// A run of text drawn on a single line with the base font.
#[derive(Debug, Clone, PartialEq)]
pub struct TextElement {
    pub content: String,
    pub font_size: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RuleElement {
    pub thickness: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LayoutElement {
    Text(TextElement),
    Rule(RuleElement),
}

/// An element placed on a page. Coordinates are in points with the origin at the
/// top-left corner of the page; `y` grows downwards.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedElement {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub element: LayoutElement,
}

impl PositionedElement {
    pub fn text(&self) -> Option<&str> {
        match &self.element {
            LayoutElement::Text(t) => Some(&t.content),
            LayoutElement::Rule(_) => None,
        }
    }
}
