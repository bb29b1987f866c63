//! The grid document model.
//!
//! A document is a flat sequence of [`GridNode`]s laid out top to bottom. Rows
//! have a fixed height in millimetres and are divided into columns that span
//! a number of units of a twelve-unit grid. Grid units not claimed by any
//! column stay blank; they are never redistributed.

/// Number of units a row is divided into.
pub const GRID_COLUMNS: u8 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

/// Text placement inside a column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextProps {
    /// Font size in points.
    pub size: f32,
    /// Offset from the top of the row in millimetres.
    pub top: f32,
    /// Draw the text on a single line even if it overflows the column.
    /// When false the text is wrapped to the column width and the row grows to fit.
    pub extrapolate: bool,
    pub align: Align,
}

impl Default for TextProps {
    fn default() -> Self {
        Self {
            size: 10.0,
            top: 0.0,
            extrapolate: false,
            align: Align::Left,
        }
    }
}

impl TextProps {
    pub fn sized(size: f32) -> Self {
        Self {
            size,
            ..Default::default()
        }
    }

    pub fn extrapolated(mut self) -> Self {
        self.extrapolate = true;
        self
    }

    pub fn with_top(mut self, top: f32) -> Self {
        self.top = top;
        self
    }

    pub fn with_align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Col {
    Text {
        span: u8,
        text: String,
        props: TextProps,
    },
    Space {
        span: u8,
    },
}

impl Col {
    pub fn span(&self) -> u8 {
        match self {
            Col::Text { span, .. } | Col::Space { span } => *span,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// Row height in millimetres.
    pub height: f32,
    pub cols: Vec<Col>,
}

impl Row {
    pub fn new(height: f32) -> Self {
        Self {
            height,
            cols: Vec::new(),
        }
    }

    pub fn text(mut self, span: u8, text: impl Into<String>, props: TextProps) -> Self {
        self.cols.push(Col::Text {
            span,
            text: text.into(),
            props,
        });
        self
    }

    pub fn space(mut self, span: u8) -> Self {
        self.cols.push(Col::Space { span });
        self
    }

    /// Total grid units claimed by the row's columns.
    pub fn used_span(&self) -> u16 {
        self.cols.iter().map(|c| u16::from(c.span())).sum()
    }
}

/// A horizontal line drawn across the content width, centred in a spacer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rule {
    /// Height of the spacer in millimetres.
    pub spacing: f32,
    /// Stroke width in points.
    pub thickness: f32,
}

impl Rule {
    pub fn new(spacing: f32) -> Self {
        Self {
            spacing,
            thickness: 0.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum GridNode {
    Row(Row),
    Rule(Rule),
}

impl From<Row> for GridNode {
    fn from(row: Row) -> Self {
        GridNode::Row(row)
    }
}

impl From<Rule> for GridNode {
    fn from(rule: Rule) -> Self {
        GridNode::Rule(rule)
    }
}
