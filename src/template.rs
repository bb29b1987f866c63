use crate::report::ReportLine;
use readymeta_layout::{GridNode, Row, Rule, TextProps};

/// Text of the banner printed at the top of every report.
pub fn banner_text() -> String {
    format!(
        "Written by readYmeta, the Yoda Metadata converter - v{}",
        env!("CARGO_PKG_VERSION")
    )
}

/// Row geometry of the report. Heights are in millimetres, font sizes in points,
/// spans in grid units out of 12.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportTemplate {
    pub banner_height: f32,
    pub banner_span: u8,
    pub banner_font_size: f32,
    /// Blank columns following the banner cell.
    pub banner_padding_span: u8,
    pub rule_spacing: f32,
    pub line_height: f32,
    pub line_span: u8,
    pub line_font_size: f32,
}

impl Default for ReportTemplate {
    fn default() -> Self {
        Self {
            banner_height: 10.0,
            banner_span: 4,
            banner_font_size: 16.0,
            banner_padding_span: 4,
            rule_spacing: 10.0,
            line_height: 6.0,
            line_span: 4,
            line_font_size: 10.0,
        }
    }
}

impl ReportTemplate {
    /// Builds the grid: banner row, rule, then one row per line.
    pub fn build(&self, lines: &[ReportLine]) -> Vec<GridNode> {
        let mut nodes = Vec::with_capacity(lines.len() + 2);

        let mut banner = Row::new(self.banner_height).text(
            self.banner_span,
            banner_text(),
            TextProps::sized(self.banner_font_size).extrapolated(),
        );
        if self.banner_padding_span > 0 {
            banner = banner.space(self.banner_padding_span);
        }
        nodes.push(banner.into());
        nodes.push(Rule::new(self.rule_spacing).into());

        nodes.extend(lines.iter().map(|line| {
            Row::new(self.line_height)
                .text(
                    self.line_span,
                    line.as_str(),
                    TextProps::sized(self.line_font_size).extrapolated(),
                )
                .into()
        }));
        nodes
    }
}
