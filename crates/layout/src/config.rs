use readymeta_types::geometry::{Rect, Size, mm_to_pt};
use readymeta_types::page::{Margins, Orientation, PageSize};

/// Page geometry used by the layout engine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LayoutConfig {
    pub page_size: PageSize,
    pub orientation: Orientation,
    /// Margins in millimetres. Defaults to 10mm on every side.
    pub margins: Margins,
}

impl LayoutConfig {
    /// Full page size in points.
    pub fn page_dimensions(&self) -> Size {
        self.page_size.size(self.orientation)
    }

    /// The printable area in points, measured from the top-left page corner.
    pub fn content_rect(&self) -> Rect {
        let page = self.page_dimensions();
        let left = mm_to_pt(self.margins.left);
        let top = mm_to_pt(self.margins.top);
        let width = page.width - left - mm_to_pt(self.margins.right);
        let height = page.height - top - mm_to_pt(self.margins.bottom);
        Rect::new(left, top, width.max(0.0), height.max(0.0))
    }
}
