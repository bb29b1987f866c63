/// Outcome of checking whether a block fits in what is left of a page.
pub struct BreakAnalysis {
    pub should_break: bool,
    pub remaining_height: f32,
}

// Absorbs float noise from repeated mm -> pt conversions.
const EPSILON: f32 = 0.01;

/// Checks whether a block of `height` fits below `cursor_y` in a content area of
/// `content_height`. Both measured from the top of the content area.
pub fn check_block_fit(cursor_y: f32, height: f32, content_height: f32) -> BreakAnalysis {
    let available = (content_height - cursor_y).max(0.0);
    BreakAnalysis {
        should_break: height > available + EPSILON,
        remaining_height: available,
    }
}

/// True when a block can never fit, even on an empty page.
pub fn exceeds_page(height: f32, content_height: f32) -> bool {
    height > content_height + EPSILON
}
