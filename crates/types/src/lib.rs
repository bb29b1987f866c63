pub mod geometry;
pub mod page;

pub use geometry::{Rect, Size, mm_to_pt};
pub use page::{Margins, Orientation, PageSize};
