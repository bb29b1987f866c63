mod wrapper;

pub use wrapper::{break_lines, single_line};
