use crate::fonts::text_width;

/// Collapses `text` onto one line: trailing line breaks are dropped and inner
/// ones become spaces.
pub fn single_line(text: &str) -> String {
    text.trim_end_matches(['\r', '\n'])
        .replace("\r\n", " ")
        .replace('\n', " ")
}

/// Greedy word wrap of `text` to `max_width` points at `font_size`.
///
/// Explicit newlines always start a new line. A word wider than `max_width` is
/// kept whole on its own line. Always returns at least one line.
pub fn break_lines(text: &str, max_width: f32, font_size: f32) -> Vec<String> {
    let space = text_width(" ", font_size);
    let mut lines = Vec::new();

    for paragraph in text.trim_end_matches(['\r', '\n']).lines() {
        let mut current = String::new();
        let mut current_width = 0.0;

        for word in paragraph.split_whitespace() {
            let word_width = text_width(word, font_size);
            if current.is_empty() {
                current.push_str(word);
                current_width = word_width;
            } else if current_width + space + word_width <= max_width {
                current.push(' ');
                current.push_str(word);
                current_width += space + word_width;
            } else {
                lines.push(std::mem::take(&mut current));
                current.push_str(word);
                current_width = word_width;
            }
        }
        lines.push(current);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}
