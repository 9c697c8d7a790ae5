//! Single-line truncation and greedy word wrapping over the standard-14
//! width tables.

use crate::elements::TextStyle;

pub const ELLIPSIS: char = '…';

/// Cut `text` so it fits in `max_width`, ending with an ellipsis when
/// anything was removed. Line breaks are flattened to spaces first.
pub fn truncate_to_width(text: &str, style: &TextStyle, max_width: f32) -> String {
    let flat: String = text
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    if style.measure(&flat) <= max_width {
        return flat;
    }

    let ellipsis_width = style.measure(&ELLIPSIS.to_string());
    let budget = max_width - ellipsis_width;
    if budget <= 0.0 {
        return String::new();
    }

    let mut out = String::new();
    let mut width = 0.0;
    for c in flat.chars() {
        let char_width = style.measure(c.encode_utf8(&mut [0; 4]));
        if width + char_width > budget {
            break;
        }
        width += char_width;
        out.push(c);
    }
    let mut out = out.trim_end().to_string();
    out.push(ELLIPSIS);
    out
}

/// Greedy word wrap. Explicit newlines start a new line and blank input
/// lines are kept as empty lines; a single word wider than the line is
/// truncated rather than split.
pub fn wrap_text(text: &str, style: &TextStyle, max_width: f32) -> Vec<String> {
    let space = style.measure(" ");
    let mut lines = Vec::new();

    for paragraph in text.trim_end().lines() {
        let mut current = String::new();
        let mut current_width = 0.0;
        for word in paragraph.split_whitespace() {
            let word_width = style.measure(word);
            if current.is_empty() {
                if word_width > max_width {
                    lines.push(truncate_to_width(word, style, max_width));
                    continue;
                }
                current.push_str(word);
                current_width = word_width;
            } else if current_width + space + word_width <= max_width {
                current.push(' ');
                current.push_str(word);
                current_width += space + word_width;
            } else {
                lines.push(std::mem::take(&mut current));
                if word_width > max_width {
                    lines.push(truncate_to_width(word, style, max_width));
                    current_width = 0.0;
                    continue;
                }
                current.push_str(word);
                current_width = word_width;
            }
        }
        lines.push(current);
    }
    lines
}
