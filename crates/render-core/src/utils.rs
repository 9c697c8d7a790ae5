use billforge_layout::PositionedElement;

/// Convert layout Y coordinate to PDF Y coordinate (flip origin)
pub fn flip_y(y: f32, page_height: f32) -> f32 {
    page_height - y
}

/// The PDF-space y of an element's bottom edge.
pub fn bottom_y(el: &PositionedElement, page_height: f32) -> f32 {
    flip_y(el.y + el.height, page_height)
}

/// Baseline of a single text line whose box starts at `top`.
pub fn text_baseline(top: f32, font_size: f32, page_height: f32) -> f32 {
    flip_y(top + font_size * 0.8, page_height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flips_against_page_height() {
        assert_eq!(flip_y(0.0, 792.0), 792.0);
        assert_eq!(flip_y(792.0, 792.0), 0.0);
        assert_eq!(text_baseline(100.0, 10.0, 792.0), 684.0);
    }
}
