/// Tolerance for floating point drift when comparing heights.
pub const EPSILON: f32 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BreakAnalysis {
    pub should_break: bool,
    pub remaining_height: f32,
}

/// Centralized check of whether a block fits in the remaining space.
///
/// * `cursor_y`: the current offset from the top of the content area.
/// * `child_height`: the height the block needs.
/// * `capacity`: the total height of the content area.
pub fn check_child_fit(cursor_y: f32, child_height: f32, capacity: f32) -> BreakAnalysis {
    let available = (capacity - cursor_y).max(0.0);
    BreakAnalysis {
        should_break: child_height > available + EPSILON,
        remaining_height: available,
    }
}

/// Pages a table of `row_count` fixed-height rows needs when it starts at the
/// top of a page and re-emits its header on every page.
///
/// An empty table still occupies one page (its header row). Returns `None`
/// when a single row cannot fit under the header at all.
pub fn pages_needed(header_height: f32, row_height: f32, row_count: usize, capacity: f32) -> Option<usize> {
    if row_count == 0 {
        return Some(1);
    }
    let rows_per_page = rows_per_page(header_height, row_height, capacity);
    if rows_per_page == 0 {
        return None;
    }
    Some(row_count.div_ceil(rows_per_page))
}

/// Rows that fit under one header on an empty page.
pub fn rows_per_page(header_height: f32, row_height: f32, capacity: f32) -> usize {
    if row_height <= 0.0 {
        return usize::MAX;
    }
    let body = capacity - header_height + EPSILON;
    if body < row_height {
        return 0;
    }
    (body / row_height).floor() as usize
}
