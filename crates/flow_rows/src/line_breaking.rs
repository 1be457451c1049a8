//! Greedy line breaking of item widths against the content width.

use flow_alignment::Size;

/// Line start/end indices for items included in the line: `[start, end)`.
pub type LineRange = (usize, usize);

/// Break items into lines by accumulating widths and `spacing` until exceeding `content_width`.
/// An item that is wider than the content width on its own still gets a line of its own.
pub fn break_into_lines(content_width: f32, spacing: f32, items: &[Size]) -> Vec<LineRange> {
    let mut line_ranges: Vec<LineRange> = Vec::new();
    let mut start = 0usize;
    let mut cursor = 0.0f32;
    for (idx, size) in items.iter().copied().enumerate() {
        let is_first_in_line = idx == start;
        let gap = if is_first_in_line {
            0.0
        } else {
            spacing.max(0.0)
        };
        let next = cursor + gap + size.width;
        if next <= content_width || is_first_in_line {
            cursor = next;
        } else {
            line_ranges.push((start, idx));
            start = idx;
            cursor = size.width;
        }
    }
    if start < items.len() {
        line_ranges.push((start, items.len()));
    }
    line_ranges
}
