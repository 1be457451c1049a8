//! Placement of the items of one line: justified across the content width, centered vertically.

use flow_alignment::{Rect, Size};

/// Compute the start offset and the spacing between items of one line.
///
/// Lines with several items are justified (the remaining space goes between items); a single
/// item is centered. Never negative.
pub fn justify_params(content_width: f32, content_total: f32, item_count: usize) -> (f32, f32) {
    let remaining = (content_width - content_total).max(0.0);
    match item_count {
        0 => (0.0, 0.0),
        1 => (remaining * 0.5, 0.0),
        count => (0.0, remaining / (count as f32 - 1.0)),
    }
}

/// Geometry shared by every line of a section.
#[derive(Copy, Clone, Debug)]
pub struct LineContext {
    /// Left edge of the content area.
    pub content_x: f32,
    pub content_width: f32,
    /// Minimum spacing between neighbors.
    pub spacing: f32,
    /// Top edge of the line.
    pub line_y: f32,
}

/// Frames of one line's items plus the line height.
pub fn place_line(ctx: LineContext, items: &[Size]) -> (Vec<Rect>, f32) {
    let line_height = items
        .iter()
        .map(|size| size.height)
        .fold(0.0f32, f32::max);
    let gaps_total = if items.len() > 1 {
        (items.len() as f32 - 1.0) * ctx.spacing.max(0.0)
    } else {
        0.0
    };
    let widths_total: f32 = items.iter().map(|size| size.width).sum();
    let (start_offset, between_spacing) =
        justify_params(ctx.content_width, widths_total + gaps_total, items.len());

    let mut cursor = ctx.content_x + start_offset;
    let mut frames = Vec::with_capacity(items.len());
    let mut iter = items.iter().peekable();
    while let Some(size) = iter.next() {
        let y = ctx.line_y + (line_height - size.height) * 0.5;
        frames.push(Rect::new(cursor, y, size.width, size.height));
        cursor += size.width;
        if iter.peek().is_some() {
            cursor += ctx.spacing.max(0.0) + between_spacing;
        }
    }
    (frames, line_height)
}
