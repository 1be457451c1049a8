//! Vertical alignment of an item within its line.

use log::debug;

use super::AlignedFlowLayout;
use crate::alignment::{AlignmentAxis, VerticalAlignment, vertical_axis};
use crate::geometry::Rect;
use crate::provider::LayoutProvider;

impl<P: LayoutProvider> AlignedFlowLayout<P> {
    /// The horizontal axis the line of `frame` is vertically aligned to.
    pub fn vertical_alignment_axis(&self, frame: Rect) -> Option<AlignmentAxis<VerticalAlignment>> {
        vertical_axis(self.config.vertical_alignment, &self.line_members(frame))
    }

    /// Move `frame` vertically onto its line's axis.
    pub(super) fn align_vertically(&self, frame: Rect) -> Rect {
        let Some(axis) = self.vertical_alignment_axis(frame) else {
            return frame;
        };
        debug!(
            "[ALIGN-V] {:?} axis at y={:.3} for frame y={:.3}",
            axis.alignment, axis.position, frame.y
        );
        match axis.alignment {
            VerticalAlignment::Top => frame.with_y(axis.position),
            VerticalAlignment::Bottom => frame.with_max_y(axis.position),
            VerticalAlignment::Center => frame.with_mid_y(axis.position),
        }
    }
}
