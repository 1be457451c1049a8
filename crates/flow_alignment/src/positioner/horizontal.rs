//! Horizontal alignment: snapping line boundaries to an axis and chaining the rest of the line.
//!
//! In a left-aligned line the first item sits on the axis and every later item sits `spacing`
//! right of its predecessor's final frame; right-aligned lines mirror this from the last item.
//! Instead of recursing through the chain, the positioner walks from the queried item to the
//! line's anchored boundary and sweeps back once.

use log::debug;

use super::{AlignedFlowLayout, SweepScratch};
use crate::alignment::{
    AlignmentAxis, EffectiveHorizontalAlignment, horizontal_axis, resolve_effective_horizontal,
};
use crate::geometry::{IndexPath, Rect};
use crate::provider::LayoutProvider;

/// An item waiting for its final x while the sweep walks toward the line boundary.
type ChainLink = (IndexPath, Rect);

impl<P: LayoutProvider> AlignedFlowLayout<P> {
    /// The configured horizontal alignment resolved against the provider's current direction.
    pub fn effective_horizontal_alignment(&self) -> EffectiveHorizontalAlignment {
        resolve_effective_horizontal(
            self.config.horizontal_alignment,
            self.provider.layout_direction(),
        )
    }

    /// The vertical axis line boundaries snap to; `None` for justified layouts and for
    /// right alignment while the container width is unknown.
    pub fn horizontal_alignment_axis(&self) -> Option<AlignmentAxis<EffectiveHorizontalAlignment>> {
        let insets = self.provider.section_insets();
        horizontal_axis(
            self.effective_horizontal_alignment(),
            insets.left,
            self.provider.container_width(),
            insets.right,
        )
    }

    /// Move `frame` (the default frame of `index`) horizontally. Without an axis the frame is
    /// returned unchanged.
    pub(super) fn align_horizontally(
        &self,
        index: IndexPath,
        frame: Rect,
        scratch: &mut SweepScratch,
    ) -> Rect {
        let Some(axis) = self.horizontal_alignment_axis() else {
            return frame;
        };
        let spacing = self.provider.minimum_inter_item_spacing();
        let x = match axis.alignment {
            EffectiveHorizontalAlignment::Left => {
                self.sweep_from_line_start(index, frame, axis.position, spacing, scratch)
            }
            EffectiveHorizontalAlignment::Right => {
                self.sweep_from_line_end(index, frame, axis.position, spacing, scratch)
            }
            EffectiveHorizontalAlignment::Justified => return frame,
        };
        frame.with_x(x)
    }

    /// Final x of `index` in a left-aligned line.
    fn sweep_from_line_start(
        &self,
        index: IndexPath,
        frame: Rect,
        axis_x: f32,
        spacing: f32,
        scratch: &mut SweepScratch,
    ) -> f32 {
        let mut pending: Vec<ChainLink> = Vec::new();
        let (mut anchor, mut anchor_frame) = (index, frame);
        let anchor_x = loop {
            if let Some(resolved) = scratch.get(anchor) {
                break resolved;
            }
            match self.preceding_in_line(anchor, anchor_frame) {
                Some(preceding) => {
                    pending.push((anchor, anchor_frame));
                    (anchor, anchor_frame) = preceding;
                }
                None => break axis_x,
            }
        };
        scratch.insert(anchor, anchor_x);
        debug!(
            "[ALIGN-H] left: {index:?} anchored at {anchor:?} x={anchor_x:.3} links={}",
            pending.len()
        );

        let mut x = anchor_x;
        let mut previous_max_x = anchor_x + anchor_frame.width;
        for (link, link_frame) in pending.into_iter().rev() {
            x = previous_max_x + spacing;
            scratch.insert(link, x);
            previous_max_x = x + link_frame.width;
        }
        x
    }

    /// Final x of `index` in a right-aligned line.
    fn sweep_from_line_end(
        &self,
        index: IndexPath,
        frame: Rect,
        axis_x: f32,
        spacing: f32,
        scratch: &mut SweepScratch,
    ) -> f32 {
        let mut pending: Vec<ChainLink> = Vec::new();
        let (mut anchor, mut anchor_frame) = (index, frame);
        let anchor_x = loop {
            if let Some(resolved) = scratch.get(anchor) {
                break resolved;
            }
            match self.following_in_line(anchor, anchor_frame) {
                Some(following) => {
                    pending.push((anchor, anchor_frame));
                    (anchor, anchor_frame) = following;
                }
                None => break axis_x - anchor_frame.width,
            }
        };
        scratch.insert(anchor, anchor_x);
        debug!(
            "[ALIGN-H] right: {index:?} anchored at {anchor:?} x={anchor_x:.3} links={}",
            pending.len()
        );

        let mut x = anchor_x;
        for (link, link_frame) in pending.into_iter().rev() {
            x = x - spacing - link_frame.width;
            scratch.insert(link, x);
        }
        x
    }
}
