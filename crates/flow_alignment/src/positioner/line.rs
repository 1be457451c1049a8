//! Line membership inferred from default frames.

use log::debug;

use super::AlignedFlowLayout;
use crate::geometry::{IndexPath, Rect};
use crate::provider::LayoutProvider;

impl<P: LayoutProvider> AlignedFlowLayout<P> {
    /// Width of the area items can occupy: container width minus the left and right insets.
    pub fn content_width(&self) -> Option<f32> {
        let insets = self.provider.section_insets();
        self.provider
            .container_width()
            .map(|width| width - insets.horizontal())
    }

    /// A rectangle covering the content width at `frame`'s vertical band.
    fn line_probe(&self, frame: Rect) -> Option<Rect> {
        let width = self.content_width()?;
        Some(Rect::new(
            self.provider.section_insets().left,
            frame.y,
            width,
            frame.height,
        ))
    }

    /// Whether `other` lies in the line of `frame`.
    ///
    /// The probe band is built from `frame` alone and only spans the content area, so swapping
    /// the arguments can change the answer (e.g. when `other` reaches into a section inset).
    /// Always false while the container width is unknown.
    ///
    /// An empty `other` (zero width or height) is never on the line. A zero-width item therefore
    /// ends the left-aligned chain before it: the item after it is snapped back onto the axis and
    /// may overlap the start of the line.
    pub fn same_line(&self, frame: Rect, other: Rect) -> bool {
        self.line_probe(frame)
            .is_some_and(|probe| probe.intersects(other))
    }

    /// Default frames of every item in the line of `frame`, in provider order.
    ///
    /// `frame` itself is always part of the result; it is the only member while the container
    /// width is unknown. Only item entries are collected, so headers and decorations crossing
    /// the band never move the vertical axis.
    pub fn line_members(&self, frame: Rect) -> Vec<Rect> {
        let Some(probe) = self.line_probe(frame) else {
            return vec![frame];
        };
        let mut members: Vec<Rect> = self
            .provider
            .default_entries_in(probe)
            .iter()
            .filter(|entry| entry.is_item())
            .map(|entry| entry.frame)
            .collect();
        if !members.contains(&frame) {
            members.push(frame);
        }
        debug!("[LINE] probe={probe:?} members={}", members.len());
        members
    }

    /// True when the item at `index` starts its line.
    ///
    /// The first item of a section always starts a line; so does any item whose default frame
    /// (or whose predecessor's default frame) is unknown.
    pub fn is_first_in_line(&self, index: IndexPath) -> bool {
        self.provider
            .default_frame(index)
            .is_none_or(|frame| self.preceding_in_line(index, frame).is_none())
    }

    /// True when the item at `index` ends its line.
    ///
    /// The last item of a section always ends a line; so does any item whose default frame,
    /// successor or section item count is unknown.
    pub fn is_last_in_line(&self, index: IndexPath) -> bool {
        self.provider
            .default_frame(index)
            .is_none_or(|frame| self.following_in_line(index, frame).is_none())
    }

    /// The predecessor of `index` with its default frame, when it shares `frame`'s line.
    pub(super) fn preceding_in_line(
        &self,
        index: IndexPath,
        frame: Rect,
    ) -> Option<(IndexPath, Rect)> {
        let preceding = index.preceding()?;
        let preceding_frame = self.provider.default_frame(preceding)?;
        self.same_line(frame, preceding_frame)
            .then_some((preceding, preceding_frame))
    }

    /// The successor of `index` with its default frame, when it shares `frame`'s line.
    pub(super) fn following_in_line(
        &self,
        index: IndexPath,
        frame: Rect,
    ) -> Option<(IndexPath, Rect)> {
        let item_count = self.provider.item_count(index.section)?;
        let following = index.following()?;
        if following.item >= item_count {
            return None;
        }
        let following_frame = self.provider.default_frame(following)?;
        self.same_line(frame, following_frame)
            .then_some((following, following_frame))
    }
}
