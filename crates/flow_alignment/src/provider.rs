//! The seam between the positioner and the row-wrapping engine that produces default frames.
//!
//! A provider packs items into rows on its own (justified horizontally, centered vertically) and
//! answers geometry queries about that default layout. The positioner only reads from it.

use serde::{Deserialize, Serialize};

use crate::geometry::{EdgeInsets, IndexPath, Rect};

/// Inline direction of the host's user interface.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutDirection {
    #[default]
    LeftToRight,
    RightToLeft,
    /// The host reported a direction this crate does not know about.
    Unknown,
}

/// What kind of element a layout entry represents.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementRole {
    /// A plain content item. The only role the positioner moves.
    #[default]
    Item,
    /// Headers, footers and other per-section views.
    Supplementary,
    /// Purely decorative views.
    Decoration,
}

/// One element of a layout snapshot.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LayoutEntry {
    pub index: IndexPath,
    pub frame: Rect,
    pub role: ElementRole,
}

impl LayoutEntry {
    #[inline]
    pub const fn item(index: IndexPath, frame: Rect) -> Self {
        Self {
            index,
            frame,
            role: ElementRole::Item,
        }
    }

    #[inline]
    pub fn is_item(&self) -> bool {
        self.role == ElementRole::Item
    }
}

/// Read-only access to a row-wrapping engine's default (pre-alignment) layout.
///
/// Every method returns owned values, so callers can never alter the engine's own records.
pub trait LayoutProvider {
    /// Default frame of the item at `index`, or `None` when the item does not exist or the
    /// engine cannot lay out (e.g. the container width is unknown).
    fn default_frame(&self, index: IndexPath) -> Option<Rect>;

    /// Every default entry whose frame intersects `rect`, in the engine's order.
    fn default_entries_in(&self, rect: Rect) -> Vec<LayoutEntry>;

    /// Number of items in `section`, or `None` when the section does not exist.
    fn item_count(&self, section: usize) -> Option<usize>;

    /// Horizontal spacing the engine keeps between neighbors of the same line.
    fn minimum_inter_item_spacing(&self) -> f32;

    fn section_insets(&self) -> EdgeInsets;

    /// Width of the container, or `None` while it is unknown.
    fn container_width(&self) -> Option<f32>;

    fn layout_direction(&self) -> LayoutDirection;
}

impl<P: LayoutProvider + ?Sized> LayoutProvider for &P {
    #[inline]
    fn default_frame(&self, index: IndexPath) -> Option<Rect> {
        (**self).default_frame(index)
    }

    #[inline]
    fn default_entries_in(&self, rect: Rect) -> Vec<LayoutEntry> {
        (**self).default_entries_in(rect)
    }

    #[inline]
    fn item_count(&self, section: usize) -> Option<usize> {
        (**self).item_count(section)
    }

    #[inline]
    fn minimum_inter_item_spacing(&self) -> f32 {
        (**self).minimum_inter_item_spacing()
    }

    #[inline]
    fn section_insets(&self) -> EdgeInsets {
        (**self).section_insets()
    }

    #[inline]
    fn container_width(&self) -> Option<f32> {
        (**self).container_width()
    }

    #[inline]
    fn layout_direction(&self) -> LayoutDirection {
        (**self).layout_direction()
    }
}
