//! Geometry value types shared by the resolver, the positioner and providers.
//!
//! All coordinates are device-independent points with the origin at the top-left corner of the
//! container; `y` grows downward.

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// X coordinate of the origin (left edge).
    pub x: f32,
    /// Y coordinate of the origin (top edge).
    pub y: f32,
    /// Width; never negative for frames produced by a provider.
    pub width: f32,
    /// Height; never negative for frames produced by a provider.
    pub height: f32,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub const fn min_x(self) -> f32 {
        self.x
    }

    #[inline]
    pub fn max_x(self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub const fn min_y(self) -> f32 {
        self.y
    }

    #[inline]
    pub fn max_y(self) -> f32 {
        self.y + self.height
    }

    /// Vertical center.
    #[inline]
    pub fn mid_y(self) -> f32 {
        self.y + self.height * 0.5
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Returns true when both rectangles overlap with a non-zero area.
    ///
    /// Rectangles that only share an edge do not intersect, so two lines stacked without line
    /// spacing are never merged into one.
    pub fn intersects(self, other: Self) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.min_x() < other.max_x()
            && other.min_x() < self.max_x()
            && self.min_y() < other.max_y()
            && other.min_y() < self.max_y()
    }

    /// Same size, left edge moved to `x`.
    #[inline]
    #[must_use]
    pub const fn with_x(self, x: f32) -> Self {
        Self { x, ..self }
    }

    /// Same size, top edge moved to `y`.
    #[inline]
    #[must_use]
    pub const fn with_y(self, y: f32) -> Self {
        Self { y, ..self }
    }

    /// Same size, right edge moved to `max_x`.
    #[inline]
    #[must_use]
    pub fn with_max_x(self, max_x: f32) -> Self {
        self.with_x(max_x - self.width)
    }

    /// Same size, bottom edge moved to `max_y`.
    #[inline]
    #[must_use]
    pub fn with_max_y(self, max_y: f32) -> Self {
        self.with_y(max_y - self.height)
    }

    /// Same size, vertical center moved to `mid_y`.
    #[inline]
    #[must_use]
    pub fn with_mid_y(self, mid_y: f32) -> Self {
        self.with_y(mid_y - self.height * 0.5)
    }
}

/// Width and height of an item.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Insets of a section's content area from the container edges.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeInsets {
    pub top: f32,
    pub left: f32,
    pub bottom: f32,
    pub right: f32,
}

impl EdgeInsets {
    #[inline]
    pub const fn new(top: f32, left: f32, bottom: f32, right: f32) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// Sum of the left and right insets.
    #[inline]
    pub fn horizontal(self) -> f32 {
        self.left + self.right
    }
}

/// Position of an element: the section it belongs to and its index inside that section.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct IndexPath {
    pub section: usize,
    pub item: usize,
}

impl IndexPath {
    #[inline]
    pub const fn new(section: usize, item: usize) -> Self {
        Self { section, item }
    }

    /// The item right before this one in the same section, absent for the first item.
    #[inline]
    pub fn preceding(self) -> Option<Self> {
        self.item
            .checked_sub(1)
            .map(|item| Self::new(self.section, item))
    }

    /// The item right after this one in the same section. Whether it exists is up to the provider.
    #[inline]
    pub fn following(self) -> Option<Self> {
        self.item
            .checked_add(1)
            .map(|item| Self::new(self.section, item))
    }
}
