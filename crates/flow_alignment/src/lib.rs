//! Line-aware alignment for row-wrapped item layouts.
//!
//! A row-wrapping engine (any [`LayoutProvider`]) packs items into lines the way text wraps into
//! lines, justifying each line and centering items vertically. [`AlignedFlowLayout`] re-derives
//! the lines from that default geometry and moves the items so that lines read left-, right- or
//! justified-aligned (with `leading`/`trailing` resolved against the layout direction), and so
//! that items sit at the top, center or bottom of their line.

mod alignment;
mod geometry;
mod positioner;
mod provider;

pub use alignment::{
    AlignmentAxis, EffectiveHorizontalAlignment, HorizontalAlignment, VerticalAlignment,
    horizontal_axis, resolve_effective_horizontal, vertical_axis,
};
pub use geometry::{EdgeInsets, IndexPath, Rect, Size};
pub use positioner::{AlignedFlowLayout, AlignmentConfig};
pub use provider::{ElementRole, LayoutDirection, LayoutEntry, LayoutProvider};
