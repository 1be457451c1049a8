//! Line-aware positioner: moves the items of a row-wrapped layout onto per-line alignment axes.
//!
//! Lines are never materialized. Whether two items share a line is inferred from their default
//! frames: a probe rectangle spanning the content width at one item's vertical band is tested
//! against the other item's frame. This also catches single-item lines, which the row-wrapping
//! engine centers instead of placing them at either edge.
//!
//! ```text
//! +---------+--------------------------------------------------------+---------+
//! |         |     +------------+                                     |         |
//! | section |- - -|- - - - - - |- - - +------------------+ - - - - -| section |
//! |  inset  |     |intersection|      |   current item   | line    |  inset  |
//! |         |- - -|- - - - - - |- - - +------------------+ - - - - -|         |
//! |         |     +------------+                                     |         |
//! |         |     previous item                                      |         |
//! +---------+--------------------------------------------------------+---------+
//! ```

mod horizontal;
mod line;
mod vertical;

#[cfg(test)]
mod tests;

use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug_span;

use crate::alignment::{HorizontalAlignment, VerticalAlignment};
use crate::geometry::{IndexPath, Rect};
use crate::provider::{LayoutEntry, LayoutProvider};

/// The two alignment settings of a layout. Changes apply to the next query.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct AlignmentConfig {
    pub horizontal_alignment: HorizontalAlignment,
    pub vertical_alignment: VerticalAlignment,
}

/// Final x positions resolved while answering a single query.
///
/// Lets every item of a line be swept once per region query. Dropped when the query returns.
#[derive(Default)]
struct SweepScratch {
    resolved_x: HashMap<IndexPath, f32>,
}

impl SweepScratch {
    #[inline]
    fn get(&self, index: IndexPath) -> Option<f32> {
        self.resolved_x.get(&index).copied()
    }

    #[inline]
    fn insert(&mut self, index: IndexPath, x: f32) {
        self.resolved_x.insert(index, x);
    }
}

/// Aligns the items laid out by a [`LayoutProvider`] like words in left-, right- or justified
/// text, and top-, center- or bottom-aligns them within their line.
///
/// Every query is recomputed from the provider's current state.
pub struct AlignedFlowLayout<P> {
    provider: P,
    config: AlignmentConfig,
}

impl<P: LayoutProvider> AlignedFlowLayout<P> {
    /// A layout with justified, vertically centered items, i.e. the provider's own layout.
    pub fn new(provider: P) -> Self {
        Self::from_config(provider, AlignmentConfig::default())
    }

    pub const fn from_config(provider: P, config: AlignmentConfig) -> Self {
        Self { provider, config }
    }

    pub const fn with_alignment(
        provider: P,
        horizontal_alignment: HorizontalAlignment,
        vertical_alignment: VerticalAlignment,
    ) -> Self {
        Self::from_config(
            provider,
            AlignmentConfig {
                horizontal_alignment,
                vertical_alignment,
            },
        )
    }

    pub const fn provider(&self) -> &P {
        &self.provider
    }

    pub const fn provider_mut(&mut self) -> &mut P {
        &mut self.provider
    }

    pub const fn config(&self) -> AlignmentConfig {
        self.config
    }

    pub const fn set_config(&mut self, config: AlignmentConfig) {
        self.config = config;
    }

    pub const fn horizontal_alignment(&self) -> HorizontalAlignment {
        self.config.horizontal_alignment
    }

    pub const fn set_horizontal_alignment(&mut self, alignment: HorizontalAlignment) {
        self.config.horizontal_alignment = alignment;
    }

    pub const fn vertical_alignment(&self) -> VerticalAlignment {
        self.config.vertical_alignment
    }

    pub const fn set_vertical_alignment(&mut self, alignment: VerticalAlignment) {
        self.config.vertical_alignment = alignment;
    }

    /// Final frame of the item at `index`, or `None` when the provider has no default frame for it.
    ///
    /// The default frame is copied; width and height are never changed.
    pub fn final_frame(&self, index: IndexPath) -> Option<Rect> {
        let mut scratch = SweepScratch::default();
        self.layout_item(index, &mut scratch)
    }

    /// Final entries of every element whose default frame intersects `rect`, in provider order.
    ///
    /// Only [`ElementRole::Item`](crate::ElementRole::Item) entries are moved; supplementary and
    /// decorative entries are passed through.
    pub fn final_entries_in(&self, rect: Rect) -> Vec<LayoutEntry> {
        let _span = debug_span!(
            "final_entries_in",
            x = rect.x,
            y = rect.y,
            width = rect.width,
            height = rect.height
        )
        .entered();
        let mut scratch = SweepScratch::default();
        let entries: Vec<LayoutEntry> = self
            .provider
            .default_entries_in(rect)
            .into_iter()
            .map(|mut entry| {
                if entry.is_item()
                    && let Some(frame) = self.layout_item(entry.index, &mut scratch)
                {
                    entry.frame = frame;
                }
                entry
            })
            .collect();
        debug!(
            "[REGION] {} entries, {} resolved x positions",
            entries.len(),
            scratch.resolved_x.len()
        );
        entries
    }

    /// Align one item starting from its default frame.
    fn layout_item(&self, index: IndexPath, scratch: &mut SweepScratch) -> Option<Rect> {
        let mut frame = self.provider.default_frame(index)?;
        // Justified and centered are the provider's own layout.
        if self.config.horizontal_alignment != HorizontalAlignment::Justified {
            frame = self.align_horizontally(index, frame, scratch);
        }
        if self.config.vertical_alignment != VerticalAlignment::Center {
            frame = self.align_vertically(frame);
        }
        Some(frame)
    }
}
