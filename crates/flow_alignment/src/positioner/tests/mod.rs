//! Tests for the line-aware positioner.

use super::*;
use crate::{EdgeInsets, EffectiveHorizontalAlignment, ElementRole, LayoutDirection};

mod horizontal_tests;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Provider over a fixed, hand-written default layout.
pub struct StaticLayout {
    pub entries: Vec<LayoutEntry>,
    pub container_width: Option<f32>,
    pub insets: EdgeInsets,
    pub spacing: f32,
    pub direction: LayoutDirection,
    /// When false, `item_count` reports every section as unknown.
    pub counts_known: bool,
}

impl StaticLayout {
    /// One section of items with the given default frames, no insets.
    pub fn section(container_width: f32, spacing: f32, frames: &[Rect]) -> Self {
        init_logging();
        let entries = frames
            .iter()
            .enumerate()
            .map(|(item, frame)| LayoutEntry::item(IndexPath::new(0, item), *frame))
            .collect();
        Self {
            entries,
            container_width: Some(container_width),
            insets: EdgeInsets::default(),
            spacing,
            direction: LayoutDirection::LeftToRight,
            counts_known: true,
        }
    }
}

impl LayoutProvider for StaticLayout {
    fn default_frame(&self, index: IndexPath) -> Option<Rect> {
        self.entries
            .iter()
            .find(|entry| entry.is_item() && entry.index == index)
            .map(|entry| entry.frame)
    }

    fn default_entries_in(&self, rect: Rect) -> Vec<LayoutEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.frame.intersects(rect))
            .copied()
            .collect()
    }

    fn item_count(&self, section: usize) -> Option<usize> {
        if !self.counts_known {
            return None;
        }
        let count = self
            .entries
            .iter()
            .filter(|entry| entry.is_item() && entry.index.section == section)
            .count();
        (count > 0).then_some(count)
    }

    fn minimum_inter_item_spacing(&self) -> f32 {
        self.spacing
    }

    fn section_insets(&self) -> EdgeInsets {
        self.insets
    }

    fn container_width(&self) -> Option<f32> {
        self.container_width
    }

    fn layout_direction(&self) -> LayoutDirection {
        self.direction
    }
}

/// Three 100x50 items justified over a 300 wide container: x = 0, 100, 200.
#[inline]
pub fn three_items_100() -> StaticLayout {
    StaticLayout::section(
        300.0,
        10.0,
        &[
            Rect::new(0.0, 0.0, 100.0, 50.0),
            Rect::new(100.0, 0.0, 100.0, 50.0),
            Rect::new(200.0, 0.0, 100.0, 50.0),
        ],
    )
}

/// Two lines in a 300 wide container with spacing 10: three justified 80x40 items, then a single
/// centered 80x40 item.
#[inline]
pub fn two_lines_80() -> StaticLayout {
    StaticLayout::section(
        300.0,
        10.0,
        &[
            Rect::new(0.0, 0.0, 80.0, 40.0),
            Rect::new(110.0, 0.0, 80.0, 40.0),
            Rect::new(220.0, 0.0, 80.0, 40.0),
            Rect::new(110.0, 50.0, 80.0, 40.0),
        ],
    )
}

/// Final x of every item in section 0, in item order.
pub fn final_xs<P: LayoutProvider>(layout: &AlignedFlowLayout<P>, count: usize) -> Vec<f32> {
    (0..count)
        .filter_map(|item| layout.final_frame(IndexPath::new(0, item)))
        .map(|frame| frame.x)
        .collect()
}

/// Assert two coordinate lists match within tolerance.
pub fn assert_close(got: &[f32], expected: &[f32]) {
    assert_eq!(got.len(), expected.len(), "got {got:?}, expected {expected:?}");
    for (got_value, expected_value) in got.iter().zip(expected) {
        assert!(
            (got_value - expected_value).abs() < 0.001,
            "got {got:?}, expected {expected:?}"
        );
    }
}
