//! The engine: wraps every section into lines and answers [`LayoutProvider`] queries.

use flow_alignment::{
    EdgeInsets, ElementRole, IndexPath, LayoutDirection, LayoutEntry, LayoutProvider, Rect, Size,
};
use log::debug;

use crate::config::FlowRowsConfig;
use crate::line_breaking::break_into_lines;
use crate::rows::{LineContext, place_line};

/// A row-wrapping layout over sections of item sizes.
///
/// The default layout is computed on construction and whenever the container or the items
/// change; queries only read it.
#[derive(Clone, Debug)]
pub struct FlowRows {
    config: FlowRowsConfig,
    sections: Vec<Vec<Size>>,
    /// Every entry in layout order: per section, the header then the items.
    entries: Vec<LayoutEntry>,
    /// Default item frames per section.
    item_frames: Vec<Vec<Rect>>,
    content_height: f32,
}

impl FlowRows {
    pub fn new(config: FlowRowsConfig, sections: Vec<Vec<Size>>) -> Self {
        let mut rows = Self {
            config,
            sections,
            entries: Vec::new(),
            item_frames: Vec::new(),
            content_height: 0.0,
        };
        rows.relayout();
        rows
    }

    pub const fn config(&self) -> &FlowRowsConfig {
        &self.config
    }

    /// Every default entry in layout order.
    pub fn entries(&self) -> &[LayoutEntry] {
        &self.entries
    }

    /// Total height of the laid out content; 0 while the container width is unknown.
    pub const fn content_height(&self) -> f32 {
        self.content_height
    }

    /// Rectangle covering all content.
    pub fn content_rect(&self) -> Rect {
        Rect::new(
            0.0,
            0.0,
            self.config.container_width.unwrap_or(0.0),
            self.content_height,
        )
    }

    /// Change the container width and lay out again.
    pub fn set_container_width(&mut self, container_width: Option<f32>) {
        self.config.container_width = container_width;
        self.relayout();
    }

    pub fn set_config(&mut self, config: FlowRowsConfig) {
        self.config = config;
        self.relayout();
    }

    /// Replace every section's item sizes and lay out again.
    pub fn set_sections(&mut self, sections: Vec<Vec<Size>>) {
        self.sections = sections;
        self.relayout();
    }

    fn relayout(&mut self) {
        self.entries.clear();
        self.item_frames.clear();
        self.content_height = 0.0;
        let Some(container_width) = self.config.container_width else {
            debug!("[FLOW-ROWS] container width unknown; no layout");
            return;
        };
        let insets = self.config.section_insets;
        let content_width = (container_width - insets.horizontal()).max(0.0);
        let mut cursor_y = 0.0f32;
        for (section, items) in self.sections.iter().enumerate() {
            if self.config.header_height > 0.0 {
                self.entries.push(LayoutEntry {
                    index: IndexPath::new(section, 0),
                    frame: Rect::new(0.0, cursor_y, container_width, self.config.header_height),
                    role: ElementRole::Supplementary,
                });
                cursor_y += self.config.header_height;
            }
            cursor_y += insets.top;
            let frames = self.layout_section(items, content_width, &mut cursor_y);
            cursor_y += insets.bottom;
            self.entries.extend(
                frames
                    .iter()
                    .enumerate()
                    .map(|(item, frame)| LayoutEntry::item(IndexPath::new(section, item), *frame)),
            );
            self.item_frames.push(frames);
        }
        self.content_height = cursor_y;
        debug!(
            "[FLOW-ROWS] sections={} entries={} content_height={:.3}",
            self.sections.len(),
            self.entries.len(),
            self.content_height
        );
    }

    /// Wrap one section's items starting at `cursor_y`, leaving the cursor below the last line.
    fn layout_section(&self, items: &[Size], content_width: f32, cursor_y: &mut f32) -> Vec<Rect> {
        let spacing = self.config.minimum_inter_item_spacing;
        let line_ranges = break_into_lines(content_width, spacing, items);
        let mut frames = Vec::with_capacity(items.len());
        for (line_idx, (line_start, line_end)) in line_ranges.iter().copied().enumerate() {
            let Some(line_items) = items.get(line_start..line_end) else {
                break;
            };
            if line_idx > 0 {
                *cursor_y += self.config.minimum_line_spacing.max(0.0);
            }
            let (line_frames, line_height) = place_line(
                LineContext {
                    content_x: self.config.section_insets.left,
                    content_width,
                    spacing,
                    line_y: *cursor_y,
                },
                line_items,
            );
            debug!(
                "[FLOW-ROWS] line {line_idx}: items=[{line_start}..{line_end}) y={:.3} height={line_height:.3}",
                *cursor_y
            );
            frames.extend(line_frames);
            *cursor_y += line_height;
        }
        frames
    }
}

impl LayoutProvider for FlowRows {
    fn default_frame(&self, index: IndexPath) -> Option<Rect> {
        self.item_frames
            .get(index.section)
            .and_then(|frames| frames.get(index.item))
            .copied()
    }

    fn default_entries_in(&self, rect: Rect) -> Vec<LayoutEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.frame.intersects(rect))
            .copied()
            .collect()
    }

    fn item_count(&self, section: usize) -> Option<usize> {
        self.sections.get(section).map(Vec::len)
    }

    fn minimum_inter_item_spacing(&self) -> f32 {
        self.config.minimum_inter_item_spacing
    }

    fn section_insets(&self) -> EdgeInsets {
        self.config.section_insets
    }

    fn container_width(&self) -> Option<f32> {
        self.config.container_width
    }

    fn layout_direction(&self) -> LayoutDirection {
        self.config.layout_direction
    }
}
