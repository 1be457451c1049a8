//! Settings of the reference row-wrapping engine.

use flow_alignment::{EdgeInsets, LayoutDirection};
use serde::{Deserialize, Serialize};

/// Container geometry and spacing for [`FlowRows`](crate::FlowRows).
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowRowsConfig {
    /// Width of the container; no layout is produced while it is unknown.
    pub container_width: Option<f32>,
    pub section_insets: EdgeInsets,
    /// Minimum horizontal spacing between neighbors of a line.
    pub minimum_inter_item_spacing: f32,
    /// Vertical spacing between consecutive lines of a section.
    pub minimum_line_spacing: f32,
    /// Height of each section's header; 0 disables headers.
    pub header_height: f32,
    pub layout_direction: LayoutDirection,
}

impl Default for FlowRowsConfig {
    fn default() -> Self {
        Self {
            container_width: None,
            section_insets: EdgeInsets::default(),
            minimum_inter_item_spacing: 10.0,
            minimum_line_spacing: 10.0,
            header_height: 0.0,
            layout_direction: LayoutDirection::LeftToRight,
        }
    }
}

impl FlowRowsConfig {
    /// Default settings for a container of known width.
    pub fn with_width(container_width: f32) -> Self {
        Self {
            container_width: Some(container_width),
            ..Self::default()
        }
    }
}
