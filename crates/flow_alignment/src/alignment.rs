//! Alignment keywords, alignment axes and direction-aware resolution of `leading`/`trailing`.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::geometry::Rect;
use crate::provider::LayoutDirection;

/// How items are horizontally aligned in their line.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum HorizontalAlignment {
    Left,
    Right,
    /// Left in left-to-right layouts, right in right-to-left layouts.
    Leading,
    /// Right in left-to-right layouts, left in right-to-left layouts.
    Trailing,
    /// Items spread over the whole line, as the row-wrapping engine lays them out.
    #[default]
    Justified,
}

/// How items are vertically aligned in their line.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum VerticalAlignment {
    Top,
    /// Items centered on the line, as the row-wrapping engine lays them out.
    #[default]
    Center,
    Bottom,
}

/// Horizontal alignment after `leading`/`trailing` have been mapped to a physical side.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum EffectiveHorizontalAlignment {
    Left,
    Right,
    Justified,
}

/// A line items are snapped to.
///
/// For a horizontal alignment the axis is vertical and `position` is an x coordinate; for a
/// vertical alignment the axis is horizontal and `position` is a y coordinate.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AlignmentAxis<A> {
    pub alignment: A,
    pub position: f32,
}

impl HorizontalAlignment {
    /// Parse a configuration keyword. Unknown keywords fall back to `justified`.
    pub fn from_keyword(keyword: &str) -> Self {
        match keyword.trim().to_ascii_lowercase().as_str() {
            "left" => Self::Left,
            "right" => Self::Right,
            "leading" => Self::Leading,
            "trailing" => Self::Trailing,
            "justified" => Self::Justified,
            other => {
                warn!("[ALIGN] unknown horizontal alignment {other:?}; using justified");
                Self::Justified
            }
        }
    }

    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Leading => "leading",
            Self::Trailing => "trailing",
            Self::Justified => "justified",
        }
    }
}

impl From<String> for HorizontalAlignment {
    fn from(keyword: String) -> Self {
        Self::from_keyword(&keyword)
    }
}

impl VerticalAlignment {
    /// Parse a configuration keyword. Unknown keywords fall back to `center`.
    pub fn from_keyword(keyword: &str) -> Self {
        match keyword.trim().to_ascii_lowercase().as_str() {
            "top" => Self::Top,
            "center" => Self::Center,
            "bottom" => Self::Bottom,
            other => {
                warn!("[ALIGN] unknown vertical alignment {other:?}; using center");
                Self::Center
            }
        }
    }

    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Center => "center",
            Self::Bottom => "bottom",
        }
    }
}

impl From<String> for VerticalAlignment {
    fn from(keyword: String) -> Self {
        Self::from_keyword(&keyword)
    }
}

/// Map `leading`/`trailing` onto a physical side for `direction`.
///
/// `left`, `right` and `justified` map to themselves in every direction. An unknown direction
/// resolves `leading`/`trailing` as in a left-to-right layout.
pub fn resolve_effective_horizontal(
    alignment: HorizontalAlignment,
    direction: LayoutDirection,
) -> EffectiveHorizontalAlignment {
    match (alignment, direction) {
        (HorizontalAlignment::Left, _) => EffectiveHorizontalAlignment::Left,
        (HorizontalAlignment::Right, _) => EffectiveHorizontalAlignment::Right,
        (HorizontalAlignment::Justified, _) => EffectiveHorizontalAlignment::Justified,
        (HorizontalAlignment::Leading, LayoutDirection::LeftToRight)
        | (HorizontalAlignment::Trailing, LayoutDirection::RightToLeft) => {
            EffectiveHorizontalAlignment::Left
        }
        (HorizontalAlignment::Trailing, LayoutDirection::LeftToRight)
        | (HorizontalAlignment::Leading, LayoutDirection::RightToLeft) => {
            EffectiveHorizontalAlignment::Right
        }
        (HorizontalAlignment::Leading, LayoutDirection::Unknown) => {
            warn!("[ALIGN] unknown layout direction; resolving leading as left");
            EffectiveHorizontalAlignment::Left
        }
        (HorizontalAlignment::Trailing, LayoutDirection::Unknown) => {
            warn!("[ALIGN] unknown layout direction; resolving trailing as right");
            EffectiveHorizontalAlignment::Right
        }
    }
}

/// The vertical axis items of a line are horizontally aligned to.
///
/// - Left: the section's left inset.
/// - Right: the container width minus the section's right inset; absent while the width is unknown.
/// - Justified: no axis.
pub fn horizontal_axis(
    alignment: EffectiveHorizontalAlignment,
    section_left_inset: f32,
    container_width: Option<f32>,
    section_right_inset: f32,
) -> Option<AlignmentAxis<EffectiveHorizontalAlignment>> {
    match alignment {
        EffectiveHorizontalAlignment::Left => Some(AlignmentAxis {
            alignment,
            position: section_left_inset,
        }),
        EffectiveHorizontalAlignment::Right => container_width.map(|width| AlignmentAxis {
            alignment,
            position: width - section_right_inset,
        }),
        EffectiveHorizontalAlignment::Justified => None,
    }
}

/// The horizontal axis the items of one line are vertically aligned to.
///
/// - Top: the smallest `min_y` of the line.
/// - Bottom: the largest `max_y` of the line.
/// - Center: the vertical center of the first frame.
///
/// `line_frames` always holds at least the frame being aligned; `None` is only returned when that
/// invariant is broken.
pub fn vertical_axis(
    alignment: VerticalAlignment,
    line_frames: &[Rect],
) -> Option<AlignmentAxis<VerticalAlignment>> {
    debug_assert!(!line_frames.is_empty(), "vertical axis of an empty line");
    let first = line_frames.first()?;
    let position = match alignment {
        VerticalAlignment::Top => line_frames
            .iter()
            .map(|frame| frame.min_y())
            .fold(f32::INFINITY, f32::min),
        VerticalAlignment::Bottom => line_frames
            .iter()
            .map(|frame| frame.max_y())
            .fold(f32::NEG_INFINITY, f32::max),
        VerticalAlignment::Center => first.mid_y(),
    };
    Some(AlignmentAxis {
        alignment,
        position,
    })
}
