//! Tests for horizontal alignment and neighbor chaining.

use super::*;

#[test]
/// # Panics
/// Panics if left alignment does not chain items at `spacing` from the left axis.
fn left_alignment_chains_from_axis() {
    let layout = AlignedFlowLayout::with_alignment(
        three_items_100(),
        HorizontalAlignment::Left,
        VerticalAlignment::Center,
    );
    assert_close(&final_xs(&layout, 3), &[0.0, 110.0, 220.0]);
}

#[test]
/// # Panics
/// Panics if right alignment does not chain items back from the right axis.
fn right_alignment_chains_from_axis() {
    let layout = AlignedFlowLayout::with_alignment(
        two_lines_80(),
        HorizontalAlignment::Right,
        VerticalAlignment::Center,
    );
    assert_close(&final_xs(&layout, 4), &[40.0, 130.0, 220.0, 220.0]);
}

#[test]
/// # Panics
/// Panics if a single centered item is not snapped to the axis on either side.
fn single_item_line_snaps_to_axis() {
    let mut layout = AlignedFlowLayout::with_alignment(
        StaticLayout::section(300.0, 10.0, &[Rect::new(110.0, 0.0, 80.0, 50.0)]),
        HorizontalAlignment::Right,
        VerticalAlignment::Center,
    );
    assert_close(&final_xs(&layout, 1), &[220.0]);
    layout.set_horizontal_alignment(HorizontalAlignment::Left);
    assert_close(&final_xs(&layout, 1), &[0.0]);
}

#[test]
/// # Panics
/// Panics if every wrapped line does not restart at the axis.
fn each_line_restarts_at_axis() {
    let layout = AlignedFlowLayout::with_alignment(
        two_lines_80(),
        HorizontalAlignment::Left,
        VerticalAlignment::Center,
    );
    assert_close(&final_xs(&layout, 4), &[0.0, 90.0, 180.0, 0.0]);
}

#[test]
/// # Panics
/// Panics if `leading`/`trailing` do not follow the provider's layout direction.
fn leading_and_trailing_follow_provider_direction() {
    let mut layout = AlignedFlowLayout::with_alignment(
        two_lines_80(),
        HorizontalAlignment::Leading,
        VerticalAlignment::Center,
    );
    assert_close(&final_xs(&layout, 4), &[0.0, 90.0, 180.0, 0.0]);

    layout.provider_mut().direction = LayoutDirection::RightToLeft;
    assert_eq!(
        layout.effective_horizontal_alignment(),
        EffectiveHorizontalAlignment::Right
    );
    assert_close(&final_xs(&layout, 4), &[40.0, 130.0, 220.0, 220.0]);

    layout.set_horizontal_alignment(HorizontalAlignment::Trailing);
    assert_close(&final_xs(&layout, 4), &[0.0, 90.0, 180.0, 0.0]);
}

#[test]
/// # Panics
/// Panics if section insets do not move both axes.
fn insets_move_the_axes() {
    let mut provider = StaticLayout::section(
        340.0,
        10.0,
        &[
            Rect::new(20.0, 0.0, 100.0, 50.0),
            Rect::new(220.0, 0.0, 100.0, 50.0),
        ],
    );
    provider.insets = EdgeInsets::new(0.0, 20.0, 0.0, 20.0);
    let mut layout = AlignedFlowLayout::with_alignment(
        provider,
        HorizontalAlignment::Left,
        VerticalAlignment::Center,
    );
    assert_close(&final_xs(&layout, 2), &[20.0, 130.0]);
    layout.set_horizontal_alignment(HorizontalAlignment::Right);
    assert_close(&final_xs(&layout, 2), &[110.0, 220.0]);
}

#[test]
/// # Panics
/// Panics if right alignment moves items while the container width is unknown.
fn right_alignment_without_width_keeps_defaults() {
    let mut provider = three_items_100();
    provider.container_width = None;
    let layout = AlignedFlowLayout::with_alignment(
        provider,
        HorizontalAlignment::Right,
        VerticalAlignment::Center,
    );
    assert!(layout.horizontal_alignment_axis().is_none());
    assert_close(&final_xs(&layout, 3), &[0.0, 100.0, 200.0]);
}

#[test]
/// # Panics
/// Panics if left alignment without a known width does not snap every item to the axis.
fn left_alignment_without_width_treats_items_as_single_lines() {
    let mut provider = three_items_100();
    provider.container_width = None;
    provider.insets = EdgeInsets::new(0.0, 5.0, 0.0, 5.0);
    let layout = AlignedFlowLayout::with_alignment(
        provider,
        HorizontalAlignment::Left,
        VerticalAlignment::Center,
    );
    assert_close(&final_xs(&layout, 3), &[5.0, 5.0, 5.0]);
}

#[test]
/// # Panics
/// Panics if justified alignment changes any default frame.
fn justified_is_passthrough() {
    let layout = AlignedFlowLayout::new(two_lines_80());
    assert!(layout.horizontal_alignment_axis().is_none());
    for item in 0..4 {
        let index = IndexPath::new(0, item);
        assert_eq!(
            layout.final_frame(index),
            layout.provider().default_frame(index)
        );
    }
    assert_eq!(layout.final_frame(IndexPath::new(0, 4)), None);
}
