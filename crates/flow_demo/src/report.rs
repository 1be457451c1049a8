//! Text report of a scene's final layout.

use flow_alignment::{AlignedFlowLayout, ElementRole, LayoutEntry};
use flow_rows::FlowRows;
use std::iter;

use crate::scene::Scene;

/// Lay out `scene` and align it.
pub fn align_scene(scene: &Scene) -> AlignedFlowLayout<FlowRows> {
    AlignedFlowLayout::from_config(
        FlowRows::new(scene.layout, scene.sections.clone()),
        scene.alignment,
    )
}

/// Final entries of the whole scene, one line each: `section.item role x y width height`.
pub fn render_report(scene: &Scene) -> String {
    let layout = align_scene(scene);
    let entries = layout.final_entries_in(layout.provider().content_rect());
    let header = format!(
        "# horizontal={} vertical={} entries={}",
        scene.alignment.horizontal_alignment.keyword(),
        scene.alignment.vertical_alignment.keyword(),
        entries.len()
    );
    let mut out = String::new();
    for line in iter::once(header).chain(entries.iter().map(format_entry)) {
        out.push_str(&line);
        out.push('\n');
    }
    out
}

fn format_entry(entry: &LayoutEntry) -> String {
    let role = match entry.role {
        ElementRole::Item => "item",
        ElementRole::Supplementary => "header",
        ElementRole::Decoration => "decoration",
    };
    format!(
        "{}.{} {role} {:.1} {:.1} {:.1} {:.1}",
        entry.index.section,
        entry.index.item,
        entry.frame.x,
        entry.frame.y,
        entry.frame.width,
        entry.frame.height
    )
}
