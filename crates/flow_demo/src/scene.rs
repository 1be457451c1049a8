//! Scene files: container settings, alignment and item sizes.

use anyhow::{Context as _, Error};
use flow_alignment::{AlignmentConfig, HorizontalAlignment, Size, VerticalAlignment};
use flow_rows::FlowRowsConfig;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Everything needed to lay out and align one collection.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Scene {
    pub layout: FlowRowsConfig,
    pub alignment: AlignmentConfig,
    /// Item sizes per section.
    pub sections: Vec<Vec<Size>>,
}

impl Scene {
    /// Read a scene from a JSON file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not a valid scene.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading scene {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("parsing scene {}", path.display()))
    }

    /// Parse a scene from JSON text.
    ///
    /// # Errors
    /// Returns an error if the text is not a valid scene.
    pub fn parse(text: &str) -> Result<Self, Error> {
        let scene: Self = serde_json::from_str(text)?;
        if scene.layout.container_width.is_none() {
            log::warn!("scene has no container width; nothing will be laid out");
        }
        Ok(scene)
    }

    /// The scene used when no file is given: a left-aligned, top-aligned tag cloud.
    pub fn sample() -> Self {
        let widths = [64.0, 92.0, 48.0, 120.0, 56.0, 74.0, 88.0, 150.0];
        Self {
            layout: FlowRowsConfig {
                minimum_inter_item_spacing: 8.0,
                minimum_line_spacing: 8.0,
                ..FlowRowsConfig::with_width(320.0)
            },
            alignment: AlignmentConfig {
                horizontal_alignment: HorizontalAlignment::Left,
                vertical_alignment: VerticalAlignment::Top,
            },
            sections: vec![
                widths
                    .iter()
                    .enumerate()
                    .map(|(idx, width)| Size::new(*width, if idx % 3 == 0 { 36.0 } else { 28.0 }))
                    .collect(),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    /// # Panics
    /// Panics if the bundled scene file does not parse.
    fn bundled_scene_parses() {
        let parsed = Scene::parse(include_str!("../scenes/tags.json"));
        let error = parsed.as_ref().err().map(ToString::to_string);
        assert_eq!(error, None);
        let scene = parsed.unwrap_or_default();
        assert_eq!(scene.sections.len(), 2);
        assert_eq!(
            scene.alignment.horizontal_alignment,
            HorizontalAlignment::Leading
        );
        assert_eq!(scene.layout.container_width, Some(320.0));
    }

    #[test]
    /// # Panics
    /// Panics if omitted fields do not take their defaults.
    fn missing_fields_use_defaults() {
        let scene = Scene::parse(r#"{ "sections": [[{ "width": 10.0, "height": 10.0 }]] }"#)
            .unwrap_or_default();
        assert_eq!(scene.alignment, AlignmentConfig::default());
        assert_eq!(scene.layout, FlowRowsConfig::default());
        assert_eq!(scene.sections.first().map(Vec::len), Some(1));
    }

    #[test]
    /// # Panics
    /// Panics if malformed files are not reported as errors naming the file.
    fn load_reports_file_errors() {
        let missing = Scene::load(Path::new("/definitely/not/here.json"))
            .err()
            .map(|err| format!("{err:#}"))
            .unwrap_or_default();
        assert!(missing.contains("reading scene"), "{missing}");

        let Ok(mut file) = tempfile::NamedTempFile::new() else {
            return;
        };
        assert_eq!(file.write_all(b"{ \"sections\": 3 }").ok(), Some(()));
        let message = Scene::load(file.path())
            .err()
            .map(|err| format!("{err:#}"))
            .unwrap_or_default();
        assert!(message.contains("parsing scene"), "{message}");
    }
}
