//! Visual classification for the renderer: workspace label size and node color.
//!
//! Both are pure lookups. How the renderer uses them is its own business.

use crate::graph::NodeType;
use serde::{Serialize, Serializer};
use std::fmt;

/// Label size band for a workspace, chosen by how many artifacts it holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextSize {
    Small,
    Medium,
    Large,
    ExtraLarge,
}

impl TextSize {
    /// Band upper limits are inclusive: 10 is small, 11 is medium.
    pub fn for_artifact_count(count: usize) -> Self {
        match count {
            0..=10 => TextSize::Small,
            11..=50 => TextSize::Medium,
            51..=100 => TextSize::Large,
            _ => TextSize::ExtraLarge,
        }
    }

    /// Text height in scene units.
    pub fn height(self) -> u32 {
        match self {
            TextSize::Small => 8,
            TextSize::Medium => 16,
            TextSize::Large => 22,
            TextSize::ExtraLarge => 30,
        }
    }
}

/// RGBA color, serialized as a CSS `rgba(..)` string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0.0);

    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

impl Serialize for Rgba {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

pub fn node_color(node_type: NodeType) -> Rgba {
    match node_type {
        NodeType::Workspace => Rgba::new(255, 0, 0, 1.0),
        NodeType::Dashboard => Rgba::new(25, 114, 120, 1.0),
        NodeType::Report => Rgba::new(18, 35, 158, 1.0),
        NodeType::Dataset => Rgba::new(201, 79, 15, 1.0),
        NodeType::Dataflow => Rgba::new(153, 112, 10, 1.0),
    }
}

/// Color for a type label coming from the renderer side; anything that is not
/// one of the known node types is transparent.
pub fn color_for_label(label: &str) -> Rgba {
    label
        .parse::<NodeType>()
        .map(node_color)
        .unwrap_or(Rgba::TRANSPARENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn size_band_boundaries() {
        let got: Vec<TextSize> = [0, 10, 11, 50, 51, 100, 101, 5000]
            .into_iter()
            .map(TextSize::for_artifact_count)
            .collect();
        assert_eq!(
            got,
            vec![
                TextSize::Small,
                TextSize::Small,
                TextSize::Medium,
                TextSize::Medium,
                TextSize::Large,
                TextSize::Large,
                TextSize::ExtraLarge,
                TextSize::ExtraLarge,
            ]
        );
    }

    #[test]
    fn heights_grow_with_band() {
        assert_eq!(TextSize::Small.height(), 8);
        assert_eq!(TextSize::Medium.height(), 16);
        assert_eq!(TextSize::Large.height(), 22);
        assert_eq!(TextSize::ExtraLarge.height(), 30);
    }

    #[test]
    fn every_type_has_its_own_opaque_color() {
        let colors: Vec<String> = NodeType::ALL
            .into_iter()
            .map(|t| node_color(t).to_string())
            .collect();
        let mut distinct = colors.clone();
        distinct.sort();
        distinct.dedup();
        assert_eq!(distinct.len(), NodeType::ALL.len());
        assert!(NodeType::ALL.into_iter().all(|t| node_color(t).a > 0.0));
    }

    #[test]
    fn unknown_label_is_transparent() {
        assert_eq!(color_for_label("Workbook"), Rgba::TRANSPARENT);
        assert_eq!(color_for_label(""), Rgba::TRANSPARENT);
        assert_eq!(color_for_label("Report"), node_color(NodeType::Report));
    }

    #[test]
    fn serializes_as_css() {
        let v = serde_json::to_value(node_color(NodeType::Dataset)).unwrap();
        assert_eq!(v, serde_json::json!("rgba(201, 79, 15, 1)"));
        assert_eq!(Rgba::TRANSPARENT.to_string(), "rgba(0, 0, 0, 0)");
    }
}
