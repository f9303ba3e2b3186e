// Appearance: blended color, shape, size, and glow from synergy.
//
// Shape is an index into the four-entry shape list computed as
// `floor(level * 4)` clamped to the last index, so every level of 0.75 or
// higher lands on Organic. Size scales linearly from the base size to
// base + bonus across the synergy range.

use crate::color;
use crate::config::WorkshopConfig;
use crate::types::Shape;
use serde::{Deserialize, Serialize};

/// Derived visual descriptor for one construct. The renderer maps this to
/// pixels; the sim only guarantees the values.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Appearance {
    /// Per-channel mean of the three piece colors, `#rrggbb`.
    pub color: String,
    pub shape: Shape,
    /// In `[base, base + bonus]` — [32, 40] with the default config.
    pub size: f32,
    /// Equal to the synergy level, in [0, 1].
    pub glow_intensity: f32,
}

const SHAPES: [Shape; 4] = [Shape::Round, Shape::Angular, Shape::Crystalline, Shape::Organic];

/// Shape for a synergy level: `floor(level * 4)` clamped into the list.
pub fn shape_for_level(level: f32) -> Shape {
    let index = (level * SHAPES.len() as f32).floor() as usize;
    SHAPES[index.min(SHAPES.len() - 1)]
}

/// Build the appearance for three piece colors and a synergy level.
pub fn generate(colors: &[String; 3], synergy_level: f32, config: &WorkshopConfig) -> Appearance {
    Appearance {
        color: color::blend_hex(colors),
        shape: shape_for_level(synergy_level),
        size: config.construct_base_size + synergy_level * config.construct_size_bonus,
        glow_intensity: synergy_level,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strs(a: &str, b: &str, c: &str) -> [String; 3] {
        [a.to_string(), b.to_string(), c.to_string()]
    }

    #[test]
    fn shape_for_each_synergy_level() {
        // The five levels the case table can produce.
        assert_eq!(shape_for_level(0.6), Shape::Crystalline); // floor(2.4)
        assert_eq!(shape_for_level(0.7), Shape::Crystalline); // floor(2.8)
        assert_eq!(shape_for_level(0.75), Shape::Organic); // floor(3.0)
        assert_eq!(shape_for_level(0.9), Shape::Organic); // floor(3.6)
        assert_eq!(shape_for_level(1.0), Shape::Organic); // clamped from 4
    }

    #[test]
    fn shape_low_levels() {
        assert_eq!(shape_for_level(0.0), Shape::Round);
        assert_eq!(shape_for_level(0.3), Shape::Angular);
    }

    #[test]
    fn size_spans_base_to_bonus() {
        let config = WorkshopConfig::default();
        let colors = strs("#FFFFFF", "#FFFFFF", "#FFFFFF");
        assert_eq!(generate(&colors, 0.0, &config).size, 32.0);
        assert_eq!(generate(&colors, 1.0, &config).size, 40.0);
        assert_eq!(generate(&colors, 0.75, &config).size, 38.0);
    }

    #[test]
    fn glow_tracks_level() {
        let config = WorkshopConfig::default();
        let colors = strs("#FF0000", "#00FF00", "#0000FF");
        let a = generate(&colors, 0.9, &config);
        assert_eq!(a.glow_intensity, 0.9);
        assert_eq!(a.color, "#555555");
    }

    #[test]
    fn unparseable_color_blends_as_white() {
        let config = WorkshopConfig::default();
        let colors = strs("nope", "nope", "nope");
        let a = generate(&colors, 1.0, &config);
        assert_eq!(a.color, "#ffffff");
    }
}
