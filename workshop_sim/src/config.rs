// Data-driven workshop configuration.
//
// All tunable parameters live here in `WorkshopConfig`, loadable from JSON.
// The sim never uses magic numbers for layout or limits — it reads from the
// config. Defaults reproduce the original workshop's canvas layout.
//
// See also: `generator.rs` which reads `ShelfConfig` for slot layout and
// the size constants for appearance, `plant.rs` for `plant_stages`,
// `radio.rs` for `radio_history_cap`.

use serde::{Deserialize, Serialize};

/// Shelf layout geometry. Constructs fill the shelf left-to-right,
/// top-to-bottom in creation order.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ShelfConfig {
    /// Left edge of the shelf in canvas units.
    pub x: f32,
    /// Top edge of the shelf in canvas units.
    pub y: f32,
    /// Total shelf width; each column is `width / cols` wide.
    pub width: f32,
    /// Nominal row count. Not enforced — constructs past the nominal
    /// capacity keep the same arithmetic and may render past the shelf.
    pub rows: u32,
    /// Number of columns per row.
    pub cols: u32,
    /// Offset applied to both axes of every slot position.
    pub padding: f32,
    /// Vertical distance between rows.
    pub row_height: f32,
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self {
            x: 20.0,
            y: 150.0,
            width: 320.0,
            rows: 3,
            cols: 4,
            padding: 20.0,
            row_height: 50.0,
        }
    }
}

/// Top-level workshop configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WorkshopConfig {
    /// Shelf layout for construct placement.
    pub shelf: ShelfConfig,
    /// Number of plant growth stages (final stage index is `stages - 1`).
    pub plant_stages: u32,
    /// How many heard radio messages to remember before forgetting the
    /// oldest.
    pub radio_history_cap: usize,
    /// Construct size at zero synergy, in pixels.
    pub construct_base_size: f32,
    /// Extra size granted at full synergy, in pixels.
    pub construct_size_bonus: f32,
}

impl Default for WorkshopConfig {
    fn default() -> Self {
        Self {
            shelf: ShelfConfig::default(),
            plant_stages: 4,
            radio_history_cap: 10,
            construct_base_size: 32.0,
            construct_size_bonus: 8.0,
        }
    }
}

impl WorkshopConfig {
    /// Parse a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
