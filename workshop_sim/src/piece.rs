// Piece input record + the built-in piece catalog.
//
// A `Piece` is what the input layer hands the generator: an element tag,
// an energy tag, a color, and the catalog kind it was minted from. The
// catalog itself (`builtin_catalog`) carries the six pieces the workshop
// ships with; the piece-management collaborator owns spawning, inventory,
// and unlock scheduling.
//
// Element and energy vocabularies are open: a modded catalog can introduce
// new tags and the generator degrades gracefully (default name pool, zero
// personality weight, neutral energy category).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One piece placed on the workbench. Immutable once passed to the
/// generator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    /// Element tag (dawn, midnight, heart, ...). Drives naming and synergy.
    pub element: String,
    /// Energy tag (awakening, resting, ...). Drives personality and synergy.
    pub energy: String,
    /// `#RRGGBB` color, blended into the construct body.
    pub color: String,
    /// Catalog kind this piece was minted from (e.g. `dawn_circuit`).
    pub kind: String,
}

impl Piece {
    pub fn new(element: &str, energy: &str, color: &str, kind: &str) -> Self {
        Self {
            element: element.to_string(),
            energy: energy.to_string(),
            color: color.to_string(),
            kind: kind.to_string(),
        }
    }
}

/// A catalog entry describing one collectible piece type.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PieceDef {
    /// Display name shown in the UI (e.g. "Dawn Circuit").
    pub name: String,
    pub element: String,
    /// Piece family: time, emotion, or nature.
    pub family: String,
    pub energy: String,
    pub color: String,
    /// One-line flavor description.
    pub description: String,
}

impl PieceDef {
    /// Mint a generator input from this definition.
    pub fn to_piece(&self, kind: &str) -> Piece {
        Piece::new(&self.element, &self.energy, &self.color, kind)
    }
}

/// The six built-in piece definitions, keyed by catalog kind.
pub fn builtin_catalog() -> BTreeMap<String, PieceDef> {
    let mut catalog = BTreeMap::new();
    let mut add = |kind: &str, name: &str, element: &str, family: &str, energy: &str, color: &str, description: &str| {
        catalog.insert(
            kind.to_string(),
            PieceDef {
                name: name.to_string(),
                element: element.to_string(),
                family: family.to_string(),
                energy: energy.to_string(),
                color: color.to_string(),
                description: description.to_string(),
            },
        );
    };

    add(
        "dawn_circuit",
        "Dawn Circuit",
        "dawn",
        "time",
        "awakening",
        "#FFD700",
        "Holds the first light",
    );
    add(
        "midnight_core",
        "Midnight Core",
        "midnight",
        "time",
        "resting",
        "#191970",
        "Dreams within circuits",
    );
    add(
        "memory_gear",
        "Memory Gear",
        "golden",
        "emotion",
        "nostalgic",
        "#FFB347",
        "Remembers everything",
    );
    add(
        "rebel_spark",
        "Rebel Spark",
        "neon",
        "emotion",
        "defiant",
        "#FF00FF",
        "Questions authority",
    );
    add(
        "rain_fragment",
        "Rain Fragment",
        "storm",
        "nature",
        "flowing",
        "#4169E1",
        "Collected from windows",
    );
    add(
        "heart_component",
        "Heart Component",
        "heart",
        "emotion",
        "caring",
        "#FF69B4",
        "The caring core",
    );

    catalog
}
