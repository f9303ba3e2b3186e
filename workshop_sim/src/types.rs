// Core types shared across the simulation.
//
// Defines the construct identifier, the 2D position type, and the shared
// enums (personality kinds, synergy kinds, shapes, behavior tags, energy
// categories). All types derive `Serialize`/`Deserialize` for save/load.
//
// Piece `element` and `energy` stay plain strings: their vocabulary is
// open-ended by design (unknown tags fall back silently, see `synergy.rs`
// and `workshop_lexicon`). The derived enums below are closed vocabularies
// owned by the generator.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

// ---------------------------------------------------------------------------
// Construct identifier
// ---------------------------------------------------------------------------

/// Identifier for a construct: a process-scoped counter, never reused and
/// never decremented. Serializes as the string `"construct_{n}"` so saved
/// documents stay keyable by external collaborators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConstructId(pub u64);

/// Parse failure for a construct id string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid construct id: expected \"construct_{{n}}\"")]
pub struct ParseConstructIdError;

impl std::str::FromStr for ConstructId {
    type Err = ParseConstructIdError;

    /// Parse an id from its `"construct_{n}"` string form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.strip_prefix("construct_")
            .and_then(|n| n.parse().ok())
            .map(Self)
            .ok_or(ParseConstructIdError)
    }
}

impl fmt::Display for ConstructId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "construct_{}", self.0)
    }
}

// Custom serde: serialize as the "construct_{n}" string, matching the
// document format the persistence collaborator stores.
impl Serialize for ConstructId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for ConstructId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// Spatial type
// ---------------------------------------------------------------------------

/// A 2D position in workshop canvas units.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

// ---------------------------------------------------------------------------
// Personality
// ---------------------------------------------------------------------------

/// The five personality archetypes a construct can have.
///
/// `ALL` fixes the enumeration order used to break weight ties: the first
/// kind reaching the maximum weight wins. The derived `Ord` follows the
/// same declaration order, so `BTreeMap<PersonalityKind, _>` iterates in
/// tie-break order too.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonalityKind {
    Energetic,
    Calm,
    Chaotic,
    Protective,
    Curious,
}

impl PersonalityKind {
    /// Fixed enumeration order for deterministic tie-breaking.
    pub const ALL: [PersonalityKind; 5] = [
        PersonalityKind::Energetic,
        PersonalityKind::Calm,
        PersonalityKind::Chaotic,
        PersonalityKind::Protective,
        PersonalityKind::Curious,
    ];
}

// ---------------------------------------------------------------------------
// Synergy
// ---------------------------------------------------------------------------

/// How well three pieces combine, from the case table in `synergy.rs`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SynergyKind {
    PerfectHarmony,
    EnergySync,
    InterestingTension,
    DiverseBalance,
    UniqueBlend,
}

/// Coarse grouping that piece energy tags map into for synergy scoring.
/// Unknown energy tags map to `Neutral` rather than erroring.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnergyCategory {
    Active,
    Passive,
    Reflective,
    Chaotic,
    Adaptive,
    Supportive,
    Neutral,
}

// ---------------------------------------------------------------------------
// Appearance
// ---------------------------------------------------------------------------

/// Construct body shape, picked by synergy level (see `appearance.rs`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    Round,
    Angular,
    Crystalline,
    Organic,
}

// ---------------------------------------------------------------------------
// Behavior tags
// ---------------------------------------------------------------------------

/// The fixed behavior vocabulary. Idle and active tags come in pairs per
/// personality kind (see `behavior.rs`); `HarmonyGlow` is the only special
/// tag, earned by high synergy. The renderer maps these to animations —
/// the sim only uses the first idle tag for cosmetic drift in `update`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BehaviorTag {
    Bounce,
    Vibrate,
    Spin,
    Jump,
    Sway,
    Breathe,
    Nod,
    Meditate,
    Glitch,
    Flicker,
    Teleport,
    Invert,
    Scan,
    Patrol,
    Shield,
    Alert,
    Tilt,
    Peek,
    Investigate,
    Record,
    HarmonyGlow,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construct_id_display_format() {
        assert_eq!(ConstructId(1).to_string(), "construct_1");
        assert_eq!(ConstructId(42).to_string(), "construct_42");
    }

    #[test]
    fn construct_id_parse_roundtrip() {
        let id = ConstructId(7);
        assert_eq!(id.to_string().parse(), Ok(id));
        assert_eq!(
            "construct_x".parse::<ConstructId>(),
            Err(ParseConstructIdError)
        );
        assert_eq!("7".parse::<ConstructId>(), Err(ParseConstructIdError));
    }

    #[test]
    fn construct_id_serializes_as_string() {
        let json = serde_json::to_string(&ConstructId(3)).unwrap();
        assert_eq!(json, "\"construct_3\"");
        let restored: ConstructId = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, ConstructId(3));
    }

    #[test]
    fn personality_kind_ord_matches_tie_break_order() {
        // The derived Ord must agree with ALL, since BTreeMap iteration
        // relies on it.
        let mut sorted = PersonalityKind::ALL;
        sorted.sort();
        assert_eq!(sorted, PersonalityKind::ALL);
    }

    #[test]
    fn enums_serialize_snake_case() {
        assert_eq!(
            serde_json::to_string(&SynergyKind::PerfectHarmony).unwrap(),
            "\"perfect_harmony\""
        );
        assert_eq!(
            serde_json::to_string(&BehaviorTag::HarmonyGlow).unwrap(),
            "\"harmony_glow\""
        );
        assert_eq!(
            serde_json::to_string(&Shape::Crystalline).unwrap(),
            "\"crystalline\""
        );
        assert_eq!(
            serde_json::to_string(&PersonalityKind::Protective).unwrap(),
            "\"protective\""
        );
    }
}
