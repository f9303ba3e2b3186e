// Personality profile: energy-weighted archetype plus a flavor trait.
//
// Each of the three energy tags adds fixed increments to the five
// personality weights; the dominant kind is the first one reaching the
// maximum weight in the fixed order [energetic, calm, chaotic, protective,
// curious]. That order is load-bearing: it replaces the original's
// unstable sort-based tie-break with a documented deterministic rule.
//
// Unknown energy tags contribute nothing — silent fallback, not an error.

use crate::prng::WorkshopRng;
use crate::types::PersonalityKind;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Derived personality for one construct.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Personality {
    pub kind: PersonalityKind,
    /// One flavor line from the dominant kind's trait pool.
    pub trait_line: String,
    /// Full weight table, kept for the renderer and for curious players.
    pub weights: BTreeMap<PersonalityKind, u32>,
}

/// Weight increments contributed by one energy tag, as
/// `(kind, amount)` pairs. Empty for unknown tags.
fn weight_increments(energy: &str) -> &'static [(PersonalityKind, u32)] {
    match energy {
        "awakening" => &[(PersonalityKind::Energetic, 2), (PersonalityKind::Curious, 1)],
        "resting" => &[(PersonalityKind::Calm, 2), (PersonalityKind::Protective, 1)],
        "defiant" => &[(PersonalityKind::Chaotic, 2), (PersonalityKind::Energetic, 1)],
        "caring" => &[(PersonalityKind::Protective, 2), (PersonalityKind::Calm, 1)],
        "flowing" => &[(PersonalityKind::Curious, 2), (PersonalityKind::Calm, 1)],
        "nostalgic" => &[(PersonalityKind::Calm, 1), (PersonalityKind::Protective, 1)],
        _ => &[],
    }
}

/// Flavor trait pool for each personality kind.
pub fn trait_pool(kind: PersonalityKind) -> &'static [&'static str] {
    match kind {
        PersonalityKind::Energetic => &[
            "bounces constantly",
            "never sits still",
            "vibrates with enthusiasm",
            "always ready to help",
        ],
        PersonalityKind::Calm => &[
            "moves slowly and deliberately",
            "contemplates existence",
            "radiates peace",
            "watches over others",
        ],
        PersonalityKind::Chaotic => &[
            "glitches adorably",
            "does things backwards",
            "questions physics",
            "rewrites its own rules",
        ],
        PersonalityKind::Protective => &[
            "guards the workshop",
            "checks on other constructs",
            "stands watch at night",
            "keeps everyone safe",
        ],
        PersonalityKind::Curious => &[
            "investigates everything",
            "asks silent questions",
            "peers at visitors",
            "collects interesting data",
        ],
    }
}

/// Accumulate the weight table for three energy tags. Every kind is
/// present in the result, zero-weighted kinds included.
pub fn weights_for(energies: &[String; 3]) -> BTreeMap<PersonalityKind, u32> {
    let mut weights: BTreeMap<PersonalityKind, u32> =
        PersonalityKind::ALL.iter().map(|&k| (k, 0)).collect();
    for energy in energies {
        for &(kind, amount) in weight_increments(energy) {
            *weights.entry(kind).or_insert(0) += amount;
        }
    }
    weights
}

/// The first kind reaching the maximum weight, in `PersonalityKind::ALL`
/// order. With all-zero weights (three unknown energies) this is
/// `Energetic`.
pub fn dominant_kind(weights: &BTreeMap<PersonalityKind, u32>) -> PersonalityKind {
    let mut best = PersonalityKind::ALL[0];
    let mut best_weight = weights.get(&best).copied().unwrap_or(0);
    for &kind in &PersonalityKind::ALL[1..] {
        let w = weights.get(&kind).copied().unwrap_or(0);
        if w > best_weight {
            best = kind;
            best_weight = w;
        }
    }
    best
}

/// Build the full personality profile for three energy tags.
pub fn generate(energies: &[String; 3], rng: &mut WorkshopRng) -> Personality {
    let weights = weights_for(energies);
    let kind = dominant_kind(&weights);
    let pool = trait_pool(kind);
    let trait_line = pool[rng.range_usize(0, pool.len())].to_string();
    Personality {
        kind,
        trait_line,
        weights,
    }
}
