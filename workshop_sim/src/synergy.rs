// Synergy scoring: how well three pieces combine.
//
// The case table, evaluated top to bottom (first match wins):
//   1. all three elements identical            -> PerfectHarmony, 1.0
//   2. all mapped energy categories identical  -> EnergySync, 0.9
//   3. categories include Chaotic AND Passive  -> InterestingTension, 0.6
//   4. three pairwise-distinct elements        -> DiverseBalance, 0.7
//   5. otherwise (two distinct elements)       -> UniqueBlend, 0.75
//
// The level feeds appearance (shape, size, glow) and the HarmonyGlow
// special behavior. Unknown energy tags map to Neutral — never an error.

use crate::types::{EnergyCategory, SynergyKind};
use serde::{Deserialize, Serialize};

/// Derived compatibility score for one construct. Computed fresh per
/// generation, never persisted apart from its owning construct.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Synergy {
    pub kind: SynergyKind,
    /// Always in [0, 1]; one of {1.0, 0.9, 0.6, 0.7, 0.75}.
    pub level: f32,
    pub description: String,
}

/// Map an energy tag into its coarse category. Tags outside the fixed
/// table are `Neutral`.
pub fn energy_category(energy: &str) -> EnergyCategory {
    match energy {
        "awakening" => EnergyCategory::Active,
        "resting" => EnergyCategory::Passive,
        "nostalgic" => EnergyCategory::Reflective,
        "defiant" => EnergyCategory::Chaotic,
        "flowing" => EnergyCategory::Adaptive,
        "caring" => EnergyCategory::Supportive,
        _ => EnergyCategory::Neutral,
    }
}

/// Fixed description per synergy kind.
fn description(kind: SynergyKind) -> &'static str {
    match kind {
        SynergyKind::PerfectHarmony => "In perfect sync, moving as one",
        SynergyKind::EnergySync => "Energies aligned and flowing",
        SynergyKind::InterestingTension => "Contradictions create something new",
        SynergyKind::DiverseBalance => "Every element has its place",
        SynergyKind::UniqueBlend => "An unexpected but delightful combination",
    }
}

/// Number of distinct strings among the three, preserving no order.
fn distinct_count(values: &[String; 3]) -> usize {
    let mut seen: Vec<&str> = Vec::with_capacity(3);
    for v in values {
        if !seen.contains(&v.as_str()) {
            seen.push(v);
        }
    }
    seen.len()
}

/// Evaluate the synergy case table for three pieces' elements and
/// energies.
pub fn calculate(elements: &[String; 3], energies: &[String; 3]) -> Synergy {
    let unique_elements = distinct_count(elements);

    let categories: Vec<EnergyCategory> =
        energies.iter().map(|e| energy_category(e)).collect();
    let all_categories_match = categories[1] == categories[0] && categories[2] == categories[0];

    let (kind, level) = if unique_elements == 1 {
        (SynergyKind::PerfectHarmony, 1.0)
    } else if all_categories_match {
        (SynergyKind::EnergySync, 0.9)
    } else if categories.contains(&EnergyCategory::Chaotic)
        && categories.contains(&EnergyCategory::Passive)
    {
        (SynergyKind::InterestingTension, 0.6)
    } else if unique_elements == 3 {
        (SynergyKind::DiverseBalance, 0.7)
    } else {
        (SynergyKind::UniqueBlend, 0.75)
    };

    Synergy {
        kind,
        level,
        description: description(kind).to_string(),
    }
}
