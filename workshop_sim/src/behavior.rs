// Behavior tag sets: what a construct does when idle and when poked.
//
// Each personality kind maps to a fixed pair of idle tags and a fixed pair
// of active tags. The FIRST idle tag doubles as the cosmetic drift rule in
// `generator::update`. Constructs with synergy above 0.8 earn the
// HarmonyGlow special tag.

use crate::types::{BehaviorTag, PersonalityKind};
use serde::{Deserialize, Serialize};

/// Synergy threshold above which a construct glows.
pub const HARMONY_GLOW_THRESHOLD: f32 = 0.8;

/// Ordered behavior tag sets for one construct.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Behavior {
    /// Two tags; the first drives idle animation drift.
    pub idle: Vec<BehaviorTag>,
    /// Two tags the renderer uses for interaction animations.
    pub active: Vec<BehaviorTag>,
    /// Earned tags; currently only HarmonyGlow.
    pub special: Vec<BehaviorTag>,
}

/// Idle/active tag pairs for a personality kind.
fn tag_pairs(kind: PersonalityKind) -> ([BehaviorTag; 2], [BehaviorTag; 2]) {
    use BehaviorTag::*;
    match kind {
        PersonalityKind::Energetic => ([Bounce, Vibrate], [Spin, Jump]),
        PersonalityKind::Calm => ([Sway, Breathe], [Nod, Meditate]),
        PersonalityKind::Chaotic => ([Glitch, Flicker], [Teleport, Invert]),
        PersonalityKind::Protective => ([Scan, Patrol], [Shield, Alert]),
        PersonalityKind::Curious => ([Tilt, Peek], [Investigate, Record]),
    }
}

/// Build the behavior set for a personality kind and synergy level.
pub fn generate(kind: PersonalityKind, synergy_level: f32) -> Behavior {
    let (idle, active) = tag_pairs(kind);
    let mut special = Vec::new();
    if synergy_level > HARMONY_GLOW_THRESHOLD {
        special.push(BehaviorTag::HarmonyGlow);
    }
    Behavior {
        idle: idle.to_vec(),
        active: active.to_vec(),
        special,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use BehaviorTag::*;

    #[test]
    fn tag_pairs_per_personality() {
        let b = generate(PersonalityKind::Energetic, 0.0);
        assert_eq!(b.idle, vec![Bounce, Vibrate]);
        assert_eq!(b.active, vec![Spin, Jump]);

        let b = generate(PersonalityKind::Curious, 0.0);
        assert_eq!(b.idle, vec![Tilt, Peek]);
        assert_eq!(b.active, vec![Investigate, Record]);
    }

    #[test]
    fn harmony_glow_above_threshold() {
        assert_eq!(
            generate(PersonalityKind::Calm, 0.9).special,
            vec![HarmonyGlow]
        );
        assert_eq!(
            generate(PersonalityKind::Calm, 1.0).special,
            vec![HarmonyGlow]
        );
    }

    #[test]
    fn no_glow_at_or_below_threshold() {
        // 0.8 itself does not qualify; the rule is strictly greater.
        assert!(generate(PersonalityKind::Chaotic, 0.8).special.is_empty());
        assert!(generate(PersonalityKind::Chaotic, 0.75).special.is_empty());
        assert!(generate(PersonalityKind::Chaotic, 0.6).special.is_empty());
    }

    #[test]
    fn idle_and_active_always_two_tags() {
        for kind in PersonalityKind::ALL {
            let b = generate(kind, 0.5);
            assert_eq!(b.idle.len(), 2, "{kind:?}");
            assert_eq!(b.active.len(), 2, "{kind:?}");
        }
    }
}
