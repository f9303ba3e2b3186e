// Construct name generator: "{prefix} {suffix}".
//
// The prefix comes from the dominant element among the three combined
// pieces (most frequent, ties broken by first appearance in input order);
// the suffix comes from the construct's personality, coarsened into a
// `SuffixCategory`. Both picks take `&mut WorkshopRng` for deterministic
// output, matching the sim's determinism constraint.
//
// Used by `workshop_sim` to name constructs at build time.
//
// Depends on `lib.rs` for `Lexicon` and the fallback rules for unknown
// elements.

use crate::Lexicon;
use workshop_prng::WorkshopRng;

/// Coarse personality grouping used to select a suffix pool.
///
/// Energetic, calm, and chaotic personalities keep their own pools;
/// every other personality maps to `Balanced`. The sim crate performs
/// that mapping — this crate only knows the four pools.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SuffixCategory {
    Energetic,
    Calm,
    Chaotic,
    Balanced,
}

impl SuffixCategory {
    pub const ALL: [SuffixCategory; 4] = [
        SuffixCategory::Energetic,
        SuffixCategory::Calm,
        SuffixCategory::Chaotic,
        SuffixCategory::Balanced,
    ];

    /// The JSON key for this category's suffix pool.
    pub fn key(self) -> &'static str {
        match self {
            SuffixCategory::Energetic => "energetic",
            SuffixCategory::Calm => "calm",
            SuffixCategory::Chaotic => "chaotic",
            SuffixCategory::Balanced => "balanced",
        }
    }
}

/// The most frequent element among the three pieces.
///
/// Ties break toward whichever element appeared first in input order, so
/// the result is fully determined by the inputs (no sort involved).
pub fn dominant_element(elements: &[String; 3]) -> &str {
    // First-seen order, with counts.
    let mut counts: Vec<(&str, u32)> = Vec::with_capacity(3);
    for element in elements {
        match counts.iter_mut().find(|(e, _)| *e == element.as_str()) {
            Some((_, n)) => *n += 1,
            None => counts.push((element, 1)),
        }
    }
    let mut best = counts[0];
    for &candidate in &counts[1..] {
        if candidate.1 > best.1 {
            best = candidate;
        }
    }
    best.0
}

/// Generate a construct name from the dominant element and personality
/// category: one uniform pick from each pool, joined with a space.
pub fn generate_name(
    lexicon: &Lexicon,
    elements: &[String; 3],
    category: SuffixCategory,
    rng: &mut WorkshopRng,
) -> String {
    let prefix_pool = lexicon.prefixes_for(dominant_element(elements));
    let prefix = &prefix_pool[rng.range_usize(0, prefix_pool.len())];

    let suffix_pool = lexicon.suffixes_for(category);
    let suffix = &suffix_pool[rng.range_usize(0, suffix_pool.len())];

    format!("{prefix} {suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::default_lexicon;

    fn elems(a: &str, b: &str, c: &str) -> [String; 3] {
        [a.to_string(), b.to_string(), c.to_string()]
    }

    #[test]
    fn dominant_element_by_count() {
        assert_eq!(dominant_element(&elems("dawn", "storm", "dawn")), "dawn");
        assert_eq!(dominant_element(&elems("neon", "neon", "neon")), "neon");
    }

    #[test]
    fn dominant_element_tie_breaks_first_seen() {
        // All distinct: every count is 1, so the first input wins.
        assert_eq!(
            dominant_element(&elems("storm", "dawn", "heart")),
            "storm"
        );
        // 1-1-1 with different order: still the first input.
        assert_eq!(
            dominant_element(&elems("heart", "storm", "dawn")),
            "heart"
        );
    }

    #[test]
    fn generate_name_deterministic() {
        let lexicon = default_lexicon();
        let elements = elems("midnight", "midnight", "storm");
        let mut rng1 = WorkshopRng::new(42);
        let mut rng2 = WorkshopRng::new(42);

        let name1 = generate_name(&lexicon, &elements, SuffixCategory::Calm, &mut rng1);
        let name2 = generate_name(&lexicon, &elements, SuffixCategory::Calm, &mut rng2);

        assert_eq!(name1, name2);
    }

    #[test]
    fn generate_name_draws_from_expected_pools() {
        let lexicon = default_lexicon();
        let elements = elems("heart", "heart", "dawn");

        for seed in 0..50 {
            let mut rng = WorkshopRng::new(seed);
            let name = generate_name(&lexicon, &elements, SuffixCategory::Chaotic, &mut rng);
            let (prefix, suffix) = name.split_once(' ').expect("name has two words");
            assert!(
                lexicon.prefixes_for("heart").iter().any(|p| p == prefix),
                "prefix '{prefix}' not in heart pool"
            );
            assert!(
                lexicon
                    .suffixes_for(SuffixCategory::Chaotic)
                    .iter()
                    .any(|s| s == suffix),
                "suffix '{suffix}' not in chaotic pool"
            );
        }
    }

    #[test]
    fn unknown_element_uses_fallback_pool_without_panicking() {
        let lexicon = default_lexicon();
        let elements = elems("plasma", "plasma", "plasma");
        let mut rng = WorkshopRng::new(9);

        let name = generate_name(&lexicon, &elements, SuffixCategory::Balanced, &mut rng);
        let (prefix, _) = name.split_once(' ').expect("name has two words");
        assert!(lexicon.prefixes_for("dawn").iter().any(|p| p == prefix));
    }

    #[test]
    fn generate_name_variety() {
        let lexicon = default_lexicon();
        let elements = elems("midnight", "golden", "neon");

        let mut names = std::collections::BTreeSet::new();
        for seed in 0..50 {
            let mut rng = WorkshopRng::new(seed);
            names.insert(generate_name(
                &lexicon,
                &elements,
                SuffixCategory::Balanced,
                &mut rng,
            ));
        }

        // 5 prefixes x 4 suffixes = 20 possible names; 50 seeds should
        // cover a healthy spread.
        assert!(
            names.len() > 8,
            "expected >8 unique names from 50 seeds, got {}",
            names.len()
        );
    }
}
