// Shared construct-naming crate.
//
// Provides the word pools and naming algorithm used by `workshop_sim` to
// name freshly built constructs. No rendering or storage dependencies.
//
// Architecture:
// - `names.rs`: Dominant-element selection and the name generator
// - `lib.rs` (this file): `Lexicon` struct — loads and queries the JSON
//   word pools
//
// The pools are loaded from `data/workshop_lexicon.json` via
// `Lexicon::from_json()` (JSON string in, typed struct out, same pattern
// as `WorkshopConfig` in the sim crate). The `default_lexicon()`
// convenience function embeds the shipped pools at compile time with
// `include_str!`.
//
// Determinism constraint: this crate is used by `workshop_sim` and must
// not introduce any non-deterministic behavior. All RNG goes through
// `workshop_prng::WorkshopRng`.

pub mod names;

pub use names::{SuffixCategory, dominant_element, generate_name};

use std::collections::BTreeMap;

/// The top-level JSON structure for the lexicon file.
#[derive(Debug, serde::Deserialize)]
struct LexiconFile {
    prefixes: BTreeMap<String, Vec<String>>,
    suffixes: BTreeMap<String, Vec<String>>,
}

/// Fallback prefix pool used when a piece carries an element the lexicon
/// has no entry for. The original always fell back to the dawn pool.
const FALLBACK_ELEMENT: &str = "dawn";

/// Loaded naming word pools with query methods.
///
/// Prefix pools are keyed by piece element (dawn, midnight, heart, ...);
/// suffix pools are keyed by `SuffixCategory`. `BTreeMap` keeps key
/// iteration deterministic, though lookups here are always by exact key.
#[derive(Debug, Clone)]
pub struct Lexicon {
    prefixes: BTreeMap<String, Vec<String>>,
    suffixes: BTreeMap<String, Vec<String>>,
}

impl Lexicon {
    /// Parse a lexicon from a JSON string.
    ///
    /// Requires a non-empty prefix pool for the fallback element and a
    /// non-empty suffix pool for every `SuffixCategory`; the naming
    /// algorithm indexes into these unconditionally.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let file: LexiconFile = serde_json::from_str(json)?;
        let lexicon = Lexicon {
            prefixes: file.prefixes,
            suffixes: file.suffixes,
        };
        if lexicon.prefixes_for(FALLBACK_ELEMENT).is_empty() {
            return Err(serde::de::Error::custom(
                "lexicon must define a non-empty fallback prefix pool",
            ));
        }
        for category in SuffixCategory::ALL {
            if lexicon.suffixes_for(category).is_empty() {
                return Err(serde::de::Error::custom(format!(
                    "lexicon must define a non-empty suffix pool for '{}'",
                    category.key()
                )));
            }
        }
        Ok(lexicon)
    }

    /// Prefix pool for an element, falling back to the dawn pool for
    /// elements the lexicon doesn't know. Unknown elements are expected
    /// input, not an error.
    pub fn prefixes_for(&self, element: &str) -> &[String] {
        self.prefixes
            .get(element)
            .filter(|pool| !pool.is_empty())
            .or_else(|| self.prefixes.get(FALLBACK_ELEMENT))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Suffix pool for a personality-derived category.
    pub fn suffixes_for(&self, category: SuffixCategory) -> &[String] {
        self.suffixes
            .get(category.key())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

impl Default for Lexicon {
    /// The embedded default pools. Lets owners hold a `#[serde(skip)]`
    /// lexicon field that repopulates itself on deserialization.
    fn default() -> Self {
        default_lexicon()
    }
}

/// Load the default lexicon embedded at compile time.
///
/// Uses `include_str!` to embed `data/workshop_lexicon.json`. Panics if
/// the embedded JSON is malformed (should never happen in a released
/// build).
pub fn default_lexicon() -> Lexicon {
    let json = include_str!("../data/workshop_lexicon.json");
    Lexicon::from_json(json).expect("embedded workshop lexicon is valid JSON")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_lexicon_loads() {
        let lexicon = default_lexicon();
        assert_eq!(lexicon.prefixes_for("dawn").len(), 5);
        assert_eq!(lexicon.suffixes_for(SuffixCategory::Balanced).len(), 4);
    }

    #[test]
    fn unknown_element_falls_back_to_dawn_pool() {
        let lexicon = default_lexicon();
        assert_eq!(
            lexicon.prefixes_for("plasma"),
            lexicon.prefixes_for("dawn")
        );
    }

    #[test]
    fn every_suffix_category_has_a_pool() {
        let lexicon = default_lexicon();
        for category in SuffixCategory::ALL {
            assert!(
                !lexicon.suffixes_for(category).is_empty(),
                "missing suffix pool for {category:?}"
            );
        }
    }

    #[test]
    fn missing_fallback_pool_is_rejected() {
        let json = r#"{
            "prefixes": { "storm": ["Rain"] },
            "suffixes": {
                "energetic": ["Sprite"], "calm": ["Sage"],
                "chaotic": ["Wisp"], "balanced": ["Friend"]
            }
        }"#;
        assert!(Lexicon::from_json(json).is_err());
    }

    #[test]
    fn missing_suffix_pool_is_rejected() {
        let json = r#"{
            "prefixes": { "dawn": ["Morning"] },
            "suffixes": { "energetic": ["Sprite"] }
        }"#;
        assert!(Lexicon::from_json(json).is_err());
    }
}
