// Top-level workshop state and save/load.
//
// `WorkshopState` is the single source of truth for a play session. It
// owns the PRNG, the config, the construct generator, the plant, the
// radio, and the usage stats, and it wires them together: callers build
// constructs, water the plant, and click the radio through methods here
// rather than reaching into the parts.
//
// ## Save/load
//
// `WorkshopState` derives `Serialize`/`Deserialize` via serde. The word
// lexicon is `#[serde(skip)]` and repopulates from the embedded default
// on deserialization. Construct cosmetic fields (`scale`, `rotation`,
// `animation_frame`) are likewise skipped, so a loaded shelf stands still
// until the first `update`. Convenience methods `to_json()`/`from_json()`
// handle the full cycle. The persistence collaborator decides where the
// JSON goes and when auto-saves happen.
//
// See also: `generator.rs` for the generation pipeline, `config.rs` for
// `WorkshopConfig`, `plant.rs`, `radio.rs`.
//
// **Critical constraint: determinism.** The PRNG lives here and is
// serialized with everything else, so a saved session replays its random
// stream exactly. All timestamps come in from the caller.

use crate::config::WorkshopConfig;
use crate::generator::{Construct, ConstructGenerator, GenerateError};
use crate::piece::Piece;
use crate::plant::{Plant, WaterOutcome};
use crate::prng::WorkshopRng;
use crate::radio::{Radio, WORKSHOP_MESSAGES};
use serde::{Deserialize, Serialize};
use workshop_lexicon::Lexicon;

/// Lifetime usage counters, kept for flavor and unlock checks.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub constructs_built: u64,
    pub radio_clicks: u64,
    pub plant_waterings: u64,
}

/// The whole workshop: everything a session needs to run and persist.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WorkshopState {
    /// The session's deterministic PRNG.
    pub rng: WorkshopRng,

    /// Workshop configuration (immutable after initialization).
    pub config: WorkshopConfig,

    /// The construct generator and its shelf collection.
    pub generator: ConstructGenerator,

    pub plant: Plant,

    pub radio: Radio,

    pub stats: Stats,

    /// Naming word pools. Rebuilt from the embedded default on load.
    #[serde(skip)]
    lexicon: Lexicon,
}

impl WorkshopState {
    /// Create a new workshop with default config and the given seed.
    pub fn new(seed: u64) -> Self {
        Self::with_config(seed, WorkshopConfig::default())
    }

    /// Create a new workshop with the given seed and config.
    pub fn with_config(seed: u64, config: WorkshopConfig) -> Self {
        Self {
            rng: WorkshopRng::new(seed),
            config,
            generator: ConstructGenerator::new(),
            plant: Plant::default(),
            radio: Radio::default(),
            stats: Stats::default(),
            lexicon: Lexicon::default(),
        }
    }

    /// Combine three pieces into a construct. `now_ms` is the caller's
    /// clock reading, stored as the construct's creation time.
    pub fn build_construct(
        &mut self,
        pieces: &[Piece],
        now_ms: u64,
    ) -> Result<&Construct, GenerateError> {
        self.generator
            .generate(pieces, now_ms, &self.lexicon, &self.config, &mut self.rng)?;
        self.stats.constructs_built += 1;
        let index = self.generator.len() - 1;
        Ok(&self.generator.constructs()[index])
    }

    /// Water the plant once.
    pub fn water_plant(&mut self) -> WaterOutcome {
        self.stats.plant_waterings += 1;
        self.plant.water(self.config.plant_stages)
    }

    /// Click the radio: returns the next message line.
    pub fn click_radio(&mut self) -> Option<String> {
        self.stats.radio_clicks += 1;
        self.radio
            .next_message(&WORKSHOP_MESSAGES, self.config.radio_history_cap, &mut self.rng)
    }

    /// Advance cosmetic animation for every construct on the shelf.
    pub fn update(&mut self, elapsed_ms: f32) {
        self.generator.update(elapsed_ms, &mut self.rng);
    }

    /// Serialize the full state to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserialize a state from JSON. The lexicon repopulates itself; no
    /// further rebuilding is required.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
