// workshop_sim — pure Rust simulation library.
//
// This crate contains the simulation core of the Tinker Workshop idle toy:
// the procedural construct generator, the piece catalog, the growing plant,
// the radio message cycler, and the top-level save/load state. It has zero
// rendering, audio, or browser dependencies and runs fully headless.
//
// Module overview:
// - `generator.rs`:   ConstructGenerator — the three-pieces-in, one-construct-out
//                     pipeline, shelf layout, and per-frame cosmetic animation.
// - `synergy.rs`:     Element/energy compatibility scoring (the synergy case table).
// - `personality.rs`: Energy-weighted personality profile + trait lines.
// - `appearance.rs`:  Color blending, shape, size, and glow from synergy.
// - `behavior.rs`:    Idle/active/special behavior tag sets per personality.
// - `message.rs`:     Flavor message assembly ("This construct seems to be ...").
// - `color.rs`:       #RRGGBB parsing, formatting, and channel-mean blending.
// - `piece.rs`:       Piece input record + the built-in piece catalog.
// - `plant.rs`:       The waterable plant and its growth thresholds.
// - `radio.rs`:       Fixed message pool with unheard-first cycling.
// - `config.rs`:      WorkshopConfig — shelf geometry and tunable limits.
// - `state.rs`:       WorkshopState — owns everything above, JSON save/load.
// - `types.rs`:       ConstructId, Vec2, and the shared enums.
// - `prng`:           Re-exported from `workshop_prng` — xoshiro256++ with
//                     SplitMix64 seeding.
//
// Rendering, drag-and-drop input, audio, and the storage backend are
// external collaborators: they read the construct collection, feed pieces
// in, and persist the JSON this crate produces.
//
// **Critical constraint: determinism.** Given the same seed, the same piece
// sequence, and the same timestamps, the workshop produces identical
// constructs. All randomness comes from a seeded xoshiro256++ PRNG
// (re-exported from `workshop_prng`). No system time, no OS entropy.
// Use `BTreeMap` for keyed collections.

pub mod appearance;
pub mod behavior;
pub mod color;
pub mod config;
pub mod generator;
pub mod message;
pub mod personality;
pub mod piece;
pub mod plant;
pub use workshop_prng as prng;
pub mod radio;
pub mod state;
pub mod synergy;
pub mod types;
