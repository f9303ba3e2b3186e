// ConstructGenerator — the heart of the workshop.
//
// Given three pieces, runs the generation pipeline in a fixed order, each
// step pure given the prior step's output:
//
//   synergy -> personality -> name -> appearance -> behavior -> message
//   -> id / shelf position / bookkeeping
//
// then appends the finished construct to the owned collection and returns
// it. The append happens only after every field is computed — a failed
// generation never partially mutates the collection or advances the id
// counter.
//
// The generator owns exactly two pieces of state: the id counter and the
// ordered construct collection. Everything else (lexicon, config, RNG,
// timestamp) is passed in by the caller, so the whole pipeline is
// deterministic given its inputs.
//
// `update` applies per-frame cosmetic drift (position/rotation wobble)
// driven by each construct's first idle behavior tag. It never touches
// identity fields.
//
// See also: `synergy.rs`, `personality.rs`, `appearance.rs`,
// `behavior.rs`, `message.rs` for the pipeline steps, `state.rs` for the
// owning `WorkshopState`.

use crate::appearance::{self, Appearance};
use crate::behavior::{self, Behavior};
use crate::config::{ShelfConfig, WorkshopConfig};
use crate::message;
use crate::personality::{self, Personality};
use crate::piece::Piece;
use crate::prng::WorkshopRng;
use crate::synergy::{self, Synergy};
use crate::types::{BehaviorTag, ConstructId, PersonalityKind, Vec2};
use serde::{Deserialize, Serialize};
use workshop_lexicon::{Lexicon, SuffixCategory, generate_name};

/// Why a generation attempt was rejected. The input contract is narrow:
/// exactly three pieces, each with every field populated. Unknown element
/// or energy *values* are fine — only absent fields fail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerateError {
    #[error("expected exactly 3 pieces, got {got}")]
    WrongPieceCount { got: usize },
    #[error("piece {index} is missing its {field} field")]
    MissingField { index: usize, field: &'static str },
}

/// A generated construct: the workshop's primary entity.
///
/// Static after creation except for the cosmetic fields (`position`
/// drift, `scale`, `rotation`, `animation_frame`) touched by `update`,
/// and `name`, which the naming UI may overwrite via `rename`. The
/// cosmetic fields are not persisted: a reloaded construct stands still
/// at its shelf slot until `update` runs again.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Construct {
    pub id: ConstructId,
    /// Catalog kinds of the three consumed pieces, in input order.
    pub pieces: [String; 3],
    /// Element tags of the three consumed pieces, in input order.
    pub elements: [String; 3],
    pub name: String,
    pub personality: Personality,
    pub synergy: Synergy,
    pub appearance: Appearance,
    pub behavior: Behavior,
    pub message: String,
    /// Caller-supplied creation timestamp, milliseconds.
    pub created_ms: u64,
    /// Shelf slot assigned at creation; drifts cosmetically under `update`.
    pub position: Vec2,
    #[serde(skip, default = "default_scale")]
    pub scale: f32,
    #[serde(skip)]
    pub rotation: f32,
    #[serde(skip)]
    pub animation_frame: f32,
}

fn default_scale() -> f32 {
    1.0
}

/// The generator: an id counter plus the ordered construct collection.
///
/// Append-only from this side — no delete operation exists. Whoever owns
/// the generator decides when (if ever) the collection is cleared.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ConstructGenerator {
    next_id: u64,
    constructs: Vec<Construct>,
}

impl ConstructGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// All constructs in creation order, for read-only iteration by the
    /// renderer and persistence collaborators.
    pub fn constructs(&self) -> &[Construct] {
        &self.constructs
    }

    pub fn len(&self) -> usize {
        self.constructs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constructs.is_empty()
    }

    pub fn get(&self, id: ConstructId) -> Option<&Construct> {
        self.constructs.iter().find(|c| c.id == id)
    }

    /// Build one construct from exactly three pieces.
    ///
    /// `now_ms` is the caller's clock — the generator never reads wall
    /// time itself. On success the construct is appended and a reference
    /// to the stored record is returned; on error nothing changes.
    pub fn generate(
        &mut self,
        pieces: &[Piece],
        now_ms: u64,
        lexicon: &Lexicon,
        config: &WorkshopConfig,
        rng: &mut WorkshopRng,
    ) -> Result<&Construct, GenerateError> {
        if pieces.len() != 3 {
            return Err(GenerateError::WrongPieceCount { got: pieces.len() });
        }
        for (index, piece) in pieces.iter().enumerate() {
            for (field, value) in [
                ("element", &piece.element),
                ("energy", &piece.energy),
                ("color", &piece.color),
                ("kind", &piece.kind),
            ] {
                if value.is_empty() {
                    return Err(GenerateError::MissingField { index, field });
                }
            }
        }

        let kinds = [
            pieces[0].kind.clone(),
            pieces[1].kind.clone(),
            pieces[2].kind.clone(),
        ];
        let elements = [
            pieces[0].element.clone(),
            pieces[1].element.clone(),
            pieces[2].element.clone(),
        ];
        let energies = [
            pieces[0].energy.clone(),
            pieces[1].energy.clone(),
            pieces[2].energy.clone(),
        ];
        let colors = [
            pieces[0].color.clone(),
            pieces[1].color.clone(),
            pieces[2].color.clone(),
        ];

        let synergy = synergy::calculate(&elements, &energies);
        let personality = personality::generate(&energies, rng);
        let name = generate_name(
            lexicon,
            &elements,
            suffix_category(personality.kind),
            rng,
        );
        let appearance = appearance::generate(&colors, synergy.level, config);
        let behavior = behavior::generate(personality.kind, synergy.level);
        let msg = message::generate(&personality.trait_line, &elements, rng);

        let position = self.next_shelf_position(&config.shelf);
        self.next_id += 1;

        self.constructs.push(Construct {
            id: ConstructId(self.next_id),
            pieces: kinds,
            elements,
            name,
            personality,
            synergy,
            appearance,
            behavior,
            message: msg,
            created_ms: now_ms,
            position,
            scale: 1.0,
            rotation: 0.0,
            animation_frame: 0.0,
        });
        let index = self.constructs.len() - 1;
        Ok(&self.constructs[index])
    }

    /// The shelf slot the next construct will occupy: a pure function of
    /// the current collection size and the shelf geometry. Positions past
    /// the nominal shelf capacity continue the same arithmetic — they may
    /// overlap or overflow visually, which is accepted, not an error.
    pub fn next_shelf_position(&self, shelf: &ShelfConfig) -> Vec2 {
        let index = self.constructs.len() as u32;
        let row = index / shelf.cols;
        let col = index % shelf.cols;
        Vec2::new(
            shelf.x + col as f32 * (shelf.width / shelf.cols as f32) + shelf.padding,
            shelf.y + row as f32 * shelf.row_height + shelf.padding,
        )
    }

    /// Overwrite a construct's name, for the naming UI. Validation is the
    /// collaborator's job. Returns false if the id is unknown.
    pub fn rename(&mut self, id: ConstructId, name: impl Into<String>) -> bool {
        match self.constructs.iter_mut().find(|c| c.id == id) {
            Some(c) => {
                c.name = name.into();
                true
            }
            None => false,
        }
    }

    /// Advance every construct's cosmetic animation by `elapsed_ms`.
    ///
    /// Each construct gets exactly one drift rule, keyed by its first
    /// idle tag. Drift never changes identity, synergy, or relationships.
    pub fn update(&mut self, elapsed_ms: f32, rng: &mut WorkshopRng) {
        for construct in &mut self.constructs {
            construct.animation_frame += elapsed_ms * 0.001;
            let frame = construct.animation_frame;
            match construct.behavior.idle.first() {
                Some(BehaviorTag::Bounce) => {
                    construct.position.y += (frame * 3.0).sin() * 0.5;
                }
                Some(BehaviorTag::Sway) => {
                    construct.rotation = (frame * 2.0).sin() * 0.1;
                }
                Some(BehaviorTag::Vibrate) => {
                    construct.position.x += (frame * 10.0).sin() * 0.2;
                }
                Some(BehaviorTag::Glitch) => {
                    if rng.random_bool(0.01) {
                        construct.position.x += rng.range_f32(-1.0, 1.0);
                    }
                }
                _ => {}
            }
        }
    }
}

/// Suffix pool category for a personality: energetic, calm, and chaotic
/// keep their own pools; protective and curious constructs get balanced
/// suffixes.
fn suffix_category(kind: PersonalityKind) -> SuffixCategory {
    match kind {
        PersonalityKind::Energetic => SuffixCategory::Energetic,
        PersonalityKind::Calm => SuffixCategory::Calm,
        PersonalityKind::Chaotic => SuffixCategory::Chaotic,
        _ => SuffixCategory::Balanced,
    }
}
