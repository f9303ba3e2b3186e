// Deterministic, portable pseudo-random number generator.
//
// Implements xoshiro256++ (Blackman & Vigna, 2019) seeded via SplitMix64.
// Hand-rolled with zero external dependencies so the workshop produces
// identical output on every platform given the same seed.
//
// This crate is the single source of randomness for the Tinker Workshop
// project: `workshop_sim` (construct generation, glitch jitter, radio
// shuffling) and `workshop_lexicon` (name word picks) both draw from it.
// No `rand`, no OS entropy, no system time.
//
// **Critical constraint: determinism.** Every method on `WorkshopRng` must
// produce identical output given the same prior state, regardless of
// platform or optimization level. The core generator is integer-only.

use serde::{Deserialize, Serialize};

/// Xoshiro256++ PRNG — the project's sole source of randomness.
///
/// The generator state derives `Serialize`/`Deserialize` so a saved
/// workshop resumes the exact random stream it left off at.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WorkshopRng {
    s: [u64; 4],
}

impl WorkshopRng {
    /// Create a new PRNG seeded from a `u64`.
    ///
    /// SplitMix64 expands the seed into the 256-bit internal state. Two
    /// instances built from the same seed produce identical sequences.
    pub fn new(seed: u64) -> Self {
        let mut sm = seed;
        Self {
            s: [
                splitmix64(&mut sm),
                splitmix64(&mut sm),
                splitmix64(&mut sm),
                splitmix64(&mut sm),
            ],
        }
    }

    /// Generate the next `u64` in the sequence.
    pub fn next_u64(&mut self) -> u64 {
        let result = (self.s[0].wrapping_add(self.s[3]))
            .rotate_left(23)
            .wrapping_add(self.s[0]);

        let t = self.s[1] << 17;

        self.s[2] ^= self.s[0];
        self.s[3] ^= self.s[1];
        self.s[1] ^= self.s[2];
        self.s[0] ^= self.s[3];

        self.s[2] ^= t;
        self.s[3] = self.s[3].rotate_left(45);

        result
    }

    /// Generate a uniform `f32` in [0, 1).
    ///
    /// The upper 24 bits of a `u64` fill the f32 mantissa, which is the
    /// full precision an f32 can represent in the unit interval.
    pub fn next_f32(&mut self) -> f32 {
        (self.next_u64() >> 40) as f32 / (1u64 << 24) as f32
    }

    /// Generate a uniform `f64` in [0, 1).
    ///
    /// The upper 53 bits of a `u64` fill the f64 mantissa (52 explicit
    /// bits + 1 implicit).
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Generate a uniform random value in `[low, high)`.
    ///
    /// Panics if `low >= high`.
    pub fn range_f32(&mut self, low: f32, high: f32) -> f32 {
        assert!(low < high, "range_f32: low must be less than high");
        low + self.next_f32() * (high - low)
    }

    /// Generate a uniform random integer in `[low, high)`.
    ///
    /// Uses rejection sampling to avoid modulo bias.
    /// Panics if `low >= high`.
    pub fn range_u64(&mut self, low: u64, high: u64) -> u64 {
        assert!(low < high, "range_u64: low must be less than high");
        let range = high - low;
        if range.is_power_of_two() {
            return low + (self.next_u64() & (range - 1));
        }
        // Rejection sampling to avoid modulo bias.
        let threshold = range.wrapping_neg() % range; // = (2^64 - range) % range
        loop {
            let r = self.next_u64();
            if r >= threshold {
                return low + (r % range);
            }
        }
    }

    /// Generate a uniform random `usize` in `[low, high)`.
    ///
    /// Used for picking entries out of word pools and message lists.
    /// Panics if `low >= high`.
    pub fn range_usize(&mut self, low: usize, high: usize) -> usize {
        self.range_u64(low as u64, high as u64) as usize
    }

    /// Return `true` with probability `p`, `false` otherwise.
    ///
    /// `p` outside [0.0, 1.0] clamps: `p <= 0.0` is always false,
    /// `p >= 1.0` is always true.
    pub fn random_bool(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }
}

/// SplitMix64 — used only for seeding xoshiro256++ from a single `u64`.
///
/// The standard recommendation from the xoshiro authors for expanding a
/// small seed into the full generator state.
fn splitmix64(state: &mut u64) -> u64 {
    *state = state.wrapping_add(0x9e37_79b9_7f4a_7c15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}
