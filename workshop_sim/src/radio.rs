// The workshop radio: cycles through a fixed pool of text messages.
//
// Picks uniformly among messages the player hasn't heard recently. When
// the whole pool has been heard, the heard list resets and the next pick
// draws from the full pool again (that reset pick is not recorded, same
// as the original). The heard history is capped; the oldest entry falls
// off first.
//
// Playback, timers, and static effects are the UI's concern — this module
// only decides which line comes next.

use crate::prng::WorkshopRng;
use serde::{Deserialize, Serialize};

/// The workshop's ambient personality lines.
pub const WORKSHOP_MESSAGES: [&str; 10] = [
    "This space exists because friendship needed it to",
    "Every construct remembers being built",
    "The workshop missed you",
    "Something's different today... in a good way",
    "The radio picks up signals from parallel workshops",
    "Constructs talk to each other when you're away",
    "This is a third space, neither here nor there",
    "The plant is listening",
    "Digital spaces can hold real feelings",
    "The workshop is learning your patterns",
];

/// Radio state: which messages the player has heard recently.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Radio {
    heard: Vec<String>,
}

impl Radio {
    /// Messages heard since the last pool reset, oldest first.
    pub fn heard(&self) -> &[String] {
        &self.heard
    }

    /// Pick the next message from `pool`, preferring unheard ones.
    /// `history_cap` bounds the heard list. Returns `None` only for an
    /// empty pool.
    pub fn next_message(
        &mut self,
        pool: &[&str],
        history_cap: usize,
        rng: &mut WorkshopRng,
    ) -> Option<String> {
        if pool.is_empty() {
            return None;
        }

        let unheard: Vec<&str> = pool
            .iter()
            .copied()
            .filter(|m| !self.heard.iter().any(|h| h == m))
            .collect();

        if unheard.is_empty() {
            // Everything heard: start over with a fresh pick from the
            // full pool, without recording it.
            self.heard.clear();
            return Some(pool[rng.range_usize(0, pool.len())].to_string());
        }

        let message = unheard[rng.range_usize(0, unheard.len())].to_string();
        self.heard.push(message.clone());
        if self.heard.len() > history_cap {
            self.heard.remove(0);
        }
        Some(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exhausts_pool_before_repeating() {
        let pool = ["a", "b", "c", "d"];
        let mut radio = Radio::default();
        let mut rng = WorkshopRng::new(42);

        let mut seen = std::collections::BTreeSet::new();
        for _ in 0..4 {
            let msg = radio.next_message(&pool, 10, &mut rng).unwrap();
            assert!(seen.insert(msg), "repeated a message before exhaustion");
        }
        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn resets_after_exhaustion() {
        let pool = ["a", "b"];
        let mut radio = Radio::default();
        let mut rng = WorkshopRng::new(7);

        radio.next_message(&pool, 10, &mut rng).unwrap();
        radio.next_message(&pool, 10, &mut rng).unwrap();
        assert_eq!(radio.heard().len(), 2);

        // Third pick resets the history and still returns something.
        let msg = radio.next_message(&pool, 10, &mut rng).unwrap();
        assert!(pool.contains(&msg.as_str()));
        assert!(radio.heard().is_empty());
    }

    #[test]
    fn history_is_capped() {
        let pool: Vec<String> = (0..20).map(|i| format!("m{i}")).collect();
        let pool_refs: Vec<&str> = pool.iter().map(String::as_str).collect();
        let mut radio = Radio::default();
        let mut rng = WorkshopRng::new(3);

        for _ in 0..15 {
            radio.next_message(&pool_refs, 10, &mut rng).unwrap();
        }
        assert_eq!(radio.heard().len(), 10);
    }

    #[test]
    fn empty_pool_yields_nothing() {
        let mut radio = Radio::default();
        let mut rng = WorkshopRng::new(1);
        assert_eq!(radio.next_message(&[], 10, &mut rng), None);
    }

    #[test]
    fn deterministic_per_seed() {
        let mut a = Radio::default();
        let mut b = Radio::default();
        let mut rng_a = WorkshopRng::new(42);
        let mut rng_b = WorkshopRng::new(42);
        let pool: Vec<&str> = WORKSHOP_MESSAGES.to_vec();

        for _ in 0..12 {
            assert_eq!(
                a.next_message(&pool, 10, &mut rng_a),
                b.next_message(&pool, 10, &mut rng_b)
            );
        }
    }
}
