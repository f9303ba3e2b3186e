// The workshop plant: watered by the player, grows in stages.
//
// Growth rule: the plant advances to stage `s + 1` once its lifetime water
// count reaches `(s + 1) * 3`, so stage 1 costs 3 waterings, stage 2 costs
// 6 total, stage 3 costs 9 total. The final stage is `stages - 1` from
// config; extra water past that is appreciated but does nothing.

use serde::{Deserialize, Serialize};

/// Plant state: current growth stage and lifetime water count.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plant {
    pub stage: u32,
    pub water_count: u32,
}

/// What one watering did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WaterOutcome {
    pub grew: bool,
    pub stage: u32,
    pub message: &'static str,
}

impl Plant {
    /// Water the plant once. `stages` is the configured stage count; the
    /// plant never grows past index `stages - 1`.
    pub fn water(&mut self, stages: u32) -> WaterOutcome {
        self.water_count += 1;
        let final_stage = stages.saturating_sub(1);
        if self.stage < final_stage && self.water_count >= (self.stage + 1) * 3 {
            self.stage += 1;
            return WaterOutcome {
                grew: true,
                stage: self.stage,
                message: "The plant seems happy and grew a little!",
            };
        }
        WaterOutcome {
            grew: false,
            stage: self.stage,
            message: "The plant appreciates the water.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grows_at_the_third_watering() {
        let mut plant = Plant::default();
        assert!(!plant.water(4).grew);
        assert!(!plant.water(4).grew);
        let outcome = plant.water(4);
        assert!(outcome.grew);
        assert_eq!(outcome.stage, 1);
        assert_eq!(outcome.message, "The plant seems happy and grew a little!");
    }

    #[test]
    fn stage_two_needs_six_total_waterings() {
        let mut plant = Plant::default();
        for _ in 0..5 {
            plant.water(4);
        }
        assert_eq!(plant.stage, 1);
        let outcome = plant.water(4);
        assert!(outcome.grew);
        assert_eq!(plant.stage, 2);
    }

    #[test]
    fn never_grows_past_final_stage() {
        let mut plant = Plant::default();
        for _ in 0..100 {
            plant.water(4);
        }
        assert_eq!(plant.stage, 3);
        let outcome = plant.water(4);
        assert!(!outcome.grew);
        assert_eq!(outcome.message, "The plant appreciates the water.");
        assert_eq!(plant.water_count, 101);
    }

    #[test]
    fn single_stage_plant_never_grows() {
        let mut plant = Plant::default();
        for _ in 0..10 {
            assert!(!plant.water(1).grew);
        }
        assert_eq!(plant.stage, 0);
    }
}
