use crate::config::{
    DEFAULT_FOOD_REWARD, DEFAULT_MIN_SPEED_MS, DEFAULT_SPEED_MILESTONE, DEFAULT_SPEED_STEP_MS,
};

/// Score and tick interval after one food was eaten.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct FoodReward {
    pub score: u32,
    pub speed_ms: u64,
    /// Set when `speed_ms` differs from the interval before the food; the
    /// tick driver must be re-armed.
    pub speed_changed: bool,
}

/// Constants of the score/speed ramp.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct SpeedRules {
    pub food_reward: u32,
    pub milestone: u32,
    pub step_ms: u64,
    pub min_speed_ms: u64,
}

impl Default for SpeedRules {
    fn default() -> Self {
        Self {
            food_reward: DEFAULT_FOOD_REWARD,
            milestone: DEFAULT_SPEED_MILESTONE,
            step_ms: DEFAULT_SPEED_STEP_MS,
            min_speed_ms: DEFAULT_MIN_SPEED_MS,
        }
    }
}

impl SpeedRules {
    /// Applies one food to `score` and `speed_ms`.
    ///
    /// The milestone test uses the score after the reward is added. Once the
    /// interval reaches the floor, further milestones leave it unchanged.
    #[must_use]
    pub fn on_food_eaten(self, score: u32, speed_ms: u64) -> FoodReward {
        let score = score.saturating_add(self.food_reward);
        let next_speed = if self.milestone != 0 && score % self.milestone == 0 {
            speed_ms.saturating_sub(self.step_ms).max(self.min_speed_ms)
        } else {
            speed_ms
        };

        FoodReward {
            score,
            speed_ms: next_speed,
            speed_changed: next_speed != speed_ms,
        }
    }
}

/// Applies one food with the default reward and speed ramp.
#[must_use]
pub fn on_food_eaten(score: u32, speed_ms: u64) -> FoodReward {
    SpeedRules::default().on_food_eaten(score, speed_ms)
}
