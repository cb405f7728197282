//! Runtime configuration for a game session.

use crate::rng::seed_from_time;
use crate::types::MergeRule;

/// Session settings chosen by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameConfig {
    /// Fixed RNG seed; `None` seeds from the clock at session creation
    pub seed: Option<u32>,
    pub merge_rule: MergeRule,
}

impl GameConfig {
    pub fn with_seed(seed: u32) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    pub fn merge_rule(mut self, rule: MergeRule) -> Self {
        self.merge_rule = rule;
        self
    }

    /// The configured seed, or a fresh clock-derived one
    pub fn resolve_seed(&self) -> u32 {
        self.seed.unwrap_or_else(seed_from_time)
    }
}
