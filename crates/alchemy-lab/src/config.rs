//! Tunable parameters for reaction resolution and mission generation.
//!
//! These values correspond to the `reaction` and `missions` keys in
//! `alchemy-config.yaml`. The [`ReactionRules`] and [`MissionRules`] structs
//! bundle every tunable so that callers (session, resolvers, tests) can
//! override defaults.

use crate::error::LabError;

/// Parameters of the local reaction roll and its rewards.
#[derive(Debug, Clone, PartialEq)]
pub struct ReactionRules {
    /// Success probability before modifiers (default: 0.85).
    pub base_success_chance: f64,

    /// Added while the stabilizer catalyst is active (default: 0.15).
    pub stabilizer_bonus: f64,

    /// Added while the core stabilizer accessory is equipped (default: 0.10).
    pub core_stabilizer_bonus: f64,

    /// Energy charged per attempt with enough inputs (default: 10).
    pub energy_cost: u32,

    /// Insight awarded for a catalog product (default: 15).
    pub recipe_insight: u32,

    /// Insight awarded for an unstable isotope (default: 5).
    pub fallback_insight: u32,

    /// Creativity awarded for an unstable isotope (default: 2).
    pub fallback_creativity: u32,

    /// Insight awarded for a failed attempt (default: 2).
    pub failure_insight: u32,
}

impl Default for ReactionRules {
    fn default() -> Self {
        Self {
            base_success_chance: 0.85,
            stabilizer_bonus: 0.15,
            core_stabilizer_bonus: 0.10,
            energy_cost: 10,
            recipe_insight: 15,
            fallback_insight: 5,
            fallback_creativity: 2,
            failure_insight: 2,
        }
    }
}

impl ReactionRules {
    /// Check that every probability lies in `[0, 1]`.
    pub fn validate(&self) -> Result<(), LabError> {
        check_probability("base_success_chance", self.base_success_chance)?;
        check_probability("stabilizer_bonus", self.stabilizer_bonus)?;
        check_probability("core_stabilizer_bonus", self.core_stabilizer_bonus)
    }
}

/// Parameters of the random mission generator.
#[derive(Debug, Clone, PartialEq)]
pub struct MissionRules {
    /// Chance a generated mission is a discovery mission (default: 0.6).
    pub discover_chance: f64,

    /// Chance an `epic` rarity target is softened to `rare` (default: 0.5).
    pub epic_reroll_chance: f64,

    /// Energy granted per completed mission (default: 20).
    pub reward_energy: u32,
}

impl Default for MissionRules {
    fn default() -> Self {
        Self {
            discover_chance: 0.6,
            epic_reroll_chance: 0.5,
            reward_energy: 20,
        }
    }
}

impl MissionRules {
    /// Check that every probability lies in `[0, 1]`.
    pub fn validate(&self) -> Result<(), LabError> {
        check_probability("discover_chance", self.discover_chance)?;
        check_probability("epic_reroll_chance", self.epic_reroll_chance)
    }
}

fn check_probability(name: &'static str, value: f64) -> Result<(), LabError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(LabError::InvalidProbability { name, value })
    }
}
