//! Configuration loading and typed config structures for the lab.
//!
//! The canonical configuration lives in `alchemy-config.yaml` at the project
//! root. This module defines strongly-typed structs that mirror the YAML
//! structure, and provides a loader that reads and validates the file.
//! Every key is optional; a missing key takes the base-game value.

use std::path::Path;

use alchemy_lab::{LabError, MissionRules, ReactionRules};
use serde::Deserialize;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// A value parsed but is outside its allowed range.
    #[error("invalid config value: {reason}")]
    Invalid {
        /// Description of the offending value.
        reason: String,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

impl From<LabError> for ConfigError {
    fn from(source: LabError) -> Self {
        Self::Invalid {
            reason: source.to_string(),
        }
    }
}

/// Top-level game configuration.
///
/// Mirrors the structure of `alchemy-config.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GameConfig {
    /// Starting resources, furnace size and timing.
    #[serde(default)]
    pub lab: LabConfig,

    /// Local reaction roll and rewards.
    #[serde(default)]
    pub reaction: ReactionConfig,

    /// Mission generator.
    #[serde(default)]
    pub missions: MissionConfig,

    /// Which resolver backs the lab.
    #[serde(default)]
    pub resolver: ResolverConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl GameConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Yaml`] if the content is not valid YAML, or
    /// [`ConfigError::Invalid`] if a value is out of range.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse and validate configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML, or
    /// [`ConfigError::Invalid`] if a value is out of range.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        // An empty document deserializes as unit, not as an empty map.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the engine cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.lab.max_input_slots < 2 {
            return Err(ConfigError::Invalid {
                reason: format!(
                    "lab.max_input_slots must be at least 2, got {}",
                    self.lab.max_input_slots
                ),
            });
        }
        self.reaction_rules().validate()?;
        self.mission_rules().validate()?;
        Ok(())
    }

    /// Reaction tunables in the form the resolver consumes.
    pub const fn reaction_rules(&self) -> ReactionRules {
        let r = &self.reaction;
        ReactionRules {
            base_success_chance: r.base_success_chance,
            stabilizer_bonus: r.stabilizer_bonus,
            core_stabilizer_bonus: r.core_stabilizer_bonus,
            energy_cost: r.energy_cost,
            recipe_insight: r.recipe_insight,
            fallback_insight: r.fallback_insight,
            fallback_creativity: r.fallback_creativity,
            failure_insight: r.failure_insight,
        }
    }

    /// Mission tunables in the form the generator consumes.
    pub const fn mission_rules(&self) -> MissionRules {
        MissionRules {
            discover_chance: self.missions.discover_chance,
            epic_reroll_chance: self.missions.epic_reroll_chance,
            reward_energy: self.missions.reward_energy,
        }
    }
}

/// Lab-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LabConfig {
    /// Random seed for reproducible runs. Absent means OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Energy at game start.
    #[serde(default = "default_starting_energy")]
    pub starting_energy: u32,

    /// Insight at game start.
    #[serde(default)]
    pub starting_insight: u32,

    /// Creativity at game start.
    #[serde(default = "default_starting_creativity")]
    pub starting_creativity: u32,

    /// Furnace slot count. At least 2.
    #[serde(default = "default_max_input_slots")]
    pub max_input_slots: usize,

    /// Presentation delay between resolution and outcome application.
    #[serde(default = "default_processing_delay_ms")]
    pub processing_delay_ms: u64,
}

/// Reaction roll configuration. See [`ReactionRules`] for field meanings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReactionConfig {
    /// Success probability before modifiers.
    #[serde(default = "default_base_success_chance")]
    pub base_success_chance: f64,

    /// Bonus while the stabilizer catalyst is active.
    #[serde(default = "default_stabilizer_bonus")]
    pub stabilizer_bonus: f64,

    /// Bonus while the core stabilizer accessory is equipped.
    #[serde(default = "default_core_stabilizer_bonus")]
    pub core_stabilizer_bonus: f64,

    /// Energy charged per attempt.
    #[serde(default = "default_energy_cost")]
    pub energy_cost: u32,

    /// Insight for a catalog product.
    #[serde(default = "default_recipe_insight")]
    pub recipe_insight: u32,

    /// Insight for an unstable isotope.
    #[serde(default = "default_fallback_insight")]
    pub fallback_insight: u32,

    /// Creativity for an unstable isotope.
    #[serde(default = "default_fallback_creativity")]
    pub fallback_creativity: u32,

    /// Insight for a failed attempt.
    #[serde(default = "default_failure_insight")]
    pub failure_insight: u32,
}

/// Mission generator configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MissionConfig {
    /// Chance a generated mission is a discovery mission.
    #[serde(default = "default_discover_chance")]
    pub discover_chance: f64,

    /// Chance an epic target is softened to rare.
    #[serde(default = "default_epic_reroll_chance")]
    pub epic_reroll_chance: f64,

    /// Energy granted per completed mission.
    #[serde(default = "default_reward_energy")]
    pub reward_energy: u32,
}

/// Which resolver implementation to run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolverMode {
    /// Curated catalog plus a local dice roll.
    #[default]
    Local,
    /// External generative service.
    Remote,
}

/// Resolver selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ResolverConfig {
    /// Resolver implementation.
    #[serde(default)]
    pub mode: ResolverMode,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
}

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

impl Default for LabConfig {
    fn default() -> Self {
        Self {
            seed: None,
            starting_energy: default_starting_energy(),
            starting_insight: 0,
            starting_creativity: default_starting_creativity(),
            max_input_slots: default_max_input_slots(),
            processing_delay_ms: default_processing_delay_ms(),
        }
    }
}

impl Default for ReactionConfig {
    fn default() -> Self {
        Self {
            base_success_chance: default_base_success_chance(),
            stabilizer_bonus: default_stabilizer_bonus(),
            core_stabilizer_bonus: default_core_stabilizer_bonus(),
            energy_cost: default_energy_cost(),
            recipe_insight: default_recipe_insight(),
            fallback_insight: default_fallback_insight(),
            fallback_creativity: default_fallback_creativity(),
            failure_insight: default_failure_insight(),
        }
    }
}

impl Default for MissionConfig {
    fn default() -> Self {
        Self {
            discover_chance: default_discover_chance(),
            epic_reroll_chance: default_epic_reroll_chance(),
            reward_energy: default_reward_energy(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

const fn default_starting_energy() -> u32 {
    100
}

const fn default_starting_creativity() -> u32 {
    30
}

const fn default_max_input_slots() -> usize {
    2
}

const fn default_processing_delay_ms() -> u64 {
    2500
}

const fn default_base_success_chance() -> f64 {
    0.85
}

const fn default_stabilizer_bonus() -> f64 {
    0.15
}

const fn default_core_stabilizer_bonus() -> f64 {
    0.10
}

const fn default_energy_cost() -> u32 {
    10
}

const fn default_recipe_insight() -> u32 {
    15
}

const fn default_fallback_insight() -> u32 {
    5
}

const fn default_fallback_creativity() -> u32 {
    2
}

const fn default_failure_insight() -> u32 {
    2
}

const fn default_discover_chance() -> f64 {
    0.6
}

const fn default_epic_reroll_chance() -> f64 {
    0.5
}

const fn default_reward_energy() -> u32 {
    20
}

fn default_log_level() -> String {
    String::from("info")
}
