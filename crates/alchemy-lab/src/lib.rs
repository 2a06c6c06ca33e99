//! Static tables and pure rules for the Neon Alchemy lab.
//!
//! Everything here operates on plain data without touching I/O or async. It
//! sits between `alchemy-types` (which defines the data structures) and
//! `alchemy-core` (which resolves reactions and drives the session).
//!
//! # Modules
//!
//! - [`catalog`] -- Recipe catalog with canonical keys ([`RecipeCatalog`])
//! - [`config`] -- Reaction and mission tunables ([`ReactionRules`], [`MissionRules`])
//! - [`elements`] -- The four starting elements
//! - [`error`] -- Error types for lab lookups ([`LabError`])
//! - [`inventory`] -- Set-like inventory operations keyed by element id
//! - [`missions`] -- Starting missions, random generation, progress tracking
//! - [`modifiers`] -- Catalyst/accessory display data and equip cycling
//! - [`shop`] -- The shop listing

pub mod catalog;
pub mod config;
pub mod elements;
pub mod error;
pub mod inventory;
pub mod missions;
pub mod modifiers;
pub mod shop;

// Re-export primary types at crate root for convenience.
pub use catalog::{Recipe, RecipeCatalog, canonical_key, creativity_reward};
pub use config::{MissionRules, ReactionRules};
pub use elements::starting_elements;
pub use error::LabError;
pub use missions::{advance, generate_mission, is_complete, starting_missions};
pub use modifiers::{ModifierInfo, accessory_info, catalyst_info, cycle_next};
pub use shop::{find_item, shop_items};
