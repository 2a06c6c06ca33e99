//! Core structs for the Neon Alchemy engine.
//!
//! Covers elements, resources, missions, reaction outcomes, shop listings and
//! the complete [`GameState`] the presentation layer renders.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{
    AccessoryKind, CatalystKind, Currency, ElementCategory, LabPhase, Rarity, VisualEffect,
};
use crate::ids::{ElementId, MissionId, ShopItemId};

// ---------------------------------------------------------------------------
// Element
// ---------------------------------------------------------------------------

/// A discovered or discoverable substance. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Element {
    /// Unique identifier; inventory membership is decided by this alone.
    pub id: ElementId,
    /// Display name.
    pub name: String,
    /// Short chemical-style symbol.
    pub symbol: String,
    /// Informational atomic number; products sum their inputs.
    pub atomic_number: u32,
    /// Structural category.
    pub category: ElementCategory,
    /// Quality tier.
    pub rarity: Rarity,
    /// Free-text flavour description.
    pub description: String,
}

// ---------------------------------------------------------------------------
// Resources
// ---------------------------------------------------------------------------

/// The three player counters. All are non-negative by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Resources {
    /// Spent on every reaction attempt; refilled by missions and the shop.
    pub energy: u32,
    /// Research points; passed to the resolver as a quality signal.
    pub insight: u32,
    /// Main shop currency.
    pub creativity: u32,
}

impl Resources {
    /// Current balance of the given currency.
    pub const fn balance(&self, currency: Currency) -> u32 {
        match currency {
            Currency::Creativity => self.creativity,
            Currency::Insight => self.insight,
        }
    }

    /// Return a copy with `amount` of `currency` deducted, or `None` if the
    /// balance is insufficient.
    pub fn spend(self, currency: Currency, amount: u32) -> Option<Self> {
        let mut next = self;
        match currency {
            Currency::Creativity => next.creativity = self.creativity.checked_sub(amount)?,
            Currency::Insight => next.insight = self.insight.checked_sub(amount)?,
        }
        Some(next)
    }
}

// ---------------------------------------------------------------------------
// Missions
// ---------------------------------------------------------------------------

/// Completion condition of a mission, with its progress counter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum MissionCondition {
    /// Discover `target` previously unowned elements.
    DiscoverCount {
        /// Discoveries required.
        target: u32,
        /// Discoveries so far.
        current: u32,
    },
    /// Discover one previously unowned element of `target` rarity or better.
    FindRarity {
        /// Minimum rarity tier.
        target: Rarity,
        /// Qualifying discoveries so far.
        current: u32,
    },
}

impl MissionCondition {
    /// Progress required for completion.
    pub const fn required(&self) -> u32 {
        match self {
            Self::DiscoverCount { target, .. } => *target,
            Self::FindRarity { .. } => 1,
        }
    }

    /// Progress made so far.
    pub const fn current(&self) -> u32 {
        match self {
            Self::DiscoverCount { current, .. } | Self::FindRarity { current, .. } => *current,
        }
    }
}

/// A quest that pays out energy when its condition is met.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Mission {
    /// Unique identifier.
    pub id: MissionId,
    /// Short title.
    pub title: String,
    /// What the player has to do.
    pub description: String,
    /// Completion condition and progress.
    pub condition: MissionCondition,
    /// Energy granted on completion.
    pub reward_energy: u32,
}

// ---------------------------------------------------------------------------
// Reaction outcome
// ---------------------------------------------------------------------------

/// The resolver's complete description of one reaction attempt.
///
/// Transient: consumed exactly once by outcome application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ReactionOutcome {
    /// Whether the reaction produced anything.
    pub success: bool,
    /// The produced element, if any.
    pub product: Option<Element>,
    /// Human-readable result line.
    pub message: String,
    /// Insight awarded.
    pub insight_gained: u32,
    /// Creativity awarded.
    pub creativity_gained: u32,
    /// Energy charged for the attempt.
    pub energy_cost: u32,
    /// Furnace glow color override.
    pub visual_color: Option<String>,
    /// Furnace animation category.
    pub visual_effect: Option<VisualEffect>,
    /// Whether the resolver considers the product a discovery.
    pub is_new_discovery: bool,
    /// Rarity of the product, if any.
    pub rarity: Option<Rarity>,
}

impl ReactionOutcome {
    /// Visual classification the presentation layer should render.
    ///
    /// The rarity color wins over the resolver's own color; the effect is
    /// only shown for successful reactions.
    pub fn visual_signal(&self) -> VisualSignal {
        VisualSignal {
            color: self
                .rarity
                .map(|rarity| rarity.color().to_owned())
                .or_else(|| self.visual_color.clone()),
            effect: if self.success { self.visual_effect } else { None },
        }
    }
}

/// Latest visual classification (color + effect) for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct VisualSignal {
    /// Glow color, if any.
    pub color: Option<String>,
    /// Animation category, if any.
    pub effect: Option<VisualEffect>,
}

// ---------------------------------------------------------------------------
// Shop
// ---------------------------------------------------------------------------

/// What buying a shop item does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum ShopEffect {
    /// Add energy.
    AddEnergy {
        /// Energy added.
        amount: u32,
    },
    /// Add insight.
    AddInsight {
        /// Insight added.
        amount: u32,
    },
    /// Add units of a catalyst to the stock.
    BuyCatalyst {
        /// Catalyst bought.
        catalyst: CatalystKind,
        /// Units added.
        quantity: u32,
    },
    /// Add an accessory to the owned set.
    BuyAccessory {
        /// Accessory bought.
        accessory: AccessoryKind,
    },
}

/// An item listed in the shop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ShopItem {
    /// Unique identifier used by purchase intents.
    pub id: ShopItemId,
    /// Display name.
    pub name: String,
    /// Display description.
    pub description: String,
    /// Price.
    pub cost: u32,
    /// Currency the price is paid in.
    pub currency: Currency,
    /// Effect applied after payment.
    pub effect: ShopEffect,
}

// ---------------------------------------------------------------------------
// Game state
// ---------------------------------------------------------------------------

/// The authoritative game state, and the view the presentation layer renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct GameState {
    /// Energy, insight and creativity.
    pub resources: Resources,
    /// Owned elements in discovery order. Ids are unique.
    pub inventory: Vec<Element>,
    /// Elements placed in the furnace slots.
    pub selected_inputs: Vec<Element>,
    /// Result and mission-completion log, oldest first.
    pub history: Vec<String>,
    /// Reaction lifecycle phase.
    pub phase: LabPhase,
    /// Active missions. The length never changes.
    pub missions: Vec<Mission>,
    /// Catalyst stock by kind.
    pub catalysts: BTreeMap<CatalystKind, u32>,
    /// Catalyst spent by the next reaction.
    pub active_catalyst: Option<CatalystKind>,
    /// Accessories in purchase order.
    pub owned_accessories: Vec<AccessoryKind>,
    /// Equipped accessory.
    pub active_accessory: Option<AccessoryKind>,
    /// Latest user-facing message.
    pub message: String,
    /// Latest reaction visual classification.
    pub visual: VisualSignal,
    /// Sequence number for the next generated mission id.
    pub next_mission_seq: u64,
}

impl GameState {
    /// Whether a reaction is currently in flight.
    pub fn is_processing(&self) -> bool {
        self.phase == LabPhase::Processing
    }

    /// Stock of the given catalyst.
    pub fn catalyst_stock(&self, kind: CatalystKind) -> u32 {
        self.catalysts.get(&kind).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(success: bool, rarity: Option<Rarity>) -> ReactionOutcome {
        ReactionOutcome {
            success,
            product: None,
            message: String::new(),
            insight_gained: 0,
            creativity_gained: 0,
            energy_cost: 10,
            visual_color: Some(String::from("#334155")),
            visual_effect: Some(VisualEffect::Water),
            is_new_discovery: false,
            rarity,
        }
    }

    #[test]
    fn spend_deducts_only_when_affordable() {
        let resources = Resources {
            energy: 100,
            insight: 5,
            creativity: 30,
        };
        let after = resources.spend(Currency::Creativity, 20);
        assert_eq!(after.map(|r| r.creativity), Some(10));
        assert!(resources.spend(Currency::Creativity, 100).is_none());
        assert!(resources.spend(Currency::Insight, 6).is_none());
        assert_eq!(resources.balance(Currency::Insight), 5);
    }

    #[test]
    fn rarity_color_overrides_resolver_color() {
        let signal = outcome(true, Some(Rarity::Rare)).visual_signal();
        assert_eq!(signal.color.as_deref(), Some("#00f3ff"));
        assert_eq!(signal.effect, Some(VisualEffect::Water));
    }

    #[test]
    fn failed_reaction_shows_no_effect() {
        let signal = outcome(false, None).visual_signal();
        assert_eq!(signal.color.as_deref(), Some("#334155"));
        assert_eq!(signal.effect, None);
    }

    #[test]
    fn condition_progress_accessors() {
        let count = MissionCondition::DiscoverCount {
            target: 3,
            current: 1,
        };
        assert_eq!(count.required(), 3);
        assert_eq!(count.current(), 1);
        let rarity = MissionCondition::FindRarity {
            target: Rarity::Epic,
            current: 0,
        };
        assert_eq!(rarity.required(), 1);
    }

    #[test]
    fn mission_condition_is_tagged() {
        let json = serde_json::to_value(MissionCondition::FindRarity {
            target: Rarity::Rare,
            current: 0,
        })
        .ok();
        assert_eq!(
            json,
            Some(serde_json::json!({"type": "find_rarity", "target": "rare", "current": 0}))
        );
    }
}
