//! Enumeration types for the Neon Alchemy engine.
//!
//! Every category the game used to pass around as a loose string (rarity,
//! visual effect, element category, currency, modifier ids) is a closed enum
//! here, so each consumption site is an exhaustive `match`.
//!
//! Serialized names are lowercase / `snake_case` so the generative
//! resolver's response schema deserializes directly into these types.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Rarity
// ---------------------------------------------------------------------------

/// Discovery quality tier.
///
/// Declaration order is the tier order, so the derived [`Ord`] gives
/// `Common < Uncommon < Rare < Epic < Legendary`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum Rarity {
    /// Everyday substances.
    Common,
    /// Slightly unusual substances.
    Uncommon,
    /// Hard-to-find substances.
    Rare,
    /// Exceptional substances.
    Epic,
    /// Mythical substances; no curated recipe produces these.
    Legendary,
}

impl Rarity {
    /// Every tier in ascending order.
    pub const ALL: [Self; 5] = [
        Self::Common,
        Self::Uncommon,
        Self::Rare,
        Self::Epic,
        Self::Legendary,
    ];

    /// Display color used by the presentation layer for this tier.
    pub const fn color(self) -> &'static str {
        match self {
            Self::Common => "#94a3b8",
            Self::Uncommon => "#0aff00",
            Self::Rare => "#00f3ff",
            Self::Epic => "#bd00ff",
            Self::Legendary => "#fbbf24",
        }
    }

    /// Display label in the game language.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Common => "普通",
            Self::Uncommon => "罕見",
            Self::Rare => "稀有",
            Self::Epic => "史詩",
            Self::Legendary => "傳說",
        }
    }

    /// Whether this tier satisfies a "this tier or better" requirement.
    pub fn meets(self, target: Self) -> bool {
        self >= target
    }
}

// ---------------------------------------------------------------------------
// Element category
// ---------------------------------------------------------------------------

/// Structural category of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum ElementCategory {
    /// One of the starting elements or a pure allotrope.
    Basic,
    /// A combination of two or more elements.
    Compound,
    /// An exotic form.
    Rare,
}

// ---------------------------------------------------------------------------
// Visual effect
// ---------------------------------------------------------------------------

/// Furnace animation category attached to a reaction outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum VisualEffect {
    /// Flames.
    Fire,
    /// Droplets and ripples.
    Water,
    /// Arcs and sparks.
    Electric,
    /// Organic growth.
    Bio,
    /// Arcane glow.
    Magic,
    /// Metallic sheen.
    Metal,
    /// Vapour.
    Gas,
    /// Plain pulse.
    Default,
}

// ---------------------------------------------------------------------------
// Currency
// ---------------------------------------------------------------------------

/// A resource the shop accepts as payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum Currency {
    /// Earned mainly from discoveries, scaled by rarity.
    Creativity,
    /// Earned from every reaction attempt.
    Insight,
}

impl Currency {
    /// Display label in the game language.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Creativity => "創造力",
            Self::Insight => "洞察力",
        }
    }
}

// ---------------------------------------------------------------------------
// Modifiers
// ---------------------------------------------------------------------------

/// A consumable catalyst. One unit is spent per reaction while active.
///
/// Declaration order is the equip-cycling order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum CatalystKind {
    /// Raises the reaction success chance.
    Stabilizer,
    /// Pushes outcomes toward higher rarity.
    Accelerator,
    /// Makes outcomes wildly unpredictable.
    Mutagen,
}

impl CatalystKind {
    /// Every catalyst in cycling order.
    pub const ALL: [Self; 3] = [Self::Stabilizer, Self::Accelerator, Self::Mutagen];
}

/// A permanent furnace accessory. Bought once, equipped at will.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum AccessoryKind {
    /// Improves the quality of synthesis results.
    PrismLens,
    /// Raises the reaction success chance.
    CoreStabilizer,
}

impl AccessoryKind {
    /// Every accessory in catalog order.
    pub const ALL: [Self; 2] = [Self::PrismLens, Self::CoreStabilizer];
}

// ---------------------------------------------------------------------------
// Lab phase
// ---------------------------------------------------------------------------

/// Reaction lifecycle of the furnace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum LabPhase {
    /// Waiting for intents; inputs may be changed.
    #[default]
    Idle,
    /// A reaction is in flight; inputs are frozen.
    Processing,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rarity_tiers_are_totally_ordered() {
        assert!(Rarity::Common < Rarity::Uncommon);
        assert!(Rarity::Uncommon < Rarity::Rare);
        assert!(Rarity::Rare < Rarity::Epic);
        assert!(Rarity::Epic < Rarity::Legendary);
        let mut sorted = Rarity::ALL;
        sorted.sort();
        assert_eq!(sorted, Rarity::ALL);
    }

    #[test]
    fn rarity_meets_is_at_or_above() {
        assert!(Rarity::Rare.meets(Rarity::Rare));
        assert!(Rarity::Epic.meets(Rarity::Rare));
        assert!(Rarity::Legendary.meets(Rarity::Rare));
        assert!(!Rarity::Uncommon.meets(Rarity::Rare));
        assert!(!Rarity::Common.meets(Rarity::Rare));
    }

    #[test]
    fn enums_use_schema_names() {
        assert_eq!(
            serde_json::to_string(&Rarity::Legendary).ok().as_deref(),
            Some("\"legendary\"")
        );
        assert_eq!(
            serde_json::to_string(&AccessoryKind::CoreStabilizer).ok().as_deref(),
            Some("\"core_stabilizer\"")
        );
        let effect: Result<VisualEffect, _> = serde_json::from_str("\"electric\"");
        assert_eq!(effect.ok(), Some(VisualEffect::Electric));
        let category: Result<ElementCategory, _> = serde_json::from_str("\"compound\"");
        assert_eq!(category.ok(), Some(ElementCategory::Compound));
    }

    #[test]
    fn rarity_colors_are_distinct() {
        let mut colors: Vec<&str> = Rarity::ALL.iter().map(|r| r.color()).collect();
        colors.sort_unstable();
        colors.dedup();
        assert_eq!(colors.len(), Rarity::ALL.len());
    }
}
