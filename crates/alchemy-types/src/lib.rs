//! Shared type definitions for the Neon Alchemy reaction engine.
//!
//! This crate is the single source of truth for all types used across the
//! workspace. Types defined here flow downstream to `TypeScript` via `ts-rs`
//! for the browser presentation layer.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe string wrappers for element, mission and shop ids
//! - [`enums`] -- Closed enumerations (rarity, effects, modifiers, phase)
//! - [`structs`] -- Elements, resources, missions, outcomes and game state
//! - [`intents`] -- User actions submitted by the presentation layer

pub mod enums;
pub mod ids;
pub mod intents;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::{
    AccessoryKind, CatalystKind, Currency, ElementCategory, LabPhase, Rarity, VisualEffect,
};
pub use ids::{ElementId, MissionId, ShopItemId};
pub use intents::Intent;
pub use structs::{
    Element, GameState, Mission, MissionCondition, ReactionOutcome, Resources, ShopEffect,
    ShopItem, VisualSignal,
};

#[cfg(test)]
mod tests {
    //! `TypeScript` binding generation.

    #[test]
    fn export_bindings() {
        // Files are written to `bindings/` relative to the crate root.
        use ts_rs::TS;

        // IDs
        let _ = crate::ids::ElementId::export_all();
        let _ = crate::ids::MissionId::export_all();
        let _ = crate::ids::ShopItemId::export_all();

        // Enums
        let _ = crate::enums::Rarity::export_all();
        let _ = crate::enums::ElementCategory::export_all();
        let _ = crate::enums::VisualEffect::export_all();
        let _ = crate::enums::Currency::export_all();
        let _ = crate::enums::CatalystKind::export_all();
        let _ = crate::enums::AccessoryKind::export_all();
        let _ = crate::enums::LabPhase::export_all();

        // Structs
        let _ = crate::structs::Element::export_all();
        let _ = crate::structs::Resources::export_all();
        let _ = crate::structs::MissionCondition::export_all();
        let _ = crate::structs::Mission::export_all();
        let _ = crate::structs::ReactionOutcome::export_all();
        let _ = crate::structs::VisualSignal::export_all();
        let _ = crate::structs::ShopEffect::export_all();
        let _ = crate::structs::ShopItem::export_all();
        let _ = crate::structs::GameState::export_all();

        // Intents
        let _ = crate::intents::Intent::export_all();
    }
}
