//! Presentation intents consumed by the progression engine.
//!
//! Every user action the browser (or the CLI driver) can take is one variant
//! of [`Intent`]. Intents serialize as internally tagged JSON, e.g.
//! `{"type": "select_input", "element": "h"}`.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::ids::{ElementId, ShopItemId};

/// A single user action submitted to the lab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum Intent {
    /// Place an owned element into the next free furnace slot.
    SelectInput {
        /// Element to place.
        element: ElementId,
    },
    /// Take the element out of a furnace slot.
    RemoveInput {
        /// Zero-based slot index.
        slot: usize,
    },
    /// Empty every furnace slot.
    ClearInputs,
    /// Start a reaction with the current inputs.
    React,
    /// Buy a shop item.
    Purchase {
        /// Item to buy.
        item: ShopItemId,
    },
    /// Cycle the active catalyst.
    ToggleCatalyst,
    /// Cycle the active accessory.
    ToggleAccessory,
}

impl Intent {
    /// Short name used in logs.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::SelectInput { .. } => "select_input",
            Self::RemoveInput { .. } => "remove_input",
            Self::ClearInputs => "clear_inputs",
            Self::React => "react",
            Self::Purchase { .. } => "purchase",
            Self::ToggleCatalyst => "toggle_catalyst",
            Self::ToggleAccessory => "toggle_accessory",
        }
    }
}
