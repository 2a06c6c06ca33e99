//! Error types for the alchemy-lab crate.
//!
//! Table lookups that can miss return typed errors rather than panicking.

use alchemy_types::{ElementId, ShopItemId};

/// Errors raised by lab table lookups and rule validation.
#[derive(Debug, thiserror::Error)]
pub enum LabError {
    /// No shop item with the given id exists.
    #[error("unknown shop item: {0}")]
    UnknownShopItem(ShopItemId),

    /// The element is not present in the inventory.
    #[error("element not in inventory: {0}")]
    ElementNotOwned(ElementId),

    /// A probability parameter lies outside `[0, 1]`.
    #[error("probability `{name}` out of range: {value}")]
    InvalidProbability {
        /// Name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
}
