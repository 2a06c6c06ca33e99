//! Inventory operations.
//!
//! The inventory is a list of elements in discovery order that behaves as a
//! set keyed by element id: adding an id that is already present is a no-op.

use alchemy_types::{Element, ElementId};

use crate::error::LabError;

/// Whether the inventory holds an element with this id.
pub fn contains(inventory: &[Element], id: &ElementId) -> bool {
    inventory.iter().any(|e| e.id == *id)
}

/// Look up an owned element by id.
pub fn find<'a>(inventory: &'a [Element], id: &ElementId) -> Result<&'a Element, LabError> {
    inventory
        .iter()
        .find(|e| e.id == *id)
        .ok_or_else(|| LabError::ElementNotOwned(id.clone()))
}

/// Append `element` unless its id is already owned.
///
/// Returns `true` if the element was actually new.
pub fn add_discovery(inventory: &mut Vec<Element>, element: Element) -> bool {
    if contains(inventory, &element.id) {
        false
    } else {
        inventory.push(element);
        true
    }
}
