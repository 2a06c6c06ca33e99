//! The four basic elements every lab starts with.

use alchemy_types::{Element, ElementCategory, ElementId, Rarity};

fn basic(id: &str, name: &str, symbol: &str, atomic_number: u32, description: &str) -> Element {
    Element {
        id: ElementId::new(id),
        name: name.to_owned(),
        symbol: symbol.to_owned(),
        atomic_number,
        category: ElementCategory::Basic,
        rarity: Rarity::Common,
        description: description.to_owned(),
    }
}

/// Hydrogen, oxygen, carbon and iron, in inventory order.
pub fn starting_elements() -> Vec<Element> {
    vec![
        basic("h", "氫", "H", 1, "宇宙中最輕盈的元素。"),
        basic("o", "氧", "O", 8, "燃燒與呼吸的必要條件。"),
        basic("c", "碳", "C", 6, "構成生命的基礎物質。"),
        basic("fe", "鐵", "Fe", 26, "堅硬且強韌的金屬。"),
    ]
}
