//! The shop listing.
//!
//! Six items: two accessories, two catalyst bundles, an energy pack and an
//! insight converter. All are priced in creativity.

use alchemy_types::{AccessoryKind, CatalystKind, Currency, ShopEffect, ShopItem, ShopItemId};

use crate::error::LabError;

fn item(id: &str, name: &str, description: &str, cost: u32, effect: ShopEffect) -> ShopItem {
    ShopItem {
        id: ShopItemId::new(id),
        name: name.to_owned(),
        description: description.to_owned(),
        cost,
        currency: Currency::Creativity,
        effect,
    }
}

/// Every item on sale, in display order.
pub fn shop_items() -> Vec<ShopItem> {
    vec![
        item(
            "acc_prism",
            "組件: 虛空稜鏡",
            "永久升級。熔爐配件，可提升稀有度潛力。",
            100,
            ShopEffect::BuyAccessory {
                accessory: AccessoryKind::PrismLens,
            },
        ),
        item(
            "acc_stabilizer",
            "組件: 穩定力場",
            "永久升級。熔爐配件，確保反應穩定。",
            80,
            ShopEffect::BuyAccessory {
                accessory: AccessoryKind::CoreStabilizer,
            },
        ),
        item(
            "cat_stabilizer",
            "購買: 量子穩定劑",
            "一組穩定劑 (3個)，確保實驗安全。",
            15,
            ShopEffect::BuyCatalyst {
                catalyst: CatalystKind::Stabilizer,
                quantity: 3,
            },
        ),
        item(
            "cat_accelerator",
            "購買: 高能粒子束",
            "一組粒子束 (2個)，追求更高品質。",
            25,
            ShopEffect::BuyCatalyst {
                catalyst: CatalystKind::Accelerator,
                quantity: 2,
            },
        ),
        item(
            "energy_pack",
            "高能電池組",
            "補充 50 單位能量。",
            20,
            ShopEffect::AddEnergy { amount: 50 },
        ),
        item(
            "insight_converter",
            "思維昇華模組",
            "將創造力轉化為 50 點洞察力數據。",
            30,
            ShopEffect::AddInsight { amount: 50 },
        ),
    ]
}

/// Look up a shop item by id.
pub fn find_item(id: &ShopItemId) -> Result<ShopItem, LabError> {
    shop_items()
        .into_iter()
        .find(|item| item.id == *id)
        .ok_or_else(|| LabError::UnknownShopItem(id.clone()))
}
