//! Catalyst and accessory definitions, plus equip cycling.
//!
//! Catalysts are consumed one unit per reaction while active; accessories are
//! permanent. Both expose a display name and an effect text, which the remote
//! resolver forwards to the generative service.

use alchemy_types::{AccessoryKind, CatalystKind};

/// Display data for a furnace modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModifierInfo {
    /// Display name.
    pub name: &'static str,
    /// Long description.
    pub description: &'static str,
    /// Short description of the gameplay effect.
    pub effect: &'static str,
}

/// Display data for a catalyst.
pub const fn catalyst_info(kind: CatalystKind) -> ModifierInfo {
    match kind {
        CatalystKind::Stabilizer => ModifierInfo {
            name: "量子穩定劑",
            description: "降低反應失敗的風險，但會稍微抑制變異。",
            effect: "大幅提升成功率",
        },
        CatalystKind::Accelerator => ModifierInfo {
            name: "高能粒子束",
            description: "注入高能量，提升產生稀有元素的機率。",
            effect: "提升稀有度機率",
        },
        CatalystKind::Mutagen => ModifierInfo {
            name: "虛空突變原",
            description: "極不穩定的物質，可能導致意想不到的結果。",
            effect: "極高隨機性與史詩潛力",
        },
    }
}

/// Display data for an accessory.
pub const fn accessory_info(kind: AccessoryKind) -> ModifierInfo {
    match kind {
        AccessoryKind::PrismLens => ModifierInfo {
            name: "虛空稜鏡",
            description: "重組魔力光譜，稍微提升合成結果的品質。",
            effect: "提升稀有度潛力",
        },
        AccessoryKind::CoreStabilizer => ModifierInfo {
            name: "穩定力場發生器",
            description: "保護熔爐核心，減少合成失敗的可能性。",
            effect: "提升合成成功率",
        },
    }
}

/// Next selection when cycling through `owned`.
///
/// Goes first, then each following entry, then back to none. An active value
/// that is no longer owned restarts at the first entry. Returns `None` for an
/// empty `owned` list.
pub fn cycle_next<T: Copy + PartialEq>(owned: &[T], active: Option<T>) -> Option<T> {
    let current = active.and_then(|a| owned.iter().position(|o| *o == a));
    match current {
        None => owned.first().copied(),
        Some(index) => owned.get(index.saturating_add(1)).copied(),
    }
}
