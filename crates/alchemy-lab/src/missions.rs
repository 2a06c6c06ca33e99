//! Mission definitions, generation and progress tracking.
//!
//! A lab always carries a fixed number of active missions. When one completes
//! it is replaced in place by a freshly generated mission; see
//! [`generate_mission`].

use alchemy_types::{Element, Mission, MissionCondition, MissionId, Rarity};
use rand::Rng;
use tracing::debug;

use crate::config::MissionRules;

/// Rarity targets a generated mission can ask for.
const RARITY_TARGETS: [Rarity; 3] = [Rarity::Uncommon, Rarity::Rare, Rarity::Epic];

/// The two missions every lab starts with.
pub fn starting_missions(rules: &MissionRules) -> Vec<Mission> {
    vec![
        Mission {
            id: MissionId::new("m1"),
            title: String::from("初級合成師"),
            description: String::from("合成 3 種新的化合物。"),
            condition: MissionCondition::DiscoverCount {
                target: 3,
                current: 0,
            },
            reward_energy: rules.reward_energy,
        },
        Mission {
            id: MissionId::new("m2"),
            title: String::from("尋找光芒"),
            description: format!("發現 1 個「{}」或更高等級的元素。", Rarity::Uncommon.label()),
            condition: MissionCondition::FindRarity {
                target: Rarity::Uncommon,
                current: 0,
            },
            reward_energy: rules.reward_energy,
        },
    ]
}

/// Generate a fresh, unmet mission.
///
/// With `discover_chance` a single-discovery mission; otherwise a rarity
/// hunt whose target is drawn uniformly from uncommon/rare/epic, with an
/// epic draw softened to rare at `epic_reroll_chance`.
pub fn generate_mission(id: MissionId, rules: &MissionRules, rng: &mut impl Rng) -> Mission {
    if rng.random::<f64>() < rules.discover_chance {
        debug!(mission_id = %id, kind = "discover_count", "generated mission");
        return Mission {
            id,
            title: String::from("實驗數據擴充"),
            description: String::from("合成 1 種新的化合物。"),
            condition: MissionCondition::DiscoverCount {
                target: 1,
                current: 0,
            },
            reward_energy: rules.reward_energy,
        };
    }

    let drawn = RARITY_TARGETS
        .get(rng.random_range(0..RARITY_TARGETS.len()))
        .copied()
        .unwrap_or(Rarity::Uncommon);
    let target = if drawn == Rarity::Epic && rng.random::<f64>() < rules.epic_reroll_chance {
        Rarity::Rare
    } else {
        drawn
    };

    debug!(mission_id = %id, kind = "find_rarity", target = ?target, "generated mission");
    Mission {
        id,
        title: String::from("稀有物質探勘"),
        description: format!("發現一個「{}」或更高等級的物質。", target.label()),
        condition: MissionCondition::FindRarity { target, current: 0 },
        reward_energy: rules.reward_energy,
    }
}

/// Record a discovery against a mission.
///
/// Only genuinely new products count. A rarity mission additionally needs
/// the product to meet its target tier. Returns `true` if progress moved.
pub fn advance(mission: &mut Mission, product: &Element, is_actually_new: bool) -> bool {
    if !is_actually_new {
        return false;
    }
    match &mut mission.condition {
        MissionCondition::DiscoverCount { current, .. } => {
            *current = current.saturating_add(1);
            true
        }
        MissionCondition::FindRarity { target, current } => {
            if product.rarity.meets(*target) {
                *current = current.saturating_add(1);
                true
            } else {
                false
            }
        }
    }
}

/// Whether the mission's condition has been met.
pub const fn is_complete(mission: &Mission) -> bool {
    mission.condition.current() >= mission.condition.required()
}
