//! The progression engine: pure transitions over [`GameState`].
//!
//! Two entry points drive the game:
//!
//! - [`apply_intent`] validates one user intent and returns the next state,
//!   plus a [`ReactionRequest`] when the intent starts a reaction.
//! - [`apply_outcome`] folds a resolved [`ReactionOutcome`] back into the
//!   state: history, catalyst use, discovery, missions, resources, reset.
//!
//! Neither mutates its input. A rejected intent returns a [`Rejection`] whose
//! `Display` text is the message shown to the player.

use std::collections::BTreeMap;

use alchemy_lab::{
    MissionRules, ReactionRules, accessory_info, advance, catalyst_info, cycle_next, find_item,
    generate_mission, inventory, is_complete, starting_elements, starting_missions,
};
use alchemy_types::{
    AccessoryKind, CatalystKind, Currency, ElementId, GameState, Intent, LabPhase, MissionId,
    ReactionOutcome, Resources, ShopEffect, ShopItemId, VisualSignal,
};
use rand::Rng;
use tracing::{debug, info};

use crate::config::GameConfig;
use crate::resolver::ReactionRequest;

// ---------------------------------------------------------------------------
// Rules and results
// ---------------------------------------------------------------------------

/// The rule parameters transitions depend on.
#[derive(Debug, Clone, PartialEq)]
pub struct Rulebook {
    /// Reaction costs and rewards.
    pub reaction: ReactionRules,
    /// Mission generator parameters.
    pub missions: MissionRules,
    /// Furnace slot count.
    pub max_input_slots: usize,
}

impl Default for Rulebook {
    fn default() -> Self {
        Self {
            reaction: ReactionRules::default(),
            missions: MissionRules::default(),
            max_input_slots: 2,
        }
    }
}

impl Rulebook {
    /// Extract the rulebook from a loaded configuration.
    pub const fn from_config(config: &GameConfig) -> Self {
        Self {
            reaction: config.reaction_rules(),
            missions: config.mission_rules(),
            max_input_slots: config.lab.max_input_slots,
        }
    }
}

/// The result of an accepted intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// The next state.
    pub state: GameState,
    /// Set when the intent started a reaction that must now be resolved.
    pub reaction: Option<ReactionRequest>,
}

impl Step {
    const fn idle(state: GameState) -> Self {
        Self {
            state,
            reaction: None,
        }
    }
}

/// Why an intent was refused. `Display` is the player-facing message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    /// A reaction is in flight.
    #[error("反應進行中，請稍候。")]
    Processing,

    /// Every furnace slot is occupied.
    #[error("熔爐容量已滿。請清空插槽以添加新素材。")]
    FurnaceFull,

    /// The element is not in the inventory.
    #[error("尚未擁有此素材：{0}")]
    UnknownElement(ElementId),

    /// No element sits in the given slot.
    #[error("插槽 {0} 沒有素材。")]
    InvalidSlot(usize),

    /// Fewer than two inputs are loaded.
    #[error("至少需要兩種元素才能進行反應。")]
    NotEnoughInputs,

    /// Energy is below the reaction cost.
    #[error("能量不足 (需要 {required})。請完成委託或購買電池組。")]
    InsufficientEnergy {
        /// Energy one reaction costs.
        required: u32,
    },

    /// No shop item has this id.
    #[error("未知的商品：{0}")]
    UnknownItem(ShopItemId),

    /// The balance does not cover the price.
    #[error("資源不足：需要 {cost} {}", .currency.label())]
    InsufficientCurrency {
        /// Item price.
        cost: u32,
        /// Currency the price is paid in.
        currency: Currency,
    },

    /// The accessory has already been bought.
    #[error("已擁有組件：{name}")]
    AccessoryAlreadyOwned {
        /// Display name of the accessory.
        name: &'static str,
    },

    /// There is nothing of this kind to equip.
    #[error("尚未擁有任何{what}。")]
    NothingToEquip {
        /// Display name of the modifier family.
        what: &'static str,
    },
}

// ---------------------------------------------------------------------------
// Initial state
// ---------------------------------------------------------------------------

/// Sequence number of the first generated mission; the starting missions
/// occupy `m1` and `m2`.
const FIRST_GENERATED_MISSION: u64 = 3;

/// The state of a fresh lab.
pub fn initial_state(config: &GameConfig) -> GameState {
    GameState {
        resources: Resources {
            energy: config.lab.starting_energy,
            insight: config.lab.starting_insight,
            creativity: config.lab.starting_creativity,
        },
        inventory: starting_elements(),
        selected_inputs: Vec::new(),
        history: Vec::new(),
        phase: LabPhase::Idle,
        missions: starting_missions(&config.mission_rules()),
        catalysts: CatalystKind::ALL.into_iter().map(|k| (k, 0)).collect(),
        active_catalyst: None,
        owned_accessories: Vec::new(),
        active_accessory: None,
        message: String::new(),
        visual: VisualSignal::default(),
        next_mission_seq: FIRST_GENERATED_MISSION,
    }
}

// ---------------------------------------------------------------------------
// Intents
// ---------------------------------------------------------------------------

/// Validate and apply one intent.
///
/// # Errors
///
/// Returns a [`Rejection`] when the intent is not allowed in `state`; the
/// caller's state is untouched in that case.
pub fn apply_intent(state: &GameState, intent: &Intent, rules: &Rulebook) -> Result<Step, Rejection> {
    let step = match intent {
        Intent::SelectInput { element } => select_input(state, element, rules).map(Step::idle),
        Intent::RemoveInput { slot } => remove_input(state, *slot).map(Step::idle),
        Intent::ClearInputs => clear_inputs(state).map(Step::idle),
        Intent::React => react(state, &rules.reaction),
        Intent::Purchase { item } => purchase(state, item).map(Step::idle),
        Intent::ToggleCatalyst => Ok(Step::idle(toggle_catalyst(state)?)),
        Intent::ToggleAccessory => Ok(Step::idle(toggle_accessory(state)?)),
    }?;
    debug!(intent = intent.kind(), message = %step.state.message, "intent accepted");
    Ok(step)
}

const fn ensure_idle(state: &GameState) -> Result<(), Rejection> {
    match state.phase {
        LabPhase::Idle => Ok(()),
        LabPhase::Processing => Err(Rejection::Processing),
    }
}

fn select_input(state: &GameState, id: &ElementId, rules: &Rulebook) -> Result<GameState, Rejection> {
    ensure_idle(state)?;
    if state.selected_inputs.len() >= rules.max_input_slots {
        return Err(Rejection::FurnaceFull);
    }
    let Ok(element) = inventory::find(&state.inventory, id) else {
        return Err(Rejection::UnknownElement(id.clone()));
    };
    let element = element.clone();
    let mut next = state.clone();
    next.message = format!("已投入：{}", element.name);
    next.selected_inputs.push(element);
    Ok(next)
}

fn remove_input(state: &GameState, slot: usize) -> Result<GameState, Rejection> {
    ensure_idle(state)?;
    if slot >= state.selected_inputs.len() {
        return Err(Rejection::InvalidSlot(slot));
    }
    let mut next = state.clone();
    next.selected_inputs.remove(slot);
    next.message = String::from("素材已取出。");
    Ok(next)
}

fn clear_inputs(state: &GameState) -> Result<GameState, Rejection> {
    ensure_idle(state)?;
    let mut next = state.clone();
    next.selected_inputs.clear();
    next.message = String::from("熔爐已清空。");
    Ok(next)
}

fn react(state: &GameState, rules: &ReactionRules) -> Result<Step, Rejection> {
    ensure_idle(state)?;
    if state.selected_inputs.len() < 2 {
        return Err(Rejection::NotEnoughInputs);
    }
    if state.resources.energy < rules.energy_cost {
        return Err(Rejection::InsufficientEnergy {
            required: rules.energy_cost,
        });
    }

    let request = ReactionRequest {
        inputs: state.selected_inputs.clone(),
        catalyst: state.active_catalyst,
        accessory: state.active_accessory,
        insight: state.resources.insight,
    };
    let mut next = state.clone();
    next.phase = LabPhase::Processing;
    next.message = String::from("正在引導元素魔力...");
    next.visual.effect = None;

    info!(key = %request.key(), catalyst = ?request.catalyst, accessory = ?request.accessory, "reaction started");
    Ok(Step {
        state: next,
        reaction: Some(request),
    })
}

fn purchase(state: &GameState, item_id: &ShopItemId) -> Result<GameState, Rejection> {
    let Ok(item) = find_item(item_id) else {
        return Err(Rejection::UnknownItem(item_id.clone()));
    };

    if let ShopEffect::BuyAccessory { accessory } = item.effect
        && state.owned_accessories.contains(&accessory)
    {
        return Err(Rejection::AccessoryAlreadyOwned {
            name: accessory_info(accessory).name,
        });
    }

    let resources = state
        .resources
        .spend(item.currency, item.cost)
        .ok_or(Rejection::InsufficientCurrency {
            cost: item.cost,
            currency: item.currency,
        })?;

    let mut next = state.clone();
    next.resources = resources;
    next.message = match item.effect {
        ShopEffect::AddEnergy { amount } => {
            next.resources.energy = next.resources.energy.saturating_add(amount);
            format!("購買成功：獲得 {amount} 單位能量。")
        }
        ShopEffect::AddInsight { amount } => {
            next.resources.insight = next.resources.insight.saturating_add(amount);
            format!("購買成功：轉化獲得 {amount} 洞察力。")
        }
        ShopEffect::BuyCatalyst { catalyst, quantity } => {
            let stock = next.catalysts.entry(catalyst).or_insert(0);
            *stock = stock.saturating_add(quantity);
            format!("購買成功：獲得 {quantity} 個 {}。", catalyst_info(catalyst).name)
        }
        ShopEffect::BuyAccessory { accessory } => {
            next.owned_accessories.push(accessory);
            format!("購買成功：獲得新組件 {}。", accessory_info(accessory).name)
        }
    };

    info!(item = %item.id, cost = item.cost, currency = ?item.currency, "item purchased");
    Ok(next)
}

fn owned_catalysts(catalysts: &BTreeMap<CatalystKind, u32>) -> Vec<CatalystKind> {
    CatalystKind::ALL
        .into_iter()
        .filter(|k| catalysts.get(k).copied().unwrap_or(0) > 0)
        .collect()
}

fn toggle_catalyst(state: &GameState) -> Result<GameState, Rejection> {
    let owned = owned_catalysts(&state.catalysts);
    if owned.is_empty() {
        return Err(Rejection::NothingToEquip { what: "催化符文" });
    }
    let mut next = state.clone();
    next.active_catalyst = cycle_next(&owned, state.active_catalyst);
    next.message = next.active_catalyst.map_or_else(
        || String::from("催化符文已卸除"),
        |k| format!("催化符文裝載: {}", catalyst_info(k).name),
    );
    Ok(next)
}

fn toggle_accessory(state: &GameState) -> Result<GameState, Rejection> {
    if state.owned_accessories.is_empty() {
        return Err(Rejection::NothingToEquip { what: "熔爐組件" });
    }
    let mut next = state.clone();
    next.active_accessory = cycle_next(&state.owned_accessories, state.active_accessory);
    next.message = next.active_accessory.map_or_else(
        || String::from("熔爐組件已移除"),
        |k: AccessoryKind| format!("熔爐組件裝備: {}", accessory_info(k).name),
    );
    Ok(next)
}

// ---------------------------------------------------------------------------
// Outcomes
// ---------------------------------------------------------------------------

/// Fold a resolved reaction into the state.
///
/// Steps, in order: log the message; spend one unit of the active catalyst;
/// add a genuinely new product to the inventory; advance missions; replace
/// completed missions and collect their rewards; settle resources; reset the
/// furnace.
pub fn apply_outcome(
    state: &GameState,
    outcome: &ReactionOutcome,
    rules: &Rulebook,
    rng: &mut impl Rng,
) -> GameState {
    let mut next = state.clone();

    // 1. History.
    next.history.push(outcome.message.clone());

    // 2. Catalyst consumption.
    if let Some(active) = next.active_catalyst {
        let stock = next.catalysts.entry(active).or_insert(0);
        *stock = stock.saturating_sub(1);
        if *stock == 0 {
            next.active_catalyst = None;
        }
    }

    // 3. Discovery.
    let product = outcome.product.as_ref().filter(|_| outcome.success);
    let is_actually_new =
        product.is_some_and(|p| inventory::add_discovery(&mut next.inventory, p.clone()));
    if let Some(p) = product.filter(|_| is_actually_new) {
        info!(element_id = %p.id, rarity = ?p.rarity, "new element discovered");
    }

    // 4. Mission progress.
    if let Some(p) = product {
        for mission in &mut next.missions {
            advance(mission, p, is_actually_new);
        }
    }

    // 5. Completion and replacement, in place.
    let mut mission_energy: u32 = 0;
    for slot in &mut next.missions {
        if !is_complete(slot) {
            continue;
        }
        mission_energy = mission_energy.saturating_add(slot.reward_energy);
        next.history.push(format!(
            "委託完成: {} (+{} 能量)",
            slot.title, slot.reward_energy
        ));
        info!(mission_id = %slot.id, reward = slot.reward_energy, "mission completed");
        let id = MissionId::new(format!("m{}", next.next_mission_seq));
        next.next_mission_seq = next.next_mission_seq.saturating_add(1);
        *slot = generate_mission(id, &rules.missions, rng);
    }

    // 6. Resources.
    next.resources.energy = next
        .resources
        .energy
        .saturating_add(mission_energy)
        .saturating_sub(outcome.energy_cost);
    next.resources.insight = next.resources.insight.saturating_add(outcome.insight_gained);
    next.resources.creativity = next
        .resources
        .creativity
        .saturating_add(outcome.creativity_gained);

    // 7. Furnace reset.
    next.selected_inputs.clear();
    next.phase = LabPhase::Idle;
    next.message = outcome.message.clone();
    next.visual = outcome.visual_signal();

    next
}

/// Return a processing lab to idle without applying any outcome.
///
/// Used when an in-flight reaction is cancelled. Inputs stay loaded and
/// nothing is charged.
pub fn abort_reaction(state: &GameState) -> GameState {
    let mut next = state.clone();
    next.phase = LabPhase::Idle;
    next.message = String::from("反應已中止。");
    next
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use alchemy_types::{Element, ElementCategory, Mission, MissionCondition, Rarity, VisualEffect};
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;

    fn fresh() -> GameState {
        initial_state(&GameConfig::default())
    }

    fn apply(state: &GameState, intent: Intent) -> Result<GameState, Rejection> {
        apply_intent(state, &intent, &Rulebook::default()).map(|s| s.state)
    }

    fn select(id: &str) -> Intent {
        Intent::SelectInput {
            element: ElementId::new(id),
        }
    }

    fn buy(id: &str) -> Intent {
        Intent::Purchase {
            item: ShopItemId::new(id),
        }
    }

    fn water() -> Element {
        Element {
            id: ElementId::new("h2o"),
            name: String::from("水"),
            symbol: String::from("H2O"),
            atomic_number: 9,
            category: ElementCategory::Compound,
            rarity: Rarity::Common,
            description: String::new(),
        }
    }

    fn success(product: Element) -> ReactionOutcome {
        ReactionOutcome {
            success: true,
            message: format!("反應成功！獲得了「{}」。", product.name),
            insight_gained: 15,
            creativity_gained: 5,
            energy_cost: 10,
            visual_color: Some(String::from("#94a3b8")),
            visual_effect: Some(VisualEffect::Water),
            is_new_discovery: true,
            rarity: Some(product.rarity),
            product: Some(product),
        }
    }

    fn loaded() -> GameState {
        let state = apply(&fresh(), select("h")).unwrap();
        apply(&state, select("o")).unwrap()
    }

    #[test]
    fn initial_state_matches_base_game() {
        let state = fresh();
        assert_eq!(
            state.resources,
            Resources {
                energy: 100,
                insight: 0,
                creativity: 30
            }
        );
        assert_eq!(state.inventory.len(), 4);
        assert_eq!(state.missions.len(), 2);
        assert_eq!(state.catalysts.len(), 3);
        assert_eq!(state.phase, LabPhase::Idle);
        assert_eq!(state.next_mission_seq, 3);
    }

    #[test]
    fn select_fills_slots_then_rejects() {
        let state = loaded();
        assert_eq!(state.selected_inputs.len(), 2);
        assert_eq!(state.message, "已投入：氧");
        assert_eq!(apply(&state, select("c")), Err(Rejection::FurnaceFull));
    }

    #[test]
    fn same_element_may_fill_both_slots() {
        let state = apply(&fresh(), select("h")).unwrap();
        let state = apply(&state, select("h")).unwrap();
        assert_eq!(state.selected_inputs.len(), 2);
    }

    #[test]
    fn select_unknown_element_rejected() {
        assert_eq!(
            apply(&fresh(), select("h2o")),
            Err(Rejection::UnknownElement(ElementId::new("h2o")))
        );
    }

    #[test]
    fn remove_and_clear() {
        let state = loaded();
        let removed = apply(&state, Intent::RemoveInput { slot: 0 }).unwrap();
        assert_eq!(removed.selected_inputs.len(), 1);
        assert_eq!(
            removed.selected_inputs.first().map(|e| e.id.as_str()),
            Some("o")
        );
        assert_eq!(
            apply(&removed, Intent::RemoveInput { slot: 1 }),
            Err(Rejection::InvalidSlot(1))
        );
        let cleared = apply(&state, Intent::ClearInputs).unwrap();
        assert!(cleared.selected_inputs.is_empty());
        assert_eq!(cleared.message, "熔爐已清空。");
    }

    #[test]
    fn react_needs_two_inputs() {
        let state = apply(&fresh(), select("h")).unwrap();
        assert_eq!(apply(&state, Intent::React), Err(Rejection::NotEnoughInputs));
    }

    #[test]
    fn react_with_no_energy_rejected_and_state_untouched() {
        let mut state = loaded();
        state.resources.energy = 0;
        let before = state.clone();
        let result = apply(&state, Intent::React);
        assert_eq!(result, Err(Rejection::InsufficientEnergy { required: 10 }));
        assert_eq!(state, before);
        assert_eq!(
            Rejection::InsufficientEnergy { required: 10 }.to_string(),
            "能量不足 (需要 10)。請完成委託或購買電池組。"
        );
    }

    #[test]
    fn react_enters_processing_and_builds_request() {
        let step = apply_intent(&loaded(), &Intent::React, &Rulebook::default()).unwrap();
        assert_eq!(step.state.phase, LabPhase::Processing);
        let request = step.reaction.unwrap();
        assert_eq!(request.key(), "h+o");
        assert_eq!(request.catalyst, None);
        // Energy is settled with the outcome, not when the reaction starts.
        assert_eq!(step.state.resources.energy, 100);
    }

    #[test]
    fn processing_blocks_furnace_but_not_shop() {
        let step = apply_intent(&loaded(), &Intent::React, &Rulebook::default()).unwrap();
        let busy = step.state;
        assert_eq!(apply(&busy, select("c")), Err(Rejection::Processing));
        assert_eq!(apply(&busy, Intent::ClearInputs), Err(Rejection::Processing));
        assert_eq!(apply(&busy, Intent::RemoveInput { slot: 0 }), Err(Rejection::Processing));
        assert_eq!(apply(&busy, Intent::React), Err(Rejection::Processing));
        let bought = apply(&busy, buy("cat_stabilizer")).unwrap();
        assert_eq!(bought.catalyst_stock(CatalystKind::Stabilizer), 3);
        assert!(apply(&bought, Intent::ToggleCatalyst).is_ok());
    }

    #[test]
    fn unaffordable_accessory_rejected_without_charge() {
        let state = fresh();
        let result = apply(&state, buy("acc_prism"));
        assert_eq!(
            result,
            Err(Rejection::InsufficientCurrency {
                cost: 100,
                currency: Currency::Creativity
            })
        );
        assert_eq!(result.unwrap_err().to_string(), "資源不足：需要 100 創造力");
        assert_eq!(state.resources.creativity, 30);
        assert!(state.owned_accessories.is_empty());
    }

    #[test]
    fn purchase_effects() {
        let mut state = fresh();
        state.resources.creativity = 500;
        let s = apply(&state, buy("energy_pack")).unwrap();
        assert_eq!(s.resources.energy, 150);
        assert_eq!(s.resources.creativity, 480);
        let s = apply(&s, buy("insight_converter")).unwrap();
        assert_eq!(s.resources.insight, 50);
        let s = apply(&s, buy("cat_accelerator")).unwrap();
        assert_eq!(s.catalyst_stock(CatalystKind::Accelerator), 2);
        let s = apply(&s, buy("acc_stabilizer")).unwrap();
        assert_eq!(s.owned_accessories, vec![AccessoryKind::CoreStabilizer]);
        assert_eq!(s.message, "購買成功：獲得新組件 穩定力場發生器。");
        let again = apply(&s, buy("acc_stabilizer"));
        assert!(matches!(again, Err(Rejection::AccessoryAlreadyOwned { .. })));
        assert_eq!(
            apply(&s, buy("nothing")),
            Err(Rejection::UnknownItem(ShopItemId::new("nothing")))
        );
    }

    #[test]
    fn catalyst_cycle_skips_empty_stock() {
        let mut state = fresh();
        assert!(matches!(
            apply(&state, Intent::ToggleCatalyst),
            Err(Rejection::NothingToEquip { .. })
        ));
        state.catalysts.insert(CatalystKind::Stabilizer, 1);
        state.catalysts.insert(CatalystKind::Mutagen, 2);
        let s = apply(&state, Intent::ToggleCatalyst).unwrap();
        assert_eq!(s.active_catalyst, Some(CatalystKind::Stabilizer));
        assert_eq!(s.message, "催化符文裝載: 量子穩定劑");
        let s = apply(&s, Intent::ToggleCatalyst).unwrap();
        assert_eq!(s.active_catalyst, Some(CatalystKind::Mutagen));
        let s = apply(&s, Intent::ToggleCatalyst).unwrap();
        assert_eq!(s.active_catalyst, None);
        assert_eq!(s.message, "催化符文已卸除");
    }

    #[test]
    fn accessory_cycle_follows_purchase_order() {
        let mut state = fresh();
        state.owned_accessories = vec![AccessoryKind::CoreStabilizer, AccessoryKind::PrismLens];
        let s = apply(&state, Intent::ToggleAccessory).unwrap();
        assert_eq!(s.active_accessory, Some(AccessoryKind::CoreStabilizer));
        let s = apply(&s, Intent::ToggleAccessory).unwrap();
        assert_eq!(s.active_accessory, Some(AccessoryKind::PrismLens));
        let s = apply(&s, Intent::ToggleAccessory).unwrap();
        assert_eq!(s.active_accessory, None);
        assert_eq!(s.message, "熔爐組件已移除");
    }

    #[test]
    fn first_water_discovery() {
        let rules = Rulebook::default();
        let mut rng = SmallRng::seed_from_u64(1);
        let step = apply_intent(&loaded(), &Intent::React, &rules).unwrap();
        let after = apply_outcome(&step.state, &success(water()), &rules, &mut rng);

        assert_eq!(after.inventory.len(), 5);
        assert_eq!(after.resources.energy, 90);
        assert_eq!(after.resources.insight, 15);
        assert_eq!(after.resources.creativity, 35);
        assert_eq!(after.missions.first().map(|m| m.condition.current()), Some(1));
        assert_eq!(after.missions.get(1).map(|m| m.condition.current()), Some(0));
        assert!(after.selected_inputs.is_empty());
        assert_eq!(after.phase, LabPhase::Idle);
        assert_eq!(after.history, vec![String::from("反應成功！獲得了「水」。")]);
        assert_eq!(after.visual.effect, Some(VisualEffect::Water));
    }

    #[test]
    fn rediscovery_pays_resources_but_not_missions() {
        let rules = Rulebook::default();
        let mut rng = SmallRng::seed_from_u64(2);
        let once = apply_outcome(&loaded(), &success(water()), &rules, &mut rng);
        let twice = apply_outcome(&once, &success(water()), &rules, &mut rng);
        assert_eq!(twice.inventory.len(), 5);
        assert_eq!(twice.missions.first().map(|m| m.condition.current()), Some(1));
        assert_eq!(twice.resources.insight, 30);
    }

    #[test]
    fn completed_mission_pays_and_is_replaced_in_place() {
        let rules = Rulebook::default();
        let mut rng = SmallRng::seed_from_u64(3);
        let mut state = loaded();
        state.missions = vec![
            Mission {
                id: MissionId::new("m1"),
                title: String::from("初級合成師"),
                description: String::new(),
                condition: MissionCondition::DiscoverCount {
                    target: 3,
                    current: 2,
                },
                reward_energy: 20,
            },
            Mission {
                id: MissionId::new("m2"),
                title: String::from("尋找光芒"),
                description: String::new(),
                condition: MissionCondition::FindRarity {
                    target: Rarity::Rare,
                    current: 0,
                },
                reward_energy: 20,
            },
        ];
        state.resources.energy = 50;

        let after = apply_outcome(&state, &success(water()), &rules, &mut rng);

        assert_eq!(after.resources.energy, 60);
        assert_eq!(after.missions.len(), 2);
        assert_eq!(after.missions.first().map(|m| m.id.as_str()), Some("m3"));
        assert_eq!(after.missions.first().map(|m| m.condition.current()), Some(0));
        assert_eq!(after.missions.get(1).map(|m| m.id.as_str()), Some("m2"));
        assert_eq!(after.next_mission_seq, 4);
        assert_eq!(
            after.history.last().map(String::as_str),
            Some("委託完成: 初級合成師 (+20 能量)")
        );
    }

    #[test]
    fn mission_reward_offsets_cost_before_flooring() {
        let rules = Rulebook::default();
        let mut rng = SmallRng::seed_from_u64(4);
        let mut state = loaded();
        state.resources.energy = 5;
        if let Some(m) = state.missions.first_mut() {
            m.condition = MissionCondition::DiscoverCount {
                target: 1,
                current: 0,
            };
        }
        let after = apply_outcome(&state, &success(water()), &rules, &mut rng);
        assert_eq!(after.resources.energy, 15);
    }

    #[test]
    fn energy_never_goes_negative() {
        let rules = Rulebook::default();
        let mut rng = SmallRng::seed_from_u64(5);
        let mut state = loaded();
        state.resources.energy = 3;
        let mut outcome = success(water());
        outcome.success = false;
        outcome.product = None;
        let after = apply_outcome(&state, &outcome, &rules, &mut rng);
        assert_eq!(after.resources.energy, 0);
    }

    #[test]
    fn failed_reaction_ignores_attached_product() {
        let rules = Rulebook::default();
        let mut rng = SmallRng::seed_from_u64(6);
        let mut outcome = success(water());
        outcome.success = false;
        let after = apply_outcome(&loaded(), &outcome, &rules, &mut rng);
        assert_eq!(after.inventory.len(), 4);
        assert_eq!(after.visual.effect, None);
    }

    #[test]
    fn last_catalyst_unit_deselects() {
        let rules = Rulebook::default();
        let mut rng = SmallRng::seed_from_u64(7);
        let mut state = loaded();
        state.catalysts.insert(CatalystKind::Stabilizer, 1);
        state.active_catalyst = Some(CatalystKind::Stabilizer);
        let after = apply_outcome(&state, &success(water()), &rules, &mut rng);
        assert_eq!(after.catalyst_stock(CatalystKind::Stabilizer), 0);
        assert_eq!(after.active_catalyst, None);
    }

    #[test]
    fn abort_returns_to_idle_without_charge() {
        let step = apply_intent(&loaded(), &Intent::React, &Rulebook::default()).unwrap();
        let aborted = abort_reaction(&step.state);
        assert_eq!(aborted.phase, LabPhase::Idle);
        assert_eq!(aborted.resources, step.state.resources);
        assert_eq!(aborted.selected_inputs.len(), 2);
    }
}
