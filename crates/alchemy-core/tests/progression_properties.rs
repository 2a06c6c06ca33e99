//! State-machine properties over random intent sequences.
//!
//! Each case plays a sequence of intents against the pure transition
//! functions, resolving every accepted reaction immediately with the local
//! algorithm, and checks the invariants after every step.

use std::collections::BTreeSet;

use alchemy_core::{GameConfig, Rulebook, apply_intent, apply_outcome, initial_state, resolve_reaction};
use alchemy_lab::RecipeCatalog;
use alchemy_types::{ElementId, GameState, Intent, LabPhase, ShopItemId};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;

fn intent_strategy() -> impl Strategy<Value = Intent> {
    let element = prop::sample::select(vec!["h", "o", "c", "fe", "h2o", "co2", "steel", "iso_FeH"]);
    let item = prop::sample::select(vec![
        "acc_prism",
        "acc_stabilizer",
        "cat_stabilizer",
        "cat_accelerator",
        "energy_pack",
        "insight_converter",
        "bogus",
    ]);
    prop_oneof![
        4 => element.prop_map(|id| Intent::SelectInput { element: ElementId::new(id) }),
        1 => (0_usize..3).prop_map(|slot| Intent::RemoveInput { slot }),
        1 => Just(Intent::ClearInputs),
        4 => Just(Intent::React),
        2 => item.prop_map(|id| Intent::Purchase { item: ShopItemId::new(id) }),
        1 => Just(Intent::ToggleCatalyst),
        1 => Just(Intent::ToggleAccessory),
    ]
}

fn check_invariants(state: &GameState, mission_count: usize, max_slots: usize) -> Result<(), TestCaseError> {
    let ids: BTreeSet<&ElementId> = state.inventory.iter().map(|e| &e.id).collect();
    prop_assert_eq!(ids.len(), state.inventory.len(), "inventory ids must be unique");
    prop_assert_eq!(state.missions.len(), mission_count);
    prop_assert!(state.selected_inputs.len() <= max_slots);
    prop_assert_eq!(state.phase, LabPhase::Idle);
    if let Some(active) = state.active_catalyst {
        prop_assert!(state.catalyst_stock(active) > 0);
    }
    if let Some(active) = state.active_accessory {
        prop_assert!(state.owned_accessories.contains(&active));
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn invariants_hold_over_random_play(
        seed in any::<u64>(),
        creativity in 0_u32..400,
        intents in prop::collection::vec(intent_strategy(), 1..60),
    ) {
        let mut config = GameConfig::default();
        config.lab.starting_creativity = creativity;
        let rules = Rulebook::from_config(&config);
        let catalog = RecipeCatalog::standard();
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut state = initial_state(&config);
        let mission_count = state.missions.len();

        for intent in &intents {
            let before = state.clone();
            match apply_intent(&state, intent, &rules) {
                Err(_) => {
                    prop_assert_eq!(&state, &before);
                }
                Ok(step) => {
                    state = step.state;
                    if let Some(request) = step.reaction {
                        prop_assert!(before.resources.energy >= rules.reaction.energy_cost);
                        let outcome = resolve_reaction(&request, &catalog, &rules.reaction, &mut rng);
                        if outcome.success {
                            prop_assert_eq!(outcome.energy_cost, rules.reaction.energy_cost);
                        }
                        let inventory_before = state.inventory.len();
                        state = apply_outcome(&state, &outcome, &rules, &mut rng);
                        prop_assert!(state.inventory.len() <= inventory_before.saturating_add(1));
                    }
                }
            }
            check_invariants(&state, mission_count, rules.max_input_slots)?;
        }
    }

    #[test]
    fn rediscovery_never_advances_missions(seed in any::<u64>()) {
        let config = GameConfig::default();
        let rules = Rulebook::from_config(&config);
        let catalog = RecipeCatalog::standard();
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut state = initial_state(&config);
        state.resources.energy = 10_000;

        // React h+h repeatedly; once hydrogen gas is owned, mission
        // progress must stay frozen.
        let mut recorded_progress: Option<Vec<u32>> = None;
        for _ in 0..30 {
            for id in ["h", "h"] {
                let step = apply_intent(&state, &Intent::SelectInput { element: ElementId::new(id) }, &rules);
                prop_assert!(step.is_ok());
                if let Ok(step) = step {
                    state = step.state;
                }
            }
            let step = apply_intent(&state, &Intent::React, &rules);
            prop_assert!(step.is_ok());
            let Ok(step) = step else { break };
            let Some(request) = step.reaction else { break };
            let outcome = resolve_reaction(&request, &catalog, &rules.reaction, &mut rng);
            state = apply_outcome(&step.state, &outcome, &rules, &mut rng);

            let owned = state.inventory.iter().any(|e| e.id.as_str() == "h2");
            let progress: Vec<u32> = state.missions.iter().map(|m| m.condition.current()).collect();
            match recorded_progress.clone() {
                Some(recorded) => {
                    prop_assert_eq!(recorded, progress);
                }
                None if owned => recorded_progress = Some(progress),
                None => {}
            }
        }
    }
}
