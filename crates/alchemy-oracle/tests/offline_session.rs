//! An unreachable oracle folded through a full lab session.

#![allow(clippy::unwrap_used)]

use std::time::Duration;

use alchemy_core::{GameConfig, LabSession, initial_state};
use alchemy_lab::ReactionRules;
use alchemy_oracle::{
    BackendType, LlmBackendConfig, OFFLINE_MESSAGE, OracleConfig, RemoteResolver,
};
use alchemy_types::{CatalystKind, ElementId, Intent, LabPhase};

fn offline_session(charge_offline: bool) -> LabSession<RemoteResolver> {
    let mut config = GameConfig::default();
    config.lab.seed = Some(9);
    config.lab.processing_delay_ms = 0;

    let oracle = OracleConfig {
        backend: LlmBackendConfig {
            backend_type: BackendType::Anthropic,
            api_url: "http://127.0.0.1:9".to_owned(),
            api_key: "none".to_owned(),
            model: "none".to_owned(),
        },
        timeout: Duration::from_secs(2),
        templates_dir: None,
        charge_offline,
    };
    let resolver = RemoteResolver::from_config(&oracle, &ReactionRules::default()).unwrap();

    let mut state = initial_state(&config);
    state.catalysts.insert(CatalystKind::Stabilizer, 1);
    state.active_catalyst = Some(CatalystKind::Stabilizer);
    LabSession::with_state(&config, resolver, state)
}

async fn react_h_o(lab: &mut LabSession<RemoteResolver>) {
    for id in ["h", "o"] {
        lab.dispatch(&Intent::SelectInput {
            element: ElementId::new(id),
        })
        .unwrap();
    }
    lab.dispatch(&Intent::React).unwrap();
    assert!(lab.settle().await);
}

#[tokio::test]
async fn offline_reaction_is_refunded() {
    let mut lab = offline_session(false);
    let before = lab.state().clone();
    react_h_o(&mut lab).await;
    let after = lab.state();

    assert_eq!(after.phase, LabPhase::Idle);
    assert_eq!(after.message, OFFLINE_MESSAGE);
    assert_eq!(after.history, vec![OFFLINE_MESSAGE.to_owned()]);
    assert_eq!(after.resources, before.resources);
    assert_eq!(after.missions, before.missions);
    assert_eq!(after.inventory, before.inventory);
    assert!(after.selected_inputs.is_empty());

    // Only energy is refunded; the active catalyst unit is still spent.
    assert_eq!(after.catalyst_stock(CatalystKind::Stabilizer), 0);
    assert_eq!(after.active_catalyst, None);
}

#[tokio::test]
async fn offline_reaction_can_be_charged() {
    let mut lab = offline_session(true);
    react_h_o(&mut lab).await;
    assert_eq!(lab.state().resources.energy, 90);
    assert_eq!(lab.state().resources.insight, 0);
    assert_eq!(lab.state().message, OFFLINE_MESSAGE);
}
