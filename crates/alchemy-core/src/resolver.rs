//! Reaction resolver trait and the local, catalog-backed implementation.
//!
//! When the furnace fires, the lab hands a [`ReactionRequest`] to a
//! [`Resolver`] and awaits a [`ReactionOutcome`]. The trait abstracts the
//! mechanism by which outcomes are obtained: the [`LocalResolver`] rolls
//! against the curated recipe catalog, while the generative resolver in
//! `alchemy-oracle` consults an external service.
//!
//! Resolution is total. Every path produces a well-formed outcome; there is
//! no error type.

use std::future::Future;
use std::sync::Mutex;

use alchemy_lab::catalog::{atomic_sum, canonical_order};
use alchemy_lab::{ReactionRules, RecipeCatalog, canonical_key, creativity_reward};
use alchemy_types::{
    AccessoryKind, CatalystKind, Element, ElementCategory, ElementId, ReactionOutcome, Rarity,
    VisualEffect,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

/// Glow color of an unstable isotope.
pub const FALLBACK_COLOR: &str = "#64748b";

/// Glow color of a failed reaction.
pub const FAILURE_COLOR: &str = "#334155";

/// Display name of the unstable isotope product.
pub const ISOTOPE_NAME: &str = "不穩定同位素";

// ---------------------------------------------------------------------------
// Request
// ---------------------------------------------------------------------------

/// Everything a resolver needs to decide one reaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReactionRequest {
    /// Elements in the furnace, in slot order.
    pub inputs: Vec<Element>,
    /// Active catalyst, if any.
    pub catalyst: Option<CatalystKind>,
    /// Equipped accessory, if any.
    pub accessory: Option<AccessoryKind>,
    /// Player insight at the time of the reaction.
    pub insight: u32,
}

impl ReactionRequest {
    /// Canonical key of the inputs.
    pub fn key(&self) -> String {
        canonical_key(self.inputs.iter().map(|e| &e.id))
    }
}

// ---------------------------------------------------------------------------
// Resolver trait
// ---------------------------------------------------------------------------

/// A source of reaction outcomes.
///
/// Implementations must return a well-formed [`ReactionOutcome`] for every
/// request, degrading to a failure outcome instead of erroring.
pub trait Resolver: Send + Sync {
    /// Decide the outcome of one reaction.
    fn resolve(&self, request: &ReactionRequest) -> impl Future<Output = ReactionOutcome> + Send;
}

// ---------------------------------------------------------------------------
// Fixed outcomes
// ---------------------------------------------------------------------------

/// Outcome for a request with fewer than two inputs: nothing charged.
pub fn insufficient_inputs_outcome() -> ReactionOutcome {
    ReactionOutcome {
        success: false,
        product: None,
        message: String::from("至少需要兩種元素才能進行反應。"),
        insight_gained: 0,
        creativity_gained: 0,
        energy_cost: 0,
        visual_color: None,
        visual_effect: None,
        is_new_discovery: false,
        rarity: None,
    }
}

/// Outcome of a failed roll.
pub fn failure_outcome(rules: &ReactionRules) -> ReactionOutcome {
    ReactionOutcome {
        success: false,
        product: None,
        message: String::from("分子結構崩解，未能形成穩定的產物。"),
        insight_gained: rules.failure_insight,
        creativity_gained: 0,
        energy_cost: rules.energy_cost,
        visual_color: Some(String::from(FAILURE_COLOR)),
        visual_effect: Some(VisualEffect::Default),
        is_new_discovery: false,
        rarity: None,
    }
}

/// The unstable isotope produced by an unlisted combination.
///
/// Symbol and id derive from the input symbols in canonical order, so the
/// same combination always yields the same isotope.
pub fn unstable_isotope(inputs: &[Element]) -> Element {
    let symbol: String = canonical_order(inputs)
        .iter()
        .map(|e| e.symbol.as_str())
        .collect();
    Element {
        id: ElementId::new(format!("iso_{symbol}")),
        name: String::from(ISOTOPE_NAME),
        symbol,
        atomic_number: atomic_sum(inputs),
        category: ElementCategory::Compound,
        rarity: Rarity::Common,
        description: String::from("一種由多種元素強行聚合而成的臨時物質，結構極其不穩。"),
    }
}

// ---------------------------------------------------------------------------
// Local algorithm
// ---------------------------------------------------------------------------

/// Success probability after catalyst and accessory bonuses, capped at 1.
pub fn success_chance(request: &ReactionRequest, rules: &ReactionRules) -> f64 {
    let mut chance = rules.base_success_chance;
    if request.catalyst == Some(CatalystKind::Stabilizer) {
        chance += rules.stabilizer_bonus;
    }
    if request.accessory == Some(AccessoryKind::CoreStabilizer) {
        chance += rules.core_stabilizer_bonus;
    }
    chance.min(1.0)
}

/// Resolve a reaction against the catalog with a single uniform draw.
pub fn resolve_reaction(
    request: &ReactionRequest,
    catalog: &RecipeCatalog,
    rules: &ReactionRules,
    rng: &mut impl Rng,
) -> ReactionOutcome {
    if request.inputs.len() < 2 {
        return insufficient_inputs_outcome();
    }

    let recipe = catalog.lookup(&request.inputs);
    let chance = success_chance(request, rules);
    let success = rng.random::<f64>() < chance;

    debug!(
        key = %request.key(),
        has_recipe = recipe.is_some(),
        chance = chance,
        success = success,
        "reaction rolled"
    );

    match (success, recipe) {
        (true, Some(recipe)) => {
            let product = recipe.product(&request.inputs);
            ReactionOutcome {
                success: true,
                message: format!("反應成功！獲得了「{}」。", product.name),
                insight_gained: rules.recipe_insight,
                creativity_gained: creativity_reward(recipe.rarity),
                energy_cost: rules.energy_cost,
                visual_color: Some(recipe.rarity.color().to_owned()),
                visual_effect: Some(recipe.effect),
                is_new_discovery: true,
                rarity: Some(recipe.rarity),
                product: Some(product),
            }
        }
        (true, None) => ReactionOutcome {
            success: true,
            product: Some(unstable_isotope(&request.inputs)),
            message: String::from("反應產生了意料之外的不穩定聚合物。"),
            insight_gained: rules.fallback_insight,
            creativity_gained: rules.fallback_creativity,
            energy_cost: rules.energy_cost,
            visual_color: Some(String::from(FALLBACK_COLOR)),
            visual_effect: Some(VisualEffect::Default),
            is_new_discovery: true,
            rarity: Some(Rarity::Common),
        },
        (false, _) => failure_outcome(rules),
    }
}

// ---------------------------------------------------------------------------
// LocalResolver
// ---------------------------------------------------------------------------

/// Resolver backed by the curated catalog and a seeded RNG.
#[derive(Debug)]
pub struct LocalResolver {
    catalog: RecipeCatalog,
    rules: ReactionRules,
    rng: Mutex<StdRng>,
}

impl LocalResolver {
    /// Create a resolver. `None` seeds from OS entropy.
    pub fn new(catalog: RecipeCatalog, rules: ReactionRules, seed: Option<u64>) -> Self {
        let rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        Self {
            catalog,
            rules,
            rng: Mutex::new(rng),
        }
    }

    /// The catalog this resolver consults.
    pub const fn catalog(&self) -> &RecipeCatalog {
        &self.catalog
    }

    /// Resolve with a caller-supplied RNG.
    pub fn resolve_with(&self, request: &ReactionRequest, rng: &mut impl Rng) -> ReactionOutcome {
        resolve_reaction(request, &self.catalog, &self.rules, rng)
    }
}

impl Resolver for LocalResolver {
    fn resolve(&self, request: &ReactionRequest) -> impl Future<Output = ReactionOutcome> + Send {
        // A poisoned lock only means another resolution panicked mid-draw;
        // the generator state is still usable.
        let mut rng = self
            .rng
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let outcome = self.resolve_with(request, &mut *rng);
        drop(rng);
        info!(
            key = %request.key(),
            success = outcome.success,
            product = outcome.product.as_ref().map(|p| p.id.as_str()),
            "reaction resolved locally"
        );
        std::future::ready(outcome)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
