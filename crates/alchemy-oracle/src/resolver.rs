//! The generative [`Resolver`] backed by an external LLM.
//!
//! Each reaction renders a prompt, asks the configured backend under a
//! deadline and converts the parsed verdict into a [`ReactionOutcome`]. Any
//! failure along the way degrades to an offline outcome; the lab never sees
//! an error from here.

use std::path::Path;
use std::time::Duration;

use alchemy_core::resolver::{FAILURE_COLOR, insufficient_inputs_outcome};
use alchemy_core::{ReactionRequest, Resolver};
use alchemy_lab::ReactionRules;
use alchemy_lab::catalog::{atomic_sum, product_id};
use alchemy_lab::creativity_reward;
use alchemy_types::{Element, ElementCategory, ReactionOutcome, VisualEffect};
use tracing::{info, warn};

use crate::config::OracleConfig;
use crate::error::OracleError;
use crate::llm::{LlmBackend, create_backend};
use crate::parse::{OracleVerdict, parse_verdict};
use crate::prompt::{PromptContext, PromptEngine};

/// Message shown when the oracle could not be consulted.
pub const OFFLINE_MESSAGE: &str = "煉金引擎離線，反應未能完成。";

/// Resolver that consults an LLM for every reaction.
pub struct RemoteResolver {
    backend: LlmBackend,
    prompts: PromptEngine,
    timeout: Duration,
    energy_cost: u32,
    charge_offline: bool,
}

impl RemoteResolver {
    /// Create a resolver from oracle configuration.
    ///
    /// # Errors
    ///
    /// Returns [`OracleError::Template`] if a template override cannot be
    /// read or compiled.
    pub fn from_config(config: &OracleConfig, rules: &ReactionRules) -> Result<Self, OracleError> {
        let prompts = match config.templates_dir.as_deref() {
            Some(dir) => PromptEngine::from_dir(Path::new(dir))?,
            None => PromptEngine::new()?,
        };
        Ok(Self {
            backend: create_backend(&config.backend),
            prompts,
            timeout: config.timeout,
            energy_cost: rules.energy_cost,
            charge_offline: config.charge_offline,
        })
    }

    /// Ask the oracle for a verdict on one request.
    async fn consult(&self, request: &ReactionRequest) -> Result<OracleVerdict, OracleError> {
        let prompt = self.prompts.render(&PromptContext::from_request(request))?;
        let raw = match tokio::time::timeout(self.timeout, self.backend.complete(&prompt)).await {
            Ok(result) => result?,
            Err(_) => {
                return Err(OracleError::Timeout {
                    timeout_ms: u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX),
                });
            }
        };
        parse_verdict(&raw)
    }

    /// Outcome when the oracle could not be consulted: nothing gained, and
    /// nothing charged unless configured otherwise.
    pub fn offline_outcome(&self) -> ReactionOutcome {
        ReactionOutcome {
            success: false,
            product: None,
            message: OFFLINE_MESSAGE.to_owned(),
            insight_gained: 0,
            creativity_gained: 0,
            energy_cost: if self.charge_offline { self.energy_cost } else { 0 },
            visual_color: Some(FAILURE_COLOR.to_owned()),
            visual_effect: Some(VisualEffect::Default),
            is_new_discovery: false,
            rarity: None,
        }
    }
}

impl Resolver for RemoteResolver {
    async fn resolve(&self, request: &ReactionRequest) -> ReactionOutcome {
        if request.inputs.len() < 2 {
            return insufficient_inputs_outcome();
        }

        match self.consult(request).await {
            Ok(verdict) => {
                let outcome = verdict_outcome(verdict, request, self.energy_cost);
                info!(
                    key = %request.key(),
                    backend = self.backend.name(),
                    success = outcome.success,
                    product = outcome.product.as_ref().map(|p| p.id.as_str()),
                    "reaction resolved by oracle"
                );
                outcome
            }
            Err(e) => {
                warn!(
                    key = %request.key(),
                    backend = self.backend.name(),
                    error = %e,
                    "oracle unavailable, reaction degraded to offline failure"
                );
                self.offline_outcome()
            }
        }
    }
}

/// Convert a validated verdict into an outcome for `request`.
pub fn verdict_outcome(
    verdict: OracleVerdict,
    request: &ReactionRequest,
    energy_cost: u32,
) -> ReactionOutcome {
    let insight_gained = verdict.insight_gained();
    let product = if verdict.success {
        verdict.product_names().map(|(name, symbol)| Element {
            id: product_id(symbol),
            name: name.to_owned(),
            symbol: symbol.to_owned(),
            atomic_number: atomic_sum(&request.inputs),
            category: verdict.product_type.unwrap_or(ElementCategory::Compound),
            rarity: verdict.rarity,
            description: verdict.product_description.clone().unwrap_or_default(),
        })
    } else {
        None
    };
    let success = product.is_some();

    ReactionOutcome {
        success,
        creativity_gained: if success {
            creativity_reward(verdict.rarity)
        } else {
            0
        },
        rarity: success.then_some(verdict.rarity),
        is_new_discovery: success,
        product,
        message: verdict.message,
        insight_gained,
        energy_cost,
        visual_color: verdict.visual_color,
        visual_effect: Some(verdict.visual_effect.unwrap_or(VisualEffect::Default)),
    }
}
