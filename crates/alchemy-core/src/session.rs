//! The lab session: single owner of the game state.
//!
//! [`LabSession`] accepts intents, starts at most one reaction at a time on
//! the [`ReactionScheduler`], and applies the outcome exactly once when it
//! arrives. Shop and equip intents keep working while a reaction is in
//! flight; furnace intents are rejected until it settles.

use std::sync::Arc;
use std::time::Duration;

use alchemy_types::{GameState, Intent, ReactionOutcome};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::config::GameConfig;
use crate::progression::{
    Rejection, Rulebook, abort_reaction, apply_intent, apply_outcome, initial_state,
};
use crate::resolver::Resolver;
use crate::scheduler::{PendingReaction, ReactionScheduler};

/// A running game backed by resolver `R`.
#[derive(Debug)]
pub struct LabSession<R> {
    state: GameState,
    rules: Rulebook,
    resolver: Arc<R>,
    scheduler: ReactionScheduler,
    pending: Option<PendingReaction>,
    rng: StdRng,
}

impl<R: Resolver + 'static> LabSession<R> {
    /// Start a fresh game from `config`.
    pub fn new(config: &GameConfig, resolver: R) -> Self {
        Self::with_state(config, resolver, initial_state(config))
    }

    /// Resume from an existing state.
    ///
    /// A state captured mid-reaction has no task to settle it, so it resumes
    /// idle with its inputs still loaded.
    pub fn with_state(config: &GameConfig, resolver: R, state: GameState) -> Self {
        let state = if state.is_processing() {
            abort_reaction(&state)
        } else {
            state
        };
        // Offset the mission stream from the resolver's stream so a shared
        // seed does not correlate the two.
        let rng = config.lab.seed.map_or_else(StdRng::from_os_rng, |seed| {
            StdRng::seed_from_u64(seed.wrapping_add(1))
        });
        Self {
            state,
            rules: Rulebook::from_config(config),
            resolver: Arc::new(resolver),
            scheduler: ReactionScheduler::new(Duration::from_millis(
                config.lab.processing_delay_ms,
            )),
            pending: None,
            rng,
        }
    }

    /// Current state, which is also the presentation view.
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    /// Rules the session applies.
    pub const fn rules(&self) -> &Rulebook {
        &self.rules
    }

    /// Whether a reaction is in flight.
    pub const fn is_processing(&self) -> bool {
        self.pending.is_some()
    }

    /// Apply one intent.
    ///
    /// A react intent also schedules the reaction; call [`settle`] or
    /// [`poll`] to apply its outcome.
    ///
    /// # Errors
    ///
    /// Returns the [`Rejection`] unchanged; the state is not touched.
    ///
    /// [`settle`]: Self::settle
    /// [`poll`]: Self::poll
    pub fn dispatch(&mut self, intent: &Intent) -> Result<&GameState, Rejection> {
        let step = apply_intent(&self.state, intent, &self.rules).inspect_err(|rejection| {
            debug!(intent = intent.kind(), reason = %rejection, "intent rejected");
        })?;
        self.state = step.state;
        if let Some(request) = step.reaction {
            let pending = self.scheduler.schedule(Arc::clone(&self.resolver), request);
            self.pending = Some(pending);
        }
        Ok(&self.state)
    }

    /// Wait for the in-flight reaction, if any, and apply it.
    ///
    /// Returns `true` if an outcome was applied.
    pub async fn settle(&mut self) -> bool {
        match self.pending.take() {
            Some(pending) => {
                let outcome = pending.outcome().await;
                self.finish(outcome);
                true
            }
            None => false,
        }
    }

    /// Apply the in-flight reaction only if it has already finished.
    ///
    /// Returns `true` if an outcome was applied.
    pub async fn poll(&mut self) -> bool {
        if self.pending.as_ref().is_some_and(PendingReaction::is_finished) {
            self.settle().await
        } else {
            false
        }
    }

    /// Cancel any in-flight reaction and return to idle without charging.
    ///
    /// Reactions started afterwards abort the same way.
    pub async fn shutdown(&mut self) {
        self.scheduler.cancel_all();
        self.settle().await;
    }

    fn finish(&mut self, outcome: Option<ReactionOutcome>) {
        self.state = match outcome {
            Some(outcome) => {
                info!(
                    success = outcome.success,
                    energy_cost = outcome.energy_cost,
                    message = %outcome.message,
                    "reaction outcome applied"
                );
                apply_outcome(&self.state, &outcome, &self.rules, &mut self.rng)
            }
            None => {
                info!("reaction aborted without outcome");
                abort_reaction(&self.state)
            }
        };
    }
}
