//! Reaction resolution and progression for the Neon Alchemy lab.
//!
//! This crate owns the game loop: an intent is validated into a new state,
//! a react intent hands a request to a [`Resolver`], and the outcome is
//! folded back into the state after a presentation delay.
//!
//! # Modules
//!
//! - [`config`] -- Configuration loading from `alchemy-config.yaml` into
//!   strongly-typed structs.
//! - [`resolver`] -- [`Resolver`] trait and the catalog-backed [`LocalResolver`].
//! - [`progression`] -- Pure intent and outcome transitions over the game state.
//! - [`scheduler`] -- Deferred, cancellable reaction tasks.
//! - [`session`] -- [`LabSession`], the single owner of the state.
//!
//! [`Resolver`]: resolver::Resolver
//! [`LocalResolver`]: resolver::LocalResolver
//! [`LabSession`]: session::LabSession

pub mod config;
pub mod progression;
pub mod resolver;
pub mod scheduler;
pub mod session;

pub use config::{ConfigError, GameConfig, ResolverMode};
pub use progression::{Rejection, Rulebook, Step, apply_intent, apply_outcome, initial_state};
pub use resolver::{LocalResolver, ReactionRequest, Resolver, resolve_reaction};
pub use scheduler::{PendingReaction, ReactionScheduler};
pub use session::LabSession;
