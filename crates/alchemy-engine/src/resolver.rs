//! Resolver selection at configuration time.

use alchemy_core::{GameConfig, LocalResolver, ReactionRequest, Resolver, ResolverMode};
use alchemy_lab::RecipeCatalog;
use alchemy_oracle::{OracleConfig, RemoteResolver};
use alchemy_types::ReactionOutcome;
use tracing::info;

use crate::error::EngineError;

/// The resolver chosen by `resolver.mode`.
pub enum ConfiguredResolver {
    /// Catalog-backed rolls.
    Local(Box<LocalResolver>),
    /// LLM-backed verdicts.
    Remote(Box<RemoteResolver>),
}

impl ConfiguredResolver {
    /// Build the resolver the configuration asks for.
    ///
    /// Remote mode reads the `ORACLE_*` environment variables.
    pub fn from_config(config: &GameConfig) -> Result<Self, EngineError> {
        let rules = config.reaction_rules();
        match config.resolver.mode {
            ResolverMode::Local => {
                info!(seeded = config.lab.seed.is_some(), "using local resolver");
                Ok(Self::Local(Box::new(LocalResolver::new(
                    RecipeCatalog::standard(),
                    rules,
                    config.lab.seed,
                ))))
            }
            ResolverMode::Remote => {
                let oracle = OracleConfig::from_env()?;
                info!(
                    backend = ?oracle.backend.backend_type,
                    model = %oracle.backend.model,
                    timeout = ?oracle.timeout,
                    "using remote resolver"
                );
                Ok(Self::Remote(Box::new(RemoteResolver::from_config(
                    &oracle, &rules,
                )?)))
            }
        }
    }
}

impl Resolver for ConfiguredResolver {
    async fn resolve(&self, request: &ReactionRequest) -> ReactionOutcome {
        match self {
            Self::Local(resolver) => resolver.resolve(request).await,
            Self::Remote(resolver) => resolver.resolve(request).await,
        }
    }
}
