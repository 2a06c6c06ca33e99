//! Generative reaction resolver for the Neon Alchemy lab.
//!
//! [`RemoteResolver`] implements `alchemy_core::Resolver` by asking an
//! external LLM what a combination of elements produces. The response is
//! parsed against a fixed verdict schema and converted into the same
//! [`ReactionOutcome`](alchemy_types::ReactionOutcome) the local resolver
//! returns. Transport, timeout and parse failures never surface: they
//! degrade to an offline failure outcome logged at `warn`.
//!
//! # Modules
//!
//! - [`config`] -- Environment-based configuration ([`OracleConfig`])
//! - [`error`] -- Error types ([`OracleError`])
//! - [`llm`] -- Backend dispatch over OpenAI-compatible, Anthropic and Gemini APIs
//! - [`parse`] -- Verdict parsing with recovery strategies
//! - [`prompt`] -- `minijinja` prompt templates
//! - [`resolver`] -- The [`RemoteResolver`] itself

pub mod config;
pub mod error;
pub mod llm;
pub mod parse;
pub mod prompt;
pub mod resolver;

pub use config::{BackendType, LlmBackendConfig, OracleConfig};
pub use error::OracleError;
pub use llm::{LlmBackend, create_backend};
pub use parse::{OracleVerdict, parse_verdict};
pub use prompt::{PromptEngine, RenderedPrompt};
pub use resolver::{OFFLINE_MESSAGE, RemoteResolver};
