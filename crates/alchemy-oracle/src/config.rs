//! Configuration types for the generative resolver.
//!
//! All configuration is loaded from environment variables: which LLM backend
//! to call (with its URL, API key and model name), how long to wait, where
//! to find prompt overrides, and whether an offline attempt still costs
//! energy.

use std::time::Duration;

use crate::error::OracleError;

/// Complete oracle configuration loaded from the environment.
#[derive(Debug, Clone)]
pub struct OracleConfig {
    /// LLM backend to consult.
    pub backend: LlmBackendConfig,
    /// Maximum time allowed for one reaction verdict.
    pub timeout: Duration,
    /// Directory with `system.j2` / `reaction.j2` overrides, if any.
    pub templates_dir: Option<String>,
    /// Whether a reaction that hit an offline oracle is still charged.
    pub charge_offline: bool,
}

/// Configuration for a single LLM backend.
#[derive(Debug, Clone)]
pub struct LlmBackendConfig {
    /// The backend type.
    pub backend_type: BackendType,
    /// Base API URL (e.g. `https://api.openai.com/v1`).
    pub api_url: String,
    /// API key for authentication.
    pub api_key: String,
    /// Model identifier.
    pub model: String,
}

/// Supported LLM backend types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendType {
    /// `OpenAI`-compatible API (works with `OpenAI`, `DeepSeek`, Ollama).
    OpenAi,
    /// Anthropic Messages API.
    Anthropic,
    /// Google Gemini `generateContent` API with a response schema.
    Gemini,
}

impl BackendType {
    /// Parse a backend name as written in `ORACLE_BACKEND`.
    pub fn parse(name: &str) -> Result<Self, OracleError> {
        match name.to_lowercase().as_str() {
            "openai" | "deepseek" | "ollama" => Ok(Self::OpenAi),
            "anthropic" | "claude" => Ok(Self::Anthropic),
            "gemini" | "google" => Ok(Self::Gemini),
            other => Err(OracleError::Config(format!("unknown backend type: {other}"))),
        }
    }
}

impl OracleConfig {
    /// Load configuration from environment variables.
    ///
    /// Required variables:
    /// - `ORACLE_BACKEND` -- backend type (`openai`, `deepseek`, `ollama`,
    ///   `anthropic`, `claude`, `gemini`)
    /// - `ORACLE_API_URL` -- API base URL
    /// - `ORACLE_API_KEY` -- API key
    /// - `ORACLE_MODEL` -- model name
    ///
    /// Optional variables:
    /// - `ORACLE_TIMEOUT_MS` -- verdict deadline in milliseconds (default 15000)
    /// - `ORACLE_TEMPLATES_DIR` -- directory with prompt template overrides
    /// - `ORACLE_CHARGE_OFFLINE` -- charge energy when offline (default `false`)
    pub fn from_env() -> Result<Self, OracleError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, OracleError> {
        let required = |name: &str| {
            lookup(name)
                .ok_or_else(|| OracleError::Config(format!("missing required env var {name}")))
        };

        let backend = LlmBackendConfig {
            backend_type: BackendType::parse(&required("ORACLE_BACKEND")?)?,
            api_url: required("ORACLE_API_URL")?,
            api_key: required("ORACLE_API_KEY")?,
            model: required("ORACLE_MODEL")?,
        };

        let timeout_ms: u64 = lookup("ORACLE_TIMEOUT_MS")
            .unwrap_or_else(|| "15000".to_owned())
            .parse()
            .map_err(|e| OracleError::Config(format!("invalid ORACLE_TIMEOUT_MS: {e}")))?;

        let charge_offline: bool = lookup("ORACLE_CHARGE_OFFLINE")
            .unwrap_or_else(|| "false".to_owned())
            .parse()
            .map_err(|e| OracleError::Config(format!("invalid ORACLE_CHARGE_OFFLINE: {e}")))?;

        Ok(Self {
            backend,
            timeout: Duration::from_millis(timeout_ms),
            templates_dir: lookup("ORACLE_TEMPLATES_DIR"),
            charge_offline,
        })
    }
}
