//! Error types for the generative resolver.
//!
//! Uses `thiserror` for typed errors that surface through the oracle
//! pipeline: configuration, prompt rendering, LLM calls, response parsing.
//! None of them escape [`RemoteResolver`](crate::resolver::RemoteResolver);
//! every error degrades to an offline outcome there.

/// Errors that can occur while consulting the oracle.
#[derive(Debug, thiserror::Error)]
pub enum OracleError {
    /// Configuration is invalid or missing.
    #[error("config error: {0}")]
    Config(String),

    /// Failed to load or render a prompt template.
    #[error("template render error: {0}")]
    Template(String),

    /// An LLM backend returned an error or was unreachable.
    #[error("LLM backend error: {0}")]
    LlmBackend(String),

    /// The LLM response could not be parsed into a valid verdict.
    #[error("response parse error: {0}")]
    Parse(String),

    /// The backend did not answer within the deadline.
    #[error("timeout: oracle did not answer within {timeout_ms}ms")]
    Timeout {
        /// The deadline in milliseconds.
        timeout_ms: u64,
    },

    /// Serialization or deserialization failure.
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
}
