//! Error types for the lab driver binary.
//!
//! [`EngineError`] wraps every failure mode of startup and the command loop.
//! Game rejections are not errors here: they are part of the output stream.

/// Top-level error for the lab driver.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: alchemy_core::ConfigError,
    },

    /// The generative resolver could not be configured.
    #[error("oracle error: {source}")]
    Oracle {
        /// The underlying oracle error.
        #[from]
        source: alchemy_oracle::OracleError,
    },

    /// A command line could not be understood.
    #[error("invalid command: {message}")]
    Command {
        /// What was wrong with the line.
        message: String,
    },

    /// Reading input or writing output failed.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Output serialization failed.
    #[error("serialization error: {source}")]
    Json {
        /// The underlying serde error.
        #[from]
        source: serde_json::Error,
    },
}
