//! Error types for the ritual engine binary.
//!
//! [`EngineError`] wraps every failure mode of engine startup and the
//! tick loop so `main` can propagate with `?`.

/// Top-level error for the ritual engine binary.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Configuration loading or validation failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: ritual_core::ConfigError,
    },

    /// Demo world construction failed.
    #[error("world error: {source}")]
    World {
        /// The underlying world error.
        #[from]
        source: ritual_world::WorldError,
    },

    /// Core registration or lookup failed.
    #[error("runner error: {source}")]
    Runner {
        /// The underlying runner error.
        #[from]
        source: ritual_core::RunnerError,
    },

    /// Run state could not be serialized for persistence.
    #[error("state serialization failed: {source}")]
    State {
        /// The underlying JSON error.
        #[from]
        source: serde_json::Error,
    },
}
