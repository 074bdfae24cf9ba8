//! Error types for nextgric

use thiserror::Error;

/// Error types for the nextgric library.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),

    /// No E2 nodes were discovered over the session layer.
    #[error("Topology error: {0}")]
    Topology(String),

    /// Transport-level send failure, carried opaquely from the session layer.
    #[error("Transport error: {0}")]
    Transport(String),

    /// Control request assembly failure.
    #[error("Control error: {0}")]
    Control(String),

    /// Network I/O errors.
    #[error("Network error: {0}")]
    Network(#[from] std::io::Error),

    /// YAML parsing errors.
    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),
}
