//! Typed error variants for the vizdeck-config crate.
//!
//! Produced by `YamlConfigStore::load_from` and by the background
//! persistence of every write. Application code usually converts them into
//! `anyhow::Error`; callers that want to match on the failure mode can
//! downcast.

use thiserror::Error;

/// Errors that can occur when loading or saving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An I/O error occurred reading or writing the settings file.
    #[error("I/O error on settings file: {0}")]
    Io(#[from] std::io::Error),

    /// The settings file contained YAML that could not be parsed.
    #[error("YAML parse error in settings file: {0}")]
    Parse(#[source] serde_yaml_ng::Error),

    /// The in-memory values could not be serialized back to YAML.
    #[error("failed to serialize settings: {0}")]
    Serialize(#[source] serde_yaml_ng::Error),

    /// The store went away before reporting the outcome of a write.
    #[error("settings write was aborted before completion")]
    WriteAborted,
}
