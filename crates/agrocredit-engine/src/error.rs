//! Engine configuration error types

use thiserror::Error;

/// Errors that can occur while loading engine configuration or reference data
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read a config or species table file
    #[error("Failed to read file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Species entry with an empty key or unusable coefficients
    #[error("Invalid species '{key}': {reason}")]
    InvalidSpecies {
        /// Species key as written in the file
        key: String,
        /// Description of the issue
        reason: String,
    },

    /// The same species key appears twice in one file
    #[error("Duplicate species key: '{0}'")]
    DuplicateSpecies(String),

    /// Inconsistent configuration values
    #[error("Configuration error: {0}")]
    Invalid(String),
}
