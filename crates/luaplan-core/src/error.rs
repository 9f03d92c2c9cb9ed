//! Error types for plan and manifest operations.

use std::path::PathBuf;

/// Errors that can occur while loading or resolving a build plan.
#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    /// TOML deserialization error.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    /// I/O error reading/writing manifest files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Manifest file not found.
    #[error("manifest not found: {}", path.display())]
    ManifestNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// Platform name not recognized.
    #[error("unknown platform: '{name}'")]
    UnknownPlatform {
        /// The unrecognized name.
        name: String,
    },

    /// Build configuration name not recognized.
    #[error("unknown build configuration: '{name}'")]
    UnknownConfig {
        /// The unrecognized name.
        name: String,
    },

    /// Validation error in a manifest or catalog.
    #[error("validation error: {detail}")]
    Validation {
        /// Description of the validation failure.
        detail: String,
    },
}

/// Result type for plan operations.
pub type Result<T> = std::result::Result<T, PlanError>;
