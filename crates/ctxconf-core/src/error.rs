//! Error types for ctxconf-core
//!
//! Resolution itself never fails: lookups report absence instead. These
//! errors cover loading and validating resolver settings.

use std::path::PathBuf;

/// Result type for ctxconf-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while preparing a resolver
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Settings value rejected by validation
    #[error("Invalid resolver settings: {message}")]
    InvalidSettings { message: String },

    /// Settings file not found at expected path
    #[error("Settings not found at {path}")]
    SettingsNotFound { path: PathBuf },

    /// Tree or document error from ctxconf-tree
    #[error(transparent)]
    Tree(#[from] ctxconf_tree::Error),

    /// TOML deserialization error
    #[error(transparent)]
    TomlDe(#[from] toml::de::Error),
}

impl Error {
    pub fn invalid_settings(message: impl Into<String>) -> Self {
        Self::InvalidSettings {
            message: message.into(),
        }
    }
}
