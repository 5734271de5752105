//! Errors raised while building [`Settings`](crate::config::Settings).

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment value could not be coerced to the field's type.
    #[error("invalid value for {key}: {reason} (got {value:?})")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },

    /// The env file exists but could not be read or parsed.
    #[error("failed to load env file {}: {source}", .path.display())]
    EnvFile {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },
}

impl ConfigError {
    pub(crate) fn invalid(key: &'static str, value: &str, reason: impl Into<String>) -> Self {
        ConfigError::Invalid {
            key,
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// Name of the offending variable, when the error concerns one.
    pub fn key(&self) -> Option<&'static str> {
        match self {
            ConfigError::Invalid { key, .. } => Some(*key),
            ConfigError::EnvFile { .. } => None,
        }
    }
}
