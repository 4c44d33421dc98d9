//! Error types for configuration loading and validation.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for configuration operations.
///
/// Every variant is fatal at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the device file.
    #[error("Could not read config file '{}': {source}", path.display())]
    FileRead {
        /// Path to the device file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The device file is not valid YAML or has the wrong shape.
    #[error("Could not unmarshal config: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// Failed to write the device file template (for init command).
    #[error("Could not write config file '{}': {source}", path.display())]
    FileWrite {
        /// Path to the device file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The dotenv file exists but could not be loaded.
    #[error("Error loading env file '{}': {source}", path.display())]
    EnvFile {
        /// Path to the dotenv file
        path: PathBuf,
        /// Underlying dotenvy error
        #[source]
        source: dotenvy::Error,
    },

    /// A required credential is unset or empty.
    #[error("{var} is missing in the environment variables")]
    MissingCredential {
        /// Name of the environment variable
        var: &'static str,
    },

    /// A device entry is unusable.
    #[error("Invalid device #{index}: {reason}")]
    InvalidDevice {
        /// 1-based position in the device list
        index: usize,
        /// Reason for invalidity
        reason: &'static str,
    },

    /// The bot token cannot be turned into an API URL.
    #[error("Invalid bot token: {reason}")]
    InvalidToken {
        /// Reason for invalidity
        reason: String,
    },
}

/// Environment variable names for `MissingCredential` errors.
pub mod var {
    /// Telegram bot token.
    pub const BOT_TOKEN: &str = "TELEGRAM_BOT_TOKEN";
    /// Destination chat id.
    pub const CHAT_ID: &str = "TELEGRAM_CHAT_ID";
}

impl ConfigError {
    /// Creates a `MissingCredential` error.
    #[must_use]
    pub const fn missing(var: &'static str) -> Self {
        Self::MissingCredential { var }
    }
}
