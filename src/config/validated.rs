//! Validated configuration after loading every startup source.
//!
//! This module contains the final configuration used by the application.
//! All validation is performed during construction.

use std::fmt;
use std::path::{Path, PathBuf};

use url::Url;

use crate::monitor::Target;
use crate::notify::send_message_url;

use super::cli::Cli;
use super::credentials::{Credentials, load_env_file};
use super::devices::{DevicesFile, default_devices_template};
use super::error::ConfigError;

/// Fully validated configuration ready for use by the application.
///
/// # Construction
///
/// Use [`ValidatedConfig::load`] at startup, or [`ValidatedConfig::from_raw`]
/// with already-parsed inputs.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Targets in device-file order (may be empty)
    pub targets: Vec<Target>,

    /// Bot token and destination chat
    pub credentials: Credentials,

    /// `sendMessage` endpoint derived from the bot token
    pub endpoint: Url,

    /// Device file the targets came from
    pub devices_path: PathBuf,

    /// Dry-run mode (log notifications without sending them)
    pub dry_run: bool,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Config {{ devices: {} ({} target(s)), bot_token: {}, chat_id: {}, dry_run: {} }}",
            self.devices_path.display(),
            self.targets.len(),
            self.credentials.masked_token(),
            self.credentials.chat_id,
            self.dry_run,
        )
    }
}

impl ValidatedConfig {
    /// Builds a validated configuration from already-loaded inputs.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A device entry has a blank description or ip
    /// - The bot token contains characters that would change the API path
    /// - The bot token does not form a valid URL
    pub fn from_raw(
        cli: &Cli,
        devices: DevicesFile,
        credentials: Credentials,
    ) -> Result<Self, ConfigError> {
        let targets = devices.into_targets()?;

        if let Some(c) = credentials
            .bot_token
            .chars()
            .find(|c| c.is_whitespace() || matches!(c, '/' | '?' | '#'))
        {
            return Err(ConfigError::InvalidToken {
                reason: format!("unexpected character {c:?}"),
            });
        }

        let endpoint =
            send_message_url(&credentials.bot_token).map_err(|e| ConfigError::InvalidToken {
                reason: e.to_string(),
            })?;

        Ok(Self {
            targets,
            credentials,
            endpoint,
            devices_path: cli.devices.clone(),
            dry_run: cli.dry_run,
            verbose: cli.verbose,
        })
    }

    /// Loads the dotenv file, reads credentials, and parses the device file.
    ///
    /// Credentials are checked before the device file, matching the order
    /// an operator usually fixes them in.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The dotenv file exists but is malformed
    /// - A credential is missing
    /// - The device file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        load_env_file(&cli.env_file)?;
        let credentials = Credentials::from_env()?;
        let devices = DevicesFile::load(&cli.devices)?;

        Self::from_raw(cli, devices, credentials)
    }
}

/// Writes a device file template to `path`.
///
/// # Errors
///
/// Returns [`ConfigError::FileWrite`] if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    std::fs::write(path, default_devices_template()).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}
