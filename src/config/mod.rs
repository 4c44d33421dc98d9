//! Configuration layer for hostwatch.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - Device list parsing ([`DevicesFile`])
//! - Bot credentials from the environment ([`Credentials`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Device file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Sources
//!
//! Everything is read once at startup:
//!
//! 1. **Dotenv file** (`--env-file`, default `.env`) - loaded into the process
//!    environment if present; variables already set are left untouched
//! 2. **Environment** - `TELEGRAM_BOT_TOKEN` and `TELEGRAM_CHAT_ID`, both required
//! 3. **Device file** (`--devices`, default `devices.yaml`) - required
//!
//! Polling interval, probe attempts and timeouts are fixed and not exposed.

mod cli;
mod credentials;
pub mod defaults;
mod devices;
mod error;
mod validated;

#[cfg(test)]
mod devices_tests;

pub use cli::{Cli, Command};
pub use credentials::{Credentials, load_env_file};
pub use devices::{DeviceEntry, DevicesFile, default_devices_template};
pub use error::{ConfigError, var};
pub use validated::{ValidatedConfig, write_default_config};
