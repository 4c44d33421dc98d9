//! YAML device file parsing.
//!
//! Defines the structure of the device file with serde.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::monitor::Target;

use super::ConfigError;

/// Root structure of the device file.
///
/// ```yaml
/// devices:
///   - description: Core router
///     ip: 192.168.1.1
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct DevicesFile {
    /// Devices in file order; `None` when the key is absent or empty
    #[serde(default)]
    pub devices: Option<Vec<DeviceEntry>>,
}

/// One device entry.
#[derive(Debug, Clone, Deserialize)]
pub struct DeviceEntry {
    /// Human-readable label
    #[serde(default)]
    pub description: String,

    /// IP literal or host name to ping
    #[serde(default)]
    pub ip: String,
}

impl DevicesFile {
    /// Loads the device list from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses the device list from a YAML string.
    ///
    /// A document with no content (blank or only comments) is an empty list.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let blank = content
            .lines()
            .map(str::trim)
            .all(|line| line.is_empty() || line.starts_with('#'));
        if blank {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(ConfigError::from)
    }

    /// Converts the entries into targets, preserving file order.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidDevice`] for an entry with a blank
    /// `description` or `ip`.
    pub fn into_targets(self) -> Result<Vec<Target>, ConfigError> {
        let entries = self.devices.unwrap_or_default();
        let mut seen = HashSet::new();
        let mut targets = Vec::with_capacity(entries.len());

        for (i, entry) in entries.into_iter().enumerate() {
            let index = i + 1;
            let label = entry.description.trim();
            let address = entry.ip.trim();

            if label.is_empty() {
                return Err(ConfigError::InvalidDevice {
                    index,
                    reason: "description must not be empty",
                });
            }
            if address.is_empty() {
                return Err(ConfigError::InvalidDevice {
                    index,
                    reason: "ip must not be empty",
                });
            }
            if !seen.insert(address.to_string()) {
                tracing::warn!("Device #{index} ({label}) repeats address {address}; they share one status");
            }

            targets.push(Target::new(label, address));
        }

        Ok(targets)
    }
}

/// Generates a device file template with comments.
#[must_use]
pub fn default_devices_template() -> String {
    r"# hostwatch device file
#
# Every entry is pinged every 30 seconds. 'ip' may be an IPv4/IPv6 literal
# or a host name.
#
# Telegram credentials are read from the environment (or a .env file):
#   TELEGRAM_BOT_TOKEN=123456:ABC-DEF...
#   TELEGRAM_CHAT_ID=-1001234567890

devices:
  # - description: Core router
  #   ip: 192.168.1.1
  # - description: File server
  #   ip: nas.lan
"
    .to_string()
}
