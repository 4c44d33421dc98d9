//! Monitored endpoint type.

use std::fmt;

/// A configured endpoint: a human-readable label plus the address probed.
///
/// Immutable once loaded. Targets are identified by their address in the
/// status record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    /// Label shown in reports and notifications.
    pub label: String,
    /// IP literal or resolvable host name.
    pub address: String,
}

impl Target {
    /// Creates a new target.
    #[must_use]
    pub fn new(label: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            address: address.into(),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label, self.address)
    }
}
