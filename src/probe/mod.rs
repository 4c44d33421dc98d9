//! Reachability probing.
//!
//! This module provides:
//! - The binary health classification ([`HealthState`])
//! - The probing abstraction used by the monitor ([`Prober`])
//! - Attempt/timeout settings ([`ProbePolicy`])
//! - The ICMP echo prober ([`IcmpProber`]) and its socket seam ([`EchoSocket`])

mod error;
mod icmp;

pub use error::ProbeError;
pub use icmp::{EchoSession, EchoSocket, IcmpProber, SurgeSession, SurgeSocket, resolve};

use std::fmt;
use std::time::Duration;

/// Reachability of a target as seen by the most recent probe.
///
/// There is no "unknown" state: a probe that cannot be carried out
/// counts as [`HealthState::Offline`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HealthState {
    /// At least one probe attempt got a reply.
    Online,
    /// Every attempt failed, or probing was impossible.
    Offline,
}

impl HealthState {
    /// Maps a boolean liveness signal to a state.
    #[must_use]
    pub const fn from_reachable(reachable: bool) -> Self {
        if reachable { Self::Online } else { Self::Offline }
    }

    /// Returns true for [`HealthState::Online`].
    #[must_use]
    pub const fn is_online(self) -> bool {
        matches!(self, Self::Online)
    }
}

impl fmt::Display for HealthState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Online => "Online",
            Self::Offline => "Offline",
        })
    }
}

/// Trait for checking whether an address is reachable.
///
/// Implementations never fail: any error is reported as
/// [`HealthState::Offline`] so that one broken target cannot stop the
/// monitor.
pub trait Prober: Send + Sync {
    /// Probes `address` and returns its current state.
    fn probe(&self, address: &str) -> impl std::future::Future<Output = HealthState> + Send;
}

/// How hard a prober tries before declaring a target offline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbePolicy {
    /// Number of echo requests sent per probe.
    pub attempts: u16,
    /// How long to wait for each reply.
    pub timeout: Duration,
}

impl ProbePolicy {
    /// Default number of attempts.
    pub const DEFAULT_ATTEMPTS: u16 = 3;

    /// Default per-attempt timeout (5 seconds).
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

    /// Creates a policy with default values.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            attempts: Self::DEFAULT_ATTEMPTS,
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Sets the number of attempts.
    ///
    /// # Panics
    ///
    /// Panics if `attempts` is 0.
    #[must_use]
    pub const fn with_attempts(mut self, attempts: u16) -> Self {
        assert!(attempts >= 1, "attempts must be at least 1");
        self.attempts = attempts;
        self
    }

    /// Sets the per-attempt timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Upper bound on how long a single probe can take.
    #[must_use]
    pub fn worst_case(&self) -> Duration {
        self.timeout * u32::from(self.attempts)
    }
}

impl Default for ProbePolicy {
    fn default() -> Self {
        Self::new()
    }
}
