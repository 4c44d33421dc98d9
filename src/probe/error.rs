//! Error types for reachability probing.

use std::io;

use thiserror::Error;

/// Reasons a probe could not be carried out.
///
/// These never leave the probe module as errors; [`IcmpProber`] logs them
/// and reports the target offline.
///
/// [`IcmpProber`]: super::IcmpProber
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The address is neither an IP literal nor a resolvable host name.
    #[error("Could not resolve '{address}': {source}")]
    Resolve {
        /// The address as configured
        address: String,
        /// Underlying lookup error
        #[source]
        source: io::Error,
    },

    /// Resolution succeeded but returned no addresses.
    #[error("No addresses found for '{address}'")]
    NoAddress {
        /// The address as configured
        address: String,
    },

    /// The ICMP socket could not be opened (often a privilege problem).
    #[error("Could not open ICMP socket: {0}")]
    Socket(#[source] io::Error),

    /// An echo request got no usable reply.
    #[error("No reply to echo #{seq}: {reason}")]
    NoReply {
        /// Sequence number of the echo request
        seq: u16,
        /// Why the attempt failed (timeout, unreachable, ...)
        reason: String,
    },
}
