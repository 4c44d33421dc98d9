//! ICMP echo prober built on `surge-ping`.

use std::fmt;
use std::future::Future;
use std::net::IpAddr;
use std::time::Duration;

use surge_ping::{Client, Config, ICMP, PingIdentifier, PingSequence, Pinger};

use super::{HealthState, ProbeError, ProbePolicy, Prober};

/// Payload carried by each echo request.
const PAYLOAD: [u8; 56] = [0; 56];

/// Opens echo sessions to resolved addresses.
pub trait EchoSocket: Send + Sync {
    /// Session type returned by [`open`](Self::open).
    type Session: EchoSession;

    /// Opens a session to `ip` whose echoes wait up to `timeout` for a reply.
    fn open(
        &self,
        ip: IpAddr,
        timeout: Duration,
    ) -> impl Future<Output = Result<Self::Session, ProbeError>> + Send;
}

/// One target's echo exchange, reused for every attempt of a probe.
pub trait EchoSession: Send {
    /// Sends echo request `seq` and returns the round-trip time of its reply.
    fn echo(&mut self, seq: u16) -> impl Future<Output = Result<Duration, ProbeError>> + Send;
}

/// Raw ICMP sockets from `surge-ping`.
///
/// A fresh socket is opened for every probe, so a missing privilege shows
/// up as an offline target on each cycle rather than a startup failure.
#[derive(Debug, Clone, Copy, Default)]
pub struct SurgeSocket;

/// Echo session over a `surge-ping` client.
pub struct SurgeSession {
    pinger: Pinger,
    // The client's receive task stops when the last client handle drops.
    _client: Client,
}

impl fmt::Debug for SurgeSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SurgeSession").finish_non_exhaustive()
    }
}

impl EchoSocket for SurgeSocket {
    type Session = SurgeSession;

    async fn open(&self, ip: IpAddr, timeout: Duration) -> Result<SurgeSession, ProbeError> {
        let config = match ip {
            IpAddr::V4(_) => Config::default(),
            IpAddr::V6(_) => Config::builder().kind(ICMP::V6).build(),
        };
        let client = Client::new(&config).map_err(ProbeError::Socket)?;

        let mut pinger = client.pinger(ip, PingIdentifier(rand::random())).await;
        pinger.timeout(timeout);

        Ok(SurgeSession {
            pinger,
            _client: client,
        })
    }
}

impl EchoSession for SurgeSession {
    async fn echo(&mut self, seq: u16) -> Result<Duration, ProbeError> {
        self.pinger
            .ping(PingSequence(seq), &PAYLOAD)
            .await
            .map(|(_, rtt)| rtt)
            .map_err(|e| ProbeError::NoReply {
                seq,
                reason: e.to_string(),
            })
    }
}

/// Prober that sends ICMP echo requests.
///
/// # Example
///
/// ```no_run
/// use hostwatch::probe::{IcmpProber, ProbePolicy, Prober};
///
/// # async fn example() {
/// let prober = IcmpProber::new(ProbePolicy::default());
/// let state = prober.probe("192.168.1.1").await;
/// println!("{state}");
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct IcmpProber<E = SurgeSocket> {
    policy: ProbePolicy,
    socket: E,
}

impl IcmpProber {
    /// Creates a prober over raw ICMP sockets.
    #[must_use]
    pub const fn new(policy: ProbePolicy) -> Self {
        Self {
            policy,
            socket: SurgeSocket,
        }
    }
}

impl<E> IcmpProber<E> {
    /// Replaces the socket used to send echo requests.
    #[must_use]
    pub fn with_socket<E2>(self, socket: E2) -> IcmpProber<E2> {
        IcmpProber {
            policy: self.policy,
            socket,
        }
    }

    /// Returns the configured policy.
    #[must_use]
    pub const fn policy(&self) -> &ProbePolicy {
        &self.policy
    }
}

impl<E: EchoSocket> IcmpProber<E> {
    /// Sends up to `policy.attempts` echo requests, stopping at the first reply.
    async fn ping(&self, address: &str) -> Result<bool, ProbeError> {
        let ip = resolve(address).await?;
        let mut session = self.socket.open(ip, self.policy.timeout).await?;

        for seq in 0..self.policy.attempts {
            match session.echo(seq).await {
                Ok(rtt) => {
                    tracing::debug!("{address} ({ip}) replied to seq {seq} in {rtt:?}");
                    return Ok(true);
                }
                Err(e) => tracing::debug!("{address} ({ip}): {e}"),
            }
        }

        Ok(false)
    }
}

impl<E: EchoSocket> Prober for IcmpProber<E> {
    async fn probe(&self, address: &str) -> HealthState {
        match self.ping(address).await {
            Ok(reachable) => HealthState::from_reachable(reachable),
            Err(e) => {
                tracing::warn!("Ping failed: {e}");
                HealthState::Offline
            }
        }
    }
}

/// Resolves a configured address to a single IP.
///
/// IP literals are parsed directly; anything else goes through the system
/// resolver and the first result is used.
///
/// # Errors
///
/// Returns [`ProbeError::Resolve`] if the lookup fails and
/// [`ProbeError::NoAddress`] if it yields nothing.
pub async fn resolve(address: &str) -> Result<IpAddr, ProbeError> {
    if let Ok(ip) = address.parse::<IpAddr>() {
        return Ok(ip);
    }

    let mut addrs = tokio::net::lookup_host((address, 0))
        .await
        .map_err(|source| ProbeError::Resolve {
            address: address.to_string(),
            source,
        })?;

    addrs
        .next()
        .map(|socket| socket.ip())
        .ok_or_else(|| ProbeError::NoAddress {
            address: address.to_string(),
        })
}
