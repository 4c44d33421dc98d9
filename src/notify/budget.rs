//! How hard one notification is allowed to try.

use std::time::Duration;

/// Attempt budget for a single notification.
///
/// Attempts are separated by a pause that grows linearly: `pause` before
/// the second attempt, `2 * pause` before the third, and so on. A budget
/// can be [fitted](Self::fit_within) to a time window so a failing
/// delivery never outlasts the pause between monitoring cycles.
///
/// # Example
///
/// ```
/// use hostwatch::notify::DeliveryBudget;
/// use std::time::Duration;
///
/// let budget = DeliveryBudget::new().fit_within(
///     Duration::from_secs(30),
///     Duration::from_secs(10),
/// );
/// assert_eq!(budget.attempts(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeliveryBudget {
    attempts: u32,
    pause: Duration,
}

impl DeliveryBudget {
    /// Default number of attempts, including the first.
    pub const DEFAULT_ATTEMPTS: u32 = 3;

    /// Default pause before the second attempt.
    pub const DEFAULT_PAUSE: Duration = Duration::from_secs(2);

    /// Creates a budget with the default values.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            attempts: Self::DEFAULT_ATTEMPTS,
            pause: Self::DEFAULT_PAUSE,
        }
    }

    /// A budget of exactly one attempt.
    #[must_use]
    pub const fn single() -> Self {
        Self {
            attempts: 1,
            pause: Duration::ZERO,
        }
    }

    /// Sets the number of attempts.
    ///
    /// # Panics
    ///
    /// Panics if `attempts` is 0.
    #[must_use]
    pub const fn with_attempts(mut self, attempts: u32) -> Self {
        assert!(attempts >= 1, "attempts must be at least 1");
        self.attempts = attempts;
        self
    }

    /// Sets the base pause between attempts.
    #[must_use]
    pub const fn with_pause(mut self, pause: Duration) -> Self {
        self.pause = pause;
        self
    }

    /// Number of attempts allowed.
    #[must_use]
    pub const fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Returns true if another attempt may follow attempt number `attempt` (1-based).
    #[must_use]
    pub const fn allows_after(&self, attempt: u32) -> bool {
        attempt < self.attempts
    }

    /// Pause to take after attempt number `attempt` (1-based) fails.
    #[must_use]
    pub fn pause_after(&self, attempt: u32) -> Duration {
        self.pause.saturating_mul(attempt)
    }

    /// Longest a fully failing delivery can take when each request may run
    /// for `request_timeout`.
    #[must_use]
    pub fn worst_case(&self, request_timeout: Duration) -> Duration {
        (1..self.attempts).fold(
            request_timeout.saturating_mul(self.attempts),
            |total, attempt| total.saturating_add(self.pause_after(attempt)),
        )
    }

    /// Drops attempts until [`worst_case`](Self::worst_case) fits in `window`.
    ///
    /// Always keeps at least one attempt.
    #[must_use]
    pub fn fit_within(mut self, window: Duration, request_timeout: Duration) -> Self {
        while self.attempts > 1 && self.worst_case(request_timeout) > window {
            self.attempts -= 1;
        }
        self
    }
}

impl Default for DeliveryBudget {
    fn default() -> Self {
        Self::new()
    }
}
