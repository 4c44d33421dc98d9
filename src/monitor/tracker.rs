//! Last-known state bookkeeping and change detection.

use std::collections::HashMap;

use crate::probe::HealthState;

/// Outcome of recording one observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusUpdate {
    /// True on the first observation of an address or when its state flipped.
    pub changed: bool,
    /// State stored before this observation, if any.
    pub previous: Option<HealthState>,
}

/// Tracks the most recent [`HealthState`] per target address.
///
/// The record starts empty, gains an entry the first time an address is
/// observed, and never loses entries during a run. Pure bookkeeping with
/// no I/O.
///
/// # Example
///
/// ```
/// use hostwatch::monitor::StatusTracker;
/// use hostwatch::probe::HealthState;
///
/// let mut tracker = StatusTracker::new();
/// assert!(tracker.update("10.0.0.1", HealthState::Online).changed);
/// assert!(!tracker.update("10.0.0.1", HealthState::Online).changed);
/// assert!(tracker.update("10.0.0.1", HealthState::Offline).changed);
/// ```
#[derive(Debug, Clone, Default)]
pub struct StatusTracker {
    record: HashMap<String, HealthState>,
}

impl StatusTracker {
    /// Creates an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `state` for `address` and reports whether it changed.
    ///
    /// The new state is always committed.
    pub fn update(&mut self, address: &str, state: HealthState) -> StatusUpdate {
        let previous = self.record.insert(address.to_string(), state);

        StatusUpdate {
            changed: previous != Some(state),
            previous,
        }
    }

    /// Returns the stored state for `address`.
    #[must_use]
    pub fn get(&self, address: &str) -> Option<HealthState> {
        self.record.get(address).copied()
    }

    /// Number of distinct addresses observed so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.record.len()
    }

    /// Returns true if nothing has been observed yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.record.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::HealthState::{Offline, Online};

    #[test]
    fn starts_empty() {
        let tracker = StatusTracker::new();

        assert!(tracker.is_empty());
        assert_eq!(tracker.get("10.0.0.1"), None);
    }

    #[test]
    fn first_observation_is_a_change() {
        for state in [Online, Offline] {
            let mut tracker = StatusTracker::new();

            let update = tracker.update("10.0.0.1", state);

            assert_eq!(
                update,
                StatusUpdate {
                    changed: true,
                    previous: None
                }
            );
            assert_eq!(tracker.get("10.0.0.1"), Some(state));
        }
    }

    #[test]
    fn second_observation_changes_iff_state_differs() {
        for (first, second) in [
            (Online, Online),
            (Online, Offline),
            (Offline, Online),
            (Offline, Offline),
        ] {
            let mut tracker = StatusTracker::new();
            tracker.update("host", first);

            let update = tracker.update("host", second);

            assert_eq!(update.changed, first != second, "{first} -> {second}");
            assert_eq!(update.previous, Some(first));
            assert_eq!(tracker.get("host"), Some(second));
        }
    }

    #[test]
    fn repeated_identical_observations_stop_reporting_changes() {
        let mut tracker = StatusTracker::new();
        assert!(tracker.update("host", Online).changed);

        for _ in 0..10 {
            assert!(!tracker.update("host", Online).changed);
        }
    }

    #[test]
    fn addresses_are_tracked_independently() {
        let mut tracker = StatusTracker::new();
        tracker.update("a", Online);
        tracker.update("b", Offline);

        assert!(!tracker.update("a", Online).changed);
        assert!(tracker.update("b", Online).changed);
        assert_eq!(tracker.len(), 2);
    }

    #[test]
    fn one_entry_per_address() {
        let mut tracker = StatusTracker::new();

        tracker.update("a", Online);
        tracker.update("a", Offline);
        tracker.update("a", Online);

        assert_eq!(tracker.len(), 1);
        assert_eq!(tracker.get("a"), Some(Online));
    }
}
