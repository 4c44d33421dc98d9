//! The polling loop: probe, diff, report, notify, sleep.

use std::future::Future;
use std::time::Duration;

use crate::notify::Notifier;
use crate::probe::{HealthState, Prober};
use crate::time::{Sleeper, TokioSleeper};

use super::{StatusTracker, Target};

/// Fixed delay between the end of one cycle and the start of the next.
pub const CYCLE_INTERVAL: Duration = Duration::from_secs(30);

/// One line of the fleet table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusRow {
    /// Target label
    pub label: String,
    /// Target address
    pub address: String,
    /// State observed this cycle
    pub state: HealthState,
}

/// What happened to this cycle's notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// Nothing changed, so nothing was sent.
    Idle,
    /// Changes were logged but not sent (dry-run mode).
    DryRun,
    /// The notifier accepted the message.
    Sent,
    /// The notifier failed; the error was logged.
    Failed,
}

/// What one pass over the fleet observed, before any notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleReport {
    /// One row per target, in configuration order.
    pub rows: Vec<StatusRow>,
    /// `"<label> is <state>"` for every target that changed, in configuration order.
    pub changes: Vec<String>,
}

impl CycleReport {
    /// The notification text for this cycle, if anything changed.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        if self.changes.is_empty() {
            None
        } else {
            Some(self.changes.join("\n"))
        }
    }
}

/// Periodic reachability monitor.
///
/// Owns the [`StatusTracker`] for the lifetime of the process; nothing
/// else can observe or mutate it.
///
/// # Type Parameters
///
/// - `P`: The reachability prober
/// - `N`: The notifier used when states change
/// - `S`: The sleeper used between cycles (defaults to [`TokioSleeper`])
#[derive(Debug)]
pub struct Monitor<P, N, S = TokioSleeper> {
    prober: P,
    notifier: N,
    sleeper: S,
    targets: Vec<Target>,
    destination: String,
    interval: Duration,
    dry_run: bool,
    tracker: StatusTracker,
}

impl<P, N> Monitor<P, N, TokioSleeper> {
    /// Creates a monitor for `targets`, notifying `destination` on changes.
    #[must_use]
    pub fn new(prober: P, notifier: N, targets: Vec<Target>, destination: impl Into<String>) -> Self {
        Self {
            prober,
            notifier,
            sleeper: TokioSleeper,
            targets,
            destination: destination.into(),
            interval: CYCLE_INTERVAL,
            dry_run: false,
            tracker: StatusTracker::new(),
        }
    }
}

impl<P, N, S> Monitor<P, N, S> {
    /// Sets a custom sleeper for the pause between cycles.
    #[must_use]
    pub fn with_sleeper<S2>(self, sleeper: S2) -> Monitor<P, N, S2> {
        Monitor {
            prober: self.prober,
            notifier: self.notifier,
            sleeper,
            targets: self.targets,
            destination: self.destination,
            interval: self.interval,
            dry_run: self.dry_run,
            tracker: self.tracker,
        }
    }

    /// Logs notification text instead of sending it.
    #[must_use]
    pub const fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Returns the configured targets.
    #[must_use]
    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    /// Returns the status record.
    #[must_use]
    pub const fn tracker(&self) -> &StatusTracker {
        &self.tracker
    }

    /// Returns the pause between cycles.
    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }
}

impl<P: Prober, N: Notifier, S: Sleeper> Monitor<P, N, S> {
    /// Probes every target once and commits the results to the record.
    ///
    /// Never fails: probe problems count as offline.
    pub async fn survey(&mut self) -> CycleReport {
        let mut rows = Vec::with_capacity(self.targets.len());
        let mut changes = Vec::new();

        for target in &self.targets {
            let state = self.prober.probe(&target.address).await;
            let update = self.tracker.update(&target.address, state);

            if update.changed {
                match update.previous {
                    Some(previous) => tracing::info!("{target}: {previous} -> {state}"),
                    None => tracing::info!("{target}: {state}"),
                }
                changes.push(format!("{} is {state}", target.label));
            }

            rows.push(StatusRow {
                label: target.label.clone(),
                address: target.address.clone(),
                state,
            });
        }

        CycleReport { rows, changes }
    }

    /// Sends the report's change message, if it has one.
    ///
    /// Failures are logged and reported as [`Delivery::Failed`]; the record
    /// is not touched.
    pub async fn deliver(&self, report: &CycleReport) -> Delivery {
        let Some(message) = report.message() else {
            return Delivery::Idle;
        };

        if self.dry_run {
            tracing::info!("Dry-run: not sending notification:\n{message}");
            return Delivery::DryRun;
        }

        match self.notifier.send(&self.destination, &message).await {
            Ok(()) => {
                tracing::debug!("Notification sent for {} change(s)", report.changes.len());
                Delivery::Sent
            }
            Err(e) => {
                tracing::error!("Error sending Telegram message: {e}");
                Delivery::Failed
            }
        }
    }

    /// Runs one survey followed by its delivery.
    pub async fn run_cycle(&mut self) -> (CycleReport, Delivery) {
        let report = self.survey().await;
        let delivery = self.deliver(&report).await;
        (report, delivery)
    }

    /// Runs cycles until `shutdown` resolves.
    ///
    /// `on_report` sees each cycle's report as soon as probing finishes,
    /// before the notification is attempted. Shutdown is observed both
    /// during a cycle and during the pause that follows it. Returns the
    /// number of completed cycles.
    pub async fn run_until<F, R>(&mut self, shutdown: F, mut on_report: R) -> u64
    where
        F: Future<Output = ()>,
        R: FnMut(&CycleReport),
    {
        tokio::pin!(shutdown);
        let mut completed = 0;

        loop {
            let cycle = async {
                let report = self.survey().await;
                on_report(&report);
                self.deliver(&report).await
            };

            tokio::select! {
                biased;

                () = &mut shutdown => return completed,

                _ = cycle => completed += 1,
            }

            tokio::select! {
                biased;

                () = &mut shutdown => return completed,

                () = self.sleeper.sleep(self.interval) => {}
            }
        }
    }
}

#[cfg(test)]
#[path = "cycle_tests.rs"]
mod tests;
