//! Application execution logic.
//!
//! Wires the ICMP prober, the Telegram notifier and the monitor together
//! and runs cycles until a shutdown signal arrives.

use thiserror::Error;
use tokio::signal;

use hostwatch::config::{ValidatedConfig, defaults};
use hostwatch::monitor::{CYCLE_INTERVAL, Monitor};
use hostwatch::notify::{DeliveryBudget, ReqwestClient, TelegramNotifier};
use hostwatch::probe::{IcmpProber, ProbePolicy};
use hostwatch::report;

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// Failed to build the HTTP client.
    #[error("Failed to create HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}

/// Builds the notifier that posts to the configured bot endpoint.
///
/// A failing message may not keep trying past the pause between cycles.
fn create_notifier(
    config: &ValidatedConfig,
) -> Result<TelegramNotifier<ReqwestClient>, RunError> {
    let timeout = defaults::http_timeout();
    let client = ReqwestClient::with_timeout(timeout).map_err(RunError::HttpClient)?;
    let budget = DeliveryBudget::new().fit_within(CYCLE_INTERVAL, timeout);

    Ok(TelegramNotifier::new(client, config.endpoint.clone()).with_budget(budget))
}

/// Executes the main application loop.
///
/// This function:
/// 1. Creates the Telegram notifier
/// 2. Creates the ICMP prober with the default probe policy
/// 3. Runs monitor cycles until shutdown signal (Ctrl+C or SIGTERM)
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be created.
///
/// # Coverage Note
///
/// This function is excluded from coverage because it requires raw ICMP
/// sockets and a real async runtime with signal handling.
#[cfg(not(tarpaulin_include))]
pub async fn execute(config: ValidatedConfig) -> Result<(), RunError> {
    let notifier = create_notifier(&config)?;
    let notifier_worst_case = notifier.budget().worst_case(defaults::http_timeout());
    let policy = ProbePolicy::default();
    let prober = IcmpProber::new(policy);

    if config.dry_run {
        tracing::info!("Dry-run mode enabled - notifications will be logged but not sent");
    }
    if config.targets.is_empty() {
        tracing::warn!(
            "No devices configured in {}; nothing will be probed",
            config.devices_path.display()
        );
    }

    let mut monitor = Monitor::new(
        prober,
        notifier,
        config.targets,
        config.credentials.chat_id,
    )
    .with_dry_run(config.dry_run);

    tracing::info!(
        "Monitoring {} device(s) every {}s",
        monitor.targets().len(),
        monitor.interval().as_secs()
    );
    tracing::debug!(
        "Worst case per device: {}s, per notification: {}s",
        policy.worst_case().as_secs(),
        notifier_worst_case.as_secs()
    );

    let cycles = monitor
        .run_until(shutdown_signal(), |cycle| {
            println!("{}", report::render(&cycle.rows));
        })
        .await;
    tracing::info!("Shutdown signal received, stopped after {cycles} cycle(s)");

    Ok(())
}

/// Waits for a shutdown signal (Ctrl+C or SIGTERM on Unix).
///
/// A handler that cannot be installed never fires; the other one still can.
#[cfg(not(tarpaulin_include))]
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl+C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
}
