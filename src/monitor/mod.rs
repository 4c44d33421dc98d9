//! Monitor layer for tracking target reachability.
//!
//! This module provides types and functions for:
//! - Describing monitored endpoints ([`Target`])
//! - Recording last-known state and detecting changes ([`StatusTracker`])
//! - Running the polling loop ([`Monitor`], [`CycleReport`])

mod cycle;
mod target;
mod tracker;

pub use crate::probe::HealthState;
pub use cycle::{CYCLE_INTERVAL, CycleReport, Delivery, Monitor, StatusRow};
pub use target::Target;
pub use tracker::{StatusTracker, StatusUpdate};
