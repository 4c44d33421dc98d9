//! hostwatch: ICMP reachability monitor
//!
//! A library for pinging a fixed list of hosts on a schedule, tracking
//! their online/offline state, and reporting changes through Telegram.

pub mod config;
pub mod monitor;
pub mod notify;
pub mod probe;
pub mod report;
pub mod time;
