//! CLI argument parsing using clap.
//!
//! Every option has a default, so running without arguments is the
//! normal way to start the monitor.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::defaults;

/// hostwatch: ICMP reachability monitor
///
/// Pings every device in the device file every 30 seconds, prints a status
/// table, and sends a Telegram message when a device goes up or down.
#[derive(Debug, Parser)]
#[command(name = "hostwatch")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the YAML device file
    #[arg(long, short, default_value = defaults::DEVICES_PATH)]
    pub devices: PathBuf,

    /// Path to the dotenv file holding the Telegram credentials
    #[arg(long = "env-file", default_value = defaults::ENV_FILE)]
    pub env_file: PathBuf,

    /// Test mode - log notifications without sending them
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,
}

/// Subcommands for hostwatch
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a device file template
    Init {
        /// Output path for the device file
        #[arg(long, short, default_value = defaults::DEVICES_PATH)]
        output: PathBuf,
    },
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }
}
