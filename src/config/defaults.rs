//! Default values for configuration options.
//!
//! Centralized constants to avoid magic numbers scattered across the codebase.

use std::time::Duration;

/// Default device list path.
pub const DEVICES_PATH: &str = "devices.yaml";

/// Default dotenv file path.
pub const ENV_FILE: &str = ".env";

/// Timeout for a single Bot API request, in seconds.
pub const HTTP_TIMEOUT_SECS: u64 = 10;

/// Timeout for a single Bot API request as Duration.
#[must_use]
pub const fn http_timeout() -> Duration {
    Duration::from_secs(HTTP_TIMEOUT_SECS)
}
