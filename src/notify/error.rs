//! Error types for HTTP and notification operations.

use thiserror::Error;

/// Error type for HTTP operations.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network connection failed (DNS, refused connection, TLS).
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Request timed out.
    #[error("Request timed out")]
    Timeout,

    /// The provided URL is invalid.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl HttpError {
    /// Returns true if the same request might succeed later.
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        matches!(self, Self::Connection(_) | Self::Timeout)
    }
}

/// Failure of a single `sendMessage` attempt.
#[derive(Debug, Error)]
pub enum AttemptError {
    /// The HTTP exchange itself failed.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The Bot API answered with something other than 200 OK.
    #[error("Unexpected status code: {status}")]
    Status {
        /// Status returned by the server
        status: http::StatusCode,
        /// Response body, if it was valid UTF-8
        body: Option<String>,
    },
}

impl AttemptError {
    /// Returns true if another attempt is worthwhile.
    ///
    /// Any 4xx other than 408 and 429 means a bad token or chat id.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Http(e) => e.is_transient(),
            Self::Status { status, .. } => {
                status.is_server_error()
                    || *status == http::StatusCode::TOO_MANY_REQUESTS
                    || *status == http::StatusCode::REQUEST_TIMEOUT
            }
        }
    }
}

/// Error returned by [`Notifier::send`](super::Notifier::send).
///
/// Every variant is non-fatal for the monitor loop, which logs it and
/// carries on with the next cycle.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// The message payload could not be encoded as JSON.
    #[error("Could not encode message to JSON: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The Bot API refused the message; trying again would not help.
    #[error("Could not send message: {0}")]
    Rejected(#[from] AttemptError),

    /// Every attempt in the budget failed.
    #[error("Could not send message after {attempts} attempt(s): {last_error}")]
    GaveUp {
        /// Number of attempts made
        attempts: u32,
        /// Error from the final attempt
        #[source]
        last_error: AttemptError,
    },
}
