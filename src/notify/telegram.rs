//! Notifier trait and Telegram Bot API implementation.

use serde::Serialize;

use crate::time::{Sleeper, TokioSleeper};

use super::{AttemptError, DeliveryBudget, HttpClient, HttpRequest, NotifyError};

/// Base URL of the Telegram Bot API.
pub const TELEGRAM_API_BASE: &str = "https://api.telegram.org";

/// Trait for delivering a text message to an external destination.
///
/// The monitor only depends on this trait, so tests can swap in a
/// recording fake.
pub trait Notifier: Send + Sync {
    /// Delivers `text` to `destination`.
    ///
    /// An empty `text` is a valid message.
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError`] if encoding fails or the message could not
    /// be delivered after all allowed attempts.
    fn send(
        &self,
        destination: &str,
        text: &str,
    ) -> impl std::future::Future<Output = Result<(), NotifyError>> + Send;
}

/// Builds the `sendMessage` endpoint for a bot token.
///
/// # Errors
///
/// Returns the parse error if the token produces an invalid URL.
pub fn send_message_url(token: &str) -> Result<url::Url, url::ParseError> {
    url::Url::parse(&format!("{TELEGRAM_API_BASE}/bot{token}/sendMessage"))
}

/// JSON body of a `sendMessage` call.
#[derive(Debug, Serialize)]
struct SendMessage<'a> {
    chat_id: &'a str,
    text: &'a str,
}

/// Sends messages through the Telegram Bot API.
///
/// A message gets the attempts in its [`DeliveryBudget`]; only transient
/// failures (see [`AttemptError::is_transient`]) use up further attempts.
///
/// # Type Parameters
///
/// - `H`: The HTTP client implementation
/// - `S`: The sleeper used between attempts (defaults to [`TokioSleeper`])
///
/// # Example
///
/// ```
/// use hostwatch::notify::{DeliveryBudget, ReqwestClient, TelegramNotifier, send_message_url};
/// use std::time::Duration;
///
/// let client = ReqwestClient::with_timeout(Duration::from_secs(10)).unwrap();
/// let notifier = TelegramNotifier::new(client, send_message_url("123:abc").unwrap())
///     .with_budget(DeliveryBudget::single());
/// assert_eq!(notifier.budget().attempts(), 1);
/// ```
#[derive(Debug)]
pub struct TelegramNotifier<H, S = TokioSleeper> {
    client: H,
    sleeper: S,
    endpoint: url::Url,
    budget: DeliveryBudget,
}

impl<H> TelegramNotifier<H, TokioSleeper> {
    /// Creates a notifier posting to `endpoint` with the default budget.
    #[must_use]
    pub fn new(client: H, endpoint: url::Url) -> Self {
        Self {
            client,
            sleeper: TokioSleeper,
            endpoint,
            budget: DeliveryBudget::default(),
        }
    }
}

impl<H, S> TelegramNotifier<H, S> {
    /// Sets a custom sleeper for the pauses between attempts.
    #[must_use]
    pub fn with_sleeper<S2>(self, sleeper: S2) -> TelegramNotifier<H, S2> {
        TelegramNotifier {
            client: self.client,
            sleeper,
            endpoint: self.endpoint,
            budget: self.budget,
        }
    }

    /// Sets the attempt budget for each message.
    #[must_use]
    pub const fn with_budget(mut self, budget: DeliveryBudget) -> Self {
        self.budget = budget;
        self
    }

    /// Returns the attempt budget.
    #[must_use]
    pub const fn budget(&self) -> &DeliveryBudget {
        &self.budget
    }

    /// Returns the `sendMessage` endpoint.
    #[must_use]
    pub const fn endpoint(&self) -> &url::Url {
        &self.endpoint
    }
}

impl<H: HttpClient, S: Sleeper> TelegramNotifier<H, S> {
    async fn attempt(&self, request: &HttpRequest) -> Result<(), AttemptError> {
        let response = self.client.request(request.clone()).await?;

        if response.is_ok() {
            return Ok(());
        }

        Err(AttemptError::Status {
            status: response.status,
            body: response.body_text().map(ToString::to_string),
        })
    }
}

impl<H: HttpClient, S: Sleeper> Notifier for TelegramNotifier<H, S> {
    async fn send(&self, destination: &str, text: &str) -> Result<(), NotifyError> {
        let body = serde_json::to_vec(&SendMessage {
            chat_id: destination,
            text,
        })?;
        let request = HttpRequest::json(self.endpoint.clone(), body);
        let mut attempt = 1;

        loop {
            let Err(e) = self.attempt(&request).await else {
                return Ok(());
            };

            if !e.is_transient() {
                return Err(e.into());
            }

            if !self.budget.allows_after(attempt) {
                return Err(NotifyError::GaveUp {
                    attempts: attempt,
                    last_error: e,
                });
            }

            let pause = self.budget.pause_after(attempt);
            tracing::warn!(
                "Notification attempt {attempt} failed ({e}), trying again in {}s",
                pause.as_secs_f64()
            );
            self.sleeper.sleep(pause).await;
            attempt += 1;
        }
    }
}
