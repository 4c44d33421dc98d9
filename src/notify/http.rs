//! HTTP request/response types and client trait.

use super::HttpError;

/// A JSON document to POST to a Bot API method URL.
///
/// The Bot API only needs `POST` with `Content-Type: application/json`,
/// so that is all a request can express.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    /// Method URL (embeds the bot token)
    pub url: url::Url,
    /// Serialized JSON body
    pub body: Vec<u8>,
}

impl HttpRequest {
    /// Content type sent with every request.
    pub const CONTENT_TYPE: &str = "application/json";

    /// Creates a request posting `body` to `url`.
    #[must_use]
    pub const fn json(url: url::Url, body: Vec<u8>) -> Self {
        Self { url, body }
    }
}

/// A fully buffered HTTP response.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: http::StatusCode,
    /// Response body
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Creates a new HTTP response.
    #[must_use]
    pub const fn new(status: http::StatusCode, body: Vec<u8>) -> Self {
        Self { status, body }
    }

    /// Returns true only for `200 OK`, the Bot API's success status.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status == http::StatusCode::OK
    }

    /// Returns the body as a UTF-8 string, if valid.
    #[must_use]
    pub fn body_text(&self) -> Option<&str> {
        std::str::from_utf8(&self.body).ok()
    }
}

/// Trait for posting JSON to the Bot API.
///
/// Abstracts the client so the notifier can be exercised with mock clients.
///
/// # Example
///
/// ```ignore
/// use hostwatch::notify::{HttpClient, HttpRequest, HttpResponse, HttpError};
///
/// struct MockClient {
///     response: HttpResponse,
/// }
///
/// impl HttpClient for MockClient {
///     async fn request(&self, _req: HttpRequest) -> Result<HttpResponse, HttpError> {
///         Ok(self.response.clone())
///     }
/// }
/// ```
pub trait HttpClient: Send + Sync {
    /// Posts the request and returns the buffered response.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] when:
    /// - Network connection fails ([`HttpError::Connection`])
    /// - Request times out ([`HttpError::Timeout`])
    /// - URL is invalid ([`HttpError::InvalidUrl`])
    fn request(
        &self,
        req: HttpRequest,
    ) -> impl std::future::Future<Output = Result<HttpResponse, HttpError>> + Send;
}
