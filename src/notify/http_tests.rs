//! Tests for HTTP request/response types.

use super::{HttpError, HttpRequest, HttpResponse};

mod http_request {
    use super::*;

    #[test]
    fn json_keeps_url_and_body() {
        let url = url::Url::parse("https://api.telegram.org/bot123:abc/sendMessage").unwrap();

        let req = HttpRequest::json(url.clone(), br#"{"text":"hi"}"#.to_vec());

        assert_eq!(req.url, url);
        assert_eq!(req.body, br#"{"text":"hi"}"#);
        assert_eq!(HttpRequest::CONTENT_TYPE, "application/json");
    }
}

mod http_response {
    use super::*;

    #[test]
    fn only_200_counts_as_ok() {
        assert!(HttpResponse::new(http::StatusCode::OK, vec![]).is_ok());

        for status in [
            http::StatusCode::CREATED,
            http::StatusCode::NO_CONTENT,
            http::StatusCode::BAD_REQUEST,
            http::StatusCode::INTERNAL_SERVER_ERROR,
        ] {
            let resp = HttpResponse::new(status, vec![]);
            assert!(!resp.is_ok(), "Expected {status} to not be ok");
        }
    }

    #[test]
    fn body_text_decodes_utf8() {
        let resp = HttpResponse::new(http::StatusCode::OK, br#"{"ok":true}"#.to_vec());

        assert_eq!(resp.body_text(), Some(r#"{"ok":true}"#));
    }

    #[test]
    fn body_text_rejects_invalid_utf8() {
        let resp = HttpResponse::new(http::StatusCode::OK, vec![0xFF, 0xFE]);

        assert!(resp.body_text().is_none());
    }
}

mod http_error {
    use super::*;
    use std::error::Error;

    #[test]
    fn connection_error_preserves_source() {
        let error = HttpError::Connection(Box::new(std::io::Error::other("network unavailable")));

        assert!(error.to_string().contains("Connection error"));
        assert!(
            error
                .source()
                .unwrap()
                .to_string()
                .contains("network unavailable")
        );
    }

    #[test]
    fn timeout_displays_message() {
        assert_eq!(HttpError::Timeout.to_string(), "Request timed out");
    }

    #[test]
    fn only_transport_failures_are_transient() {
        assert!(HttpError::Timeout.is_transient());
        assert!(HttpError::Connection(Box::new(std::io::Error::other("reset"))).is_transient());
        assert!(!HttpError::InvalidUrl("bad".to_string()).is_transient());
    }
}
