//! Outbound HTTP port
//!
//! The single capability both upstream services need: issue a GET and get the
//! status and full body back.

use async_trait::async_trait;

use crate::error::HttpError;

/// A fully-read upstream response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn is_bad_request(&self) -> bool {
        self.status == 400
    }

    /// Body as text, lossy on invalid UTF-8
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// HTTP client port trait
///
/// Implementations must be safe to share across concurrent requests and must
/// bound every call with a timeout.
#[async_trait]
pub trait HttpClient: Send + Sync + 'static {
    /// Issue a GET request to `url` and read the whole response body
    async fn get(&self, url: &str) -> Result<HttpResponse, HttpError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_helpers() {
        assert!(HttpResponse::new(200, "").is_success());
        assert!(HttpResponse::new(204, "").is_success());
        assert!(!HttpResponse::new(400, "").is_success());
        assert!(HttpResponse::new(400, "").is_bad_request());
        assert!(!HttpResponse::new(404, "").is_bad_request());
    }

    #[test]
    fn text_is_lossy() {
        let response = HttpResponse::new(200, vec![b'o', b'k', 0xff]);
        assert_eq!(response.text(), "ok\u{fffd}");
    }
}
