//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They record every call so tests can verify which upstreams were hit.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::domain::ports::{HttpClient, HttpResponse};
use crate::error::HttpError;

// ============================================================================
// Mock HTTP Client
// ============================================================================

/// Scripted outcome for any URL containing `url_fragment`
#[derive(Clone)]
struct Route {
    url_fragment: String,
    outcome: Result<HttpResponse, HttpError>,
}

#[derive(Default)]
pub struct MockHttpClient {
    routes: Arc<RwLock<Vec<Route>>>,
    requested: Arc<RwLock<Vec<String>>>,
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer requests whose URL contains `url_fragment` with `response`
    pub fn with_response(self, url_fragment: &str, response: HttpResponse) -> Self {
        self.routes.write().unwrap().push(Route {
            url_fragment: url_fragment.to_string(),
            outcome: Ok(response),
        });
        self
    }

    /// Fail requests whose URL contains `url_fragment` with `error`
    pub fn with_error(self, url_fragment: &str, error: HttpError) -> Self {
        self.routes.write().unwrap().push(Route {
            url_fragment: url_fragment.to_string(),
            outcome: Err(error),
        });
        self
    }

    /// Every URL requested so far, in order
    pub fn requested_urls(&self) -> Vec<String> {
        self.requested.read().unwrap().clone()
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn get(&self, url: &str) -> Result<HttpResponse, HttpError> {
        self.requested.write().unwrap().push(url.to_string());

        let routes = self.routes.read().unwrap();
        routes
            .iter()
            .find(|route| url.contains(&route.url_fragment))
            .map(|route| route.outcome.clone())
            .unwrap_or_else(|| Err(HttpError::Transport(format!("no mock route for {url}"))))
    }
}
