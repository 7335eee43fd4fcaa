//! Reqwest HTTP client implementation

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::domain::ports::{HttpClient, HttpResponse};
use crate::error::HttpError;

/// Connection-pooled HTTP client shared by every upstream service
#[derive(Clone)]
pub struct ReqwestHttpClient {
    http: Client,
}

impl ReqwestHttpClient {
    pub fn new(timeout: Duration) -> Result<Self, HttpError> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .map_err(HttpError::from)?;

        Ok(Self { http })
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn get(&self, url: &str) -> Result<HttpResponse, HttpError> {
        let response = self.http.get(url).send().await?;
        let status = response.status().as_u16();

        // Log host and path only: the weather key travels in the query string.
        let target = response.url();
        tracing::debug!(
            host = target.host_str().unwrap_or_default(),
            path = target.path(),
            status,
            "Upstream responded"
        );

        let body = response.bytes().await?;

        Ok(HttpResponse::new(status, body.to_vec()))
    }
}
