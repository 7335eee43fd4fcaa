//! CEP Weather API Server
//!
//! Resolves a Brazilian postal code (CEP) to its city through ViaCEP and
//! returns that city's current temperature from WeatherAPI.com in Celsius,
//! Fahrenheit and Kelvin.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::ReqwestHttpClient;
use app::{CepService, WeatherService};
use config::Config;
use domain::ports::HttpClient;

/// Application state shared across all handlers
///
/// Generic over the HTTP transport so the full router can run against a mock.
pub struct AppState<H>
where
    H: HttpClient,
{
    pub cep_service: Arc<CepService<H>>,
    pub weather_service: Arc<WeatherService<H>>,
}

impl<H> AppState<H>
where
    H: HttpClient,
{
    /// Wire both services onto one shared transport
    pub fn new(http: Arc<H>, config: &Config) -> Self {
        Self {
            cep_service: Arc::new(CepService::with_url_template(
                http.clone(),
                config.cep_api_url.clone(),
            )),
            weather_service: Arc::new(WeatherService::with_url_template(
                http,
                config.weather_api_key.clone(),
                config.weather_api_url.clone(),
            )),
        }
    }
}

impl<H> Clone for AppState<H>
where
    H: HttpClient,
{
    fn clone(&self) -> Self {
        Self {
            cep_service: self.cep_service.clone(),
            weather_service: self.weather_service.clone(),
        }
    }
}

/// Build the application router
pub fn build_router<H>(state: AppState<H>) -> Router
where
    H: HttpClient,
{
    Router::new()
        .route("/health", get(handlers::health))
        .route("/weather/:cep", get(handlers::get_weather_by_cep::<H>))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,cep_weather_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting CEP Weather API...");

    // Load configuration
    let config = Config::from_env();
    tracing::debug!(?config, "Configuration loaded");

    if !config.weather_api_key_configured() {
        tracing::warn!("WEATHER_API_KEY not set, weather lookups will fail");
    }

    // Create adapters
    let http = Arc::new(
        ReqwestHttpClient::new(config.http_timeout).context("Failed to build HTTP client")?,
    );

    let app = build_router(AppState::new(http, &config));

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
