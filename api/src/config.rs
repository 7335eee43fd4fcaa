use std::env;
use std::time::Duration;

use crate::app::{DEFAULT_CEP_URL, DEFAULT_WEATHER_URL};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

#[derive(Clone)]
pub struct Config {
    /// WeatherAPI.com key. Empty means weather lookups fail until it is set.
    pub weather_api_key: String,
    pub port: u16,
    /// ViaCEP URL template with a `{cep}` placeholder
    pub cep_api_url: String,
    /// WeatherAPI URL template with `{key}` and `{city}` placeholders
    pub weather_api_url: String,
    /// Timeout applied to every outbound request
    pub http_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        if dotenvy::dotenv().is_err() {
            tracing::info!("No .env file found, using environment variables");
        }

        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            weather_api_key: lookup("WEATHER_API_KEY").unwrap_or_default(),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            cep_api_url: lookup("CEP_API_URL").unwrap_or_else(|| DEFAULT_CEP_URL.to_string()),
            weather_api_url: lookup("WEATHER_API_URL")
                .unwrap_or_else(|| DEFAULT_WEATHER_URL.to_string()),
            http_timeout: Duration::from_secs(
                lookup("HTTP_TIMEOUT_SECS")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS),
            ),
        }
    }

    /// Check if the weather credential is configured
    pub fn weather_api_key_configured(&self) -> bool {
        !self.weather_api_key.is_empty()
    }
}

// Manual impl so the credential never reaches the logs.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("weather_api_key_configured", &self.weather_api_key_configured())
            .field("port", &self.port)
            .field("cep_api_url", &self.cep_api_url)
            .field("weather_api_url", &self.weather_api_url)
            .field("http_timeout", &self.http_timeout)
            .finish()
    }
}
