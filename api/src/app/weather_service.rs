//! Weather service
//!
//! Fetches current conditions for a locality from WeatherAPI.com and converts
//! the temperature to Celsius, Fahrenheit and Kelvin.

use std::sync::Arc;

use serde::Deserialize;
use urlencoding::encode;

use crate::domain::entities::{Locality, Temperature};
use crate::domain::ports::{HttpClient, HttpResponse};
use crate::error::WeatherError;

pub const DEFAULT_WEATHER_URL: &str =
    "http://api.weatherapi.com/v1/current.json?key={key}&q={city}&aqi=no";

#[derive(Debug, Deserialize)]
struct WaCurrent {
    temp_c: f64,
}

#[derive(Debug, Deserialize)]
struct WaResponse {
    current: WaCurrent,
}

#[derive(Debug, Deserialize)]
struct WaErrorDetail {
    message: String,
}

#[derive(Debug, Deserialize)]
struct WaErrorResponse {
    error: WaErrorDetail,
}

/// Service for looking up current temperature
pub struct WeatherService<H>
where
    H: HttpClient,
{
    http: Arc<H>,
    api_key: String,
    url_template: String,
}

impl<H> WeatherService<H>
where
    H: HttpClient,
{
    pub fn new(http: Arc<H>, api_key: String) -> Self {
        Self::with_url_template(http, api_key, DEFAULT_WEATHER_URL.to_string())
    }

    /// `url_template` must contain `{key}` and `{city}` placeholders
    pub fn with_url_template(http: Arc<H>, api_key: String, url_template: String) -> Self {
        Self {
            http,
            api_key,
            url_template,
        }
    }

    /// Get the current temperature for a locality
    pub async fn get_temperature(&self, locality: &Locality) -> Result<Temperature, WeatherError> {
        if self.api_key.is_empty() {
            return Err(WeatherError::MissingApiKey);
        }

        let url = self
            .url_template
            .replace("{key}", &encode(&self.api_key))
            .replace("{city}", &encode(locality.as_str()));

        let response = self.http.get(&url).await?;

        if !response.is_success() {
            return Err(api_error(&response));
        }

        let parsed: WaResponse = serde_json::from_slice(&response.body)?;
        let temperature = Temperature::from_celsius(parsed.current.temp_c);

        tracing::debug!(
            locality = %locality,
            temp_c = temperature.celsius,
            "Fetched current temperature"
        );

        Ok(temperature)
    }
}

fn api_error(response: &HttpResponse) -> WeatherError {
    let message = match serde_json::from_slice::<WaErrorResponse>(&response.body) {
        Ok(parsed) => parsed.error.message,
        Err(_) => truncate_body(&response.text()),
    };

    WeatherError::Api {
        status: response.status,
        message,
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
