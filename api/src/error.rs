//! Unified error types for the CEP Weather API
//!
//! This module defines error types for each layer:
//! - `HttpError`: Outbound transport errors
//! - `CepError`: Postal-code resolution errors
//! - `WeatherError`: Weather lookup errors
//! - `AppError`: Application layer errors (wraps service errors for HTTP responses)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Outbound HTTP transport errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HttpError {
    #[error("request timed out")]
    Timeout,

    #[error("request failed: {0}")]
    Transport(String),

    #[error("failed to read response body: {0}")]
    Body(String),
}

impl From<reqwest::Error> for HttpError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            HttpError::Timeout
        } else if e.is_body() || e.is_decode() {
            HttpError::Body(e.to_string())
        } else {
            HttpError::Transport(e.to_string())
        }
    }
}

/// Postal-code (CEP) resolution errors
#[derive(Debug, Error)]
pub enum CepError {
    #[error("invalid zipcode")]
    InvalidFormat,

    #[error("can not find zipcode")]
    NotFound,

    #[error("error fetching CEP: {0}")]
    Upstream(#[from] HttpError),

    #[error("error decoding CEP response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Weather lookup errors
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("weather API key not configured")]
    MissingApiKey,

    #[error("error fetching weather data: {0}")]
    Upstream(#[from] HttpError),

    #[error("weather API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("error decoding weather response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Cep(#[from] CepError),

    #[error("{0}")]
    Weather(#[from] WeatherError),
}

/// Error response body for JSON responses
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl AppError {
    /// Status code and client-facing message for this error.
    ///
    /// Only the two zipcode classifications are surfaced to the caller;
    /// everything else collapses into a generic message.
    pub fn status_and_message(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Cep(CepError::InvalidFormat) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "invalid zipcode")
            }
            AppError::Cep(CepError::NotFound) => (StatusCode::NOT_FOUND, "can not find zipcode"),
            AppError::Cep(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal server error"),
            AppError::Weather(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "error getting weather data",
            ),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Cep(e @ (CepError::InvalidFormat | CepError::NotFound)) => {
                tracing::debug!(error = %e, "CEP rejected")
            }
            AppError::Cep(e) => tracing::error!(error = %e, "CEP lookup failed"),
            AppError::Weather(e) => tracing::error!(error = %e, "Weather lookup failed"),
        }

        let (status, message) = self.status_and_message();
        (status, Json(ErrorResponse::new(message))).into_response()
    }
}
