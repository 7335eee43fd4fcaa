//! Weather handlers
//!
//! Postal code in, current temperature out.

use axum::{
    extract::{rejection::PathRejection, Path, State},
    Json,
};

use crate::domain::entities::Temperature;
use crate::domain::ports::HttpClient;
use crate::error::{AppError, CepError};
use crate::AppState;

/// GET /weather/:cep
///
/// Resolves the CEP to a locality, then looks up that locality's current
/// temperature. Both calls are sequential; the second needs the first's result.
pub async fn get_weather_by_cep<H>(
    State(state): State<AppState<H>>,
    cep: Result<Path<String>, PathRejection>,
) -> Result<Json<Temperature>, AppError>
where
    H: HttpClient,
{
    // A segment that does not even decode to UTF-8 cannot be 8 digits.
    let Path(cep) = cep.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Rejected CEP path segment");
        CepError::InvalidFormat
    })?;

    let locality = state.cep_service.resolve(&cep).await?;
    let temperature = state.weather_service.get_temperature(&locality).await?;

    Ok(Json(temperature))
}
