//! Weather endpoint handlers.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/weather/beach/:beachId` | Latest observation for a beach |
//! | `GET` | `/weather/forecast/:beachId` | Five-day forecast (provider seam) |
//! | `POST` | `/weather/beach/:beachId` | Ingest an observation |
//!
//! Ingestion is one of the two entry points into the safety
//! synchronizer: the registry re-derives the beach's safety level from
//! the sample's wave height in the same critical section.

use axum::extract::{Path, State};
use axum::Json;
use coastwatch_registry::NewObservation;
use coastwatch_types::{BeachId, ForecastDay, WeatherObservation};

use crate::error::{parse_uuid, ApiError};
use crate::response::ApiResponse;
use crate::state::AppState;

/// `GET /weather/beach/:beachId` -- the most recent observation.
pub async fn latest(
    State(state): State<AppState>,
    Path(beach_id): Path<String>,
) -> Result<ApiResponse<WeatherObservation>, ApiError> {
    let beach_id = BeachId::from(parse_uuid(&beach_id)?);
    Ok(ApiResponse::ok(
        state.registry.latest_observation(beach_id).await?,
    ))
}

/// `GET /weather/forecast/:beachId` -- relay the provider's forecast.
pub async fn forecast(
    State(state): State<AppState>,
    Path(beach_id): Path<String>,
) -> Result<ApiResponse<Vec<ForecastDay>>, ApiError> {
    let beach_id = BeachId::from(parse_uuid(&beach_id)?);
    let beach = state.registry.beach(beach_id).await?;
    Ok(ApiResponse::ok(state.forecast.five_day(&beach)))
}

/// `POST /weather/beach/:beachId` -- ingest an observation and trigger
/// the synchronizer.
pub async fn ingest(
    State(state): State<AppState>,
    Path(beach_id): Path<String>,
    Json(new): Json<NewObservation>,
) -> Result<ApiResponse<WeatherObservation>, ApiError> {
    let beach_id = BeachId::from(parse_uuid(&beach_id)?);
    let observation = state.registry.ingest_observation(beach_id, new).await?;
    Ok(ApiResponse::created(
        observation,
        "Weather data recorded successfully",
    ))
}
