//! Beach endpoint handlers.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/beaches` | List beaches, filterable |
//! | `GET` | `/beaches/near` | Beaches within a radius, nearest first |
//! | `GET` | `/beaches/:id` | Single beach |
//! | `POST` | `/beaches` | Create a beach |
//! | `PUT` | `/beaches/:id` | Partial update (derived state ignored) |
//! | `DELETE` | `/beaches/:id` | Hard delete |

use axum::extract::{Path, Query, State};
use axum::Json;
use coastwatch_registry::{BeachFilter, BeachUpdate, NewBeach};
use coastwatch_types::{Beach, BeachId, GeoPoint};
use serde::Deserialize;

use crate::error::{parse_uuid, ApiError};
use crate::response::ApiResponse;
use crate::state::AppState;

/// Default search radius for the near query, in meters.
const DEFAULT_NEAR_DISTANCE_METERS: f64 = 10_000.0;

/// Query parameters for `GET /beaches/near`.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct NearQuery {
    /// Query point longitude. Required.
    pub longitude: Option<f64>,
    /// Query point latitude. Required.
    pub latitude: Option<f64>,
    /// Search radius in meters. Defaults to 10 km.
    pub distance: Option<f64>,
}

/// `GET /beaches` -- list beaches matching the optional filters.
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<BeachFilter>,
) -> Result<ApiResponse<Vec<Beach>>, ApiError> {
    Ok(ApiResponse::ok(state.registry.list_beaches(filter).await))
}

/// `GET /beaches/near` -- beaches within `distance` meters of the point,
/// sorted nearest first.
pub async fn near(
    State(state): State<AppState>,
    Query(params): Query<NearQuery>,
) -> Result<ApiResponse<Vec<Beach>>, ApiError> {
    let (Some(longitude), Some(latitude)) = (params.longitude, params.latitude) else {
        return Err(ApiError::Validation(String::from(
            "Longitude and latitude are required",
        )));
    };
    if !longitude.is_finite() || !latitude.is_finite() {
        return Err(ApiError::Validation(String::from(
            "Longitude and latitude must be finite numbers",
        )));
    }

    let distance = params.distance.unwrap_or(DEFAULT_NEAR_DISTANCE_METERS);
    if !distance.is_finite() || distance < 0.0 {
        return Err(ApiError::Validation(String::from(
            "Distance must be a non-negative number of meters",
        )));
    }

    let beaches = state
        .registry
        .beaches_near(GeoPoint::new(longitude, latitude), distance)
        .await;
    Ok(ApiResponse::ok(beaches))
}

/// `GET /beaches/:id` -- fetch a single beach.
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiResponse<Beach>, ApiError> {
    let id = BeachId::from(parse_uuid(&id)?);
    Ok(ApiResponse::ok(state.registry.beach(id).await?))
}

/// `POST /beaches` -- create a beach. Safety level defaults to moderate.
pub async fn create(
    State(state): State<AppState>,
    Json(new): Json<NewBeach>,
) -> Result<ApiResponse<Beach>, ApiError> {
    let beach = state.registry.create_beach(new).await?;
    Ok(ApiResponse::created(beach, "Beach created successfully"))
}

/// `PUT /beaches/:id` -- merge a partial update.
///
/// `safetyLevel` in the payload is ignored: derived state changes only
/// through weather ingestion and alert lifecycle transitions.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(update): Json<BeachUpdate>,
) -> Result<ApiResponse<Beach>, ApiError> {
    let id = BeachId::from(parse_uuid(&id)?);
    let beach = state.registry.update_beach(id, update).await?;
    Ok(ApiResponse::ok(beach).with_message("Beach updated successfully"))
}

/// `DELETE /beaches/:id` -- hard-delete a beach.
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiResponse<()>, ApiError> {
    let id = BeachId::from(parse_uuid(&id)?);
    state.registry.delete_beach(id).await?;
    Ok(ApiResponse::message_only("Beach deleted successfully"))
}
