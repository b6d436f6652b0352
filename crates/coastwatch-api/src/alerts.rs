//! Alert endpoint handlers.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/alerts` | All active alerts, newest start first |
//! | `GET` | `/alerts/beach/:beachId` | Active alerts for one beach |
//! | `POST` | `/alerts` | Create an alert (forces beaches dangerous) |
//! | `PUT` | `/alerts/:id` | Update; `active: false` deactivates |
//! | `DELETE` | `/alerts/:id` | Soft-deactivate (never removes) |

use axum::extract::{Path, State};
use axum::Json;
use coastwatch_registry::{AlertUpdate, NewAlert};
use coastwatch_types::{Alert, AlertId, BeachId};

use crate::error::{parse_uuid, ApiError};
use crate::response::ApiResponse;
use crate::state::AppState;

/// `GET /alerts` -- all active alerts.
pub async fn list_active(
    State(state): State<AppState>,
) -> Result<ApiResponse<Vec<Alert>>, ApiError> {
    Ok(ApiResponse::ok(state.registry.active_alerts().await))
}

/// `GET /alerts/beach/:beachId` -- active alerts covering one beach.
pub async fn for_beach(
    State(state): State<AppState>,
    Path(beach_id): Path<String>,
) -> Result<ApiResponse<Vec<Alert>>, ApiError> {
    let beach_id = BeachId::from(parse_uuid(&beach_id)?);
    Ok(ApiResponse::ok(
        state.registry.alerts_for_beach(beach_id).await?,
    ))
}

/// `POST /alerts` -- create an alert.
///
/// Every referenced beach must exist; on success all of them are forced
/// to the dangerous level before the response is produced.
pub async fn create(
    State(state): State<AppState>,
    Json(new): Json<NewAlert>,
) -> Result<ApiResponse<Alert>, ApiError> {
    let alert = state.registry.create_alert(new).await?;
    Ok(ApiResponse::created(alert, "Alert created successfully"))
}

/// `PUT /alerts/:id` -- merge a partial update.
///
/// Setting `active` to `false` runs the deactivation synchronization for
/// the alert's affected beaches.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(update): Json<AlertUpdate>,
) -> Result<ApiResponse<Alert>, ApiError> {
    let id = AlertId::from(parse_uuid(&id)?);
    let alert = state.registry.update_alert(id, update).await?;
    Ok(ApiResponse::ok(alert).with_message("Alert updated successfully"))
}

/// `DELETE /alerts/:id` -- soft-deactivate an alert and reset its
/// beaches' safety levels.
pub async fn deactivate(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiResponse<Alert>, ApiError> {
    let id = AlertId::from(parse_uuid(&id)?);
    let alert = state.registry.deactivate_alert(id).await?;
    Ok(ApiResponse::ok(alert).with_message("Alert deactivated successfully"))
}
