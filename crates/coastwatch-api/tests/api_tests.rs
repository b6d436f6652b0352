//! Integration tests for the API endpoints.
//!
//! Tests use Axum's `Router` directly via `tower::ServiceExt` without
//! starting a TCP server. This validates handler logic, routing, the
//! response envelope, and the safety synchronization visible through
//! the HTTP surface.

#![allow(clippy::unwrap_used)]

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use coastwatch_api::{build_router, AppState};
use serde_json::{json, Value};
use tower::ServiceExt;

fn app() -> Router {
    build_router(AppState::default())
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn send(
    router: &Router,
    method: &str,
    path: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(path);
    let request = match body {
        Some(value) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = body_to_json(response.into_body()).await;
    (status, body)
}

async fn create_beach(router: &Router, name: &str, lon: f64, lat: f64) -> String {
    let (status, body) = send(
        router,
        "POST",
        "/beaches",
        Some(json!({
            "name": name,
            "coordinates": [lon, lat],
            "description": "A test beach."
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["data"]["id"].as_str().unwrap().to_owned()
}

// =========================================================================
// Status page
// =========================================================================

#[tokio::test]
async fn index_returns_html() {
    let response = app()
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("Coastwatch API"));
}

// =========================================================================
// Beaches
// =========================================================================

#[tokio::test]
async fn create_beach_defaults_to_moderate() {
    let router = app();
    let (status, body) = send(
        &router,
        "POST",
        "/beaches",
        Some(json!({
            "name": "X",
            "coordinates": [10.0, 20.0],
            "description": "d"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["safetyLevel"], "moderate");
    assert_eq!(body["message"], "Beach created successfully");
}

#[tokio::test]
async fn create_beach_with_bad_coordinates_is_400() {
    let router = app();
    let (status, body) = send(
        &router,
        "POST",
        "/beaches",
        Some(json!({
            "name": "Broken",
            "coordinates": [10.0],
            "description": "d"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Coordinates must be [longitude, latitude]");
}

#[tokio::test]
async fn get_unknown_beach_is_404_and_bad_id_is_400() {
    let router = app();

    let (status, body) = send(
        &router,
        "GET",
        "/beaches/00000000-0000-7000-8000-000000000000",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Beach not found");

    let (status, body) = send(&router, "GET", "/beaches/not-a-uuid", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn list_beaches_applies_query_filters() {
    let router = app();
    create_beach(&router, "One", 10.0, 20.0).await;
    create_beach(&router, "Two", 11.0, 21.0).await;

    let (status, body) = send(&router, "GET", "/beaches", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 2);

    let (_, body) = send(&router, "GET", "/beaches?safetyLevel=dangerous", None).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 0);

    let (_, body) = send(&router, "GET", "/beaches?lifeguardAvailable=false", None).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn update_ignores_safety_level_and_revalidates() {
    let router = app();
    let id = create_beach(&router, "Calm", 10.0, 20.0).await;

    let (status, body) = send(
        &router,
        "PUT",
        &format!("/beaches/{id}"),
        Some(json!({
            "safetyLevel": "dangerous",
            "description": "updated"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["safetyLevel"], "moderate");
    assert_eq!(body["data"]["description"], "updated");
    assert_eq!(body["message"], "Beach updated successfully");
}

#[tokio::test]
async fn delete_beach_then_404() {
    let router = app();
    let id = create_beach(&router, "Gone", 10.0, 20.0).await;

    let (status, body) = send(&router, "DELETE", &format!("/beaches/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Beach deleted successfully");

    let (status, _) = send(&router, "GET", &format!("/beaches/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn near_requires_point_and_sorts_by_distance() {
    let router = app();
    create_beach(&router, "Origin", 23.0, 37.0).await;
    create_beach(&router, "Close", 23.0, 37.01).await;
    create_beach(&router, "Far", 23.0, 38.0).await;

    let (status, body) = send(&router, "GET", "/beaches/near", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Longitude and latitude are required");

    let (status, body) = send(
        &router,
        "GET",
        "/beaches/near?longitude=23.0&latitude=37.0&distance=5000",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Origin", "Close"]);

    // Default 10 km radius still excludes the beach a degree away.
    let (_, body) = send(
        &router,
        "GET",
        "/beaches/near?longitude=23.0&latitude=37.0",
        None,
    )
    .await;
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
}

// =========================================================================
// Weather
// =========================================================================

#[tokio::test]
async fn ingest_updates_safety_level_and_latest_reflects_it() {
    let router = app();
    let id = create_beach(&router, "Surf", 10.0, 20.0).await;

    let (status, body) = send(
        &router,
        "POST",
        &format!("/weather/beach/{id}"),
        Some(json!({
            "temperature": 25.0,
            "windSpeed": 10.0,
            "windDirection": "NW",
            "waveHeight": 5.0,
            "wavePeriod": 9.0
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["waveHeight"], 5.0);

    let (_, body) = send(&router, "GET", &format!("/beaches/{id}"), None).await;
    assert_eq!(body["data"]["safetyLevel"], "dangerous");
    assert_eq!(body["data"]["waveHeight"], 5.0);

    let (status, body) = send(&router, "GET", &format!("/weather/beach/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["waveHeight"], 5.0);
}

#[tokio::test]
async fn latest_without_observations_is_404() {
    let router = app();
    let id = create_beach(&router, "Silent", 10.0, 20.0).await;
    let (status, body) = send(&router, "GET", &format!("/weather/beach/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Weather data not found for this beach");
}

#[tokio::test]
async fn forecast_returns_five_days_for_existing_beach() {
    let router = app();
    let id = create_beach(&router, "Sunny", 10.0, 20.0).await;

    let (status, body) = send(&router, "GET", &format!("/weather/forecast/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    let days = body["data"].as_array().unwrap();
    assert_eq!(days.len(), 5);
    assert_eq!(days.first().unwrap()["beachId"].as_str().unwrap(), id);

    let (status, _) = send(
        &router,
        "GET",
        "/weather/forecast/00000000-0000-7000-8000-000000000000",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// =========================================================================
// Alerts
// =========================================================================

#[tokio::test]
async fn alert_referencing_unknown_beach_is_400_and_writes_nothing() {
    let router = app();
    let (status, body) = send(
        &router,
        "POST",
        "/alerts",
        Some(json!({
            "type": "storm",
            "severity": "warning",
            "message": "m",
            "affectedBeaches": ["00000000-0000-7000-8000-000000000000"]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "1 affected beach reference(s) do not exist");

    let (_, body) = send(&router, "GET", "/alerts", None).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn alert_lifecycle_end_to_end() {
    let router = app();
    let id = create_beach(&router, "X", 10.0, 20.0).await;

    // Dangerous surf.
    let (status, _) = send(
        &router,
        "POST",
        &format!("/weather/beach/{id}"),
        Some(json!({
            "temperature": 25.0,
            "windSpeed": 10.0,
            "windDirection": "W",
            "waveHeight": 5.0,
            "wavePeriod": 9.0
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    // Tsunami alert keeps the beach dangerous.
    let (status, body) = send(
        &router,
        "POST",
        "/alerts",
        Some(json!({
            "type": "tsunami",
            "severity": "danger",
            "message": "m",
            "affectedBeaches": [id]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let alert_id = body["data"]["id"].as_str().unwrap().to_owned();
    assert_eq!(body["data"]["type"], "tsunami");
    assert_eq!(body["data"]["status"], "active");

    let (_, body) = send(&router, "GET", &format!("/beaches/{id}"), None).await;
    assert_eq!(body["data"]["safetyLevel"], "dangerous");

    // Both alert queries include it.
    let (_, body) = send(&router, "GET", "/alerts", None).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    let (_, body) = send(&router, "GET", &format!("/alerts/beach/{id}"), None).await;
    assert_eq!(
        body["data"].as_array().unwrap().first().unwrap()["id"]
            .as_str()
            .unwrap(),
        alert_id
    );

    // Deactivation resets the beach to safe even though the last sample
    // implied dangerous conditions.
    let (status, body) = send(&router, "DELETE", &format!("/alerts/{alert_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "inactive");
    assert_eq!(body["message"], "Alert deactivated successfully");

    let (_, body) = send(&router, "GET", &format!("/beaches/{id}"), None).await;
    assert_eq!(body["data"]["safetyLevel"], "safe");

    let (_, body) = send(&router, "GET", "/alerts", None).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn put_with_active_false_deactivates() {
    let router = app();
    let id = create_beach(&router, "Y", 10.0, 20.0).await;

    let (_, body) = send(
        &router,
        "POST",
        "/alerts",
        Some(json!({
            "type": "rip-current",
            "severity": "warning",
            "message": "strong current",
            "affectedBeaches": [id]
        })),
    )
    .await;
    let alert_id = body["data"]["id"].as_str().unwrap().to_owned();

    let (status, body) = send(
        &router,
        "PUT",
        &format!("/alerts/{alert_id}"),
        Some(json!({ "active": false })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "inactive");

    let (_, body) = send(&router, "GET", &format!("/beaches/{id}"), None).await;
    assert_eq!(body["data"]["safetyLevel"], "safe");

    // The lifecycle is one-way.
    let (status, _) = send(
        &router,
        "PUT",
        &format!("/alerts/{alert_id}"),
        Some(json!({ "active": true })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn alerts_for_unknown_beach_is_404() {
    let router = app();
    let (status, body) = send(
        &router,
        "GET",
        "/alerts/beach/00000000-0000-7000-8000-000000000000",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Beach not found");
}
