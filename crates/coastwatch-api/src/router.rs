//! Axum router construction for the Coastwatch API.
//!
//! Assembles all routes into a single [`Router`] with CORS middleware
//! enabled for cross-origin access from the map client.

use axum::extract::State;
use axum::response::Html;
use axum::routing::{get, put};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;
use crate::{alerts, beaches, weather};

/// Build the complete Axum router for the API server.
///
/// CORS is configured to allow any origin for development. In
/// production this should be restricted.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Status page
        .route("/", get(index))
        // Beaches
        .route("/beaches", get(beaches::list).post(beaches::create))
        .route("/beaches/near", get(beaches::near))
        .route(
            "/beaches/{id}",
            get(beaches::get)
                .put(beaches::update)
                .delete(beaches::remove),
        )
        // Weather
        .route(
            "/weather/beach/{beachId}",
            get(weather::latest).post(weather::ingest),
        )
        .route("/weather/forecast/{beachId}", get(weather::forecast))
        // Alerts
        .route("/alerts", get(alerts::list_active).post(alerts::create))
        .route("/alerts/beach/{beachId}", get(alerts::for_beach))
        .route(
            "/alerts/{id}",
            put(alerts::update).delete(alerts::deactivate),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve a minimal HTML page showing server status and API links.
async fn index(State(state): State<AppState>) -> Html<String> {
    let beach_count = state
        .registry
        .list_beaches(coastwatch_registry::BeachFilter::default())
        .await
        .len();
    let alert_count = state.registry.active_alerts().await.len();

    Html(format!(
        r"<!DOCTYPE html>
<html lang='en'>
<head>
    <meta charset='utf-8'>
    <title>Coastwatch API</title>
    <style>
        body {{ background: #0d1117; color: #c9d1d9; font-family: monospace; padding: 2rem; max-width: 720px; margin: 0 auto; }}
        h1 {{ color: #58a6ff; }}
        a {{ color: #58a6ff; text-decoration: none; }}
        li {{ padding: 0.2rem 0; }}
        .status {{ color: #3fb950; font-weight: bold; }}
    </style>
</head>
<body>
    <h1>Coastwatch API</h1>
    <p>Status: <span class='status'>RUNNING</span> &mdash; {beach_count} beaches, {alert_count} active alerts</p>
    <h2>Endpoints</h2>
    <ul>
        <li>GET <a href='/beaches'>/beaches</a> &mdash; list beaches (?safetyLevel=, ?lifeguardAvailable=)</li>
        <li>GET /beaches/near &mdash; radius search (?longitude=, ?latitude=, ?distance=)</li>
        <li>GET /beaches/:id &mdash; single beach</li>
        <li>GET /weather/beach/:beachId &mdash; latest observation</li>
        <li>GET /weather/forecast/:beachId &mdash; five-day forecast</li>
        <li>GET <a href='/alerts'>/alerts</a> &mdash; active alerts</li>
        <li>GET /alerts/beach/:beachId &mdash; active alerts for a beach</li>
    </ul>
</body>
</html>"
    ))
}
