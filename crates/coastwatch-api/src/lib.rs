//! Public HTTP/JSON API for the Coastwatch beach safety service.
//!
//! This crate provides an Axum HTTP server exposing:
//!
//! - **Beach endpoints** -- CRUD, filtered listing, and radius search
//! - **Weather endpoints** -- latest observation, forecast relay, and
//!   observation ingestion (which drives the safety synchronizer)
//! - **Alert endpoints** -- active-alert queries and the alert lifecycle
//!   (creation forces affected beaches dangerous; deactivation resets
//!   them)
//! - **Minimal HTML status page** (`GET /`)
//!
//! Every endpoint answers with the `{success, data?, error?, message?}`
//! envelope; validation failures map to 400, missing resources to 404,
//! and anything unexpected to 500.

pub mod alerts;
pub mod beaches;
pub mod error;
pub mod forecast;
pub mod response;
pub mod router;
pub mod server;
pub mod state;
pub mod weather;

// Re-export primary types for convenience.
pub use error::ApiError;
pub use forecast::{ForecastProvider, MockForecastProvider};
pub use response::ApiResponse;
pub use router::build_router;
pub use server::{start_server, ServerConfig, ServerError};
pub use state::AppState;
