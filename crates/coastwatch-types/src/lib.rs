//! Shared type definitions for the Coastwatch beach safety service.
//!
//! This crate is the single source of truth for all types used across the
//! Coastwatch workspace. Types defined here flow downstream to `TypeScript`
//! via `ts-rs` for the map client.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe UUID wrappers for all entity identifiers
//! - [`enums`] -- Enumeration types (safety levels, alert taxonomy)
//! - [`structs`] -- Core entity structs (beaches, observations, alerts)

pub mod enums;
pub mod ids;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::{AlertSeverity, AlertStatus, AlertType, SafetyLevel};
pub use ids::{AlertId, BeachId, ObservationId};
pub use structs::{Alert, Beach, ForecastDay, GeoPoint, WeatherObservation};
