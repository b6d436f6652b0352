//! Core entity structs for the Coastwatch service.
//!
//! All wire-visible structs serialize in `camelCase` to match what the
//! map client expects, and export `TypeScript` bindings via `ts-rs`.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{AlertSeverity, AlertStatus, AlertType, SafetyLevel};
use crate::ids::{AlertId, BeachId, ObservationId};

// ---------------------------------------------------------------------------
// Geography
// ---------------------------------------------------------------------------

/// A geographic point in WGS84 coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "camelCase")]
pub struct GeoPoint {
    /// Degrees east of the prime meridian, in `[-180, 180]`.
    pub longitude: f64,
    /// Degrees north of the equator, in `[-90, 90]`.
    pub latitude: f64,
}

impl GeoPoint {
    /// Create a point from a longitude/latitude pair.
    pub const fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }
}

// ---------------------------------------------------------------------------
// Beach
// ---------------------------------------------------------------------------

/// A beach tracked by the service.
///
/// `safety_level` and `wave_height` are derived state owned by the safety
/// synchronizer: they change only as a side effect of weather ingestion
/// and alert lifecycle transitions, never through a generic update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "camelCase")]
pub struct Beach {
    /// Unique beach identifier.
    pub id: BeachId,
    /// Human-readable beach name, unique across the registry.
    pub name: String,
    /// Geographic location of the beach.
    pub location: GeoPoint,
    /// Free-text description shown to visitors.
    pub description: String,
    /// Derived swim-risk classification.
    pub safety_level: SafetyLevel,
    /// Amenities and notable features (e.g. "showers", "surf school").
    pub features: Vec<String>,
    /// Usage restrictions (e.g. "no dogs", "no fires").
    pub restrictions: Vec<String>,
    /// Whether a lifeguard service operates at this beach.
    pub lifeguard_available: bool,
    /// Staffed hours when a lifeguard service exists.
    pub lifeguard_hours: Option<String>,
    /// Image references for the client gallery.
    pub images: Vec<String>,
    /// Last-known wave height in meters, from the most recent observation.
    pub wave_height: Option<f64>,
    /// When the beach record was created.
    pub created_at: DateTime<Utc>,
    /// When the beach record was last modified.
    pub updated_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Weather
// ---------------------------------------------------------------------------

/// A single weather sample reported for a beach.
///
/// Observations are immutable once created. The newest observation by
/// timestamp for a given beach is authoritative for derived state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "camelCase")]
pub struct WeatherObservation {
    /// Unique observation identifier.
    pub id: ObservationId,
    /// The beach this sample was taken at.
    pub beach_id: BeachId,
    /// Air temperature in degrees Celsius.
    pub temperature: f64,
    /// Wind speed in km/h.
    pub wind_speed: f64,
    /// Compass wind direction (e.g. "NW").
    pub wind_direction: String,
    /// Significant wave height in meters.
    pub wave_height: f64,
    /// Wave period in seconds.
    pub wave_period: f64,
    /// When the sample was taken.
    pub timestamp: DateTime<Utc>,
}

/// One day of a weather forecast for a beach.
///
/// Produced by a forecast provider, which is an external collaborator;
/// the service only relays its output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "camelCase")]
pub struct ForecastDay {
    /// The calendar date this entry forecasts.
    pub date: NaiveDate,
    /// Forecast air temperature in degrees Celsius.
    pub temperature: f64,
    /// Forecast wind speed in km/h.
    pub wind_speed: f64,
    /// Forecast compass wind direction.
    pub wind_direction: String,
    /// Forecast significant wave height in meters.
    pub wave_height: f64,
    /// Forecast wave period in seconds.
    pub wave_period: f64,
    /// The beach this forecast applies to.
    pub beach_id: BeachId,
}

// ---------------------------------------------------------------------------
// Alerts
// ---------------------------------------------------------------------------

/// A hazard notice covering one or more beaches.
///
/// Created `Active`; retired via a one-way transition to `Inactive` and
/// never physically removed. The affected-beach set is fixed at creation:
/// individual beaches cannot be added or removed afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    /// Unique alert identifier.
    pub id: AlertId,
    /// The kind of hazard.
    #[serde(rename = "type")]
    #[ts(rename = "type")]
    pub alert_type: AlertType,
    /// How serious the hazard is.
    pub severity: AlertSeverity,
    /// Human-readable message shown to visitors.
    pub message: String,
    /// Beaches this alert applies to. Immutable after creation.
    pub affected_beaches: Vec<BeachId>,
    /// When the alert takes effect. Defaults to creation time.
    pub start_time: DateTime<Utc>,
    /// When the alert ended, set on deactivation or supplied up front.
    pub end_time: Option<DateTime<Utc>>,
    /// Lifecycle state.
    pub status: AlertStatus,
    /// When the alert record was created.
    pub created_at: DateTime<Utc>,
    /// When the alert record was last modified.
    pub updated_at: DateTime<Utc>,
}

impl Alert {
    /// Whether this alert is currently in effect.
    pub const fn is_active(&self) -> bool {
        self.status.is_active()
    }
}
