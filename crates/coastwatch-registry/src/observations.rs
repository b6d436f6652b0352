//! Append-only weather observation log.
//!
//! Ingestion is one of the two entry points into the safety synchronizer:
//! the observation insert and the beach-level write happen under the same
//! write lock, so no reader sees one without the other.

use chrono::Utc;
use coastwatch_core::SafetySignal;
use coastwatch_types::{BeachId, ObservationId, WeatherObservation};
use serde::Deserialize;
use tracing::info;

use crate::error::RegistryError;
use crate::store::Registry;
use crate::sync;

/// Payload for ingesting a weather sample.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewObservation {
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
    /// When the sample was taken. Defaults to ingestion time.
    #[serde(default)]
    pub timestamp: Option<chrono::DateTime<chrono::Utc>>,
}

impl Registry {
    /// Append an observation for a beach and re-derive its safety level.
    ///
    /// Observations are immutable once stored; there is no update or
    /// delete. The beach's last-known wave height is persisted alongside
    /// the derived level.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::BeachNotFound`] if the beach is absent,
    /// or [`RegistryError::Validation`] for a non-finite or negative
    /// wave height.
    pub async fn ingest_observation(
        &self,
        beach_id: BeachId,
        new: NewObservation,
    ) -> Result<WeatherObservation, RegistryError> {
        if !new.wave_height.is_finite() || new.wave_height < 0.0 {
            return Err(RegistryError::Validation(String::from(
                "Wave height must be a non-negative number",
            )));
        }

        let mut inner = self.inner.write().await;

        if !inner.beaches.contains_key(&beach_id) {
            return Err(RegistryError::BeachNotFound);
        }

        let observation = WeatherObservation {
            id: ObservationId::new(),
            beach_id,
            temperature: new.temperature,
            wind_speed: new.wind_speed,
            wind_direction: new.wind_direction,
            wave_height: new.wave_height,
            wave_period: new.wave_period,
            timestamp: new.timestamp.unwrap_or_else(Utc::now),
        };

        // Only the authoritative (newest-by-timestamp) sample may drive
        // derived state. A backdated ingest is stored but does not clobber
        // the level derived from a newer sample.
        let authoritative = inner
            .observations
            .values()
            .filter(|o| o.beach_id == beach_id)
            .all(|o| (o.timestamp, o.id) < (observation.timestamp, observation.id));

        inner.observations.insert(observation.id, observation.clone());

        if authoritative && let Some(beach) = inner.beaches.get_mut(&beach_id) {
            sync::apply_signal(beach, SafetySignal::WeatherSample(observation.wave_height));
            sync::record_wave_height(beach, observation.wave_height);
        }

        info!(
            beach_id = %beach_id,
            observation_id = %observation.id,
            wave_height = observation.wave_height,
            "observation ingested"
        );
        Ok(observation)
    }

    /// The most recent observation for a beach, by timestamp.
    ///
    /// Ties on the timestamp are broken by observation ID; IDs are UUID
    /// v7, so the later insert wins.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NoObservations`] if the beach has never
    /// reported.
    pub async fn latest_observation(
        &self,
        beach_id: BeachId,
    ) -> Result<WeatherObservation, RegistryError> {
        let inner = self.inner.read().await;
        inner
            .observations
            .values()
            .filter(|o| o.beach_id == beach_id)
            .max_by_key(|o| (o.timestamp, o.id))
            .cloned()
            .ok_or(RegistryError::NoObservations)
    }
}
