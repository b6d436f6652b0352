//! Beach registry operations: CRUD, filtered listing, and radius search.
//!
//! `safety_level` is absent from both input types in this module. It is
//! derived state owned by the synchronizer; a client-supplied value on
//! create or update is ignored by construction.

use chrono::Utc;
use coastwatch_types::{Beach, BeachId, GeoPoint, SafetyLevel};
use serde::Deserialize;
use tracing::info;

use crate::error::RegistryError;
use crate::geo;
use crate::store::{Registry, RegistryInner};

/// Payload for creating a beach.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBeach {
    /// Beach name, required and unique.
    pub name: String,
    /// `[longitude, latitude]` pair.
    pub coordinates: Vec<f64>,
    /// Free-text description, required.
    pub description: String,
    /// Amenities and notable features.
    #[serde(default)]
    pub features: Vec<String>,
    /// Usage restrictions.
    #[serde(default)]
    pub restrictions: Vec<String>,
    /// Whether a lifeguard service operates here.
    #[serde(default)]
    pub lifeguard_available: bool,
    /// Staffed hours when a lifeguard service exists.
    #[serde(default)]
    pub lifeguard_hours: Option<String>,
    /// Image references for the client gallery.
    #[serde(default)]
    pub images: Vec<String>,
}

/// Partial update for a beach. Unset fields are left unchanged.
///
/// There is deliberately no `safety_level` field here: clients cannot
/// overwrite derived state, and unknown JSON keys (including
/// `safetyLevel`) are ignored on deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeachUpdate {
    /// New name; re-validated for uniqueness.
    pub name: Option<String>,
    /// New `[longitude, latitude]` pair.
    pub coordinates: Option<Vec<f64>>,
    /// New description.
    pub description: Option<String>,
    /// Replacement feature list.
    pub features: Option<Vec<String>>,
    /// Replacement restriction list.
    pub restrictions: Option<Vec<String>>,
    /// New lifeguard availability flag.
    pub lifeguard_available: Option<bool>,
    /// New lifeguard hours.
    pub lifeguard_hours: Option<String>,
    /// Replacement image list.
    pub images: Option<Vec<String>>,
}

/// Exact-match filters for listing beaches. Set fields are AND-combined.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeachFilter {
    /// Keep only beaches at this safety level.
    pub safety_level: Option<SafetyLevel>,
    /// Keep only beaches with this lifeguard availability.
    pub lifeguard_available: Option<bool>,
}

/// Parse and validate a `[longitude, latitude]` pair.
fn parse_coordinates(coords: &[f64]) -> Result<GeoPoint, RegistryError> {
    match coords {
        [longitude, latitude] if longitude.is_finite() && latitude.is_finite() => {
            Ok(GeoPoint::new(*longitude, *latitude))
        }
        [_, _] => Err(RegistryError::Validation(String::from(
            "Coordinates must be finite numbers",
        ))),
        _ => Err(RegistryError::Validation(String::from(
            "Coordinates must be [longitude, latitude]",
        ))),
    }
}

/// Check that `name` is non-empty and not used by any beach other than
/// `except`.
fn validate_name(
    inner: &RegistryInner,
    name: &str,
    except: Option<BeachId>,
) -> Result<(), RegistryError> {
    if name.is_empty() {
        return Err(RegistryError::Validation(String::from(
            "Beach name is required",
        )));
    }
    let taken = inner
        .beaches
        .values()
        .any(|b| b.name == name && Some(b.id) != except);
    if taken {
        return Err(RegistryError::Validation(String::from(
            "A beach with this name already exists",
        )));
    }
    Ok(())
}

impl Registry {
    /// Create a new beach with the default `Moderate` safety level.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Validation`] if the name is missing or
    /// duplicate, the description is missing, or the coordinates are not
    /// a two-element `[longitude, latitude]` pair.
    pub async fn create_beach(&self, new: NewBeach) -> Result<Beach, RegistryError> {
        let mut inner = self.inner.write().await;

        let name = new.name.trim().to_owned();
        validate_name(&inner, &name, None)?;
        if new.description.trim().is_empty() {
            return Err(RegistryError::Validation(String::from(
                "Description is required",
            )));
        }
        let location = parse_coordinates(&new.coordinates)?;

        let now = Utc::now();
        let beach = Beach {
            id: BeachId::new(),
            name,
            location,
            description: new.description,
            safety_level: SafetyLevel::Moderate,
            features: new.features,
            restrictions: new.restrictions,
            lifeguard_available: new.lifeguard_available,
            lifeguard_hours: new.lifeguard_hours,
            images: new.images,
            wave_height: None,
            created_at: now,
            updated_at: now,
        };

        info!(beach_id = %beach.id, name = %beach.name, "beach created");
        inner.beaches.insert(beach.id, beach.clone());
        Ok(beach)
    }

    /// Fetch a single beach by ID.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::BeachNotFound`] if the beach is absent.
    pub async fn beach(&self, id: BeachId) -> Result<Beach, RegistryError> {
        let inner = self.inner.read().await;
        inner
            .beaches
            .get(&id)
            .cloned()
            .ok_or(RegistryError::BeachNotFound)
    }

    /// List beaches matching the filter. Filter fields are exact-match
    /// and AND-combined; an empty filter lists everything.
    pub async fn list_beaches(&self, filter: BeachFilter) -> Vec<Beach> {
        let inner = self.inner.read().await;
        inner
            .beaches
            .values()
            .filter(|b| {
                filter
                    .safety_level
                    .is_none_or(|level| b.safety_level == level)
            })
            .filter(|b| {
                filter
                    .lifeguard_available
                    .is_none_or(|available| b.lifeguard_available == available)
            })
            .cloned()
            .collect()
    }

    /// Merge a partial update into a beach and re-validate.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::BeachNotFound`] if the beach is absent,
    /// or [`RegistryError::Validation`] if the merged record fails
    /// validation.
    pub async fn update_beach(
        &self,
        id: BeachId,
        update: BeachUpdate,
    ) -> Result<Beach, RegistryError> {
        let mut inner = self.inner.write().await;

        if !inner.beaches.contains_key(&id) {
            return Err(RegistryError::BeachNotFound);
        }

        // Validate against the rest of the registry before mutating.
        let name = update.name.as_ref().map(|n| n.trim().to_owned());
        if let Some(ref name) = name {
            validate_name(&inner, name, Some(id))?;
        }
        let location = update
            .coordinates
            .as_deref()
            .map(parse_coordinates)
            .transpose()?;
        if let Some(ref description) = update.description
            && description.trim().is_empty()
        {
            return Err(RegistryError::Validation(String::from(
                "Description is required",
            )));
        }

        let beach = inner
            .beaches
            .get_mut(&id)
            .ok_or(RegistryError::BeachNotFound)?;

        if let Some(name) = name {
            beach.name = name;
        }
        if let Some(location) = location {
            beach.location = location;
        }
        if let Some(description) = update.description {
            beach.description = description;
        }
        if let Some(features) = update.features {
            beach.features = features;
        }
        if let Some(restrictions) = update.restrictions {
            beach.restrictions = restrictions;
        }
        if let Some(available) = update.lifeguard_available {
            beach.lifeguard_available = available;
        }
        if let Some(hours) = update.lifeguard_hours {
            beach.lifeguard_hours = Some(hours);
        }
        if let Some(images) = update.images {
            beach.images = images;
        }
        beach.updated_at = Utc::now();

        info!(beach_id = %id, "beach updated");
        Ok(beach.clone())
    }

    /// Hard-delete a beach.
    ///
    /// Past observations and alert references are left in place: the
    /// observation log is append-only, and alerts keep their historical
    /// affected-beach set.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::BeachNotFound`] if the beach is absent.
    pub async fn delete_beach(&self, id: BeachId) -> Result<(), RegistryError> {
        let mut inner = self.inner.write().await;
        if inner.beaches.remove(&id).is_none() {
            return Err(RegistryError::BeachNotFound);
        }
        info!(beach_id = %id, "beach deleted");
        Ok(())
    }

    /// Beaches within `radius_meters` of `point`, nearest first.
    ///
    /// A zero radius matches only a beach exactly at the query point.
    pub async fn beaches_near(&self, point: GeoPoint, radius_meters: f64) -> Vec<Beach> {
        let inner = self.inner.read().await;
        let mut nearby: Vec<(f64, Beach)> = inner
            .beaches
            .values()
            .map(|b| (geo::haversine_meters(point, b.location), b.clone()))
            .filter(|(distance, _)| *distance <= radius_meters)
            .collect();
        nearby.sort_by(|(a, _), (b, _)| a.total_cmp(b));
        nearby.into_iter().map(|(_, beach)| beach).collect()
    }
}
