//! The shared in-memory store behind all registry operations.
//!
//! A single [`RwLock`] protects all three collections. Holding one lock
//! means the multi-entity write paths (alert creation marking beaches
//! dangerous, deactivation resetting them) are atomic with respect to
//! concurrent requests: no reader can observe an alert without its
//! beaches updated, or the converse. Reads take the read lock and
//! otherwise interleave freely with writes.

use std::collections::BTreeMap;
use std::sync::Arc;

use coastwatch_types::{Alert, AlertId, Beach, BeachId, ObservationId, WeatherObservation};
use tokio::sync::RwLock;

/// The collections guarded by the registry lock.
#[derive(Debug, Default)]
pub(crate) struct RegistryInner {
    /// Beach records keyed by ID.
    pub(crate) beaches: BTreeMap<BeachId, Beach>,
    /// Append-only weather observation log keyed by ID. Observation IDs
    /// are UUID v7, so iteration order is roughly chronological.
    pub(crate) observations: BTreeMap<ObservationId, WeatherObservation>,
    /// Alert records keyed by ID. Alerts are never removed, only
    /// transitioned to inactive.
    pub(crate) alerts: BTreeMap<AlertId, Alert>,
}

/// Handle to the in-memory registry.
///
/// Cheap to clone; all clones share the same underlying data. Each
/// operation is a single synchronous unit of work from the caller's
/// perspective -- suspension occurs only while awaiting the lock.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    pub(crate) inner: Arc<RwLock<RegistryInner>>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }
}
