//! In-memory data layer for the Coastwatch service.
//!
//! One [`Registry`] handle owns three collections behind a single
//! `RwLock`: the beach registry, the append-only weather observation
//! log, and the alert store. The safety synchronizer
//! ([`coastwatch_core`]) is invoked only from the mutating paths in this
//! crate -- weather ingestion and alert lifecycle transitions -- so a
//! beach's `safety_level` is always a function of its latest signals.
//!
//! # Modules
//!
//! - [`store`] -- The shared lock and collections
//! - [`beaches`] -- Beach CRUD, filtered listing, radius search
//! - [`observations`] -- Observation ingestion and latest-sample lookup
//! - [`alerts`] -- Alert creation, one-way deactivation, queries
//! - [`geo`] -- Haversine distance for the radius search
//! - [`error`] -- Shared error type

pub mod alerts;
pub mod beaches;
pub mod error;
pub mod geo;
pub mod observations;
pub mod store;

mod sync;

// Re-export primary types for convenience.
pub use alerts::{AlertUpdate, NewAlert};
pub use beaches::{BeachFilter, BeachUpdate, NewBeach};
pub use error::RegistryError;
pub use observations::NewObservation;
pub use store::Registry;
