//! Pure safety-classification logic for the Coastwatch service.
//!
//! This crate holds the synchronizer rules that decide what a beach's
//! safety level should be at any point in time. It has no I/O and no
//! knowledge of storage or HTTP: the registry invokes [`safety::apply`]
//! as a side effect of weather ingestion and alert lifecycle transitions.

pub mod safety;

// Re-export primary items for convenience.
pub use safety::{
    apply, level_for_wave_height, SafetySignal, WAVE_DANGEROUS_THRESHOLD, WAVE_MODERATE_THRESHOLD,
};
