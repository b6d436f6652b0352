//! The safety state machine that keeps a beach's derived classification
//! consistent with its inputs.
//!
//! The rules are deliberately small and pure so they can be audited and
//! tested in isolation. They are applied by the registry as a side effect
//! of weather ingestion and alert lifecycle transitions; nothing else may
//! write a beach's safety level.

use coastwatch_types::SafetyLevel;

/// Wave height in meters at which conditions stop being safe.
pub const WAVE_MODERATE_THRESHOLD: f64 = 2.0;

/// Wave height in meters at which conditions become dangerous.
pub const WAVE_DANGEROUS_THRESHOLD: f64 = 4.0;

/// An input event that can change a beach's safety level.
///
/// Each signal corresponds to one entry point into the synchronizer.
/// The transition function [`apply`] is total over this enum, so every
/// way a safety level can change is enumerated here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SafetySignal {
    /// A new weather observation reported the given wave height (meters).
    WeatherSample(f64),
    /// An alert covering this beach became active.
    AlertRaised,
    /// An alert covering this beach was deactivated.
    AlertCleared,
}

/// Classify a wave height into a safety level.
///
/// Boundaries are half-open: exactly 2.0 m is `Moderate`, exactly 4.0 m
/// is `Dangerous`.
pub fn level_for_wave_height(height_meters: f64) -> SafetyLevel {
    if height_meters >= WAVE_DANGEROUS_THRESHOLD {
        SafetyLevel::Dangerous
    } else if height_meters >= WAVE_MODERATE_THRESHOLD {
        SafetyLevel::Moderate
    } else {
        SafetyLevel::Safe
    }
}

/// Apply a signal to a beach's current safety level, returning the new one.
///
/// - A weather sample re-derives the level from its wave height.
/// - An alert being raised forces `Dangerous`, overriding whatever the
///   weather implied.
/// - An alert being cleared resets the beach to `Safe` unconditionally.
///   This does not consult other still-active alerts or the latest
///   observation; the reset is re-corrected by the next signal. The
///   trade-off is recorded in `DESIGN.md`.
/// No transition depends on the previous level today; the parameter keeps
/// the signature honest about being a state machine and lets a future rule
/// (e.g. re-deriving on clear) slot in without touching call sites.
pub fn apply(_current: SafetyLevel, signal: SafetySignal) -> SafetyLevel {
    match signal {
        SafetySignal::WeatherSample(height) => level_for_wave_height(height),
        SafetySignal::AlertRaised => SafetyLevel::Dangerous,
        SafetySignal::AlertCleared => SafetyLevel::Safe,
    }
}
