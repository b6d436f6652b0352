//! Application of safety signals to beach records.
//!
//! This is the only place a beach's `safety_level` is written. The
//! functions are `pub(crate)` on purpose: external actors cannot invoke
//! the synchronizer directly, only the weather-ingest and alert-lifecycle
//! entry points reach it.

use chrono::Utc;
use coastwatch_core::SafetySignal;
use coastwatch_types::Beach;
use tracing::info;

/// Apply a safety signal to a beach record in place.
pub(crate) fn apply_signal(beach: &mut Beach, signal: SafetySignal) {
    let next = coastwatch_core::apply(beach.safety_level, signal);
    if next != beach.safety_level {
        info!(
            beach_id = %beach.id,
            from = ?beach.safety_level,
            to = ?next,
            signal = ?signal,
            "safety level changed"
        );
    }
    beach.safety_level = next;
    beach.updated_at = Utc::now();
}

/// Record the latest observed wave height on the beach record.
pub(crate) fn record_wave_height(beach: &mut Beach, height_meters: f64) {
    beach.wave_height = Some(height_meters);
}
