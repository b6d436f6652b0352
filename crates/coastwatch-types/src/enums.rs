//! Enumeration types for the Coastwatch service.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Safety classification
// ---------------------------------------------------------------------------

/// Derived swim-risk classification for a beach.
///
/// This is a projection of (latest weather observation, currently active
/// alerts) and is never accepted directly from clients. The ordering of
/// the variants reflects increasing risk, so `max()` over levels picks
/// the more dangerous one.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "lowercase")]
pub enum SafetyLevel {
    /// Calm conditions, no active hazards.
    Safe,
    /// Elevated waves or unknown conditions; swim with caution.
    #[default]
    Moderate,
    /// High waves or an active hazard alert; swimming discouraged.
    Dangerous,
}

// ---------------------------------------------------------------------------
// Alerts
// ---------------------------------------------------------------------------

/// The kind of hazard an alert describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "kebab-case")]
pub enum AlertType {
    /// Tsunami warning issued by a monitoring authority.
    Tsunami,
    /// Sustained wave heights above safe limits.
    HighWave,
    /// Rip current observed or forecast.
    RipCurrent,
    /// Storm system affecting the coastline.
    Storm,
    /// Any hazard not covered by the other variants.
    Other,
}

/// Severity of an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    /// Informational notice that does not require action.
    Info,
    /// Conditions warrant caution.
    Warning,
    /// Immediate danger to swimmers.
    Danger,
}

/// Lifecycle state of an alert.
///
/// Alerts are created `Active` and transition to `Inactive` exactly once.
/// Modelled as a tagged lifecycle rather than a boolean so the one-way
/// transition is explicit and reactivation cannot creep in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "lowercase")]
pub enum AlertStatus {
    /// The alert is in effect; affected beaches are forced to dangerous.
    Active,
    /// The alert has been retired (soft delete, never removed).
    Inactive,
}

impl AlertStatus {
    /// Whether this status counts as currently in effect.
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn safety_level_ordering_tracks_risk() {
        assert!(SafetyLevel::Safe < SafetyLevel::Moderate);
        assert!(SafetyLevel::Moderate < SafetyLevel::Dangerous);
    }

    #[test]
    fn safety_level_defaults_to_moderate() {
        assert_eq!(SafetyLevel::default(), SafetyLevel::Moderate);
    }

    #[test]
    fn safety_level_serializes_lowercase() {
        let json = serde_json::to_string(&SafetyLevel::Dangerous).unwrap();
        assert_eq!(json, "\"dangerous\"");
    }

    #[test]
    fn alert_type_serializes_kebab_case() {
        let json = serde_json::to_string(&AlertType::RipCurrent).unwrap();
        assert_eq!(json, "\"rip-current\"");
        let json = serde_json::to_string(&AlertType::HighWave).unwrap();
        assert_eq!(json, "\"high-wave\"");
    }

    #[test]
    fn alert_status_active_flag() {
        assert!(AlertStatus::Active.is_active());
        assert!(!AlertStatus::Inactive.is_active());
    }
}
