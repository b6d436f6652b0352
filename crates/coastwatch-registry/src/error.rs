//! Error types for the data layer.
//!
//! Every failure is terminal for the triggering request: there is no
//! retry logic anywhere in the registry. Not-found variants carry a
//! fixed message per resource; validation failures carry the message
//! surfaced verbatim to the caller.

/// Errors that can occur in the data layer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// The referenced beach does not exist.
    #[error("Beach not found")]
    BeachNotFound,

    /// The referenced alert does not exist.
    #[error("Alert not found")]
    AlertNotFound,

    /// The beach has never reported a weather observation.
    #[error("Weather data not found for this beach")]
    NoObservations,

    /// A request failed validation. The message is safe to surface to
    /// the caller.
    #[error("{0}")]
    Validation(String),
}

impl RegistryError {
    /// Whether this error maps to an HTTP 404 as opposed to a 400.
    pub const fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::BeachNotFound | Self::AlertNotFound | Self::NoObservations
        )
    }
}
