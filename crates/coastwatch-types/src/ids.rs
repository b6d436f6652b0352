//! Type-safe identifier wrappers around [`Uuid`].
//!
//! Every entity in the service has a strongly-typed ID to prevent
//! accidental mixing of identifiers at compile time. All IDs use UUID v7
//! (time-ordered) so that newest-first listings sort naturally.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Generates a newtype wrapper around [`Uuid`] with standard derives.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
        #[ts(export, export_to = "bindings/")]
        pub struct $name(pub Uuid);

        impl $name {
            /// Create a new identifier using UUID v7 (time-ordered).
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }

            /// Return the inner [`Uuid`] value.
            pub const fn into_inner(self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<Uuid> for $name {
            fn from(id: Uuid) -> Self {
                Self(id)
            }
        }

        impl From<$name> for Uuid {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id! {
    /// Unique identifier for a beach.
    BeachId
}

define_id! {
    /// Unique identifier for a hazard alert.
    AlertId
}

define_id! {
    /// Unique identifier for a weather observation.
    ObservationId
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_distinct_types() {
        let beach = BeachId::new();
        let alert = AlertId::new();
        // These are different types -- the compiler enforces no mixing.
        assert_ne!(beach.into_inner(), Uuid::nil());
        assert_ne!(alert.into_inner(), Uuid::nil());
    }

    #[test]
    fn v7_ids_are_time_ordered() {
        let first = ObservationId::new();
        let second = ObservationId::new();
        assert!(first <= second);
    }

    #[test]
    fn display_round_trips_through_uuid() {
        let id = BeachId::new();
        let parsed: Uuid = id.to_string().parse().unwrap();
        assert_eq!(BeachId::from(parsed), id);
    }
}
