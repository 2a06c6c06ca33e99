//! Type-safe string identifier wrappers.
//!
//! Elements, missions and shop items are all keyed by short human-readable
//! strings (`"h"`, `"h2o"`, `"m3"`, `"cat_stabilizer"`). Each gets its own
//! newtype so the compiler rejects passing a mission id where an element id
//! is expected.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Generates a newtype wrapper around [`String`] with standard derives.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
        #[serde(transparent)]
        #[ts(export, export_to = "bindings/")]
        pub struct $name(pub String);

        impl $name {
            /// Create an identifier from anything string-like.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Borrow the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Return the inner [`String`] value.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }
    };
}

define_id! {
    /// Unique identifier for an element (basic, compound, or isotope).
    ElementId
}

define_id! {
    /// Unique identifier for an active mission.
    MissionId
}

define_id! {
    /// Unique identifier for an item listed in the shop.
    ShopItemId
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_compare_by_content() {
        assert_eq!(ElementId::new("h"), ElementId::from("h"));
        assert_ne!(ElementId::new("h"), ElementId::new("o"));
    }

    #[test]
    fn id_serializes_as_bare_string() {
        let json = serde_json::to_string(&ElementId::new("h2o")).ok();
        assert_eq!(json.as_deref(), Some("\"h2o\""));
        let restored: Result<MissionId, _> = serde_json::from_str("\"m7\"");
        assert_eq!(restored.ok(), Some(MissionId::new("m7")));
    }

    #[test]
    fn id_display_matches_inner() {
        let id = ShopItemId::new("energy_pack");
        assert_eq!(id.to_string(), "energy_pack");
        assert_eq!(id.as_str(), "energy_pack");
    }
}
