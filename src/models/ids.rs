//! Strongly-typed ID wrappers for YNAB entities
//!
//! YNAB assigns a UUID to every budget, category group and category. Wrapping
//! them keeps a category id from being passed where a group id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident, $short_prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Create an ID from an existing UUID
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Get the underlying UUID
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            /// Parse an ID from a string
            pub fn parse(s: &str) -> Result<Self, uuid::Error> {
                Ok(Self(Uuid::parse_str(s)?))
            }

            /// Abbreviated form for log output, e.g. `bud-550e8400`
            pub fn short(&self) -> String {
                format!("{}{}", $short_prefix, &self.0.to_string()[..8])
            }
        }

        /// Displays the full hyphenated UUID, the form YNAB uses in URLs
        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0.hyphenated())
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.strip_prefix($short_prefix).unwrap_or(s);
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

define_id!(BudgetId, "bud-");
define_id!(CategoryGroupId, "grp-");
define_id!(CategoryId, "cat-");

#[cfg(test)]
mod tests {
    use super::*;

    const UUID_STR: &str = "550e8400-e29b-41d4-a716-446655440000";

    #[test]
    fn test_display_is_full_uuid() {
        let id = BudgetId::parse(UUID_STR).unwrap();
        assert_eq!(id.to_string(), UUID_STR);
    }

    #[test]
    fn test_display_is_lowercase() {
        let id = BudgetId::parse(&UUID_STR.to_uppercase()).unwrap();
        assert_eq!(id.to_string(), UUID_STR);
    }

    #[test]
    fn test_short() {
        let id = CategoryId::parse(UUID_STR).unwrap();
        assert_eq!(id.short(), "cat-550e8400");
    }

    #[test]
    fn test_from_str_strips_prefix() {
        let id: CategoryGroupId = format!("grp-{}", UUID_STR).parse().unwrap();
        assert_eq!(id.as_uuid().to_string(), UUID_STR);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(BudgetId::parse("not-a-uuid").is_err());
    }

    #[test]
    fn test_id_serialization() {
        let id = BudgetId::from_uuid(Uuid::new_v4());
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id));
        let deserialized: BudgetId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
