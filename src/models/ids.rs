//! Strongly-typed ID wrappers
//!
//! Spending ids are handed out by the store in increasing order, so the
//! numeric value doubles as a stable tie-break key for sorting.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Macro to generate numeric ID newtype wrappers
macro_rules! define_id {
    ($name:ident, $display_prefix:literal) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Wrap a raw id value
            pub const fn new(value: u64) -> Self {
                Self(value)
            }

            /// Get the raw id value
            pub const fn value(&self) -> u64 {
                self.0
            }

            /// The id following this one
            pub const fn next(&self) -> Self {
                Self(self.0 + 1)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $display_prefix, self.0)
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }

        impl FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.strip_prefix($display_prefix).unwrap_or(s);
                Ok(Self(s.parse()?))
            }
        }
    };
}

define_id!(SpendingId, "sp-");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display_and_parse() {
        let id = SpendingId::new(42);
        assert_eq!(id.to_string(), "sp-42");
        assert_eq!("sp-42".parse::<SpendingId>().unwrap(), id);
        assert_eq!("42".parse::<SpendingId>().unwrap(), id);
        assert!("sp-x".parse::<SpendingId>().is_err());
    }

    #[test]
    fn test_ids_are_ordered() {
        let first = SpendingId::new(1);
        assert!(first < first.next());
        assert_eq!(first.next().value(), 2);
    }

    #[test]
    fn test_id_serialization() {
        let id = SpendingId::new(7);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "7");
        let deserialized: SpendingId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
