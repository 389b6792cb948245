//! Strongly-typed ID wrappers for server-issued identifiers
//!
//! The backend hands out opaque string ids. Wrapping them per entity keeps a
//! barber id from being passed where a barbershop id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }
    };
}

define_id!(BarbershopId);
define_id!(BarberId);
define_id!(ServiceId);
define_id!(AppointmentId);
define_id!(UserId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_is_transparent_on_the_wire() {
        let id = BarberId::new("b1");
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""b1""#);

        let parsed: BarberId = serde_json::from_str(r#""b7""#).unwrap();
        assert_eq!(parsed.as_str(), "b7");
    }

    #[test]
    fn test_id_display() {
        assert_eq!(BarbershopId::from("1").to_string(), "1");
    }
}
