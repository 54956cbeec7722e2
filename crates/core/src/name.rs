//! String-backed identifiers used across the domain.
//!
//! Both are opaque: no format validation is applied, they only make call
//! sites say which string is which.

use serde::{Deserialize, Serialize};

/// Unique, immutable name of an activity (the catalog key).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivityName(String);

/// Participant identifier (a student's email address).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Email(String);

macro_rules! impl_string_newtype {
    ($t:ty) => {
        impl $t {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $t {
            fn from(value: &str) -> Self {
                Self(value.to_owned())
            }
        }

        impl From<String> for $t {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl AsRef<str> for $t {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl core::borrow::Borrow<str> for $t {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl PartialEq<str> for $t {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $t {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    };
}

impl_string_newtype!(ActivityName);
impl_string_newtype!(Email);

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn names_serialize_as_plain_strings() {
        let name = ActivityName::new("Chess Club");
        assert_eq!(serde_json::to_string(&name).unwrap(), "\"Chess Club\"");

        let email: Email = serde_json::from_str("\"michael@mergington.edu\"").unwrap();
        assert_eq!(email, "michael@mergington.edu");
    }

    #[test]
    fn map_keyed_by_name_is_queryable_by_str() {
        let mut map = BTreeMap::new();
        map.insert(ActivityName::from("Drama Club"), 1);
        assert_eq!(map.get("Drama Club"), Some(&1));
        assert_eq!(map.get("drama club"), None);
    }
}
