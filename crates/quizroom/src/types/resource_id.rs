//! Resource id type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

/// A validated backend resource id.
///
/// The backend assigns opaque string ids to every entity (categories,
/// courses, students, quizzes, ...). Ids travel in query strings and
/// request bodies, so this type rejects values that would corrupt a URL.
///
/// # Example
///
/// ```
/// use quizroom::ResourceId;
///
/// let id = ResourceId::new("64b0f1a2c9d3").unwrap();
/// assert_eq!(id.as_str(), "64b0f1a2c9d3");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ResourceId(String);

impl ResourceId {
    /// Maximum accepted id length.
    const MAX_LEN: usize = 128;

    /// Create a new resource id from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is empty, too long, or contains
    /// whitespace or path separators.
    pub fn new(s: impl Into<String>) -> Result<Self, Error> {
        let s = s.into();

        if s.is_empty() {
            return Err(InvalidInputError::ResourceId {
                value: s,
                reason: "must not be empty".to_string(),
            }
            .into());
        }

        if s.len() > Self::MAX_LEN {
            return Err(InvalidInputError::ResourceId {
                value: s,
                reason: format!("must be at most {} characters", Self::MAX_LEN),
            }
            .into());
        }

        if s.chars().any(|c| c.is_whitespace() || c == '/' || c == '?') {
            return Err(InvalidInputError::ResourceId {
                value: s,
                reason: "must not contain whitespace, '/' or '?'".to_string(),
            }
            .into());
        }

        Ok(Self(s))
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ResourceId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for ResourceId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ResourceId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ResourceId::new(s).map_err(serde::de::Error::custom)
    }
}

impl AsRef<str> for ResourceId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
