//! Relationships: typed directed edges between entity URIs.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::model::Uri;

/// The type/meaning label of a relationship.
///
/// A URI is the recommended form, but any non-empty descriptive string is
/// permitted — `"knows"` is as valid on the wire as
/// `"http://xmlns.com/foaf/0.1/knows"`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Predicate(String);

impl Predicate {
    /// Creates a predicate from a non-empty string.
    pub fn parse(s: impl Into<String>) -> Result<Predicate, ValidationError> {
        let s = s.into();
        if s.is_empty() {
            return Err(ValidationError::EmptyPredicate);
        }
        Ok(Predicate(s))
    }

    /// Returns the predicate as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Predicate {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Predicate::parse(s)
    }
}

impl TryFrom<String> for Predicate {
    type Error = ValidationError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Predicate::parse(s)
    }
}

impl From<Predicate> for String {
    fn from(predicate: Predicate) -> String {
        predicate.0
    }
}

impl From<Uri> for Predicate {
    fn from(uri: Uri) -> Predicate {
        // A URI is never empty.
        Predicate(uri.into())
    }
}

impl AsRef<str> for Predicate {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for Predicate {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Predicate {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// A directed, typed edge between two entity URIs.
///
/// Self-edges (`subject == object`) are allowed, and identical triples are
/// not deduplicated — relationship collections are ordered sequences, not
/// sets. A relationship exists independently of whether either endpoint's
/// full record is ever serialized alongside it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Relationship {
    /// Source entity.
    pub subject: Uri,
    /// Edge type/meaning.
    pub predicate: Predicate,
    /// Target entity.
    pub object: Uri,
}

impl Relationship {
    /// Creates a relationship.
    pub fn new(subject: Uri, predicate: Predicate, object: Uri) -> Self {
        Relationship {
            subject,
            predicate,
            object,
        }
    }

    /// Returns true if this edge points from an entity to itself.
    pub fn is_self_edge(&self) -> bool {
        self.subject == self.object
    }
}
