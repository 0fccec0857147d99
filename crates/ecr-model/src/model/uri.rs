//! URI identifiers.
//!
//! Every identity in the model is an absolute URI: a scheme, a colon, and a
//! non-empty remainder (`did:example:alice`, `https://example.org/p/1`,
//! `urn:uuid:...`). The check here is deliberately syntactic — what a given
//! scheme means, and whether the identified thing exists, is a consumer
//! concern.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// An absolute URI identifying an entity, a component type, or a predicate.
///
/// Construction goes through [`Uri::parse`], so a held value is always
/// syntactically valid. The inner string is never normalized: two URIs are
/// equal iff their text is equal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Uri(String);

impl Uri {
    /// Parses an absolute URI.
    ///
    /// Accepts `scheme ":" remainder` where the scheme matches RFC 3986
    /// section 3.1 (`ALPHA *(ALPHA / DIGIT / "+" / "-" / ".")`), the
    /// remainder is non-empty, and the whole string contains no whitespace
    /// or control characters.
    pub fn parse(s: impl Into<String>) -> Result<Uri, ValidationError> {
        let s = s.into();
        match check_uri_syntax(&s) {
            None => Ok(Uri(s)),
            Some(reason) => Err(ValidationError::InvalidUri { value: s, reason }),
        }
    }

    /// Returns the URI as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the scheme (the part before the first colon), exactly as
    /// written; no case normalization is applied.
    pub fn scheme(&self) -> &str {
        // A colon is guaranteed by construction.
        &self.0[..self.0.find(':').unwrap_or(0)]
    }
}

/// Checks absolute-URI syntax, returning a reason on failure.
pub(crate) fn check_uri_syntax(s: &str) -> Option<&'static str> {
    if s.is_empty() {
        return Some("empty string");
    }
    if s.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Some("contains whitespace or control characters");
    }
    let Some(colon) = s.find(':') else {
        return Some("missing `:` scheme separator");
    };
    let (scheme, rest) = (&s[..colon], &s[colon + 1..]);
    if scheme.is_empty() {
        return Some("empty scheme");
    }
    if !scheme.as_bytes()[0].is_ascii_alphabetic() {
        return Some("scheme must start with a letter");
    }
    if !scheme
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'+' | b'-' | b'.'))
    {
        return Some("scheme contains invalid characters");
    }
    if rest.is_empty() {
        return Some("nothing after the scheme");
    }
    None
}

impl FromStr for Uri {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uri::parse(s)
    }
}

impl TryFrom<String> for Uri {
    type Error = ValidationError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Uri::parse(s)
    }
}

impl From<Uri> for String {
    fn from(uri: Uri) -> String {
        uri.0
    }
}

impl AsRef<str> for Uri {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for Uri {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Uri {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
