//! Error types for validation and envelope projection.

use thiserror::Error;

use crate::model::Uri;

/// Coarse error categories shared by every failure in this crate.
///
/// Consumers that do not care about the precise variant can branch on the
/// kind alone: shape problems mean a required field or structure is absent,
/// format problems mean a value is the right primitive but fails a stricter
/// syntax rule, type problems mean the wrong JSON primitive, and consistency
/// problems mean a cross-field invariant was violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A required field is absent, or the top-level structure is wrong
    /// (e.g. an array where an object was expected).
    Shape,
    /// A field has the right primitive type but fails a stricter syntax
    /// constraint (URI syntax, non-empty predicate).
    Format,
    /// A field holds the wrong JSON primitive (e.g. a number where a
    /// string was expected).
    Type,
    /// A cross-field invariant was violated during projection.
    Consistency,
}

impl ErrorKind {
    /// Returns the stable string code for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Shape => "shape",
            ErrorKind::Format => "format",
            ErrorKind::Type => "type",
            ErrorKind::Consistency => "consistency",
        }
    }
}

/// Error during structural validation of a JSON value or URI/predicate
/// construction.
///
/// Validators report the first violation found; there is no partial
/// success.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    // === shape ===
    #[error("missing required field `{field}` in {context}")]
    MissingField {
        field: &'static str,
        context: &'static str,
    },

    #[error("expected {expected} for {context}, found {found}")]
    UnexpectedShape {
        context: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    // === type ===
    #[error("field `{field}` must be a {expected}, found {found}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    // === format ===
    #[error("`{value}` is not an absolute URI: {reason}")]
    InvalidUri { value: String, reason: &'static str },

    #[error("predicate must be a non-empty string")]
    EmptyPredicate,
}

impl ValidationError {
    /// Returns the error kind for this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ValidationError::MissingField { .. } | ValidationError::UnexpectedShape { .. } => {
                ErrorKind::Shape
            }
            ValidationError::WrongType { .. } => ErrorKind::Type,
            ValidationError::InvalidUri { .. } | ValidationError::EmptyPredicate => {
                ErrorKind::Format
            }
        }
    }
}

/// Error during projection of full relationships into a serialized entity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProjectionError {
    /// A relationship's subject differs from the envelope id. The embedded
    /// wire form structurally discards the subject, so projecting such a
    /// relationship would silently rewrite it; the whole projection fails
    /// instead, with no output.
    #[error("relationship subject `{subject}` does not match entity id `{id}`")]
    SubjectMismatch { id: Uri, subject: Uri },
}

impl ProjectionError {
    /// Returns the error kind for this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ProjectionError::SubjectMismatch { .. } => ErrorKind::Consistency,
        }
    }
}
