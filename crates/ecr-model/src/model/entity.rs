//! The entity identity primitive.

use serde::{Deserialize, Serialize};

use crate::model::Uri;

/// A URI-identified thing.
///
/// An entity carries nothing but its identity. Everything known about it
/// lives in [`Component`](crate::Component)s and
/// [`Relationship`](crate::Relationship)s that reference the id. Identity is
/// immutable once minted; deletion is a consumer policy, not part of the
/// model.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entity {
    /// The entity's identifier.
    pub id: Uri,
}

impl Entity {
    /// Creates an entity with the given id.
    pub fn new(id: Uri) -> Self {
        Entity { id }
    }
}

impl From<Uri> for Entity {
    fn from(id: Uri) -> Self {
        Entity { id }
    }
}
