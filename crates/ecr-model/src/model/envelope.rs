//! The serialized-entity envelope and its projection transform.
//!
//! A [`SerializedEntity`] packages one entity's id together with its
//! components and outbound relationships. Embedded relationships are stored
//! in a two-field form with the subject omitted — the subject is always the
//! envelope's own id, so carrying it per edge would be redundant. The
//! [`project`](SerializedEntity::project) /
//! [`reproject`](SerializedEntity::reproject) pair makes that narrowing an
//! explicit, testable transform instead of an implicit convention.

use serde::{Deserialize, Serialize};

use crate::error::ProjectionError;
use crate::model::{Component, Entity, Predicate, Relationship, Uri};

/// An outbound relationship as embedded in a [`SerializedEntity`]: the
/// full three-field [`Relationship`] minus its subject.
///
/// Naming note: some older prose documentation calls the second field
/// `target`; the schema — and therefore the wire name — is `object`. This
/// crate follows the schema.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OutboundRelationship {
    /// Edge type/meaning.
    pub predicate: Predicate,
    /// Target entity.
    pub object: Uri,
}

impl OutboundRelationship {
    /// Creates an outbound relationship.
    pub fn new(predicate: Predicate, object: Uri) -> Self {
        OutboundRelationship { predicate, object }
    }

    /// Reattaches a subject, yielding the full three-field form.
    pub fn with_subject(self, subject: Uri) -> Relationship {
        Relationship {
            subject,
            predicate: self.predicate,
            object: self.object,
        }
    }
}

impl From<Relationship> for OutboundRelationship {
    /// Drops the subject. Prefer [`SerializedEntity::project`], which
    /// checks that the dropped subject matches the envelope id.
    fn from(rel: Relationship) -> Self {
        OutboundRelationship {
            predicate: rel.predicate,
            object: rel.object,
        }
    }
}

/// One entity's id bundled with its components and outbound relationships.
///
/// This is a transient packaging format, not a persisted identity: it is
/// built by [`project`](SerializedEntity::project)ing the three primitives
/// together and taken apart again by
/// [`reproject`](SerializedEntity::reproject). Both sequences are
/// order-preserving and may contain duplicates; neither is ever reordered
/// or deduplicated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SerializedEntity {
    /// The entity's identifier.
    pub id: Uri,
    /// The entity's components, in producer order. Required on the wire,
    /// may be empty.
    pub components: Vec<Component>,
    /// Outbound relationships, in producer order, with the subject (this
    /// envelope's `id`) omitted. Required on the wire, may be empty.
    pub relationships: Vec<OutboundRelationship>,
}

impl SerializedEntity {
    /// Creates an empty envelope for the given id.
    pub fn new(id: Uri) -> Self {
        SerializedEntity {
            id,
            components: Vec::new(),
            relationships: Vec::new(),
        }
    }

    /// Packages an entity id, its components, and its full relationships
    /// into an envelope.
    ///
    /// Every relationship's subject must equal `id`: the embedded form
    /// structurally discards the subject, so a mismatched edge cannot be
    /// represented without silently rewriting it. On the first mismatch the
    /// whole projection fails with [`ProjectionError::SubjectMismatch`] and
    /// produces no output.
    pub fn project(
        id: Uri,
        components: Vec<Component>,
        relationships: Vec<Relationship>,
    ) -> Result<SerializedEntity, ProjectionError> {
        for rel in &relationships {
            if rel.subject != id {
                return Err(ProjectionError::SubjectMismatch {
                    id,
                    subject: rel.subject.clone(),
                });
            }
        }
        let relationships = relationships
            .into_iter()
            .map(OutboundRelationship::from)
            .collect();
        Ok(SerializedEntity {
            id,
            components,
            relationships,
        })
    }

    /// Takes the envelope apart into the three primitives, substituting the
    /// envelope id as the subject of every embedded relationship.
    ///
    /// Total and lossless: for any envelope built by
    /// [`project`](SerializedEntity::project), reprojection returns exactly
    /// the inputs, in order.
    pub fn reproject(self) -> (Entity, Vec<Component>, Vec<Relationship>) {
        let relationships = self
            .relationships
            .into_iter()
            .map(|rel| rel.with_subject(self.id.clone()))
            .collect();
        (Entity::new(self.id), self.components, relationships)
    }

    /// Returns the entity identified by this envelope.
    pub fn entity(&self) -> Entity {
        Entity::new(self.id.clone())
    }
}
