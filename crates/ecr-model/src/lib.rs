//! Entity / Component / Relationship: a minimal data-modeling vocabulary
//! for representing arbitrary things as graphs of typed, URI-addressed data.
//!
//! # Overview
//!
//! Three leaf concepts and one composite:
//!
//! - [`Entity`]: the identity primitive — a URI naming a thing, nothing more
//! - [`Component`]: a typed property bundle describing one concern of an
//!   entity, with an open (or statically typed) payload
//! - [`Relationship`]: a directed, typed edge between two entity URIs
//! - [`SerializedEntity`]: an envelope bundling one entity's id with its
//!   components and outbound relationships (subject implicit)
//!
//! The crate is declarative: it defines shapes, their invariants, the JSON
//! wire contract, and the projection transform between full and embedded
//! relationships. There is no storage, no query capability, and no schema
//! registry — interpreting a component `type` or predicate URI is the
//! consumer's business.
//!
//! # Quick Start
//!
//! ```rust
//! use ecr_model::{Predicate, SerializedEntity, SerializedEntityBuilder, Uri};
//!
//! let alice = Uri::parse("did:example:alice")?;
//! let bob = Uri::parse("did:example:bob")?;
//!
//! // A producer assembles an envelope.
//! let envelope = SerializedEntityBuilder::new(alice.clone())
//!     .component_with(Uri::parse("https://schema.example.org/Profile")?, |c| c
//!         .label("Profile")
//!         .property("name", "Alice")
//!     )
//!     .relationship(Predicate::parse("knows")?, bob)
//!     .build();
//!
//! // The wire form is plain JSON.
//! let json = serde_json::to_string(&envelope).unwrap();
//! let decoded: SerializedEntity = serde_json::from_str(&json).unwrap();
//!
//! // A consumer takes it apart; the envelope id becomes the subject of
//! // every embedded relationship.
//! let (entity, components, relationships) = decoded.reproject();
//! assert_eq!(entity.id, alice);
//! assert_eq!(components.len(), 1);
//! assert_eq!(relationships[0].subject, alice);
//! # Ok::<(), ecr_model::ValidationError>(())
//! ```
//!
//! # Modules
//!
//! - [`model`]: core types (Uri, Entity, Component, Relationship,
//!   SerializedEntity) and builders
//! - [`validate`]: structural validation of untrusted JSON values
//! - [`error`]: error types and the Shape/Format/Type/Consistency taxonomy
//!
//! # Validation layers
//!
//! Typed construction ([`Uri::parse`], [`Predicate::parse`], serde
//! deserialization) already enforces the invariants, so holding a model
//! value means it is valid. The [`validate`] functions exist for the other
//! direction: checking a raw [`serde_json::Value`] from an untrusted
//! producer and reporting *which* rule broke, as a typed error with a
//! stable [`ErrorKind`]. Validators report the first violation found;
//! validation is all-or-nothing per value.
//!
//! # Ordering
//!
//! `components` and `relationships` are ordered sequences, not sets:
//! producer order is preserved through serialization, projection, and
//! reprojection, and duplicates are never merged.

pub mod error;
pub mod model;
pub mod validate;

// Re-export commonly used types at crate root
pub use error::{ErrorKind, ProjectionError, ValidationError};
pub use model::{
    Component, ComponentBuilder, Entity, OutboundRelationship, Predicate, Properties,
    Relationship, SerializedEntity, SerializedEntityBuilder, Uri,
};
pub use validate::{
    validate_component, validate_entity, validate_relationship, validate_serialized_entity,
};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
