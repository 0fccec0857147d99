//! Data model types.
//!
//! This module contains the core vocabulary:
//! - Identifiers ([`Uri`], [`Predicate`])
//! - The three primitives ([`Entity`], [`Component`], [`Relationship`])
//! - The envelope ([`SerializedEntity`]) and its projection transform
//! - Builders (ergonomic construction)

pub mod builder;
pub mod component;
pub mod entity;
pub mod envelope;
pub mod relationship;
pub mod uri;

pub use builder::{ComponentBuilder, SerializedEntityBuilder};
pub use component::{Component, Properties};
pub use entity::Entity;
pub use envelope::{OutboundRelationship, SerializedEntity};
pub use relationship::{Predicate, Relationship};
pub use uri::Uri;
