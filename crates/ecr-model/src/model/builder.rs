//! Builder API for ergonomic envelope construction.
//!
//! # Example
//!
//! ```rust
//! use ecr_model::{Predicate, SerializedEntityBuilder, Uri};
//!
//! let alice = Uri::parse("did:example:alice")?;
//! let bob = Uri::parse("did:example:bob")?;
//!
//! let envelope = SerializedEntityBuilder::new(alice)
//!     .component_with(Uri::parse("https://schema.example.org/Profile")?, |c| c
//!         .label("Profile")
//!         .property("name", "Alice")
//!     )
//!     .relationship(Predicate::parse("knows")?, bob)
//!     .build();
//!
//! assert_eq!(envelope.components.len(), 1);
//! assert_eq!(envelope.relationships.len(), 1);
//! # Ok::<(), ecr_model::ValidationError>(())
//! ```

use crate::model::{
    Component, OutboundRelationship, Predicate, Properties, SerializedEntity, Uri,
};

/// Builder for a [`SerializedEntity`].
///
/// Relationships added here are outbound by construction — the subject is
/// the builder's id — so [`build`](SerializedEntityBuilder::build) is
/// infallible: the consistency precondition of
/// [`SerializedEntity::project`] holds by construction.
#[derive(Debug, Clone)]
pub struct SerializedEntityBuilder {
    id: Uri,
    components: Vec<Component>,
    relationships: Vec<OutboundRelationship>,
}

impl SerializedEntityBuilder {
    /// Creates a builder for the given entity id.
    pub fn new(id: Uri) -> Self {
        SerializedEntityBuilder {
            id,
            components: Vec::new(),
            relationships: Vec::new(),
        }
    }

    /// Appends a component.
    pub fn component(mut self, component: Component) -> Self {
        self.components.push(component);
        self
    }

    /// Appends a component built through a [`ComponentBuilder`] closure.
    pub fn component_with<F>(mut self, ty: Uri, f: F) -> Self
    where
        F: FnOnce(ComponentBuilder) -> ComponentBuilder,
    {
        self.components.push(f(ComponentBuilder::new(ty)).build());
        self
    }

    /// Appends several components at once.
    pub fn components(mut self, components: impl IntoIterator<Item = Component>) -> Self {
        self.components.extend(components);
        self
    }

    /// Appends an outbound relationship to `object`.
    pub fn relationship(mut self, predicate: Predicate, object: Uri) -> Self {
        self.relationships
            .push(OutboundRelationship::new(predicate, object));
        self
    }

    /// Builds the envelope, preserving insertion order.
    pub fn build(self) -> SerializedEntity {
        SerializedEntity {
            id: self.id,
            components: self.components,
            relationships: self.relationships,
        }
    }
}

/// Builder for a [`Component`] with the open payload form.
#[derive(Debug, Clone)]
pub struct ComponentBuilder {
    ty: Uri,
    description: Option<String>,
    label: Option<String>,
    properties: Option<Properties>,
}

impl ComponentBuilder {
    /// Creates a builder for a component of the given type.
    pub fn new(ty: Uri) -> Self {
        ComponentBuilder {
            ty,
            description: None,
            label: None,
            properties: None,
        }
    }

    /// Sets the display label.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Inserts one payload property. Later inserts with the same key win.
    pub fn property(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.properties
            .get_or_insert_with(Properties::new)
            .insert(key.into(), value.into());
        self
    }

    /// Replaces the whole payload.
    pub fn properties(mut self, properties: Properties) -> Self {
        self.properties = Some(properties);
        self
    }

    /// Builds the component. With no payload set this yields a marker
    /// component.
    pub fn build(self) -> Component {
        Component {
            ty: self.ty,
            description: self.description,
            label: self.label,
            properties: self.properties,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn alice() -> Uri {
        Uri::parse("did:example:alice").unwrap()
    }

    #[test]
    fn test_builder_preserves_order() {
        let t1 = Uri::parse("https://schema.example.org/A").unwrap();
        let t2 = Uri::parse("https://schema.example.org/B").unwrap();

        let envelope = SerializedEntityBuilder::new(alice())
            .component(Component::marker(t1.clone()))
            .component(Component::marker(t2.clone()))
            .build();

        assert_eq!(envelope.components[0].ty, t1);
        assert_eq!(envelope.components[1].ty, t2);
    }

    #[test]
    fn test_component_with_closure() {
        let envelope = SerializedEntityBuilder::new(alice())
            .component_with(Uri::parse("https://schema.example.org/Profile").unwrap(), |c| {
                c.label("Profile")
                    .description("Basic profile data")
                    .property("name", "Alice")
                    .property("age", 30)
            })
            .build();

        let component = &envelope.components[0];
        assert_eq!(component.label.as_deref(), Some("Profile"));
        let props = component.properties.as_ref().unwrap();
        assert_eq!(props.get("name"), Some(&json!("Alice")));
        assert_eq!(props.get("age"), Some(&json!(30)));
    }

    #[test]
    fn test_built_envelope_reprojects_consistently() {
        let bob = Uri::parse("did:example:bob").unwrap();
        let envelope = SerializedEntityBuilder::new(alice())
            .relationship(Predicate::parse("knows").unwrap(), bob.clone())
            .build();

        let (entity, _, relationships) = envelope.reproject();
        assert_eq!(relationships[0].subject, entity.id);
        assert_eq!(relationships[0].object, bob);
    }

    #[test]
    fn test_marker_from_builder() {
        let component =
            ComponentBuilder::new(Uri::parse("https://schema.example.org/Flag").unwrap()).build();
        assert!(component.is_marker());
    }
}
