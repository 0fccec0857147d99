//! Components: typed property bundles.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::model::Uri;

/// The open payload form: a JSON object with arbitrary values.
///
/// The shape of a payload is defined externally by whatever schema the
/// component's `type` URI refers to; this model stores it opaquely and
/// re-emits it unchanged.
pub type Properties = serde_json::Map<String, serde_json::Value>;

/// A typed bundle of properties describing one concern of an entity.
///
/// A component carries no back-reference to its entity; attachment is
/// positional (it lives inside that entity's component sequence). Multiple
/// components of the same `type` may coexist — the model neither forbids
/// nor deduplicates them.
///
/// The payload is generic: `Component` (the default) holds the open
/// [`Properties`] map, while `Component<T>` holds a statically known payload
/// type. [`Component::typed`] and [`Component::into_open`] convert between
/// the two through serde.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component<P = Properties> {
    /// URI identifying the component's schema and meaning. This is the sole
    /// discriminator for interpreting `properties`.
    #[serde(rename = "type")]
    pub ty: Uri,

    /// Human-readable description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Human-readable display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// The payload. `None` denotes a marker component carrying no data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<P>,
}

impl<P> Component<P> {
    /// Creates a component with a payload.
    pub fn new(ty: Uri, properties: P) -> Self {
        Component {
            ty,
            description: None,
            label: None,
            properties: Some(properties),
        }
    }

    /// Sets the display label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns true if this component carries no payload.
    pub fn is_marker(&self) -> bool {
        self.properties.is_none()
    }
}

impl Component {
    /// Creates a marker component: a type with no payload.
    pub fn marker(ty: Uri) -> Self {
        Component {
            ty,
            description: None,
            label: None,
            properties: None,
        }
    }

    /// Reinterprets the open payload as a statically known type.
    ///
    /// Fails if the payload does not match `T`'s shape. A marker component
    /// converts to a marker component.
    pub fn typed<T: DeserializeOwned>(self) -> Result<Component<T>, serde_json::Error> {
        let properties = match self.properties {
            Some(map) => Some(serde_json::from_value(serde_json::Value::Object(map))?),
            None => None,
        };
        Ok(Component {
            ty: self.ty,
            description: self.description,
            label: self.label,
            properties,
        })
    }
}

impl<P: Serialize> Component<P> {
    /// Converts a typed payload back into the open map form.
    ///
    /// Fails if `T` does not serialize to a JSON object.
    pub fn into_open(self) -> Result<Component, serde_json::Error> {
        let properties = match self.properties {
            Some(payload) => {
                let value = serde_json::to_value(payload)?;
                Some(serde_json::from_value(value)?)
            }
            None => None,
        };
        Ok(Component {
            ty: self.ty,
            description: self.description,
            label: self.label,
            properties,
        })
    }
}
