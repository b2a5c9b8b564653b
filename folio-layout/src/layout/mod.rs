//! Layout types and parsing for page builder exports.

mod file;
mod parse;
mod validate;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub use file::LayoutFile;

/// Ordered property bag of a component instance.
pub type Props = IndexMap<String, PropValue>;

/// A page layout: the ordered component instances placed in the builder.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    /// Page name, used for output paths and the generated component name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Component instances in render order.
    pub components: Vec<ComponentInstance>,
}

/// One placed, configured occurrence of a page section.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ComponentInstance {
    /// Identifier, unique within the layout.
    pub id: String,

    /// Component kind (e.g., `hero-simple`).
    #[serde(rename = "type")]
    pub kind: String,

    /// Properties passed to the component, in authoring order.
    #[serde(default)]
    pub props: Props,
}

/// A property value as authored in the builder.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum PropValue {
    Null,
    Bool(bool),
    Number(serde_json::Number),
    String(String),
    Array(Vec<PropValue>),
    Object(Props),
}

impl Layout {
    /// Create a layout from component instances.
    pub fn new(components: Vec<ComponentInstance>) -> Self {
        Self {
            name: None,
            components,
        }
    }

    /// Set the page name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Number of component instances.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Check if the layout has no component instances.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Find a component instance by id.
    pub fn get(&self, id: &str) -> Option<&ComponentInstance> {
        self.components.iter().find(|c| c.id == id)
    }
}

impl ComponentInstance {
    pub fn new(id: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            props: Props::new(),
        }
    }

    /// Add a property.
    pub fn prop(mut self, name: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.props.insert(name.into(), value.into());
        self
    }
}

impl PropValue {
    /// Short name of the value type, for messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            PropValue::Null => "null",
            PropValue::Bool(_) => "boolean",
            PropValue::Number(_) => "number",
            PropValue::String(_) => "string",
            PropValue::Array(_) => "array",
            PropValue::Object(_) => "object",
        }
    }

    /// Get the string value, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropValue::String(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for PropValue {
    fn from(s: &str) -> Self {
        PropValue::String(s.to_string())
    }
}

impl From<String> for PropValue {
    fn from(s: String) -> Self {
        PropValue::String(s)
    }
}

impl From<bool> for PropValue {
    fn from(b: bool) -> Self {
        PropValue::Bool(b)
    }
}

impl From<i64> for PropValue {
    fn from(n: i64) -> Self {
        PropValue::Number(n.into())
    }
}

impl From<Vec<PropValue>> for PropValue {
    fn from(items: Vec<PropValue>) -> Self {
        PropValue::Array(items)
    }
}

impl From<Props> for PropValue {
    fn from(props: Props) -> Self {
        PropValue::Object(props)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prop_value_deserialize_keeps_order() {
        let value: PropValue =
            serde_json::from_str(r#"{"z": 1, "a": true, "m": null, "list": ["x", 2.5]}"#)
                .unwrap();

        let PropValue::Object(props) = value else {
            panic!("expected object");
        };
        let keys: Vec<&str> = props.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["z", "a", "m", "list"]);
        assert_eq!(props["a"], PropValue::Bool(true));
        assert_eq!(props["m"], PropValue::Null);
        assert_eq!(props["list"].type_name(), "array");
    }

    #[test]
    fn test_component_builder() {
        let hero = ComponentInstance::new("h1", "hero-simple")
            .prop("title", "欢迎")
            .prop("count", 3);

        assert_eq!(hero.props["title"].as_str(), Some("欢迎"));
        assert_eq!(hero.props["count"].type_name(), "number");
    }

    #[test]
    fn test_layout_lookup() {
        let layout = Layout::new(vec![
            ComponentInstance::new("a", "hero-simple"),
            ComponentInstance::new("b", "cta-banner"),
        ])
        .with_name("home");

        assert_eq!(layout.len(), 2);
        assert_eq!(layout.get("b").map(|c| c.kind.as_str()), Some("cta-banner"));
        assert!(layout.get("c").is_none());
        assert_eq!(layout.name.as_deref(), Some("home"));
    }
}
