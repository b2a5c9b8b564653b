//! Text extraction: annotates a property bag with translation keys.

use folio_layout::{PropValue, Props};
use indexmap::IndexMap;

use super::{ComponentScope, KeyPath, Script, escape_segment};
use crate::Diagnostic;

/// A property value after extraction.
///
/// Leaves are either literals or key references, so the emitter never has to
/// classify strings again.
#[derive(Debug, Clone, PartialEq)]
pub enum PropNode {
    /// Emitted as written: null, booleans, numbers and non-translatable strings.
    Literal(PropValue),
    /// Translatable string replaced by a key lookup.
    Translated { key: String, source: String },
    /// Array, elements in order.
    Array(Vec<PropNode>),
    /// Object, properties in authoring order.
    Object(IndexMap<String, PropNode>),
}

impl PropNode {
    /// Key of this node, if it is a translated string.
    pub fn key(&self) -> Option<&str> {
        match self {
            PropNode::Translated { key, .. } => Some(key),
            _ => None,
        }
    }
}

/// A string picked up during extraction, in visit order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedString {
    pub key: String,
    pub source: String,
}

/// Output of extracting one property bag.
#[derive(Debug, Default)]
pub struct Extraction {
    /// Annotated properties.
    pub props: IndexMap<String, PropNode>,
    /// Extracted strings in depth-first, authoring order.
    pub strings: Vec<ExtractedString>,
    /// Soft problems found while walking the bag.
    pub diagnostics: Vec<Diagnostic>,
}

/// Walk the property bag of one component instance.
///
/// `id` is the instance id, used as diagnostic location.
pub fn extract_props(
    props: &Props,
    scope: ComponentScope,
    script: Script,
    id: &str,
) -> Extraction {
    let mut walker = Walker {
        scope,
        script,
        id,
        strings: Vec::new(),
        diagnostics: Vec::new(),
    };

    let root = KeyPath::root();
    let props = walker.object(props, &root);

    Extraction {
        props,
        strings: walker.strings,
        diagnostics: walker.diagnostics,
    }
}

struct Walker<'a> {
    scope: ComponentScope,
    script: Script,
    id: &'a str,
    strings: Vec<ExtractedString>,
    diagnostics: Vec<Diagnostic>,
}

impl Walker<'_> {
    fn object(&mut self, props: &Props, path: &KeyPath) -> IndexMap<String, PropNode> {
        props
            .iter()
            .map(|(name, value)| {
                if name.contains('.') {
                    self.diagnostics.push(
                        Diagnostic::warning(
                            "extract",
                            format!(
                                "property name '{}' contains '.', its key segment is written as '{}'",
                                name,
                                escape_segment(name)
                            ),
                        )
                        .at(self.id),
                    );
                }
                let node = self.value(value, &path.field(name));
                (name.clone(), node)
            })
            .collect()
    }

    fn value(&mut self, value: &PropValue, path: &KeyPath) -> PropNode {
        match value {
            PropValue::String(s) if self.script.is_translatable(s) => {
                let key = self.scope.key(path);
                self.strings.push(ExtractedString {
                    key: key.clone(),
                    source: s.clone(),
                });
                PropNode::Translated {
                    key,
                    source: s.clone(),
                }
            }
            PropValue::Array(items) => PropNode::Array(
                items
                    .iter()
                    .enumerate()
                    .map(|(i, item)| self.value(item, &path.index(i)))
                    .collect(),
            ),
            PropValue::Object(props) => PropNode::Object(self.object(props, path)),
            other => PropNode::Literal(other.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::KeyAssigner;

    fn props(json: &str) -> Props {
        serde_json::from_str(json).unwrap()
    }

    fn extract(json: &str) -> Extraction {
        let mut assigner = KeyAssigner::new();
        assigner.next_component();
        let scope = assigner.next_component();
        extract_props(&props(json), scope, Script::Han, "c1")
    }

    #[test]
    fn test_translatable_string_gets_key() {
        let result = extract(r#"{"title": "欢迎", "variant": "primary", "count": 3}"#);

        assert_eq!(
            result.strings,
            vec![ExtractedString {
                key: "component1.title".to_string(),
                source: "欢迎".to_string(),
            }]
        );
        assert_eq!(result.props["title"].key(), Some("component1.title"));
        assert_eq!(
            result.props["variant"],
            PropNode::Literal(PropValue::String("primary".to_string()))
        );
        assert!(matches!(result.props["count"], PropNode::Literal(PropValue::Number(_))));
        assert!(result.diagnostics.is_empty());
    }

    #[test]
    fn test_arrays_keyed_in_order() {
        let result = extract(r#"{"items": ["一", "two", "三"], "flags": [true, false]}"#);

        let keys: Vec<&str> = result.strings.iter().map(|s| s.key.as_str()).collect();
        assert_eq!(keys, vec!["component1.items.0", "component1.items.2"]);

        let PropNode::Array(items) = &result.props["items"] else {
            panic!("expected array");
        };
        assert_eq!(items.len(), 3);
        assert_eq!(items[1], PropNode::Literal(PropValue::String("two".to_string())));
    }

    #[test]
    fn test_nested_objects() {
        let result = extract(
            r#"{"plans": [{"name": "专业版", "price": 29, "features": ["无限项目", "API"]}]}"#,
        );

        let keys: Vec<&str> = result.strings.iter().map(|s| s.key.as_str()).collect();
        assert_eq!(keys, vec!["component1.plans.0.name", "component1.plans.0.features.0"]);
    }

    #[test]
    fn test_identical_literals_get_distinct_keys() {
        let result = extract(r#"{"a": "开始", "b": "开始"}"#);
        assert_eq!(result.strings.len(), 2);
        assert_ne!(result.strings[0].key, result.strings[1].key);
    }

    #[test]
    fn test_dotted_property_name_warns() {
        let result = extract(r#"{"meta.title": "标题"}"#);
        assert_eq!(result.strings[0].key, "component1.meta~1title");
        assert_eq!(result.diagnostics.len(), 1);
        assert_eq!(result.diagnostics[0].location.as_deref(), Some("c1"));
        assert!(result.diagnostics[0].message.contains("'meta~1title'"));
    }

    #[test]
    fn test_dotted_name_and_nested_path_get_distinct_keys() {
        let result = extract(r#"{"meta.title": "标题", "meta": {"title": "副标题"}}"#);

        let keys: Vec<&str> = result.strings.iter().map(|s| s.key.as_str()).collect();
        assert_eq!(keys, vec!["component1.meta~1title", "component1.meta.title"]);

        let result = extract(r#"{"meta": "标题", "meta.title": "副标题"}"#);
        let keys: Vec<&str> = result.strings.iter().map(|s| s.key.as_str()).collect();
        assert_eq!(keys, vec!["component1.meta", "component1.meta~1title"]);
    }

    #[test]
    fn test_blank_and_null_are_literals() {
        let result = extract(r#"{"subtitle": "  ", "image": null}"#);
        assert!(result.strings.is_empty());
        assert_eq!(result.props["image"], PropNode::Literal(PropValue::Null));
    }
}
