//! Layout parsing from files and strings.

use std::{path::Path, str::FromStr};

use serde::Deserialize;

use super::{ComponentInstance, Layout, validate::validate_layout};
use crate::{Error, Result, error::SourceContext};

/// On-disk shape of an exported layout object.
#[derive(Deserialize)]
struct RawLayout {
    name: Option<String>,
    components: Option<Vec<ComponentInstance>>,
}

impl FromStr for Layout {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_layout(s, "layout.json")
    }
}

impl Layout {
    /// Parse a layout file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_layout(&content, &path.display().to_string())
    }

    /// Parse a layout from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_layout(content, filename)
    }
}

/// Parse a layout from content with the given filename for error reporting.
///
/// Accepts either an object with a `components` list (and optional `name`)
/// or a bare array of component instances.
pub fn parse_layout(content: &str, filename: &str) -> Result<Layout> {
    let source_ctx = SourceContext::new(content, filename);

    let layout = if content.trim_start().starts_with('[') {
        let components: Vec<ComponentInstance> =
            serde_json::from_str(content).map_err(|e| source_ctx.json_error(e))?;
        Layout::new(components)
    } else {
        let raw: RawLayout =
            serde_json::from_str(content).map_err(|e| source_ctx.json_error(e))?;
        let components = raw
            .components
            .ok_or_else(|| source_ctx.missing_layout_error())?;
        Layout {
            name: raw.name,
            components,
        }
    };

    validate_layout(&layout, &source_ctx)?;
    Ok(layout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PropValue;

    #[test]
    fn test_parse_object_layout() {
        let layout: Layout = r#"{
            "name": "pricing",
            "components": [
                { "id": "h1", "type": "hero-simple", "props": { "title": "欢迎", "count": 3 } }
            ]
        }"#
        .parse()
        .unwrap();

        assert_eq!(layout.name.as_deref(), Some("pricing"));
        assert_eq!(layout.len(), 1);
        let hero = &layout.components[0];
        assert_eq!(hero.kind, "hero-simple");
        assert_eq!(hero.props["title"], PropValue::String("欢迎".into()));
        assert_eq!(hero.props["count"], PropValue::Number(3.into()));
    }

    #[test]
    fn test_parse_bare_array() {
        let layout: Layout = r#"[{ "id": "f", "type": "footer-simple" }]"#.parse().unwrap();

        assert!(layout.name.is_none());
        assert!(layout.components[0].props.is_empty());
    }

    #[test]
    fn test_parse_empty_components() {
        let layout: Layout = r#"{ "components": [] }"#.parse().unwrap();
        assert!(layout.is_empty());
    }

    #[test]
    fn test_missing_components_is_missing_layout() {
        let err = r#"{ "name": "home" }"#.parse::<Layout>().unwrap_err();
        assert!(matches!(*err, Error::MissingLayout { .. }));
    }

    #[test]
    fn test_missing_type_field() {
        let err = r#"{ "components": [{ "id": "h1" }] }"#
            .parse::<Layout>()
            .unwrap_err();
        match *err {
            Error::Parse { source, span, .. } => {
                assert!(source.to_string().contains("missing field `type`"));
                assert!(span.is_some());
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_json() {
        let err = "{ components: [] }".parse::<Layout>().unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }
}
