//! JavaScript expression builders: literals, calls, arrays and objects.
//!
//! Expressions render on a single line.

use folio_core::is_js_identifier;

/// A JavaScript expression.
#[derive(Debug, Clone, PartialEq)]
pub enum JsExpr {
    /// A string literal (JSON-quoted).
    String(String),
    /// A raw expression (not quoted), e.g. a number or identifier.
    Raw(String),
    /// A call with literal arguments, e.g. `t("component0.title")`.
    Call { callee: String, args: Vec<JsExpr> },
    /// An array literal.
    Array(JsArray),
    /// An object literal.
    Object(JsObject),
}

impl JsExpr {
    pub fn string(value: impl Into<String>) -> Self {
        JsExpr::String(value.into())
    }

    pub fn raw(value: impl Into<String>) -> Self {
        JsExpr::Raw(value.into())
    }

    pub fn call(callee: impl Into<String>, args: Vec<JsExpr>) -> Self {
        JsExpr::Call {
            callee: callee.into(),
            args,
        }
    }

    /// Build the expression as a string.
    pub fn build(&self) -> String {
        match self {
            JsExpr::String(s) => quote(s),
            JsExpr::Raw(s) => s.clone(),
            JsExpr::Call { callee, args } => {
                let args = args.iter().map(JsExpr::build).collect::<Vec<_>>();
                format!("{}({})", callee, args.join(", "))
            }
            JsExpr::Array(array) => array.build(),
            JsExpr::Object(object) => object.build(),
        }
    }
}

/// Builder for array literals.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JsArray {
    elements: Vec<JsExpr>,
}

impl JsArray {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an element.
    pub fn push(mut self, element: JsExpr) -> Self {
        self.elements.push(element);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Build the array literal as a string.
    pub fn build(&self) -> String {
        let elements = self.elements.iter().map(JsExpr::build).collect::<Vec<_>>();
        format!("[{}]", elements.join(", "))
    }
}

impl FromIterator<JsExpr> for JsArray {
    fn from_iter<I: IntoIterator<Item = JsExpr>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

/// Builder for object literals.
///
/// Keys that are not plain identifiers are quoted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JsObject {
    properties: Vec<(String, JsExpr)>,
}

impl JsObject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a property.
    pub fn property(mut self, key: impl Into<String>, value: JsExpr) -> Self {
        self.properties.push((key.into(), value));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Build the object literal as a string.
    pub fn build(&self) -> String {
        if self.properties.is_empty() {
            return "{}".to_string();
        }
        let properties = self
            .properties
            .iter()
            .map(|(key, value)| format!("{}: {}", object_key(key), value.build()))
            .collect::<Vec<_>>();
        format!("{{ {} }}", properties.join(", "))
    }
}

impl FromIterator<(String, JsExpr)> for JsObject {
    fn from_iter<I: IntoIterator<Item = (String, JsExpr)>>(iter: I) -> Self {
        Self {
            properties: iter.into_iter().collect(),
        }
    }
}

/// JSON-quote a string; JSON strings are valid JavaScript string literals.
pub fn quote(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| format!("\"{}\"", s))
}

fn object_key(key: &str) -> String {
    if is_js_identifier(key) {
        key.to_string()
    } else {
        quote(key)
    }
}
