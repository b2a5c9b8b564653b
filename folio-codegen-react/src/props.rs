//! Conversion of annotated properties into JSX attributes and expressions.

use folio_codegen::{AnalyzedInstance, i18n::PropNode};
use folio_core::is_js_identifier;
use folio_layout::PropValue;

use crate::ast::{AttrValue, JsExpr, JsObject, JsxElement};

/// Name of the translation function bound by `useTranslations`.
pub const TRANSLATE_FN: &str = "t";

/// JSX element for one component instance.
///
/// Property names that cannot be written as attributes are passed through a
/// spread object (`{...{ "data-x": 1 }}`), keeping authoring order.
pub fn instance_element(instance: &AnalyzedInstance) -> JsxElement {
    instance
        .props
        .iter()
        .fold(JsxElement::new(instance.binding.as_str()), |element, (name, node)| {
            if is_js_identifier(name) {
                element.attr(name.as_str(), attr_value(node))
            } else {
                element.spread(JsExpr::Object(
                    JsObject::new().property(name.as_str(), prop_expr(node)),
                ))
            }
        })
}

fn attr_value(node: &PropNode) -> AttrValue {
    match node {
        PropNode::Literal(PropValue::String(s)) => AttrValue::String(s.clone()),
        other => AttrValue::Expr(prop_expr(other)),
    }
}

/// Expression for an annotated property value.
pub fn prop_expr(node: &PropNode) -> JsExpr {
    match node {
        PropNode::Literal(value) => literal_expr(value),
        PropNode::Translated { key, .. } => translate_call(key),
        PropNode::Array(items) => JsExpr::Array(items.iter().map(prop_expr).collect()),
        PropNode::Object(props) => JsExpr::Object(
            props
                .iter()
                .map(|(name, value)| (name.clone(), prop_expr(value)))
                .collect(),
        ),
    }
}

/// `t("<key>")`
pub fn translate_call(key: &str) -> JsExpr {
    JsExpr::call(TRANSLATE_FN, vec![JsExpr::string(key)])
}

fn literal_expr(value: &PropValue) -> JsExpr {
    match value {
        PropValue::Null => JsExpr::raw("null"),
        PropValue::Bool(b) => JsExpr::raw(b.to_string()),
        PropValue::Number(n) => JsExpr::raw(n.to_string()),
        PropValue::String(s) => JsExpr::string(s.as_str()),
        PropValue::Array(items) => JsExpr::Array(items.iter().map(literal_expr).collect()),
        PropValue::Object(props) => JsExpr::Object(
            props
                .iter()
                .map(|(name, value)| (name.clone(), literal_expr(value)))
                .collect(),
        ),
    }
}
