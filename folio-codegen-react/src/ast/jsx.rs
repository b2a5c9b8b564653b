//! JSX element builder.

use folio_codegen::builder::{CodeFragment, Renderable};

use super::expr::{JsExpr, quote};

/// Opening tags longer than this break their attributes onto separate lines.
pub const MAX_INLINE_WIDTH: usize = 80;

/// Value of a named JSX attribute.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    /// `name="value"`, falling back to `name={"value"}` when the text cannot
    /// appear verbatim inside a JSX string.
    String(String),
    /// `name={expression}`
    Expr(JsExpr),
}

/// A JSX attribute.
#[derive(Debug, Clone, PartialEq)]
pub enum JsxAttribute {
    Named { name: String, value: AttrValue },
    /// `{...expression}`
    Spread(JsExpr),
}

impl JsxAttribute {
    pub fn build(&self) -> String {
        match self {
            JsxAttribute::Named {
                name,
                value: AttrValue::String(s),
            } => {
                if is_jsx_text(s) {
                    format!("{}=\"{}\"", name, s)
                } else {
                    format!("{}={{{}}}", name, quote(s))
                }
            }
            JsxAttribute::Named {
                name,
                value: AttrValue::Expr(expr),
            } => format!("{}={{{}}}", name, expr.build()),
            JsxAttribute::Spread(expr) => format!("{{...{}}}", expr.build()),
        }
    }
}

/// A child of a JSX element.
#[derive(Debug, Clone, PartialEq)]
pub enum JsxChild {
    Element(JsxElement),
    /// `{/* text */}`
    Comment(String),
}

/// A JSX element with attributes and children.
#[derive(Debug, Clone, PartialEq)]
pub struct JsxElement {
    name: String,
    attributes: Vec<JsxAttribute>,
    children: Vec<JsxChild>,
}

impl JsxElement {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Add a named attribute.
    pub fn attr(mut self, name: impl Into<String>, value: AttrValue) -> Self {
        self.attributes.push(JsxAttribute::Named {
            name: name.into(),
            value,
        });
        self
    }

    /// Add a spread attribute.
    pub fn spread(mut self, expr: JsExpr) -> Self {
        self.attributes.push(JsxAttribute::Spread(expr));
        self
    }

    /// Add a child element.
    pub fn child(mut self, element: JsxElement) -> Self {
        self.children.push(JsxChild::Element(element));
        self
    }

    /// Add a comment child.
    pub fn comment(mut self, text: impl Into<String>) -> Self {
        self.children.push(JsxChild::Comment(text.into()));
        self
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Single-line form of the element, if it has no children.
    pub fn build_inline(&self) -> Option<String> {
        if self.has_children() {
            return None;
        }
        Some(format!("{} />", self.open_inline()))
    }

    fn open_inline(&self) -> String {
        let mut tag = format!("<{}", self.name);
        for attribute in &self.attributes {
            tag.push(' ');
            tag.push_str(&attribute.build());
        }
        tag
    }

    fn open_fragments(&self, close: &str) -> Vec<CodeFragment> {
        let inline = format!("{}{}", self.open_inline(), close);
        if self.attributes.is_empty() || inline.chars().count() <= MAX_INLINE_WIDTH {
            return vec![CodeFragment::Line(inline)];
        }
        vec![
            CodeFragment::Line(format!("<{}", self.name)),
            CodeFragment::Indent(
                self.attributes
                    .iter()
                    .map(|a| CodeFragment::Line(a.build()))
                    .collect(),
            ),
            CodeFragment::Line(close.trim_start().to_string()),
        ]
    }
}

impl Renderable for JsxElement {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        if !self.has_children() {
            return self.open_fragments(" />");
        }

        let mut fragments = self.open_fragments(">");
        let children = self
            .children
            .iter()
            .flat_map(|child| match child {
                JsxChild::Element(element) => element.to_fragments(),
                JsxChild::Comment(text) => {
                    let text = text.replace("*/", "* /");
                    vec![CodeFragment::Line(format!("{{/* {} */}}", text))]
                }
            })
            .collect();
        fragments.push(CodeFragment::Indent(children));
        fragments.push(CodeFragment::Line(format!("</{}>", self.name)));
        fragments
    }
}

/// Whether `s` can be written verbatim between the quotes of a JSX attribute.
fn is_jsx_text(s: &str) -> bool {
    !s.chars().any(|c| c == '"' || c == '&' || c == '\\' || c.is_control())
}

#[cfg(test)]
mod tests {
    use folio_codegen::builder::CodeBuilder;

    use super::*;

    fn t(key: &str) -> AttrValue {
        AttrValue::Expr(JsExpr::call("t", vec![JsExpr::string(key)]))
    }

    fn render(element: &JsxElement) -> String {
        let mut builder = CodeBuilder::tsx();
        builder.emit(element);
        builder.build()
    }

    #[test]
    fn test_attribute_forms() {
        let string = JsxAttribute::Named {
            name: "variant".to_string(),
            value: AttrValue::String("primary".to_string()),
        };
        assert_eq!(string.build(), "variant=\"primary\"");

        let quoted = JsxAttribute::Named {
            name: "label".to_string(),
            value: AttrValue::String("Tom & \"Jerry\"".to_string()),
        };
        assert_eq!(quoted.build(), r#"label={"Tom & \"Jerry\""}"#);

        let spread = JsxAttribute::Spread(JsExpr::raw("{ \"data-x\": 1 }"));
        assert_eq!(spread.build(), "{...{ \"data-x\": 1 }}");
    }

    #[test]
    fn test_self_closing_inline() {
        let element = JsxElement::new("HeroSimple")
            .attr("title", t("component0.title"))
            .attr("count", AttrValue::Expr(JsExpr::raw("3")));

        assert_eq!(
            render(&element),
            "<HeroSimple title={t(\"component0.title\")} count={3} />\n"
        );
        assert_eq!(
            element.build_inline().as_deref(),
            Some("<HeroSimple title={t(\"component0.title\")} count={3} />")
        );
    }

    #[test]
    fn test_long_element_breaks_attributes() {
        let element = JsxElement::new("PricingTiers")
            .attr("title", t("component1.title"))
            .attr("subtitle", t("component1.subtitle"));

        assert_eq!(
            render(&element),
            "<PricingTiers\n  title={t(\"component1.title\")}\n  subtitle={t(\"component1.subtitle\")}\n/>\n"
        );
    }

    #[test]
    fn test_children_and_comments() {
        let element = JsxElement::new("main")
            .comment("h1")
            .child(JsxElement::new("HeroSimple"))
            .comment("bad */ id");

        assert_eq!(
            render(&element),
            "<main>\n  {/* h1 */}\n  <HeroSimple />\n  {/* bad * / id */}\n</main>\n"
        );
    }

    #[test]
    fn test_empty_element() {
        assert_eq!(render(&JsxElement::new("main")), "<main />\n");
    }
}
