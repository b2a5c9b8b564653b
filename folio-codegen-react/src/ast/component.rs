//! Function component builder.

use folio_codegen::builder::{CodeFragment, Renderable};

use super::jsx::JsxElement;

/// `export default function Name() { ...; return (<jsx />); }`
#[derive(Debug, Clone)]
pub struct FunctionComponent {
    name: String,
    statements: Vec<String>,
    returns: JsxElement,
}

impl FunctionComponent {
    pub fn new(name: impl Into<String>, returns: JsxElement) -> Self {
        Self {
            name: name.into(),
            statements: Vec::new(),
            returns,
        }
    }

    /// Add a statement before the return (e.g., a hook call).
    pub fn statement(mut self, line: impl Into<String>) -> Self {
        self.statements.push(line.into());
        self
    }

    fn return_fragments(&self) -> Vec<CodeFragment> {
        if let Some(inline) = self.returns.build_inline() {
            return vec![CodeFragment::line(format!("return {};", inline))];
        }
        vec![CodeFragment::block(
            "return (",
            self.returns.to_fragments(),
            Some(");".to_string()),
        )]
    }
}

impl Renderable for FunctionComponent {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut body: Vec<CodeFragment> = self
            .statements
            .iter()
            .map(|s| CodeFragment::line(s.as_str()))
            .collect();
        if !body.is_empty() {
            body.push(CodeFragment::Blank);
        }
        body.extend(self.return_fragments());

        vec![CodeFragment::block(
            format!("export default function {}() {{", self.name),
            body,
            Some("}".to_string()),
        )]
    }
}

#[cfg(test)]
mod tests {
    use folio_codegen::builder::CodeBuilder;

    use super::*;

    fn render(component: &FunctionComponent) -> String {
        let mut builder = CodeBuilder::tsx();
        builder.emit(component);
        builder.build()
    }

    #[test]
    fn test_empty_return_is_inline() {
        let component = FunctionComponent::new("HomePage", JsxElement::new("main"));
        assert_eq!(
            render(&component),
            "export default function HomePage() {\n  return <main />;\n}\n"
        );
    }

    #[test]
    fn test_statements_and_children() {
        let component = FunctionComponent::new(
            "HomePage",
            JsxElement::new("main").child(JsxElement::new("Navbar")),
        )
        .statement("const t = useTranslations();");

        assert_eq!(
            render(&component),
            "export default function HomePage() {\n  const t = useTranslations();\n\n  return (\n    <main>\n      <Navbar />\n    </main>\n  );\n}\n"
        );
    }
}
