//! Code builder utility for generating properly indented code.

use super::{CodeFragment, Renderable};

/// One indent level of generated TSX and JSON.
const INDENT: &str = "  ";

/// Mutable builder for source text indented by two spaces per level.
///
/// # Example
///
/// ```
/// use folio_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::tsx();
/// builder
///     .push_line("export default function HomePage() {")
///     .push_indent()
///     .push_line("return <main />;")
///     .push_dedent()
///     .push_line("}");
///
/// assert_eq!(
///     builder.build(),
///     "export default function HomePage() {\n  return <main />;\n}\n"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    buffer: String,
}

impl CodeBuilder {
    /// Create an empty builder at indentation level zero.
    pub fn tsx() -> Self {
        Self {
            indent_level: 0,
            buffer: String::new(),
        }
    }

    /// Add a line of code with current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line.
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level.
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Emit a Renderable node.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    /// Apply a single code fragment.
    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.push_indent();
                for f in body {
                    self.apply_fragment(f);
                }
                self.push_dedent();
                if let Some(c) = close {
                    self.push_line(&c);
                }
            }
            CodeFragment::Indent(fragments) => {
                self.push_indent();
                for f in fragments {
                    self.apply_fragment(f);
                }
                self.push_dedent();
            }
        }
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    /// Get a reference to the current buffer content.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(INDENT);
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::tsx()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_and_blank() {
        let mut builder = CodeBuilder::tsx();
        builder
            .push_line("import { useTranslations } from \"next-intl\";")
            .push_blank()
            .push_line("export default function Page() {}");
        assert_eq!(
            builder.build(),
            "import { useTranslations } from \"next-intl\";\n\nexport default function Page() {}\n"
        );
    }

    #[test]
    fn test_dedent_saturates() {
        let mut builder = CodeBuilder::tsx();
        builder.push_dedent().push_dedent().push_line("x");
        builder.push_indent().push_line("y");
        assert_eq!(builder.as_str(), "x\n  y\n");
    }

    #[test]
    fn test_emit_block_fragment() {
        struct ReturnNode;
        impl Renderable for ReturnNode {
            fn to_fragments(&self) -> Vec<CodeFragment> {
                vec![CodeFragment::Block {
                    header: "return (".to_string(),
                    body: vec![CodeFragment::Line("<main />".to_string())],
                    close: Some(");".to_string()),
                }]
            }
        }

        let mut builder = CodeBuilder::tsx();
        builder.push_indent().emit(&ReturnNode);
        assert_eq!(builder.build(), "  return (\n    <main />\n  );\n");
    }

    #[test]
    fn test_indent_fragment() {
        let mut builder = CodeBuilder::tsx();
        for fragment in [
            CodeFragment::Line("<Hero".to_string()),
            CodeFragment::Indent(vec![CodeFragment::Line("title=\"x\"".to_string())]),
            CodeFragment::Blank,
            CodeFragment::Line("/>".to_string()),
        ] {
            builder.apply_fragment(fragment);
        }
        assert_eq!(builder.build(), "<Hero\n  title=\"x\"\n\n/>\n");
    }
}
