//! ES module import builder.

use folio_codegen::builder::{CodeFragment, Renderable};

/// Builder for import statements.
#[derive(Debug, Clone)]
pub struct Import {
    from: String,
    default: Option<String>,
    named: Vec<String>,
}

impl Import {
    pub fn new(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            default: None,
            named: Vec::new(),
        }
    }

    /// Import a default export.
    pub fn default(mut self, name: impl Into<String>) -> Self {
        self.default = Some(name.into());
        self
    }

    /// Import a named export.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.named.push(name.into());
        self
    }

    /// Build the import as a single line without trailing newline.
    pub fn build(&self) -> String {
        let from = quote(&self.from);
        match (&self.default, self.named.is_empty()) {
            (Some(def), true) => format!("import {} from {};", def, from),
            (Some(def), false) => {
                format!("import {}, {{ {} }} from {};", def, self.named.join(", "), from)
            }
            (None, false) => format!("import {{ {} }} from {};", self.named.join(", "), from),
            (None, true) => format!("import {};", from),
        }
    }
}

impl Renderable for Import {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::line(self.build())]
    }
}

fn quote(module: &str) -> String {
    serde_json::to_string(module).unwrap_or_else(|_| format!("\"{}\"", module))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_import() {
        let i = Import::new("@/components/sections/hero/hero-simple")
            .default("HeroSimple")
            .build();
        assert_eq!(
            i,
            "import HeroSimple from \"@/components/sections/hero/hero-simple\";"
        );
    }

    #[test]
    fn test_named_import() {
        let i = Import::new("next-intl").named("useTranslations").build();
        assert_eq!(i, "import { useTranslations } from \"next-intl\";");
    }

    #[test]
    fn test_default_and_named_import() {
        let i = Import::new("react")
            .default("React")
            .named("useState")
            .named("useEffect")
            .build();
        assert_eq!(i, "import React, { useState, useEffect } from \"react\";");
    }

    #[test]
    fn test_side_effect_import() {
        let i = Import::new("./globals.css").build();
        assert_eq!(i, "import \"./globals.css\";");
    }
}
