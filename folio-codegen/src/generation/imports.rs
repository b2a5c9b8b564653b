//! Import collection for generated modules.

use std::collections::BTreeSet;

use indexmap::IndexMap;

/// Bindings imported from one module.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleImports {
    /// Default export binding (`import Foo from "..."`).
    pub default: Option<String>,
    /// Named bindings (`import { a, b } from "..."`), sorted.
    pub named: BTreeSet<String>,
}

/// Tracks imports and deduplicates them.
///
/// Modules keep insertion order for deterministic output.
///
/// # Example
///
/// ```
/// use folio_codegen::generation::ImportCollector;
///
/// let mut imports = ImportCollector::new();
/// imports.add_named("next-intl", "useTranslations");
/// imports.add_default("@/components/sections/hero/hero-simple", "HeroSimple");
/// imports.add_default("@/components/sections/hero/hero-simple", "HeroSimple");
///
/// assert_eq!(imports.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ImportCollector {
    imports: IndexMap<String, ModuleImports>,
}

impl ImportCollector {
    /// Create a new empty import collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Import the default export of `module` as `name`.
    ///
    /// A module has one default binding; if it was already imported the
    /// existing binding is kept and returned.
    pub fn add_default(&mut self, module: &str, name: &str) -> String {
        let entry = self.imports.entry(module.to_string()).or_default();
        entry
            .default
            .get_or_insert_with(|| name.to_string())
            .clone()
    }

    /// Import a named export from `module`.
    pub fn add_named(&mut self, module: &str, symbol: &str) {
        self.imports
            .entry(module.to_string())
            .or_default()
            .named
            .insert(symbol.to_string());
    }

    /// Default binding for `module`, if any.
    pub fn default_binding(&self, module: &str) -> Option<&str> {
        self.imports
            .get(module)
            .and_then(|m| m.default.as_deref())
    }

    /// Check whether any module binds `name`, as default or named import.
    pub fn binds(&self, name: &str) -> bool {
        self.imports
            .values()
            .any(|m| m.default.as_deref() == Some(name) || m.named.contains(name))
    }

    /// Iterate over all imports in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ModuleImports)> {
        self.imports.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Check if the collector is empty.
    pub fn is_empty(&self) -> bool {
        self.imports.is_empty()
    }

    /// Get the number of modules.
    pub fn len(&self) -> usize {
        self.imports.len()
    }
}
