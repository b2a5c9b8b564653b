//! Next.js + next-intl page generator.

use eyre::Result;
use folio_codegen::{
    ComponentRegistry, GenerateOptions, GenerationResult, PageAnalysis, PageCodegen,
    analyze_with_imports, i18n::Dictionary,
};
use folio_layout::{Config, Layout};

use crate::files::{PageTsx, page_imports};

/// Generates a Next.js App Router page with next-intl bundles.
#[derive(Debug, Clone, Default)]
pub struct Generator {
    registry: ComponentRegistry,
    dictionary: Option<Dictionary>,
}

impl Generator {
    /// Generator with the built-in component catalogue and dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Generator using the component overrides and phrases from `config`.
    pub fn from_config(config: &Config) -> Self {
        Self {
            registry: ComponentRegistry::from_config(config),
            dictionary: Some(Dictionary::from_config(config)),
        }
    }

    pub fn with_registry(mut self, registry: ComponentRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn with_dictionary(mut self, dictionary: Dictionary) -> Self {
        self.dictionary = Some(dictionary);
        self
    }

    pub fn registry(&self) -> &ComponentRegistry {
        &self.registry
    }

    /// Analyze `layout` without rendering.
    ///
    /// Component bindings stay clear of the page's own `next-intl` import.
    pub fn analyze(&self, layout: &Layout, options: &GenerateOptions) -> Result<PageAnalysis> {
        match &self.dictionary {
            Some(dictionary) if dictionary.locale() == &options.target_locale => {
                analyze_with_imports(layout, options, &self.registry, dictionary, page_imports())
            }
            _ => {
                let builtin = Dictionary::builtin(&options.source_locale, &options.target_locale);
                analyze_with_imports(layout, options, &self.registry, &builtin, page_imports())
            }
        }
    }
}

impl PageCodegen for Generator {
    fn framework(&self) -> &'static str {
        "next-intl"
    }

    fn file_extension(&self) -> &'static str {
        "tsx"
    }

    fn generate(&self, layout: &Layout, options: &GenerateOptions) -> Result<GenerationResult> {
        let analysis = self.analyze(layout, options)?;
        let code = PageTsx::new(&analysis, options).render();
        let source_bundle = analysis.source_bundle(options);
        let target_bundle = analysis.target_bundle(options);

        tracing::debug!(
            page = %options.page_slug(),
            component = %options.component_name(),
            keys = analysis.keys.len(),
            imports = analysis.imports.len(),
            diagnostics = analysis.diagnostics.len(),
            "generated page"
        );

        Ok(GenerationResult {
            code,
            source_bundle,
            target_bundle,
            keys: analysis.keys,
            imports: analysis.imports,
            diagnostics: analysis.diagnostics,
        })
    }
}
