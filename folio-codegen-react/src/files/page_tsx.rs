//! Next.js App Router page (`app/[locale]/<page>/page.tsx`).

use folio_codegen::{GenerateOptions, PageAnalysis, generation::ImportCollector};

use crate::{
    ast::{FunctionComponent, Import, JsExpr, JsxElement},
    code_file::CodeFile,
    props::{TRANSLATE_FN, instance_element},
};

/// Module providing the translation hook.
pub const NEXT_INTL: &str = "next-intl";

/// Translation hook imported from [`NEXT_INTL`].
pub const USE_TRANSLATIONS: &str = "useTranslations";

/// Imports a translated page carries besides its components.
pub fn page_imports() -> ImportCollector {
    let mut imports = ImportCollector::new();
    imports.add_named(NEXT_INTL, USE_TRANSLATIONS);
    imports
}

/// A generated page component.
pub struct PageTsx<'a> {
    analysis: &'a PageAnalysis,
    component_name: String,
    namespace: Option<String>,
}

impl<'a> PageTsx<'a> {
    pub fn new(analysis: &'a PageAnalysis, options: &GenerateOptions) -> Self {
        Self {
            analysis,
            component_name: options.component_name(),
            namespace: options.namespace.clone(),
        }
    }

    fn uses_translations(&self) -> bool {
        !self.analysis.keys.is_empty()
    }

    fn imports(&self) -> Vec<Import> {
        let mut collector = if self.uses_translations() {
            page_imports()
        } else {
            ImportCollector::new()
        };
        for import in &self.analysis.imports {
            collector.add_default(&import.module, &import.binding);
        }

        collector
            .iter()
            .map(|(module, bindings)| {
                let import = match &bindings.default {
                    Some(binding) => Import::new(module).default(binding.as_str()),
                    None => Import::new(module),
                };
                bindings
                    .named
                    .iter()
                    .fold(import, |import, name| import.named(name.as_str()))
            })
            .collect()
    }

    fn hook_statement(&self) -> String {
        let args = self
            .namespace
            .iter()
            .map(|ns| JsExpr::string(ns.as_str()))
            .collect();
        format!(
            "const {} = {};",
            TRANSLATE_FN,
            JsExpr::call(USE_TRANSLATIONS, args).build()
        )
    }

    fn component(&self) -> FunctionComponent {
        let main = self
            .analysis
            .instances
            .iter()
            .fold(JsxElement::new("main"), |main, instance| {
                main.comment(instance.id.as_str())
                    .child(instance_element(instance))
            });

        let component = FunctionComponent::new(self.component_name.as_str(), main);
        if self.uses_translations() {
            component.statement(self.hook_statement())
        } else {
            component
        }
    }

    pub fn render(&self) -> String {
        CodeFile::new()
            .imports(self.imports())
            .add(self.component())
            .render()
    }
}
