//! Single-pass layout analysis shared by page generators.
//!
//! Walks the layout in order, resolving component imports, extracting
//! translatable strings and looking up their translations. The result feeds
//! both the code emitter and the bundle writer.

use std::collections::HashSet;

use eyre::{Result, bail};
use folio_core::{Locale, to_kebab_case, to_pascal_case};
use folio_layout::{ComponentInstance, Config, Layout};
use indexmap::IndexMap;

use crate::{
    ComponentImport, ComponentRegistry, Diagnostic, Resolution,
    generation::ImportCollector,
    i18n::{
        Dictionary, KeyAssigner, KeyTable, LocaleBundle, PropNode, Script, TranslationKey,
        extract_props,
    },
};

/// Inputs of one generation call besides the layout itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Page name, used for output paths and the page component name.
    pub page_name: String,
    /// Locale the layout copy is written in.
    pub source_locale: Locale,
    /// Locale of the second bundle.
    pub target_locale: Locale,
    /// Translation namespace; both bundles nest under it.
    pub namespace: Option<String>,
}

impl GenerateOptions {
    /// Options for `page_name` with the default `zh` -> `en` locales.
    pub fn new(page_name: impl Into<String>) -> Self {
        Self {
            page_name: page_name.into(),
            source_locale: Locale::from_static("zh"),
            target_locale: Locale::from_static("en"),
            namespace: None,
        }
    }

    /// Options for `page_name` using the `[project]` settings.
    pub fn from_config(page_name: impl Into<String>, config: &Config) -> Self {
        Self {
            page_name: page_name.into(),
            source_locale: config.project.source_locale.clone(),
            target_locale: config.project.target_locale.clone(),
            namespace: config.project.namespace.clone(),
        }
    }

    pub fn with_source(mut self, locale: Locale) -> Self {
        self.source_locale = locale;
        self
    }

    pub fn with_target(mut self, locale: Locale) -> Self {
        self.target_locale = locale;
        self
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Directory and file name slug: `Pricing Page` -> `pricing-page`.
    pub fn page_slug(&self) -> String {
        let slug = to_kebab_case(&self.page_name);
        if slug.is_empty() {
            "page".to_string()
        } else {
            slug
        }
    }

    /// Name of the generated page component: `pricing` -> `PricingPage`.
    pub fn component_name(&self) -> String {
        let name = to_pascal_case(&self.page_name);
        match name.chars().next() {
            None => "Page".to_string(),
            Some(c) if !c.is_ascii_alphabetic() => format!("Page{name}"),
            Some(_) if name.ends_with("Page") => name,
            Some(_) => format!("{name}Page"),
        }
    }

    /// Whether source and target locale are the same.
    pub fn is_single_locale(&self) -> bool {
        self.source_locale == self.target_locale
    }
}

/// One component instance after analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzedInstance {
    /// Position in the layout.
    pub index: usize,
    /// Instance id from the layout.
    pub id: String,
    /// Component type from the layout.
    pub kind: String,
    /// Local JSX binding of the component.
    pub binding: String,
    /// Annotated properties.
    pub props: IndexMap<String, PropNode>,
}

/// Everything a page generator needs, computed in one pass.
#[derive(Debug, Clone)]
pub struct PageAnalysis {
    /// Instances in layout order.
    pub instances: Vec<AnalyzedInstance>,
    /// Assigned keys in visit order.
    pub keys: KeyTable,
    /// Distinct component imports in first-use order.
    pub imports: Vec<ComponentImport>,
    /// Warnings and notes.
    pub diagnostics: Vec<Diagnostic>,
}

impl PageAnalysis {
    /// Source-locale bundle.
    pub fn source_bundle(&self, options: &GenerateOptions) -> LocaleBundle {
        LocaleBundle::from_entries(
            options.source_locale.clone(),
            options.namespace.as_deref(),
            self.keys.source_entries(),
        )
    }

    /// Target-locale bundle.
    pub fn target_bundle(&self, options: &GenerateOptions) -> LocaleBundle {
        LocaleBundle::from_entries(
            options.target_locale.clone(),
            options.namespace.as_deref(),
            self.keys.target_entries(),
        )
    }
}

/// Analyze `layout`.
///
/// Fails only on invalid input (empty or duplicate instance ids, empty
/// types). Unknown component types and missing translations are recorded as
/// diagnostics.
pub fn analyze(
    layout: &Layout,
    options: &GenerateOptions,
    registry: &ComponentRegistry,
    dictionary: &Dictionary,
) -> Result<PageAnalysis> {
    analyze_with_imports(layout, options, registry, dictionary, ImportCollector::new())
}

/// [`analyze`] for a page that also imports `page_imports` (a translation
/// hook, for instance). Component bindings never reuse those names.
pub fn analyze_with_imports(
    layout: &Layout,
    options: &GenerateOptions,
    registry: &ComponentRegistry,
    dictionary: &Dictionary,
    page_imports: ImportCollector,
) -> Result<PageAnalysis> {
    check_instances(&layout.components)?;

    let script = Script::for_locale(&options.source_locale);
    let page_component = options.component_name();

    let mut assigner = KeyAssigner::new();
    let mut resolver = ImportResolver::new(registry, &page_component, page_imports);
    let mut keys = KeyTable::new();
    let mut diagnostics = Vec::new();
    let mut instances = Vec::with_capacity(layout.len());

    for instance in &layout.components {
        let scope = assigner.next_component();
        let binding = resolver.resolve(instance, &mut diagnostics);

        let extraction = extract_props(&instance.props, scope, script, &instance.id);
        diagnostics.extend(extraction.diagnostics);

        for extracted in &extraction.strings {
            let target = translate(&extracted.source, options, dictionary).unwrap_or_else(|| {
                diagnostics.push(
                    Diagnostic::info(
                        "translate",
                        format!(
                            "no {} translation for \"{}\", using source text",
                            options.target_locale,
                            extracted.source.trim()
                        ),
                    )
                    .at(extracted.key.as_str()),
                );
                extracted.source.clone()
            });
            keys.push(TranslationKey::new(
                extracted.key.as_str(),
                extracted.source.as_str(),
                target,
            ));
        }

        tracing::debug!(
            index = scope.index(),
            id = %instance.id,
            kind = %instance.kind,
            binding = %binding,
            strings = extraction.strings.len(),
            "analyzed component"
        );

        instances.push(AnalyzedInstance {
            index: scope.index(),
            id: instance.id.clone(),
            kind: instance.kind.clone(),
            binding,
            props: extraction.props,
        });
    }

    tracing::debug!(
        components = instances.len(),
        keys = keys.len(),
        imports = resolver.imports.len(),
        "layout analysis complete"
    );

    Ok(PageAnalysis {
        instances,
        keys,
        imports: resolver.imports,
        diagnostics,
    })
}

fn translate(source: &str, options: &GenerateOptions, dictionary: &Dictionary) -> Option<String> {
    if options.is_single_locale() {
        return Some(source.to_string());
    }
    dictionary.lookup(source).map(str::to_string)
}

fn check_instances(components: &[ComponentInstance]) -> Result<()> {
    let mut seen = HashSet::new();
    for (i, instance) in components.iter().enumerate() {
        if instance.id.trim().is_empty() {
            bail!("component {} has an empty id", i);
        }
        if instance.kind.trim().is_empty() {
            bail!("component '{}' has an empty type", instance.id);
        }
        if !seen.insert(instance.id.as_str()) {
            bail!("duplicate component id '{}'", instance.id);
        }
    }
    Ok(())
}

/// Resolves component types to unique local bindings.
struct ImportResolver<'a> {
    registry: &'a ComponentRegistry,
    reserved: &'a str,
    collector: ImportCollector,
    imports: Vec<ComponentImport>,
}

impl<'a> ImportResolver<'a> {
    fn new(registry: &'a ComponentRegistry, reserved: &'a str, collector: ImportCollector) -> Self {
        Self {
            registry,
            reserved,
            collector,
            imports: Vec::new(),
        }
    }

    fn resolve(
        &mut self,
        instance: &ComponentInstance,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> String {
        let mut import = self.registry.resolve(&instance.kind);
        if let Some(binding) = self.collector.default_binding(&import.module) {
            return binding.to_string();
        }

        import.binding = self.unique_binding(&import.name);
        self.collector.add_default(&import.module, &import.binding);

        if import.resolution == Resolution::Derived {
            diagnostics.push(
                Diagnostic::warning(
                    "resolve",
                    format!(
                        "unknown component type '{}', importing {} from \"{}\"",
                        import.kind, import.name, import.module
                    ),
                )
                .at(instance.id.as_str()),
            );
        }

        let binding = import.binding.clone();
        self.imports.push(import);
        binding
    }

    fn unique_binding(&self, name: &str) -> String {
        let taken = |candidate: &str| candidate == self.reserved || self.collector.binds(candidate);
        if !taken(name) {
            return name.to_string();
        }
        (2..)
            .map(|n| format!("{name}{n}"))
            .find(|candidate| !taken(candidate))
            .unwrap_or_else(|| name.to_string())
    }
}

#[cfg(test)]
mod tests {
    use folio_layout::PropValue;

    use super::*;
    use crate::Severity;

    fn analyze_default(layout: &Layout) -> PageAnalysis {
        let options = GenerateOptions::new("pricing");
        let dictionary = Dictionary::builtin(&options.source_locale, &options.target_locale);
        analyze(layout, &options, &ComponentRegistry::default(), &dictionary).unwrap()
    }

    #[test]
    fn test_options_names() {
        assert_eq!(GenerateOptions::new("pricing").component_name(), "PricingPage");
        assert_eq!(GenerateOptions::new("landing-page").component_name(), "LandingPage");
        assert_eq!(GenerateOptions::new("404").component_name(), "Page404");
        assert_eq!(GenerateOptions::new("价格").component_name(), "Page");
        assert_eq!(GenerateOptions::new("About Us").page_slug(), "about-us");
        assert_eq!(GenerateOptions::new("价格").page_slug(), "page");
    }

    #[test]
    fn test_welcome_example() {
        let layout = Layout::new(vec![
            ComponentInstance::new("h1", "hero-simple")
                .prop("title", "欢迎")
                .prop("count", 3),
        ]);

        let analysis = analyze_default(&layout);

        let key = analysis.keys.get("component0.title").unwrap();
        assert_eq!(key.source_value, "欢迎");
        assert_eq!(key.target_value, "Welcome");
        assert_eq!(analysis.keys.len(), 1);
        assert_eq!(analysis.instances[0].binding, "HeroSimple");
        assert!(matches!(
            analysis.instances[0].props["count"],
            PropNode::Literal(PropValue::Number(_))
        ));
        assert!(analysis.diagnostics.is_empty());
    }

    #[test]
    fn test_counter_advances_for_every_instance() {
        let layout = Layout::new(vec![
            ComponentInstance::new("nav", "navbar").prop("sticky", true),
            ComponentInstance::new("hero", "hero-simple").prop("title", "欢迎"),
        ]);

        let analysis = analyze_default(&layout);
        assert_eq!(analysis.keys.iter().next().unwrap().key, "component1.title");
    }

    #[test]
    fn test_untranslated_passes_through_with_info() {
        let layout = Layout::new(vec![
            ComponentInstance::new("cta", "cta-banner").prop("title", "欢迎来到我们的平台"),
        ]);

        let analysis = analyze_default(&layout);

        let key = analysis.keys.get("component0.title").unwrap();
        assert_eq!(key.target_value, "欢迎来到我们的平台");
        assert_eq!(analysis.diagnostics.len(), 1);
        assert_eq!(analysis.diagnostics[0].severity, Severity::Info);
        assert_eq!(analysis.diagnostics[0].location.as_deref(), Some("component0.title"));
    }

    #[test]
    fn test_same_locale_copies_source() {
        let layout = Layout::new(vec![
            ComponentInstance::new("cta", "cta-banner").prop("title", "欢迎"),
        ]);
        let options = GenerateOptions::new("home").with_target(Locale::from_static("zh"));
        let dictionary = Dictionary::empty(options.target_locale.clone());

        let analysis =
            analyze(&layout, &options, &ComponentRegistry::default(), &dictionary).unwrap();

        assert_eq!(
            analysis.source_bundle(&options).tree(),
            analysis.target_bundle(&options).tree()
        );
        assert!(analysis.diagnostics.is_empty());
    }

    #[test]
    fn test_unknown_type_warns_once() {
        let layout = Layout::new(vec![
            ComponentInstance::new("v1", "hero-video"),
            ComponentInstance::new("v2", "hero-video"),
        ]);

        let analysis = analyze_default(&layout);

        assert_eq!(analysis.imports.len(), 1);
        assert_eq!(analysis.imports[0].name, "HeroVideo");
        assert_eq!(analysis.imports[0].resolution, Resolution::Derived);
        assert_eq!(analysis.instances[1].binding, "HeroVideo");
        let warnings: Vec<_> = analysis
            .diagnostics
            .iter()
            .filter(|d| d.severity.is_warning())
            .collect();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].location.as_deref(), Some("v1"));
    }

    #[test]
    fn test_binding_collisions_are_aliased() {
        let mut registry = ComponentRegistry::default();
        registry.register("hero-custom", "@/components/custom/hero", "HeroSimple");
        registry.register("pricing-page", "@/components/custom/pricing", "PricingPage");

        let layout = Layout::new(vec![
            ComponentInstance::new("a", "hero-simple"),
            ComponentInstance::new("b", "hero-custom"),
            ComponentInstance::new("c", "pricing-page"),
        ]);
        let options = GenerateOptions::new("pricing");
        let dictionary = Dictionary::empty(options.target_locale.clone());

        let analysis = analyze(&layout, &options, &registry, &dictionary).unwrap();

        let bindings: Vec<&str> = analysis.imports.iter().map(|i| i.binding.as_str()).collect();
        assert_eq!(bindings, vec!["HeroSimple", "HeroSimple2", "PricingPage2"]);
    }

    #[test]
    fn test_invalid_instances_are_errors() {
        let options = GenerateOptions::new("home");
        let registry = ComponentRegistry::default();
        let dictionary = Dictionary::empty(options.target_locale.clone());

        let duplicate = Layout::new(vec![
            ComponentInstance::new("a", "hero-simple"),
            ComponentInstance::new("a", "cta-banner"),
        ]);
        let err = analyze(&duplicate, &options, &registry, &dictionary).unwrap_err();
        assert_eq!(err.to_string(), "duplicate component id 'a'");

        let untyped = Layout::new(vec![ComponentInstance::new("a", "")]);
        assert!(analyze(&untyped, &options, &registry, &dictionary).is_err());

        let blank_id = Layout::new(vec![ComponentInstance::new(" ", "hero-simple")]);
        let err = analyze(&blank_id, &options, &registry, &dictionary).unwrap_err();
        assert_eq!(err.to_string(), "component 0 has an empty id");

        let blank_type = Layout::new(vec![ComponentInstance::new("a", "  ")]);
        let err = analyze(&blank_type, &options, &registry, &dictionary).unwrap_err();
        assert_eq!(err.to_string(), "component 'a' has an empty type");
    }

    #[test]
    fn test_empty_layout() {
        let analysis = analyze_default(&Layout::new(Vec::new()));
        let options = GenerateOptions::new("pricing").with_namespace("pricing");

        assert!(analysis.keys.is_empty());
        assert!(analysis.imports.is_empty());
        assert!(analysis.source_bundle(&options).is_empty());
        assert!(analysis.target_bundle(&options).is_empty());
    }
}
