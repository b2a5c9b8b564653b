//! Component registry: maps layout component types to imports.

use folio_core::to_pascal_case;
use folio_layout::Config;
use indexmap::IndexMap;
use serde::Serialize;

/// Default module root for page sections.
pub const DEFAULT_COMPONENTS_ROOT: &str = "@/components/sections";

/// Built-in section catalogue: (type, group directory, export name).
const BUILTIN_COMPONENTS: &[(&str, &str, &str)] = &[
    ("navbar", "navigation", "Navbar"),
    ("hero-simple", "hero", "HeroSimple"),
    ("hero-split", "hero", "HeroSplit"),
    ("hero-centered", "hero", "HeroCentered"),
    ("logo-cloud", "social-proof", "LogoCloud"),
    ("stats", "social-proof", "Stats"),
    ("features-grid", "features", "FeaturesGrid"),
    ("features-list", "features", "FeaturesList"),
    ("pricing-tiers", "pricing", "PricingTiers"),
    ("pricing-comparison", "pricing", "PricingComparison"),
    ("testimonials-grid", "testimonials", "TestimonialsGrid"),
    ("faq-accordion", "faq", "FaqAccordion"),
    ("newsletter", "cta", "Newsletter"),
    ("cta-banner", "cta", "CtaBanner"),
    ("footer-simple", "footer", "FooterSimple"),
];

/// Where a component mapping came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Resolution {
    /// Part of the built-in section catalogue.
    Builtin,
    /// Added or overridden in `folio.toml`.
    Configured,
    /// Unknown type; name and module derived from the type identifier.
    Derived,
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Resolution::Builtin => write!(f, "builtin"),
            Resolution::Configured => write!(f, "configured"),
            Resolution::Derived => write!(f, "derived"),
        }
    }
}

/// A registered component mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentEntry {
    /// Module path to import from.
    pub module: String,
    /// Default export name.
    pub name: String,
    /// Origin of the mapping.
    pub resolution: Resolution,
}

/// A resolved import for one component type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentImport {
    /// Component type identifier from the layout.
    pub kind: String,
    /// Module path to import from.
    pub module: String,
    /// Exported component name.
    pub name: String,
    /// Local binding in the generated page (differs from `name` on collisions).
    pub binding: String,
    /// Origin of the mapping.
    pub resolution: Resolution,
}

/// Registry of known component types.
///
/// Types missing from the registry still resolve: the name is derived with
/// [`derive_component_name`] and imported from `<fallback root>/<type>`.
#[derive(Debug, Clone)]
pub struct ComponentRegistry {
    entries: IndexMap<String, ComponentEntry>,
    fallback_root: String,
}

impl ComponentRegistry {
    /// Create an empty registry importing unknown types from `fallback_root`.
    pub fn new(fallback_root: impl Into<String>) -> Self {
        Self {
            entries: IndexMap::new(),
            fallback_root: trim_root(fallback_root.into()),
        }
    }

    /// Registry holding the built-in section catalogue under `root`.
    pub fn builtin(root: impl Into<String>) -> Self {
        let mut registry = Self::new(root);
        for (kind, group, name) in BUILTIN_COMPONENTS {
            let module = format!("{}/{}/{}", registry.fallback_root, group, kind);
            registry.entries.insert(
                kind.to_string(),
                ComponentEntry {
                    module,
                    name: name.to_string(),
                    resolution: Resolution::Builtin,
                },
            );
        }
        registry
    }

    /// Built-in catalogue extended with `[components.*]` entries from the config.
    pub fn from_config(config: &Config) -> Self {
        let mut registry = Self::builtin(config.paths.components.as_str());
        for (kind, entry) in &config.components {
            let name = entry
                .name
                .clone()
                .unwrap_or_else(|| derive_component_name(kind));
            registry.register(kind, entry.import.as_str(), name);
        }
        registry
    }

    /// Add or replace the mapping for `kind`.
    pub fn register(&mut self, kind: &str, module: impl Into<String>, name: impl Into<String>) {
        self.entries.insert(
            kind.to_string(),
            ComponentEntry {
                module: module.into(),
                name: name.into(),
                resolution: Resolution::Configured,
            },
        );
    }

    /// Look up a registered type.
    pub fn get(&self, kind: &str) -> Option<&ComponentEntry> {
        self.entries.get(kind)
    }

    /// Check whether `kind` is registered.
    pub fn contains(&self, kind: &str) -> bool {
        self.entries.contains_key(kind)
    }

    /// Resolve `kind` to an import, deriving one for unknown types.
    ///
    /// The returned binding equals the export name; callers rename it when
    /// it collides with another import.
    pub fn resolve(&self, kind: &str) -> ComponentImport {
        match self.entries.get(kind) {
            Some(entry) => ComponentImport {
                kind: kind.to_string(),
                module: entry.module.clone(),
                name: entry.name.clone(),
                binding: entry.name.clone(),
                resolution: entry.resolution,
            },
            None => {
                let name = derive_component_name(kind);
                ComponentImport {
                    kind: kind.to_string(),
                    module: format!("{}/{}", self.fallback_root, kind),
                    binding: name.clone(),
                    name,
                    resolution: Resolution::Derived,
                }
            }
        }
    }

    /// Module root used for unknown types.
    pub fn fallback_root(&self) -> &str {
        &self.fallback_root
    }

    /// Iterate over registered types in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ComponentEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of registered types.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no type is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ComponentRegistry {
    fn default() -> Self {
        Self::builtin(DEFAULT_COMPONENTS_ROOT)
    }
}

/// Derive a JSX component name from a type identifier.
///
/// `hero-video` -> `HeroVideo`. Names that would not start with a letter are
/// prefixed with `Section`.
pub fn derive_component_name(kind: &str) -> String {
    let name = to_pascal_case(kind);
    match name.chars().next() {
        Some(c) if c.is_ascii_alphabetic() => name,
        _ => format!("Section{name}"),
    }
}

fn trim_root(root: String) -> String {
    let trimmed = root.trim_end_matches('/');
    if trimmed.len() == root.len() {
        root
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use folio_layout::parse_config;

    use super::*;

    #[test]
    fn test_builtin_resolution() {
        let registry = ComponentRegistry::default();
        let import = registry.resolve("hero-simple");

        assert_eq!(import.module, "@/components/sections/hero/hero-simple");
        assert_eq!(import.name, "HeroSimple");
        assert_eq!(import.binding, "HeroSimple");
        assert_eq!(import.resolution, Resolution::Builtin);
        assert_eq!(registry.len(), BUILTIN_COMPONENTS.len());
    }

    #[test]
    fn test_unknown_type_is_derived() {
        let registry = ComponentRegistry::default();
        let import = registry.resolve("hero-video");

        assert_eq!(import.module, "@/components/sections/hero-video");
        assert_eq!(import.name, "HeroVideo");
        assert_eq!(import.resolution, Resolution::Derived);
        assert!(!registry.contains("hero-video"));
    }

    #[test]
    fn test_custom_root_is_trimmed() {
        let registry = ComponentRegistry::builtin("~/sections/");
        assert_eq!(registry.fallback_root(), "~/sections");
        assert_eq!(registry.resolve("stats").module, "~/sections/social-proof/stats");
        assert_eq!(registry.resolve("map").module, "~/sections/map");
    }

    #[test]
    fn test_from_config_overrides() {
        let config = parse_config(
            r#"
[components.hero-simple]
import = "@/components/custom/hero"
name = "CustomHero"

[components.video-embed]
import = "@/components/media/video-embed"
"#,
            "folio.toml",
        )
        .unwrap();

        let registry = ComponentRegistry::from_config(&config);

        let hero = registry.resolve("hero-simple");
        assert_eq!(hero.module, "@/components/custom/hero");
        assert_eq!(hero.name, "CustomHero");
        assert_eq!(hero.resolution, Resolution::Configured);

        let video = registry.resolve("video-embed");
        assert_eq!(video.name, "VideoEmbed");
        assert_eq!(video.resolution, Resolution::Configured);
    }

    #[test]
    fn test_derive_component_name() {
        assert_eq!(derive_component_name("pricing_table"), "PricingTable");
        assert_eq!(derive_component_name("3d-showcase"), "Section3dShowcase");
        assert_eq!(derive_component_name("***"), "Section");
    }
}
