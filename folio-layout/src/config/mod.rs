//! Project configuration (`folio.toml`).

mod file;
mod parse;

use folio_core::Locale;
use indexmap::IndexMap;
use serde::Deserialize;

pub use file::FolioToml;
pub use parse::parse_config;

/// Default content written by `folio init`.
pub const CONFIG_TEMPLATE: &str = r#"# folio page generator configuration

[project]
# Locale the layouts are authored in. Strings in this locale's script are extracted.
source_locale = "zh"
# Locale of the second bundle written next to the source bundle.
target_locale = "en"
# Optional translation namespace; bundles are nested under it.
# namespace = "landing"

[paths]
pages = "app/[locale]"
messages = "messages"
# Module root used for component types missing from the registry.
components = "@/components/sections"

# Register a custom section or override a built-in one.
# [components.hero-video]
# import = "@/components/custom/hero-video"
# name = "HeroVideo"

# Extra phrases for the target locale dictionary.
# [dictionary.en]
# "限时优惠" = "Limited-time offer"
"#;

/// Root configuration for folio.toml
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Locale and namespace settings
    #[serde(default)]
    pub project: ProjectConfig,

    /// Output locations
    #[serde(default)]
    pub paths: PathsConfig,

    /// Component registry additions and overrides, keyed by component type
    #[serde(default)]
    pub components: IndexMap<String, ComponentOverride>,

    /// Extra dictionary phrases, keyed by target locale then source phrase
    #[serde(default)]
    pub dictionary: IndexMap<Locale, IndexMap<String, String>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    #[serde(default = "default_source_locale")]
    pub source_locale: Locale,

    #[serde(default = "default_target_locale")]
    pub target_locale: Locale,

    pub namespace: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PathsConfig {
    /// Directory receiving `<page>/page.tsx`
    #[serde(default = "default_pages_dir")]
    pub pages: String,

    /// Directory receiving `<locale>/<page>.json`
    #[serde(default = "default_messages_dir")]
    pub messages: String,

    /// Module root for component types missing from the registry
    #[serde(default = "default_components_root")]
    pub components: String,
}

/// Import mapping for one component type.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ComponentOverride {
    /// Module path to import from
    pub import: String,

    /// Exported component name (derived from the type when omitted)
    pub name: Option<String>,
}

fn default_source_locale() -> Locale {
    Locale::from_static("zh")
}

fn default_target_locale() -> Locale {
    Locale::from_static("en")
}

fn default_pages_dir() -> String {
    "app/[locale]".to_string()
}

fn default_messages_dir() -> String {
    "messages".to_string()
}

fn default_components_root() -> String {
    "@/components/sections".to_string()
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            source_locale: default_source_locale(),
            target_locale: default_target_locale(),
            namespace: None,
        }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            pages: default_pages_dir(),
            messages: default_messages_dir(),
            components: default_components_root(),
        }
    }
}

impl Config {
    /// Dictionary phrases configured for `locale`, if any.
    pub fn phrases_for(&self, locale: &Locale) -> impl Iterator<Item = (&str, &str)> {
        self.dictionary
            .get(locale)
            .into_iter()
            .flat_map(|phrases| phrases.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }
}
