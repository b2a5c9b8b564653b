//! Output locations of generated files.

use folio_core::Locale;
use folio_layout::PathsConfig;

/// Default directory receiving `<page>/page.tsx`.
pub const PAGES_DIR: &str = "app/[locale]";

/// Default directory receiving `<locale>/<page>.json`.
pub const MESSAGES_DIR: &str = "messages";

/// File stem of generated page sources.
pub const PAGE_FILE_STEM: &str = "page";

/// Relative directories for pages and locale bundles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub pages: String,
    pub messages: String,
}

impl OutputPaths {
    pub fn new(pages: impl Into<String>, messages: impl Into<String>) -> Self {
        Self {
            pages: pages.into(),
            messages: messages.into(),
        }
    }

    pub fn from_config(paths: &PathsConfig) -> Self {
        Self::new(paths.pages.as_str(), paths.messages.as_str())
    }

    /// `app/[locale]/pricing/page.tsx`
    pub fn page_file(&self, slug: &str, extension: &str) -> String {
        join(&self.pages, &format!("{slug}/{PAGE_FILE_STEM}.{extension}"))
    }

    /// `messages/en/pricing.json`
    pub fn bundle_file(&self, locale: &Locale, slug: &str) -> String {
        join(&self.messages, &format!("{locale}/{slug}.json"))
    }
}

impl Default for OutputPaths {
    fn default() -> Self {
        Self::new(PAGES_DIR, MESSAGES_DIR)
    }
}

fn join(dir: &str, rest: &str) -> String {
    let dir = dir.trim_end_matches('/');
    if dir.is_empty() {
        rest.to_string()
    } else {
        format!("{dir}/{rest}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let paths = OutputPaths::default();
        assert_eq!(paths.page_file("pricing", "tsx"), "app/[locale]/pricing/page.tsx");
        assert_eq!(
            paths.bundle_file(&Locale::from_static("zh"), "pricing"),
            "messages/zh/pricing.json"
        );
    }

    #[test]
    fn test_trailing_slash_and_empty_dirs() {
        let paths = OutputPaths::new("src/app/", "");
        assert_eq!(paths.page_file("home", "tsx"), "src/app/home/page.tsx");
        assert_eq!(paths.bundle_file(&Locale::from_static("en"), "home"), "en/home.json");
    }
}
