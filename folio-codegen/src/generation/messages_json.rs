//! Locale bundle file (`messages/<locale>/<page>.json`).

use std::path::{Path, PathBuf};

use folio_core::{FileRules, GeneratedFile};

use crate::{OutputPaths, i18n::LocaleBundle};

/// A locale bundle written next to the generated page.
pub struct MessagesJson<'a> {
    bundle: &'a LocaleBundle,
    path: String,
}

impl<'a> MessagesJson<'a> {
    /// Bundle file for the page `slug` under `paths`.
    pub fn new(bundle: &'a LocaleBundle, paths: &OutputPaths, slug: &str) -> Self {
        Self {
            bundle,
            path: paths.bundle_file(bundle.locale(), slug),
        }
    }

    /// Path relative to the output directory.
    pub fn relative_path(&self) -> &str {
        &self.path
    }
}

impl GeneratedFile for MessagesJson<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.path)
    }

    fn rules(&self) -> FileRules {
        FileRules::default()
    }

    fn render(&self) -> String {
        self.bundle.to_json_string()
    }
}

#[cfg(test)]
mod tests {
    use folio_core::Locale;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_write_bundle() {
        let temp = TempDir::new().unwrap();
        let bundle = LocaleBundle::from_entries(
            Locale::from_static("en"),
            None,
            [("component0.title", "Welcome")],
        );
        let file = MessagesJson::new(&bundle, &OutputPaths::default(), "home");

        assert_eq!(file.relative_path(), "messages/en/home.json");
        file.write(temp.path()).unwrap();

        let written = std::fs::read_to_string(temp.path().join("messages/en/home.json")).unwrap();
        assert_eq!(
            written,
            "{\n  \"component0\": {\n    \"title\": \"Welcome\"\n  }\n}\n"
        );
    }
}
