//! Project configuration file written by `folio init`.

use std::path::{Path, PathBuf};

use folio_core::{FileRules, GeneratedFile, Overwrite};
use folio_layout::CONFIG_TEMPLATE;

/// File name of the project configuration.
pub const CONFIG_FILE_NAME: &str = "folio.toml";

/// The folio.toml configuration file.
pub struct FolioTomlFile {
    pub overwrite: Overwrite,
}

impl FolioTomlFile {
    /// A config file that is only created when missing.
    pub fn new() -> Self {
        Self {
            overwrite: Overwrite::IfMissing,
        }
    }

    pub fn with_overwrite(mut self, overwrite: Overwrite) -> Self {
        self.overwrite = overwrite;
        self
    }
}

impl Default for FolioTomlFile {
    fn default() -> Self {
        Self::new()
    }
}

impl GeneratedFile for FolioTomlFile {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(CONFIG_FILE_NAME)
    }

    fn rules(&self) -> FileRules {
        FileRules {
            overwrite: self.overwrite,
        }
    }

    fn render(&self) -> String {
        CONFIG_TEMPLATE.to_string()
    }
}

#[cfg(test)]
mod tests {
    use folio_core::WriteResult;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_template_parses() {
        let config = folio_layout::parse_config(&FolioTomlFile::new().render(), CONFIG_FILE_NAME);
        assert!(config.is_ok());
    }

    #[test]
    fn test_existing_config_is_kept() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(CONFIG_FILE_NAME), "[project]\n").unwrap();

        let result = FolioTomlFile::new().write(temp.path()).unwrap();

        assert_eq!(result, WriteResult::Skipped);
        assert_eq!(
            std::fs::read_to_string(temp.path().join(CONFIG_FILE_NAME)).unwrap(),
            "[project]\n"
        );
    }

    #[test]
    fn test_force_overwrites() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(CONFIG_FILE_NAME), "[project]\n").unwrap();

        let result = FolioTomlFile::new()
            .with_overwrite(Overwrite::Always)
            .write(temp.path())
            .unwrap();

        assert_eq!(result, WriteResult::Written);
        assert!(
            std::fs::read_to_string(temp.path().join(CONFIG_FILE_NAME))
                .unwrap()
                .contains("source_locale")
        );
    }
}
