use std::path::{Path, PathBuf};

use super::{Config, parse_config};
use crate::Result;

/// Represents a folio.toml file with both raw content and parsed config.
pub struct FolioToml {
    path: PathBuf,
    content: String,
    config: Config,
}

impl FolioToml {
    /// Open and parse a folio.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(crate::Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let config = parse_config(&content, &path.display().to_string())?;

        Ok(Self {
            path,
            content,
            config,
        })
    }

    /// Open `path` if it exists, otherwise fall back to the default config.
    ///
    /// Returns `None` for the file part when the defaults were used.
    pub fn open_or_default(path: impl AsRef<Path>) -> Result<(Option<Self>, Config)> {
        let path = path.as_ref();
        if path.exists() {
            let file = Self::open(path)?;
            let config = file.config.clone();
            Ok((Some(file), config))
        } else {
            Ok((None, Config::default()))
        }
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed config.
    pub fn config(&self) -> &Config {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_open_or_default_without_file() {
        let temp = TempDir::new().unwrap();
        let (file, config) = FolioToml::open_or_default(temp.path().join("folio.toml")).unwrap();

        assert!(file.is_none());
        assert_eq!(config.project.source_locale.as_str(), "zh");
    }

    #[test]
    fn test_open_or_default_with_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("folio.toml");
        std::fs::write(&path, "[project]\ntarget_locale = \"fr\"\n").unwrap();

        let (file, config) = FolioToml::open_or_default(&path).unwrap();

        assert_eq!(file.map(|f| f.path().to_path_buf()), Some(path));
        assert_eq!(config.project.target_locale.as_str(), "fr");
    }

    #[test]
    fn test_open_reports_filename() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("folio.toml");
        std::fs::write(&path, "[project\n").unwrap();

        let err = FolioToml::open(&path).err().unwrap();
        assert!(matches!(*err, crate::Error::Config { .. }));
    }
}
