use std::path::{Path, PathBuf};

use super::Layout;
use crate::Result;

/// A layout file on disk with both raw content and parsed layout.
pub struct LayoutFile {
    path: PathBuf,
    content: String,
    layout: Layout,
}

impl LayoutFile {
    /// Open and parse a layout file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(crate::Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let layout = Layout::from_str_with_filename(&content, &filename)?;

        Ok(Self {
            path,
            content,
            layout,
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed layout.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Page name: the layout's own name, else the file stem.
    pub fn page_name(&self) -> Option<String> {
        self.layout.name.clone().or_else(|| {
            self.path
                .file_stem()
                .and_then(|s| s.to_str())
                .map(str::to_string)
        })
    }
}
