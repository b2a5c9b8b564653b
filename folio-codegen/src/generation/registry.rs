//! File registration for declarative output writing.
//!
//! Generators register every output file with its category; the caller then
//! previews or writes the whole set.
//!
//! # Example
//!
//! ```ignore
//! let mut registry = FileRegistry::new();
//! registry.register(FileEntry::page("app/[locale]/pricing/page.tsx", code));
//! registry.register(FileEntry::messages("messages/zh/pricing.json", source));
//! registry.write_all(&output_dir, Overwrite::Backup)?;
//! ```

use std::path::{Path, PathBuf};

use eyre::Result;
use folio_core::{File, Overwrite, WriteResult};

/// Category of generated file, determining write order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FileCategory {
    /// Locale bundles, written first so a page never references missing messages.
    Messages,
    /// Page source files.
    Page,
}

/// An entry in the file registry representing a file to be generated.
#[derive(Debug, Clone)]
pub struct FileEntry {
    /// Relative path from output directory.
    pub path: String,
    /// File content.
    pub content: String,
    /// Category determining write order.
    pub category: FileCategory,
}

impl FileEntry {
    /// Create a new file entry with the given category.
    pub fn new(
        path: impl Into<String>,
        content: impl Into<String>,
        category: FileCategory,
    ) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            category,
        }
    }

    /// Create a page source entry.
    pub fn page(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(path, content, FileCategory::Page)
    }

    /// Create a locale bundle entry.
    pub fn messages(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(path, content, FileCategory::Messages)
    }

    /// Get the full path for this entry.
    pub fn full_path(&self, base: &Path) -> PathBuf {
        base.join(&self.path)
    }

    /// Write this file to disk.
    pub fn write(&self, base: &Path, overwrite: Overwrite) -> Result<WriteResult> {
        File::new(self.full_path(base), self.content.as_str())
            .with_overwrite(overwrite)
            .write()
    }
}

/// Registry for collecting and managing generated files.
#[derive(Debug, Default)]
pub struct FileRegistry {
    entries: Vec<FileEntry>,
}

impl FileRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a file entry.
    pub fn register(&mut self, entry: FileEntry) {
        self.entries.push(entry);
    }

    /// Get all registered entries, sorted by category (stable within a category).
    pub fn entries(&self) -> impl Iterator<Item = &FileEntry> {
        let mut sorted: Vec<_> = self.entries.iter().collect();
        sorted.sort_by_key(|e| e.category);
        sorted.into_iter()
    }

    /// Get the number of registered entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Preview all files (returns path and content pairs).
    pub fn preview(&self) -> Vec<PreviewEntry> {
        self.entries()
            .map(|e| PreviewEntry {
                path: e.path.clone(),
                content: e.content.clone(),
                category: e.category,
            })
            .collect()
    }

    /// Write all files to the output directory.
    ///
    /// Files are written in category order. Returns statistics about what was written.
    pub fn write_all(&self, base: &Path, overwrite: Overwrite) -> Result<WriteStats> {
        let mut stats = WriteStats::default();

        for entry in self.entries() {
            match entry.write(base, overwrite)? {
                WriteResult::Written => stats.written_paths.push(entry.path.clone()),
                WriteResult::Skipped => stats.skipped_paths.push(entry.path.clone()),
                WriteResult::Replaced { backup } => {
                    stats.written_paths.push(entry.path.clone());
                    stats.backups.push(backup);
                }
            }
        }

        tracing::debug!(
            written = stats.written_paths.len(),
            skipped = stats.skipped_paths.len(),
            backups = stats.backups.len(),
            "wrote generated files"
        );
        Ok(stats)
    }
}

/// A preview entry for displaying what would be generated.
#[derive(Debug, Clone)]
pub struct PreviewEntry {
    /// Relative path from output directory.
    pub path: String,
    /// File content.
    pub content: String,
    /// File category.
    pub category: FileCategory,
}

/// Statistics from a write operation.
#[derive(Debug, Default)]
pub struct WriteStats {
    /// Paths of written files (relative).
    pub written_paths: Vec<String>,
    /// Paths of skipped files (relative).
    pub skipped_paths: Vec<String>,
    /// Backup copies made before overwriting.
    pub backups: Vec<PathBuf>,
}

impl WriteStats {
    /// Total number of files processed.
    pub fn total(&self) -> usize {
        self.written_paths.len() + self.skipped_paths.len()
    }
}
