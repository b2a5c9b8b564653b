//! Framework-specific page generation.

use std::path::Path;

use eyre::Result;
use folio_core::{GeneratedFile, Overwrite};
use folio_layout::Layout;

use crate::{
    ComponentImport, Diagnostic, GenerateOptions, OutputPaths,
    generation::{FileEntry, FileRegistry, MessagesJson, PreviewEntry, WriteStats},
    i18n::{KeyTable, LocaleBundle},
};

/// Output of one generation call.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    /// Generated page source.
    pub code: String,
    /// Source-locale message tree.
    pub source_bundle: LocaleBundle,
    /// Target-locale message tree.
    pub target_bundle: LocaleBundle,
    /// Assigned keys in visit order.
    pub keys: KeyTable,
    /// Distinct component imports in first-use order.
    pub imports: Vec<ComponentImport>,
    /// Warnings and notes.
    pub diagnostics: Vec<Diagnostic>,
}

impl GenerationResult {
    /// Diagnostics with warning severity.
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.severity.is_warning())
    }

    pub fn has_warnings(&self) -> bool {
        self.warnings().next().is_some()
    }
}

/// Trait for page generators targeting one UI framework.
pub trait PageCodegen {
    /// Framework identifier (e.g., "next-intl")
    fn framework(&self) -> &'static str;

    /// File extension for generated page sources (e.g., "tsx")
    fn file_extension(&self) -> &'static str;

    /// Generate page source and bundles for `layout`.
    fn generate(&self, layout: &Layout, options: &GenerateOptions) -> Result<GenerationResult>;

    /// Files for a generation result. Bundles come first; when both locales
    /// are the same only one bundle is written.
    fn files(
        &self,
        result: &GenerationResult,
        options: &GenerateOptions,
        paths: &OutputPaths,
    ) -> FileRegistry {
        let slug = options.page_slug();
        let mut registry = FileRegistry::new();

        let source = MessagesJson::new(&result.source_bundle, paths, &slug);
        registry.register(FileEntry::messages(source.relative_path(), source.render()));
        if result.target_bundle.locale() != result.source_bundle.locale() {
            let target = MessagesJson::new(&result.target_bundle, paths, &slug);
            registry.register(FileEntry::messages(target.relative_path(), target.render()));
        }
        registry.register(FileEntry::page(
            paths.page_file(&slug, self.file_extension()),
            result.code.as_str(),
        ));

        registry
    }

    /// Preview generated files without writing to disk
    fn preview(
        &self,
        result: &GenerationResult,
        options: &GenerateOptions,
        paths: &OutputPaths,
    ) -> Vec<PreviewEntry> {
        self.files(result, options, paths).preview()
    }

    /// Write generated files below `output_dir`
    fn write(
        &self,
        result: &GenerationResult,
        options: &GenerateOptions,
        paths: &OutputPaths,
        output_dir: &Path,
        overwrite: Overwrite,
    ) -> Result<WriteStats> {
        self.files(result, options, paths)
            .write_all(output_dir, overwrite)
    }
}
