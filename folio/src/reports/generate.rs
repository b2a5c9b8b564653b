//! Generate command report data structures.

use std::path::PathBuf;

use folio_codegen::{Diagnostic, i18n::TranslationKey};

use super::output::{Output, Report};

/// Report data from page generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Page slug used in output paths.
    pub page: String,

    /// Generated page component name.
    pub component: String,

    /// Target framework of the generator.
    pub framework: &'static str,

    /// Source locale code.
    pub source_locale: String,

    /// Target locale code.
    pub target_locale: String,

    /// Component imports as (binding, module).
    pub imports: Vec<(String, String)>,

    /// Assigned keys in visit order.
    pub keys: Vec<KeyLine>,

    /// Warnings and notes from generation.
    pub diagnostics: Vec<Diagnostic>,

    /// Files written or previewed.
    pub outcome: GenerationOutcome,
}

/// One assigned key with its bundle values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyLine {
    pub key: String,
    pub source: String,
    pub target: String,
}

impl From<&TranslationKey> for KeyLine {
    fn from(key: &TranslationKey) -> Self {
        Self {
            key: key.key.clone(),
            source: key.source_value.clone(),
            target: key.target_value.clone(),
        }
    }
}

/// What happened to the generated files.
#[derive(Debug)]
pub enum GenerationOutcome {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

/// Result when files were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    /// Output directory.
    pub output_dir: PathBuf,
    /// Written files, relative to the output directory.
    pub written: Vec<String>,
    /// Files left untouched.
    pub skipped: Vec<String>,
    /// Backup copies of overwritten files.
    pub backups: Vec<PathBuf>,
}

/// Result of a dry-run preview.
#[derive(Debug)]
pub struct PreviewResult {
    /// Files that would be generated.
    pub files: Vec<PreviewFile>,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    /// File path.
    pub path: String,
    /// File content.
    pub content: String,
}

impl GenerateReport {
    /// Diagnostics with warning severity.
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.severity.is_warning())
    }

    fn render_diagnostics(&self, out: &mut dyn Output) {
        for diag in &self.diagnostics {
            let msg = match &diag.location {
                Some(loc) => format!("{} (at {})", diag.message, loc),
                None => diag.message.clone(),
            };
            if diag.severity.is_warning() {
                out.warning(&msg);
            } else {
                out.note(&msg);
            }
        }
        if !self.diagnostics.is_empty() {
            out.newline();
        }
    }

    fn render_summary(&self, out: &mut dyn Output) {
        out.preformatted(&format!(
            "{} ({}, {} -> {}, {})",
            self.page, self.component, self.source_locale, self.target_locale, self.framework
        ));
        out.newline();

        out.section(&format!("Components ({})", self.imports.len()));
        for (binding, module) in &self.imports {
            out.list_item(&format!("{} from \"{}\"", binding, module));
        }
        out.newline();

        out.section(&format!("Keys ({})", self.keys.len()));
        for key in &self.keys {
            out.list_item(&format!("{} = \"{}\" -> \"{}\"", key.key, key.source, key.target));
        }
        out.newline();
    }

    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        self.render_summary(out);

        out.section(&format!("Generated in {}", written.output_dir.display()));
        for path in &written.written {
            out.added_item(path);
        }
        for path in &written.skipped {
            out.list_item(&format!("{} (unchanged)", path));
        }

        if !written.backups.is_empty() {
            out.newline();
            out.section("Backups");
            for backup in &written.backups {
                out.added_item(&backup.display().to_string());
            }
        }
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewResult) {
        for file in &preview.files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        self.render_summary(out);
        out.preformatted(&format!("{} files would be generated", preview.files.len()));
    }
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        self.render_diagnostics(out);
        match &self.outcome {
            GenerationOutcome::Written(written) => self.render_written(out, written),
            GenerationOutcome::Preview(preview) => self.render_preview(out, preview),
        }
    }
}
