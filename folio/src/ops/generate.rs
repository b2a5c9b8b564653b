//! Generate operation - page and bundles from a layout.

use std::path::Path;

use eyre::{Context, Result};
use folio_codegen::{GenerateOptions, OutputPaths, PageCodegen};
use folio_codegen_react::Generator;
use folio_core::Overwrite;
use folio_layout::{Config, Layout};

use crate::reports::{
    GenerateReport, GenerationOutcome, KeyLine, PreviewFile, PreviewResult, WrittenResult,
};

/// Options for persisting the generated files.
pub struct WriteOptions<'a> {
    /// Output directory for generated files.
    pub output_dir: &'a Path,
    /// Whether to preview without writing files.
    pub dry_run: bool,
    /// How existing files are treated.
    pub overwrite: Overwrite,
}

/// Execute the generate operation.
///
/// Generates the page for `layout` and either previews or writes the files.
pub fn generate(
    layout: &Layout,
    config: &Config,
    options: &GenerateOptions,
    write: WriteOptions,
) -> Result<GenerateReport> {
    let generator = Generator::from_config(config);
    let result = generator
        .generate(layout, options)
        .wrap_err("Failed to generate page")?;
    let paths = OutputPaths::from_config(&config.paths);

    let outcome = if write.dry_run {
        let files = generator
            .preview(&result, options, &paths)
            .into_iter()
            .map(|f| PreviewFile {
                path: f.path,
                content: f.content,
            })
            .collect();
        GenerationOutcome::Preview(PreviewResult { files })
    } else {
        let stats = generator
            .write(&result, options, &paths, write.output_dir, write.overwrite)
            .wrap_err("Failed to write generated files")?;
        GenerationOutcome::Written(WrittenResult {
            output_dir: write.output_dir.to_path_buf(),
            written: stats.written_paths,
            skipped: stats.skipped_paths,
            backups: stats.backups,
        })
    };

    Ok(GenerateReport {
        page: options.page_slug(),
        component: options.component_name(),
        framework: generator.framework(),
        source_locale: options.source_locale.to_string(),
        target_locale: options.target_locale.to_string(),
        imports: result
            .imports
            .iter()
            .map(|i| (i.binding.clone(), i.module.clone()))
            .collect(),
        keys: result.keys.iter().map(KeyLine::from).collect(),
        diagnostics: result.diagnostics,
        outcome,
    })
}
