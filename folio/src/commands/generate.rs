use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use folio_codegen::GenerateOptions;
use folio_core::{Locale, Overwrite};
use folio_layout::LayoutFile;

use super::{UnwrapOrExit, load_config};
use crate::{
    ops::{self, WriteOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Layout exported from the page builder
    pub layout: PathBuf,

    /// Page name (defaults to the layout's name, then the file name)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Target locale (overrides folio.toml setting)
    #[arg(short, long)]
    pub target: Option<Locale>,

    /// Path to folio.toml (defaults to ./folio.toml)
    #[arg(short, long, default_value = "folio.toml")]
    pub config: PathBuf,

    /// Output directory (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Preview generated files without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Copy existing files to <file>.bak (numbered when taken) before overwriting them
    #[arg(long)]
    pub backup: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let mut config = load_config(&self.config);
        if let Some(target) = &self.target {
            config.project.target_locale = target.clone();
        }

        let layout_file = LayoutFile::open(&self.layout).unwrap_or_exit();
        let page_name = self
            .name
            .clone()
            .or_else(|| layout_file.page_name())
            .unwrap_or_else(|| "page".to_string());
        let options = GenerateOptions::from_config(page_name, &config);

        let overwrite = if self.backup {
            Overwrite::Backup
        } else {
            Overwrite::Always
        };
        let report = ops::generate(
            layout_file.layout(),
            &config,
            &options,
            WriteOptions {
                output_dir: &self.output,
                dry_run: self.dry_run,
                overwrite,
            },
        )?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
