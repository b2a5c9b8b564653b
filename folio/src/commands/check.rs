use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use folio_codegen::GenerateOptions;
use folio_layout::LayoutFile;

use super::{UnwrapOrExit, load_config};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Layout exported from the page builder
    pub layout: PathBuf,

    /// Path to folio.toml (defaults to ./folio.toml)
    #[arg(short, long, default_value = "folio.toml")]
    pub config: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let config = load_config(&self.config);
        let layout_file = LayoutFile::open(&self.layout).unwrap_or_exit();
        let page_name = layout_file
            .page_name()
            .unwrap_or_else(|| "page".to_string());
        let options = GenerateOptions::from_config(page_name, &config);

        let report = ops::check(layout_file.layout(), &config, &options, &self.layout)?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
