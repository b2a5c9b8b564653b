use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use folio_codegen::ComponentRegistry;

use super::load_config;
use crate::reports::{ComponentsReport, Report, TerminalOutput};

#[derive(Args)]
pub struct ComponentsCommand {
    /// Path to folio.toml (defaults to ./folio.toml)
    #[arg(short, long, default_value = "folio.toml")]
    pub config: PathBuf,
}

impl ComponentsCommand {
    pub fn run(&self) -> Result<()> {
        let config = load_config(&self.config);
        let registry = ComponentRegistry::from_config(&config);

        ComponentsReport::from_registry(&registry).render(&mut TerminalOutput::new());
        Ok(())
    }
}
