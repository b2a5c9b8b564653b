mod check;
mod completions;
mod components;
mod generate;
mod init;

use std::path::Path;

use check::CheckCommand;
use clap::{ArgAction, Parser, Subcommand};
use completions::CompletionsCommand;
use components::ComponentsCommand;
use eyre::Result;
use folio_layout::{Config, FolioToml};
use generate::GenerateCommand;
use init::InitCommand;

/// Extension trait for exiting on layout and config errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for folio_layout::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

/// Load `folio.toml`, falling back to defaults when the file does not exist.
pub(crate) fn load_config(path: &Path) -> Config {
    let (file, config) = FolioToml::open_or_default(path).unwrap_or_exit();
    match file {
        Some(file) => tracing::debug!(path = %file.path().display(), "loaded config"),
        None => tracing::debug!(path = %path.display(), "config not found, using defaults"),
    }
    config
}

#[derive(Parser)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "Generate translated Next.js pages from page builder layouts")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Init(cmd) => cmd.run(),
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Components(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create a folio.toml with default settings
    Init(InitCommand),

    /// Generate a page and its locale bundles from a layout
    Generate(GenerateCommand),

    /// Validate a layout and show the keys it would produce
    Check(CheckCommand),

    /// List known component types
    Components(ComponentsCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
