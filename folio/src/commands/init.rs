use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use folio_codegen::generation::{CONFIG_FILE_NAME, FolioTomlFile};
use folio_core::{GeneratedFile, Overwrite, WriteResult};

#[derive(Args)]
pub struct InitCommand {
    /// Directory to create folio.toml in (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Overwrite an existing folio.toml
    #[arg(long)]
    pub force: bool,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        let overwrite = if self.force {
            Overwrite::Always
        } else {
            Overwrite::IfMissing
        };
        let file = FolioTomlFile::new().with_overwrite(overwrite);
        let path = file.path(&self.output);

        match file
            .write(&self.output)
            .wrap_err_with(|| format!("Failed to write {}", path.display()))?
        {
            WriteResult::Skipped => {
                println!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                );
            }
            WriteResult::Written | WriteResult::Replaced { .. } => {
                println!("Created {}", path.display());
                println!();
                println!("Next steps:");
                println!("  edit {} to set locales and paths", CONFIG_FILE_NAME);
                println!("  folio generate <layout.json>");
            }
        }

        Ok(())
    }
}
