//! Check command report data structures.

use std::path::PathBuf;

use super::{
    KeyLine,
    output::{Output, Report},
};

/// Report data from layout validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the layout file.
    pub layout_path: PathBuf,
    /// Number of component instances.
    pub component_count: usize,
    /// Keys the layout would produce.
    pub keys: Vec<KeyLine>,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Info messages.
    pub infos: Vec<String>,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        for info in &self.infos {
            out.note(info);
        }

        if !self.warnings.is_empty() || !self.infos.is_empty() {
            out.newline();
        }

        out.preformatted(&format!("✓ {} is valid", self.layout_path.display()));
        out.newline();
        out.preformatted(&format!(
            "  {} component{}, {} key{}",
            self.component_count,
            if self.component_count == 1 { "" } else { "s" },
            self.keys.len(),
            if self.keys.len() == 1 { "" } else { "s" }
        ));
        for key in &self.keys {
            out.list_item(&format!("{} = \"{}\"", key.key, key.source));
        }
    }
}
