//! Components command report data structures.

use folio_codegen::{ComponentRegistry, Resolution};

use super::output::{Output, Report};

/// Registered component types.
#[derive(Debug)]
pub struct ComponentsReport {
    /// Module root used for unknown types.
    pub fallback_root: String,
    /// Registered types in registration order.
    pub entries: Vec<ComponentLine>,
}

/// One registered component type.
#[derive(Debug)]
pub struct ComponentLine {
    pub kind: String,
    pub name: String,
    pub module: String,
    pub resolution: Resolution,
}

impl ComponentsReport {
    pub fn from_registry(registry: &ComponentRegistry) -> Self {
        Self {
            fallback_root: registry.fallback_root().to_string(),
            entries: registry
                .iter()
                .map(|(kind, entry)| ComponentLine {
                    kind: kind.to_string(),
                    name: entry.name.clone(),
                    module: entry.module.clone(),
                    resolution: entry.resolution,
                })
                .collect(),
        }
    }
}

impl Report for ComponentsReport {
    fn render(&self, out: &mut dyn Output) {
        let width = self
            .entries
            .iter()
            .map(|e| e.kind.len())
            .max()
            .unwrap_or(0);

        out.section(&format!("Components ({})", self.entries.len()));
        for entry in &self.entries {
            let origin = match entry.resolution {
                Resolution::Builtin => String::new(),
                other => format!(" [{}]", other),
            };
            out.list_item(&format!(
                "{:width$}  {} from \"{}\"{}",
                entry.kind, entry.name, entry.module, origin
            ));
        }
        out.newline();
        out.key_value("Unknown types import from", &self.fallback_root);
    }
}
