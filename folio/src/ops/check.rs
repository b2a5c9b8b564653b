//! Check operation - layout validation without writing.

use std::path::Path;

use eyre::{Context, Result};
use folio_codegen::GenerateOptions;
use folio_codegen_react::Generator;
use folio_layout::{Config, Layout};

use crate::reports::{CheckReport, KeyLine};

/// Execute the check operation.
///
/// Analyzes the layout and returns the keys and diagnostics it would produce.
pub fn check(
    layout: &Layout,
    config: &Config,
    options: &GenerateOptions,
    layout_path: &Path,
) -> Result<CheckReport> {
    let analysis = Generator::from_config(config)
        .analyze(layout, options)
        .wrap_err("Validation failed")?;

    let mut warnings = Vec::new();
    let mut infos = Vec::new();
    for diag in &analysis.diagnostics {
        let msg = match &diag.location {
            Some(loc) => format!("{}\n  --> {}", diag.message, loc),
            None => diag.message.clone(),
        };
        if diag.severity.is_warning() {
            warnings.push(msg);
        } else {
            infos.push(msg);
        }
    }

    Ok(CheckReport {
        layout_path: layout_path.to_path_buf(),
        component_count: analysis.instances.len(),
        keys: analysis.keys.iter().map(KeyLine::from).collect(),
        warnings,
        infos,
    })
}

#[cfg(test)]
mod tests {
    use folio_layout::ComponentInstance;

    use super::*;

    #[test]
    fn test_check_collects_keys_and_diagnostics() {
        let layout = Layout::new(vec![
            ComponentInstance::new("h1", "hero-simple").prop("title", "欢迎"),
            ComponentInstance::new("x", "promo-ribbon").prop("text", "限时优惠"),
        ]);
        let config = Config::default();
        let options = GenerateOptions::from_config("home", &config);

        let report = check(&layout, &config, &options, Path::new("home.json")).unwrap();

        assert_eq!(report.component_count, 2);
        assert_eq!(report.keys.len(), 2);
        assert_eq!(report.keys[0].key, "component0.title");
        assert_eq!(report.keys[0].target, "Welcome");
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].ends_with("--> x"));
        assert_eq!(report.infos.len(), 1);
    }

    #[test]
    fn test_check_rejects_duplicate_ids() {
        let layout = Layout::new(vec![
            ComponentInstance::new("a", "hero-simple"),
            ComponentInstance::new("a", "footer-simple"),
        ]);
        let config = Config::default();
        let options = GenerateOptions::from_config("home", &config);

        let err = check(&layout, &config, &options, Path::new("home.json")).unwrap_err();
        assert_eq!(err.to_string(), "Validation failed");
    }
}
