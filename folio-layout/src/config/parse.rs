//! Config parsing and validation.

use std::str::FromStr;

use super::Config;
use crate::{Error, Result, error::SourceContext, find_span};

impl FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_config(s, "folio.toml")
    }
}

/// Parse a folio.toml from content with the given filename for error reporting.
pub fn parse_config(content: &str, filename: &str) -> Result<Config> {
    let source_ctx = SourceContext::new(content, filename);
    let config: Config = toml::from_str(content).map_err(|e| source_ctx.toml_error(e))?;
    validate_config(&config, &source_ctx)?;
    Ok(config)
}

fn validate_config(config: &Config, ctx: &SourceContext) -> Result<()> {
    if let Some(namespace) = &config.project.namespace {
        if namespace.split('.').any(|segment| segment.trim().is_empty()) {
            return Err(ctx.validation_error_at(
                format!("invalid namespace '{}'", namespace),
                find_span(ctx.src(), namespace),
            ));
        }
    }

    for (kind, component) in &config.components {
        if component.import.trim().is_empty() {
            return Err(ctx.validation_error_at(
                format!("component '{}' has an empty import path", kind),
                find_span(ctx.src(), kind),
            ));
        }
        if let Some(name) = &component.name {
            if !folio_core::is_js_identifier(name) {
                return Err(ctx.validation_error_at(
                    format!(
                        "component name '{}' for '{}' is not a valid identifier",
                        name, kind
                    ),
                    find_span(ctx.src(), name),
                ));
            }
        }
    }

    Ok(())
}
