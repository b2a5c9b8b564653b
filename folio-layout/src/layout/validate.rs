//! Structural validation of parsed layouts.

use std::collections::HashMap;

use miette::SourceSpan;

use super::Layout;
use crate::{Result, error::SourceContext};

/// Check the invariants serde cannot express: non-empty ids and types,
/// and ids unique across the layout.
pub(crate) fn validate_layout(layout: &Layout, ctx: &SourceContext) -> Result<()> {
    let mut seen: HashMap<&str, usize> = HashMap::new();

    for (index, component) in layout.components.iter().enumerate() {
        if component.id.trim().is_empty() {
            return Err(ctx.validation_error_at(
                format!("component {} has an empty id", index),
                find_field_span(ctx.src(), "id", &component.id, 0),
            ));
        }

        if component.kind.trim().is_empty() {
            return Err(ctx.validation_error_at(
                format!("component '{}' has an empty type", component.id),
                find_field_span(ctx.src(), "type", &component.kind, 0),
            ));
        }

        if seen.insert(component.id.as_str(), index).is_some() {
            return Err(ctx.duplicate_id_error(
                &component.id,
                find_field_span(ctx.src(), "id", &component.id, 0),
                find_field_span(ctx.src(), "id", &component.id, 1),
            ));
        }
    }

    Ok(())
}

/// Find the span of the `nth` occurrence of `"field": "value"` in JSON source.
///
/// Whitespace around the colon is allowed. The span covers the quoted value.
pub(crate) fn find_field_span(
    src: &str,
    field: &str,
    value: &str,
    nth: usize,
) -> Option<SourceSpan> {
    let key = format!("\"{}\"", field);
    let quoted = serde_json::to_string(value).ok()?;

    let mut found = 0;
    let mut search_from = 0;
    while let Some(pos) = src[search_from..].find(&key) {
        let after_key = search_from + pos + key.len();
        search_from = after_key;

        let rest = &src[after_key..];
        let Some(rest) = rest.trim_start().strip_prefix(':') else {
            continue;
        };
        let value_rest = rest.trim_start();
        if value_rest.starts_with(&quoted) {
            if found == nth {
                let start = src.len() - value_rest.len();
                return Some(SourceSpan::from((start, quoted.len())));
            }
            found += 1;
        }
    }

    None
}
