//! Layout and configuration parsing for the folio page generator.
//!
//! A layout is the JSON document exported by the visual page builder: an
//! ordered list of component instances, each with a type and a property bag.
//! The project configuration lives in `folio.toml`.
//!
//! Errors are [`miette`] diagnostics pointing into the offending source.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod error;
mod layout;

use miette::SourceSpan;

pub use config::{
    CONFIG_TEMPLATE, ComponentOverride, Config, FolioToml, PathsConfig, ProjectConfig,
    parse_config,
};
pub use error::{Error, Result, SourceContext};
pub use folio_core::Locale;
pub use layout::{ComponentInstance, Layout, LayoutFile, PropValue, Props};

/// Find the first occurrence of `needle` in the source (less precise fallback for spans).
pub(crate) fn find_span(src: &str, needle: &str) -> Option<SourceSpan> {
    if needle.is_empty() {
        return None;
    }
    src.find(needle)
        .map(|pos| SourceSpan::from((pos, needle.len())))
}
