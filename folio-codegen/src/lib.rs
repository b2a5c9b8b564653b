//! Shared page generation for the folio page generator.
//!
//! This crate turns a parsed layout into the framework-independent pieces of
//! a page: component imports, translation keys, and locale bundles. Framework
//! generators (e.g., `folio-codegen-react`) render the page source on top.
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`i18n`] - String extraction, key assignment, dictionary and bundles
//! - [`generation`] - Output management (ImportCollector, FileRegistry)
//! - [`components`] - Component type registry
//! - [`analysis`] - Single-pass layout analysis

pub mod analysis;
pub mod builder;
pub mod components;
pub mod diagnostic;
pub mod generation;
pub mod i18n;
pub mod language;
pub mod paths;

pub use analysis::{
    AnalyzedInstance, GenerateOptions, PageAnalysis, analyze, analyze_with_imports,
};
pub use components::{
    ComponentEntry, ComponentImport, ComponentRegistry, DEFAULT_COMPONENTS_ROOT, Resolution,
    derive_component_name,
};
pub use diagnostic::{Diagnostic, Severity};
pub use language::{GenerationResult, PageCodegen};
pub use paths::OutputPaths;
