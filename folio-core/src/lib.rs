//! Core utilities and types for the folio page generator.
//!
//! This crate provides fundamental types and utilities used across
//! the folio workspace.

mod file;
mod locale;
mod utils;

// File operations
pub use file::{File, FileRules, GeneratedFile, Overwrite, WriteResult};
// Locale codes
pub use locale::{Locale, LocaleError};
// String utilities
pub use utils::{is_js_identifier, to_kebab_case, to_pascal_case};
