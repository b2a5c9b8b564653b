//! Internationalization: string extraction, key assignment, translation and bundles.
//!
//! - [`Script`] - Decides which strings are translatable
//! - [`KeyAssigner`] - Hands out `component<index>` key scopes
//! - [`extract_props`] - Annotates a property bag with keys
//! - [`Dictionary`] - Static phrase table for the target locale
//! - [`LocaleBundle`] - Nested JSON message tree

mod bundle;
mod dictionary;
mod extract;
mod keys;
mod script;

pub use bundle::{LocaleBundle, escape_icu};
pub use dictionary::Dictionary;
pub use extract::{ExtractedString, Extraction, PropNode, extract_props};
pub use keys::{
    ComponentScope, KeyAssigner, KeyPath, KeyTable, PathSegment, TranslationKey, escape_segment,
};
pub use script::Script;
