//! Code generation outputs and file management.
//!
//! - [`ImportCollector`] - Import tracking and deduplication
//! - [`FileRegistry`] - Declarative file registration and writing
//! - [`MessagesJson`] - Locale bundle file
//! - [`FolioTomlFile`] - Project configuration scaffold

mod folio_toml;
mod imports;
mod messages_json;
mod registry;

pub use folio_toml::{CONFIG_FILE_NAME, FolioTomlFile};
pub use imports::{ImportCollector, ModuleImports};
pub use messages_json::MessagesJson;
pub use registry::{FileCategory, FileEntry, FileRegistry, PreviewEntry, WriteStats};
