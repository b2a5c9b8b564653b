//! Page file generators.

mod page_tsx;

pub use folio_codegen::generation::MessagesJson;
pub use page_tsx::{NEXT_INTL, PageTsx, USE_TRANSLATIONS, page_imports};
