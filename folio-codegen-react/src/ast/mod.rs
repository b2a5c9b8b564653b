//! TSX AST builders for imports, expressions, JSX and components.
//!
//! These provide a high-level API for constructing page source,
//! which can then be rendered via CodeBuilder.

mod component;
mod expr;
mod imports;
mod jsx;

pub use component::FunctionComponent;
pub use expr::{JsArray, JsExpr, JsObject, quote};
pub use imports::Import;
pub use jsx::{AttrValue, JsxAttribute, JsxChild, JsxElement, MAX_INLINE_WIDTH};
