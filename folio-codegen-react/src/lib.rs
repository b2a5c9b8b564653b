//! Next.js page generator for the folio page generator.
//!
//! This crate turns a page layout into a [Next.js](https://nextjs.org/) App
//! Router page whose visible text is looked up through
//! [next-intl](https://next-intl.dev/), plus the source and target locale
//! message bundles.
//!
//! # Usage
//!
//! ```ignore
//! use folio_codegen::{GenerateOptions, OutputPaths, PageCodegen};
//! use folio_codegen_react::Generator;
//! use folio_layout::LayoutFile;
//!
//! let file = LayoutFile::open("pricing.json")?;
//! let options = GenerateOptions::new("pricing");
//! let result = Generator::new().generate(file.layout(), &options)?;
//!
//! // Preview files without writing
//! let files = Generator::new().preview(&result, &options, &OutputPaths::default());
//! ```
//!
//! # Generated Output
//!
//! - `app/[locale]/<page>/page.tsx` - Page component
//! - `messages/<source>/<page>.json` - Source locale bundle
//! - `messages/<target>/<page>.json` - Target locale bundle

mod code_file;
mod generator;
mod props;

pub mod ast;
pub mod files;

pub use ast::{FunctionComponent, Import, JsExpr, JsObject, JsxElement};
pub use code_file::CodeFile;
pub use folio_codegen::language::{GenerationResult, PageCodegen};
pub use generator::Generator;
pub use props::{TRANSLATE_FN, instance_element, prop_expr, translate_call};
