//! Report data structures for commands.
//!
//! This module provides data structures that separate data collection from rendering.
//! Commands build reports, then render them to an Output target.

mod check;
mod components;
mod generate;
mod output;

pub use check::CheckReport;
pub use components::ComponentsReport;
pub use generate::{
    GenerateReport, GenerationOutcome, KeyLine, PreviewFile, PreviewResult, WrittenResult,
};
pub use output::{Report, TerminalOutput};
