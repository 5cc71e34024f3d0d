//! Report generation for release resolution runs.
//!
//! - **Text**: the sectioned results file written next to the inputs
//! - **JSON**: the same content as a machine-readable document

mod context;
mod json;
mod output;
mod text;

pub use context::ReportContext;
pub use json::render_json;
pub use output::write_report;
pub use text::{REPORT_TITLE, render_text};
