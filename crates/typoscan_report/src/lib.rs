//! typoscan_report: Annotated rendering of analyzed source.
//!
//! Turns an aggregated report plus the original source lines into a
//! line-indexed annotated document, and emits that document as an HTML
//! report with each flagged identifier marked and carrying its suggestion
//! list as hover metadata.
//!
//! Positional correctness is the load-bearing property here: markers wrap
//! exactly the byte range the aggregator recorded, spliced right-to-left so
//! earlier columns stay valid while later ones are consumed. Text search
//! over the line is never used to locate a word.

mod document;
mod error;
mod html;
mod plan;

pub use document::{annotate, AnnotatedDocument, AnnotatedLine, Segment};
pub use error::ReportError;
pub use html::{render_html, write_report};
pub use plan::{annotation_plan, LineMark};
