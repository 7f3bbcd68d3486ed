//! Report-side error types.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure while writing the rendered report.
///
/// Fatal for the render step only: the aggregated summary has already been
/// computed (and emitted) by the time rendering runs.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to write report to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
