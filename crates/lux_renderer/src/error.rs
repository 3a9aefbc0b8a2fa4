//! Render errors.

use std::fmt;
use std::ops::Range;

use thiserror::Error;

/// A worker that did not complete its rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerFailure {
    /// Index of the failed worker
    pub worker: usize,
    /// Rows the worker was assigned and did not finish
    pub rows: Range<u32>,
    /// Why the worker stopped
    pub reason: String,
}

impl fmt::Display for WorkerFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "worker {} (rows {}..{}): {}",
            self.worker, self.rows.start, self.rows.end, self.reason
        )
    }
}

/// Errors that can occur while rendering.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Invalid render config: {0}")]
    InvalidConfig(String),

    #[error("Invalid image dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Band for rows {}..{} needs {expected} bytes, got {actual}", .rows.start, .rows.end)]
    BandSize {
        rows: Range<u32>,
        expected: usize,
        actual: usize,
    },

    #[error("Could not allocate a {bytes} byte pixel buffer")]
    Allocation { bytes: usize },

    #[error("Could not start worker pool: {0}")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),

    #[error("{} worker(s) failed: {}", .0.len(), join_failures(.0))]
    WorkersFailed(Vec<WorkerFailure>),
}

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;

fn join_failures(failures: &[WorkerFailure]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
