use thiserror::Error;
use websudoku_core::CodecError;

/// Failure of a single call to the solver service.
#[derive(Error, Debug)]
pub enum SolverError {
    /// Connection refused, timeout, non-2xx status or an undecodable body.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("{0}")]
    Rejected(String),

    /// The service reported success but the payload is not an 81-digit grid.
    #[error("Invalid solution: {0}")]
    InvalidSolution(String),

    /// The service reported success but the display payload is unusable.
    #[error("Invalid display: {0}")]
    InvalidDisplay(#[from] CodecError),
}

/// Failure to obtain a puzzle from the external puzzle page.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Source unavailable: {0}")]
    Unavailable(String),

    #[error("Source unavailable: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("Unexpected page structure: {0}")]
    Parse(String),

    #[error("Invalid puzzle on page: {0}")]
    Codec(#[from] CodecError),
}
