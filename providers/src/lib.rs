pub mod config;
pub mod formats;
pub mod solver;
pub mod source;
pub mod util;

mod errors;
pub use errors::{SolverError, SourceError};

pub use config::{ClientConfig, SourceConfig};
pub use solver::{Solver, SolverClient, SolverResponse};
pub use source::{PuzzleSource, WebSudoku};

#[cfg(test)]
mod test_server;
