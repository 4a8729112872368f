pub mod args;
pub mod flow;
pub mod harness;
pub mod logging;

pub use flow::FlowError;
pub use harness::{BenchmarkResult, Harness, HarnessError};
