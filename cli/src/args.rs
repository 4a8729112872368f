//! Command-line arguments for the `websudoku` and `intense` binaries.

use clap::{ArgAction, Args, Parser};
use websudoku_core::Puzzle;
use websudoku_providers::config::{
    ClientConfig, DEFAULT_LEVEL, DEFAULT_SOLVER_URL, DEFAULT_SOURCE_URL, DEFAULT_TIMEOUT_SECS,
    SourceConfig,
};

/// Puzzle sent by every benchmark request unless overridden.
pub const BENCHMARK_PUZZLE: &str =
    "700000600060001070804020005000470000089000340000039000600050709010300020003000004";

pub const DEFAULT_REQUESTS: usize = 10_000;

/// Solver service connection flags shared by both binaries.
#[derive(Args, Debug, Clone)]
pub struct SolverArgs {
    /// Base URL of the solver API.
    #[arg(long = "url", value_name = "URL", default_value = DEFAULT_SOLVER_URL)]
    pub solver_url: String,

    /// Per-request timeout in seconds.
    #[arg(long, value_name = "SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl SolverArgs {
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            solver_url: self.solver_url.clone(),
            timeout_secs: self.timeout,
        }
    }
}

/// Fetch an evil puzzle from websudoku.com and solve it.
#[derive(Parser, Debug)]
#[command(name = "websudoku", version)]
pub struct RunArgs {
    #[command(flatten)]
    pub solver: SolverArgs,

    /// Entry page of the puzzle source.
    #[arg(long, value_name = "URL", default_value = DEFAULT_SOURCE_URL)]
    pub source: String,

    /// Puzzle difficulty, 1 (easy) to 4 (evil).
    #[arg(long, default_value_t = DEFAULT_LEVEL, value_parser = clap::value_parser!(u8).range(1..=4))]
    pub level: u8,
}

impl RunArgs {
    pub fn source_config(&self) -> SourceConfig {
        SourceConfig {
            source_url: self.source.clone(),
            level: self.level,
        }
    }
}

/// Hammer the solver service with concurrent solve requests.
#[derive(Parser, Debug)]
#[command(name = "intense", version)]
pub struct IntenseArgs {
    #[command(flatten)]
    pub solver: SolverArgs,

    /// Number of solve requests to send.
    #[arg(short = 'n', long = "nbreq", value_name = "N", default_value_t = DEFAULT_REQUESTS)]
    pub requests: usize,

    /// Concurrent workers [default: available parallelism].
    #[arg(short, long, value_name = "W", value_parser = parse_workers)]
    pub workers: Option<usize>,

    /// Puzzle to solve, 81 digits with 0 or . for empty cells.
    #[arg(short, long, default_value = BENCHMARK_PUZZLE)]
    pub puzzle: Puzzle,
}

fn parse_workers(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("worker count must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}
