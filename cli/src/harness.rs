//! Concurrent benchmark harness.
//!
//! Sends the same puzzle to a [`Solver`] `N` times with at most `W` requests
//! in flight, then reports how many came back solved and how long the whole
//! run took. A failed request is counted, never fatal; the report is only
//! produced once every request has returned.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tokio::sync::{AcquireError, Semaphore};
use tokio::task::{JoinError, JoinSet};
use tokio::time::Instant;
use websudoku_core::Puzzle;
use websudoku_providers::Solver;

#[derive(Error, Debug)]
pub enum HarnessError {
    #[error("Worker pool size must be at least 1, got {0}")]
    InvalidPoolSize(usize),

    #[error("Failed to start worker pool: {0}")]
    Runtime(#[from] std::io::Error),

    #[error("Failed to dispatch solve request: {0}")]
    Dispatch(#[from] AcquireError),
}

/// Number of processing units on this host, falling back to 4.
pub fn default_workers() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(4)
}

fn check_pool_size(workers: usize) -> Result<(), HarnessError> {
    if workers == 0 {
        return Err(HarnessError::InvalidPoolSize(workers));
    }
    Ok(())
}

/// Build the multi-threaded runtime the workers run on, one thread per worker.
pub fn runtime(workers: usize) -> Result<tokio::runtime::Runtime, HarnessError> {
    check_pool_size(workers)?;
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(workers)
        .thread_name("intense-worker")
        .enable_all()
        .build()?;
    Ok(runtime)
}

/// Aggregate outcome of one benchmark run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchmarkResult {
    solved: usize,
    total: usize,
    elapsed: Duration,
}

impl BenchmarkResult {
    pub fn solved(&self) -> usize {
        self.solved
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn failed(&self) -> usize {
        self.total - self.solved
    }

    /// Wall-clock time from the first dispatch to the last completion.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Completed requests per second, 0 for an empty or instantaneous run.
    pub fn throughput(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.total as f64 / secs
        } else {
            0.0
        }
    }
}

impl fmt::Display for BenchmarkResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} puzzles solved", self.solved, self.total)
    }
}

/// Bounded fan-out of solve requests over a shared solver.
pub struct Harness<S> {
    solver: Arc<S>,
    workers: usize,
}

impl<S: Solver + 'static> Harness<S> {
    /// Fails if `workers` is 0.
    pub fn new(solver: S, workers: usize) -> Result<Self, HarnessError> {
        check_pool_size(workers)?;
        Ok(Self {
            solver: Arc::new(solver),
            workers,
        })
    }

    pub fn solver(&self) -> &S {
        &self.solver
    }

    /// Send `requests` solve calls for `puzzle` and wait for all of them.
    ///
    /// Individual request failures only lower the solved count. An error is
    /// returned when a request could not be dispatched at all.
    pub async fn run(
        &self,
        puzzle: &Puzzle,
        requests: usize,
    ) -> Result<BenchmarkResult, HarnessError> {
        tracing::info!(requests, workers = self.workers, "benchmark started");

        let puzzle = Arc::new(puzzle.clone());
        let semaphore = Arc::new(Semaphore::new(self.workers));
        let mut tasks = JoinSet::new();
        let mut solved = 0;

        let start = Instant::now();

        for _ in 0..requests {
            let permit = semaphore.clone().acquire_owned().await?;

            // reap whatever finished while we waited for the permit
            while let Some(joined) = tasks.try_join_next() {
                solved += tally(joined);
            }

            let solver = Arc::clone(&self.solver);
            let puzzle = Arc::clone(&puzzle);

            tasks.spawn(async move {
                let outcome = solver.solve(&puzzle).await;
                drop(permit);

                match outcome {
                    Ok(_) => true,
                    Err(err) => {
                        tracing::debug!(error = %err, "solve request failed");
                        false
                    }
                }
            });
        }

        while let Some(joined) = tasks.join_next().await {
            solved += tally(joined);
        }

        let result = BenchmarkResult {
            solved,
            total: requests,
            elapsed: start.elapsed(),
        };

        tracing::info!(
            solved = result.solved,
            total = result.total,
            elapsed_ms = result.elapsed.as_millis() as u64,
            per_sec = result.throughput(),
            "benchmark finished"
        );

        Ok(result)
    }
}

/// 1 for a solved request, 0 for a failed or panicked one.
fn tally(joined: Result<bool, JoinError>) -> usize {
    match joined {
        Ok(solved) => usize::from(solved),
        Err(err) => {
            tracing::warn!(error = %err, "solve task did not complete");
            0
        }
    }
}
