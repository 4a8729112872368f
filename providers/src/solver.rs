//! Client for the sudoku solver service.
//!
//! The service exposes two endpoints under a common base URL, `display` and
//! `solve`. Both take `{"puzzle": "<81 digits>"}` and answer with an
//! envelope of the form `{"status": "success", "data": ...}` or
//! `{"status": "fail", "message": "..."}`.

use crate::SolverError;
use crate::config::ClientConfig;
use crate::util::{endpoint_url, http_client};
use serde::{Deserialize, Serialize};
use std::future::Future;
use websudoku_core::{Puzzle, codec};

pub const DISPLAY_ENDPOINT: &str = "display";
pub const SOLVE_ENDPOINT: &str = "solve";

/// The only status tag the service uses for a successful call.
const STATUS_SUCCESS: &str = "success";

/// Something that can render and solve puzzles.
///
/// [`SolverClient`] is the HTTP implementation; tests and benchmarks can
/// supply their own.
pub trait Solver: Send + Sync {
    fn display(
        &self,
        puzzle: &Puzzle,
    ) -> impl Future<Output = Result<Vec<String>, SolverError>> + Send;

    fn solve(&self, puzzle: &Puzzle) -> impl Future<Output = Result<Puzzle, SolverError>> + Send;
}

/// Request body shared by both endpoints.
#[derive(Serialize, Debug)]
pub struct SolverRequest<'a> {
    pub puzzle: &'a Puzzle,
}

/// Outcome reported by the service, after decoding the status tag.
#[derive(Debug, Clone, PartialEq)]
pub enum SolverResponse<T> {
    Success(T),
    Failure(String),
}

impl<T> SolverResponse<T> {
    pub fn into_result(self) -> Result<T, SolverError> {
        match self {
            SolverResponse::Success(data) => Ok(data),
            SolverResponse::Failure(message) => Err(SolverError::Rejected(message)),
        }
    }
}

/// Wire form of a response. Unused fields are sent as empty strings, and
/// may be missing altogether.
#[derive(Deserialize, Debug)]
struct Envelope {
    status: String,
    #[serde(default)]
    data: serde_json::Value,
    #[serde(default)]
    message: String,
}

impl From<Envelope> for SolverResponse<serde_json::Value> {
    fn from(envelope: Envelope) -> Self {
        if envelope.status == STATUS_SUCCESS {
            SolverResponse::Success(envelope.data)
        } else {
            SolverResponse::Failure(envelope.message)
        }
    }
}

/// Decode the payload of a successful `display` call.
fn display_lines(data: serde_json::Value) -> Result<Vec<String>, SolverError> {
    let lines: Vec<String> = serde_json::from_value(data)
        .map_err(|e| websudoku_core::CodecError::InvalidDisplay(e.to_string()))?;
    Ok(codec::decode_lines(lines)?)
}

/// Decode the payload of a successful `solve` call.
fn solution(data: serde_json::Value) -> Result<Puzzle, SolverError> {
    let grid = data
        .as_str()
        .ok_or_else(|| SolverError::InvalidSolution(format!("expected a string, got {}", data)))?;
    Puzzle::from_digits(grid).map_err(|e| SolverError::InvalidSolution(e.to_string()))
}

/// Stateless client over one shared connection pool.
///
/// Cloning is cheap and clones share the pool, so a single client can serve
/// any number of concurrent requests.
#[derive(Debug, Clone)]
pub struct SolverClient {
    client: reqwest::Client,
    base_url: String,
}

impl SolverClient {
    /// Build a client with its own connection pool.
    pub fn new(config: &ClientConfig) -> Result<Self, SolverError> {
        let client = http_client(config)?;
        Ok(Self::with_client(client, &config.solver_url))
    }

    /// Wrap an existing HTTP client, sharing its pool.
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Render a puzzle through the service.
    pub async fn display(&self, puzzle: &Puzzle) -> Result<Vec<String>, SolverError> {
        let data = self.call(DISPLAY_ENDPOINT, puzzle).await?.into_result()?;
        display_lines(data)
    }

    /// Solve a puzzle through the service.
    pub async fn solve(&self, puzzle: &Puzzle) -> Result<Puzzle, SolverError> {
        let data = self.call(SOLVE_ENDPOINT, puzzle).await?.into_result()?;
        solution(data)
    }

    async fn call(
        &self,
        endpoint: &str,
        puzzle: &Puzzle,
    ) -> Result<SolverResponse<serde_json::Value>, SolverError> {
        let url = endpoint_url(&self.base_url, endpoint);
        tracing::debug!(%url, "solver request");

        let res = self
            .client
            .post(&url)
            .json(&SolverRequest { puzzle })
            .send()
            .await?
            .error_for_status()?;

        let envelope: Envelope = res.json().await?;
        Ok(envelope.into())
    }
}

impl Solver for SolverClient {
    fn display(
        &self,
        puzzle: &Puzzle,
    ) -> impl Future<Output = Result<Vec<String>, SolverError>> + Send {
        SolverClient::display(self, puzzle)
    }

    fn solve(&self, puzzle: &Puzzle) -> impl Future<Output = Result<Puzzle, SolverError>> + Send {
        SolverClient::solve(self, puzzle)
    }
}
