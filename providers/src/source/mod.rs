//! Puzzle sources.
//!
//! A source produces a [`Puzzle`] from somewhere outside the program. The
//! only real implementation scrapes websudoku.com, whose markup can change
//! without notice, so callers depend on the [`PuzzleSource`] trait rather
//! than on the scraper.

use crate::SourceError;
use std::future::Future;
use websudoku_core::Puzzle;

pub mod websudoku;
pub use websudoku::WebSudoku;

pub trait PuzzleSource: Send + Sync {
    fn fetch_puzzle(&self) -> impl Future<Output = Result<Puzzle, SourceError>> + Send;
}

/// A source that always yields the same puzzle.
#[derive(Debug, Clone)]
pub struct FixedPuzzle(pub Puzzle);

impl PuzzleSource for FixedPuzzle {
    async fn fetch_puzzle(&self) -> Result<Puzzle, SourceError> {
        Ok(self.0.clone())
    }
}
