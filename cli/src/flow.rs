//! Single run: fetch a puzzle, show it, solve it, show the solution.

use std::io::Write;
use std::time::{Duration, Instant};

use thiserror::Error;
use websudoku_providers::{PuzzleSource, Solver, SolverError, SourceError};

#[derive(Error, Debug)]
pub enum FlowError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Solver(#[from] SolverError),

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

/// Run every stage in order, writing each completed stage to `out`.
///
/// The first failing stage ends the run; nothing of that stage is written.
/// Returns the time spent in the solve call.
pub async fn run<P, S, W>(source: &P, solver: &S, out: &mut W) -> Result<Duration, FlowError>
where
    P: PuzzleSource,
    S: Solver,
    W: Write,
{
    let puzzle = source.fetch_puzzle().await?;
    tracing::info!(givens = puzzle.given_count(), "puzzle fetched");

    let grid = solver.display(&puzzle).await?;
    writeln!(out)?;
    write_lines(out, &grid)?;
    writeln!(out)?;

    let start = Instant::now();
    let solution = solver.solve(&puzzle).await?;
    let elapsed = start.elapsed();
    tracing::info!(elapsed_ms = elapsed.as_millis() as u64, "puzzle solved");

    let grid = solver.display(&solution).await?;
    write_lines(out, &grid)?;
    writeln!(out)?;
    writeln!(out, "{:.5} sec.", elapsed.as_secs_f64())?;

    Ok(elapsed)
}

fn write_lines<W: Write>(out: &mut W, lines: &[String]) -> std::io::Result<()> {
    for line in lines {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use websudoku_core::{Puzzle, codec};
    use websudoku_providers::source::FixedPuzzle;

    const PUZZLE: &str =
        "700000600060001070804020005000470000089000340000039000600050709010300020003000004";
    const SOLUTION: &str =
        "791543682562981473834726915356478291289615347147239568628154739415397826973862154";

    /// Renders locally; fails the nth display call or the solve call on request.
    #[derive(Default)]
    struct ScriptedSolver {
        fail_display_at: Option<usize>,
        fail_solve: bool,
        displays: Mutex<usize>,
    }

    impl Solver for ScriptedSolver {
        async fn display(&self, puzzle: &Puzzle) -> Result<Vec<String>, SolverError> {
            let call = {
                let mut displays = self.displays.lock().unwrap();
                *displays += 1;
                *displays
            };
            if self.fail_display_at == Some(call) {
                return Err(SolverError::Rejected("display refused".to_string()));
            }
            Ok(codec::render_lines(puzzle))
        }

        async fn solve(&self, _puzzle: &Puzzle) -> Result<Puzzle, SolverError> {
            if self.fail_solve {
                return Err(SolverError::Rejected("The puzzle is unsolvable.".to_string()));
            }
            Ok(Puzzle::from_digits(SOLUTION).unwrap())
        }
    }

    struct BrokenSource;

    impl PuzzleSource for BrokenSource {
        async fn fetch_puzzle(&self) -> Result<Puzzle, SourceError> {
            Err(SourceError::Unavailable("no frame reference".to_string()))
        }
    }

    fn source() -> FixedPuzzle {
        FixedPuzzle(Puzzle::from_digits(PUZZLE).unwrap())
    }

    #[tokio::test]
    async fn test_full_run_output() {
        let mut out = Vec::new();
        run(&source(), &ScriptedSolver::default(), &mut out)
            .await
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        // blank, 11 grid lines, blank, 11 grid lines, blank, timing
        assert_eq!(lines.len(), 26);
        assert_eq!(lines[0], "");
        assert_eq!(lines[1], "7 0 0 |0 0 0 |6 0 0 ");
        assert_eq!(lines[12], "");
        assert_eq!(lines[13], "7 9 1 |5 4 3 |6 8 2 ");
        assert_eq!(lines[24], "");

        let timing = lines[25];
        let secs = timing.strip_suffix(" sec.").unwrap();
        assert_eq!(secs.split('.').nth(1).map(str::len), Some(5));
    }

    #[tokio::test]
    async fn test_source_failure_writes_nothing() {
        let mut out = Vec::new();
        let err = run(&BrokenSource, &ScriptedSolver::default(), &mut out)
            .await
            .unwrap_err();

        assert!(matches!(err, FlowError::Source(_)));
        assert_eq!(err.to_string(), "Source unavailable: no frame reference");
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_solve_rejection_stops_before_solution() {
        let solver = ScriptedSolver {
            fail_solve: true,
            ..Default::default()
        };
        let mut out = Vec::new();
        let err = run(&source(), &solver, &mut out).await.unwrap_err();

        assert_eq!(err.to_string(), "The puzzle is unsolvable.");
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 13);
        assert!(!text.contains("sec."));
    }

    #[tokio::test]
    async fn test_display_rejection_of_solution() {
        let solver = ScriptedSolver {
            fail_display_at: Some(2),
            ..Default::default()
        };
        let mut out = Vec::new();
        let err = run(&source(), &solver, &mut out).await.unwrap_err();

        assert_eq!(err.to_string(), "display refused");
        let text = String::from_utf8(out).unwrap();
        assert!(!text.contains("7 9 1"));
    }

    #[tokio::test]
    async fn test_first_display_rejection_writes_nothing() {
        let solver = ScriptedSolver {
            fail_display_at: Some(1),
            ..Default::default()
        };
        let mut out = Vec::new();
        assert!(run(&source(), &solver, &mut out).await.is_err());
        assert!(out.is_empty());
    }
}
