use crate::CodecError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of cells along one side of the grid.
pub const SIDE: usize = 9;
/// Number of cells in the grid.
pub const CELLS: usize = SIDE * SIDE;

/// A 9x9 sudoku grid stored as 81 row-major digits, `'0'` marking an empty cell.
///
/// The inner string is validated on construction and never mutated, so a
/// [`Puzzle`] can be shared freely between concurrent requests.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Puzzle(String);

impl Puzzle {
    /// Build a puzzle from exactly 81 ASCII digits.
    pub fn from_digits(digits: &str) -> Result<Self, CodecError> {
        Self::validate(digits, false)
    }

    /// Build a puzzle from 81 cells, accepting `.` as an alias for an empty cell.
    ///
    /// This is the grammar the solver service itself accepts. Dots are
    /// normalized to `'0'`.
    pub fn parse(grid: &str) -> Result<Self, CodecError> {
        Self::validate(grid, true)
    }

    /// A grid with every cell empty.
    pub fn empty() -> Self {
        Self("0".repeat(CELLS))
    }

    fn validate(grid: &str, allow_dots: bool) -> Result<Self, CodecError> {
        let count = grid.chars().count();
        if count != CELLS {
            return Err(CodecError::InvalidLength(count));
        }

        let mut digits = String::with_capacity(CELLS);
        for (index, c) in grid.chars().enumerate() {
            match c {
                '0'..='9' => digits.push(c),
                '.' if allow_dots => digits.push('0'),
                found => return Err(CodecError::InvalidDigit { index, found }),
            }
        }

        Ok(Self(digits))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Iterate over the 9 rows, each a 9-character digit string.
    pub fn rows(&self) -> impl Iterator<Item = &str> {
        // all characters are ASCII digits, so byte offsets are char offsets
        (0..SIDE).map(move |row| &self.0[row * SIDE..(row + 1) * SIDE])
    }

    /// Digit at the given zero-indexed row and column.
    pub fn cell(&self, row: usize, col: usize) -> Option<char> {
        if row >= SIDE || col >= SIDE {
            return None;
        }
        self.0.as_bytes().get(row * SIDE + col).map(|b| *b as char)
    }

    /// Number of filled (non-zero) cells.
    pub fn given_count(&self) -> usize {
        self.0.bytes().filter(|b| *b != b'0').count()
    }

    /// True when no cell is empty.
    pub fn is_complete(&self) -> bool {
        self.given_count() == CELLS
    }
}

impl FromStr for Puzzle {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Puzzle {
    type Error = CodecError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Puzzle> for String {
    fn from(puzzle: Puzzle) -> Self {
        puzzle.0
    }
}

impl AsRef<str> for Puzzle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GRID: &str =
        "700000600060001070804020005000470000089000340000039000600050709010300020003000004";

    #[test]
    fn test_from_digits() {
        let puzzle = Puzzle::from_digits(GRID).unwrap();
        assert_eq!(puzzle.as_str(), GRID);
        assert_eq!(puzzle.to_string(), GRID);
        assert_eq!(puzzle.cell(0, 0), Some('7'));
        assert_eq!(puzzle.cell(0, 6), Some('6'));
        assert_eq!(puzzle.cell(8, 8), Some('4'));
        assert_eq!(puzzle.cell(9, 0), None);
        assert!(!puzzle.is_complete());
    }

    #[test]
    fn test_rows() {
        let puzzle = Puzzle::from_digits(GRID).unwrap();
        let rows: Vec<&str> = puzzle.rows().collect();
        assert_eq!(rows.len(), 9);
        assert_eq!(rows[0], "700000600");
        assert_eq!(rows[8], "003000004");
        assert!(rows.iter().all(|r| r.len() == 9));
    }

    #[test]
    fn test_invalid_length() {
        assert_eq!(
            Puzzle::from_digits("123"),
            Err(CodecError::InvalidLength(3))
        );
        assert_eq!(
            Puzzle::from_digits(&format!("{GRID}0")),
            Err(CodecError::InvalidLength(82))
        );
    }

    #[test]
    fn test_invalid_digit() {
        let bad = format!("X{}", &GRID[1..]);
        assert_eq!(
            Puzzle::from_digits(&bad),
            Err(CodecError::InvalidDigit {
                index: 0,
                found: 'X'
            })
        );
    }

    #[test]
    fn test_dots_only_when_parsing() {
        let dotted = GRID.replace('0', ".");
        assert!(Puzzle::from_digits(&dotted).is_err());

        let puzzle: Puzzle = dotted.parse().unwrap();
        assert_eq!(puzzle.as_str(), GRID);
    }

    #[test]
    fn test_empty() {
        let puzzle = Puzzle::empty();
        assert_eq!(puzzle.given_count(), 0);
        assert_eq!(puzzle.as_str().len(), CELLS);
    }

    #[test]
    fn test_serde_as_string() {
        let puzzle = Puzzle::from_digits(GRID).unwrap();
        let json = serde_json::to_string(&puzzle).unwrap();
        assert_eq!(json, format!("\"{GRID}\""));

        let back: Puzzle = serde_json::from_str(&json).unwrap();
        assert_eq!(back, puzzle);

        assert!(serde_json::from_str::<Puzzle>("\"123\"").is_err());
    }
}
