//! Conversions between scraped cell maps, [`Puzzle`] strings and display lines.
//!
//! Display lines follow the layout the solver service produces for its
//! `display` endpoint: each cell is rendered as `"<digit> "`, the three boxes
//! of a row are joined with `|`, and box rows are separated by
//! `------+------+------`.

use crate::puzzle::{CELLS, SIDE};
use crate::{CodecError, Puzzle};
use std::collections::HashMap;

/// Width of a rendered cell, digit included.
const CELL_WIDTH: usize = 2;
/// Cells per box side.
const BOX: usize = 3;

/// Identifier of the input field holding the cell at `(col, row)`, e.g. `f30`.
pub fn cell_id(col: usize, row: usize) -> String {
    format!("f{}{}", col, row)
}

/// Encode a map of cell ids to digits into a [`Puzzle`].
///
/// Ids are visited row-major (row outer, column inner). Missing ids become
/// `'0'`; ids outside the grid are ignored.
pub fn encode(cells: &HashMap<String, String>) -> Result<Puzzle, CodecError> {
    let mut digits = String::with_capacity(CELLS);

    for row in 0..SIDE {
        for col in 0..SIDE {
            let id = cell_id(col, row);
            match cells.get(&id) {
                Some(value) => digits.push(single_digit(&id, value)?),
                None => digits.push('0'),
            }
        }
    }

    Puzzle::from_digits(&digits)
}

fn single_digit(id: &str, value: &str) -> Result<char, CodecError> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_digit() => Ok(c),
        _ => Err(CodecError::MalformedInput {
            id: id.to_string(),
            value: value.to_string(),
        }),
    }
}

/// Validate the `data` payload of a display response.
///
/// Lines are passed through untouched; only an empty payload is rejected.
pub fn decode_lines(lines: Vec<String>) -> Result<Vec<String>, CodecError> {
    if lines.is_empty() {
        return Err(CodecError::EmptyDisplay);
    }
    Ok(lines)
}

/// Render a puzzle the way the solver service does.
pub fn render_lines(puzzle: &Puzzle) -> Vec<String> {
    let separator = vec!["-".repeat(BOX * CELL_WIDTH); BOX].join("+");
    let mut lines = Vec::with_capacity(SIDE + BOX - 1);

    for (i, row) in puzzle.rows().enumerate() {
        if i > 0 && i % BOX == 0 {
            lines.push(separator.clone());
        }
        let boxes: Vec<String> = row
            .as_bytes()
            .chunks(BOX)
            .map(|chunk| {
                chunk
                    .iter()
                    .map(|b| format!("{:<1$}", *b as char, CELL_WIDTH))
                    .collect()
            })
            .collect();
        lines.push(boxes.join("|"));
    }

    lines
}

/// Recover a [`Puzzle`] from rendered display lines.
///
/// Every digit (and `.`) in the lines is taken as a cell in reading order;
/// separators and padding are skipped.
pub fn puzzle_from_lines<S: AsRef<str>>(lines: &[S]) -> Result<Puzzle, CodecError> {
    if lines.is_empty() {
        return Err(CodecError::EmptyDisplay);
    }

    let cells: String = lines
        .iter()
        .flat_map(|line| line.as_ref().chars())
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    Puzzle::parse(&cells)
}
