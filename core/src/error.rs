use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("Malformed value for cell {id}: expected a single digit, got {value:?}")]
    MalformedInput { id: String, value: String },

    #[error("Invalid grid: expected 81 cells, got {0}")]
    InvalidLength(usize),

    #[error("Invalid grid: unexpected {found:?} at cell {index}")]
    InvalidDigit { index: usize, found: char },

    #[error("Display payload is empty")]
    EmptyDisplay,

    #[error("Invalid display payload: {0}")]
    InvalidDisplay(String),
}
