pub mod codec;
pub mod puzzle;

mod error;
pub use error::CodecError;

pub use puzzle::{CELLS, Puzzle, SIDE};
