//! Page format parsers.
//!
//! These modules pull puzzle data out of the markup returned by puzzle
//! sources.

pub mod html;
