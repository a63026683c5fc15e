//! Errors raised by grid construction, cell access and pattern seeding.

use displaydoc::Display;
use thiserror::Error;

/// All kinds of errors in this crate.
#[derive(Clone, Debug, PartialEq, Display, Error)]
pub enum Error {
    /// Grid dimensions should be positive, got {rows}x{cols}.
    InvalidDimensions { rows: usize, cols: usize },
    /// Cell ({row}, {col}) is outside of the {rows}x{cols} grid.
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    /// Unknown pattern: {0}.
    UnknownPattern(String),
    /// Invalid character {ch:?} on line {line} of the pattern.
    InvalidPatternChar { line: usize, ch: char },
    /// Density should be between 0 and 1, got {0}.
    InvalidDensity(f64),
}

pub type Result<T> = std::result::Result<T, Error>;
