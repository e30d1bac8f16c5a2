//! Error types for grid construction and access.

use crate::point::Point;
use std::error::Error;
use std::fmt;

/// Errors arising from grid construction or checked cell access.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// Attempted to construct a grid with zero cells.
    EmptyGrid,
    /// A point lies outside the grid.
    OutOfBounds {
        /// The offending point.
        point: Point,
        /// Grid width.
        width: usize,
        /// Grid height.
        height: usize,
    },
    /// Backing storage length does not match `width * height`.
    SizeMismatch {
        /// `width * height`.
        expected: usize,
        /// Length actually supplied.
        actual: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid must have at least one cell"),
            Self::OutOfBounds {
                point,
                width,
                height,
            } => write!(
                f,
                "point {point} out of bounds: [0, {width}) x [0, {height})"
            ),
            Self::SizeMismatch { expected, actual } => {
                write!(f, "expected {expected} cells, got {actual}")
            }
        }
    }
}

impl Error for GridError {}
