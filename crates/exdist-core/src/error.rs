//! Error types for grid construction and access.

use crate::id::Coord;
use std::error::Error;
use std::fmt;

/// Which grid argument of a transform an error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridRole {
    /// The binary input image.
    Input,
    /// The distance output image.
    Output,
}

impl fmt::Display for GridRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Input => write!(f, "input"),
            Self::Output => write!(f, "output"),
        }
    }
}

/// Errors arising from grid construction or pixel access.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// The grid has no backing storage.
    NotAllocated,
    /// A shape with no axes or a zero-length axis.
    EmptyShape,
    /// A shape whose extents do not fit the coordinate or offset types.
    TooLarge {
        /// What overflowed.
        reason: String,
    },
    /// A coordinate is outside the grid.
    CoordOutOfBounds {
        /// The offending coordinate.
        coord: Coord,
        /// The grid shape, formatted.
        shape: String,
    },
    /// A buffer or coordinate has the wrong length.
    DimensionMismatch {
        /// Expected length.
        expected: usize,
        /// Length actually supplied.
        got: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAllocated => write!(f, "grid is not allocated"),
            Self::EmptyShape => write!(f, "grid shape must have at least one cell"),
            Self::TooLarge { reason } => write!(f, "grid too large: {reason}"),
            Self::CoordOutOfBounds { coord, shape } => {
                write!(f, "coordinate {coord:?} out of bounds for shape {shape}")
            }
            Self::DimensionMismatch { expected, got } => {
                write!(f, "dimension mismatch: expected {expected}, got {got}")
            }
        }
    }
}

impl Error for GridError {}
