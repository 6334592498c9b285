//! Transform and configuration error types.

use exdist_core::{GridError, GridRole};
use std::error::Error;
use std::fmt;

/// Errors detected by [`TransformConfig::validate()`](crate::TransformConfig::validate).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A custom propagation element contains the all-zero offset.
    /// Propagating a cell to itself would corrupt its source list.
    CenterInElement,
    /// A custom propagation element has no offsets.
    EmptyElement,
    /// A custom propagation element does not match the grid's
    /// dimensionality.
    ElementDimensionMismatch {
        /// Grid dimensionality.
        expected: usize,
        /// Element dimensionality.
        got: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CenterInElement => {
                write!(f, "propagation element must not contain the centre")
            }
            Self::EmptyElement => write!(f, "propagation element has no offsets"),
            Self::ElementDimensionMismatch { expected, got } => write!(
                f,
                "propagation element is {got}-dimensional, grid is {expected}-dimensional"
            ),
        }
    }
}

impl Error for ConfigError {}

/// Errors returned by the distance transform entry points.
///
/// Nothing is written to the output grid when an error is returned
/// before propagation starts, which covers every variant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TransformError {
    /// The input or output grid has no backing storage.
    NotAllocated {
        /// Which grid was missing storage.
        role: GridRole,
    },
    /// A grid helper failed while preparing working buffers.
    Grid(GridError),
    /// A source coordinate or the distance operator does not match the
    /// output grid's dimensionality.
    DimensionMismatch {
        /// Output grid dimensionality.
        expected: usize,
        /// Dimensionality actually supplied.
        got: usize,
    },
    /// Input and output images have different shapes.
    ShapeMismatch {
        /// Input shape, formatted.
        input: String,
        /// Output shape, formatted.
        output: String,
    },
    /// The transform configuration is invalid.
    Config(ConfigError),
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAllocated { role } => write!(f, "{role} image is not allocated"),
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::DimensionMismatch { expected, got } => {
                write!(f, "dimension mismatch: grid is {expected}-dimensional, got {got}")
            }
            Self::ShapeMismatch { input, output } => {
                write!(f, "input shape {input} differs from output shape {output}")
            }
            Self::Config(e) => write!(f, "config: {e}"),
        }
    }
}

impl Error for TransformError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            Self::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl TransformError {
    /// Attributes a [`GridError`] to the grid playing `role`.
    ///
    /// A missing buffer becomes [`TransformError::NotAllocated`] for that
    /// role. Every other grid error is kept as [`TransformError::Grid`].
    pub fn for_grid(role: GridRole) -> impl Fn(GridError) -> Self {
        move |e| match e {
            GridError::NotAllocated => Self::NotAllocated { role },
            other => Self::Grid(other),
        }
    }
}

impl From<GridError> for TransformError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl From<ConfigError> for TransformError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
