//! Error types for operator construction.

use std::error::Error;
use std::fmt;

/// Errors arising from distance operator construction.
#[derive(Clone, Debug, PartialEq)]
pub enum MetricError {
    /// An axis spacing is zero, negative, or not finite.
    InvalidSpacing {
        /// Axis index.
        axis: usize,
        /// The rejected spacing.
        value: f64,
    },
    /// No spacings were supplied.
    NoAxes,
}

impl fmt::Display for MetricError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSpacing { axis, value } => {
                write!(f, "spacing {value} on axis {axis} must be finite and > 0")
            }
            Self::NoAxes => write!(f, "at least one axis spacing is required"),
        }
    }
}

impl Error for MetricError {}
