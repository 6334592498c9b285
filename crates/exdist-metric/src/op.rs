//! The [`DistanceOp`] trait.

use exdist_core::DistanceValue;

/// A distance function between two grid coordinates.
///
/// Implementations must be symmetric and satisfy the triangle
/// inequality; the propagation engine's pruning relies on both.
/// Coordinates passed in always have the same length.
pub trait DistanceOp {
    /// Storage type of computed distances.
    type Value: DistanceValue;

    /// Distance between `a` and `b`.
    fn distance(&self, a: &[i32], b: &[i32]) -> Self::Value;

    /// Dimensionality this operator is bound to, if any.
    ///
    /// Operators that work in any dimension return `None` (the default).
    fn ndim(&self) -> Option<usize> {
        None
    }
}

impl<D: DistanceOp + ?Sized> DistanceOp for &D {
    type Value = D::Value;

    fn distance(&self, a: &[i32], b: &[i32]) -> Self::Value {
        (**self).distance(a, b)
    }

    fn ndim(&self) -> Option<usize> {
        (**self).ndim()
    }
}
