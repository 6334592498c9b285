//! Norm-based distance operators.

use crate::error::MetricError;
use crate::op::DistanceOp;

/// Euclidean (L2) distance with `f64` storage.
///
/// # Examples
///
/// ```
/// use exdist_metric::{DistanceOp, Euclidean};
///
/// assert_eq!(Euclidean.distance(&[0, 0], &[3, 4]), 5.0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Euclidean;

impl DistanceOp for Euclidean {
    type Value = f64;

    #[inline]
    fn distance(&self, a: &[i32], b: &[i32]) -> f64 {
        a.iter()
            .zip(b.iter())
            .map(|(&x, &y)| {
                let d = (x as i64 - y as i64) as f64;
                d * d
            })
            .sum::<f64>()
            .sqrt()
    }
}

/// Euclidean distance scaled by per-axis sample spacing.
///
/// Models anisotropic voxels, e.g. volumes whose slice thickness differs
/// from the in-plane pixel size. With unit spacing it agrees with
/// [`Euclidean`].
#[derive(Clone, Debug, PartialEq)]
pub struct WeightedEuclidean {
    spacing: Vec<f64>,
}

impl WeightedEuclidean {
    /// Create an operator with one spacing per axis.
    ///
    /// Returns `Err(MetricError::NoAxes)` for an empty list and
    /// `Err(MetricError::InvalidSpacing)` for a spacing that is not a
    /// finite positive number.
    pub fn new(spacing: Vec<f64>) -> Result<Self, MetricError> {
        if spacing.is_empty() {
            return Err(MetricError::NoAxes);
        }
        for (axis, &value) in spacing.iter().enumerate() {
            if !value.is_finite() || value <= 0.0 {
                return Err(MetricError::InvalidSpacing { axis, value });
            }
        }
        Ok(Self { spacing })
    }

    /// Per-axis spacing.
    pub fn spacing(&self) -> &[f64] {
        &self.spacing
    }
}

impl DistanceOp for WeightedEuclidean {
    type Value = f64;

    #[inline]
    fn distance(&self, a: &[i32], b: &[i32]) -> f64 {
        a.iter()
            .zip(b.iter())
            .zip(self.spacing.iter())
            .map(|((&x, &y), &s)| {
                let d = (x as i64 - y as i64) as f64 * s;
                d * d
            })
            .sum::<f64>()
            .sqrt()
    }

    fn ndim(&self) -> Option<usize> {
        Some(self.spacing.len())
    }
}

/// Manhattan (L1, city block) distance with `u64` storage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Manhattan;

impl DistanceOp for Manhattan {
    type Value = u64;

    #[inline]
    fn distance(&self, a: &[i32], b: &[i32]) -> u64 {
        a.iter()
            .zip(b.iter())
            .map(|(&x, &y)| (x as i64 - y as i64).unsigned_abs())
            .sum()
    }
}

/// Chebyshev (L-infinity, chessboard) distance with `u64` storage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Chebyshev;

impl DistanceOp for Chebyshev {
    type Value = u64;

    #[inline]
    fn distance(&self, a: &[i32], b: &[i32]) -> u64 {
        a.iter()
            .zip(b.iter())
            .map(|(&x, &y)| (x as i64 - y as i64).unsigned_abs())
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn euclidean_known_values() {
        assert_eq!(Euclidean.distance(&[1, 1], &[1, 1]), 0.0);
        assert_eq!(Euclidean.distance(&[0], &[9]), 9.0);
        assert_eq!(Euclidean.distance(&[2, 2], &[0, 0]), 8f64.sqrt());
        assert_eq!(Euclidean.distance(&[0, 0, 0], &[1, 2, 2]), 3.0);
    }

    #[test]
    fn euclidean_does_not_overflow_i32() {
        let d = Euclidean.distance(&[i32::MIN], &[i32::MAX]);
        assert!((d - u32::MAX as f64).abs() < 1.0);
    }

    #[test]
    fn manhattan_and_chebyshev_known_values() {
        assert_eq!(Manhattan.distance(&[0, 0], &[3, -4]), 7);
        assert_eq!(Chebyshev.distance(&[0, 0], &[3, -4]), 4);
        assert_eq!(Chebyshev.distance(&[], &[]), 0);
    }

    #[test]
    fn weighted_rejects_bad_spacing() {
        assert_eq!(WeightedEuclidean::new(vec![]), Err(MetricError::NoAxes));
        assert_eq!(
            WeightedEuclidean::new(vec![1.0, 0.0]),
            Err(MetricError::InvalidSpacing {
                axis: 1,
                value: 0.0
            })
        );
        assert!(WeightedEuclidean::new(vec![f64::NAN]).is_err());
        assert!(WeightedEuclidean::new(vec![-2.0]).is_err());
    }

    #[test]
    fn weighted_scales_axes() {
        let w = WeightedEuclidean::new(vec![2.0, 1.0]).unwrap();
        assert_eq!(w.ndim(), Some(2));
        assert_eq!(w.distance(&[0, 0], &[1, 0]), 2.0);
        assert_eq!(w.distance(&[0, 0], &[0, 1]), 1.0);
    }

    proptest! {
        #[test]
        fn unit_weights_match_euclidean(
            a in proptest::collection::vec(-50i32..50, 3),
            b in proptest::collection::vec(-50i32..50, 3),
        ) {
            let w = WeightedEuclidean::new(vec![1.0; 3]).unwrap();
            prop_assert_eq!(w.distance(&a, &b), Euclidean.distance(&a, &b));
        }

        #[test]
        fn norms_are_metrics(
            a in proptest::collection::vec(-20i32..20, 2),
            b in proptest::collection::vec(-20i32..20, 2),
            c in proptest::collection::vec(-20i32..20, 2),
        ) {
            prop_assert_eq!(Euclidean.distance(&a, &b), Euclidean.distance(&b, &a));
            prop_assert!(
                Euclidean.distance(&a, &c)
                    <= Euclidean.distance(&a, &b) + Euclidean.distance(&b, &c) + 1e-9
            );
            prop_assert_eq!(Manhattan.distance(&a, &b), Manhattan.distance(&b, &a));
            prop_assert!(
                Manhattan.distance(&a, &c) <= Manhattan.distance(&a, &b) + Manhattan.distance(&b, &c)
            );
            prop_assert!(
                Chebyshev.distance(&a, &c) <= Chebyshev.distance(&a, &b) + Chebyshev.distance(&b, &c)
            );
        }
    }
}
