//! The [`DistanceValue`] storage trait.

use std::cmp::Ordering;
use std::fmt::{Debug, Display};

/// Scalar type in which distances are computed, compared, and stored.
///
/// Distance operators declare their storage type through this trait.
/// Floating-point types are ordered with `total_cmp`, so the priority
/// queue stays well-defined even if an operator misbehaves and yields
/// NaN. [`MAX`](Self::MAX) is the "not yet visited" sentinel written to
/// every output cell before propagation starts.
pub trait DistanceValue: Copy + PartialEq + PartialOrd + Debug + Display + Send + Sync + 'static {
    /// Additive identity; the distance from a source to itself.
    const ZERO: Self;

    /// Largest representable value; the unvisited sentinel.
    const MAX: Self;

    /// Total order over all values of the type.
    fn total_cmp(&self, other: &Self) -> Ordering;

    /// Addition that saturates at [`MAX`](Self::MAX) instead of
    /// overflowing.
    fn saturating_add(self, rhs: Self) -> Self;

    /// Lossy conversion to `f64`, for logging and metrics.
    fn to_f64(self) -> f64;
}

macro_rules! impl_float_value {
    ($($t:ty),*) => {$(
        impl DistanceValue for $t {
            const ZERO: Self = 0.0;
            const MAX: Self = <$t>::MAX;

            #[inline]
            fn total_cmp(&self, other: &Self) -> Ordering {
                <$t>::total_cmp(self, other)
            }

            #[inline]
            fn saturating_add(self, rhs: Self) -> Self {
                let sum = self + rhs;
                if sum > <$t>::MAX {
                    <$t>::MAX
                } else {
                    sum
                }
            }

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }
        }
    )*};
}

macro_rules! impl_int_value {
    ($($t:ty),*) => {$(
        impl DistanceValue for $t {
            const ZERO: Self = 0;
            const MAX: Self = <$t>::MAX;

            #[inline]
            fn total_cmp(&self, other: &Self) -> Ordering {
                Ord::cmp(self, other)
            }

            #[inline]
            fn saturating_add(self, rhs: Self) -> Self {
                <$t>::saturating_add(self, rhs)
            }

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }
        }
    )*};
}

impl_float_value!(f32, f64);
impl_int_value!(u32, u64, i32, i64);
