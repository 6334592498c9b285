//! Per-hop Lipschitz bound used for source pruning.

use crate::op::DistanceOp;
use exdist_core::{Coord, DistanceValue};
use exdist_grid::StructuringElement;

/// Largest distance `op` assigns to a single propagation hop.
///
/// Computed as the maximum of `op(0, p)` over every offset `p` of the
/// propagation element. Moving one hop changes the true distance to the
/// nearest source by at most this amount, so a candidate source whose
/// distance exceeds the current minimum by more than the bound can never
/// become the nearest one. Must be recomputed whenever the operator or the
/// element changes.
///
/// # Examples
///
/// ```
/// use exdist_grid::StructuringElement;
/// use exdist_metric::{lipschitz_bound, Euclidean};
///
/// let l1 = StructuringElement::l1_ball(3).remove_center();
/// assert_eq!(lipschitz_bound(&Euclidean, &l1), 1.0);
///
/// let linf = StructuringElement::linf_ball(2).remove_center();
/// assert_eq!(lipschitz_bound(&Euclidean, &linf), 2f64.sqrt());
/// ```
pub fn lipschitz_bound<D: DistanceOp + ?Sized>(op: &D, element: &StructuringElement) -> D::Value {
    let center: Coord = Coord::from_elem(0, element.ndim());
    element
        .offsets()
        .iter()
        .map(|p| op.distance(&center, p))
        .fold(D::Value::ZERO, |acc, d| {
            if d.total_cmp(&acc).is_gt() {
                d
            } else {
                acc
            }
        })
}
