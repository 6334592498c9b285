//! Structuring elements: finite sets of relative offsets.

use exdist_core::{Coord, GridError};
use smallvec::{smallvec, SmallVec};

/// A finite list of relative offsets defining adjacency.
///
/// Offsets are kept in insertion order without duplicates. Iteration
/// order is deterministic, which keeps transforms reproducible.
///
/// # Examples
///
/// ```
/// use exdist_grid::StructuringElement;
///
/// // The 2D L1 ball is the centre plus the four axis neighbours.
/// let ball = StructuringElement::l1_ball(2);
/// assert_eq!(ball.len(), 5);
/// assert!(ball.contains_center());
///
/// let ring = ball.remove_center();
/// assert_eq!(ring.len(), 4);
/// assert!(!ring.contains_center());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StructuringElement {
    ndim: usize,
    offsets: Vec<Coord>,
}

impl StructuringElement {
    /// Unit ball of the L1 norm: the centre and `±1` along each axis.
    pub fn l1_ball(ndim: usize) -> Self {
        let mut offsets = Vec::with_capacity(2 * ndim + 1);
        offsets.push(SmallVec::from_elem(0, ndim));
        for axis in 0..ndim {
            for step in [-1, 1] {
                let mut o: Coord = SmallVec::from_elem(0, ndim);
                o[axis] = step;
                offsets.push(o);
            }
        }
        Self { ndim, offsets }
    }

    /// Unit ball of the L-infinity norm: every offset in `{-1, 0, 1}^n`,
    /// in lexicographic order.
    pub fn linf_ball(ndim: usize) -> Self {
        let mut offsets: Vec<Coord> = vec![smallvec![]];
        for _ in 0..ndim {
            offsets = offsets
                .into_iter()
                .flat_map(|prefix| {
                    [-1, 0, 1].into_iter().map(move |step| {
                        let mut o = prefix.clone();
                        o.push(step);
                        o
                    })
                })
                .collect();
        }
        Self { ndim, offsets }
    }

    /// Build an element from explicit offsets.
    ///
    /// Duplicates are dropped, keeping the first occurrence. Returns
    /// `Err(GridError::DimensionMismatch)` if an offset's length is not
    /// `ndim`.
    pub fn from_offsets(ndim: usize, offsets: Vec<Coord>) -> Result<Self, GridError> {
        let mut unique: Vec<Coord> = Vec::with_capacity(offsets.len());
        for o in offsets {
            if o.len() != ndim {
                return Err(GridError::DimensionMismatch {
                    expected: ndim,
                    got: o.len(),
                });
            }
            if !unique.contains(&o) {
                unique.push(o);
            }
        }
        Ok(Self {
            ndim,
            offsets: unique,
        })
    }

    /// The same element without the all-zero offset.
    pub fn remove_center(mut self) -> Self {
        self.offsets.retain(|o| o.iter().any(|&v| v != 0));
        self
    }

    /// Whether the all-zero offset is part of the element.
    pub fn contains_center(&self) -> bool {
        self.offsets.iter().any(|o| o.iter().all(|&v| v == 0))
    }

    /// Number of dimensions of each offset.
    pub fn ndim(&self) -> usize {
        self.ndim
    }

    /// Number of offsets.
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Whether the element has no offsets.
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// The offsets, in deterministic order.
    pub fn offsets(&self) -> &[Coord] {
        &self.offsets
    }
}

/// Every point within Chebyshev distance 1 of `coord`, including `coord`
/// itself.
///
/// No bounds checking is done; callers filter against the grid shape.
pub fn surrounding_points_linf(coord: &[i32]) -> Vec<Coord> {
    StructuringElement::linf_ball(coord.len())
        .offsets
        .into_iter()
        .map(|o| coord.iter().zip(o.iter()).map(|(&c, &d)| c.saturating_add(d)).collect())
        .collect()
}
