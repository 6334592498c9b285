//! Structuring elements bound to a grid shape.

use crate::element::StructuringElement;
use exdist_core::{Coord, GridError, Offset, Shape};

/// A [`StructuringElement`] bound to a [`Shape`], ready to be centred on
/// any cell.
///
/// Out-of-bounds neighbours are skipped (absorbing boundary).
///
/// # Examples
///
/// ```
/// use exdist_core::Shape;
/// use exdist_grid::{Neighbourhood, StructuringElement};
///
/// let shape = Shape::new(&[3, 3]).unwrap();
/// let nb = Neighbourhood::new(&shape, StructuringElement::l1_ball(2).remove_center()).unwrap();
///
/// // Corner (0, 0) has two in-bounds axis neighbours.
/// let offsets: Vec<usize> = nb.center(0).map(|(off, _)| off).collect();
/// assert_eq!(offsets, vec![3, 1]);
/// ```
#[derive(Clone, Debug)]
pub struct Neighbourhood {
    shape: Shape,
    element: StructuringElement,
}

impl Neighbourhood {
    /// Bind `element` to `shape`.
    ///
    /// Returns `Err(GridError::DimensionMismatch)` if the element and the
    /// shape disagree on dimensionality.
    pub fn new(shape: &Shape, element: StructuringElement) -> Result<Self, GridError> {
        if element.ndim() != shape.ndim() {
            return Err(GridError::DimensionMismatch {
                expected: shape.ndim(),
                got: element.ndim(),
            });
        }
        Ok(Self {
            shape: shape.clone(),
            element,
        })
    }

    /// The bound element.
    pub fn element(&self) -> &StructuringElement {
        &self.element
    }

    /// The bound shape.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Iterate the in-bounds neighbours of the cell at `offset`, yielding
    /// `(neighbour_offset, neighbour_coord)` in element order.
    pub fn center(&self, offset: Offset) -> Neighbours<'_> {
        Neighbours {
            nb: self,
            center: self.shape.coord_of(offset),
            next: 0,
        }
    }
}

/// Iterator returned by [`Neighbourhood::center`].
pub struct Neighbours<'a> {
    nb: &'a Neighbourhood,
    center: Coord,
    next: usize,
}

impl Neighbours<'_> {
    /// Coordinate the iterator is centred on.
    pub fn center(&self) -> &Coord {
        &self.center
    }
}

impl Iterator for Neighbours<'_> {
    type Item = (Offset, Coord);

    fn next(&mut self) -> Option<Self::Item> {
        let offsets = self.nb.element.offsets();
        while self.next < offsets.len() {
            let delta = &offsets[self.next];
            self.next += 1;
            // An overflowing sum lies outside every grid.
            let Some(p) = self
                .center
                .iter()
                .zip(delta.iter())
                .map(|(&c, &d)| c.checked_add(d))
                .collect::<Option<Coord>>()
            else {
                continue;
            };
            if let Some(off) = self.nb.shape.try_offset_of(&p) {
                return Some((off, p));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.nb.element.len() - self.next;
        (0, Some(remaining))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;
    use proptest::prelude::*;
    use smallvec::smallvec;

    fn l1(dims: &[usize]) -> Neighbourhood {
        let shape = Shape::new(dims).unwrap();
        let element = StructuringElement::l1_ball(dims.len()).remove_center();
        Neighbourhood::new(&shape, element).unwrap()
    }

    fn linf(dims: &[usize]) -> Neighbourhood {
        let shape = Shape::new(dims).unwrap();
        let element = StructuringElement::linf_ball(dims.len()).remove_center();
        Neighbourhood::new(&shape, element).unwrap()
    }

    #[test]
    fn interior_has_full_degree() {
        let nb = l1(&[5, 5]);
        let centre = nb.shape().offset_of(&[2, 2]);
        assert_eq!(nb.center(centre).count(), 4);

        let nb = linf(&[5, 5]);
        assert_eq!(nb.center(centre).count(), 8);
    }

    #[test]
    fn corner_yields_only_in_bounds_points() {
        let nb = linf(&[4, 4]);
        let got: Vec<Coord> = nb.center(0).map(|(_, c)| c).collect();
        assert_eq!(got.len(), 3);
        assert!(got.iter().all(|c| nb.shape().in_bounds(c)));
    }

    #[test]
    fn single_cell_has_no_neighbours() {
        let nb = l1(&[1, 1, 1]);
        assert_eq!(nb.center(0).count(), 0);
    }

    #[test]
    fn yields_offset_matching_coord() {
        let nb = l1(&[3, 4, 5]);
        for off in 0..nb.shape().cell_count() {
            for (n_off, n_coord) in nb.center(off) {
                assert_eq!(nb.shape().offset_of(&n_coord), n_off);
                assert_ne!(n_off, off);
            }
        }
    }

    #[test]
    fn huge_offsets_are_skipped() {
        let shape = Shape::new(&[3, 3]).unwrap();
        let element = StructuringElement::from_offsets(
            2,
            vec![smallvec![i32::MAX, 0], smallvec![i32::MIN, 0], smallvec![0, 1]],
        )
        .unwrap();
        let nb = Neighbourhood::new(&shape, element).unwrap();
        let centre = shape.offset_of(&[1, 0]);
        let got: Vec<Coord> = nb.center(centre).map(|(_, c)| c).collect();
        assert_eq!(got, vec![Coord::from_slice(&[1, 1])]);
    }

    #[test]
    fn dimension_mismatch_is_rejected() {
        let shape = Shape::new(&[3, 3]).unwrap();
        assert!(matches!(
            Neighbourhood::new(&shape, StructuringElement::l1_ball(3)),
            Err(GridError::DimensionMismatch {
                expected: 2,
                got: 3
            })
        ));
    }

    #[test]
    fn compliance_l1_2d() {
        compliance::run_full_compliance(&l1(&[6, 5]));
    }

    #[test]
    fn compliance_linf_3d() {
        compliance::run_full_compliance(&linf(&[3, 4, 3]));
    }

    #[test]
    fn compliance_l1_1d() {
        compliance::run_full_compliance(&l1(&[7]));
    }

    proptest! {
        #[test]
        fn neighbours_are_symmetric(
            rows in 1usize..8,
            cols in 1usize..8,
            seed in 0usize..64,
        ) {
            let nb = linf(&[rows, cols]);
            let off = seed % nb.shape().cell_count();
            for (n_off, _) in nb.center(off) {
                prop_assert!(
                    nb.center(n_off).any(|(o, _)| o == off),
                    "neighbour symmetry violated between {} and {}", off, n_off
                );
            }
        }
    }
}
