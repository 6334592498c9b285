//! Grid extents and the offset <-> coordinate mapping.

use crate::error::GridError;
use crate::id::{Coord, Offset};
use smallvec::SmallVec;
use std::fmt;

/// Extents of an N-dimensional grid.
///
/// Offsets are row-major: the last axis varies fastest, so a 2D shape
/// `[rows, cols]` maps `[r, c]` to `r * cols + c`. This matches the
/// canonical ordering returned by [`iter_coords`](Self::iter_coords).
///
/// # Examples
///
/// ```
/// use exdist_core::Shape;
///
/// let shape = Shape::new(&[3, 4]).unwrap();
/// assert_eq!(shape.cell_count(), 12);
/// assert_eq!(shape.offset_of(&[2, 1]), 9);
/// assert_eq!(shape.coord_of(9).as_slice(), &[2, 1]);
/// assert!(!shape.in_bounds(&[3, 0]));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Shape {
    dims: SmallVec<[usize; 4]>,
    strides: SmallVec<[usize; 4]>,
    cell_count: usize,
}

impl Shape {
    /// Maximum extent of a single axis: coordinates use `i32`.
    pub const MAX_AXIS: usize = i32::MAX as usize;

    /// Create a shape from per-axis extents.
    ///
    /// Returns `Err(GridError::EmptyShape)` if there are no axes or any
    /// axis is zero, and `Err(GridError::TooLarge)` if an axis exceeds
    /// [`MAX_AXIS`](Self::MAX_AXIS) or the cell count overflows `usize`.
    pub fn new(dims: &[usize]) -> Result<Self, GridError> {
        if dims.is_empty() || dims.contains(&0) {
            return Err(GridError::EmptyShape);
        }
        if let Some(&axis) = dims.iter().find(|&&d| d > Self::MAX_AXIS) {
            return Err(GridError::TooLarge {
                reason: format!("axis extent {axis} exceeds {}", Self::MAX_AXIS),
            });
        }
        let cell_count = dims
            .iter()
            .try_fold(1usize, |acc, &d| acc.checked_mul(d))
            .ok_or_else(|| GridError::TooLarge {
                reason: format!("cell count of {dims:?} overflows usize"),
            })?;

        let mut strides: SmallVec<[usize; 4]> = SmallVec::from_elem(1, dims.len());
        for axis in (0..dims.len().saturating_sub(1)).rev() {
            strides[axis] = strides[axis + 1] * dims[axis + 1];
        }

        Ok(Self {
            dims: SmallVec::from_slice(dims),
            strides,
            cell_count,
        })
    }

    /// Number of axes.
    pub fn ndim(&self) -> usize {
        self.dims.len()
    }

    /// Per-axis extents.
    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.cell_count
    }

    /// Returns `true` if `coord` has the right dimensionality and lies
    /// inside the grid on every axis.
    pub fn in_bounds(&self, coord: &[i32]) -> bool {
        coord.len() == self.dims.len()
            && coord
                .iter()
                .zip(self.dims.iter())
                .all(|(&c, &d)| c >= 0 && (c as usize) < d)
    }

    /// Linear offset of an in-bounds coordinate.
    ///
    /// Callers must check [`in_bounds`](Self::in_bounds) first; the result
    /// for an out-of-bounds coordinate is meaningless (debug builds panic).
    pub fn offset_of(&self, coord: &[i32]) -> Offset {
        debug_assert!(
            self.in_bounds(coord),
            "offset_of({coord:?}) outside shape {self}"
        );
        coord
            .iter()
            .zip(self.strides.iter())
            .map(|(&c, &s)| c as usize * s)
            .sum()
    }

    /// Bounds-checked variant of [`offset_of`](Self::offset_of).
    pub fn try_offset_of(&self, coord: &[i32]) -> Option<Offset> {
        if self.in_bounds(coord) {
            Some(self.offset_of(coord))
        } else {
            None
        }
    }

    /// Coordinate of a linear offset. Inverse of [`offset_of`](Self::offset_of).
    pub fn coord_of(&self, offset: Offset) -> Coord {
        debug_assert!(offset < self.cell_count, "offset {offset} outside {self}");
        let mut rem = offset;
        self.strides
            .iter()
            .map(|&s| {
                let c = rem / s;
                rem %= s;
                c as i32
            })
            .collect()
    }

    /// All coordinates in offset order (last axis fastest).
    pub fn iter_coords(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.cell_count).map(move |off| self.coord_of(off))
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, d) in self.dims.iter().enumerate() {
            if i > 0 {
                write!(f, "x")?;
            }
            write!(f, "{d}")?;
        }
        Ok(())
    }
}
