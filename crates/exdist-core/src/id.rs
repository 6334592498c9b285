//! The [`Coord`] and [`Offset`] type aliases.

use smallvec::SmallVec;

/// Linear (row-major) index of a cell within a [`Shape`](crate::Shape).
pub type Offset = usize;

/// Coordinate in an N-dimensional grid.
///
/// Uses `SmallVec<[i32; 4]>` to avoid heap allocation for grids of up to
/// four dimensions. Coordinates may be negative or lie outside a grid;
/// bounds are checked against a [`Shape`](crate::Shape) before
/// linearization.
pub type Coord = SmallVec<[i32; 4]>;
