//! Dense N-dimensional grid buffers.

use exdist_core::{Coord, GridError, Offset, Shape};

/// A dense grid of `T` over a [`Shape`].
///
/// A grid may exist without backing storage (see [`Grid::new`]); every
/// pixel accessor then fails with [`GridError::NotAllocated`]. Transforms
/// check [`is_allocated`](Self::is_allocated) on entry so that callers
/// get a typed error instead of a panic.
///
/// # Examples
///
/// ```
/// use exdist_core::Shape;
/// use exdist_grid::Grid;
///
/// let shape = Shape::new(&[2, 3]).unwrap();
/// let mut g = Grid::<u8>::new(shape);
/// assert!(!g.is_allocated());
///
/// g.allocate(0);
/// g.set(4, 7).unwrap();
/// assert_eq!(g.get_at(&[1, 1]).unwrap(), 7);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Grid<T> {
    shape: Shape,
    data: Option<Vec<T>>,
}

impl<T: Copy> Grid<T> {
    /// Create a grid with the given shape and no backing storage.
    pub fn new(shape: Shape) -> Self {
        Self { shape, data: None }
    }

    /// Create an allocated grid with every cell set to `value`.
    pub fn allocated(shape: Shape, value: T) -> Self {
        let data = vec![value; shape.cell_count()];
        Self {
            shape,
            data: Some(data),
        }
    }

    /// Wrap an existing buffer laid out in offset order.
    ///
    /// Returns `Err(GridError::DimensionMismatch)` if `data.len()` differs
    /// from the shape's cell count.
    pub fn from_vec(shape: Shape, data: Vec<T>) -> Result<Self, GridError> {
        if data.len() != shape.cell_count() {
            return Err(GridError::DimensionMismatch {
                expected: shape.cell_count(),
                got: data.len(),
            });
        }
        Ok(Self {
            shape,
            data: Some(data),
        })
    }

    /// Allocate (or reallocate) backing storage filled with `value`.
    pub fn allocate(&mut self, value: T) {
        self.data = Some(vec![value; self.shape.cell_count()]);
    }

    /// Allocated grid of another pixel type with the same shape.
    pub fn same_shape_allocated<U: Copy>(&self, value: U) -> Grid<U> {
        Grid::allocated(self.shape.clone(), value)
    }

    /// Whether the grid has backing storage.
    pub fn is_allocated(&self) -> bool {
        self.data.is_some()
    }

    /// Grid extents.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Set every cell to `value`.
    pub fn fill(&mut self, value: T) -> Result<(), GridError> {
        self.as_mut_slice()?.fill(value);
        Ok(())
    }

    /// Read a cell by offset.
    pub fn get(&self, offset: Offset) -> Result<T, GridError> {
        let data = self.as_slice()?;
        data.get(offset)
            .copied()
            .ok_or_else(|| self.offset_error(offset))
    }

    /// Write a cell by offset.
    pub fn set(&mut self, offset: Offset, value: T) -> Result<(), GridError> {
        let err = self.offset_error(offset);
        let cell = self.as_mut_slice()?.get_mut(offset).ok_or(err)?;
        *cell = value;
        Ok(())
    }

    /// Read a cell by coordinate.
    pub fn get_at(&self, coord: &[i32]) -> Result<T, GridError> {
        let offset = self
            .shape
            .try_offset_of(coord)
            .ok_or_else(|| GridError::CoordOutOfBounds {
                coord: Coord::from_slice(coord),
                shape: self.shape.to_string(),
            })?;
        self.get(offset)
    }

    /// Borrow the buffer in offset order.
    pub fn as_slice(&self) -> Result<&[T], GridError> {
        self.data.as_deref().ok_or(GridError::NotAllocated)
    }

    /// Mutably borrow the buffer in offset order.
    pub fn as_mut_slice(&mut self) -> Result<&mut [T], GridError> {
        self.data.as_deref_mut().ok_or(GridError::NotAllocated)
    }

    /// Consume the grid, returning its buffer if allocated.
    pub fn into_vec(self) -> Option<Vec<T>> {
        self.data
    }

    fn offset_error(&self, offset: Offset) -> GridError {
        GridError::CoordOutOfBounds {
            coord: Coord::from_elem(offset as i32, 1),
            shape: self.shape.to_string(),
        }
    }
}
