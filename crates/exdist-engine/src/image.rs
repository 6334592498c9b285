//! Image entry points: sources are the foreground cells of a grid.

use crate::config::TransformConfig;
use crate::error::TransformError;
use crate::transform::ExactDistance;
use exdist_core::{Coord, GridRole};
use exdist_grid::Grid;
use exdist_metric::{DistanceOp, Euclidean};
use log::debug;

/// Coordinates of every cell of `input` that differs from
/// `P::default()`, in offset order.
///
/// # Errors
///
/// [`TransformError::NotAllocated`] with role `Input` if `input` has no
/// storage.
pub fn image_sources<P>(input: &Grid<P>) -> Result<Vec<Coord>, TransformError>
where
    P: Copy + PartialEq + Default,
{
    let pixels = input
        .as_slice()
        .map_err(TransformError::for_grid(GridRole::Input))?;
    let background = P::default();
    let shape = input.shape();
    Ok(pixels
        .iter()
        .enumerate()
        .filter(|&(_, &p)| p != background)
        .map(|(off, _)| shape.coord_of(off))
        .collect())
}

/// Distance from every cell of `out` to the nearest foreground cell of
/// `input`, under `op`, with the default configuration.
///
/// # Errors
///
/// - [`TransformError::NotAllocated`] if either grid has no storage.
/// - [`TransformError::ShapeMismatch`] if the grids differ in shape.
/// - Anything [`ExactDistance::run`] returns.
pub fn exact_distance_from_image<P, D>(
    input: &Grid<P>,
    op: D,
    out: &mut Grid<D::Value>,
) -> Result<(), TransformError>
where
    P: Copy + PartialEq + Default,
    D: DistanceOp,
{
    exact_distance_from_image_with_config(input, op, TransformConfig::default(), out)
}

/// [`exact_distance_from_image`] with an explicit configuration.
pub fn exact_distance_from_image_with_config<P, D>(
    input: &Grid<P>,
    op: D,
    config: TransformConfig,
    out: &mut Grid<D::Value>,
) -> Result<(), TransformError>
where
    P: Copy + PartialEq + Default,
    D: DistanceOp,
{
    if !input.is_allocated() {
        return Err(TransformError::NotAllocated {
            role: GridRole::Input,
        });
    }
    if !out.is_allocated() {
        return Err(TransformError::NotAllocated {
            role: GridRole::Output,
        });
    }
    if input.shape() != out.shape() {
        return Err(TransformError::ShapeMismatch {
            input: input.shape().to_string(),
            output: out.shape().to_string(),
        });
    }
    let sources = image_sources(input)?;
    debug!("exact distance from image: {} foreground cells", sources.len());
    ExactDistance::with_config(op, config)
        .run(sources, out)
        .map(|_| ())
}

/// Exact Euclidean distance transform of a binary image.
///
/// # Examples
///
/// ```
/// use exdist_core::Shape;
/// use exdist_engine::euclidean_distance_transform;
/// use exdist_grid::Grid;
///
/// let shape = Shape::new(&[1, 4]).unwrap();
/// let input = Grid::from_vec(shape.clone(), vec![1_u8, 0, 0, 0]).unwrap();
/// let mut out = Grid::allocated(shape, 0.0);
///
/// euclidean_distance_transform(&input, &mut out).unwrap();
/// assert_eq!(out.as_slice().unwrap(), &[0.0, 1.0, 2.0, 3.0]);
/// ```
pub fn euclidean_distance_transform<P>(
    input: &Grid<P>,
    out: &mut Grid<f64>,
) -> Result<(), TransformError>
where
    P: Copy + PartialEq + Default,
{
    exact_distance_from_image(input, Euclidean, out)
}
