//! exdist: exact distance transforms on N-dimensional grids.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all exdist sub-crates. For most users, adding `exdist` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use exdist::prelude::*;
//!
//! // A 5x5 binary image with one foreground pixel in the middle.
//! let shape = Shape::new(&[5, 5]).unwrap();
//! let mut pixels = vec![0_u8; 25];
//! pixels[12] = 1;
//! let image = Grid::from_vec(shape.clone(), pixels).unwrap();
//!
//! let mut out = Grid::allocated(shape, 0.0);
//! euclidean_distance_transform(&image, &mut out).unwrap();
//! assert_eq!(out.get_at(&[0, 0]).unwrap(), 8.0_f64.sqrt());
//!
//! // Explicit sources, another metric, and run metrics.
//! let mut steps = Grid::allocated(Shape::new(&[4, 4]).unwrap(), 0_u64);
//! let metrics = ExactDistance::new(Manhattan)
//!     .run([[0, 0], [3, 3]], &mut steps)
//!     .unwrap();
//! assert_eq!(steps.get_at(&[0, 3]).unwrap(), 3);
//! assert_eq!(metrics.points_finalized, 16);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `exdist-core` | Shapes, coordinates, distance values, cell labels, errors |
//! | [`grid`] | `exdist-grid` | Grid buffers, structuring elements, neighbourhoods |
//! | [`metric`] | `exdist-metric` | Distance operators and the Lipschitz bound |
//! | [`engine`] | `exdist-engine` | Plateau queue, source lists, the propagation engine |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and traits (`exdist-core`).
///
/// Contains [`types::Shape`], [`types::Coord`], the
/// [`types::DistanceValue`] storage trait and the error types.
pub use exdist_core as types;

/// Grid storage and adjacency (`exdist-grid`).
pub use exdist_grid as grid;

/// Distance operators (`exdist-metric`).
///
/// Implement [`metric::DistanceOp`] to plug in a custom distance.
pub use exdist_metric as metric;

/// The propagation engine (`exdist-engine`).
///
/// [`engine::ExactDistance`] for configurable runs with metrics, plus the
/// free-function entry points.
pub use exdist_engine as engine;

/// Common imports for typical exdist usage.
///
/// ```rust
/// use exdist::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use exdist_core::{Coord, DistanceValue, Shape};

    // Errors
    pub use exdist_core::GridError;
    pub use exdist_engine::{ConfigError, TransformError};

    // Grid
    pub use exdist_grid::{Grid, StructuringElement};

    // Metrics
    pub use exdist_metric::{Chebyshev, DistanceOp, Euclidean, Manhattan, WeightedEuclidean};

    // Engine
    pub use exdist_engine::{
        euclidean_distance_transform, exact_distance, exact_distance_from_image,
        ExactDistance, Propagation, TransformConfig, TransformMetrics, TransformObserver,
    };
}
