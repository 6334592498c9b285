//! Distance operators for exdist.
//!
//! A [`DistanceOp`] measures the distance between two grid coordinates
//! and declares the [`DistanceValue`](exdist_core::DistanceValue) type it
//! stores results in. Propagation needs the operator to be symmetric and
//! to satisfy the triangle inequality; neither is checked at runtime.
//!
//! # Operators
//!
//! - [`Euclidean`]: L2 norm, `f64` storage
//! - [`WeightedEuclidean`]: L2 norm with per-axis spacing, `f64` storage
//! - [`Manhattan`]: L1 norm, `u64` storage
//! - [`Chebyshev`]: L-infinity norm, `u64` storage

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod lipschitz;
pub mod norms;
pub mod op;

pub use error::MetricError;
pub use lipschitz::lipschitz_bound;
pub use norms::{Chebyshev, Euclidean, Manhattan, WeightedEuclidean};
pub use op::DistanceOp;
