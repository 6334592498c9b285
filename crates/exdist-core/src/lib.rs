//! Core types and traits for exdist.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the workspace:
//! coordinates and grid shapes, the distance storage trait, per-cell
//! labels, and error types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;
pub mod label;
pub mod shape;
pub mod value;

pub use error::{GridError, GridRole};
pub use id::{Coord, Offset};
pub use label::CellState;
pub use shape::Shape;
pub use value::DistanceValue;
