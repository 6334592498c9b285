//! Grid storage and neighbourhood topology for exdist.
//!
//! This crate defines the N-dimensional [`Grid`] buffer that distance
//! transforms read from and write into, the [`StructuringElement`] that
//! describes which cells are adjacent, and the [`Neighbourhood`] that
//! binds an element to a grid shape for centred iteration.
//!
//! Boundaries always absorb: neighbours that fall outside the grid are
//! skipped, never clamped or wrapped.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod element;
pub mod grid;
pub mod neighbourhood;

#[cfg(test)]
pub(crate) mod compliance;

pub use element::{surrounding_points_linf, StructuringElement};
pub use grid::Grid;
pub use neighbourhood::{Neighbourhood, Neighbours};
