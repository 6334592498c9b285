//! Test oracles and fixtures for exdist development.
//!
//! - [`brute_force`]: exhaustive nearest-source scan, the reference every
//!   transform result is checked against
//! - [`fixtures`]: seeded random grids and source sets
//! - [`RecordingObserver`]: captures every engine event for assertions

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use exdist_core::{Coord, DistanceValue, Shape};
use exdist_engine::TransformObserver;
use exdist_metric::DistanceOp;

pub use fixtures::{random_scene, random_sources, Scene};

/// Distance from every cell of `shape` to its nearest source, by
/// exhaustive scan. Cells get `T::MAX` when there are no sources.
pub fn brute_force<D: DistanceOp>(shape: &Shape, sources: &[Coord], op: &D) -> Vec<D::Value> {
    shape
        .iter_coords()
        .map(|cell| {
            sources
                .iter()
                .map(|s| op.distance(s, &cell))
                .fold(D::Value::MAX, |best, d| if d < best { d } else { best })
        })
        .collect()
}

/// Observer that records every event in order.
#[derive(Clone, Debug)]
pub struct RecordingObserver<T> {
    pub plateau_keys: Vec<T>,
    pub writes: Vec<(usize, T)>,
    pub finalized: Vec<(usize, T)>,
}

impl<T> RecordingObserver<T> {
    pub fn new() -> Self {
        Self {
            plateau_keys: Vec::new(),
            writes: Vec::new(),
            finalized: Vec::new(),
        }
    }

    /// Number of writes recorded for `offset`.
    pub fn write_count(&self, offset: usize) -> usize {
        self.writes.iter().filter(|&&(o, _)| o == offset).count()
    }
}

impl<T: Copy> RecordingObserver<T> {
    /// Last value written to `offset`, if any.
    pub fn last_write(&self, offset: usize) -> Option<T> {
        self.writes
            .iter()
            .rev()
            .find(|&&(o, _)| o == offset)
            .map(|&(_, v)| v)
    }
}

impl<T> Default for RecordingObserver<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TransformObserver<T> for RecordingObserver<T> {
    fn on_plateau(&mut self, key: T) {
        self.plateau_keys.push(key);
    }

    fn on_write(&mut self, offset: usize, value: T) {
        self.writes.push((offset, value));
    }

    fn on_finalize(&mut self, offset: usize, value: T) {
        self.finalized.push((offset, value));
    }
}
