//! Seeded random scenes for property and oracle tests.

use exdist_core::{Coord, Shape};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use std::ops::RangeInclusive;

/// A grid shape plus a set of in-bounds sources.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scene {
    pub shape: Shape,
    pub sources: Vec<Coord>,
}

/// `count` uniformly drawn in-bounds coordinates. May repeat.
pub fn random_sources(shape: &Shape, count: usize, rng: &mut ChaCha8Rng) -> Vec<Coord> {
    (0..count)
        .map(|_| {
            shape
                .dims()
                .iter()
                .map(|&d| rng.random_range(0..d as i32))
                .collect()
        })
        .collect()
}

/// Deterministic scene for `seed`: every axis extent drawn from
/// `extent`, the number of sources from `sources`.
///
/// # Panics
///
/// Panics if `extent` admits zero.
pub fn random_scene(
    seed: u64,
    ndim: usize,
    extent: RangeInclusive<usize>,
    sources: RangeInclusive<usize>,
) -> Scene {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let dims: Vec<usize> = (0..ndim)
        .map(|_| rng.random_range(extent.clone()))
        .collect();
    let shape = Shape::new(&dims).expect("scene extents must be non-zero");
    let count = rng.random_range(sources);
    let sources = random_sources(&shape, count, &mut rng);
    Scene { shape, sources }
}
