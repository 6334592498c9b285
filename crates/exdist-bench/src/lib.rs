//! Benchmark profiles for the exdist distance transforms.
//!
//! - [`reference_profile`]: 256x256 image with 16 sources
//! - [`volume_profile`]: 48x48x48 volume with 8 sources
//! - [`spread_sources`]: deterministic source placement via seed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use exdist_core::{Coord, Shape};
use exdist_grid::Grid;

/// A benchmark input: an allocated output grid and its sources.
pub struct Profile {
    /// Output grid, allocated and zeroed.
    pub out: Grid<f64>,
    /// Source coordinates.
    pub sources: Vec<Coord>,
}

/// 256x256 image (64K cells) with 16 sources.
pub fn reference_profile(seed: u64) -> Profile {
    profile(&[256, 256], 16, seed)
}

/// 48x48x48 volume (~110K cells) with 8 sources.
pub fn volume_profile(seed: u64) -> Profile {
    profile(&[48, 48, 48], 8, seed)
}

fn profile(dims: &[usize], n: usize, seed: u64) -> Profile {
    let shape = Shape::new(dims).unwrap();
    let sources = spread_sources(&shape, n, seed);
    Profile {
        out: Grid::allocated(shape, 0.0),
        sources,
    }
}

/// Place `n` distinct sources in `shape` using a simple hash of the seed.
pub fn spread_sources(shape: &Shape, n: usize, seed: u64) -> Vec<Coord> {
    let cells = shape.cell_count();
    let mut taken = std::collections::HashSet::new();
    let mut sources = Vec::with_capacity(n);

    for i in 0..n.min(cells) {
        let mut pos = (seed
            .wrapping_mul(6364136223846793005)
            .wrapping_add((i as u64).wrapping_mul(1442695040888963407))
            % cells as u64) as usize;

        // Linear probe to avoid collisions
        while taken.contains(&pos) {
            pos = (pos + 1) % cells;
        }
        taken.insert(pos);
        sources.push(shape.coord_of(pos));
    }

    sources
}
