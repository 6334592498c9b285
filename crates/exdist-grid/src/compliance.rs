//! Neighbourhood compliance test helpers.
//!
//! These functions verify that a bound neighbourhood satisfies the
//! invariants propagation relies on. Reused across the neighbourhood
//! test module for each element kind.

use crate::neighbourhood::Neighbourhood;
use indexmap::IndexSet;

/// Assert that no cell is reported as its own neighbour.
pub fn assert_excludes_center(nb: &Neighbourhood) {
    for off in 0..nb.shape().cell_count() {
        for (n_off, _) in nb.center(off) {
            assert_ne!(n_off, off, "cell {off} lists itself as a neighbour");
        }
    }
}

/// Assert that every yielded coordinate is inside the grid.
pub fn assert_in_bounds(nb: &Neighbourhood) {
    for off in 0..nb.shape().cell_count() {
        for (_, c) in nb.center(off) {
            assert!(
                nb.shape().in_bounds(&c),
                "neighbour {c:?} of cell {off} is outside {}",
                nb.shape()
            );
        }
    }
}

/// Assert that `b in N(a)` implies `a in N(b)`. Holds for elements that
/// are symmetric about the origin.
pub fn assert_symmetric(nb: &Neighbourhood) {
    for off in 0..nb.shape().cell_count() {
        for (n_off, _) in nb.center(off) {
            assert!(
                nb.center(n_off).any(|(o, _)| o == off),
                "neighbour symmetry violated: {n_off} in N({off}) but {off} not in N({n_off})"
            );
        }
    }
}

/// Assert that centring twice yields the same sequence with no repeats.
pub fn assert_deterministic_unique(nb: &Neighbourhood) {
    for off in 0..nb.shape().cell_count() {
        let a: Vec<usize> = nb.center(off).map(|(o, _)| o).collect();
        let b: Vec<usize> = nb.center(off).map(|(o, _)| o).collect();
        assert_eq!(a, b, "neighbour order of cell {off} is non-deterministic");
        let unique: IndexSet<_> = a.iter().collect();
        assert_eq!(unique.len(), a.len(), "cell {off} has duplicate neighbours");
    }
}

/// Run all compliance checks on a neighbourhood.
pub fn run_full_compliance(nb: &Neighbourhood) {
    assert_excludes_center(nb);
    assert_in_bounds(nb);
    assert_symmetric(nb);
    assert_deterministic_unique(nb);
}
