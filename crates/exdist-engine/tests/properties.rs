//! Integration test: run-level properties of the propagation engine,
//! checked through the observer hooks.

use exdist_core::{Coord, DistanceValue, GridRole, Shape};
use exdist_engine::{exact_distance, ExactDistance, Propagation, TransformConfig, TransformError};
use exdist_grid::{Grid, StructuringElement};
use exdist_metric::{Euclidean, Manhattan};
use exdist_test_utils::{brute_force, random_scene, RecordingObserver};
use proptest::prelude::*;
use smallvec::smallvec;

fn run_recorded(
    seed: u64,
    config: TransformConfig,
) -> (Grid<f64>, RecordingObserver<f64>, exdist_engine::TransformMetrics, Vec<f64>) {
    let scene = random_scene(seed, 2, 5..=20, 1..=5);
    let expected = brute_force(&scene.shape, &scene.sources, &Euclidean);
    let mut out = Grid::allocated(scene.shape.clone(), 0.0);
    let mut obs = RecordingObserver::new();
    let metrics = ExactDistance::with_config(Euclidean, config)
        .run_observed(&scene.sources, &mut out, &mut obs)
        .unwrap();
    (out, obs, metrics, expected)
}

// ── Ordering ────────────────────────────────────────────────────────

#[test]
fn plateau_keys_never_decrease() {
    for seed in 0..20 {
        let (_, obs, metrics, _) = run_recorded(seed, TransformConfig::default());
        assert_eq!(obs.plateau_keys.len() as u64, metrics.plateaus);
        for w in obs.plateau_keys.windows(2) {
            assert!(w[0] <= w[1], "seed {seed}: {} then {}", w[0], w[1]);
        }
    }
}

#[test]
fn finalization_order_is_monotone() {
    for seed in 20..40 {
        let (_, obs, _, _) = run_recorded(seed, TransformConfig::default());
        for w in obs.finalized.windows(2) {
            assert!(w[0].1 <= w[1].1, "seed {seed}");
        }
    }
}

// ── Writes ──────────────────────────────────────────────────────────

#[test]
fn every_cell_is_finalized_once_with_its_true_distance() {
    for seed in 40..60 {
        let (out, obs, metrics, expected) = run_recorded(seed, TransformConfig::default());
        assert_eq!(obs.finalized.len(), expected.len());
        assert_eq!(metrics.points_finalized, expected.len());
        let mut seen = vec![false; expected.len()];
        for &(off, v) in &obs.finalized {
            assert!(!seen[off], "seed {seed}: cell {off} finalized twice");
            seen[off] = true;
            assert_eq!(v, expected[off]);
        }
        assert_eq!(out.as_slice().unwrap(), &expected[..]);
    }
}

#[test]
fn last_write_is_the_true_distance() {
    for seed in 60..80 {
        let (_, obs, metrics, expected) = run_recorded(seed, TransformConfig::default());
        // One write per queue insertion.
        assert_eq!(obs.writes.len() as u64, metrics.queue_insertions);
        for (off, &e) in expected.iter().enumerate() {
            assert!(obs.write_count(off) >= 1);
            assert_eq!(obs.last_write(off), Some(e), "seed {seed}, cell {off}");
        }
    }
}

#[test]
fn writes_never_increase_a_cell() {
    for seed in 80..100 {
        let (_, obs, _, _) = run_recorded(seed, TransformConfig::default());
        let mut last = std::collections::HashMap::new();
        for &(off, v) in &obs.writes {
            if let Some(&prev) = last.get(&off) {
                assert!(v <= prev, "seed {seed}: cell {off} went {prev} -> {v}");
            }
            last.insert(off, v);
        }
    }
}

// ── Pruning ─────────────────────────────────────────────────────────

#[test]
fn pruning_only_saves_work() {
    for seed in 100..120 {
        let pruned = TransformConfig::default();
        let full = TransformConfig {
            pruning: false,
            ..TransformConfig::default()
        };
        let (a, _, ma, _) = run_recorded(seed, pruned);
        let (b, _, mb, _) = run_recorded(seed, full);
        assert_eq!(a, b, "seed {seed}");
        assert_eq!(ma.points_finalized, mb.points_finalized);
        assert_eq!(mb.lipschitz_bound, None);
    }
}

// ── Determinism ─────────────────────────────────────────────────────

#[test]
fn repeated_runs_are_bit_identical() {
    for seed in 120..130 {
        let (a, oa, _, _) = run_recorded(seed, TransformConfig::default());
        let (b, ob, _, _) = run_recorded(seed, TransformConfig::default());
        let bits = |g: &Grid<f64>| -> Vec<u64> {
            g.as_slice().unwrap().iter().map(|v| v.to_bits()).collect()
        };
        assert_eq!(bits(&a), bits(&b));
        assert_eq!(oa.writes, ob.writes);
    }
}

#[test]
fn output_contents_are_overwritten() {
    let shape = Shape::new(&[6, 6]).unwrap();
    let mut dirty = Grid::allocated(shape.clone(), -3.0);
    let mut clean = Grid::allocated(shape, 0.0);
    exact_distance([[2, 3]], Euclidean, &mut dirty).unwrap();
    exact_distance([[2, 3]], Euclidean, &mut clean).unwrap();
    assert_eq!(dirty, clean);
}

// ── Reachability and errors ─────────────────────────────────────────

#[test]
fn unreachable_cells_are_never_written() {
    let element =
        StructuringElement::from_offsets(2, vec![smallvec![-1, 0], smallvec![1, 0]]).unwrap();
    let config = TransformConfig::builder()
        .propagation(Propagation::Custom(element))
        .build()
        .unwrap();
    let shape = Shape::new(&[5, 5]).unwrap();
    let mut out = Grid::allocated(shape.clone(), 0.0);
    let mut obs = RecordingObserver::new();
    ExactDistance::with_config(Euclidean, config)
        .run_observed([[0, 0]], &mut out, &mut obs)
        .unwrap();
    for coord in shape.iter_coords() {
        let off = shape.offset_of(&coord);
        if coord[1] >= 2 {
            assert_eq!(obs.write_count(off), 0);
            assert_eq!(out.get(off).unwrap(), f64::MAX);
        }
    }
}

#[test]
fn unallocated_output_reports_role() {
    let mut out = Grid::<u64>::new(Shape::new(&[3, 3]).unwrap());
    let mut obs = RecordingObserver::new();
    let err = ExactDistance::new(Manhattan)
        .run_observed([[1, 1]], &mut out, &mut obs)
        .unwrap_err();
    assert_eq!(
        err,
        TransformError::NotAllocated {
            role: GridRole::Output
        }
    );
    assert!(obs.writes.is_empty());
}

// ── Property tests ──────────────────────────────────────────────────

proptest! {
    #[test]
    fn sources_are_at_distance_zero(
        w in 1usize..12,
        h in 1usize..12,
        picks in prop::collection::vec((0usize..12, 0usize..12), 1..6),
    ) {
        let shape = Shape::new(&[w, h]).unwrap();
        let sources: Vec<[i32; 2]> = picks
            .iter()
            .map(|&(x, y)| [(x % w) as i32, (y % h) as i32])
            .collect();
        let mut out = Grid::allocated(shape, f64::ZERO);
        exact_distance(&sources, Euclidean, &mut out).unwrap();
        for s in &sources {
            prop_assert_eq!(out.get_at(s).unwrap(), 0.0);
        }
    }

    #[test]
    fn manhattan_agrees_with_oracle(
        w in 1usize..10,
        h in 1usize..10,
        picks in prop::collection::vec((0usize..10, 0usize..10), 1..5),
    ) {
        let shape = Shape::new(&[w, h]).unwrap();
        let sources: Vec<Coord> = picks
            .iter()
            .map(|&(x, y)| smallvec![(x % w) as i32, (y % h) as i32])
            .collect();
        let expected = brute_force(&shape, &sources, &Manhattan);
        let mut out = Grid::allocated(shape, 0_u64);
        exact_distance(&sources, Manhattan, &mut out).unwrap();
        prop_assert_eq!(out.as_slice().unwrap(), &expected[..]);
    }
}
