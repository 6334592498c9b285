//! The propagation engine.
//!
//! [`ExactDistance`] floods distances outward from the sources in
//! non-decreasing order. Each cell moves through the states
//! `Candidate → Queued → Processed`:
//!
//! 1. **Seeding.** Every in-bounds cell within Chebyshev distance 1 of a
//!    source gets a [`SourceList`] and is queued at its minimum.
//! 2. **Main loop.** The lowest plateau of the [`PlateauQueue`] is
//!    finalized as a batch. Each finalized cell then hands its source
//!    list to every unfinalized neighbour in the propagation element:
//!    candidates get a fresh list, queued cells merge and are re-queued
//!    if their minimum dropped.
//! 3. **Done.** When the queue drains, every reachable cell holds its
//!    exact distance; unreachable cells keep `T::MAX`.
//!
//! Stale queue entries (a cell re-queued at a lower key) are skipped when
//! popped because the cell is already `Processed`.

use crate::config::TransformConfig;
use crate::error::TransformError;
use crate::metrics::TransformMetrics;
use crate::observer::{NoopObserver, TransformObserver};
use crate::queue::PlateauQueue;
use crate::source_list::{Offer, Slack, SourceId, SourceList};
use exdist_core::{CellState, Coord, DistanceValue, GridRole, Offset};
use exdist_grid::{surrounding_points_linf, Grid, Neighbourhood};
use exdist_metric::{lipschitz_bound, DistanceOp};
use indexmap::IndexMap;
use log::{debug, trace};
use std::time::Instant;

/// Exact distance transform engine: a distance operator plus a
/// [`TransformConfig`].
///
/// # Examples
///
/// ```
/// use exdist_core::Shape;
/// use exdist_engine::ExactDistance;
/// use exdist_grid::Grid;
/// use exdist_metric::Manhattan;
///
/// let shape = Shape::new(&[3, 3]).unwrap();
/// let mut out = Grid::allocated(shape, 0_u64);
///
/// let metrics = ExactDistance::new(Manhattan).run([[0, 0]], &mut out).unwrap();
/// assert_eq!(out.get_at(&[2, 2]).unwrap(), 4);
/// assert_eq!(metrics.points_finalized, 9);
/// ```
#[derive(Clone, Debug)]
pub struct ExactDistance<D> {
    op: D,
    config: TransformConfig,
}

impl<D: DistanceOp> ExactDistance<D> {
    /// Engine with the default configuration.
    pub fn new(op: D) -> Self {
        Self::with_config(op, TransformConfig::default())
    }

    /// Engine with an explicit configuration.
    pub fn with_config(op: D, config: TransformConfig) -> Self {
        Self { op, config }
    }

    /// The distance operator.
    pub fn op(&self) -> &D {
        &self.op
    }

    /// The active configuration.
    pub fn config(&self) -> &TransformConfig {
        &self.config
    }

    /// Compute distances from `sources` into `out`.
    ///
    /// `out` must be allocated; its previous contents are overwritten.
    /// Sources may lie outside the grid, in which case only the in-bounds
    /// part of their neighbourhood is seeded. Duplicate sources are
    /// harmless.
    ///
    /// # Errors
    ///
    /// - [`TransformError::NotAllocated`] if `out` has no storage.
    /// - [`TransformError::DimensionMismatch`] if a source or the
    ///   operator disagrees with the grid's dimensionality.
    /// - [`TransformError::Config`] if the propagation element is invalid.
    ///
    /// `out` is untouched when an error is returned.
    pub fn run<I>(
        &self,
        sources: I,
        out: &mut Grid<D::Value>,
    ) -> Result<TransformMetrics, TransformError>
    where
        I: IntoIterator,
        I::Item: AsRef<[i32]>,
    {
        self.run_observed(sources, out, &mut NoopObserver)
    }

    /// Like [`run`](Self::run), reporting every plateau, write and
    /// finalization to `observer`.
    pub fn run_observed<I, O>(
        &self,
        sources: I,
        out: &mut Grid<D::Value>,
        observer: &mut O,
    ) -> Result<TransformMetrics, TransformError>
    where
        I: IntoIterator,
        I::Item: AsRef<[i32]>,
        O: TransformObserver<D::Value> + ?Sized,
    {
        let start = Instant::now();

        if !out.is_allocated() {
            debug!("exact distance: output image is not allocated");
            return Err(TransformError::NotAllocated {
                role: GridRole::Output,
            });
        }
        let shape = out.shape().clone();
        let ndim = shape.ndim();
        if let Some(got) = self.op.ndim() {
            if got != ndim {
                return Err(TransformError::DimensionMismatch { expected: ndim, got });
            }
        }

        let sources: Vec<Coord> = sources
            .into_iter()
            .map(|s| Coord::from_slice(s.as_ref()))
            .collect();
        if let Some(bad) = sources.iter().find(|s| s.len() != ndim) {
            return Err(TransformError::DimensionMismatch {
                expected: ndim,
                got: bad.len(),
            });
        }

        let element = self.config.propagation_element(ndim)?;
        let bound = lipschitz_bound(&self.op, &element);
        let slack = if self.config.pruning {
            Slack::Bounded(bound)
        } else {
            Slack::Unbounded
        };
        let neighbourhood = Neighbourhood::new(&shape, element)?;

        let mut label_grid = out.same_shape_allocated(CellState::Candidate);
        let labels = label_grid.as_mut_slice()?;
        out.fill(D::Value::MAX)
            .map_err(TransformError::for_grid(GridRole::Output))?;
        let dist = out
            .as_mut_slice()
            .map_err(TransformError::for_grid(GridRole::Output))?;

        debug!(
            "exact distance: shape {shape}, {} sources, {} neighbours, lipschitz bound {bound}, pruning {}",
            sources.len(),
            neighbourhood.element().len(),
            self.config.pruning,
        );

        let mut metrics = TransformMetrics {
            source_count: sources.len(),
            lipschitz_bound: self.config.pruning.then(|| bound.to_f64()),
            ..TransformMetrics::default()
        };
        let mut lists: IndexMap<Offset, SourceList<D::Value>> = IndexMap::new();
        let mut queue = PlateauQueue::new();
        let mut fresh: Vec<Offset> = Vec::new();
        let mut updated: Vec<Offset> = Vec::new();
        let mut finalized: Vec<Offset> = Vec::new();

        // ── Seeding ─────────────────────────────────────────────

        for (i, source) in sources.iter().enumerate() {
            let id = SourceId(i);
            for p in surrounding_points_linf(source) {
                let Some(off) = shape.try_offset_of(&p) else {
                    continue;
                };
                let d = self.op.distance(source, &p);
                if labels[off] != CellState::Queued {
                    lists.insert(off, SourceList::seeded(d, id));
                    labels[off] = CellState::Queued;
                    fresh.push(off);
                    metrics.lists_created += 1;
                } else if let Some(list) = lists.get_mut(&off) {
                    match list.offer(d, id, slack) {
                        Offer::Tightened => metrics.lists_tightened += 1,
                        Offer::Reseeded => metrics.lists_reseeded += 1,
                        Offer::Appended | Offer::Discarded => {}
                    }
                }
            }
        }
        metrics.seeded_points = fresh.len();
        enqueue(&mut fresh, &lists, dist, &mut queue, observer, &mut metrics);
        metrics.peak_live_lists = lists.len();

        // ── Main loop ───────────────────────────────────────────

        while let Some((key, plateau)) = queue.take_top_plateau() {
            metrics.plateaus += 1;
            observer.on_plateau(key);
            trace!(
                "plateau {key}: {} entries, {} queued, {} live lists",
                plateau.len(),
                queue.len(),
                lists.len(),
            );

            finalized.clear();
            for off in plateau {
                if labels[off].is_final() {
                    metrics.stale_skips += 1;
                    continue;
                }
                debug_assert!(labels[off].can_transition_to(CellState::Processed));
                debug_assert!(
                    dist[off] == key,
                    "cell {off} popped at {key} but holds {}",
                    dist[off]
                );
                labels[off] = CellState::Processed;
                dist[off] = key;
                observer.on_finalize(off, key);
                finalized.push(off);
            }
            metrics.points_finalized += finalized.len();

            for &center in &finalized {
                // Same-plateau cells are already Processed, so nothing
                // looks this list up again.
                let Some(center_list) = lists.swap_remove(&center) else {
                    continue;
                };
                for (off, coord) in neighbourhood.center(center) {
                    match labels[off] {
                        CellState::Processed => {}
                        CellState::Candidate => {
                            let list = SourceList::from_propagation(
                                &self.op,
                                &coord,
                                &center_list,
                                &sources,
                                slack,
                            );
                            lists.insert(off, list);
                            labels[off] = CellState::Queued;
                            fresh.push(off);
                            metrics.lists_created += 1;
                        }
                        CellState::Queued => {
                            let Some(list) = lists.get_mut(&off) else {
                                continue;
                            };
                            if list.merge_conditionally(
                                &self.op,
                                &coord,
                                &center_list,
                                &sources,
                                slack,
                            ) {
                                updated.push(off);
                                metrics.lists_tightened += 1;
                            }
                        }
                    }
                }
            }

            metrics.peak_live_lists = metrics.peak_live_lists.max(lists.len());
            enqueue(&mut updated, &lists, dist, &mut queue, observer, &mut metrics);
            enqueue(&mut fresh, &lists, dist, &mut queue, observer, &mut metrics);
        }

        metrics.total_us = start.elapsed().as_micros() as u64;
        debug!(
            "exact distance: {} cells finalized in {} plateaus, {} stale skips, {}us",
            metrics.points_finalized, metrics.plateaus, metrics.stale_skips, metrics.total_us,
        );
        Ok(metrics)
    }
}

/// Write each pending cell's current minimum to the output and queue it.
fn enqueue<T, O>(
    pending: &mut Vec<Offset>,
    lists: &IndexMap<Offset, SourceList<T>>,
    dist: &mut [T],
    queue: &mut PlateauQueue<T>,
    observer: &mut O,
    metrics: &mut TransformMetrics,
) where
    T: DistanceValue,
    O: TransformObserver<T> + ?Sized,
{
    for off in pending.drain(..) {
        let Some(list) = lists.get(&off) else {
            continue;
        };
        let d = list.min_distance();
        dist[off] = d;
        observer.on_write(off, d);
        queue.insert(d, off);
        metrics.queue_insertions += 1;
        metrics.peak_list_len = metrics.peak_list_len.max(list.len());
    }
}

/// Compute exact distances from `sources` into `out` with the default
/// configuration.
///
/// See [`ExactDistance::run`] for the error conditions.
pub fn exact_distance<I, D>(
    sources: I,
    op: D,
    out: &mut Grid<D::Value>,
) -> Result<(), TransformError>
where
    I: IntoIterator,
    I::Item: AsRef<[i32]>,
    D: DistanceOp,
{
    ExactDistance::new(op).run(sources, out).map(|_| ())
}

/// [`exact_distance`] with an explicit configuration.
pub fn exact_distance_with_config<I, D>(
    sources: I,
    op: D,
    config: TransformConfig,
    out: &mut Grid<D::Value>,
) -> Result<(), TransformError>
where
    I: IntoIterator,
    I::Item: AsRef<[i32]>,
    D: DistanceOp,
{
    ExactDistance::with_config(op, config)
        .run(sources, out)
        .map(|_| ())
}
