//! Per-run metrics for the distance transform.
//!
//! [`TransformMetrics`] captures timing and work counters for a single
//! [`ExactDistance::run`](crate::ExactDistance::run) call, useful for
//! profiling the effect of pruning and the choice of propagation element.

/// Timing and work counters collected during a single transform run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TransformMetrics {
    /// Wall-clock time for the entire run, in microseconds.
    pub total_us: u64,
    /// Number of source coordinates supplied.
    pub source_count: usize,
    /// Distinct cells queued while seeding around the sources.
    pub seeded_points: usize,
    /// Number of plateaus popped from the queue.
    pub plateaus: u64,
    /// Cells whose distance was finalized.
    pub points_finalized: usize,
    /// Queue entries skipped because their cell was already finalized.
    pub stale_skips: u64,
    /// Total queue insertions, seeding included.
    pub queue_insertions: u64,
    /// Source lists built for cells reached for the first time.
    pub lists_created: u64,
    /// Source lists whose minimum dropped after a merge or offer.
    pub lists_tightened: u64,
    /// Source lists cleared and restarted with a single candidate while
    /// seeding. Propagation merges re-filter instead and never reseed.
    pub lists_reseeded: u64,
    /// Largest number of source lists alive at once.
    pub peak_live_lists: usize,
    /// Longest source list observed.
    pub peak_list_len: usize,
    /// Lipschitz bound used for pruning, converted to `f64`. `None` when
    /// pruning was disabled.
    pub lipschitz_bound: Option<f64>,
}
