//! Per-cell candidate source lists and the Lipschitz pruning rules.
//!
//! Every queued cell owns a [`SourceList`]: the sources that might still
//! turn out to be its nearest, each with its distance to the cell, plus
//! the running minimum. Candidates further than `min + L` (the
//! [`Slack`]) can never win and are discarded.

use exdist_core::{Coord, DistanceValue};
use exdist_metric::DistanceOp;

/// Index of a source coordinate in the transform's source table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SourceId(pub usize);

/// Tolerance window above the current minimum within which candidates
/// are retained.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Slack<T> {
    /// Keep candidates with `d <= min + bound`.
    Bounded(T),
    /// Keep every candidate. Used to check that pruning never changes
    /// the result.
    Unbounded,
}

impl<T: DistanceValue> Slack<T> {
    /// Largest distance retained when the minimum is `min`, or `None`
    /// when nothing is ever discarded.
    pub fn ceiling(&self, min: T) -> Option<T> {
        match self {
            Self::Bounded(bound) => Some(min.saturating_add(*bound)),
            Self::Unbounded => None,
        }
    }

    /// Whether a candidate at distance `d` survives a minimum of `min`.
    pub fn admits(&self, d: T, min: T) -> bool {
        match self.ceiling(min) {
            Some(ceiling) => d <= ceiling,
            None => true,
        }
    }
}

/// What [`SourceList::offer`] did with a single candidate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Offer {
    /// Too far above the minimum, or already present.
    Discarded,
    /// Appended without changing the minimum.
    Appended,
    /// New minimum; the list was re-filtered and kept some entries.
    Tightened,
    /// New minimum so far below the old one that the list was cleared
    /// and restarted with the candidate alone.
    Reseeded,
}

/// Candidate sources for one cell.
///
/// Invariants (with pruning): the list is non-empty once seeded,
/// `min_distance` equals the smallest retained distance, no source
/// appears twice, and every retained distance is within the slack of
/// the minimum.
#[derive(Clone, Debug, PartialEq)]
pub struct SourceList<T> {
    min_distance: T,
    sources: Vec<(T, SourceId)>,
}

impl<T: DistanceValue> Default for SourceList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: DistanceValue> SourceList<T> {
    /// An empty list with the sentinel minimum.
    pub fn new() -> Self {
        Self {
            min_distance: T::MAX,
            sources: Vec::new(),
        }
    }

    /// A list holding a single source.
    pub fn seeded(distance: T, source: SourceId) -> Self {
        Self {
            min_distance: distance,
            sources: vec![(distance, source)],
        }
    }

    /// Smallest distance seen so far (`T::MAX` while empty).
    pub fn min_distance(&self) -> T {
        self.min_distance
    }

    /// Number of retained candidates.
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Whether no candidate is retained.
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Retained `(distance, source)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (T, SourceId)> + '_ {
        self.sources.iter().copied()
    }

    /// Whether `source` is retained.
    pub fn contains(&self, source: SourceId) -> bool {
        self.sources.iter().any(|&(_, s)| s == source)
    }

    /// Append unless `source` is already present. Leaves the minimum
    /// alone.
    pub fn add_point_if_absent(&mut self, distance: T, source: SourceId) -> bool {
        if self.contains(source) {
            return false;
        }
        self.sources.push((distance, source));
        true
    }

    /// Append without a duplicate check. Leaves the minimum alone.
    pub fn add_point(&mut self, distance: T, source: SourceId) {
        debug_assert!(!self.contains(source), "duplicate source {source:?}");
        self.sources.push((distance, source));
    }

    /// Drop every candidate with distance strictly above `threshold`.
    pub fn discard_all_above(&mut self, threshold: T) {
        self.sources.retain(|&(d, _)| d <= threshold);
    }

    /// Clear the list and restart it with a single candidate.
    pub fn re_init_with(&mut self, distance: T, source: SourceId) {
        self.sources.clear();
        self.sources.push((distance, source));
        self.min_distance = distance;
    }

    /// Offer one source at distance `d`, applying the four-way rule:
    /// discard when `min + L < d`, append when `min <= d`, reseed when
    /// `d + L < min`, otherwise re-filter against `d + L` and append.
    pub fn offer(&mut self, d: T, source: SourceId, slack: Slack<T>) -> Offer {
        if self.sources.is_empty() {
            self.re_init_with(d, source);
            return Offer::Reseeded;
        }
        let min = self.min_distance;
        if !slack.admits(d, min) {
            return Offer::Discarded;
        }
        if min <= d {
            return if self.add_point_if_absent(d, source) {
                Offer::Appended
            } else {
                Offer::Discarded
            };
        }
        match slack.ceiling(d) {
            Some(ceiling) if ceiling < min => {
                self.re_init_with(d, source);
                Offer::Reseeded
            }
            ceiling => {
                if let Some(ceiling) = ceiling {
                    self.discard_all_above(ceiling);
                }
                self.add_point(d, source);
                self.min_distance = d;
                Offer::Tightened
            }
        }
    }

    /// Build the list of a cell reached for the first time from a
    /// finalized neighbour.
    ///
    /// Single pass tracking the running minimum, then one filter against
    /// the final ceiling.
    pub fn from_propagation<D>(
        op: &D,
        at: &[i32],
        from: &SourceList<T>,
        sources: &[Coord],
        slack: Slack<T>,
    ) -> Self
    where
        D: DistanceOp<Value = T> + ?Sized,
    {
        let mut list = Self::new();
        for (_, id) in from.iter() {
            let d = op.distance(&sources[id.0], at);
            if slack.admits(d, list.min_distance) {
                list.sources.push((d, id));
            }
            if d < list.min_distance {
                list.min_distance = d;
            }
        }
        if let Some(ceiling) = slack.ceiling(list.min_distance) {
            list.discard_all_above(ceiling);
        }
        list
    }

    /// Merge the candidates of a finalized neighbour into a cell that is
    /// already queued.
    ///
    /// Sources already present are skipped. Candidates beyond the current
    /// ceiling are dropped, the rest appended, and if the minimum dropped
    /// the whole list is re-filtered once at the end. Returns `true` when
    /// the minimum was tightened, meaning the cell needs a new queue
    /// entry.
    pub fn merge_conditionally<D>(
        &mut self,
        op: &D,
        at: &[i32],
        from: &SourceList<T>,
        sources: &[Coord],
        slack: Slack<T>,
    ) -> bool
    where
        D: DistanceOp<Value = T> + ?Sized,
    {
        let mut tightened = false;
        for (_, id) in from.iter() {
            if self.contains(id) {
                continue;
            }
            let d = op.distance(&sources[id.0], at);
            if !slack.admits(d, self.min_distance) {
                continue;
            }
            if d < self.min_distance {
                self.min_distance = d;
                tightened = true;
            }
            self.sources.push((d, id));
        }
        if tightened {
            if let Some(ceiling) = slack.ceiling(self.min_distance) {
                self.discard_all_above(ceiling);
            }
        }
        tightened
    }
}
