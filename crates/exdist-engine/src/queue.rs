//! Hierarchical priority queue keyed by distance.

use exdist_core::{DistanceValue, Offset};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Total-order wrapper so float distances can key a `BTreeMap`.
#[derive(Clone, Copy, Debug)]
struct OrdKey<K>(K);

impl<K: DistanceValue> PartialEq for OrdKey<K> {
    fn eq(&self, other: &Self) -> bool {
        self.0.total_cmp(&other.0) == Ordering::Equal
    }
}

impl<K: DistanceValue> Eq for OrdKey<K> {}

impl<K: DistanceValue> PartialOrd for OrdKey<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: DistanceValue> Ord for OrdKey<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Priority queue of cell offsets grouped into plateaus of equal key.
///
/// Within a plateau, offsets keep insertion order. A cell may appear in
/// several plateaus; the engine skips stale entries when it pops them.
///
/// # Examples
///
/// ```
/// use exdist_engine::PlateauQueue;
///
/// let mut q = PlateauQueue::new();
/// q.insert(2.0_f64, 7);
/// q.insert(1.0, 3);
/// q.insert(1.0, 4);
///
/// assert_eq!(q.min_key(), Some(1.0));
/// assert_eq!(q.take_top_plateau(), Some((1.0, vec![3, 4])));
/// assert_eq!(q.len(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct PlateauQueue<K> {
    plateaus: BTreeMap<OrdKey<K>, Vec<Offset>>,
    len: usize,
}

impl<K: DistanceValue> Default for PlateauQueue<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: DistanceValue> PlateauQueue<K> {
    /// An empty queue.
    pub fn new() -> Self {
        Self {
            plateaus: BTreeMap::new(),
            len: 0,
        }
    }

    /// Append `offset` to the plateau with key `key`.
    pub fn insert(&mut self, key: K, offset: Offset) {
        self.plateaus.entry(OrdKey(key)).or_default().push(offset);
        self.len += 1;
    }

    /// Smallest key present, if any.
    pub fn min_key(&self) -> Option<K> {
        self.plateaus.keys().next().map(|k| k.0)
    }

    /// Whether no entries are queued.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Total number of queued entries across all plateaus.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Number of distinct keys.
    pub fn number_keys(&self) -> usize {
        self.plateaus.len()
    }

    /// Offsets of the lowest plateau, without removing them.
    pub fn top_plateau(&self) -> Option<&[Offset]> {
        self.plateaus.values().next().map(Vec::as_slice)
    }

    /// Discard the lowest plateau.
    pub fn pop_top_plateau(&mut self) {
        let _ = self.take_top_plateau();
    }

    /// Remove and return the lowest plateau with its key.
    pub fn take_top_plateau(&mut self) -> Option<(K, Vec<Offset>)> {
        let (key, offsets) = self.plateaus.pop_first()?;
        self.len -= offsets.len();
        Some((key.0, offsets))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_queue() {
        let mut q = PlateauQueue::<u64>::new();
        assert!(q.is_empty());
        assert_eq!(q.min_key(), None);
        assert_eq!(q.top_plateau(), None);
        assert_eq!(q.take_top_plateau(), None);
        q.pop_top_plateau();
        assert_eq!(q.len(), 0);
    }

    #[test]
    fn plateaus_keep_insertion_order() {
        let mut q = PlateauQueue::new();
        q.insert(5_u64, 10);
        q.insert(5, 2);
        q.insert(5, 10);
        assert_eq!(q.number_keys(), 1);
        assert_eq!(q.len(), 3);
        assert_eq!(q.top_plateau(), Some(&[10, 2, 10][..]));
    }

    #[test]
    fn pop_discards_lowest() {
        let mut q = PlateauQueue::new();
        q.insert(3.5_f64, 1);
        q.insert(0.5, 2);
        q.pop_top_plateau();
        assert_eq!(q.min_key(), Some(3.5));
        assert_eq!(q.len(), 1);
    }

    #[test]
    fn signed_zero_and_positive_keys_order() {
        let mut q = PlateauQueue::new();
        q.insert(1.0_f64, 1);
        q.insert(0.0, 0);
        q.insert(f64::MAX, 9);
        assert_eq!(q.take_top_plateau(), Some((0.0, vec![0])));
        assert_eq!(q.take_top_plateau(), Some((1.0, vec![1])));
        assert_eq!(q.take_top_plateau(), Some((f64::MAX, vec![9])));
        assert!(q.is_empty());
    }

    proptest! {
        #[test]
        fn drains_in_nondecreasing_key_order(
            entries in prop::collection::vec((0u32..50, 0usize..100), 0..64),
        ) {
            let mut q = PlateauQueue::new();
            for &(k, off) in &entries {
                q.insert(k, off);
            }
            prop_assert_eq!(q.len(), entries.len());

            let mut seen = 0;
            let mut last = None;
            while let Some((k, offsets)) = q.take_top_plateau() {
                if let Some(prev) = last {
                    prop_assert!(prev < k);
                }
                prop_assert!(!offsets.is_empty());
                seen += offsets.len();
                last = Some(k);
            }
            prop_assert_eq!(seen, entries.len());
        }
    }
}
