//! Per-cell propagation labels.

/// State of a grid cell during a distance transform.
///
/// Transitions are monotone: `Candidate -> Queued -> Processed`. A cell
/// never moves backwards, and `Processed` is terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CellState {
    /// Never touched by the wavefront.
    #[default]
    Candidate = 0,
    /// On the wavefront; its distance estimate may still decrease.
    Queued = 1,
    /// Finalized; its distance is exact.
    Processed = 2,
}

impl CellState {
    /// Returns `true` if moving from `self` to `next` respects the
    /// monotone lifecycle. Staying in the same state is allowed.
    pub fn can_transition_to(self, next: CellState) -> bool {
        (self as u8) <= (next as u8)
    }

    /// Returns `true` for [`CellState::Processed`].
    pub fn is_final(self) -> bool {
        self == CellState::Processed
    }
}
