//! Instrumentation hooks for the propagation loop.

/// Callbacks invoked by [`ExactDistance::run_observed`](crate::ExactDistance::run_observed).
///
/// Every method has a no-op default, so implementors only override what
/// they need. Hooks run inline on the propagation loop; keep them cheap.
pub trait TransformObserver<T> {
    /// A plateau with key `key` is about to be finalized.
    fn on_plateau(&mut self, key: T) {
        let _ = key;
    }

    /// `value` was written to the output at `offset`. A cell can be
    /// written several times while queued; the last write is final.
    fn on_write(&mut self, offset: usize, value: T) {
        let _ = (offset, value);
    }

    /// The cell at `offset` was finalized with distance `value`.
    fn on_finalize(&mut self, offset: usize, value: T) {
        let _ = (offset, value);
    }
}

/// Observer that ignores every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl<T> TransformObserver<T> for NoopObserver {}
