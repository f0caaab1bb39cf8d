//! # Cooperative Cancellation
//!
//! A run can be asked to stop early. The signal is *cooperative*: the engine
//! checks it between modules and between retry attempts, never in the middle
//! of an in-flight phase invocation. Modules observed after the signal is
//! raised terminate with a distinct `Cancelled` outcome rather than a failure.
//!
//! The pair pattern mirrors the rest of the engine's channel plumbing: one
//! call produces the handle (kept by the host) and the signal (threaded into
//! the run).

use tokio::sync::watch;

/// Host-side handle used to request cancellation of a run.
pub struct CancelHandle {
    sender: watch::Sender<bool>,
}

/// Engine-side view of the cancellation signal.
///
/// Cheap to clone; all clones observe the same signal.
#[derive(Clone)]
pub struct Cancellation {
    receiver: watch::Receiver<bool>,
}

impl CancelHandle {
    /// Creates a handle/signal pair.
    pub fn new() -> (CancelHandle, Cancellation) {
        let (sender, receiver) = watch::channel(false);
        (CancelHandle { sender }, Cancellation { receiver })
    }

    /// Raises the signal. Idempotent; the run winds down at its next check.
    pub fn cancel(&self) {
        let _ = self.sender.send(true);
    }
}

impl Cancellation {
    /// A signal that is never raised, for runs without a cancellation path.
    pub fn inert() -> Self {
        let (sender, receiver) = watch::channel(false);
        // Dropping the sender freezes the value at `false`.
        drop(sender);
        Self { receiver }
    }

    /// Whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        *self.receiver.borrow()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signal_observes_cancel() {
        let (handle, signal) = CancelHandle::new();
        assert!(!signal.is_cancelled());
        handle.cancel();
        assert!(signal.is_cancelled());
    }

    #[test]
    fn clones_share_the_signal() {
        let (handle, signal) = CancelHandle::new();
        let clone = signal.clone();
        handle.cancel();
        assert!(clone.is_cancelled());
    }

    #[test]
    fn inert_signal_never_fires() {
        let signal = Cancellation::inert();
        assert!(!signal.is_cancelled());
    }
}
