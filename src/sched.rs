//! One-shot scheduled callbacks and their cancellation handles.
//!
//! Nothing here blocks or spawns anything. A [`Deadline`] is just a point in
//! time plus a cancellation flag; whoever drives the game polls
//! [`Deadline::is_due`] from its frame/tick loop and fires the work itself.

use core::fmt;
use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    time::Duration,
};

#[cfg(test)]
use mock_instant::Instant;
#[cfg(not(test))]
use std::time::Instant;

/// Cancels a scheduled callback. Cloneable, so it can be held away from the
/// [`Deadline`] it controls; cancelling is idempotent and permanent.
#[derive(Clone)]
pub struct CancelHandle(Arc<AtomicBool>);

impl CancelHandle {
    pub(crate) fn new() -> Self {
        CancelHandle(Arc::new(AtomicBool::new(false)))
    }

    /// Stop the associated callback from ever firing.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    /// Check whether [`Self::cancel`] has been called on this handle yet.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

impl PartialEq for CancelHandle {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}
impl Eq for CancelHandle {}
impl fmt::Debug for CancelHandle {
    #[cfg_attr(coverage, no_coverage)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CancelHandle(...)")
    }
}

/// A callback scheduled for a fixed point in time.
///
/// Used for the pause between a pair being revealed and the pair being
/// resolved, so the player gets to see the second tile before both flip.
#[derive(Clone, Debug)]
pub struct Deadline {
    at: Instant,
    cancel: CancelHandle,
}

impl Deadline {
    /// Schedule a callback for `delay` from now.
    pub fn after(delay: Duration) -> Self {
        Self {
            at: Instant::now() + delay,
            cancel: CancelHandle::new(),
        }
    }

    /// A handle that can cancel this deadline from elsewhere.
    pub fn handle(&self) -> CancelHandle {
        self.cancel.clone()
    }

    /// Whether the scheduled time has passed and the callback should fire.
    /// Always false once cancelled.
    pub fn is_due(&self) -> bool {
        !self.cancel.is_cancelled() && Instant::now() > self.at
    }
}
