//! Redraw invalidation
//!
//! Property setters mark a view dirty; the host's next paint pass consumes the
//! flag and repaints. Setting the flag repeatedly before a paint pass collapses
//! into a single redraw, which is the only coalescing performed here.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared dirty flag for triggering redraws
pub type DirtyFlag = Arc<AtomicBool>;

/// Handle for requesting and consuming redraws
///
/// Cloning shares the underlying flag, so a host can hand the same invalidator
/// to several views and drive all of them from one frame loop.
#[derive(Clone, Debug, Default)]
pub struct Invalidator {
    flag: DirtyFlag,
}

impl Invalidator {
    /// Create an invalidator that starts clean
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing dirty flag
    pub fn from_flag(flag: DirtyFlag) -> Self {
        Self { flag }
    }

    /// Request a redraw on the next paint pass
    pub fn invalidate(&self) {
        tracing::trace!("invalidated");
        self.flag.store(true, Ordering::Release);
    }

    /// Whether a redraw is pending
    pub fn is_dirty(&self) -> bool {
        self.flag.load(Ordering::Acquire)
    }

    /// Consume the pending redraw, returning whether there was one
    pub fn take(&self) -> bool {
        self.flag.swap(false, Ordering::AcqRel)
    }

    /// The shared flag
    pub fn flag(&self) -> DirtyFlag {
        Arc::clone(&self.flag)
    }
}
