//! Fault counters for the overlay core
//!
//! Data-integrity faults degrade to "no highlight shown" instead of
//! failing the viewer; these counters let hosts notice them anyway.

use std::sync::atomic::{AtomicUsize, Ordering};

static MISSING_GEOMETRY: AtomicUsize = AtomicUsize::new(0);
static DUPLICATE_IDENTITY: AtomicUsize = AtomicUsize::new(0);
static STALE_SELECTION: AtomicUsize = AtomicUsize::new(0);

/// Snapshot of the fault counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FaultCounts {
    /// Spans dropped for missing or non-finite geometry.
    pub missing_geometry: usize,
    /// Span ids seen more than once within a batch.
    pub duplicate_identity: usize,
    /// Selections referencing an id absent from the current batch.
    pub stale_selection: usize,
}

pub(crate) fn record_missing_geometry(count: usize) {
    MISSING_GEOMETRY.fetch_add(count, Ordering::Relaxed);
}

pub(crate) fn record_duplicate_identity(count: usize) {
    DUPLICATE_IDENTITY.fetch_add(count, Ordering::Relaxed);
}

pub(crate) fn record_stale_selection() {
    STALE_SELECTION.fetch_add(1, Ordering::Relaxed);
}

/// Counters accumulated since process start.
#[must_use]
pub fn fault_counts() -> FaultCounts {
    FaultCounts {
        missing_geometry: MISSING_GEOMETRY.load(Ordering::Relaxed),
        duplicate_identity: DUPLICATE_IDENTITY.load(Ordering::Relaxed),
        stale_selection: STALE_SELECTION.load(Ordering::Relaxed),
    }
}
