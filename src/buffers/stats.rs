//! Buffer pool statistics tracking

use std::sync::atomic::{AtomicU64, Ordering};

/// Atomic counters updated by the pool on the hot path
#[derive(Debug, Default)]
pub(crate) struct AtomicPoolStats {
    /// Total number of acquires served
    pub acquired: AtomicU64,
    /// Acquires served from a parked buffer rather than a fresh allocation
    pub recycled: AtomicU64,
    /// Buffers dropped on release because the pool was saturated
    pub discarded: AtomicU64,
}

impl AtomicPoolStats {
    pub fn record_acquire(&self, reused: bool) {
        self.acquired.fetch_add(1, Ordering::Relaxed);
        if reused {
            self.recycled.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn record_discard(&self) {
        self.discarded.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> PoolStats {
        PoolStats {
            acquired: self.acquired.load(Ordering::Relaxed),
            recycled: self.recycled.load(Ordering::Relaxed),
            discarded: self.discarded.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time snapshot of buffer pool activity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PoolStats {
    /// Total number of acquires served
    pub acquired: u64,
    /// Acquires served from a parked buffer
    pub recycled: u64,
    /// Buffers dropped on release due to pool saturation
    pub discarded: u64,
}

impl PoolStats {
    /// Acquires that had to allocate a fresh buffer
    pub fn fresh(&self) -> u64 {
        self.acquired - self.recycled
    }

    /// Fraction of acquires served from the pool (0.0 to 1.0)
    pub fn recycle_rate(&self) -> f64 {
        if self.acquired == 0 {
            return 0.0;
        }
        self.recycled as f64 / self.acquired as f64
    }
}
