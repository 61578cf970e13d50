//! Bounded, non-blocking buffer pool

use crossbeam_channel::{bounded, Receiver, Sender, TryRecvError};

use crate::error::{Result, ViewError};

use super::lease::BufferLease;
use super::stats::{AtomicPoolStats, PoolStats};

/// A fixed-capacity pool of reusable byte buffers.
///
/// The holding area is a bounded channel: `acquire` try-pops a parked buffer
/// and falls back to a fresh allocation, `release` (via [`BufferLease`] drop)
/// try-pushes the cleared buffer back and discards it when the channel is
/// full. Neither path ever blocks, and no lock is layered on top.
#[derive(Debug)]
pub struct BufferPool {
    tx: Sender<Vec<u8>>,
    rx: Receiver<Vec<u8>>,
    capacity: usize,
    stats: AtomicPoolStats,
}

impl BufferPool {
    /// Create a pool holding at most `capacity` idle buffers.
    ///
    /// A capacity of zero is a configuration error, not a runtime condition;
    /// callers are expected to abort startup on it.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(ViewError::invalid_capacity(capacity));
        }
        let (tx, rx) = bounded(capacity);
        Ok(Self {
            tx,
            rx,
            capacity,
            stats: AtomicPoolStats::default(),
        })
    }

    /// Lease a buffer: a parked one if available, otherwise a fresh empty
    /// allocation. Never blocks. The buffer returns to the pool when the
    /// lease is dropped.
    pub fn acquire(&self) -> BufferLease<'_> {
        let (buf, reused) = match self.rx.try_recv() {
            Ok(buf) => (buf, true),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => (Vec::new(), false),
        };
        self.stats.record_acquire(reused);
        BufferLease::new(self, buf)
    }

    /// Park a cleared buffer back into the holding area, dropping it
    /// silently when the pool is saturated. Called from lease drop.
    pub(crate) fn release(&self, mut buf: Vec<u8>) {
        buf.clear();
        if self.tx.try_send(buf).is_err() {
            self.stats.record_discard();
        }
    }

    /// Number of idle buffers currently parked in the pool
    pub fn available(&self) -> usize {
        self.rx.len()
    }

    /// Maximum number of idle buffers the pool will hold
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Snapshot of acquire/recycle/discard counters
    pub fn stats(&self) -> PoolStats {
        self.stats.snapshot()
    }
}
