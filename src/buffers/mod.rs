//! Reusable render buffers and the bounded pool that holds them
//!
//! This module eliminates steady-state allocation on the render hot path:
//! a fixed-capacity pool hands out byte buffers (recycled or fresh) and
//! silently discards returned buffers once it is saturated.

pub mod lease;
pub mod pool;
pub mod stats;

// Re-export main types
pub use lease::BufferLease;
pub use pool::BufferPool;
pub use stats::PoolStats;
