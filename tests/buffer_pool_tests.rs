//! Tests for the bounded buffer pool and its lease semantics

use std::io::Write;

use viewkit::{BufferPool, ViewError};

#[test]
fn test_zero_capacity_rejected() {
    match BufferPool::new(0) {
        Err(ViewError::InvalidCapacity { capacity }) => assert_eq!(capacity, 0),
        other => panic!("expected InvalidCapacity, got {:?}", other),
    }
}

#[test]
fn test_acquire_from_empty_pool_is_fresh_and_empty() {
    let pool = BufferPool::new(4).unwrap();
    assert_eq!(pool.available(), 0);

    let lease = pool.acquire();
    assert!(lease.as_slice().is_empty());

    let stats = pool.stats();
    assert_eq!(stats.acquired, 1);
    assert_eq!(stats.recycled, 0);
    assert_eq!(stats.fresh(), 1);
}

#[test]
fn test_drop_parks_buffer_and_reuse_is_reset() {
    let pool = BufferPool::new(4).unwrap();

    let mut lease = pool.acquire();
    lease.write_all(b"stale contents").unwrap();
    drop(lease);
    assert_eq!(pool.available(), 1);

    // The recycled buffer must carry nothing over from the prior lease
    let lease = pool.acquire();
    assert!(lease.as_slice().is_empty());
    assert_eq!(pool.available(), 0);
    assert_eq!(pool.stats().recycled, 1);
}

#[test]
fn test_immediate_acquire_release_holds_at_most_one() {
    let pool = BufferPool::new(8).unwrap();
    for _ in 0..100 {
        let lease = pool.acquire();
        drop(lease);
        assert!(pool.available() <= 1);
    }
    assert_eq!(pool.available(), 1);
}

#[test]
fn test_held_count_never_exceeds_capacity() {
    let capacity = 3;
    let pool = BufferPool::new(capacity).unwrap();

    // Lease more buffers than the pool can park, then return them all
    let leases: Vec<_> = (0..capacity * 3).map(|_| pool.acquire()).collect();
    drop(leases);

    assert_eq!(pool.available(), capacity);
    // Excess buffers were silently discarded, not an error
    assert_eq!(pool.stats().discarded as usize, capacity * 2);
}

#[test]
fn test_saturated_release_discards_silently() {
    let pool = BufferPool::new(1).unwrap();

    let a = pool.acquire();
    let b = pool.acquire();
    drop(a); // parks, pool now full
    drop(b); // discarded

    assert_eq!(pool.available(), 1);
    assert_eq!(pool.stats().discarded, 1);
}

#[test]
fn test_stats_recycle_rate() {
    let pool = BufferPool::new(2).unwrap();

    drop(pool.acquire()); // fresh
    drop(pool.acquire()); // recycled
    drop(pool.acquire()); // recycled

    let stats = pool.stats();
    assert_eq!(stats.acquired, 3);
    assert_eq!(stats.recycled, 2);
    assert!((stats.recycle_rate() - 2.0 / 3.0).abs() < 1e-9);
}

#[test]
fn test_lease_write_accumulates() {
    let pool = BufferPool::new(1).unwrap();
    let mut lease = pool.acquire();

    write!(lease, "part one, ").unwrap();
    write!(lease, "part two").unwrap();
    assert_eq!(lease.as_slice(), b"part one, part two");

    let mut sink = Vec::new();
    lease.flush_to(&mut sink).unwrap();
    assert_eq!(sink, b"part one, part two");
}
