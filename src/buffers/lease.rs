//! Exclusive buffer leases with scoped release

use std::io::{self, Write};
use std::ops::{Deref, DerefMut};

use super::pool::BufferPool;

/// Exclusive ownership of a pooled buffer for the duration of one render.
///
/// The lease derefs to the underlying byte buffer and accepts writes
/// directly. On drop the buffer is cleared and returned to its pool exactly
/// once, on every exit path including panics, so a leased buffer can never
/// leak or be aliased by a concurrent render.
#[derive(Debug)]
pub struct BufferLease<'a> {
    pool: &'a BufferPool,
    // Option so drop can move the buffer back to the pool
    buf: Option<Vec<u8>>,
}

impl<'a> BufferLease<'a> {
    pub(crate) fn new(pool: &'a BufferPool, buf: Vec<u8>) -> Self {
        Self {
            pool,
            buf: Some(buf),
        }
    }

    /// Copy the accumulated bytes to `sink` in full
    pub fn flush_to(&self, sink: &mut dyn Write) -> io::Result<()> {
        sink.write_all(self.as_slice())
    }

    /// Accumulated bytes written so far
    pub fn as_slice(&self) -> &[u8] {
        self.buf.as_deref().unwrap_or(&[])
    }
}

impl Deref for BufferLease<'_> {
    type Target = Vec<u8>;

    fn deref(&self) -> &Vec<u8> {
        self.buf.as_ref().expect("buffer present until drop")
    }
}

impl DerefMut for BufferLease<'_> {
    fn deref_mut(&mut self) -> &mut Vec<u8> {
        self.buf.as_mut().expect("buffer present until drop")
    }
}

impl Write for BufferLease<'_> {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.deref_mut().extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for BufferLease<'_> {
    fn drop(&mut self) {
        if let Some(buf) = self.buf.take() {
            self.pool.release(buf);
        }
    }
}
