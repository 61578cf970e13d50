//! View manager: named registry plus pooled render dispatch

use std::{
    collections::HashMap,
    io::Write,
    sync::{Arc, RwLock},
};

use serde_json::Value;

use crate::{
    buffers::{BufferPool, PoolStats},
    error::{Result, ViewError},
};

use super::view::View;

/// Thread-safe registry of named views with pooled-buffer rendering.
///
/// A single manager instance is typically shared across all request
/// handlers: registrations happen at startup (or at runtime, to replace a
/// view in place) while renders run concurrently. The name mapping sits
/// behind a reader/writer lock whose critical sections are a single map
/// operation; render output is staged in a pooled buffer and only flushed
/// to the caller's sink once the view has finished writing.
#[derive(Debug)]
pub struct ViewManager {
    views: RwLock<HashMap<String, Arc<dyn View>>>,
    buffers: BufferPool,
}

impl ViewManager {
    /// Create a manager with an empty registry.
    ///
    /// `pool_capacity` bounds the number of idle render buffers kept for
    /// reuse and must be greater than zero; typically 50 or more to absorb
    /// bursts of concurrent renders. A zero capacity is a configuration
    /// error the host should treat as fatal.
    pub fn new(pool_capacity: usize) -> Result<Self> {
        Ok(Self {
            views: RwLock::new(HashMap::new()),
            buffers: BufferPool::new(pool_capacity)?,
        })
    }

    /// Create a manager pre-populated with an initial set of views
    pub fn with_views(pool_capacity: usize, views: HashMap<String, Arc<dyn View>>) -> Result<Self> {
        Ok(Self {
            views: RwLock::new(views),
            buffers: BufferPool::new(pool_capacity)?,
        })
    }

    /// Register or replace the view under `name`.
    ///
    /// Safe to call at any time, concurrently with renders: readers see
    /// either the old or the new entry, never a torn one. Returns `&self`
    /// for chaining.
    pub fn register(&self, name: impl Into<String>, view: Arc<dyn View>) -> &Self {
        self.views.write().unwrap().insert(name.into(), view);
        self
    }

    /// Render the view registered under `name` into `sink`.
    ///
    /// The view writes into a pooled buffer, not directly into `sink`; the
    /// sink only sees bytes once the view has succeeded, so a mid-render
    /// failure never emits a partial response. The buffer returns to the
    /// pool on every exit path.
    ///
    /// Errors: [`ViewError::ViewNotFound`] when `name` has no registered
    /// view (no buffer is acquired on that path), the view's own error
    /// passed through unchanged when rendering fails, or
    /// [`ViewError::Io`] when flushing to `sink` fails.
    pub fn render(&self, name: &str, sink: &mut dyn Write, data: &Value) -> Result<()> {
        // Clone the Arc out so the read lock is held only for the lookup,
        // never across a render.
        let view = {
            let views = self.views.read().unwrap();
            views.get(name).cloned()
        };
        let view = view.ok_or_else(|| ViewError::view_not_found(name))?;

        let mut buf = self.buffers.acquire();
        view.render(&mut buf, data).map_err(ViewError::Render)?;
        buf.flush_to(sink)
            .map_err(|e| ViewError::from_io(e, "flush rendered view"))
    }

    /// Whether a view is registered under `name`
    pub fn contains(&self, name: &str) -> bool {
        self.views.read().unwrap().contains_key(name)
    }

    /// Number of registered views
    pub fn len(&self) -> usize {
        self.views.read().unwrap().len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.views.read().unwrap().is_empty()
    }

    /// The render buffer pool, exposed for observability and tests
    pub fn buffer_pool(&self) -> &BufferPool {
        &self.buffers
    }

    /// Snapshot of the buffer pool's activity counters
    pub fn pool_stats(&self) -> PoolStats {
        self.buffers.stats()
    }
}
