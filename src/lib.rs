//! # viewkit - Pooled-Buffer View Registry and Render Dispatcher
//!
//! viewkit maps logical names to pre-built renderable objects ("views") and
//! dispatches renders to them under concurrent request load, staging output
//! in a bounded pool of reusable byte buffers instead of allocating one per
//! request.
//!
//! ## Features
//!
//! - **Named view registry**: register and replace views at runtime, safely
//!   concurrent with in-flight renders
//! - **Bounded buffer pool**: non-blocking acquire/release, silent discard
//!   on saturation, zero steady-state allocation on the hot path
//! - **Scoped buffer leases**: a leased buffer returns to the pool exactly
//!   once on every exit path, including panics
//! - **Engine-agnostic**: any templating engine, formatter, or test stub
//!   plugs in through the single-method [`View`] trait
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │                 ViewManager                   │
//! ├───────────────────────────────────────────────┤
//! │  name → view registry   │   BufferPool        │
//! │  (RwLock<HashMap>)      │   (bounded channel) │
//! └───────────────────────────────────────────────┘
//!            │                        │
//!            ▼                        ▼
//!   resolve under read lock    lease a buffer,
//!   (old or new entry,         render into it,
//!    never torn)               flush to the sink
//! ```
//!
//! viewkit does not parse, compile, or cache template source and has no
//! network surface; the surrounding server registers views at startup and
//! calls [`ViewManager::render`] per request, mapping any returned error to
//! its own failure response.
//!
//! ## Example
//!
//! ```
//! use std::io::Write;
//! use std::sync::Arc;
//! use viewkit::{FnView, ViewManager};
//!
//! let manager = ViewManager::new(50).unwrap();
//! manager.register(
//!     "greet",
//!     Arc::new(FnView::new(|out: &mut dyn Write, data| {
//!         write!(out, "Hello, {}", data["name"].as_str().unwrap_or("world"))?;
//!         Ok(())
//!     })),
//! );
//!
//! let mut sink = Vec::new();
//! manager
//!     .render("greet", &mut sink, &serde_json::json!({ "name": "Ada" }))
//!     .unwrap();
//! assert_eq!(sink, b"Hello, Ada");
//! ```

// Core modules
pub mod buffers;
pub mod error;
pub mod views;

// Re-export commonly used types
pub use buffers::{BufferLease, BufferPool, PoolStats};
pub use error::{BoxedError, Result, ViewError};
pub use views::{FnView, RenderResult, View, ViewManager};
