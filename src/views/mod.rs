//! Named view registry and render dispatch
//!
//! A view is any object that can produce bytes from an opaque data value
//! into a writable sink. The manager maps logical names to views and runs
//! the render-acquire-write-release sequence for each call, safe under
//! concurrent registration and rendering.

pub mod manager;
pub mod view;

// Re-export main types
pub use manager::ViewManager;
pub use view::{FnView, RenderResult, View};
