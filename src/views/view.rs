//! The renderable capability

use std::io::Write;

use serde_json::Value;

use crate::error::BoxedError;

/// Result type returned by view implementations
pub type RenderResult<T> = std::result::Result<T, BoxedError>;

/// A renderable object, such as a pre-built template.
///
/// The manager never inspects a view's internals; any templating engine,
/// string formatter, or test stub satisfies this by writing bytes derived
/// from `data` into `out`. Implementations must be shareable across the
/// threads rendering concurrently.
pub trait View: Send + Sync {
    /// Produce bytes from `data` into `out`, or fail with the
    /// implementation's own error
    fn render(&self, out: &mut dyn Write, data: &Value) -> RenderResult<()>;
}

impl std::fmt::Debug for dyn View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("View")
    }
}

/// Adapter that turns a closure into a [`View`].
///
/// Handy for small formatters and test stubs:
///
/// ```
/// use viewkit::{FnView, ViewManager};
/// use std::io::Write;
/// use std::sync::Arc;
///
/// let manager = ViewManager::new(8).unwrap();
/// manager.register(
///     "greet",
///     Arc::new(FnView::new(|out: &mut dyn Write, data| {
///         write!(out, "Hello, {}", data["name"].as_str().unwrap_or("world"))?;
///         Ok(())
///     })),
/// );
/// ```
pub struct FnView<F>(F);

impl<F> FnView<F>
where
    F: Fn(&mut dyn Write, &Value) -> RenderResult<()> + Send + Sync,
{
    /// Wrap a render closure
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

impl<F> View for FnView<F>
where
    F: Fn(&mut dyn Write, &Value) -> RenderResult<()> + Send + Sync,
{
    fn render(&self, out: &mut dyn Write, data: &Value) -> RenderResult<()> {
        (self.0)(out, data)
    }
}
