//! Error types and handling for viewkit

/// Result type alias for viewkit operations
pub type Result<T> = std::result::Result<T, ViewError>;

/// Boxed error type produced by view implementations.
///
/// Views are external collaborators (templating engines, formatters, test
/// stubs) and carry their own error types; the manager propagates them
/// without inspection.
pub type BoxedError = Box<dyn std::error::Error + Send + Sync>;

/// Error types for the view manager and its buffer pool
#[derive(Debug, thiserror::Error)]
pub enum ViewError {
    /// Buffer pool capacity must be greater than zero. Raised at
    /// construction time; hosts should treat it as fatal and abort startup.
    #[error("invalid buffer pool capacity: {capacity} (must be greater than zero)")]
    InvalidCapacity { capacity: usize },

    /// Render was called with a name that has no registered view
    #[error("view not registered: {name}")]
    ViewNotFound { name: String },

    /// A view's own render step failed; the underlying cause is passed
    /// through unchanged
    #[error(transparent)]
    Render(#[from] BoxedError),

    /// Writing the rendered bytes to the caller's sink failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl ViewError {
    /// Create an invalid capacity error
    pub fn invalid_capacity(capacity: usize) -> Self {
        Self::InvalidCapacity { capacity }
    }

    /// Create a view not found error
    pub fn view_not_found(name: impl Into<String>) -> Self {
        Self::ViewNotFound { name: name.into() }
    }

    /// Create an I/O error from a standard I/O error
    pub fn from_io(source: std::io::Error, context: &str) -> Self {
        Self::Io {
            message: format!("{}: {}", context, source),
            source,
        }
    }
}
