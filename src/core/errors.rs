//! Error handling
//!
//! This application uses anyhow throughout. As an application (not a
//! library) we prefer contextual messages over an error type hierarchy;
//! every failure ends up as text in the status bar anyway.

#[allow(unused_imports)]
pub use anyhow::{anyhow, bail, ensure, Error};
use anyhow::{Context, Result};

/// Result type alias for convenience throughout the application
pub type AppResult<T> = Result<T>;

/// Helper for attaching common context to errors
pub trait AppContext<T> {
    /// Add file operation context to an error
    fn with_file_context<P: AsRef<std::path::Path>>(
        self,
        operation: &str,
        path: P,
    ) -> AppResult<T>;
}

impl<T, E> AppContext<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn with_file_context<P: AsRef<std::path::Path>>(
        self,
        operation: &str,
        path: P,
    ) -> AppResult<T> {
        self.with_context(|| {
            format!("Failed to {} file: {}", operation, path.as_ref().display())
        })
    }
}
