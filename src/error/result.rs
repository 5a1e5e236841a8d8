//! Result type alias for dashboard operations.

use super::context::ErrorContext;
use super::dash_error::DashError;

/// Type alias for Results using DashError.
pub type DashResult<T> = Result<T, DashError>;

/// Extension trait for Result types to add context to errors.
pub trait ResultExt<T> {
    /// Add context to an error if the result is Err.
    ///
    /// ```ignore
    /// use tvdash::error::{ErrorContext, ResultExt};
    ///
    /// let shows = api.fetch_shows(&query)
    ///     .await
    ///     .context(ErrorContext::new("fetch_shows"))?;
    /// ```
    fn context(self, ctx: ErrorContext) -> DashResult<T>;

    /// Add context using a closure (only called on error).
    fn with_context<F>(self, f: F) -> DashResult<T>
    where
        F: FnOnce() -> ErrorContext;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<DashError>,
{
    fn context(self, ctx: ErrorContext) -> DashResult<T> {
        self.map_err(|e| e.into().with_context(ctx))
    }

    fn with_context<F>(self, f: F) -> DashResult<T>
    where
        F: FnOnce() -> ErrorContext,
    {
        self.map_err(|e| e.into().with_context(f()))
    }
}
