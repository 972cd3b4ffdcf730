//! Error conversion helpers for console I/O
//!
//! Provides an extension trait for attaching context to `io::Result`.

use std::io;

use crate::application::{ApplicationError, ApplicationResult};

/// Extension trait for converting `io::Result` to `ApplicationResult` with context.
pub trait IoResultExt<T> {
    /// Add context describing what was being done.
    ///
    /// # Example
    /// ```ignore
    /// console.ask(messages::CHOICE_PROMPT)
    ///     .with_context("read exploration choice")?;
    /// ```
    fn with_context(self, action: &str) -> ApplicationResult<T>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn with_context(self, action: &str) -> ApplicationResult<T> {
        self.map_err(|e| ApplicationError::io(action, e))
    }
}
