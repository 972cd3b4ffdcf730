//! Application-level errors

use thiserror::Error;

/// Application errors: everything the builder, explorer and settings loader can fail with.
///
/// Bad answers from the user are not errors; they are handled by re-prompting.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("I/O error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("config error: {message}")]
    Config { message: String },
}

impl ApplicationError {
    /// Create an I/O error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
