//! Error types for the command-line tool.

/// Errors that can occur while running a command.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// IO error (reading the input).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid formatter options.
    #[error("Invalid options: {0}")]
    Options(#[from] sqlshape_core::Error),

    /// The input was not fully understood.
    #[error("SQL was not fully parsed: {0}")]
    Unparsed(String),
}

/// Result type for command operations.
pub type Result<T> = std::result::Result<T, CliError>;
