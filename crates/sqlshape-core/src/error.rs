//! Error types for the formatter configuration.
//!
//! Parsing itself never fails; problems in the input surface as an
//! Unparsed residue or diagnostic comments in the tree.

/// Errors returned by the fallible parts of the library.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The indent width is outside the supported range.
    #[error("Invalid indent width {width}: expected a value between 1 and {max}")]
    InvalidIndentWidth {
        /// The rejected width.
        width: usize,
        /// The largest accepted width.
        max: usize,
    },
}

/// Result type for library operations.
pub type Result<T> = std::result::Result<T, Error>;
