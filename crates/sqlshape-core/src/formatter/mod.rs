//! SQL formatter.
//!
//! Walks a parsed token tree and lays it out with keyword columns: every
//! part keyword starts a line and its list is aligned to the next indent
//! stop.

mod formatter;
mod writer;

pub use formatter::SqlFormatter;

use crate::error::{Error, Result};

/// Indent width used when none is configured.
pub const DEFAULT_INDENT_WIDTH: usize = 10;

/// Largest accepted indent width.
pub const MAX_INDENT_WIDTH: usize = 40;

/// Layout options for [`SqlFormatter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    indent_width: usize,
}

impl FormatOptions {
    /// Creates options with the given indent width.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIndentWidth`] unless `1 <= width <= MAX_INDENT_WIDTH`.
    pub const fn new(indent_width: usize) -> Result<Self> {
        if indent_width == 0 || indent_width > MAX_INDENT_WIDTH {
            return Err(Error::InvalidIndentWidth {
                width: indent_width,
                max: MAX_INDENT_WIDTH,
            });
        }
        Ok(Self { indent_width })
    }

    /// Returns the indent width.
    #[must_use]
    pub const fn indent_width(&self) -> usize {
        self.indent_width
    }
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            indent_width: DEFAULT_INDENT_WIDTH,
        }
    }
}
