//! # sqlshape-core
//!
//! A permissive parser and layout formatter for SQL statements embedded in
//! application code.
//!
//! This crate provides:
//! - A regex-driven tokenizer with comment attachment
//! - Protection of bind markers (`:name`, `#name#`, `&name&`) during parsing
//! - A recursive descent parser that never fails
//! - A formatter that lays statements out in keyword columns
//!
//! ## Formatting
//!
//! ```rust
//! use sqlshape_core::{SqlFormatter, SqlParser};
//!
//! let root = SqlParser::new().parse("select a, b from t where x = :id");
//! let text = SqlFormatter::new().format(&root);
//!
//! assert_eq!(
//!     text,
//!     "SELECT    A,\n          B\nFROM      T\nWHERE     X = :id"
//! );
//! ```
//!
//! ## Unparsed Input
//!
//! Input that does not fit the grammar is kept, not rejected:
//!
//! ```rust
//! use sqlshape_core::SqlParser;
//!
//! let root = SqlParser::new().parse("SELECT A FROM B )");
//! assert_eq!(root.unparsed(), Some(")"));
//! ```

pub mod bind;
pub mod error;
pub mod formatter;
pub mod lexer;
pub mod parser;
pub mod tree;

pub use bind::{BindCodec, BindSyntax, GenericBindSyntax};
pub use error::{Error, Result};
pub use formatter::{DEFAULT_INDENT_WIDTH, FormatOptions, MAX_INDENT_WIDTH, SqlFormatter};
pub use lexer::Lexer;
pub use parser::SqlParser;
pub use tree::{Token, TokenKind};

/// Tokenizes SQL text into lexical tokens with their comments attached.
///
/// Bind markers are not protected; use [`SqlParser`] for that.
#[must_use]
pub fn tokenize(sql: &str) -> Vec<Token> {
    Lexer::new(sql).tokenize()
}

/// Parses and formats SQL text with the default settings.
#[must_use]
pub fn format_sql(sql: &str) -> String {
    SqlFormatter::new().format(&SqlParser::new().parse(sql))
}
