//! Recursive descent SQL parser.
//!
//! The grammar is permissive: anything that does not fit is kept as an
//! Unparsed residue instead of raising an error.

mod guard;
mod parser;

pub use parser::SqlParser;
