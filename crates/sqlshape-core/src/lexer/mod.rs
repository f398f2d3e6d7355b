//! SQL Lexer/Tokenizer
//!
//! Literal spans are cut out first by a hand-written scanner, then the
//! remaining raw text goes through ordered regex sweeps that classify
//! keywords, operators, names and punctuation.

mod scanner;
mod sweep;
mod tokenizer;

pub use tokenizer::Lexer;
