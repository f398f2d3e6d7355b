//! Token tree
//!
//! A single tagged token type is shared by every stage: the tokenizer emits
//! lexical tokens, the parser wraps them into structural tokens, and the
//! formatter reads the finished tree.

mod kind;
mod token;

pub use kind::TokenKind;
pub use token::{Descendants, Token};
