//! Literal span scanner.
//!
//! Splits the input into protected spans (comments, text literals, quoted
//! names) and the raw text between them. Keyword and operator sweeps only
//! ever see the raw spans.

use crate::tree::{Token, TokenKind};

/// Scans the input for literal spans.
pub(crate) struct Scanner<'a> {
    /// The input source text.
    input: &'a str,
    /// The current byte position.
    pos: usize,
    /// The byte position where the current raw span started.
    raw_start: usize,
}

impl<'a> Scanner<'a> {
    /// Creates a new scanner for the given input.
    #[must_use]
    pub(crate) const fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            raw_start: 0,
        }
    }

    /// Returns the character at `pos` without advancing.
    fn peek_at(&self, pos: usize) -> Option<char> {
        self.input.get(pos..)?.chars().next()
    }

    /// Returns the character after the one at `pos`.
    fn peek_after(&self, pos: usize) -> Option<char> {
        let mut chars = self.input.get(pos..)?.chars();
        chars.next();
        chars.next()
    }

    /// Finds the end of a quoted span opened at `start`. A doubled quote
    /// inside the span is an escaped quote.
    fn quoted_end(&self, start: usize, quote: char) -> Option<usize> {
        let mut pos = start + quote.len_utf8();
        loop {
            let c = self.peek_at(pos)?;
            pos += c.len_utf8();
            if c == quote {
                if self.peek_at(pos) == Some(quote) {
                    pos += quote.len_utf8();
                } else {
                    return Some(pos);
                }
            }
        }
    }

    /// Finds the end of a span opened at `start` and closed by `close`.
    fn delimited_end(&self, start: usize, open_len: usize, close: &str) -> Option<usize> {
        let body = start + open_len;
        self.input
            .get(body..)?
            .find(close)
            .map(|offset| body + offset + close.len())
    }

    /// Returns the kind and end of a literal span starting at the current
    /// position, if one starts here and is terminated.
    fn literal_at(&self) -> Option<(TokenKind, usize)> {
        let start = self.pos;
        match self.peek_at(start)? {
            '\'' => self
                .quoted_end(start, '\'')
                .map(|end| (TokenKind::Text, end)),
            '"' => self
                .quoted_end(start, '"')
                .map(|end| (TokenKind::Name, end)),
            '{' => self
                .delimited_end(start, 1, "}")
                .map(|end| (TokenKind::Comment, end)),
            '/' if self.peek_after(start) == Some('*') => self
                .delimited_end(start, 2, "*/")
                .map(|end| (TokenKind::Comment, end)),
            _ => None,
        }
    }

    /// Pushes the raw span that ends at the current position.
    fn flush_raw(&mut self, out: &mut Vec<Token>) {
        if self.raw_start < self.pos {
            out.push(Token::lexical(
                TokenKind::Raw,
                &self.input[self.raw_start..self.pos],
            ));
        }
    }

    /// Splits the whole input into raw and literal tokens.
    #[must_use]
    pub(crate) fn scan(mut self) -> Vec<Token> {
        let mut out = Vec::new();
        while let Some(c) = self.peek_at(self.pos) {
            if let Some((kind, end)) = self.literal_at() {
                self.flush_raw(&mut out);
                out.push(Token::lexical(kind, &self.input[self.pos..end]));
                self.pos = end;
                self.raw_start = end;
            } else {
                self.pos += c.len_utf8();
            }
        }
        self.flush_raw(&mut out);
        out
    }
}
