//! Token tree layout.

use super::writer::LayoutWriter;
use super::FormatOptions;
use crate::tree::{Token, TokenKind};

/// Marker line emitted in front of an Unparsed residue.
const UNPARSED_MARKER: &str = "/*XXX unparsed*/";

/// Formats parsed statements into indented text.
#[derive(Debug, Clone, Copy, Default)]
pub struct SqlFormatter {
    options: FormatOptions,
}

impl SqlFormatter {
    /// Creates a formatter with the default indent width.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a formatter with the given options.
    #[must_use]
    pub const fn with_options(options: FormatOptions) -> Self {
        Self { options }
    }

    /// Returns the options in use.
    #[must_use]
    pub const fn options(&self) -> FormatOptions {
        self.options
    }

    /// Formats a token tree, usually the root Statement returned by
    /// [`SqlParser::parse`](crate::SqlParser::parse).
    #[must_use]
    pub fn format(&self, root: &Token) -> String {
        let mut layout = Layout {
            w: LayoutWriter::new(self.options.indent_width()),
        };
        layout.token(root, true);
        layout.w.finish()
    }
}

/// A single formatting run.
///
/// `multiline` is true inside part lists and multiline brackets, false
/// inside inline brackets.
struct Layout {
    w: LayoutWriter,
}

impl Layout {
    fn token(&mut self, token: &Token, multiline: bool) {
        match token.kind() {
            TokenKind::Statement => self.statement(token),
            TokenKind::SingleStatement => {
                for part in token.children() {
                    self.token(part, multiline);
                }
            }
            TokenKind::Part => self.part(token),
            TokenKind::ListExpr => self.list_expr(token, multiline),
            TokenKind::OrExpr => self.or_expr(token, multiline),
            TokenKind::AndExpr => self.and_expr(token, multiline),
            TokenKind::MathExpr => self.math_expr(token, multiline),
            TokenKind::Atom => self.atom(token, multiline),
            TokenKind::UnaryPrefixExpr => {
                for (i, child) in token.children().iter().enumerate() {
                    if i > 0 {
                        self.w.write(" ");
                    }
                    self.token(child, multiline);
                }
            }
            TokenKind::MinusExpr | TokenKind::FunExpr => {
                for child in token.children() {
                    self.token(child, multiline);
                }
            }
            TokenKind::BracketExpr => self.bracket_expr(token),
            TokenKind::Unparsed => self.w.write(token.text()),
            _ => self.lexical(token),
        }
    }

    fn statement(&mut self, token: &Token) {
        for child in token.children() {
            match child.kind() {
                TokenKind::UnionToken => {
                    self.w.start_line();
                    self.lexical(child);
                    self.w.newline();
                }
                TokenKind::Unparsed => {
                    self.w.start_line();
                    self.w.write(UNPARSED_MARKER);
                    self.w.newline();
                    self.w.write(child.text());
                }
                _ => {
                    self.w.start_line();
                    self.token(child, true);
                }
            }
        }
    }

    fn part(&mut self, token: &Token) {
        self.w.start_line();
        let mut children = token.children().iter();
        if let Some(keyword) = children.next() {
            self.lexical(keyword);
        }
        self.w.indent();
        match children.next() {
            Some(list) => self.token(list, true),
            None => self.w.write(" "),
        }
        self.w.dedent();
    }

    fn list_expr(&mut self, token: &Token, multiline: bool) {
        for child in token.children() {
            if child.kind() == TokenKind::ListSeparator {
                self.lexical(child);
                if multiline {
                    self.w.newline();
                } else {
                    self.w.write(" ");
                }
            } else {
                self.token(child, multiline);
            }
        }
    }

    fn or_expr(&mut self, token: &Token, multiline: bool) {
        let mut after_op = false;
        for child in token.children() {
            if child.kind() == TokenKind::OrOp {
                if multiline {
                    self.w.newline();
                } else {
                    self.w.write(" ");
                }
                self.lexical(child);
                after_op = true;
            } else {
                if after_op {
                    if multiline {
                        self.w.newline();
                    } else {
                        self.w.write(" ");
                    }
                }
                self.token(child, multiline);
            }
        }
    }

    fn and_expr(&mut self, token: &Token, multiline: bool) {
        let mut after_op = false;
        for child in token.children() {
            if child.kind() == TokenKind::AndOp {
                if multiline {
                    self.w.newline();
                } else {
                    self.w.write(" ");
                }
                self.lexical(child);
                after_op = true;
            } else {
                if after_op {
                    self.w.write(" ");
                }
                self.token(child, multiline);
            }
        }
    }

    fn math_expr(&mut self, token: &Token, multiline: bool) {
        for (i, child) in token.children().iter().enumerate() {
            if i > 0 {
                self.w.write(" ");
            }
            self.token(child, multiline);
        }
    }

    fn atom(&mut self, token: &Token, multiline: bool) {
        for (i, child) in token.children().iter().enumerate() {
            if i > 0 && child.kind() != TokenKind::OuterJoinMarker {
                self.w.write(" ");
            }
            self.token(child, multiline);
        }
    }

    fn bracket_expr(&mut self, token: &Token) {
        let children = token.children();
        let Some((open, rest)) = children.split_first() else {
            return;
        };
        let (close, inner) = match rest.split_last() {
            Some((close, inner)) => (Some(close), inner),
            None => (None, rest),
        };
        self.lexical(open);
        if token.contains(TokenKind::Statement) {
            self.w.indent();
            self.w.newline();
            for child in inner {
                self.token(child, true);
            }
            self.w.dedent();
            self.w.newline();
        } else {
            for child in inner {
                self.token(child, false);
            }
        }
        if let Some(close) = close {
            self.lexical(close);
        }
    }

    fn lexical(&mut self, token: &Token) {
        for comment in token.comments() {
            self.w.write(comment);
            self.w.write(" ");
        }
        self.w.write(token.text());
    }
}
