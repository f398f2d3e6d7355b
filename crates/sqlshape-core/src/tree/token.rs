//! The token tree node.

use serde::Serialize;

use super::TokenKind;

/// A node of the token tree.
///
/// Lexical tokens carry `text`, structural tokens carry `children`. Any
/// token may carry leading comments, stored verbatim including their
/// delimiters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    kind: TokenKind,
    #[serde(skip_serializing_if = "String::is_empty")]
    text: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<Token>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    comments: Vec<String>,
}

impl Token {
    /// Creates a lexical token.
    #[must_use]
    pub fn lexical(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            children: Vec::new(),
            comments: Vec::new(),
        }
    }

    /// Creates a structural token from its children.
    #[must_use]
    pub const fn node(kind: TokenKind, children: Vec<Self>) -> Self {
        Self {
            kind,
            text: String::new(),
            children,
            comments: Vec::new(),
        }
    }

    /// Creates an unparsed residue token.
    #[must_use]
    pub fn residue(text: impl Into<String>) -> Self {
        Self::lexical(TokenKind::Unparsed, text)
    }

    /// Returns the kind.
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Returns the token's own text. Empty for structural tokens.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the children in match order.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        &self.children
    }

    /// Returns the attached leading comments.
    #[must_use]
    pub fn comments(&self) -> &[String] {
        &self.comments
    }

    /// Returns true if the token was produced by the tokenizer.
    #[must_use]
    pub const fn is_lexical(&self) -> bool {
        self.kind.is_lexical()
    }

    /// Returns true if the token was produced by the parser.
    #[must_use]
    pub const fn is_structural(&self) -> bool {
        self.kind.is_structural()
    }

    /// Returns true if the token has the given kind and text.
    #[must_use]
    pub fn is(&self, kind: TokenKind, text: &str) -> bool {
        self.kind == kind && self.text == text
    }

    /// Returns the first direct child of the given kind.
    #[must_use]
    pub fn child(&self, kind: TokenKind) -> Option<&Self> {
        self.children.iter().find(|c| c.kind == kind)
    }

    /// Iterates over all descendants in pre-order, excluding `self`.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants {
            stack: self.children.iter().rev().collect(),
        }
    }

    /// Returns true if any descendant has the given kind.
    #[must_use]
    pub fn contains(&self, kind: TokenKind) -> bool {
        self.descendants().any(|t| t.kind == kind)
    }

    /// Returns the residue text if this token ends with an unparsed child.
    #[must_use]
    pub fn unparsed(&self) -> Option<&str> {
        self.children
            .last()
            .filter(|t| t.kind == TokenKind::Unparsed)
            .map(|t| t.text.as_str())
    }

    pub(crate) fn push(&mut self, child: Self) {
        self.children.push(child);
    }

    pub(crate) fn add_comment(&mut self, comment: impl Into<String>) {
        self.comments.push(comment.into());
    }

    pub(crate) fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub(crate) fn into_children(self) -> Vec<Self> {
        self.children
    }
}

impl core::fmt::Display for Token {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut sep = "";
        for comment in &self.comments {
            write!(f, "{sep}{comment}")?;
            sep = " ";
        }
        if !self.text.is_empty() {
            write!(f, "{sep}{}", self.text)?;
            sep = " ";
        }
        for child in &self.children {
            write!(f, "{sep}{child}")?;
            sep = " ";
        }
        Ok(())
    }
}

/// Pre-order iterator over the descendants of a [`Token`].
#[derive(Debug)]
pub struct Descendants<'a> {
    stack: Vec<&'a Token>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Token;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.stack.pop()?;
        self.stack.extend(next.children.iter().rev());
        Some(next)
    }
}
