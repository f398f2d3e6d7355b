//! Token kinds shared by the tokenizer, parser and formatter.

use serde::Serialize;

/// The kind of a [`Token`](super::Token).
///
/// Lexical kinds are produced by the tokenizer and carry text. Structural
/// kinds are produced by the parser and carry children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    // Lexical
    /// Unclassified input. Only exists while the tokenizer is running.
    Raw,
    /// A `/* ... */` or `{ ... }` comment, or a tokenizer diagnostic.
    Comment,
    /// A quoted text literal (`'...'`).
    Text,
    /// An identifier, quoted identifier, number or bind marker.
    Name,
    /// UNION, UNION ALL, INTERSECT or MINUS.
    UnionToken,
    /// A clause keyword such as SELECT, FROM or GROUP BY.
    PartToken,
    /// NOT, DISTINCT or NEW.
    UnaryPrefix,
    /// The `(+)` outer join marker.
    OuterJoinMarker,
    /// OR.
    OrOp,
    /// AND.
    AndOp,
    /// Comparison, arithmetic and keyword operators.
    MathOp,
    /// `(`.
    OpenBracket,
    /// `)`.
    CloseBracket,
    /// `,`.
    ListSeparator,

    // Structural
    /// Root of a parse: single statements joined by set operators.
    Statement,
    /// A sequence of parts starting with a root part.
    SingleStatement,
    /// A clause keyword with its optional expression list.
    Part,
    /// Comma separated expressions.
    ListExpr,
    /// Expressions joined by OR.
    OrExpr,
    /// Expressions joined by AND.
    AndExpr,
    /// Operands joined by math operators.
    MathExpr,
    /// A unary prefix applied to an atom.
    UnaryPrefixExpr,
    /// A negated atom.
    MinusExpr,
    /// A single operand with optional outer join marker and alias.
    Atom,
    /// A bracketed statement or expression list.
    BracketExpr,
    /// A function call.
    FunExpr,
    /// Input that could not be fit into the grammar.
    Unparsed,
}

impl TokenKind {
    /// Returns true for kinds produced by the tokenizer.
    #[must_use]
    pub const fn is_lexical(&self) -> bool {
        matches!(
            self,
            Self::Raw
                | Self::Comment
                | Self::Text
                | Self::Name
                | Self::UnionToken
                | Self::PartToken
                | Self::UnaryPrefix
                | Self::OuterJoinMarker
                | Self::OrOp
                | Self::AndOp
                | Self::MathOp
                | Self::OpenBracket
                | Self::CloseBracket
                | Self::ListSeparator
        )
    }

    /// Returns true for kinds produced by the parser.
    #[must_use]
    pub const fn is_structural(&self) -> bool {
        !self.is_lexical()
    }

    /// Returns the kind name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Raw => "Raw",
            Self::Comment => "Comment",
            Self::Text => "Text",
            Self::Name => "Name",
            Self::UnionToken => "UnionToken",
            Self::PartToken => "PartToken",
            Self::UnaryPrefix => "UnaryPrefix",
            Self::OuterJoinMarker => "OuterJoinMarker",
            Self::OrOp => "OrOp",
            Self::AndOp => "AndOp",
            Self::MathOp => "MathOp",
            Self::OpenBracket => "OpenBracket",
            Self::CloseBracket => "CloseBracket",
            Self::ListSeparator => "ListSeparator",
            Self::Statement => "Statement",
            Self::SingleStatement => "SingleStatement",
            Self::Part => "Part",
            Self::ListExpr => "ListExpr",
            Self::OrExpr => "OrExpr",
            Self::AndExpr => "AndExpr",
            Self::MathExpr => "MathExpr",
            Self::UnaryPrefixExpr => "UnaryPrefixExpr",
            Self::MinusExpr => "MinusExpr",
            Self::Atom => "Atom",
            Self::BracketExpr => "BracketExpr",
            Self::FunExpr => "FunExpr",
            Self::Unparsed => "Unparsed",
        }
    }
}

impl core::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
