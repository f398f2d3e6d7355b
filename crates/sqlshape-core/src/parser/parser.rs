//! SQL Parser implementation.

use tracing::{debug, trace};

use super::guard::{ActiveSteps, Production, StepKey};
use crate::bind::{BindCodec, BindSyntax, GenericBindSyntax};
use crate::lexer::Lexer;
use crate::tree::{Token, TokenKind};

/// Part keywords that may start a statement.
const ROOT_PARTS: &[&str] = &[
    "SELECT",
    "INSERT INTO",
    "INSERT",
    "UPDATE",
    "DELETE FROM",
    "DELETE",
    "CASE",
    "WITH",
];

/// Comment attached to a trailing OR/AND that has no right-hand side.
const SYNTAX_WARNING: &str = "/*syntax warning*/";

/// SQL Parser.
///
/// Parsing never fails. Input that does not fit the grammar ends up in an
/// Unparsed token appended to the root Statement.
pub struct SqlParser {
    bind_syntax: Box<dyn BindSyntax>,
}

impl SqlParser {
    /// Creates a parser recognizing the generic bind marker syntax.
    #[must_use]
    pub fn new() -> Self {
        Self::with_bind_syntax(GenericBindSyntax::new())
    }

    /// Creates a parser with a custom bind marker syntax.
    #[must_use]
    pub fn with_bind_syntax(syntax: impl BindSyntax + 'static) -> Self {
        Self {
            bind_syntax: Box::new(syntax),
        }
    }

    /// Returns the name of the bind marker syntax in use.
    #[must_use]
    pub fn bind_syntax(&self) -> &'static str {
        self.bind_syntax.name()
    }

    /// Parses SQL text into a root Statement token.
    #[must_use]
    pub fn parse(&self, sql: &str) -> Token {
        let (codec, encoded) = BindCodec::encode(sql, self.bind_syntax.as_ref());
        let mut tokens = Lexer::new(&encoded).tokenize();
        codec.decode(&mut tokens);
        Engine::new(&tokens).parse_root()
    }
}

impl Default for SqlParser {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for SqlParser {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SqlParser")
            .field("bind_syntax", &self.bind_syntax.name())
            .finish()
    }
}

/// Recursive descent over an immutable token slice.
///
/// Every production either returns a token or returns `None` with the
/// cursor where it found it.
struct Engine<'t> {
    tokens: &'t [Token],
    pos: usize,
    active: ActiveSteps,
}

impl<'t> Engine<'t> {
    fn new(tokens: &'t [Token]) -> Self {
        Self {
            tokens,
            pos: 0,
            active: ActiveSteps::default(),
        }
    }

    /// Parses the whole input, applying the fallbacks and collecting the
    /// residue.
    fn parse_root(mut self) -> Token {
        let mut root = self.parse_statement();
        debug_assert!(self.active.is_empty());
        if root.is_none() {
            self.reset();
            root = self.parse_bracket_expr().and_then(|bracket| {
                bracket
                    .into_children()
                    .into_iter()
                    .find(|t| t.kind() == TokenKind::Statement)
            });
            if root.is_some() {
                debug!("parsed statement wrapped in redundant brackets");
            } else {
                self.reset();
            }
        }
        let mut root = root.unwrap_or_else(|| Token::node(TokenKind::Statement, Vec::new()));
        if let Some(residue) = self.residue() {
            debug!(residue = residue.as_str(), "unparsed SQL residue");
            root.push(Token::residue(residue));
        }
        root
    }

    fn reset(&mut self) {
        self.pos = 0;
        self.active.clear();
    }

    /// Joins the string forms of all remaining tokens.
    fn residue(&self) -> Option<String> {
        let rest = &self.tokens[self.pos..];
        if rest.is_empty() {
            return None;
        }
        Some(
            rest.iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" "),
        )
    }

    // --- Productions ---

    /// `Statement := SingleStatement (UnionOp SingleStatement)*`
    fn parse_statement(&mut self) -> Option<Token> {
        self.guarded(Production::Statement, |p| {
            p.chain(
                TokenKind::Statement,
                TokenKind::UnionToken,
                Self::parse_single_statement,
                false,
            )
        })
    }

    /// `SingleStatement := Part+`, or a bracket wrapping a statement.
    fn parse_single_statement(&mut self) -> Option<Token> {
        self.guarded(Production::SingleStatement, |p| {
            if p.at_bracketed_statement() {
                let bracket = p.parse_bracket_expr()?;
                return wraps_statement(&bracket).then_some(bracket);
            }
            let first = p.parse_part(true)?;
            let mut single = Token::node(TokenKind::SingleStatement, vec![first]);
            while let Some(part) = p.parse_part(false) {
                single.push(part);
            }
            Some(single)
        })
    }

    /// `Part := PartToken ListExpr?`
    fn parse_part(&mut self, root: bool) -> Option<Token> {
        self.guarded(Production::Part, |p| {
            let keyword = p.take(TokenKind::PartToken)?;
            if root && !is_root_part(&keyword) {
                return None;
            }
            let mut part = Token::node(TokenKind::Part, vec![keyword]);
            if let Some(list) = p.parse_list_expr() {
                part.push(list);
            }
            Some(part)
        })
    }

    /// `ListExpr := OrExpr (',' OrExpr)*`
    fn parse_list_expr(&mut self) -> Option<Token> {
        self.guarded(Production::ListExpr, |p| {
            p.chain(
                TokenKind::ListExpr,
                TokenKind::ListSeparator,
                Self::parse_or_expr,
                false,
            )
        })
    }

    /// `OrExpr := AndExpr (OR AndExpr)*`
    fn parse_or_expr(&mut self) -> Option<Token> {
        self.guarded(Production::OrExpr, |p| {
            p.chain(
                TokenKind::OrExpr,
                TokenKind::OrOp,
                Self::parse_and_expr,
                true,
            )
        })
    }

    /// `AndExpr := MathExpr (AND MathExpr)*`
    fn parse_and_expr(&mut self) -> Option<Token> {
        self.guarded(Production::AndExpr, |p| {
            p.chain(
                TokenKind::AndExpr,
                TokenKind::AndOp,
                Self::parse_math_expr,
                true,
            )
        })
    }

    /// `MathExpr := SimpleExpr (MathOp SimpleExpr)*`
    fn parse_math_expr(&mut self) -> Option<Token> {
        self.guarded(Production::MathExpr, |p| {
            p.chain(
                TokenKind::MathExpr,
                TokenKind::MathOp,
                Self::parse_simple_expr,
                false,
            )
        })
    }

    /// `SimpleExpr = UnaryPrefixExpr | MinusExpr | Atom`
    fn parse_simple_expr(&mut self) -> Option<Token> {
        self.guarded(Production::SimpleExpr, |p| {
            p.parse_unary_prefix_expr()
                .or_else(|| p.parse_minus_expr())
                .or_else(|| p.parse_atom())
        })
    }

    /// `UnaryPrefixExpr := UnaryPrefix Atom`
    fn parse_unary_prefix_expr(&mut self) -> Option<Token> {
        self.guarded(Production::UnaryPrefixExpr, |p| {
            let prefix = p.take(TokenKind::UnaryPrefix)?;
            let atom = p.parse_atom()?;
            Some(Token::node(TokenKind::UnaryPrefixExpr, vec![prefix, atom]))
        })
    }

    /// `MinusExpr := '-' Atom`
    fn parse_minus_expr(&mut self) -> Option<Token> {
        self.guarded(Production::MinusExpr, |p| {
            let minus = p.take_text(TokenKind::MathOp, "-")?;
            let atom = p.parse_atom()?;
            Some(Token::node(TokenKind::MinusExpr, vec![minus, atom]))
        })
    }

    /// `FunExpr := Name BracketExpr`
    fn parse_fun_expr(&mut self) -> Option<Token> {
        self.guarded(Production::FunExpr, |p| {
            let name = p.take(TokenKind::Name)?;
            let bracket = p.parse_bracket_expr()?;
            Some(Token::node(TokenKind::FunExpr, vec![name, bracket]))
        })
    }

    /// `BracketExpr := '(' (Statement | ListExpr)? ')'`
    fn parse_bracket_expr(&mut self) -> Option<Token> {
        self.guarded(Production::BracketExpr, |p| {
            let open = p.take(TokenKind::OpenBracket)?;
            let inner = p.parse_statement().or_else(|| p.parse_list_expr());
            let close = p.take(TokenKind::CloseBracket)?;
            let mut bracket = Token::node(TokenKind::BracketExpr, vec![open]);
            if let Some(inner) = inner {
                bracket.push(inner);
            }
            bracket.push(close);
            Some(bracket)
        })
    }

    /// `Atom := (BracketExpr | Statement | OrExpr | FunExpr | Name | Text | '*')
    ///          OuterJoinMarker? Name?`
    fn parse_atom(&mut self) -> Option<Token> {
        self.guarded(Production::Atom, |p| {
            let head = p
                .parse_bracket_expr()
                .or_else(|| p.parse_statement())
                .or_else(|| p.parse_or_expr())
                .or_else(|| p.parse_fun_expr())
                .or_else(|| p.take(TokenKind::Name))
                .or_else(|| p.take(TokenKind::Text))
                .or_else(|| p.take_text(TokenKind::MathOp, "*"))?;
            let mut atom = Token::node(TokenKind::Atom, vec![head]);
            if let Some(marker) = p.take(TokenKind::OuterJoinMarker) {
                atom.push(marker);
            }
            if let Some(alias) = p.take(TokenKind::Name) {
                atom.push(alias);
            }
            Some(atom)
        })
    }

    // --- Helper methods ---

    /// Runs a production under the re-entrancy guard and restores the
    /// cursor if it fails.
    fn guarded<F>(&mut self, production: Production, parse: F) -> Option<Token>
    where
        F: FnOnce(&mut Self) -> Option<Token>,
    {
        let key = StepKey::new(production, self.peek().map(|_| self.pos));
        if !self.active.enter(key) {
            trace!(?key, "refused re-entrant production");
            return None;
        }
        let start = self.pos;
        let result = parse(self);
        self.active.leave(key);
        if result.is_none() {
            self.pos = start;
        }
        result
    }

    /// Parses `operand (separator operand)*` into a node of `kind`.
    ///
    /// A separator without a right-hand side is given back, unless
    /// `keep_dangling` is set: then it is kept as the last child, flagged
    /// with a syntax warning comment.
    fn chain(
        &mut self,
        kind: TokenKind,
        separator: TokenKind,
        operand: fn(&mut Self) -> Option<Token>,
        keep_dangling: bool,
    ) -> Option<Token> {
        let first = operand(self)?;
        let mut node = Token::node(kind, vec![first]);
        loop {
            let mark = self.pos;
            let Some(mut sep) = self.take(separator) else {
                break;
            };
            if let Some(next) = operand(self) {
                node.push(sep);
                node.push(next);
            } else if keep_dangling {
                sep.add_comment(SYNTAX_WARNING);
                node.push(sep);
                break;
            } else {
                self.pos = mark;
                break;
            }
        }
        Some(node)
    }

    /// Returns true if the cursor is at a run of open brackets followed by
    /// a root part keyword. Only then can a bracket wrap a statement.
    fn at_bracketed_statement(&self) -> bool {
        let rest = self.tokens.get(self.pos..).unwrap_or_default();
        let opens = rest
            .iter()
            .take_while(|t| t.kind() == TokenKind::OpenBracket)
            .count();
        opens > 0 && rest.get(opens).is_some_and(is_root_part)
    }

    /// Returns the current token.
    fn peek(&self) -> Option<&'t Token> {
        self.tokens.get(self.pos)
    }

    /// Consumes the current token if it has the given kind.
    fn take(&mut self, kind: TokenKind) -> Option<Token> {
        let token = self.peek().filter(|t| t.kind() == kind)?;
        self.pos += 1;
        Some(token.clone())
    }

    /// Consumes the current token if it has the given kind and text.
    fn take_text(&mut self, kind: TokenKind, text: &str) -> Option<Token> {
        let token = self.peek().filter(|t| t.is(kind, text))?;
        self.pos += 1;
        Some(token.clone())
    }
}

fn is_root_part(token: &Token) -> bool {
    token.kind() == TokenKind::PartToken && ROOT_PARTS.contains(&token.text())
}

/// Returns true if the bracket, possibly through nested brackets, directly
/// wraps a statement.
fn wraps_statement(bracket: &Token) -> bool {
    let mut current = bracket;
    loop {
        match current.children().get(1) {
            Some(inner) if inner.kind() == TokenKind::BracketExpr => current = inner,
            Some(inner) => {
                return matches!(
                    inner.kind(),
                    TokenKind::Statement | TokenKind::SingleStatement
                );
            }
            None => return false,
        }
    }
}
