//! Keyword and operator sweeps over raw spans.
//!
//! Each sweep splits every remaining raw token around the matches of one
//! pattern. The order of [`SWEEPS`] matters: multi-word keywords come before
//! their single-word prefixes, and keywords come before generic names.

use std::sync::LazyLock;

use regex::Regex;

use crate::tree::{Token, TokenKind};

/// Characters that may appear in a generic name.
const NAME_CHARS: &str = "A-Za-z0-9_$.@:?";

/// A compiled sweep pattern. Capture group 1 is the token text.
pub(crate) struct Sweep {
    pattern: Regex,
    kind: TokenKind,
}

impl Sweep {
    /// A keyword alternation that must be delimited by non-name characters.
    fn keywords(alternatives: &str, kind: TokenKind) -> Self {
        Self::new(
            &format!("[^{NAME_CHARS}]({alternatives})[^{NAME_CHARS}]"),
            kind,
        )
    }

    /// A symbol pattern that matches anywhere.
    fn symbols(pattern: &str, kind: TokenKind) -> Self {
        Self::new(&format!("({pattern})"), kind)
    }

    fn new(pattern: &str, kind: TokenKind) -> Self {
        let pattern = Regex::new(pattern).expect("Invalid sweep pattern regex");
        Self { pattern, kind }
    }

    /// Splits one raw text around the matches of this sweep.
    ///
    /// The text is padded with a space on both sides so that keyword
    /// patterns also match at the fragment edges. Raw remainders are
    /// trimmed; empty remainders are dropped.
    pub(crate) fn split(&self, raw: &str, out: &mut Vec<Token>) {
        let padded = format!(" {raw} ");
        let mut last = 0;
        while last < padded.len() {
            let Some(found) = self
                .pattern
                .captures_at(&padded, last)
                .and_then(|caps| caps.get(1))
            else {
                break;
            };
            push_raw(&padded[last..found.start()], out);
            out.push(Token::lexical(self.kind, found.as_str()));
            last = found.end();
        }
        push_raw(&padded[last..], out);
    }

    /// Applies this sweep to every raw token of the list.
    pub(crate) fn apply(&self, tokens: Vec<Token>) -> Vec<Token> {
        let mut out = Vec::with_capacity(tokens.len());
        for token in tokens {
            if token.kind() == TokenKind::Raw {
                self.split(token.text(), &mut out);
            } else {
                out.push(token);
            }
        }
        out
    }
}

fn push_raw(text: &str, out: &mut Vec<Token>) {
    let text = text.trim();
    if !text.is_empty() {
        out.push(Token::lexical(TokenKind::Raw, text));
    }
}

/// All sweeps, in application order.
pub(crate) static SWEEPS: LazyLock<Vec<Sweep>> = LazyLock::new(|| {
    vec![
        Sweep::keywords("UNION ALL|INTERSECT|MINUS|UNION", TokenKind::UnionToken),
        Sweep::keywords(
            "WITH|AS|SELECT|FROM|LEFT JOIN|OUTER JOIN|INNER JOIN|JOIN|ON|WHERE|GROUP BY|HAVING\
             |ORDER BY|INSERT INTO|INSERT|INTO|CONNECT BY( NOCYCLE)?|START WITH|UPDATE\
             |DELETE FROM|DELETE|SET|VALUES|CASE|ELSE|END|THEN|WHEN",
            TokenKind::PartToken,
        ),
        Sweep::symbols(r"\(\+\)", TokenKind::OuterJoinMarker),
        Sweep::keywords("OR", TokenKind::OrOp),
        Sweep::keywords("AND", TokenKind::AndOp),
        Sweep::keywords(
            "NOT IN|IN|IS NOT|IS|NOT BETWEEN|BETWEEN|NOT LIKE|LIKE",
            TokenKind::MathOp,
        ),
        Sweep::symbols(
            r"=|<>|!=|<=|>=|<|>|%|\^|\+|-|\*|/|\|\||&&",
            TokenKind::MathOp,
        ),
        Sweep::keywords("NOT|DISTINCT|NEW", TokenKind::UnaryPrefix),
        Sweep::symbols(&format!("[{NAME_CHARS}]+"), TokenKind::Name),
        Sweep::symbols(r"\(", TokenKind::OpenBracket),
        Sweep::symbols(r"\)", TokenKind::CloseBracket),
        Sweep::symbols(",", TokenKind::ListSeparator),
    ]
});
