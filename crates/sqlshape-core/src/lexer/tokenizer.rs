//! SQL Tokenizer implementation.

use std::sync::LazyLock;

use regex::Regex;
use tracing::warn;

use super::scanner::Scanner;
use super::sweep::SWEEPS;
use crate::tree::{Token, TokenKind};

static LINE_BREAKS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\r\n]+").expect("Invalid line break regex"));
static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex"));

/// A lexer that turns SQL text into lexical tokens with attached comments.
pub struct Lexer<'a> {
    /// The input source text.
    input: &'a str,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self { input }
    }

    /// Tokenizes the entire input.
    ///
    /// The result contains no Raw and no Comment tokens: unexpected
    /// fragments are turned into diagnostic comments and every comment is
    /// attached to a neighbouring token.
    #[must_use]
    pub fn tokenize(&self) -> Vec<Token> {
        let input = LINE_BREAKS.replace_all(self.input, " ");
        let mut tokens = Scanner::new(&input).scan();
        normalize_raw(&mut tokens);
        for sweep in SWEEPS.iter() {
            tokens = sweep.apply(tokens);
        }
        flag_leftovers(&mut tokens);
        attach_comments(tokens)
    }
}

/// Collapses whitespace and upper-cases every raw token.
fn normalize_raw(tokens: &mut [Token]) {
    for token in tokens.iter_mut().filter(|t| t.kind() == TokenKind::Raw) {
        let text = WHITESPACE.replace_all(token.text(), " ").to_uppercase();
        token.set_text(text);
    }
}

/// Replaces every raw fragment no sweep could classify with a diagnostic
/// comment.
fn flag_leftovers(tokens: &mut Vec<Token>) {
    tokens.retain(|t| t.kind() != TokenKind::Raw || !t.text().trim().is_empty());
    for token in tokens.iter_mut().filter(|t| t.kind() == TokenKind::Raw) {
        warn!(fragment = token.text(), "unexpected token in SQL text");
        *token = Token::lexical(
            TokenKind::Comment,
            format!("/*XXX unexpected token: {}*/", token.text()),
        );
    }
}

/// Attaches each comment to the next non-comment token, or to the nearest
/// preceding one when no token follows, and drops the comment entries.
fn attach_comments(tokens: Vec<Token>) -> Vec<Token> {
    let mut out: Vec<Token> = Vec::with_capacity(tokens.len());
    let mut pending: Vec<String> = Vec::new();
    for token in tokens {
        if token.kind() == TokenKind::Comment {
            pending.push(token.text().to_string());
            continue;
        }
        let mut token = token;
        for comment in pending.drain(..) {
            token.add_comment(comment);
        }
        out.push(token);
    }
    if let Some(last) = out.last_mut() {
        for comment in pending {
            last.add_comment(comment);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenize(input: &str) -> Vec<Token> {
        Lexer::new(input).tokenize()
    }

    fn tokens(input: &str) -> Vec<(TokenKind, String)> {
        tokenize(input)
            .into_iter()
            .map(|t| (t.kind(), t.text().to_string()))
            .collect()
    }

    fn kinds(input: &str) -> Vec<TokenKind> {
        tokenize(input).iter().map(Token::kind).collect()
    }

    fn pair(kind: TokenKind, text: &str) -> (TokenKind, String) {
        (kind, text.to_string())
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_whitespace_only() {
        assert!(tokenize("   \n\t  \r\n").is_empty());
    }

    #[test]
    fn test_simple_select() {
        assert_eq!(
            tokens("select a, b from t where x = 1"),
            vec![
                pair(TokenKind::PartToken, "SELECT"),
                pair(TokenKind::Name, "A"),
                pair(TokenKind::ListSeparator, ","),
                pair(TokenKind::Name, "B"),
                pair(TokenKind::PartToken, "FROM"),
                pair(TokenKind::Name, "T"),
                pair(TokenKind::PartToken, "WHERE"),
                pair(TokenKind::Name, "X"),
                pair(TokenKind::MathOp, "="),
                pair(TokenKind::Name, "1"),
            ]
        );
    }

    #[test]
    fn test_multiline_input() {
        assert_eq!(
            kinds("SELECT a\n  FROM\r\n t"),
            vec![
                TokenKind::PartToken,
                TokenKind::Name,
                TokenKind::PartToken,
                TokenKind::Name,
            ]
        );
    }

    #[test]
    fn test_literals_keep_case_and_spacing() {
        assert_eq!(
            tokens("where name = 'from  Here' and \"Mixed Col\" = 1"),
            vec![
                pair(TokenKind::PartToken, "WHERE"),
                pair(TokenKind::Name, "NAME"),
                pair(TokenKind::MathOp, "="),
                pair(TokenKind::Text, "'from  Here'"),
                pair(TokenKind::AndOp, "AND"),
                pair(TokenKind::Name, "\"Mixed Col\""),
                pair(TokenKind::MathOp, "="),
                pair(TokenKind::Name, "1"),
            ]
        );
    }

    #[test]
    fn test_multi_word_keywords() {
        assert_eq!(
            tokens("a left join b on x group by y order by z"),
            vec![
                pair(TokenKind::Name, "A"),
                pair(TokenKind::PartToken, "LEFT JOIN"),
                pair(TokenKind::Name, "B"),
                pair(TokenKind::PartToken, "ON"),
                pair(TokenKind::Name, "X"),
                pair(TokenKind::PartToken, "GROUP BY"),
                pair(TokenKind::Name, "Y"),
                pair(TokenKind::PartToken, "ORDER BY"),
                pair(TokenKind::Name, "Z"),
            ]
        );
    }

    #[test]
    fn test_set_operators() {
        assert_eq!(
            tokens("union all intersect minus union"),
            vec![
                pair(TokenKind::UnionToken, "UNION ALL"),
                pair(TokenKind::UnionToken, "INTERSECT"),
                pair(TokenKind::UnionToken, "MINUS"),
                pair(TokenKind::UnionToken, "UNION"),
            ]
        );
    }

    #[test]
    fn test_keyword_operators() {
        assert_eq!(
            tokens("a not in b is not null not like c between d"),
            vec![
                pair(TokenKind::Name, "A"),
                pair(TokenKind::MathOp, "NOT IN"),
                pair(TokenKind::Name, "B"),
                pair(TokenKind::MathOp, "IS NOT"),
                pair(TokenKind::Name, "NULL"),
                pair(TokenKind::MathOp, "NOT LIKE"),
                pair(TokenKind::Name, "C"),
                pair(TokenKind::MathOp, "BETWEEN"),
                pair(TokenKind::Name, "D"),
            ]
        );
    }

    #[test]
    fn test_unary_prefixes() {
        assert_eq!(
            kinds("not exists distinct a new b"),
            vec![
                TokenKind::UnaryPrefix,
                TokenKind::Name,
                TokenKind::UnaryPrefix,
                TokenKind::Name,
                TokenKind::UnaryPrefix,
                TokenKind::Name,
            ]
        );
    }

    #[test]
    fn test_symbol_operators() {
        assert_eq!(
            tokens("a<=b||c-d*e"),
            vec![
                pair(TokenKind::Name, "A"),
                pair(TokenKind::MathOp, "<="),
                pair(TokenKind::Name, "B"),
                pair(TokenKind::MathOp, "||"),
                pair(TokenKind::Name, "C"),
                pair(TokenKind::MathOp, "-"),
                pair(TokenKind::Name, "D"),
                pair(TokenKind::MathOp, "*"),
                pair(TokenKind::Name, "E"),
            ]
        );
    }

    #[test]
    fn test_outer_join_marker_and_brackets() {
        assert_eq!(
            tokens("a.id(+)=f(b,c)"),
            vec![
                pair(TokenKind::Name, "A.ID"),
                pair(TokenKind::OuterJoinMarker, "(+)"),
                pair(TokenKind::MathOp, "="),
                pair(TokenKind::Name, "F"),
                pair(TokenKind::OpenBracket, "("),
                pair(TokenKind::Name, "B"),
                pair(TokenKind::ListSeparator, ","),
                pair(TokenKind::Name, "C"),
                pair(TokenKind::CloseBracket, ")"),
            ]
        );
    }

    #[test]
    fn test_keyword_inside_name_is_not_split() {
        assert_eq!(
            tokens("select order_id, fromage"),
            vec![
                pair(TokenKind::PartToken, "SELECT"),
                pair(TokenKind::Name, "ORDER_ID"),
                pair(TokenKind::ListSeparator, ","),
                pair(TokenKind::Name, "FROMAGE"),
            ]
        );
    }

    #[test]
    fn test_comment_attaches_to_successor() {
        let tokens = tokenize("{note} SELECT a /* x */ FROM t");
        assert_eq!(tokens[0].text(), "SELECT");
        assert_eq!(tokens[0].comments(), ["{note}".to_string()]);
        assert_eq!(tokens[2].text(), "FROM");
        assert_eq!(tokens[2].comments(), ["/* x */".to_string()]);
    }

    #[test]
    fn test_trailing_comment_attaches_to_predecessor() {
        let tokens = tokenize("SELECT a {end}");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[1].text(), "A");
        assert_eq!(tokens[1].comments(), ["{end}".to_string()]);
    }

    #[test]
    fn test_comment_only_input() {
        assert!(tokenize("{just a note}").is_empty());
    }

    #[test]
    fn test_unexpected_fragment_becomes_comment() {
        let tokens = tokenize("SELECT a; FROM t");
        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[2].text(), "FROM");
        assert_eq!(
            tokens[2].comments(),
            ["/*XXX unexpected token: ;*/".to_string()]
        );
    }
}
