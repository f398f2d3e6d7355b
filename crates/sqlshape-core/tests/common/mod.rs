#![allow(dead_code)]

use sqlshape_core::{SqlFormatter, SqlParser, Token, TokenKind};

pub fn parse(sql: &str) -> Token {
    SqlParser::new().parse(sql)
}

pub fn format(sql: &str) -> String {
    SqlFormatter::new().format(&parse(sql))
}

/// Kinds of the direct children of `token`.
pub fn kinds(token: &Token) -> Vec<TokenKind> {
    token.children().iter().map(Token::kind).collect()
}

/// Returns the first descendant of the given kind.
pub fn find(token: &Token, kind: TokenKind) -> &Token {
    token
        .descendants()
        .find(|t| t.kind() == kind)
        .unwrap_or_else(|| panic!("No {kind} in tree: {token}"))
}

/// Returns the first descendant of the given kind that has a direct child
/// of `child_kind`.
pub fn find_with(token: &Token, kind: TokenKind, child_kind: TokenKind) -> &Token {
    token
        .descendants()
        .find(|t| t.kind() == kind && t.child(child_kind).is_some())
        .unwrap_or_else(|| panic!("No {kind} with {child_kind} in tree: {token}"))
}

pub fn count(token: &Token, kind: TokenKind) -> usize {
    token.descendants().filter(|t| t.kind() == kind).count()
}

/// Part keywords of the first single statement, in order.
pub fn part_keywords(sql: &str) -> Vec<String> {
    let root = parse(sql);
    let single = find(&root, TokenKind::SingleStatement);
    single
        .children()
        .iter()
        .map(|part| part.children()[0].text().to_string())
        .collect()
}

/// Verifies that formatting is a fixed point: the formatted text parses
/// and formats to itself.
pub fn fixed_point(sql: &str) {
    let first = format(sql);
    let second = format(&first);
    assert_eq!(
        first, second,
        "Formatting is not idempotent.\n  Input:    {sql}\n  First:\n{first}\n  Second:\n{second}"
    );
}
