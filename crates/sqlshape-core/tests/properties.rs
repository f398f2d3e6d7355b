//! Properties that hold for any input: parsing never fails, the root is
//! always a Statement, and parser and formatter can be shared across
//! threads.

mod common;
use common::*;

use sqlshape_core::{SqlFormatter, SqlParser, TokenKind, tokenize};

const PATHOLOGICAL: &[&str] = &[
    "",
    ")",
    "(((",
    ",,,",
    "'unterminated",
    "\"unterminated",
    "/* open comment",
    "{ open comment",
    "SELECT (",
    "SELECT A FROM B WHERE ((((A",
    "SELECT ä FROM ö",
    "SELECT A FROM B; DROP",
    "AND OR NOT",
    "UNION UNION",
    ": # & :{ :[",
    "((((((((A))))))))",
];

#[test]
fn parse_never_fails() {
    for sql in PATHOLOGICAL {
        let root = parse(sql);
        assert_eq!(root.kind(), TokenKind::Statement, "{sql:?}");
        let _ = format(sql);
    }
}

#[test]
fn deep_bracket_nesting() {
    let depth = 40;
    let nested = format!("{}A{}", "(".repeat(depth), ")".repeat(depth));

    let root = parse(&format!("SELECT {nested} FROM T"));
    assert_eq!(root.unparsed(), None);
    assert_eq!(count(&root, TokenKind::BracketExpr), depth);

    let root = parse(&nested);
    assert_eq!(kinds(&root), vec![TokenKind::Unparsed]);

    let root = parse(&format!("{}SELECT A FROM T{}", "(".repeat(depth), ")".repeat(depth)));
    assert_eq!(root.unparsed(), None);
    assert_eq!(count(&root, TokenKind::SingleStatement), 1);
}

#[test]
fn unparsed_is_always_last() {
    for sql in PATHOLOGICAL {
        let root = parse(sql);
        let residues = root
            .children()
            .iter()
            .filter(|t| t.kind() == TokenKind::Unparsed)
            .count();
        assert!(residues <= 1, "{sql:?}");
        if residues == 1 {
            assert!(root.unparsed().is_some(), "{sql:?}");
        }
        assert_eq!(count(&root, TokenKind::Unparsed), residues, "{sql:?}");
    }
}

#[test]
fn every_lexical_token_has_text() {
    for sql in PATHOLOGICAL {
        for token in tokenize(sql) {
            assert!(token.is_lexical(), "{sql:?}");
            assert!(!token.text().is_empty(), "{sql:?}");
            assert_ne!(token.kind(), TokenKind::Raw, "{sql:?}");
            assert_ne!(token.kind(), TokenKind::Comment, "{sql:?}");
        }
    }
}

#[test]
fn root_parts_start_statements() {
    for keyword in ["SELECT", "INSERT INTO", "INSERT", "UPDATE", "DELETE FROM", "DELETE", "WITH"] {
        let root = parse(&format!("{keyword} A"));
        assert_eq!(kinds(&root), vec![TokenKind::SingleStatement], "{keyword}");
    }
    for keyword in ["FROM", "WHERE", "GROUP BY", "HAVING", "ORDER BY", "SET", "VALUES", "INTO"] {
        let root = parse(&format!("{keyword} A"));
        assert_eq!(kinds(&root), vec![TokenKind::Unparsed], "{keyword}");
    }
}

#[test]
fn comments_survive_formatting() {
    let text = format("/* a */ SELECT A {b}, B FROM T /* c */");
    for comment in ["/* a */", "{b}", "/* c */"] {
        assert!(text.contains(comment), "{comment} missing in {text}");
    }
}

#[test]
fn unexpected_fragment_is_reported() {
    let root = parse("SELECT A; FROM T");
    assert_eq!(root.unparsed(), None);
    let from = root
        .descendants()
        .find(|t| t.is(TokenKind::PartToken, "FROM"))
        .expect("FROM should be parsed");
    assert_eq!(from.comments(), ["/*XXX unexpected token: ;*/".to_string()]);
}

#[test]
fn parser_and_formatter_are_shareable() {
    let parser = SqlParser::new();
    let formatter = SqlFormatter::new();
    let expected = formatter.format(&parser.parse("SELECT A, B FROM T WHERE X = :x"));
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                scope.spawn(|| formatter.format(&parser.parse("SELECT A, B FROM T WHERE X = :x")))
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().expect("thread panicked"), expected);
        }
    });
}

#[test]
fn tree_serializes_to_json() {
    let root = parse("SELECT A FROM T");
    let value = serde_json::to_value(&root).expect("tree should serialize");
    assert_eq!(value["kind"], "Statement");
    assert_eq!(value["children"][0]["kind"], "SingleStatement");
    let keyword = &value["children"][0]["children"][0]["children"][0];
    assert_eq!(keyword["kind"], "PartToken");
    assert_eq!(keyword["text"], "SELECT");
    assert!(keyword.get("children").is_none());
}
