//! Command implementations.
//!
//! Every command takes the SQL text and returns what should be printed.

use std::io::Read;
use std::path::Path;

use tracing::{debug, warn};

use sqlshape_core::{FormatOptions, SqlFormatter, SqlParser, Token};

use crate::error::{CliError, Result};

/// Comment prefixes the parser uses for its own diagnostics.
const DIAGNOSTIC_PREFIXES: &[&str] = &["/*XXX", "/*syntax warning*/"];

/// Validates the indent width.
pub fn options(tab_size: usize) -> Result<FormatOptions> {
    Ok(FormatOptions::new(tab_size)?)
}

/// Reads the SQL text from a file, or from stdin if no path is given.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    let sql = match path {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut sql = String::new();
            std::io::stdin().read_to_string(&mut sql)?;
            sql
        }
    };
    debug!(bytes = sql.len(), "read SQL input");
    Ok(sql)
}

/// Formats the statement.
pub fn format(sql: &str, options: FormatOptions) -> String {
    let root = SqlParser::new().parse(sql);
    SqlFormatter::with_options(options).format(&root)
}

/// Renders the parse tree as an indented outline, one token per line.
pub fn tree_outline(sql: &str) -> String {
    let root = SqlParser::new().parse(sql);
    let mut out = String::new();
    write_outline(&mut out, &root, 0);
    out.trim_end().to_string()
}

fn write_outline(out: &mut String, token: &Token, depth: usize) {
    out.push_str(&" ".repeat(depth * 2));
    out.push_str(token.kind().as_str());
    if !token.text().is_empty() {
        out.push(' ');
        out.push_str(token.text());
    }
    if !token.comments().is_empty() {
        out.push_str(&format!(" [{}]", token.comments().join(", ")));
    }
    out.push('\n');
    for child in token.children() {
        write_outline(out, child, depth + 1);
    }
}

/// Renders the parse tree as pretty-printed JSON.
pub fn tree_json(sql: &str) -> Result<String> {
    let root = SqlParser::new().parse(sql);
    Ok(serde_json::to_string_pretty(&root)?)
}

/// Succeeds with `ok` if the statement parsed without residue or
/// diagnostic comments.
pub fn check(sql: &str) -> Result<String> {
    let root = SqlParser::new().parse(sql);
    if let Some(residue) = root.unparsed() {
        warn!(residue = residue, "unparsed residue");
        return Err(CliError::Unparsed(residue.to_string()));
    }
    let diagnostics: Vec<&str> = root
        .descendants()
        .flat_map(Token::comments)
        .map(String::as_str)
        .filter(|c| DIAGNOSTIC_PREFIXES.iter().any(|p| c.starts_with(p)))
        .collect();
    if !diagnostics.is_empty() {
        warn!(count = diagnostics.len(), "diagnostic comments in parse tree");
        return Err(CliError::Unparsed(diagnostics.join(" ")));
    }
    Ok("ok".to_string())
}
