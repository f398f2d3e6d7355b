//! Bind marker support.
//!
//! Bind markers such as `:name` or `#name#` may contain characters that the
//! keyword and operator sweeps would split apart. Before tokenizing, every
//! marker is replaced by a synthetic name (`___BIND0`, `___BIND1`, ...) and
//! restored afterwards. Which syntax counts as a marker is decided by a
//! [`BindSyntax`].

mod generic;

use std::collections::HashMap;
use std::ops::Range;

use tracing::trace;

pub use generic::GenericBindSyntax;

use crate::tree::{Token, TokenKind};

/// Trait for recognizing bind markers in SQL text.
pub trait BindSyntax: Send + Sync {
    /// Returns the name of the syntax.
    fn name(&self) -> &'static str;

    /// Returns the byte ranges of all bind markers in `sql`, in order of
    /// appearance and without overlaps.
    fn find_markers(&self, sql: &str) -> Vec<Range<usize>>;
}

/// Substitutes bind markers with synthetic names and restores them.
#[derive(Debug, Default, Clone)]
pub struct BindCodec {
    /// Synthetic name to original marker text.
    markers: HashMap<String, String>,
}

impl BindCodec {
    /// Prefix of every synthetic name.
    pub const PREFIX: &'static str = "___BIND";

    /// Replaces every marker found by `syntax` and returns the codec
    /// together with the rewritten text.
    #[must_use]
    pub fn encode(sql: &str, syntax: &dyn BindSyntax) -> (Self, String) {
        let mut codec = Self::default();
        let mut out = String::with_capacity(sql.len());
        let mut last = 0;
        for range in syntax.find_markers(sql) {
            if range.start < last || range.is_empty() {
                continue;
            }
            let Some(marker) = sql.get(range.clone()) else {
                continue;
            };
            let code = format!("{}{}", Self::PREFIX, codec.markers.len());
            trace!(marker = marker, code = code.as_str(), "encoded bind marker");
            out.push_str(&sql[last..range.start]);
            out.push_str(&code);
            codec.markers.insert(code, marker.to_string());
            last = range.end;
        }
        out.push_str(&sql[last..]);
        (codec, out)
    }

    /// Rewrites every Name token whose text is a synthetic name back to the
    /// original marker text.
    pub fn decode(&self, tokens: &mut [Token]) {
        if self.markers.is_empty() {
            return;
        }
        for token in tokens.iter_mut().filter(|t| t.kind() == TokenKind::Name) {
            if let Some(marker) = self.markers.get(token.text()) {
                token.set_text(marker.clone());
            }
        }
    }

    /// Returns the original marker text for a synthetic name.
    #[must_use]
    pub fn original(&self, code: &str) -> Option<&str> {
        self.markers.get(code).map(String::as_str)
    }

    /// Returns the number of recorded markers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    /// Returns true if no markers were recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}
