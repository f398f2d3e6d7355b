//! Re-entrancy guard for the mutually recursive productions.
//!
//! Statement, Atom and OrExpr can reach each other without consuming a
//! token. A production is refused while the same production is already
//! active at the same token position.

use std::collections::HashSet;

/// The grammar productions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Production {
    Statement,
    SingleStatement,
    Part,
    ListExpr,
    OrExpr,
    AndExpr,
    MathExpr,
    SimpleExpr,
    UnaryPrefixExpr,
    MinusExpr,
    Atom,
    BracketExpr,
    FunExpr,
}

/// A production entered at a token position. `None` stands for the end of
/// input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct StepKey {
    pub(crate) production: Production,
    pub(crate) token: Option<usize>,
}

impl StepKey {
    pub(crate) const fn new(production: Production, token: Option<usize>) -> Self {
        Self { production, token }
    }
}

/// The steps active on the current call stack.
///
/// This is not a result cache: a key is removed as soon as its production
/// returns.
#[derive(Debug, Default)]
pub(crate) struct ActiveSteps {
    steps: HashSet<StepKey>,
}

impl ActiveSteps {
    /// Marks `key` as active. Returns false if it already was.
    pub(crate) fn enter(&mut self, key: StepKey) -> bool {
        self.steps.insert(key)
    }

    /// Marks `key` as no longer active.
    pub(crate) fn leave(&mut self, key: StepKey) {
        self.steps.remove(&key);
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub(crate) fn clear(&mut self) {
        self.steps.clear();
    }
}
