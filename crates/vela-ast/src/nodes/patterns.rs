//! Pattern matching node types: `Match` and `MatchBranch`.
//!
//! The closed node set has no dedicated pattern hierarchy. A pattern is
//! simply an expression node reinterpreted by the pattern compiler:
//! a `Var` is a catch-all binder (or, named `_`, a wildcard), a literal
//! node (`IntLit`/`FltLit`/`BoolLit`/`CharLit`/`StrLit`) matches by
//! value, a `Tuple` destructures positionally, and a `NamedVal` matches
//! a union constructor by name and destructures its payload. `Match`
//! and `MatchBranch` only need to record which node plays which role.

use std::fmt;

use vela_source::types::Span;

use super::{ASTNode, NodeID, NodeKind};

/// One `pattern -> body` arm of a `Match`, with an optional guard.
#[derive(Debug, Clone)]
pub struct MatchBranch {
    pub pattern: NodeID,
    pub guard: Option<NodeID>,
    pub body: NodeID,
    pub id: NodeID,
    pub parent: Option<NodeID>,
    pub span: Span,
}

impl MatchBranch {
    #[must_use]
    pub const fn new(
        pattern: NodeID,
        guard: Option<NodeID>,
        body: NodeID,
        id: NodeID,
        span: Span,
    ) -> Self {
        Self { pattern, guard, body, id, parent: None, span }
    }
}

impl ASTNode for MatchBranch {
    fn id(&self) -> NodeID { self.id }

    fn parent(&self) -> Option<NodeID> { self.parent }

    fn with_parent(mut self, parent: NodeID) -> Self {
        self.parent = Some(parent);
        self
    }

    fn kind(&self) -> NodeKind { NodeKind::Pattern }

    fn span(&self) -> Span { self.span }

    fn children(&self) -> Vec<NodeID> {
        let mut children = vec![self.pattern];
        children.extend(self.guard);
        children.push(self.body);
        children
    }
}

impl_visitable!(MatchBranch, visit_match_branch);

impl fmt::Display for MatchBranch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<pattern>{} -> <body>", if self.guard.is_some() { " when <guard>" } else { "" })
    }
}

/// A `match` expression: a subject evaluated once and tried against
/// `branches` in order. The pattern compiler lowers this into a
/// decision tree and checks it for exhaustiveness.
#[derive(Debug, Clone)]
pub struct Match {
    pub subject: NodeID,
    pub branches: Vec<NodeID>,
    pub id: NodeID,
    pub parent: Option<NodeID>,
    pub span: Span,
}

impl Match {
    #[must_use]
    pub const fn new(subject: NodeID, branches: Vec<NodeID>, id: NodeID, span: Span) -> Self {
        Self { subject, branches, id, parent: None, span }
    }
}

impl ASTNode for Match {
    fn id(&self) -> NodeID { self.id }

    fn parent(&self) -> Option<NodeID> { self.parent }

    fn with_parent(mut self, parent: NodeID) -> Self {
        self.parent = Some(parent);
        self
    }

    fn kind(&self) -> NodeKind { NodeKind::Expression }

    fn span(&self) -> Span { self.span }

    fn children(&self) -> Vec<NodeID> {
        let mut children = vec![self.subject];
        children.extend(self.branches.clone());
        children
    }
}

impl_visitable!(Match, visit_match);

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "match <subject> (<{} branches>)", self.branches.len())
    }
}
