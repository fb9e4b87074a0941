//! Control-flow node types: `If`, `While`, `For`, and `Jump`
//! (`continue`/`break`).

use std::fmt;

use vela_source::types::Span;

use super::{ASTNode, NodeID, NodeKind};

/// Which kind of jump a `Jump` node performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpKind {
    Continue,
    Break,
}

impl fmt::Display for JumpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", if *self == Self::Continue { "continue" } else { "break" })
    }
}

/// A `continue` or `break` statement.
#[derive(Debug, Clone, Copy)]
pub struct Jump {
    pub kind: JumpKind,
    pub id: NodeID,
    pub parent: Option<NodeID>,
    pub span: Span,
}

impl Jump {
    #[must_use]
    pub const fn new(kind: JumpKind, id: NodeID, span: Span) -> Self {
        Self { kind, id, parent: None, span }
    }
}

impl ASTNode for Jump {
    fn id(&self) -> NodeID { self.id }

    fn parent(&self) -> Option<NodeID> { self.parent }

    fn with_parent(mut self, parent: NodeID) -> Self {
        self.parent = Some(parent);
        self
    }

    fn kind(&self) -> NodeKind { NodeKind::Statement }

    fn span(&self) -> Span { self.span }
}

impl_visitable!(Jump, visit_jump);

impl fmt::Display for Jump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.kind) }
}

/// A `while` loop.
#[derive(Debug, Clone)]
pub struct While {
    pub condition: NodeID,
    pub body: NodeID,
    pub id: NodeID,
    pub parent: Option<NodeID>,
    pub span: Span,
}

impl While {
    #[must_use]
    pub const fn new(condition: NodeID, body: NodeID, id: NodeID, span: Span) -> Self {
        Self { condition, body, id, parent: None, span }
    }
}

impl ASTNode for While {
    fn id(&self) -> NodeID { self.id }

    fn parent(&self) -> Option<NodeID> { self.parent }

    fn with_parent(mut self, parent: NodeID) -> Self {
        self.parent = Some(parent);
        self
    }

    fn kind(&self) -> NodeKind { NodeKind::Statement }

    fn span(&self) -> Span { self.span }

    fn children(&self) -> Vec<NodeID> { vec![self.condition, self.body] }
}

impl_visitable!(While, visit_while);

impl fmt::Display for While {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "while <cond> <body>") }
}

/// A `for` loop binding `var_name` over `range` for the duration of
/// `body`. The resolver opens a single new scope covering both the
/// loop variable and the body.
#[derive(Debug, Clone)]
pub struct For {
    pub var_name: String,
    pub var_decl: Option<NodeID>,
    pub range: NodeID,
    pub body: NodeID,
    pub id: NodeID,
    pub parent: Option<NodeID>,
    pub span: Span,
}

impl For {
    #[must_use]
    pub const fn new(var_name: String, range: NodeID, body: NodeID, id: NodeID, span: Span) -> Self {
        Self { var_name, var_decl: None, range, body, id, parent: None, span }
    }
}

impl ASTNode for For {
    fn id(&self) -> NodeID { self.id }

    fn parent(&self) -> Option<NodeID> { self.parent }

    fn with_parent(mut self, parent: NodeID) -> Self {
        self.parent = Some(parent);
        self
    }

    fn kind(&self) -> NodeKind { NodeKind::Statement }

    fn span(&self) -> Span { self.span }

    fn children(&self) -> Vec<NodeID> { vec![self.range, self.body] }
}

impl_visitable!(For, visit_for);

impl fmt::Display for For {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "for {} in <range> <body>", self.var_name)
    }
}

/// An `if`/`elif`/`else` chain. `else_branch` may itself be another
/// `If` node (an `elif`) or a plain block (the terminal `else`).
#[derive(Debug, Clone)]
pub struct If {
    pub condition: NodeID,
    pub then_branch: NodeID,
    pub else_branch: Option<NodeID>,
    pub id: NodeID,
    pub parent: Option<NodeID>,
    pub span: Span,
}

impl If {
    #[must_use]
    pub const fn new(
        condition: NodeID,
        then_branch: NodeID,
        else_branch: Option<NodeID>,
        id: NodeID,
        span: Span,
    ) -> Self {
        Self { condition, then_branch, else_branch, id, parent: None, span }
    }
}

impl ASTNode for If {
    fn id(&self) -> NodeID { self.id }

    fn parent(&self) -> Option<NodeID> { self.parent }

    fn with_parent(mut self, parent: NodeID) -> Self {
        self.parent = Some(parent);
        self
    }

    fn kind(&self) -> NodeKind { NodeKind::Statement }

    fn span(&self) -> Span { self.span }

    fn children(&self) -> Vec<NodeID> {
        let mut children = vec![self.condition, self.then_branch];
        children.extend(self.else_branch);
        children
    }
}

impl_visitable!(If, visit_if);

impl fmt::Display for If {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "if <cond> <then>") }
}
