//! Core expression node types: unary/binary operators, type casts,
//! name=value bindings, and the two flavors of name reference (`Var`,
//! `Global`).

use std::fmt;

use vela_source::types::Span;

use super::{ASTNode, NodeID, NodeKind};

/// Unary operator kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnOpKind {
    Neg,
    Not,
    Deref,
    AddrOf,
}

impl fmt::Display for UnOpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Neg => "-",
            Self::Not => "not",
            Self::Deref => "@",
            Self::AddrOf => "&",
        };
        write!(f, "{s}")
    }
}

/// Binary operator kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOpKind {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Eq,
    NotEq,
    Less,
    LessEq,
    Greater,
    GreaterEq,
    And,
    Or,
}

impl fmt::Display for BinOpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Less => "<",
            Self::LessEq => "<=",
            Self::Greater => ">",
            Self::GreaterEq => ">=",
            Self::And => "and",
            Self::Or => "or",
        };
        write!(f, "{s}")
    }
}

/// A unary operation (e.g. `-x`, `not b`).
#[derive(Debug, Clone)]
pub struct UnOp {
    pub op: UnOpKind,
    pub operand: NodeID,
    pub id: NodeID,
    pub parent: Option<NodeID>,
    pub span: Span,
}

impl UnOp {
    #[must_use]
    pub const fn new(op: UnOpKind, operand: NodeID, id: NodeID, span: Span) -> Self {
        Self { op, operand, id, parent: None, span }
    }
}

impl ASTNode for UnOp {
    fn id(&self) -> NodeID { self.id }

    fn parent(&self) -> Option<NodeID> { self.parent }

    fn with_parent(mut self, parent: NodeID) -> Self {
        self.parent = Some(parent);
        self
    }

    fn kind(&self) -> NodeKind { NodeKind::Expression }

    fn span(&self) -> Span { self.span }

    fn children(&self) -> Vec<NodeID> { vec![self.operand] }
}

impl_visitable!(UnOp, visit_un_op);

impl fmt::Display for UnOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}(<expr>)", self.op) }
}

/// A binary operation (e.g. `a + b`).
#[derive(Debug, Clone)]
pub struct BinOp {
    pub op: BinOpKind,
    pub lhs: NodeID,
    pub rhs: NodeID,
    pub id: NodeID,
    pub parent: Option<NodeID>,
    pub span: Span,
}

impl BinOp {
    #[must_use]
    pub const fn new(op: BinOpKind, lhs: NodeID, rhs: NodeID, id: NodeID, span: Span) -> Self {
        Self { op, lhs, rhs, id, parent: None, span }
    }
}

impl ASTNode for BinOp {
    fn id(&self) -> NodeID { self.id }

    fn parent(&self) -> Option<NodeID> { self.parent }

    fn with_parent(mut self, parent: NodeID) -> Self {
        self.parent = Some(parent);
        self
    }

    fn kind(&self) -> NodeKind { NodeKind::Expression }

    fn span(&self) -> Span { self.span }

    fn children(&self) -> Vec<NodeID> { vec![self.lhs, self.rhs] }
}

impl_visitable!(BinOp, visit_bin_op);

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(<expr> {} <expr>)", self.op)
    }
}

/// A type cast (e.g. `x as i64`).
#[derive(Debug, Clone)]
pub struct TypeCast {
    pub expr: NodeID,
    pub target_type: NodeID,
    pub id: NodeID,
    pub parent: Option<NodeID>,
    pub span: Span,
}

impl TypeCast {
    #[must_use]
    pub const fn new(expr: NodeID, target_type: NodeID, id: NodeID, span: Span) -> Self {
        Self { expr, target_type, id, parent: None, span }
    }
}

impl ASTNode for TypeCast {
    fn id(&self) -> NodeID { self.id }

    fn parent(&self) -> Option<NodeID> { self.parent }

    fn with_parent(mut self, parent: NodeID) -> Self {
        self.parent = Some(parent);
        self
    }

    fn kind(&self) -> NodeKind { NodeKind::Expression }

    fn span(&self) -> Span { self.span }

    fn children(&self) -> Vec<NodeID> { vec![self.expr, self.target_type] }
}

impl_visitable!(TypeCast, visit_type_cast);

impl fmt::Display for TypeCast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "(<expr> as <type>)") }
}

/// A `name = value` binding. Used both for keyword-style call arguments
/// and, reinterpreted by the parser, to represent a union-constructor
/// pattern `Ctor(payload)` inside a `MatchBranch` — the closed node set
/// in the data model has no dedicated constructor-pattern variant, so
/// this node is reused for that shape with `name` holding the
/// constructor name and `value` the payload (typically a `Tuple`).
#[derive(Debug, Clone)]
pub struct NamedVal {
    pub name: String,
    pub value: NodeID,
    pub id: NodeID,
    pub parent: Option<NodeID>,
    pub span: Span,
}

impl NamedVal {
    #[must_use]
    pub const fn new(name: String, value: NodeID, id: NodeID, span: Span) -> Self {
        Self { name, value, id, parent: None, span }
    }
}

impl ASTNode for NamedVal {
    fn id(&self) -> NodeID { self.id }

    fn parent(&self) -> Option<NodeID> { self.parent }

    fn with_parent(mut self, parent: NodeID) -> Self {
        self.parent = Some(parent);
        self
    }

    fn kind(&self) -> NodeKind { NodeKind::Expression }

    fn span(&self) -> Span { self.span }

    fn children(&self) -> Vec<NodeID> { vec![self.value] }
}

impl_visitable!(NamedVal, visit_named_val);

impl fmt::Display for NamedVal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}=<value>", self.name) }
}

/// A variable reference in an expression.
///
/// `decl` is the resolver's back-link contract: `None` before name
/// resolution, `Some` after, pointing at the declaration site. A `Var`
/// named `_` is never bound by the pattern compiler, by convention.
#[derive(Debug, Clone)]
pub struct Var {
    pub name: String,
    pub decl: Option<NodeID>,
    pub id: NodeID,
    pub parent: Option<NodeID>,
    pub span: Span,
}

impl Var {
    #[must_use]
    pub const fn new(name: String, id: NodeID, span: Span) -> Self {
        Self { name, decl: None, id, parent: None, span }
    }

    /// Returns true for the conventional catch-all binder name.
    #[must_use]
    pub fn is_wildcard(&self) -> bool { self.name == "_" }
}

impl ASTNode for Var {
    fn id(&self) -> NodeID { self.id }

    fn parent(&self) -> Option<NodeID> { self.parent }

    fn with_parent(mut self, parent: NodeID) -> Self {
        self.parent = Some(parent);
        self
    }

    fn kind(&self) -> NodeKind { NodeKind::Expression }

    fn span(&self) -> Span { self.span }
}

impl_visitable!(Var, visit_var);

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.name) }
}

/// A `global x` declaration inside a function body, naming an outer
/// binding that assignments to `x` should target instead of shadowing.
#[derive(Debug, Clone)]
pub struct Global {
    pub name: String,
    pub decl: Option<NodeID>,
    pub id: NodeID,
    pub parent: Option<NodeID>,
    pub span: Span,
}

impl Global {
    #[must_use]
    pub const fn new(name: String, id: NodeID, span: Span) -> Self {
        Self { name, decl: None, id, parent: None, span }
    }
}

impl ASTNode for Global {
    fn id(&self) -> NodeID { self.id }

    fn parent(&self) -> Option<NodeID> { self.parent }

    fn with_parent(mut self, parent: NodeID) -> Self {
        self.parent = Some(parent);
        self
    }

    fn kind(&self) -> NodeKind { NodeKind::Statement }

    fn span(&self) -> Span { self.span }
}

impl_visitable!(Global, visit_global);

impl fmt::Display for Global {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "global {}", self.name) }
}
