//! Core statement node types: sequencing, scoping, modifiers, return,
//! and the dual-purpose variable declaration/assignment node.

use std::fmt;

use vela_source::types::Span;

use super::{ASTNode, NodeID, NodeKind};

/// A modifier keyword attachable to a declaration (e.g. `mut`, `ante`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModifierToken {
    Mut,
    Ante,
    Pub,
}

impl fmt::Display for ModifierToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Mut => "mut",
            Self::Ante => "ante",
            Self::Pub => "pub",
        };
        write!(f, "{s}")
    }
}

/// An ordered list of statements sharing the enclosing scope. Unlike
/// `Block`, a `Seq` never introduces a new scope of its own.
#[derive(Debug, Clone)]
pub struct Seq {
    pub statements: Vec<NodeID>,
    pub id: NodeID,
    pub parent: Option<NodeID>,
    pub span: Span,
}

impl Seq {
    #[must_use]
    pub const fn new(statements: Vec<NodeID>, id: NodeID, span: Span) -> Self {
        Self { statements, id, parent: None, span }
    }
}

impl ASTNode for Seq {
    fn id(&self) -> NodeID { self.id }

    fn parent(&self) -> Option<NodeID> { self.parent }

    fn with_parent(mut self, parent: NodeID) -> Self {
        self.parent = Some(parent);
        self
    }

    fn kind(&self) -> NodeKind { NodeKind::Statement }

    fn span(&self) -> Span { self.span }

    fn children(&self) -> Vec<NodeID> { self.statements.clone() }
}

impl_visitable!(Seq, visit_seq);

impl fmt::Display for Seq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "seq(<{} stmts>)", self.statements.len())
    }
}

/// A scoped sequence of statements. `Block` opens a new scope; `Seq`
/// does not (see the name resolver's scoping rules).
#[derive(Debug, Clone)]
pub struct Block {
    pub statements: Vec<NodeID>,
    pub id: NodeID,
    pub parent: Option<NodeID>,
    pub span: Span,
}

impl Block {
    #[must_use]
    pub const fn new(statements: Vec<NodeID>, id: NodeID, span: Span) -> Self {
        Self { statements, id, parent: None, span }
    }
}

impl ASTNode for Block {
    fn id(&self) -> NodeID { self.id }

    fn parent(&self) -> Option<NodeID> { self.parent }

    fn with_parent(mut self, parent: NodeID) -> Self {
        self.parent = Some(parent);
        self
    }

    fn kind(&self) -> NodeKind { NodeKind::Statement }

    fn span(&self) -> Span { self.span }

    fn children(&self) -> Vec<NodeID> { self.statements.clone() }
}

impl_visitable!(Block, visit_block);

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "block(<{} stmts>)", self.statements.len())
    }
}

/// A modifier token wrapping a declaration (e.g. `mut x = 1`).
#[derive(Debug, Clone)]
pub struct Mod {
    pub token: ModifierToken,
    pub target: NodeID,
    pub id: NodeID,
    pub parent: Option<NodeID>,
    pub span: Span,
}

impl Mod {
    #[must_use]
    pub const fn new(token: ModifierToken, target: NodeID, id: NodeID, span: Span) -> Self {
        Self { token, target, id, parent: None, span }
    }
}

impl ASTNode for Mod {
    fn id(&self) -> NodeID { self.id }

    fn parent(&self) -> Option<NodeID> { self.parent }

    fn with_parent(mut self, parent: NodeID) -> Self {
        self.parent = Some(parent);
        self
    }

    fn kind(&self) -> NodeKind { NodeKind::Declaration }

    fn span(&self) -> Span { self.span }

    fn children(&self) -> Vec<NodeID> { vec![self.target] }
}

impl_visitable!(Mod, visit_mod);

impl fmt::Display for Mod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}(<target>)", self.token) }
}

/// A return statement, optionally carrying a value.
#[derive(Debug, Clone)]
pub struct Ret {
    pub value: Option<NodeID>,
    pub id: NodeID,
    pub parent: Option<NodeID>,
    pub span: Span,
}

impl Ret {
    #[must_use]
    pub const fn new(value: Option<NodeID>, id: NodeID, span: Span) -> Self {
        Self { value, id, parent: None, span }
    }
}

impl ASTNode for Ret {
    fn id(&self) -> NodeID { self.id }

    fn parent(&self) -> Option<NodeID> { self.parent }

    fn with_parent(mut self, parent: NodeID) -> Self {
        self.parent = Some(parent);
        self
    }

    fn kind(&self) -> NodeKind { NodeKind::Statement }

    fn span(&self) -> Span { self.span }

    fn children(&self) -> Vec<NodeID> { self.value.into_iter().collect() }
}

impl_visitable!(Ret, visit_ret);

impl fmt::Display for Ret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.value.is_some() { write!(f, "return <expr>") } else { write!(f, "return") }
    }
}

/// A dual-purpose declaration-or-assignment.
///
/// A non-empty `modifiers` list introduces a new binding (a `let`),
/// shadowing any outer binding of the same name; an empty list mutates
/// an existing binding and introduces nothing. `decl` is filled in by
/// the name resolver once the binding (new or looked up) is known.
#[derive(Debug, Clone)]
pub struct VarAssign {
    pub name: String,
    pub modifiers: Vec<ModifierToken>,
    pub value: NodeID,
    pub decl: Option<NodeID>,
    pub id: NodeID,
    pub parent: Option<NodeID>,
    pub span: Span,
}

impl VarAssign {
    #[must_use]
    pub const fn new(
        name: String,
        modifiers: Vec<ModifierToken>,
        value: NodeID,
        id: NodeID,
        span: Span,
    ) -> Self {
        Self { name, modifiers, value, decl: None, id, parent: None, span }
    }

    /// A non-empty modifier list means this introduces a new binding.
    #[must_use]
    pub fn is_declaration(&self) -> bool { !self.modifiers.is_empty() }
}

impl ASTNode for VarAssign {
    fn id(&self) -> NodeID { self.id }

    fn parent(&self) -> Option<NodeID> { self.parent }

    fn with_parent(mut self, parent: NodeID) -> Self {
        self.parent = Some(parent);
        self
    }

    fn kind(&self) -> NodeKind { NodeKind::Statement }

    fn span(&self) -> Span { self.span }

    fn children(&self) -> Vec<NodeID> { vec![self.value] }
}

impl_visitable!(VarAssign, visit_var_assign);

impl fmt::Display for VarAssign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_declaration() {
            write!(f, "let {} = <expr>", self.name)
        } else {
            write!(f, "{} = <expr>", self.name)
        }
    }
}
