//! The syntactic `Type` node.
//!
//! This is the AST's pre-resolution view of a type expression as
//! written in source — a `Named("List", [Named("i32", [])])` shape, not
//! yet canonicalized. The analyzer's hash-consed type universe (built
//! over this syntax during name resolution) is the semantic, canonical
//! notion of a type and is a distinct concept from this node.

use std::fmt;

use vela_source::types::Span;

use super::statements_core::ModifierToken;
use super::{ASTNode, NodeID, NodeKind};

/// The shape a type expression can take.
#[derive(Debug, Clone)]
pub enum TypeExprKind {
    /// A named type, optionally applied to type arguments (e.g. `i32`,
    /// `List a`).
    Named { name: String, args: Vec<NodeID> },
    /// A tuple type (e.g. `(i32, bool)`).
    Tuple { elements: Vec<NodeID> },
    /// A function type (e.g. `i32 -> bool`).
    Function { params: Vec<NodeID>, return_type: NodeID },
    /// A pointer type (e.g. `Ptr i32`).
    Ptr { pointee: NodeID },
    /// An array type (e.g. `Array i32`).
    Array { element: NodeID },
    /// A type variable introduced by a generic declaration (e.g. the
    /// `a` in `data List a = ...`).
    TypeVar { name: String },
    /// A modifier wrapping another type expression (e.g. `mut i32`).
    Modifier { token: ModifierToken, target: NodeID },
}

/// A type expression node.
#[derive(Debug, Clone)]
pub struct Type {
    pub expr: TypeExprKind,
    pub id: NodeID,
    pub parent: Option<NodeID>,
    pub span: Span,
}

impl Type {
    #[must_use]
    pub const fn new(expr: TypeExprKind, id: NodeID, span: Span) -> Self {
        Self { expr, id, parent: None, span }
    }
}

impl ASTNode for Type {
    fn id(&self) -> NodeID { self.id }

    fn parent(&self) -> Option<NodeID> { self.parent }

    fn with_parent(mut self, parent: NodeID) -> Self {
        self.parent = Some(parent);
        self
    }

    fn kind(&self) -> NodeKind { NodeKind::Type }

    fn span(&self) -> Span { self.span }

    fn children(&self) -> Vec<NodeID> {
        match &self.expr {
            TypeExprKind::Named { args, .. } => args.clone(),
            TypeExprKind::Tuple { elements } => elements.clone(),
            TypeExprKind::Function { params, return_type } => {
                let mut children = params.clone();
                children.push(*return_type);
                children
            }
            TypeExprKind::Ptr { pointee } => vec![*pointee],
            TypeExprKind::Array { element } => vec![*element],
            TypeExprKind::TypeVar { .. } => Vec::new(),
            TypeExprKind::Modifier { target, .. } => vec![*target],
        }
    }
}

impl_visitable!(Type, visit_type);

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.expr {
            TypeExprKind::Named { name, args } => {
                if args.is_empty() {
                    write!(f, "{name}")
                } else {
                    write!(f, "{name} (<{} args>)", args.len())
                }
            }
            TypeExprKind::Tuple { elements } => write!(f, "(<{} elements>)", elements.len()),
            TypeExprKind::Function { params, .. } => write!(f, "(<{} params> -> <ret>)", params.len()),
            TypeExprKind::Ptr { .. } => write!(f, "Ptr <type>"),
            TypeExprKind::Array { .. } => write!(f, "Array <type>"),
            TypeExprKind::TypeVar { name } => write!(f, "{name}"),
            TypeExprKind::Modifier { token, .. } => write!(f, "{token} <type>"),
        }
    }
}
