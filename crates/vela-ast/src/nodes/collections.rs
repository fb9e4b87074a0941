//! Collection node types.
//!
//! `Array` and `Tuple` are the two fixed-shape composite literals; both
//! simply own an ordered element list.

use std::fmt;

use vela_source::types::Span;

use super::{ASTNode, NodeID, NodeKind};

/// An array literal (e.g. `[1, 2, 3]`).
#[derive(Debug, Clone)]
pub struct Array {
    pub elements: Vec<NodeID>,
    pub id: NodeID,
    pub parent: Option<NodeID>,
    pub span: Span,
}

impl Array {
    #[must_use]
    pub const fn new(elements: Vec<NodeID>, id: NodeID, span: Span) -> Self {
        Self { elements, id, parent: None, span }
    }
}

impl ASTNode for Array {
    fn id(&self) -> NodeID { self.id }

    fn parent(&self) -> Option<NodeID> { self.parent }

    fn with_parent(mut self, parent: NodeID) -> Self {
        self.parent = Some(parent);
        self
    }

    fn kind(&self) -> NodeKind { NodeKind::Expression }

    fn span(&self) -> Span { self.span }

    fn children(&self) -> Vec<NodeID> { self.elements.clone() }
}

impl_visitable!(Array, visit_array);

impl fmt::Display for Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[<{} elements>]", self.elements.len())
    }
}

/// A tuple literal (e.g. `(1, "a", true)`), and the shape a tuple
/// destructuring pattern takes inside a `MatchBranch`.
#[derive(Debug, Clone)]
pub struct Tuple {
    pub elements: Vec<NodeID>,
    pub id: NodeID,
    pub parent: Option<NodeID>,
    pub span: Span,
}

impl Tuple {
    #[must_use]
    pub const fn new(elements: Vec<NodeID>, id: NodeID, span: Span) -> Self {
        Self { elements, id, parent: None, span }
    }
}

impl ASTNode for Tuple {
    fn id(&self) -> NodeID { self.id }

    fn parent(&self) -> Option<NodeID> { self.parent }

    fn with_parent(mut self, parent: NodeID) -> Self {
        self.parent = Some(parent);
        self
    }

    fn kind(&self) -> NodeKind { NodeKind::Expression }

    fn span(&self) -> Span { self.span }

    fn children(&self) -> Vec<NodeID> { self.elements.clone() }
}

impl_visitable!(Tuple, visit_tuple);

impl fmt::Display for Tuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(<{} elements>)", self.elements.len())
    }
}
