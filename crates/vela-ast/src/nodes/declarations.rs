//! Declaration node types: functions, algebraic data types, traits, and
//! extensions.

use std::fmt;

use vela_source::types::Span;

use super::{ASTNode, NodeID, NodeKind};

/// A function declaration (e.g. `fn add(x, y) = x + y`).
///
/// Parameters have no dedicated node type; each is a `NamedVal` whose
/// `name` is the parameter name and `value` is its type annotation (a
/// `Type` node), matching the closed set's reuse of `NamedVal` for
/// any name-paired-with-expression shape.
#[derive(Debug, Clone)]
pub struct FuncDecl {
    pub name: String,
    pub params: Vec<NodeID>,
    pub return_type: Option<NodeID>,
    pub body: NodeID,
    pub id: NodeID,
    pub parent: Option<NodeID>,
    pub span: Span,
}

impl FuncDecl {
    #[must_use]
    pub const fn new(
        name: String,
        params: Vec<NodeID>,
        return_type: Option<NodeID>,
        body: NodeID,
        id: NodeID,
        span: Span,
    ) -> Self {
        Self { name, params, return_type, body, id, parent: None, span }
    }
}

impl ASTNode for FuncDecl {
    fn id(&self) -> NodeID { self.id }

    fn parent(&self) -> Option<NodeID> { self.parent }

    fn with_parent(mut self, parent: NodeID) -> Self {
        self.parent = Some(parent);
        self
    }

    fn kind(&self) -> NodeKind { NodeKind::Declaration }

    fn span(&self) -> Span { self.span }

    fn children(&self) -> Vec<NodeID> {
        let mut children = self.params.clone();
        children.extend(self.return_type);
        children.push(self.body);
        children
    }
}

impl_visitable!(FuncDecl, visit_func_decl);

impl fmt::Display for FuncDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fn {}(<{} params>)", self.name, self.params.len())
    }
}

/// One constructor of a `DataDecl` (e.g. the `Cons(a, List a)` arm of a
/// `List` union). `fields` holds each field's type node; a variant
/// with no fields is a nullary constructor (e.g. `Nil`).
#[derive(Debug, Clone)]
pub struct DataVariant {
    pub name: String,
    pub fields: Vec<NodeID>,
}

impl DataVariant {
    #[must_use]
    pub const fn new(name: String, fields: Vec<NodeID>) -> Self { Self { name, fields } }
}

/// An algebraic data type declaration (e.g. `data List a = Nil | Cons
/// a (List a)`).
#[derive(Debug, Clone)]
pub struct DataDecl {
    pub name: String,
    pub type_params: Vec<String>,
    pub variants: Vec<DataVariant>,
    pub id: NodeID,
    pub parent: Option<NodeID>,
    pub span: Span,
}

impl DataDecl {
    #[must_use]
    pub const fn new(
        name: String,
        type_params: Vec<String>,
        variants: Vec<DataVariant>,
        id: NodeID,
        span: Span,
    ) -> Self {
        Self { name, type_params, variants, id, parent: None, span }
    }
}

impl ASTNode for DataDecl {
    fn id(&self) -> NodeID { self.id }

    fn parent(&self) -> Option<NodeID> { self.parent }

    fn with_parent(mut self, parent: NodeID) -> Self {
        self.parent = Some(parent);
        self
    }

    fn kind(&self) -> NodeKind { NodeKind::Declaration }

    fn span(&self) -> Span { self.span }

    fn children(&self) -> Vec<NodeID> {
        self.variants.iter().flat_map(|variant| variant.fields.clone()).collect()
    }
}

impl_visitable!(DataDecl, visit_data_decl);

impl fmt::Display for DataDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "data {} (<{} variants>)", self.name, self.variants.len())
    }
}

/// A trait declaration naming a set of required function signatures
/// (each a `FuncDecl` whose body is a placeholder `Seq` with no
/// statements).
#[derive(Debug, Clone)]
pub struct Trait {
    pub name: String,
    pub functions: Vec<NodeID>,
    pub id: NodeID,
    pub parent: Option<NodeID>,
    pub span: Span,
}

impl Trait {
    #[must_use]
    pub const fn new(name: String, functions: Vec<NodeID>, id: NodeID, span: Span) -> Self {
        Self { name, functions, id, parent: None, span }
    }
}

impl ASTNode for Trait {
    fn id(&self) -> NodeID { self.id }

    fn parent(&self) -> Option<NodeID> { self.parent }

    fn with_parent(mut self, parent: NodeID) -> Self {
        self.parent = Some(parent);
        self
    }

    fn kind(&self) -> NodeKind { NodeKind::Declaration }

    fn span(&self) -> Span { self.span }

    fn children(&self) -> Vec<NodeID> { self.functions.clone() }
}

impl_visitable!(Trait, visit_trait);

impl fmt::Display for Trait {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "trait {} (<{} functions>)", self.name, self.functions.len())
    }
}

/// An extension block attaching `functions` (and, optionally, a
/// `trait_name` impl obligation) to `target_type`.
#[derive(Debug, Clone)]
pub struct Ext {
    pub target_type: NodeID,
    pub trait_name: Option<String>,
    pub functions: Vec<NodeID>,
    pub id: NodeID,
    pub parent: Option<NodeID>,
    pub span: Span,
}

impl Ext {
    #[must_use]
    pub const fn new(
        target_type: NodeID,
        trait_name: Option<String>,
        functions: Vec<NodeID>,
        id: NodeID,
        span: Span,
    ) -> Self {
        Self { target_type, trait_name, functions, id, parent: None, span }
    }
}

impl ASTNode for Ext {
    fn id(&self) -> NodeID { self.id }

    fn parent(&self) -> Option<NodeID> { self.parent }

    fn with_parent(mut self, parent: NodeID) -> Self {
        self.parent = Some(parent);
        self
    }

    fn kind(&self) -> NodeKind { NodeKind::Declaration }

    fn span(&self) -> Span { self.span }

    fn children(&self) -> Vec<NodeID> {
        let mut children = vec![self.target_type];
        children.extend(self.functions.clone());
        children
    }
}

impl_visitable!(Ext, visit_ext);

impl fmt::Display for Ext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.trait_name {
            Some(trait_name) => write!(f, "ext {trait_name} <type>"),
            None => write!(f, "ext <type>"),
        }
    }
}
