//! Module node types: `Import` and the per-file `Root`.

use std::fmt;

use vela_source::types::Span;

use super::{ASTNode, NodeID, NodeKind};

/// An `import path/to/module` statement.
#[derive(Debug, Clone)]
pub struct Import {
    pub module_parts: Vec<String>,
    pub alias: Option<String>,
    pub id: NodeID,
    pub parent: Option<NodeID>,
    pub span: Span,
}

impl Import {
    #[must_use]
    pub const fn new(module_parts: Vec<String>, alias: Option<String>, id: NodeID, span: Span) -> Self {
        Self { module_parts, alias, id, parent: None, span }
    }
}

impl ASTNode for Import {
    fn id(&self) -> NodeID { self.id }

    fn parent(&self) -> Option<NodeID> { self.parent }

    fn with_parent(mut self, parent: NodeID) -> Self {
        self.parent = Some(parent);
        self
    }

    fn kind(&self) -> NodeKind { NodeKind::Statement }

    fn span(&self) -> Span { self.span }
}

impl_visitable!(Import, visit_import);

impl fmt::Display for Import {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let module = self.module_parts.join("/");
        match &self.alias {
            Some(alias) => write!(f, "import {module} as {alias}"),
            None => write!(f, "import {module}"),
        }
    }
}

/// The root node of a single source file's AST, one leaf of the
/// multi-root module tree. Keeps `extensions`, `funcs`, and top-level
/// `main` statements as three separate lists rather than one flat
/// statement list, matching the closed grammar's three distinct
/// top-level item shapes (ext blocks, declarations, and executable
/// statements run at module load).
#[derive(Debug, Clone)]
pub struct Root {
    pub name: String,
    pub extensions: Vec<NodeID>,
    pub funcs: Vec<NodeID>,
    pub main: Vec<NodeID>,
    pub id: NodeID,
    pub parent: Option<NodeID>,
    pub span: Span,
}

impl Root {
    #[must_use]
    pub const fn new(
        name: String,
        extensions: Vec<NodeID>,
        funcs: Vec<NodeID>,
        main: Vec<NodeID>,
        id: NodeID,
        span: Span,
    ) -> Self {
        Self { name, extensions, funcs, main, id, parent: None, span }
    }
}

impl ASTNode for Root {
    fn id(&self) -> NodeID { self.id }

    fn parent(&self) -> Option<NodeID> { self.parent }

    fn with_parent(mut self, parent: NodeID) -> Self {
        self.parent = Some(parent);
        self
    }

    fn kind(&self) -> NodeKind { NodeKind::Module }

    fn span(&self) -> Span { self.span }

    fn children(&self) -> Vec<NodeID> {
        let mut children = self.extensions.clone();
        children.extend(self.funcs.clone());
        children.extend(self.main.clone());
        children
    }
}

impl_visitable!(Root, visit_root);

impl fmt::Display for Root {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "module {}", self.name) }
}
