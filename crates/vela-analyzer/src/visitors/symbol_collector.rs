//! Pre-pass symbol collector.
//!
//! Hoists top-level `data`/`fun`/`trait` names into the module scope
//! before the name resolver walks bodies, so mutual recursion and
//! forward references between top-level declarations resolve. This is
//! the first of the two passes; [`crate::visitors::NameResolver`] is
//! the second.

use vela_ast::ast::AST;
use vela_ast::nodes::{AnyNode, NodeID};

use crate::error::SemanticError;
use crate::symbol::{AssignPurpose, Symbol, SymbolKind, SymbolTable};

/// Walks a `Root`'s top-level declaration lists and defines their names
/// in a fresh `SymbolTable`'s module scope.
///
/// `DataDecl` variants have no node of their own (see
/// [`vela_ast::nodes::DataVariant`]), so their symbols are anchored on
/// the owning `DataDecl`'s node and span.
pub struct SymbolCollector<'ast> {
    ast: &'ast AST,
    table: SymbolTable,
    errors: Vec<SemanticError>,
}

impl<'ast> SymbolCollector<'ast> {
    #[must_use]
    pub fn new(ast: &'ast AST) -> Self { Self { ast, table: SymbolTable::new(), errors: Vec::new() } }

    /// Collects top-level names from `module_id`, a `Root` node.
    ///
    /// ## Errors
    ///
    /// Returns accumulated [`SemanticError::DuplicateSymbol`] errors if
    /// any top-level name collides with another.
    pub fn collect(mut self, module_id: NodeID) -> Result<SymbolTable, Vec<SemanticError>> {
        if let Some(node) = self.ast.get_node(module_id)
            && let AnyNode::Root(root) = &node.data
        {
            for &decl_id in &root.funcs {
                self.hoist_declaration(decl_id);
            }
        }

        if self.errors.is_empty() { Ok(self.table) } else { Err(self.errors) }
    }

    fn define(&mut self, name: String, kind: SymbolKind, node_id: NodeID) {
        let Some(node) = self.ast.get_node(node_id) else { return };
        let span = node.span;
        let scope_id = self.table.current_scope().expect("module scope always exists");
        let symbol = Symbol::new(name, kind, AssignPurpose::Normal, node_id, span, scope_id);
        if let Err(error) = self.table.define_symbol(symbol.name.clone(), symbol) {
            self.errors.push(error);
        }
    }

    fn hoist_declaration(&mut self, decl_id: NodeID) {
        let Some(node) = self.ast.get_node(decl_id) else { return };
        match &node.data {
            AnyNode::FuncDecl(func) => {
                self.define(func.name.clone(), SymbolKind::Function, decl_id);
            }
            AnyNode::DataDecl(data) => {
                self.define(data.name.clone(), SymbolKind::Data, decl_id);
                for variant in &data.variants {
                    self.define(variant.name.clone(), SymbolKind::DataVariant, decl_id);
                }
            }
            AnyNode::Trait(trait_decl) => {
                self.define(trait_decl.name.clone(), SymbolKind::Trait, decl_id);
            }
            _ => {}
        }
    }
}
