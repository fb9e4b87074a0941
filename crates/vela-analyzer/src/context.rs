//! Semantic analysis context.
//!
//! This module provides the main context for semantic analysis, which
//! coordinates symbol table construction, name resolution, the type
//! universe, and the module tree for a single compiled file.

use vela_ast::ast::AST;
use vela_ast::nodes::NodeID;

use crate::error::SemanticError;
use crate::module_tree::ModuleTree;
use crate::symbol::SymbolTable;
use crate::types::TypeUniverse;
use crate::visitors::{NameResolver, SymbolCollector};

/// Main context for semantic analysis.
///
/// Brings together the symbol table, the hash-consed type universe, and
/// the module tree, providing a unified interface for the two-pass
/// analysis pipeline.
#[derive(Debug)]
pub struct SemanticContext {
    /// The symbol table for managing scopes and symbols.
    pub symbol_table: SymbolTable,
    /// The process-wide canonical type table.
    pub types: TypeUniverse,
    /// The virtual filesystem tree of modules.
    pub modules: ModuleTree,
}

impl SemanticContext {
    /// Creates a new semantic context with an empty symbol table, type
    /// universe, and module tree.
    #[must_use]
    pub fn new() -> Self {
        Self { symbol_table: SymbolTable::new(), types: TypeUniverse::new(), modules: ModuleTree::new() }
    }

    /// Collects top-level symbols from a module AST.
    ///
    /// This performs the first pass of semantic analysis: hoisting
    /// top-level `data`/`fun`/`trait` names into the module scope so
    /// the second pass can resolve forward references between them.
    ///
    /// ## Errors
    ///
    /// Returns semantic errors if any were encountered during symbol
    /// collection, such as duplicate top-level declarations.
    pub fn collect_symbols(&mut self, ast: &AST, module_id: NodeID) -> Result<(), Vec<SemanticError>> {
        self.symbol_table = SymbolCollector::new(ast).collect(module_id)?;
        Ok(())
    }

    /// Resolves names in a module, binding references to definitions.
    ///
    /// This performs the second pass of semantic analysis: walking the
    /// whole tree, opening and closing scopes, binding local variables,
    /// resolving every `Var`/`Global` reference, and running the ante
    /// visitor over `ante`-marked expressions. `ast` is taken mutably so
    /// the resolved declaration sites can be written back onto
    /// `Var.decl`, `Global.decl`, `VarAssign.decl`, and `For.var_decl`.
    ///
    /// ## Errors
    ///
    /// Returns semantic errors if any were encountered during name
    /// resolution, such as undefined names or ante violations.
    pub fn resolve_names(&mut self, ast: &mut AST, module_id: NodeID) -> Result<(), Vec<SemanticError>> {
        let table = std::mem::replace(&mut self.symbol_table, SymbolTable::new());
        self.symbol_table = NameResolver::new(ast, table).resolve(module_id)?;
        Ok(())
    }

    /// Gets a reference to the symbol table.
    #[must_use]
    pub const fn symbol_table(&self) -> &SymbolTable { &self.symbol_table }

    /// Gets a mutable reference to the symbol table.
    pub const fn symbol_table_mut(&mut self) -> &mut SymbolTable { &mut self.symbol_table }

    /// Gets a reference to the type universe.
    #[must_use]
    pub const fn types(&self) -> &TypeUniverse { &self.types }

    /// Gets a mutable reference to the type universe.
    pub const fn types_mut(&mut self) -> &mut TypeUniverse { &mut self.types }

    /// Gets a reference to the module tree.
    #[must_use]
    pub const fn modules(&self) -> &ModuleTree { &self.modules }

    /// Gets a mutable reference to the module tree.
    pub const fn modules_mut(&mut self) -> &mut ModuleTree { &mut self.modules }
}

impl Default for SemanticContext {
    fn default() -> Self { Self::new() }
}
