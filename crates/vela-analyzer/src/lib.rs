//! Semantic analysis for the Vela programming language.
//!
//! This crate provides the hash-consed type universe, the multi-root
//! module tree, and the name resolver for the Vela compiler front-end:
//!
//! - Symbol table construction and two-pass name resolution
//! - A canonical, hash-consed type universe
//! - A virtual filesystem tree of modules
//! - Semantic error types and reporting
//!
//! ## Architecture
//!
//! - **Symbol Management** ([`symbol`]): Manages symbols, scopes, and name resolution
//! - **Type Universe** ([`types`]): The hash-consed canonical type representation
//! - **Module Tree** ([`module_tree`]): The virtual filesystem tree of modules
//! - **Error Handling** ([`error`]): Semantic error types and reporting
//! - **Context** ([`context`]): Main semantic analysis context
//!
//! ## Example
//!
//! ```rust,ignore
//! use vela_analyzer::context::SemanticContext;
//! use vela_ast::ast::AST;
//!
//! // Create AST from parsing...
//! let mut ast = AST::new();
//! let mut context = SemanticContext::new();
//!
//! // Perform semantic analysis
//! context.collect_symbols(&ast, root_node)?;
//! context.resolve_names(&mut ast, root_node)?;
//! ```

pub mod context;
pub mod error;
pub mod module_tree;
pub mod symbol;
pub mod types;
pub mod visitors;

use context::SemanticContext;
use error::SemanticError;
use vela_ast::ast::AST;
use vela_ast::nodes::NodeID;

/// Analyzes a module and returns a semantic context with collected
/// symbols and resolved names.
///
/// This is a convenience function that creates a semantic context and
/// performs the complete two-pass semantic analysis pipeline:
///
/// 1. Symbol collection (hoisting top-level declarations)
/// 2. Name resolution (including the ante visitor)
///
/// ## Errors
///
/// Returns semantic errors if any were encountered during analysis.
pub fn analyze_module(ast: &mut AST, module_id: NodeID) -> Result<SemanticContext, Vec<SemanticError>> {
    let mut context = SemanticContext::new();
    context.collect_symbols(ast, module_id)?;
    context.resolve_names(ast, module_id)?;

    Ok(context)
}
