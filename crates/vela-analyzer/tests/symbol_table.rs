//! Tests for symbol table functionality.

use vela_analyzer::context::SemanticContext;
use vela_analyzer::symbol::{AssignPurpose, ScopeKind, Symbol, SymbolKind, SymbolTable};
use vela_ast::nodes::NodeID;
use vela_source::types::Span;

#[test]
fn test_symbol_table_creation() {
    let table = SymbolTable::new();
    assert_eq!(table.scope_count(), 1, "Should have module scope");
    assert!(table.current_scope().is_some(), "Should have current scope");
}

#[test]
fn test_scope_creation() {
    let mut table = SymbolTable::new();
    let module_scope = table.current_scope().unwrap();

    let func_scope = table.create_scope(ScopeKind::Function, Some(module_scope));
    assert_eq!(table.scope_count(), 2, "Should have 2 scopes");

    let scope = table.get_scope(func_scope).unwrap();
    assert_eq!(scope.kind, ScopeKind::Function);
    assert_eq!(scope.parent(), Some(module_scope));
}

#[test]
fn test_scope_hierarchy() {
    let mut table = SymbolTable::new();
    let module_scope = table.current_scope().unwrap();

    // module -> function -> loop -> block
    let func_scope = table.create_scope(ScopeKind::Function, Some(module_scope));
    let loop_scope = table.create_scope(ScopeKind::Loop, Some(func_scope));
    let block_scope = table.create_scope(ScopeKind::Block, Some(loop_scope));

    let block = table.get_scope(block_scope).unwrap();
    assert_eq!(block.parent(), Some(loop_scope));

    let loop_ = table.get_scope(loop_scope).unwrap();
    assert_eq!(loop_.parent(), Some(func_scope));

    let func = table.get_scope(func_scope).unwrap();
    assert_eq!(func.parent(), Some(module_scope));
}

#[test]
fn test_enter_exit_scope() {
    let mut table = SymbolTable::new();
    let module_scope = table.current_scope().unwrap();

    let func_scope = table.create_scope(ScopeKind::Function, Some(module_scope));
    table.enter_scope(func_scope);
    assert_eq!(table.current_scope(), Some(func_scope));

    assert!(table.exit_scope().is_some());
    assert_eq!(table.current_scope(), Some(module_scope));
}

#[test]
fn test_exit_scope_from_module_returns_none() {
    let mut table = SymbolTable::new();
    assert_eq!(table.exit_scope(), None);
}

#[test]
fn test_symbol_definition() {
    let mut table = SymbolTable::new();
    let span = Span::new(0, 10);

    let symbol = Symbol::new(
        "x".to_string(),
        SymbolKind::Variable,
        AssignPurpose::Normal,
        NodeID::new(1, 0),
        span,
        table.current_scope().unwrap(),
    );

    assert!(table.define_symbol("x".to_string(), symbol).is_ok());
}

#[test]
fn test_duplicate_symbol_error() {
    let mut table = SymbolTable::new();
    let span = Span::new(0, 10);
    let scope = table.current_scope().unwrap();

    let symbol1 = Symbol::new(
        "x".to_string(),
        SymbolKind::Variable,
        AssignPurpose::Normal,
        NodeID::new(1, 0),
        span,
        scope,
    );
    let symbol2 = Symbol::new(
        "x".to_string(),
        SymbolKind::Variable,
        AssignPurpose::Normal,
        NodeID::new(2, 0),
        span,
        scope,
    );

    assert!(table.define_symbol("x".to_string(), symbol1).is_ok());
    assert!(table.define_symbol("x".to_string(), symbol2).is_err());
}

#[test]
fn test_symbol_lookup() {
    let mut table = SymbolTable::new();
    let span = Span::new(0, 10);
    let scope = table.current_scope().unwrap();

    let symbol = Symbol::new(
        "x".to_string(),
        SymbolKind::Variable,
        AssignPurpose::Normal,
        NodeID::new(1, 0),
        span,
        scope,
    );

    table.define_symbol("x".to_string(), symbol).unwrap();

    let found = table.lookup_symbol("x");
    assert!(found.is_some());
    assert_eq!(found.unwrap().name, "x");

    assert!(table.lookup_symbol("y").is_none());
}

#[test]
fn test_symbol_lookup_in_scope_chain() {
    let mut table = SymbolTable::new();
    let span = Span::new(0, 10);
    let module_scope = table.current_scope().unwrap();

    let mut module_symbol = Symbol::new(
        "global_var".to_string(),
        SymbolKind::Variable,
        AssignPurpose::Normal,
        NodeID::new(1, 0),
        span,
        module_scope,
    );
    module_symbol.set_global(true);
    table.define_symbol("global_var".to_string(), module_symbol).unwrap();

    let func_scope = table.create_scope(ScopeKind::Function, Some(module_scope));
    table.enter_scope(func_scope);

    let local_symbol = Symbol::new(
        "local_var".to_string(),
        SymbolKind::Variable,
        AssignPurpose::Normal,
        NodeID::new(2, 0),
        span,
        func_scope,
    );
    table.define_symbol("local_var".to_string(), local_symbol).unwrap();

    assert!(table.lookup_in_scope_chain("local_var").is_some());
    assert!(table.lookup_in_scope_chain("global_var").is_some());

    let _ = table.exit_scope();

    assert!(table.lookup_in_scope_chain("local_var").is_none());
    assert!(table.lookup_in_scope_chain("global_var").is_some());
}

#[test]
fn test_symbol_flags() {
    let span = Span::new(0, 10);
    let mut symbol = Symbol::new(
        "x".to_string(),
        SymbolKind::Variable,
        AssignPurpose::Normal,
        NodeID::new(1, 0),
        span,
        vela_analyzer::symbol::ScopeID::new(0),
    );

    assert!(!symbol.is_mutable());
    assert!(!symbol.is_global());
    assert!(!symbol.is_used());
    assert!(!symbol.is_ante());

    symbol.set_mutable(true);
    assert!(symbol.is_mutable());

    symbol.mark_used();
    assert!(symbol.is_used());

    symbol.mark_defined();
    assert!(symbol.is_defined());

    symbol.set_ante(true);
    assert!(symbol.is_ante());
}

#[test]
fn test_symbol_history_tracks_rebinds() {
    let span = Span::new(0, 10);
    let mut symbol = Symbol::new(
        "x".to_string(),
        SymbolKind::Variable,
        AssignPurpose::Normal,
        NodeID::new(1, 0),
        span,
        vela_analyzer::symbol::ScopeID::new(0),
    );
    assert_eq!(symbol.last_purpose(), AssignPurpose::Normal);

    symbol.rebind(AssignPurpose::Normal, NodeID::new(2, 0));
    assert_eq!(symbol.history.len(), 2);
    assert_eq!(symbol.last_purpose(), AssignPurpose::Normal);
}

#[test]
fn test_node_scope_association() {
    let mut table = SymbolTable::new();
    let module_scope = table.current_scope().unwrap();
    let node_id = NodeID::new(42, 0);

    table.associate_node_with_scope(node_id, module_scope);
    assert_eq!(table.get_node_scope(node_id), Some(module_scope));
}

#[test]
fn test_semantic_context_integration() {
    let mut context = SemanticContext::new();
    let span = Span::new(0, 10);

    let scope = context.symbol_table().current_scope().unwrap();

    let symbol = Symbol::new(
        "test".to_string(),
        SymbolKind::Variable,
        AssignPurpose::Normal,
        NodeID::new(1, 0),
        span,
        scope,
    );

    context.symbol_table_mut().define_symbol("test".to_string(), symbol).unwrap();

    let found = context.symbol_table().lookup_symbol("test");
    assert!(found.is_some());
}
