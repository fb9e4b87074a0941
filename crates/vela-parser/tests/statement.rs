//! Tests for statement parsing.

use std::sync::Arc;

use vela_ast::nodes::{AnyNode, JumpKind, ModifierToken, NodeKind};
use vela_parser::parser::Parser;
use vela_source::types::SourceManager;

fn create_parser(source: &'_ str) -> Parser<'_> {
    let mut source_manager = SourceManager::new();
    let file_id = source_manager.add_file("test.vl".to_string(), source.to_string());

    Parser::new(source, file_id, Arc::new(source_manager))
}

#[test]
fn test_simple_assignment() {
    let mut parser = create_parser("x = 42\n");
    let stmt_id = parser.parse_statement().expect("failed to parse simple assignment");
    let node = parser.ast().get_node(stmt_id).expect("node not found");

    assert_eq!(node.kind, NodeKind::Statement);
    match &node.data {
        AnyNode::VarAssign(v) => {
            assert_eq!(v.name, "x");
            assert!(v.modifiers.is_empty());
        }
        other => panic!("expected VarAssign, got {other:?}"),
    }
}

#[test]
fn test_mut_assignment() {
    let mut parser = create_parser("mut x = 42\n");
    let stmt_id = parser.parse_statement().expect("failed to parse mut assignment");
    let node = parser.ast().get_node(stmt_id).expect("node not found");

    match &node.data {
        AnyNode::VarAssign(v) => assert_eq!(v.modifiers, vec![ModifierToken::Mut]),
        other => panic!("expected VarAssign, got {other:?}"),
    }
}

#[test]
fn test_ante_global_statement() {
    let mut parser = create_parser("ante x\n");
    let stmt_id = parser.parse_statement().expect("failed to parse ante statement");
    let node = parser.ast().get_node(stmt_id).expect("node not found");

    assert!(matches!(&node.data, AnyNode::Global(g) if g.name == "x"));
}

#[test]
fn test_ante_assignment_is_not_global() {
    let mut parser = create_parser("ante x = 1\n");
    let stmt_id = parser.parse_statement().expect("failed to parse ante assignment");
    let node = parser.ast().get_node(stmt_id).expect("node not found");

    match &node.data {
        AnyNode::VarAssign(v) => assert_eq!(v.modifiers, vec![ModifierToken::Ante]),
        other => panic!("expected VarAssign, got {other:?}"),
    }
}

#[test]
fn test_if_statement() {
    let source = "if x > 0:\n    y = 1\n";
    let mut parser = create_parser(source);
    let stmt_id = parser.parse_statement().expect("failed to parse if statement");
    let node = parser.ast().get_node(stmt_id).expect("node not found");

    assert_eq!(node.kind, NodeKind::Statement);
    assert!(matches!(&node.data, AnyNode::If(i) if i.else_branch.is_none()));
}

#[test]
fn test_if_else_statement() {
    let source = "if x > 0:\n    y = 1\nelse:\n    y = 2\n";
    let mut parser = create_parser(source);
    let stmt_id = parser.parse_statement().expect("failed to parse if-else statement");
    let node = parser.ast().get_node(stmt_id).expect("node not found");

    assert!(matches!(&node.data, AnyNode::If(i) if i.else_branch.is_some()));
}

#[test]
fn test_if_elif_else_statement() {
    let source = "if x > 0:\n    y = 1\nelif x < 0:\n    y = 2\nelse:\n    y = 3\n";
    let mut parser = create_parser(source);
    let stmt_id = parser.parse_statement().expect("failed to parse if-elif-else statement");
    let node = parser.ast().get_node(stmt_id).expect("node not found");

    match &node.data {
        AnyNode::If(outer) => {
            let else_id = outer.else_branch.expect("expected elif chain");
            let elif_node = parser.ast().get_node(else_id).expect("elif node not found");
            assert!(matches!(&elif_node.data, AnyNode::If(inner) if inner.else_branch.is_some()));
        }
        other => panic!("expected If, got {other:?}"),
    }
}

#[test]
fn test_while_statement() {
    let source = "while x > 0:\n    x = x - 1\n";
    let mut parser = create_parser(source);
    let stmt_id = parser.parse_statement().expect("failed to parse while statement");
    let node = parser.ast().get_node(stmt_id).expect("node not found");

    assert!(matches!(node.data, AnyNode::While(_)));
}

#[test]
fn test_for_statement() {
    let source = "for item in items:\n    process(item)\n";
    let mut parser = create_parser(source);
    let stmt_id = parser.parse_statement().expect("failed to parse for statement");
    let node = parser.ast().get_node(stmt_id).expect("node not found");

    assert!(matches!(&node.data, AnyNode::For(f) if f.var_name == "item"));
}

#[test]
fn test_return_no_value() {
    let mut parser = create_parser("return\n");
    let stmt_id = parser.parse_statement().expect("failed to parse return with no value");
    let node = parser.ast().get_node(stmt_id).expect("node not found");

    assert!(matches!(&node.data, AnyNode::Ret(r) if r.value.is_none()));
}

#[test]
fn test_return_with_value() {
    let mut parser = create_parser("return 42\n");
    let stmt_id = parser.parse_statement().expect("failed to parse return with value");
    let node = parser.ast().get_node(stmt_id).expect("node not found");

    assert!(matches!(&node.data, AnyNode::Ret(r) if r.value.is_some()));
}

#[test]
fn test_continue_statement() {
    let mut parser = create_parser("continue\n");
    let stmt_id = parser.parse_statement().expect("failed to parse continue statement");
    let node = parser.ast().get_node(stmt_id).expect("node not found");

    assert!(matches!(&node.data, AnyNode::Jump(j) if j.kind == JumpKind::Continue));
}

#[test]
fn test_break_statement() {
    let mut parser = create_parser("break\n");
    let stmt_id = parser.parse_statement().expect("failed to parse break statement");
    let node = parser.ast().get_node(stmt_id).expect("node not found");

    assert!(matches!(&node.data, AnyNode::Jump(j) if j.kind == JumpKind::Break));
}

#[test]
fn test_import_statement() {
    let mut parser = create_parser("import std\n");
    let stmt_id = parser.parse_statement().expect("failed to parse import statement");
    let node = parser.ast().get_node(stmt_id).expect("node not found");

    assert!(matches!(&node.data, AnyNode::Import(i) if i.module_parts == vec!["std".to_string()] && i.alias.is_none()));
}

#[test]
fn test_import_with_path_and_alias() {
    let mut parser = create_parser("import std/collections as coll\n");
    let stmt_id = parser.parse_statement().expect("failed to parse import with path and alias");
    let node = parser.ast().get_node(stmt_id).expect("node not found");

    match &node.data {
        AnyNode::Import(i) => {
            assert_eq!(i.module_parts, vec!["std".to_string(), "collections".to_string()]);
            assert_eq!(i.alias, Some("coll".to_string()));
        }
        other => panic!("expected Import, got {other:?}"),
    }
}

#[test]
fn test_expression_statement() {
    let mut parser = create_parser("func(x)\n");
    let stmt_id = parser.parse_statement().expect("failed to parse expression statement");
    let node = parser.ast().get_node(stmt_id).expect("node not found");

    assert_eq!(node.kind, NodeKind::Expression);
    assert!(matches!(node.data, AnyNode::NamedVal(_)));
}

#[test]
fn test_match_reachable_as_statement() {
    let source = "match x:\n    0 -> 1\n    _ -> 2\n";
    let mut parser = create_parser(source);
    let stmt_id = parser.parse_statement().expect("failed to parse match as a statement");
    let node = parser.ast().get_node(stmt_id).expect("node not found");

    assert!(matches!(&node.data, AnyNode::Match(m) if m.branches.len() == 2));
}
