//! Tests for match-pattern parsing.

use std::sync::Arc;

use vela_ast::nodes::{AnyNode, NodeKind};
use vela_parser::parser::Parser;
use vela_source::types::SourceManager;

fn create_parser(source: &'_ str) -> Parser<'_> {
    let mut source_manager = SourceManager::new();
    let file_id = source_manager.add_file("test.vl".to_string(), source.to_string());

    Parser::new(source, file_id, Arc::new(source_manager))
}

#[test]
fn test_wildcard_pattern() {
    let mut parser = create_parser("_\n");
    let pat_id = parser.parse_pattern().expect("failed to parse wildcard");
    let node = parser.ast().get_node(pat_id).expect("node not found");

    assert_eq!(node.kind, NodeKind::Pattern);
    assert!(matches!(&node.data, AnyNode::Var(v) if v.name == "_"));
}

#[test]
fn test_binder_pattern() {
    let mut parser = create_parser("value\n");
    let pat_id = parser.parse_pattern().expect("failed to parse binder");
    let node = parser.ast().get_node(pat_id).expect("node not found");

    assert!(matches!(&node.data, AnyNode::Var(v) if v.name == "value"));
}

#[test]
fn test_int_literal_pattern() {
    let mut parser = create_parser("42\n");
    let pat_id = parser.parse_pattern().expect("failed to parse int literal pattern");
    let node = parser.ast().get_node(pat_id).expect("node not found");

    assert_eq!(node.kind, NodeKind::Pattern);
    assert!(matches!(&node.data, AnyNode::IntLit(lit) if lit.lexeme == "42"));
}

#[test]
fn test_string_literal_pattern() {
    let mut parser = create_parser("\"hello\"\n");
    let pat_id = parser.parse_pattern().expect("failed to parse string literal pattern");
    let node = parser.ast().get_node(pat_id).expect("node not found");

    assert!(matches!(&node.data, AnyNode::StrLit(lit) if lit.value == "hello"));
}

#[test]
fn test_bool_literal_pattern() {
    let mut parser = create_parser("true\n");
    let pat_id = parser.parse_pattern().expect("failed to parse bool literal pattern");
    let node = parser.ast().get_node(pat_id).expect("node not found");

    assert!(matches!(&node.data, AnyNode::BoolLit(lit) if lit.value));
}

#[test]
fn test_tuple_pattern() {
    let mut parser = create_parser("(a, b)\n");
    let pat_id = parser.parse_pattern().expect("failed to parse tuple pattern");
    let node = parser.ast().get_node(pat_id).expect("node not found");

    assert!(matches!(&node.data, AnyNode::Tuple(t) if t.elements.len() == 2));
}

#[test]
fn test_empty_tuple_pattern() {
    let mut parser = create_parser("()\n");
    let pat_id = parser.parse_pattern().expect("failed to parse empty tuple pattern");
    let node = parser.ast().get_node(pat_id).expect("node not found");

    assert!(matches!(&node.data, AnyNode::Tuple(t) if t.elements.is_empty()));
}

#[test]
fn test_constructor_pattern() {
    let mut parser = create_parser("Cons(head, tail)\n");
    let pat_id = parser.parse_pattern().expect("failed to parse constructor pattern");
    let node = parser.ast().get_node(pat_id).expect("node not found");

    match &node.data {
        AnyNode::NamedVal(n) => {
            assert_eq!(n.name, "Cons");
            let payload = parser.ast().get_node(n.value).expect("payload not found");
            assert!(matches!(&payload.data, AnyNode::Tuple(t) if t.elements.len() == 2));
        }
        other => panic!("expected NamedVal, got {other:?}"),
    }
}

#[test]
fn test_nullary_constructor_pattern() {
    let mut parser = create_parser("Nil\n");
    let pat_id = parser.parse_pattern().expect("failed to parse nullary constructor pattern");
    let node = parser.ast().get_node(pat_id).expect("node not found");

    assert!(matches!(&node.data, AnyNode::Var(v) if v.name == "Nil"));
}

#[test]
fn test_nested_tuple_pattern() {
    let mut parser = create_parser("((a, b), c)\n");
    let pat_id = parser.parse_pattern().expect("failed to parse nested tuple pattern");
    let node = parser.ast().get_node(pat_id).expect("node not found");

    match &node.data {
        AnyNode::Tuple(outer) => {
            assert_eq!(outer.elements.len(), 2);
            let inner = parser.ast().get_node(outer.elements[0]).expect("inner tuple not found");
            assert!(matches!(&inner.data, AnyNode::Tuple(t) if t.elements.len() == 2));
        }
        other => panic!("expected Tuple, got {other:?}"),
    }
}

#[test]
fn test_match_with_guard() {
    let source = "match x:\n    n if n > 0 -> 1\n    _ -> 2\n";
    let mut parser = create_parser(source);
    let expr_id = parser.parse_expression().expect("failed to parse match with guard");
    let node = parser.ast().get_node(expr_id).expect("node not found");

    match &node.data {
        AnyNode::Match(m) => {
            assert_eq!(m.branches.len(), 2);
            let branch = parser.ast().get_node(m.branches[0]).expect("branch not found");
            match &branch.data {
                AnyNode::MatchBranch(b) => assert!(b.guard.is_some()),
                other => panic!("expected MatchBranch, got {other:?}"),
            }
        }
        other => panic!("expected Match, got {other:?}"),
    }
}

#[test]
fn test_match_branch_without_guard() {
    let source = "match x:\n    0 -> 1\n    _ -> 2\n";
    let mut parser = create_parser(source);
    let expr_id = parser.parse_expression().expect("failed to parse match without guard");
    let node = parser.ast().get_node(expr_id).expect("node not found");

    match &node.data {
        AnyNode::Match(m) => {
            let branch = parser.ast().get_node(m.branches[0]).expect("branch not found");
            match &branch.data {
                AnyNode::MatchBranch(b) => assert!(b.guard.is_none()),
                other => panic!("expected MatchBranch, got {other:?}"),
            }
        }
        other => panic!("expected Match, got {other:?}"),
    }
}

#[test]
fn test_match_branch_with_block_body() {
    let source = "match x:\n    0 ->\n        y = 1\n        y\n    _ -> 2\n";
    let mut parser = create_parser(source);
    let expr_id = parser.parse_expression().expect("failed to parse match branch with block body");
    let node = parser.ast().get_node(expr_id).expect("node not found");

    match &node.data {
        AnyNode::Match(m) => {
            let branch = parser.ast().get_node(m.branches[0]).expect("branch not found");
            match &branch.data {
                AnyNode::MatchBranch(b) => {
                    let body = parser.ast().get_node(b.body).expect("body not found");
                    assert!(matches!(body.data, AnyNode::Block(_)));
                }
                other => panic!("expected MatchBranch, got {other:?}"),
            }
        }
        other => panic!("expected Match, got {other:?}"),
    }
}
