//! Tests for expression parsing.

use std::sync::Arc;

use vela_ast::nodes::{AnyNode, BinOpKind, NodeKind, NumericTypeTag, UnOpKind};
use vela_parser::parser::Parser;
use vela_source::types::SourceManager;

fn create_parser(source: &'_ str) -> Parser<'_> {
    let mut source_manager = SourceManager::new();
    let file_id = source_manager.add_file("test.vl".to_string(), source.to_string());

    Parser::new(source, file_id, Arc::new(source_manager))
}

#[test]
fn test_integer_literal() {
    let mut parser = create_parser("42\n");
    let expr_id = parser.parse_expression().expect("failed to parse integer");
    let node = parser.ast().get_node(expr_id).expect("node not found");

    assert_eq!(node.kind, NodeKind::Expression);
    assert!(matches!(&node.data, AnyNode::IntLit(lit) if lit.lexeme == "42"));
}

#[test]
fn test_integer_literal_with_suffix() {
    let mut parser = create_parser("7i8\n");
    let expr_id = parser.parse_expression().expect("failed to parse suffixed integer");
    let node = parser.ast().get_node(expr_id).expect("node not found");

    assert!(
        matches!(&node.data, AnyNode::IntLit(lit) if lit.lexeme == "7" && lit.type_tag == NumericTypeTag::I8)
    );
}

#[test]
fn test_float_literal() {
    let mut parser = create_parser("3.14\n");
    let expr_id = parser.parse_expression().expect("failed to parse float");
    let node = parser.ast().get_node(expr_id).expect("node not found");

    assert!(matches!(node.data, AnyNode::FltLit(_)));
}

#[test]
fn test_string_literal() {
    let mut parser = create_parser("\"hello world\"\n");
    let expr_id = parser.parse_expression().expect("failed to parse string");
    let node = parser.ast().get_node(expr_id).expect("node not found");

    assert!(matches!(&node.data, AnyNode::StrLit(lit) if lit.value == "hello world"));
}

#[test]
fn test_true_literal() {
    let mut parser = create_parser("true\n");
    let expr_id = parser.parse_expression().expect("failed to parse true");
    let node = parser.ast().get_node(expr_id).expect("node not found");

    assert!(matches!(&node.data, AnyNode::BoolLit(lit) if lit.value));
}

#[test]
fn test_false_literal() {
    let mut parser = create_parser("false\n");
    let expr_id = parser.parse_expression().expect("failed to parse false");
    let node = parser.ast().get_node(expr_id).expect("node not found");

    assert!(matches!(&node.data, AnyNode::BoolLit(lit) if !lit.value));
}

#[test]
fn test_addition() {
    let mut parser = create_parser("1 + 2\n");
    let expr_id = parser.parse_expression().expect("failed to parse addition");
    let node = parser.ast().get_node(expr_id).expect("node not found");

    assert!(matches!(&node.data, AnyNode::BinOp(op) if op.op == BinOpKind::Add));
}

#[test]
fn test_multiplication_binds_tighter_than_addition() {
    let mut parser = create_parser("1 + 2 * 3\n");
    let expr_id = parser.parse_expression().expect("failed to parse mixed precedence");
    let node = parser.ast().get_node(expr_id).expect("node not found");

    match &node.data {
        AnyNode::BinOp(op) => {
            assert_eq!(op.op, BinOpKind::Add);
            let rhs = parser.ast().get_node(op.rhs).expect("rhs not found");
            assert!(matches!(&rhs.data, AnyNode::BinOp(inner) if inner.op == BinOpKind::Mul));
        }
        other => panic!("expected BinOp, got {other:?}"),
    }
}

#[test]
fn test_equality() {
    let mut parser = create_parser("a == b\n");
    let expr_id = parser.parse_expression().expect("failed to parse equality");
    let node = parser.ast().get_node(expr_id).expect("node not found");

    assert!(matches!(&node.data, AnyNode::BinOp(op) if op.op == BinOpKind::Eq));
}

#[test]
fn test_logical_and_or() {
    let mut parser = create_parser("a and b or c\n");
    let expr_id = parser.parse_expression().expect("failed to parse logical expression");
    let node = parser.ast().get_node(expr_id).expect("node not found");

    assert!(matches!(&node.data, AnyNode::BinOp(op) if op.op == BinOpKind::Or));
}

#[test]
fn test_unary_minus() {
    let mut parser = create_parser("-42\n");
    let expr_id = parser.parse_expression().expect("failed to parse unary minus");
    let node = parser.ast().get_node(expr_id).expect("node not found");

    assert!(matches!(&node.data, AnyNode::UnOp(op) if op.op == UnOpKind::Neg));
}

#[test]
fn test_logical_not() {
    let mut parser = create_parser("not true\n");
    let expr_id = parser.parse_expression().expect("failed to parse logical not");
    let node = parser.ast().get_node(expr_id).expect("node not found");

    assert!(matches!(&node.data, AnyNode::UnOp(op) if op.op == UnOpKind::Not));
}

#[test]
fn test_address_of_and_deref() {
    let mut parser = create_parser("@&x\n");
    let expr_id = parser.parse_expression().expect("failed to parse deref of address-of");
    let node = parser.ast().get_node(expr_id).expect("node not found");

    match &node.data {
        AnyNode::UnOp(op) => {
            assert_eq!(op.op, UnOpKind::Deref);
            let inner = parser.ast().get_node(op.operand).expect("inner not found");
            assert!(matches!(&inner.data, AnyNode::UnOp(addr) if addr.op == UnOpKind::AddrOf));
        }
        other => panic!("expected UnOp, got {other:?}"),
    }
}

#[test]
fn test_array_literal() {
    let mut parser = create_parser("[1, 2, 3]\n");
    let expr_id = parser.parse_expression().expect("failed to parse array");
    let node = parser.ast().get_node(expr_id).expect("node not found");

    assert!(matches!(&node.data, AnyNode::Array(arr) if arr.elements.len() == 3));
}

#[test]
fn test_tuple_literal() {
    let mut parser = create_parser("(1, 2, 3)\n");
    let expr_id = parser.parse_expression().expect("failed to parse tuple");
    let node = parser.ast().get_node(expr_id).expect("node not found");

    assert!(matches!(&node.data, AnyNode::Tuple(t) if t.elements.len() == 3));
}

#[test]
fn test_parenthesized_expression_is_not_a_tuple() {
    let mut parser = create_parser("(1 + 2)\n");
    let expr_id = parser.parse_expression().expect("failed to parse parenthesized expression");
    let node = parser.ast().get_node(expr_id).expect("node not found");

    assert!(matches!(node.data, AnyNode::BinOp(_)));
}

#[test]
fn test_named_value_call() {
    let mut parser = create_parser("func(a, b)\n");
    let expr_id = parser.parse_expression().expect("failed to parse call");
    let node = parser.ast().get_node(expr_id).expect("node not found");

    match &node.data {
        AnyNode::NamedVal(n) => {
            assert_eq!(n.name, "func");
            let payload = parser.ast().get_node(n.value).expect("payload not found");
            assert!(matches!(&payload.data, AnyNode::Tuple(t) if t.elements.len() == 2));
        }
        other => panic!("expected NamedVal, got {other:?}"),
    }
}

#[test]
fn test_type_cast() {
    let mut parser = create_parser("x as i64\n");
    let expr_id = parser.parse_expression().expect("failed to parse cast");
    let node = parser.ast().get_node(expr_id).expect("node not found");

    assert!(matches!(node.data, AnyNode::TypeCast(_)));
}

#[test]
fn test_chained_casts() {
    let mut parser = create_parser("x as i64 as f32\n");
    let expr_id = parser.parse_expression().expect("failed to parse chained cast");
    let node = parser.ast().get_node(expr_id).expect("node not found");

    match &node.data {
        AnyNode::TypeCast(cast) => {
            let inner = parser.ast().get_node(cast.expr).expect("inner cast not found");
            assert!(matches!(inner.data, AnyNode::TypeCast(_)));
        }
        other => panic!("expected TypeCast, got {other:?}"),
    }
}

#[test]
fn test_match_as_expression() {
    let source = "match x:\n    0 -> 1\n    _ -> 2\n";
    let mut parser = create_parser(source);
    let expr_id = parser.parse_expression().expect("failed to parse match expression");
    let node = parser.ast().get_node(expr_id).expect("node not found");

    assert!(matches!(&node.data, AnyNode::Match(m) if m.branches.len() == 2));
}
