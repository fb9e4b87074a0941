//! Tests for declaration parsing: `fun`, `data`, `trait`, `ext`.

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
fn test_nullary_function() {
    let mut parser = create_parser("fun f = 1\n");
    let decl_id = parser.parse_declaration().expect("failed to parse nullary function");
    let node = parser.ast().get_node(decl_id).expect("node not found");

    assert_eq!(node.kind, NodeKind::Declaration);
    match &node.data {
        AnyNode::FuncDecl(f) => {
            assert_eq!(f.name, "f");
            assert!(f.params.is_empty());
            assert!(f.return_type.is_none());
        }
        other => panic!("expected FuncDecl, got {other:?}"),
    }
}

#[test]
fn test_function_with_one_param() {
    let mut parser = create_parser("fun f: i32 x = x\n");
    let decl_id = parser.parse_declaration().expect("failed to parse function with one param");
    let node = parser.ast().get_node(decl_id).expect("node not found");

    match &node.data {
        AnyNode::FuncDecl(f) => assert_eq!(f.params.len(), 1),
        other => panic!("expected FuncDecl, got {other:?}"),
    }
}

#[test]
fn test_function_with_return_type() {
    let mut parser = create_parser("fun f: i32 x -> i32 = x\n");
    let decl_id = parser.parse_declaration().expect("failed to parse function with return type");
    let node = parser.ast().get_node(decl_id).expect("node not found");

    match &node.data {
        AnyNode::FuncDecl(f) => assert!(f.return_type.is_some()),
        other => panic!("expected FuncDecl, got {other:?}"),
    }
}

#[test]
fn test_function_with_block_body() {
    let source = "fun f:\n    x = 1\n    return x\n";
    let mut parser = create_parser(source);
    let decl_id = parser.parse_declaration().expect("failed to parse function with block body");
    let node = parser.ast().get_node(decl_id).expect("node not found");

    match &node.data {
        AnyNode::FuncDecl(f) => {
            let body = parser.ast().get_node(f.body).expect("body not found");
            assert!(matches!(body.data, AnyNode::Block(_)));
        }
        other => panic!("expected FuncDecl, got {other:?}"),
    }
}

#[test]
fn test_recursive_function_calling_another() {
    let source = "fun f: i32 x = g x\n";
    let mut parser = create_parser(source);
    let decl_id =
        parser.parse_declaration().expect("failed to parse function body calling another");
    let node = parser.ast().get_node(decl_id).expect("node not found");

    assert!(matches!(node.data, AnyNode::FuncDecl(_)));
}

#[test]
fn test_data_decl_nullary_variant() {
    let mut parser = create_parser("data Bool = True | False\n");
    let decl_id = parser.parse_declaration().expect("failed to parse data decl");
    let node = parser.ast().get_node(decl_id).expect("node not found");

    assert_eq!(node.kind, NodeKind::Declaration);
    match &node.data {
        AnyNode::DataDecl(d) => {
            assert_eq!(d.name, "Bool");
            assert_eq!(d.variants.len(), 2);
            assert_eq!(d.variants[0].name, "True");
            assert!(d.variants[0].fields.is_empty());
        }
        other => panic!("expected DataDecl, got {other:?}"),
    }
}

#[test]
fn test_data_decl_with_fields_and_type_param() {
    let mut parser = create_parser("data List a = Nil | Cons(a, List)\n");
    let decl_id = parser.parse_declaration().expect("failed to parse generic data decl");
    let node = parser.ast().get_node(decl_id).expect("node not found");

    match &node.data {
        AnyNode::DataDecl(d) => {
            assert_eq!(d.type_params, vec!["a".to_string()]);
            assert_eq!(d.variants.len(), 2);
            assert_eq!(d.variants[1].name, "Cons");
            assert_eq!(d.variants[1].fields.len(), 2);
        }
        other => panic!("expected DataDecl, got {other:?}"),
    }
}

#[test]
fn test_trait_decl_with_signature() {
    let source = "trait Show:\n    fun show: i32 x -> i32\n";
    let mut parser = create_parser(source);
    let decl_id = parser.parse_declaration().expect("failed to parse trait decl");
    let node = parser.ast().get_node(decl_id).expect("node not found");

    assert_eq!(node.kind, NodeKind::Declaration);
    match &node.data {
        AnyNode::Trait(t) => {
            assert_eq!(t.name, "Show");
            assert_eq!(t.functions.len(), 1);
        }
        other => panic!("expected Trait, got {other:?}"),
    }
}

#[test]
fn test_ext_decl_with_function() {
    let source = "ext i32:\n    fun double: i32 x = x + x\n";
    let mut parser = create_parser(source);
    let decl_id = parser.parse_declaration().expect("failed to parse ext decl");
    let node = parser.ast().get_node(decl_id).expect("node not found");

    assert_eq!(node.kind, NodeKind::Declaration);
    match &node.data {
        AnyNode::Ext(e) => {
            assert!(e.trait_name.is_none());
            assert_eq!(e.functions.len(), 1);
        }
        other => panic!("expected Ext, got {other:?}"),
    }
}

#[test]
fn test_ext_decl_with_trait_name() {
    let source = "ext i32 as Show:\n    fun show: i32 x -> i32 = x\n";
    let mut parser = create_parser(source);
    let decl_id = parser.parse_declaration().expect("failed to parse ext-as-trait decl");
    let node = parser.ast().get_node(decl_id).expect("node not found");

    match &node.data {
        AnyNode::Ext(e) => assert_eq!(e.trait_name.as_deref(), Some("Show")),
        other => panic!("expected Ext, got {other:?}"),
    }
}
