//! Tests for top-level file parsing (`Root`).

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
fn test_empty_program() {
    let mut parser = create_parser("");
    let root_id = parser.parse_program().expect("failed to parse empty program");
    let node = parser.ast().get_node(root_id).expect("node not found");

    assert_eq!(node.kind, NodeKind::Module);
    match &node.data {
        AnyNode::Root(r) => {
            assert!(r.extensions.is_empty());
            assert!(r.funcs.is_empty());
            assert!(r.main.is_empty());
        }
        other => panic!("expected Root, got {other:?}"),
    }
}

#[test]
fn test_program_with_only_blank_lines() {
    let mut parser = create_parser("\n\n\n");
    let root_id = parser.parse_program().expect("failed to parse blank-only program");
    let node = parser.ast().get_node(root_id).expect("node not found");

    match &node.data {
        AnyNode::Root(r) => assert!(r.main.is_empty()),
        other => panic!("expected Root, got {other:?}"),
    }
}

#[test]
fn test_program_routes_import_into_main() {
    let mut parser = create_parser("import std\n");
    let root_id = parser.parse_program().expect("failed to parse program with import");
    let node = parser.ast().get_node(root_id).expect("node not found");

    match &node.data {
        AnyNode::Root(r) => {
            assert_eq!(r.main.len(), 1);
            let stmt = parser.ast().get_node(r.main[0]).expect("import node not found");
            assert!(matches!(stmt.data, AnyNode::Import(_)));
        }
        other => panic!("expected Root, got {other:?}"),
    }
}

#[test]
fn test_program_routes_fun_into_funcs() {
    let mut parser = create_parser("fun f = 1\n");
    let root_id = parser.parse_program().expect("failed to parse program with function");
    let node = parser.ast().get_node(root_id).expect("node not found");

    match &node.data {
        AnyNode::Root(r) => {
            assert_eq!(r.funcs.len(), 1);
            assert!(r.main.is_empty());
        }
        other => panic!("expected Root, got {other:?}"),
    }
}

#[test]
fn test_program_routes_data_into_funcs() {
    let mut parser = create_parser("data Bool = True | False\n");
    let root_id = parser.parse_program().expect("failed to parse program with data decl");
    let node = parser.ast().get_node(root_id).expect("node not found");

    match &node.data {
        AnyNode::Root(r) => assert_eq!(r.funcs.len(), 1),
        other => panic!("expected Root, got {other:?}"),
    }
}

#[test]
fn test_program_routes_ext_into_extensions() {
    let source = "ext i32:\n    fun double: i32 x = x + x\n";
    let mut parser = create_parser(source);
    let root_id = parser.parse_program().expect("failed to parse program with ext block");
    let node = parser.ast().get_node(root_id).expect("node not found");

    match &node.data {
        AnyNode::Root(r) => {
            assert_eq!(r.extensions.len(), 1);
            assert!(r.funcs.is_empty());
        }
        other => panic!("expected Root, got {other:?}"),
    }
}

#[test]
fn test_program_with_mixed_top_level_items() {
    let source = "import std\nfun f = 1\nx = 2\n";
    let mut parser = create_parser(source);
    let root_id = parser.parse_program().expect("failed to parse mixed program");
    let node = parser.ast().get_node(root_id).expect("node not found");

    match &node.data {
        AnyNode::Root(r) => {
            assert_eq!(r.funcs.len(), 1);
            assert_eq!(r.main.len(), 2);
        }
        other => panic!("expected Root, got {other:?}"),
    }
}

#[test]
fn test_module_name_defaults_when_no_path() {
    let mut parser = create_parser("fun f = 1\n");
    let root_id = parser.parse_program().expect("failed to parse program");
    let node = parser.ast().get_node(root_id).expect("node not found");

    match &node.data {
        AnyNode::Root(r) => assert_eq!(r.name, "unnamed_module"),
        other => panic!("expected Root, got {other:?}"),
    }
}
