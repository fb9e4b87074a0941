//! Tests for the Visitable trait implementation

use vela_ast::ast::AST;
use vela_ast::nodes::{
    AnyNode,
    BinOp,
    BinOpKind,
    BoolLit,
    For,
    FuncDecl,
    IntLit,
    Import,
    Jump,
    JumpKind,
    NodeID,
    NodeKind,
    NumericTypeTag,
    Root,
    Tuple,
    UnOp,
    UnOpKind,
};
use vela_ast::visitor::{Visitable, Visitor, VisitorResult};
use vela_source::types::Span;

// Create a test visitor to track visited node types
struct TestVisitor {
    visited_nodes: Vec<&'static str>,
}

impl TestVisitor {
    const fn new() -> Self { Self { visited_nodes: Vec::new() } }
}

impl Visitor<()> for TestVisitor {
    fn visit(&mut self, _node_id: NodeID) -> Option<()> {
        self.visited_nodes.push("visit");
        None
    }

    fn visit_bin_op(&mut self, _node_id: NodeID) -> VisitorResult<()> {
        self.visited_nodes.push("visit_bin_op");
        Ok(())
    }

    fn visit_un_op(&mut self, _node_id: NodeID) -> VisitorResult<()> {
        self.visited_nodes.push("visit_un_op");
        Ok(())
    }

    fn visit_int_lit(&mut self, _node_id: NodeID) -> VisitorResult<()> {
        self.visited_nodes.push("visit_int_lit");
        Ok(())
    }

    fn visit_bool_lit(&mut self, _node_id: NodeID) -> VisitorResult<()> {
        self.visited_nodes.push("visit_bool_lit");
        Ok(())
    }

    fn visit_root(&mut self, _node_id: NodeID) -> VisitorResult<()> {
        self.visited_nodes.push("visit_root");
        Ok(())
    }

    fn visit_tuple(&mut self, _node_id: NodeID) -> VisitorResult<()> {
        self.visited_nodes.push("visit_tuple");
        Ok(())
    }

    fn visit_import(&mut self, _node_id: NodeID) -> VisitorResult<()> {
        self.visited_nodes.push("visit_import");
        Ok(())
    }

    fn visit_jump(&mut self, _node_id: NodeID) -> VisitorResult<()> {
        self.visited_nodes.push("visit_jump");
        Ok(())
    }

    fn visit_for(&mut self, _node_id: NodeID) -> VisitorResult<()> {
        self.visited_nodes.push("visit_for");
        Ok(())
    }

    fn visit_func_decl(&mut self, _node_id: NodeID) -> VisitorResult<()> {
        self.visited_nodes.push("visit_func_decl");
        Ok(())
    }

    fn visit_list(&mut self, _node_ids: &[NodeID]) -> VisitorResult<Vec<()>> {
        self.visited_nodes.push("visit_list");
        Ok(vec![])
    }
}

#[test]
fn test_any_node_visitable_bin_op() {
    let mut ast = AST::new();
    let span = Span::new(0, 5);

    let bin_op = BinOp::new(BinOpKind::Add, NodeID::new(0, 0), NodeID::new(0, 0), NodeID::new(0, 0), span);
    let bin_op_node = AnyNode::BinOp(bin_op);
    let bin_op_id = ast.alloc_node(NodeKind::Expression, bin_op_node, span);

    let mut visitor = TestVisitor::new();

    if let Some(node) = ast.get_node(bin_op_id) {
        drop(node.data.accept(&mut visitor, bin_op_id));
    }

    assert_eq!(visitor.visited_nodes, vec!["visit_bin_op"]);
}

#[test]
fn test_any_node_visitable_un_op() {
    let mut ast = AST::new();
    let span = Span::new(0, 5);

    let un_op = UnOp::new(UnOpKind::Neg, NodeID::new(0, 0), NodeID::new(0, 0), span);
    let un_op_node = AnyNode::UnOp(un_op);
    let un_op_id = ast.alloc_node(NodeKind::Expression, un_op_node, span);

    let mut visitor = TestVisitor::new();

    if let Some(node) = ast.get_node(un_op_id) {
        drop(node.data.accept(&mut visitor, un_op_id));
    }

    assert_eq!(visitor.visited_nodes, vec!["visit_un_op"]);
}

#[test]
fn test_any_node_visitable_int_lit() {
    let mut ast = AST::new();
    let span = Span::new(0, 5);

    let lit = IntLit::new("42".to_string(), NumericTypeTag::I32, NodeID::new(0, 0), span);
    let lit_id = ast.alloc_node(NodeKind::Expression, AnyNode::IntLit(lit), span);

    let mut visitor = TestVisitor::new();

    if let Some(node) = ast.get_node(lit_id) {
        drop(node.data.accept(&mut visitor, lit_id));
    }

    assert_eq!(visitor.visited_nodes, vec!["visit_int_lit"]);
}

#[test]
fn test_any_node_visitable_root() {
    let mut ast = AST::new();
    let span = Span::new(0, 5);

    let root = Root::new("test".to_string(), vec![], vec![], vec![], NodeID::placeholder(), span);
    let root_node = AnyNode::Root(root);
    let root_id = ast.alloc_node(NodeKind::Module, root_node, span);

    let mut visitor = TestVisitor::new();

    if let Some(node) = ast.get_node(root_id) {
        drop(node.data.accept(&mut visitor, root_id));
    }

    assert_eq!(visitor.visited_nodes, vec!["visit_root"]);
}

#[test]
fn test_multiple_node_types_visitable() {
    let mut ast = AST::new();
    let span = Span::new(0, 5);

    let lit = BoolLit::new(true, NodeID::new(0, 0), span);
    let lit_id = ast.alloc_node(NodeKind::Expression, AnyNode::BoolLit(lit), span);

    let root = Root::new("test".to_string(), vec![], vec![], vec![lit_id], NodeID::placeholder(), span);
    let root_id = ast.alloc_node(NodeKind::Module, AnyNode::Root(root), span);

    let bin_op = BinOp::new(BinOpKind::Add, lit_id, lit_id, NodeID::new(2, 0), span);
    let bin_op_id = ast.alloc_node(NodeKind::Expression, AnyNode::BinOp(bin_op), span);

    let mut visitor = TestVisitor::new();

    if let Some(node) = ast.get_node(lit_id) {
        drop(node.data.accept(&mut visitor, lit_id));
    }
    if let Some(node) = ast.get_node(root_id) {
        drop(node.data.accept(&mut visitor, root_id));
    }
    if let Some(node) = ast.get_node(bin_op_id) {
        drop(node.data.accept(&mut visitor, bin_op_id));
    }

    assert_eq!(visitor.visited_nodes, vec!["visit_bool_lit", "visit_root", "visit_bin_op"]);
}

// Test direct concrete type visitation
#[test]
fn test_concrete_type_visitable() {
    let span = Span::new(0, 5);

    let bin_op = BinOp::new(BinOpKind::Add, NodeID::new(0, 0), NodeID::new(0, 0), NodeID::new(0, 0), span);

    let mut visitor = TestVisitor::new();

    let node_id = NodeID::new(1, 1); // Dummy NodeID for testing
    drop(bin_op.accept(&mut visitor, node_id));

    assert_eq!(visitor.visited_nodes, vec!["visit_bin_op"]);
}

// Test for control-flow node types
#[test]
fn test_control_flow_types_visitable() {
    let span = Span::new(0, 5);
    let mut visitor = TestVisitor::new();
    let dummy_id = NodeID::placeholder();

    let jump = Jump::new(JumpKind::Break, dummy_id, span);
    drop(jump.accept(&mut visitor, dummy_id));

    let for_loop = For::new("x".to_string(), dummy_id, dummy_id, dummy_id, span);
    drop(for_loop.accept(&mut visitor, dummy_id));

    assert_eq!(visitor.visited_nodes, vec!["visit_jump", "visit_for"]);
}

// Test for collection node types
#[test]
fn test_collection_types_visitable() {
    let span = Span::new(0, 5);
    let mut visitor = TestVisitor::new();
    let dummy_id = NodeID::new(1, 1);

    let tuple = Tuple::new(vec![dummy_id], dummy_id, span);
    drop(tuple.accept(&mut visitor, dummy_id));

    assert_eq!(visitor.visited_nodes, vec!["visit_tuple"]);
}

// Test for module-level constructs
#[test]
fn test_module_constructs_visitable() {
    let span = Span::new(0, 5);
    let mut visitor = TestVisitor::new();
    let dummy_id = NodeID::new(1, 1);

    let import = Import::new(vec!["module".to_string()], None, dummy_id, span);
    drop(import.accept(&mut visitor, dummy_id));

    assert_eq!(visitor.visited_nodes, vec!["visit_import"]);
}

// Test for declaration node types
#[test]
fn test_declaration_types_visitable() {
    let span = Span::new(0, 5);
    let mut visitor = TestVisitor::new();
    let dummy_id = NodeID::new(1, 1);

    let func = FuncDecl::new("add".to_string(), vec![], None, dummy_id, dummy_id, span);
    drop(func.accept(&mut visitor, dummy_id));

    assert_eq!(visitor.visited_nodes, vec!["visit_func_decl"]);
}
