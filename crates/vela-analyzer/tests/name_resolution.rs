//! Tests for the two-pass name resolver: scope opening, shadowing vs.
//! mutation, loop and match-branch bindings, `global`/`ante`, and
//! undefined-name diagnostics.

use std::sync::Arc;

use vela_analyzer::analyze_module;
use vela_parser::parser::Parser;
use vela_source::types::SourceManager;

fn parse_source(source: &str) -> (Parser<'_>, vela_ast::nodes::NodeID) {
    let mut source_manager = SourceManager::new();
    let file_id = source_manager.add_file("test.vl".to_string(), source.to_string());
    let mut parser = Parser::new(source, file_id, Arc::new(source_manager));
    let module_id = parser.parse_program().expect("failed to parse program");

    (parser, module_id)
}

#[test]
fn test_simple_variable_reference() {
    let source = "mut x = 42\nmut y = x\n";
    let (mut parser, module_id) = parse_source(source);
    let result = analyze_module(parser.ast_mut(), module_id);

    assert!(result.is_ok(), "name resolution should succeed for a simple variable reference");
}

#[test]
fn test_undefined_variable() {
    let source = "mut y = x\n";
    let (mut parser, module_id) = parse_source(source);
    let result = analyze_module(parser.ast_mut(), module_id);

    let errors = result.expect_err("should error on undefined variable");
    assert_eq!(errors.len(), 1);
    assert!(format!("{:?}", errors[0]).contains("UndefinedName"));
}

#[test]
fn test_multiple_undefined_variables() {
    let source = "mut y = a + b\n";
    let (mut parser, module_id) = parse_source(source);
    let result = analyze_module(parser.ast_mut(), module_id);

    let errors = result.expect_err("should error on both undefined names");
    assert_eq!(errors.len(), 2);
}

#[test]
fn test_function_parameter_reference() {
    let source = "fun add: i32 a i32 b = a + b\n";
    let (mut parser, module_id) = parse_source(source);
    let result = analyze_module(parser.ast_mut(), module_id);

    assert!(result.is_ok(), "name resolution should succeed for parameter references");
}

#[test]
fn test_reference_to_top_level_function() {
    let source = "fun foo = 1\nmut bar = foo\n";
    let (mut parser, module_id) = parse_source(source);
    let result = analyze_module(parser.ast_mut(), module_id);

    assert!(result.is_ok(), "top-level functions should resolve as values");
}

#[test]
fn test_mutual_recursion_between_top_level_functions() {
    // `first`'s body references `second` before its declaration is reached;
    // the pre-pass must have already hoisted it.
    let source = "fun first: i32 n = second\nfun second: i32 n = first\n";
    let (mut parser, module_id) = parse_source(source);
    let result = analyze_module(parser.ast_mut(), module_id);

    assert!(result.is_ok(), "forward references between top-level functions should resolve");
}

#[test]
fn test_block_opens_a_new_scope() {
    let source = "fun f:\n    mut x = 1\n    return x\n";
    let (mut parser, module_id) = parse_source(source);
    let result = analyze_module(parser.ast_mut(), module_id);

    assert!(result.is_ok(), "a function body block should see its own locals");
}

#[test]
fn test_shadowing_rebinds_in_inner_scope() {
    let source = "mut x = 1\nfun f:\n    mut x = 2\n    return x\n";
    let (mut parser, module_id) = parse_source(source);
    let result = analyze_module(parser.ast_mut(), module_id);

    assert!(result.is_ok(), "a modifier-carrying assignment should shadow the outer binding");
}

#[test]
fn test_mutation_without_modifiers_targets_existing_binding() {
    let source = "mut x = 1\nx = 2\n";
    let (mut parser, module_id) = parse_source(source);
    let result = analyze_module(parser.ast_mut(), module_id);

    assert!(result.is_ok(), "reassignment without modifiers should resolve against the existing binding");
}

#[test]
fn test_mutation_of_undeclared_name_is_an_error() {
    let source = "x = 1\n";
    let (mut parser, module_id) = parse_source(source);
    let result = analyze_module(parser.ast_mut(), module_id);

    let errors = result.expect_err("mutating an undeclared name should fail");
    assert_eq!(errors.len(), 1);
}

#[test]
fn test_for_loop_variable_resolves_in_body() {
    let source = "for item in items:\n    mut seen = item\n";
    let (mut parser, module_id) = parse_source(source);
    let result = analyze_module(parser.ast_mut(), module_id);

    let errors = result.expect_err("items is undefined, item should still resolve in the body");
    assert_eq!(errors.len(), 1);
    assert!(format!("{:?}", errors[0]).contains("UndefinedName"));
}

#[test]
fn test_for_loop_variable_does_not_escape_its_scope() {
    let source = "mut items = 1\nfor item in items:\n    mut seen = item\nmut after = item\n";
    let (mut parser, module_id) = parse_source(source);
    let result = analyze_module(parser.ast_mut(), module_id);

    let errors = result.expect_err("item used after the loop should be undefined");
    assert_eq!(errors.len(), 1);
    assert!(format!("{:?}", errors[0]).contains("UndefinedName"));
}

#[test]
fn test_while_loop_body_resolves() {
    let source = "mut x = 1\nwhile x > 0:\n    x = x - 1\n";
    let (mut parser, module_id) = parse_source(source);
    let result = analyze_module(parser.ast_mut(), module_id);

    assert!(result.is_ok(), "a while loop's condition and body should resolve normally");
}

#[test]
fn test_match_branch_pattern_binds_in_body() {
    let source = "mut x = 1\nmatch x:\n    value -> value\n    _ -> 0\n";
    let (mut parser, module_id) = parse_source(source);
    let result = analyze_module(parser.ast_mut(), module_id);

    assert!(result.is_ok(), "a catch-all binder pattern should bind its name in the branch body");
}

#[test]
fn test_match_wildcard_does_not_bind() {
    let source = "mut x = 1\nmatch x:\n    _ -> _\n";
    let (mut parser, module_id) = parse_source(source);
    let result = analyze_module(parser.ast_mut(), module_id);

    let errors = result.expect_err("wildcard must never be a usable binding");
    assert_eq!(errors.len(), 1);
}

#[test]
fn test_match_constructor_pattern_binds_payload() {
    let source =
        "data Pair = Some(i32, i32) | None\nmut x = 1\nmatch x:\n    Some(a, b) -> a\n    None -> 0\n";
    let (mut parser, module_id) = parse_source(source);
    let result = analyze_module(parser.ast_mut(), module_id);

    assert!(result.is_ok(), "a constructor pattern should bind its payload names");
}

#[test]
fn test_global_targets_outer_binding_for_mutation() {
    let source = "mut x = 1\nfun bump:\n    ante x\n    x = x + 1\n";
    let (mut parser, module_id) = parse_source(source);
    let result = analyze_module(parser.ast_mut(), module_id);

    assert!(result.is_ok(), "an `ante x` alias inside the function should let the mutation target the outer binding");
}

#[test]
fn test_global_of_undefined_name_is_an_error() {
    let source = "fun f:\n    ante missing\n";
    let (mut parser, module_id) = parse_source(source);
    let result = analyze_module(parser.ast_mut(), module_id);

    let errors = result.expect_err("ante-ing an undeclared outer name should fail");
    assert_eq!(errors.len(), 1);
}

#[test]
fn test_ante_violation_on_non_ante_dependency() {
    let source = "mut x = 1\nante y = x\n";
    let (mut parser, module_id) = parse_source(source);
    let result = analyze_module(parser.ast_mut(), module_id);

    let errors = result.expect_err("y is ante-qualified but depends on non-ante x");
    assert!(errors.iter().any(|e| format!("{e:?}").contains("AnteViolation")));
}

#[test]
fn test_ante_dependency_on_ante_binding_is_fine() {
    let source = "ante x = 1\nante y = x\n";
    let (mut parser, module_id) = parse_source(source);
    let result = analyze_module(parser.ast_mut(), module_id);

    assert!(result.is_ok(), "an ante binding depending only on other ante bindings should resolve cleanly");
}

#[test]
fn test_nested_function_bodies_see_outer_top_level_names() {
    let source = "fun helper: i32 n = n\nfun f:\n    return helper(1)\n";
    let (mut parser, module_id) = parse_source(source);
    let result = analyze_module(parser.ast_mut(), module_id);

    assert!(result.is_ok(), "a function body should see other top-level declarations");
}
