// -------------------------------------------------------------------------
// SPDX-FileCopyrightText: Copyright © 2025 The Vela Project
// SPDX-FileName: crates/vela-compiler/src/pattern/tests.rs
// SPDX-FileType: SOURCE
// SPDX-License-Identifier: Apache-2.0
// -------------------------------------------------------------------------
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
// -------------------------------------------------------------------------
//! Tests for the decision-tree compiler and its exhaustiveness check.
//!
//! Emission is exercised with an in-memory recording `Emitter` that logs
//! the calls it receives instead of producing real values, so these
//! tests assert on control-flow shape without any codegen dependency.

use std::sync::Arc;

use proptest::prelude::*;
use vela_ast::nodes::{AnyNode, NodeID};
use vela_analyzer::analyze_module;
use vela_analyzer::context::SemanticContext;
use vela_ast::ast::AST;
use vela_parser::parser::Parser;
use vela_source::types::SourceManager;

use super::exhaustiveness::{ConcretePattern, Pattern};
use super::{compile_match, emit_decision_tree};
use crate::emitter::Emitter;
use crate::error::PatternError;

#[derive(Debug, Default)]
struct RecordingEmitter {
    calls: Vec<String>,
    next_block: u32,
}

impl Emitter for RecordingEmitter {
    type Value = String;
    type BasicBlock = u32;
    type Function = u32;

    fn current_function(&self) -> u32 { 0 }

    fn new_block(&mut self, name: &str) -> u32 {
        let id = self.next_block;
        self.next_block += 1;
        self.calls.push(format!("new_block({name})"));
        id
    }

    fn set_insert_point(&mut self, block: u32) { self.calls.push(format!("set_insert_point({block})")); }

    fn br(&mut self, target: u32) { self.calls.push(format!("br({target})")); }

    fn cond_br(&mut self, cond: &String, then_block: u32, else_block: u32) {
        self.calls.push(format!("cond_br({cond}, {then_block}, {else_block})"));
    }

    fn icmp_eq(&mut self, lhs: &String, rhs: &String) -> String {
        self.calls.push("icmp_eq".to_string());
        format!("({lhs} == {rhs})")
    }

    fn fcmp_oeq(&mut self, lhs: &String, rhs: &String) -> String {
        self.calls.push("fcmp_oeq".to_string());
        format!("({lhs} ==. {rhs})")
    }

    fn str_eq(&mut self, lhs: &String, rhs: &String) -> String {
        self.calls.push("str_eq".to_string());
        format!("streq({lhs}, {rhs})")
    }

    fn const_int(&mut self, value: u64) -> String { format!("#{value}") }

    fn const_float(&mut self, bits: u64) -> String { format!("#f{bits}") }

    fn const_str(&mut self, value: &str) -> String { format!("{value:?}") }

    fn extract_field(&mut self, value: &String, index: u32) -> String {
        self.calls.push(format!("extract_field({value}, {index})"));
        format!("{value}.{index}")
    }

    fn tag_of(&mut self, value: &String) -> String {
        self.calls.push(format!("tag_of({value})"));
        format!("{value}.tag")
    }

    fn bitcast(&mut self, value: &String, payload_arity: usize) -> String {
        self.calls.push(format!("bitcast({value}, {payload_arity})"));
        format!("({value} as variant[{payload_arity}])")
    }

    fn struct_gep_load(&mut self, value: &String, index: u32) -> String {
        self.calls.push(format!("struct_gep_load({value}, {index})"));
        format!("{value}[{index}]")
    }

    fn addr_of(&mut self, value: &String) -> String { format!("&{value}") }

    fn phi(&mut self, incoming: &[(String, u32)]) -> String {
        self.calls.push(format!("phi({} incoming)", incoming.len()));
        "phi_result".to_string()
    }

    fn undef(&mut self) -> String { "undef".to_string() }

    fn get_unit_literal(&mut self) -> String { "unit".to_string() }
}

fn analyze(source: &str) -> (AST, SemanticContext, NodeID) {
    let mut source_manager = SourceManager::new();
    let file_id = source_manager.add_file("test.vl".to_string(), source.to_string());
    let mut parser = Parser::new(source, file_id, Arc::new(source_manager));
    let module = parser.parse_program().expect("source should parse");
    let context = analyze_module(parser.ast_mut(), module).expect("source should resolve");
    (parser.ast().clone(), context, module)
}

fn find_match_branches(ast: &AST, module: NodeID) -> Vec<NodeID> {
    let match_id = ast
        .find_node(module, |id| ast.get_node(id).is_some_and(|node| matches!(node.data, AnyNode::Match(_))))
        .expect("source should contain a match expression");
    let Some(node) = ast.get_node(match_id) else { unreachable!() };
    let AnyNode::Match(match_expr) = &node.data else { unreachable!() };
    match_expr.branches.clone()
}

#[test]
fn exhaustive_union_match_compiles() {
    let source = "data Option = Some(i32) | None\nmut o = 1\nmatch o:\n    Some(x) -> x\n    None -> 0\n";
    let (ast, context, module) = analyze(source);
    let branches = find_match_branches(&ast, module);

    let tree = compile_match(&ast, &context.symbol_table, &branches).expect("match is exhaustive");

    let mut emitter = RecordingEmitter::default();
    let end_block = emitter.new_block("end_match");
    let scrutinee = "o".to_string();
    let mut leaves_seen = Vec::new();
    let merges = emit_decision_tree(
        &mut emitter,
        &tree,
        &scrutinee,
        end_block,
        &mut |_emitter, leaf, _bindings| {
            leaves_seen.push(leaf);
            format!("body_{leaf}")
        },
        &mut |_emitter, _guard| "true".to_string(),
    );

    assert_eq!(leaves_seen, vec![0, 1], "both branches should run exactly once");
    assert_eq!(merges.len(), 2, "both arms contribute to the merge");
    assert!(emitter.calls.iter().any(|call| call.starts_with("tag_of")), "a union match must test the tag");
}

#[test]
fn non_exhaustive_union_match_is_rejected() {
    let source = "data Option = Some(i32) | None\nmut o = 1\nmatch o:\n    Some(x) -> x\n";
    let (ast, context, module) = analyze(source);
    let branches = find_match_branches(&ast, module);

    let error = compile_match(&ast, &context.symbol_table, &branches).expect_err("match is missing None");
    match error {
        PatternError::NonExhaustive { missed_case, .. } => assert_eq!(missed_case, "None"),
        other => panic!("expected NonExhaustive, got {other:?}"),
    }
}

#[test]
fn wildcard_branch_shares_a_leaf_across_reentry() {
    let source = "data Option = Some(i32) | None\nmut o = 1\nmatch o:\n    Some(x) -> x\n    _ -> 0\n";
    let (ast, context, module) = analyze(source);
    let branches = find_match_branches(&ast, module);

    let tree = compile_match(&ast, &context.symbol_table, &branches).expect("wildcard covers the rest");

    let mut emitter = RecordingEmitter::default();
    let end_block = emitter.new_block("end_match");
    let scrutinee = "o".to_string();
    let mut body_calls = 0;
    let merges = emit_decision_tree(
        &mut emitter,
        &tree,
        &scrutinee,
        end_block,
        &mut |_emitter, _leaf, _bindings| {
            body_calls += 1;
            "value".to_string()
        },
        &mut |_emitter, _guard| "true".to_string(),
    );

    assert_eq!(body_calls, 2, "one call per distinct leaf body");
    assert_eq!(merges.len(), 2);
}

#[test]
fn tuple_pattern_destructures_positionally() {
    let source = "mut pair = (1, 2)\nmatch pair:\n    (a, b) -> a\n";
    let (ast, context, module) = analyze(source);
    let branches = find_match_branches(&ast, module);

    let tree = compile_match(&ast, &context.symbol_table, &branches).expect("a bare tuple binder is irrefutable");

    let mut emitter = RecordingEmitter::default();
    let end_block = emitter.new_block("end_match");
    let scrutinee = "pair".to_string();
    let merges = emit_decision_tree(
        &mut emitter,
        &tree,
        &scrutinee,
        end_block,
        &mut |_emitter, leaf, bindings| {
            assert_eq!(leaf, 0);
            assert_eq!(bindings.len(), 2, "both tuple elements should be bound");
            "value".to_string()
        },
        &mut |_emitter, _guard| "true".to_string(),
    );

    assert_eq!(merges.len(), 1);
    assert!(emitter.calls.iter().any(|call| call.starts_with("extract_field")));
}

fn variant_names(count: usize) -> Vec<String> { (0..count).map(|i| format!("V{i}")).collect() }

proptest! {
    /// A union skeleton built from nullary-constructor branches is
    /// irrefutable exactly when every declared variant was touched by
    /// some branch, regardless of the order branches arrive in.
    #[test]
    fn union_skeleton_is_irrefutable_iff_every_variant_is_touched(
        touched in prop::collection::vec(any::<bool>(), 1..8),
    ) {
        let owner = NodeID::new(0, 0);
        let names = variant_names(touched.len());
        let span = vela_source::types::Span { start: 0, end: 0 };

        let mut skeleton = Pattern::filler();
        for (index, &is_touched) in touched.iter().enumerate() {
            if is_touched {
                let concrete = ConcretePattern::Constructor {
                    owner,
                    variant_index: index,
                    variant_names: names.clone(),
                    payload: Vec::new(),
                };
                skeleton.overwrite(&concrete, span).expect("a nullary constructor never conflicts its own shape");
            }
        }

        prop_assert_eq!(skeleton.irrefutable(), touched.iter().all(|&t| t));
    }

    /// The missed-case counter-example always names an untouched
    /// variant, never one a branch already covered.
    #[test]
    fn missed_case_names_an_untouched_variant(
        touched in prop::collection::vec(any::<bool>(), 1..8),
    ) {
        prop_assume!(touched.iter().any(|&t| t) && touched.iter().any(|&t| !t));
        let owner = NodeID::new(0, 0);
        let names = variant_names(touched.len());
        let span = vela_source::types::Span { start: 0, end: 0 };

        let mut skeleton = Pattern::filler();
        for (index, &is_touched) in touched.iter().enumerate() {
            if is_touched {
                let concrete = ConcretePattern::Constructor {
                    owner,
                    variant_index: index,
                    variant_names: names.clone(),
                    payload: Vec::new(),
                };
                skeleton.overwrite(&concrete, span).expect("a nullary constructor never conflicts its own shape");
            }
        }

        prop_assert!(!skeleton.irrefutable());
        let missed = skeleton.construct_missed_case();
        let missed_index = names.iter().position(|n| n == &missed).expect("missed case names a declared variant");
        prop_assert!(!touched[missed_index], "missed case {missed} was already covered by a branch");
    }
}
