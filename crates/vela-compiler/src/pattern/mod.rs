// -------------------------------------------------------------------------
// SPDX-FileCopyrightText: Copyright © 2025 The Vela Project
// SPDX-FileName: crates/vela-compiler/src/pattern/mod.rs
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
//! Compiles a `match` expression's branches into a [`DecisionTree`] and
//! walks it against an [`Emitter`].
//!
//! A naive lowering tests each branch's pattern in turn and re-emits the
//! fallback branch's body every time a different path reaches it, which
//! duplicates code whenever two source patterns share a trailing arm
//! (`None, None -> ...` vs the wildcard case both falling through to the
//! same default). The decision tree keeps every branch body as a numbered
//! [`DecisionTree::Leaf`]; the walk emits each leaf's body once into its
//! own block the first time it's reached and branches to that block on
//! every later encounter.

pub mod exhaustiveness;

use rustc_hash::FxHashMap;
use vela_analyzer::symbol::{SymbolKind, SymbolTable};
use vela_ast::ast::AST;
use vela_ast::nodes::{AnyNode, NodeID};
use vela_source::types::Span;

use self::exhaustiveness::{to_concrete_pattern, variant_info, Pattern};
use crate::emitter::Emitter;
use crate::error::PatternError;

/// A leaf index reachable only through branches already proven
/// unreachable by exhaustiveness checking. Never actually emitted.
const UNREACHABLE_LEAF: usize = usize::MAX;

/// A step taken against the match subject to reach a sub-value being
/// tested or bound.
#[derive(Debug, Clone)]
pub enum Projection {
    /// A plain positional field of a tuple (or of a struct-shaped union
    /// payload already downcast).
    TupleField(u32),
    /// Field `index` of a union's payload, reached by bitcasting the
    /// address of the value at this path to a variant layout carrying
    /// `payload_arity` fields.
    VariantField { index: u32, payload_arity: usize },
}

/// What a [`DecisionTree::Switch`] tests the projected value against.
#[derive(Debug, Clone)]
pub enum Test {
    IntEq(u64),
    FloatBits(u64),
    BoolEq(bool),
    CharEq(char),
    StrEq(String),
    Tag(u64),
}

/// The decision tree a `match` compiles down to.
#[derive(Debug, Clone)]
pub enum DecisionTree {
    /// Run the branch body numbered `usize`.
    Leaf(usize),
    /// Bind the value at `path` to `name`, then continue.
    Bind { path: Vec<Projection>, name: String, next: Box<DecisionTree> },
    /// A branch's pattern matched in full; `guard` must still hold for
    /// `leaf` to run, otherwise fall back to trying later branches.
    Guard { leaf: usize, guard: NodeID, fallback: Box<DecisionTree> },
    /// Test the value at `path`. `cases` is tried in order; if nothing
    /// matches, `else_case` runs (absent only when exhaustiveness has
    /// already proven every case is covered).
    Switch { path: Vec<Projection>, test: Test, cases: Vec<(u64, DecisionTree)>, else_case: Option<Box<DecisionTree>> },
}

/// Compiles a `match`'s branches into a decision tree, checking
/// exhaustiveness along the way.
///
/// ## Errors
///
/// Returns a [`PatternError`] if the branches conflict in shape or
/// don't cover every case.
pub fn compile_match(ast: &AST, table: &SymbolTable, branches: &[NodeID]) -> Result<DecisionTree, PatternError> {
    let mut skeleton = Pattern::filler();
    let mut arms = Vec::with_capacity(branches.len());
    let mut last_span = Span { start: 0, end: 0 };

    for &branch_id in branches {
        let Some(node) = ast.get_node(branch_id) else { continue };
        let AnyNode::MatchBranch(branch) = &node.data else { continue };
        let span = node.span;
        let concrete = to_concrete_pattern(ast, table, branch.pattern);
        skeleton.overwrite(&concrete, span)?;
        arms.push((branch.pattern, branch.guard, span));
        last_span = span;
    }

    if !skeleton.irrefutable() {
        return Err(PatternError::NonExhaustive { missed_case: skeleton.construct_missed_case(), span: last_span });
    }

    let mut tree = DecisionTree::Leaf(UNREACHABLE_LEAF);
    for (index, (pattern, guard, _span)) in arms.into_iter().enumerate().rev() {
        let leaf = match guard {
            Some(guard_id) => DecisionTree::Guard { leaf: index, guard: guard_id, fallback: Box::new(tree.clone()) },
            None => DecisionTree::Leaf(index),
        };
        tree = build_pattern_tree(ast, table, pattern, Vec::new(), leaf, tree);
    }
    Ok(tree)
}

/// Wraps `body` with whatever tests and bindings `pattern` requires,
/// falling back to `fallback` wherever a test can fail.
fn build_pattern_tree(
    ast: &AST,
    table: &SymbolTable,
    pattern: NodeID,
    path: Vec<Projection>,
    body: DecisionTree,
    fallback: DecisionTree,
) -> DecisionTree {
    let Some(node) = ast.get_node(pattern) else { return body };
    match &node.data {
        AnyNode::Var(var) => {
            if var.is_wildcard() {
                return body;
            }
            match table.lookup_symbol(&var.name) {
                Some(symbol) if symbol.kind == SymbolKind::DataVariant => {
                    match variant_info(ast, symbol.definition_node, &var.name) {
                        Some((_, index)) => DecisionTree::Switch {
                            path,
                            test: Test::Tag(index as u64),
                            cases: vec![(index as u64, body)],
                            else_case: Some(Box::new(fallback)),
                        },
                        None => body,
                    }
                }
                _ => DecisionTree::Bind { path, name: var.name.clone(), next: Box::new(body) },
            }
        }
        AnyNode::IntLit(lit) => {
            let value = lit.lexeme.parse::<u64>().unwrap_or(0);
            switch_one(path, Test::IntEq(value), value, body, fallback)
        }
        AnyNode::FltLit(lit) => {
            let value = lit.lexeme.parse::<f64>().unwrap_or(0.0);
            switch_one(path, Test::FloatBits(value.to_bits()), value.to_bits(), body, fallback)
        }
        AnyNode::BoolLit(lit) => switch_one(path, Test::BoolEq(lit.value), u64::from(lit.value), body, fallback),
        AnyNode::CharLit(lit) => switch_one(path, Test::CharEq(lit.value), u64::from(lit.value), body, fallback),
        AnyNode::StrLit(lit) => switch_one(path, Test::StrEq(lit.value.clone()), 0, body, fallback),
        AnyNode::Tuple(tuple) => {
            let mut acc = body;
            for (index, &element) in tuple.elements.iter().enumerate().rev() {
                let mut element_path = path.clone();
                element_path.push(Projection::TupleField(u32::try_from(index).unwrap_or(u32::MAX)));
                acc = build_pattern_tree(ast, table, element, element_path, acc, fallback.clone());
            }
            acc
        }
        AnyNode::NamedVal(named) => match table.lookup_symbol(&named.name) {
            Some(symbol) if symbol.kind == SymbolKind::DataVariant => {
                match variant_info(ast, symbol.definition_node, &named.name) {
                    Some((owner, index)) => {
                        let arity = variant_arity(ast, owner, index);
                        let payload = flatten_payload(ast, named.value);
                        let mut acc = body;
                        for (field_index, &field_pattern) in payload.iter().enumerate().rev() {
                            let mut field_path = path.clone();
                            field_path.push(Projection::VariantField {
                                index: u32::try_from(field_index).unwrap_or(u32::MAX),
                                payload_arity: arity,
                            });
                            acc = build_pattern_tree(ast, table, field_pattern, field_path, acc, fallback.clone());
                        }
                        DecisionTree::Switch {
                            path,
                            test: Test::Tag(index as u64),
                            cases: vec![(index as u64, acc)],
                            else_case: Some(Box::new(fallback)),
                        }
                    }
                    None => body,
                }
            }
            _ => body,
        },
        _ => body,
    }
}

fn switch_one(
    path: Vec<Projection>,
    test: Test,
    key: u64,
    body: DecisionTree,
    fallback: DecisionTree,
) -> DecisionTree {
    DecisionTree::Switch { path, test, cases: vec![(key, body)], else_case: Some(Box::new(fallback)) }
}

fn flatten_payload(ast: &AST, value: NodeID) -> Vec<NodeID> {
    if let Some(node) = ast.get_node(value)
        && let AnyNode::Tuple(tuple) = &node.data
    {
        return tuple.elements.clone();
    }
    vec![value]
}

fn variant_arity(ast: &AST, data_decl: NodeID, variant_index: usize) -> usize {
    ast.get_node(data_decl)
        .and_then(|node| match &node.data {
            AnyNode::DataDecl(decl) => decl.variants.get(variant_index).map(|v| v.fields.len()),
            _ => None,
        })
        .unwrap_or(0)
}

/// Walks a [`DecisionTree`], driving `emitter` to produce the
/// corresponding control flow and returning the merged result value.
///
/// `emit_leaf` is called once per distinct leaf index, in whatever
/// block the walk has already set as the insert point, and must return
/// the value the branch's body evaluates to; `resolve_guard` similarly
/// evaluates a guard expression node down to a boolean `Emitter::Value`.
pub fn emit_decision_tree<E: Emitter>(
    emitter: &mut E,
    tree: &DecisionTree,
    scrutinee: &E::Value,
    end_block: E::BasicBlock,
    emit_leaf: &mut impl FnMut(&mut E, usize, &[(String, E::Value)]) -> E::Value,
    resolve_guard: &mut impl FnMut(&mut E, NodeID) -> E::Value,
) -> Vec<(E::Value, E::BasicBlock)> {
    let mut leaf_blocks: FxHashMap<usize, E::BasicBlock> = FxHashMap::default();
    let mut merges = Vec::new();
    walk(emitter, tree, scrutinee, &mut Vec::new(), end_block, &mut leaf_blocks, emit_leaf, resolve_guard, &mut merges);
    merges
}

#[allow(clippy::too_many_arguments)]
fn walk<E: Emitter>(
    emitter: &mut E,
    tree: &DecisionTree,
    scrutinee: &E::Value,
    bindings: &mut Vec<(String, E::Value)>,
    end_block: E::BasicBlock,
    leaf_blocks: &mut FxHashMap<usize, E::BasicBlock>,
    emit_leaf: &mut impl FnMut(&mut E, usize, &[(String, E::Value)]) -> E::Value,
    resolve_guard: &mut impl FnMut(&mut E, NodeID) -> E::Value,
    merges: &mut Vec<(E::Value, E::BasicBlock)>,
) {
    match tree {
        DecisionTree::Leaf(index) => {
            if let Some(&block) = leaf_blocks.get(index) {
                emitter.br(block);
                return;
            }
            let block = emitter.new_block(&format!("match_arm_{index}"));
            emitter.br(block);
            emitter.set_insert_point(block);
            leaf_blocks.insert(*index, block);
            let value = emit_leaf(emitter, *index, bindings);
            merges.push((value, block));
            emitter.br(end_block);
        }
        DecisionTree::Bind { path, name, next } => {
            let value = resolve_path(emitter, scrutinee, path);
            bindings.push((name.clone(), value));
            walk(emitter, next, scrutinee, bindings, end_block, leaf_blocks, emit_leaf, resolve_guard, merges);
            bindings.pop();
        }
        DecisionTree::Guard { leaf, guard, fallback } => {
            let cond = resolve_guard(emitter, *guard);
            let then_block = emitter.new_block("guard_ok");
            let else_block = emitter.new_block("guard_fail");
            emitter.cond_br(&cond, then_block, else_block);

            emitter.set_insert_point(then_block);
            walk(
                emitter,
                &DecisionTree::Leaf(*leaf),
                scrutinee,
                bindings,
                end_block,
                leaf_blocks,
                emit_leaf,
                resolve_guard,
                merges,
            );

            emitter.set_insert_point(else_block);
            walk(emitter, fallback, scrutinee, bindings, end_block, leaf_blocks, emit_leaf, resolve_guard, merges);
        }
        DecisionTree::Switch { path, test, cases, else_case } => {
            let value = resolve_path(emitter, scrutinee, path);
            let (_, first_case) = &cases[0];
            let cond = compare(emitter, &value, test);
            let then_block = emitter.new_block("match_test_ok");
            let else_block = emitter.new_block("match_test_fail");
            emitter.cond_br(&cond, then_block, else_block);

            emitter.set_insert_point(then_block);
            walk(emitter, first_case, scrutinee, bindings, end_block, leaf_blocks, emit_leaf, resolve_guard, merges);

            emitter.set_insert_point(else_block);
            match else_case {
                Some(fallback) => {
                    walk(emitter, fallback, scrutinee, bindings, end_block, leaf_blocks, emit_leaf, resolve_guard, merges);
                }
                None => {
                    let undef = emitter.undef();
                    merges.push((undef, else_block));
                    emitter.br(end_block);
                }
            }
        }
    }
}

fn compare<E: Emitter>(emitter: &mut E, value: &E::Value, test: &Test) -> E::Value {
    match test {
        Test::IntEq(expected) => {
            let constant = emitter.const_int(*expected);
            emitter.icmp_eq(value, &constant)
        }
        Test::Tag(expected) => {
            let constant = emitter.const_int(*expected);
            let tag = emitter.tag_of(value);
            emitter.icmp_eq(&tag, &constant)
        }
        Test::FloatBits(bits) => {
            let constant = emitter.const_float(*bits);
            emitter.fcmp_oeq(value, &constant)
        }
        Test::BoolEq(expected) => {
            let constant = emitter.const_int(u64::from(*expected));
            emitter.icmp_eq(value, &constant)
        }
        Test::CharEq(expected) => {
            let constant = emitter.const_int(u64::from(*expected));
            emitter.icmp_eq(value, &constant)
        }
        Test::StrEq(expected) => {
            let constant = emitter.const_str(expected);
            emitter.str_eq(value, &constant)
        }
    }
}

fn resolve_path<E: Emitter>(emitter: &mut E, root: &E::Value, path: &[Projection]) -> E::Value {
    let mut current = root.clone();
    for projection in path {
        current = match projection {
            Projection::TupleField(index) => emitter.extract_field(&current, *index),
            Projection::VariantField { index, payload_arity } => {
                let addr = emitter.addr_of(&current);
                let cast = emitter.bitcast(&addr, *payload_arity);
                emitter.struct_gep_load(&cast, *index)
            }
        };
    }
    current
}

#[cfg(test)]
mod tests;
