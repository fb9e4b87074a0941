// -------------------------------------------------------------------------
// SPDX-FileCopyrightText: Copyright © 2025 The Vela Project
// SPDX-FileName: crates/vela-compiler/src/pattern/exhaustiveness.rs
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
//! Exhaustiveness checking, independent of codegen.
//!
//! A [`Pattern`] is a skeleton of the shape a `match`'s subject can take,
//! starting out as an unconstrained filler and growing a concrete shape
//! (tuple, or union with one child per variant) the first time a branch
//! pattern touches it. Each branch is folded in with [`Pattern::overwrite`];
//! once every branch has been folded, [`Pattern::irrefutable`] must hold,
//! or [`Pattern::construct_missed_case`] produces a counter-example.
//!
//! Unlike a fully type-directed checker, this one discovers a union's
//! identity from the first constructor pattern that mentions it (looked
//! up against the symbol table's `DataVariant` entries) rather than from
//! a resolved static type on the subject expression, since this front
//! end stops short of full type inference. A named type is still
//! checked against the complete variant list its declaration carries.

use vela_analyzer::symbol::{SymbolKind, SymbolTable};
use vela_ast::ast::AST;
use vela_ast::nodes::{AnyNode, NodeID};
use vela_source::types::Span;

use crate::error::PatternError;

/// A branch pattern reduced to the shape the exhaustiveness checker
/// cares about. Built once per branch from the raw AST pattern node.
#[derive(Debug, Clone)]
pub enum ConcretePattern {
    /// A catch-all binder, or the `_` wildcard.
    Wildcard,
    /// An integer, float, string, bool, or char literal. The exact value
    /// doesn't matter for exhaustiveness, only that it's not a binder.
    Literal,
    /// A tuple destructure.
    Tuple(Vec<ConcretePattern>),
    /// A union constructor, naming its owning `DataDecl`, the index of
    /// the matched variant within it, and every variant name the
    /// declaration carries (so a variant no branch ever mentions can
    /// still be named in a missed-case counter-example).
    Constructor { owner: NodeID, variant_index: usize, variant_names: Vec<String>, payload: Vec<ConcretePattern> },
}

/// The shape a position in the scrutinee is known to take.
#[derive(Debug, Clone)]
enum Shape {
    /// Not yet constrained by any branch.
    Unconstrained,
    /// Constrained to an unbounded literal domain: no finite enumeration
    /// of values can prove this position exhaustive.
    Literal,
    /// A fixed-arity tuple, one child `Pattern` per element.
    Tuple(Vec<Pattern>),
    /// A union type, one child `Pattern` per variant in declaration
    /// order, plus the `DataDecl` node identifying it.
    Data { owner: NodeID, variants: Vec<Pattern> },
}

/// One node of the exhaustiveness skeleton.
#[derive(Debug, Clone)]
pub struct Pattern {
    shape: Shape,
    /// True once some branch has fully covered this position (a binder,
    /// or every child being irrefutable).
    matched: bool,
    /// The variant or tuple name to use in a missed-case message, if any.
    name: Option<String>,
}

impl Pattern {
    /// An unconstrained filler node: matches nothing yet, but accepts
    /// whatever shape the first branch touching it establishes.
    #[must_use]
    pub const fn filler() -> Self { Self { shape: Shape::Unconstrained, matched: false, name: None } }

    /// An unconstrained filler node carrying the variant name it stands
    /// for, so a missed-case message can still name it if no branch
    /// ever touches it.
    #[must_use]
    fn named_filler(name: String) -> Self { Self { shape: Shape::Unconstrained, matched: false, name: Some(name) } }

    /// Folds one branch's pattern into this skeleton, morphing an
    /// unconstrained node into a concrete shape on first contact and
    /// erroring on a shape conflict thereafter.
    ///
    /// ## Errors
    ///
    /// Returns [`PatternError::ShapeConflict`], [`PatternError::TupleArityMismatch`],
    /// or [`PatternError::UnknownVariant`] if `concrete` can't be
    /// reconciled with the shape already established here.
    pub fn overwrite(&mut self, concrete: &ConcretePattern, span: Span) -> Result<(), PatternError> {
        match concrete {
            ConcretePattern::Wildcard => {
                self.matched = true;
                Ok(())
            }
            ConcretePattern::Literal => {
                if let Shape::Unconstrained = self.shape {
                    self.shape = Shape::Literal;
                }
                // A literal never completes an unbounded domain on its own.
                Ok(())
            }
            ConcretePattern::Tuple(elements) => self.overwrite_tuple(elements, span),
            ConcretePattern::Constructor { owner, variant_index, variant_names, payload } => {
                self.overwrite_constructor(*owner, *variant_index, variant_names, payload, span)
            }
        }
    }

    fn overwrite_tuple(&mut self, elements: &[ConcretePattern], span: Span) -> Result<(), PatternError> {
        if let Shape::Unconstrained = self.shape {
            self.shape = Shape::Tuple(elements.iter().map(|_| Self::filler()).collect());
        }
        let Shape::Tuple(children) = &mut self.shape else {
            return Err(PatternError::ShapeConflict {
                expected: self.shape_name(),
                found: "tuple".to_string(),
                span,
            });
        };
        if children.len() != elements.len() {
            return Err(PatternError::TupleArityMismatch {
                expected: children.len(),
                found: elements.len(),
                span,
            });
        }
        for (child, element) in children.iter_mut().zip(elements) {
            child.overwrite(element, span)?;
        }
        self.matched = matches!(&self.shape, Shape::Tuple(children) if children.iter().all(Self::irrefutable));
        Ok(())
    }

    fn overwrite_constructor(
        &mut self,
        owner: NodeID,
        variant_index: usize,
        variant_names: &[String],
        payload: &[ConcretePattern],
        span: Span,
    ) -> Result<(), PatternError> {
        if let Shape::Unconstrained = self.shape {
            // Seed every variant the declaration carries, not just the
            // ones this branch happens to mention, so a variant no
            // branch ever touches still shows up as missing instead of
            // vacuously matching because it was never allocated.
            let variants = variant_names.iter().map(|name| Self::named_filler(name.clone())).collect();
            self.shape = Shape::Data { owner, variants };
        }
        let Shape::Data { owner: existing_owner, variants } = &mut self.shape else {
            return Err(PatternError::ShapeConflict {
                expected: self.shape_name(),
                found: "constructor".to_string(),
                span,
            });
        };
        if *existing_owner != owner {
            return Err(PatternError::ShapeConflict {
                expected: self.shape_name(),
                found: "constructor of a different type".to_string(),
                span,
            });
        }
        if variant_index >= variants.len() {
            variants.resize_with(variant_index + 1, Self::filler);
        }
        let child = &mut variants[variant_index];
        if payload.is_empty() {
            child.matched = true;
        } else if payload.len() == 1 {
            child.overwrite(&payload[0], span)?;
        } else {
            child.overwrite(&ConcretePattern::Tuple(payload.to_vec()), span)?;
        }
        Ok(())
    }

    fn shape_name(&self) -> String {
        match &self.shape {
            Shape::Unconstrained => "anything".to_string(),
            Shape::Literal => "literal".to_string(),
            Shape::Tuple(_) => "tuple".to_string(),
            Shape::Data { .. } => "constructor".to_string(),
        }
    }

    /// True if every value this position can take has been covered by
    /// some branch.
    #[must_use]
    pub fn irrefutable(&self) -> bool {
        if self.matched {
            return true;
        }
        match &self.shape {
            Shape::Unconstrained | Shape::Literal => false,
            Shape::Tuple(children) => !children.is_empty() && children.iter().all(Self::irrefutable),
            Shape::Data { variants, .. } => !variants.is_empty() && variants.iter().all(Self::irrefutable),
        }
    }

    /// Builds a concrete counter-example for the first uncovered case,
    /// by always descending into the first non-irrefutable child.
    ///
    /// ## Panics
    ///
    /// Panics if called on an already-irrefutable pattern; callers must
    /// check [`Pattern::irrefutable`] first.
    #[must_use]
    pub fn construct_missed_case(&self) -> String {
        assert!(!self.irrefutable(), "no missed case in an irrefutable pattern");
        match &self.shape {
            Shape::Unconstrained | Shape::Literal => "_".to_string(),
            Shape::Tuple(children) => {
                let fields: Vec<String> = children
                    .iter()
                    .map(|child| if child.irrefutable() { "_".to_string() } else { child.construct_missed_case() })
                    .collect();
                format!("({})", fields.join(", "))
            }
            Shape::Data { variants, .. } => variants
                .iter()
                .zip(self.variant_names())
                .find(|(child, _)| !child.irrefutable())
                .map(|(child, name)| match &child.shape {
                    Shape::Tuple(fields) if !fields.is_empty() => {
                        format!("{name}({})", child.construct_missed_case().trim_start_matches('(').trim_end_matches(')'))
                    }
                    _ => name,
                })
                .unwrap_or_else(|| "_".to_string()),
        }
    }

    fn variant_names(&self) -> Vec<String> {
        match &self.shape {
            Shape::Data { variants, .. } => {
                variants.iter().map(|variant| variant.name.clone().unwrap_or_default()).collect()
            }
            _ => Vec::new(),
        }
    }
}

/// Converts a branch's raw pattern AST node into a [`ConcretePattern`],
/// looking up bare identifiers against `table` to tell a nullary
/// constructor reference (e.g. `None`) apart from a fresh binder.
#[must_use]
pub fn to_concrete_pattern(ast: &AST, table: &SymbolTable, pattern: NodeID) -> ConcretePattern {
    let Some(node) = ast.get_node(pattern) else { return ConcretePattern::Wildcard };
    match &node.data {
        AnyNode::Var(var) => {
            if var.is_wildcard() {
                return ConcretePattern::Wildcard;
            }
            match table.lookup_symbol(&var.name) {
                Some(symbol) if symbol.kind == SymbolKind::DataVariant => {
                    match variant_info(ast, symbol.definition_node, &var.name) {
                        Some((owner, index)) => ConcretePattern::Constructor {
                            owner,
                            variant_index: index,
                            variant_names: declared_variant_names(ast, owner),
                            payload: Vec::new(),
                        },
                        None => ConcretePattern::Wildcard,
                    }
                }
                _ => ConcretePattern::Wildcard,
            }
        }
        AnyNode::Tuple(tuple) => {
            ConcretePattern::Tuple(tuple.elements.iter().map(|&e| to_concrete_pattern(ast, table, e)).collect())
        }
        AnyNode::NamedVal(named) => match table.lookup_symbol(&named.name) {
            Some(symbol) if symbol.kind == SymbolKind::DataVariant => {
                match variant_info(ast, symbol.definition_node, &named.name) {
                    Some((owner, index)) => ConcretePattern::Constructor {
                        owner,
                        variant_index: index,
                        variant_names: declared_variant_names(ast, owner),
                        payload: flatten_payload(ast, table, named.value),
                    },
                    None => ConcretePattern::Wildcard,
                }
            }
            _ => ConcretePattern::Wildcard,
        },
        _ => ConcretePattern::Literal,
    }
}

/// Every variant name a `DataDecl` declares, in declaration order.
fn declared_variant_names(ast: &AST, data_decl: NodeID) -> Vec<String> {
    ast.get_node(data_decl)
        .map(|node| match &node.data {
            AnyNode::DataDecl(decl) => decl.variants.iter().map(|variant| variant.name.clone()).collect(),
            _ => Vec::new(),
        })
        .unwrap_or_default()
}

fn flatten_payload(ast: &AST, table: &SymbolTable, value: NodeID) -> Vec<ConcretePattern> {
    if let Some(node) = ast.get_node(value)
        && let AnyNode::Tuple(tuple) = &node.data
    {
        return tuple.elements.iter().map(|&e| to_concrete_pattern(ast, table, e)).collect();
    }
    vec![to_concrete_pattern(ast, table, value)]
}

/// Looks up `variant_name`'s position within the `DataDecl` at
/// `data_decl`, returning `(data_decl, index)`.
#[must_use]
pub fn variant_info(ast: &AST, data_decl: NodeID, variant_name: &str) -> Option<(NodeID, usize)> {
    let node = ast.get_node(data_decl)?;
    let AnyNode::DataDecl(decl) = &node.data else { return None };
    decl.variants.iter().position(|variant| variant.name == variant_name).map(|index| (data_decl, index))
}
