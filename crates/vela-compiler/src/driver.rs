// -------------------------------------------------------------------------
// SPDX-FileCopyrightText: Copyright © 2025 The Vela Project
// SPDX-FileName: crates/vela-compiler/src/driver.rs
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
//! Sequences lexing, parsing, name resolution, and pattern compilation
//! over a single source file.
//!
//! The driver never touches codegen; its `compile_*` methods stop once
//! every `match` in the file has been checked for exhaustiveness, at
//! which point a caller wires up an [`Emitter`](crate::emitter::Emitter)
//! and walks the [`CompiledUnit`]'s AST to actually generate code.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use vela_analyzer::analyze_module;
use vela_analyzer::context::SemanticContext;
use vela_ast::ast::AST;
use vela_ast::nodes::{AnyNode, NodeID};
use vela_parser::parser::Parser;
use vela_source::types::SourceManager;

use crate::error::CompileError;
use crate::pattern::{self, DecisionTree};

/// The subset of the CLI's flags that change how the driver itself
/// behaves, as opposed to flags the CLI handles entirely on its own
/// (`-l`/`-p` short-circuit before the driver is ever invoked).
///
/// Codegen-facing flags (`-O`, `--emit-llvm`, `--lib`) are carried here
/// so the driver can log what a caller asked for, but none of them
/// change compilation semantics: this crate stops at decision trees and
/// never lowers them to machine code.
#[derive(Debug, Clone, Default)]
pub struct CompileOptions {
    /// Optimization level requested via `-O`. Unused until a backend
    /// exists to honor it.
    pub opt_level: u8,
    /// Whether `--emit-llvm` was requested. Unused for the same reason.
    pub emit_llvm: bool,
    /// Whether `--lib` was requested. Unused for the same reason.
    pub lib: bool,
}

/// A source file carried through parsing, name resolution, and pattern
/// compilation.
#[derive(Debug)]
pub struct CompiledUnit {
    /// The populated AST arena.
    pub ast: AST,
    /// The `Root` node of this file.
    pub module: NodeID,
    /// Symbol table, type universe, and module tree built during name
    /// resolution.
    pub context: SemanticContext,
    /// One decision tree per `match` expression found, in source order.
    pub decision_trees: Vec<(NodeID, DecisionTree)>,
}

/// Runs the front-end pipeline (lex, parse, resolve names, compile
/// patterns) over Vela source text.
#[derive(Debug, Default)]
pub struct Driver {
    options: CompileOptions,
}

impl Driver {
    /// Creates a new driver with default options.
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Creates a driver carrying the given `options`.
    #[must_use]
    pub fn with_options(options: CompileOptions) -> Self { Self { options } }

    /// Reads `path` and compiles its contents.
    ///
    /// ## Errors
    ///
    /// Returns [`CompileError::Io`] if the file can't be read, or
    /// whatever [`Self::compile_str`] would return for its contents.
    pub fn compile_file(&self, path: &Path) -> Result<CompiledUnit, CompileError> {
        let source = fs::read_to_string(path)
            .map_err(|source| CompileError::Io { path: path.display().to_string(), source })?;
        let name = path.display().to_string();
        self.compile_str(&name, &source)
    }

    /// Compiles `source`, named `file_name` for diagnostics.
    ///
    /// ## Errors
    ///
    /// Returns [`CompileError::Parse`] on a lex or parse failure,
    /// [`CompileError::Semantic`] if name resolution finds undefined
    /// names or redefinitions, or [`CompileError::Pattern`] if any
    /// `match` in the file is non-exhaustive or has conflicting
    /// patterns.
    pub fn compile_str(&self, file_name: &str, source: &str) -> Result<CompiledUnit, CompileError> {
        log::debug!(
            "compiling {file_name} (opt_level={}, emit_llvm={}, lib={})",
            self.options.opt_level,
            self.options.emit_llvm,
            self.options.lib
        );

        let mut source_manager = SourceManager::new();
        let file_id = source_manager.add_file(file_name.to_string(), source.to_string());
        let source_manager = Arc::new(source_manager);

        log::debug!("parsing {file_name}");
        let mut parser = Parser::new(source, file_id, source_manager);
        let module = parser.parse_program()?;

        log::debug!("resolving names in {file_name}");
        let context = analyze_module(parser.ast_mut(), module).map_err(CompileError::Semantic)?;

        let ast = parser.ast().clone();
        let match_nodes = ast.filter_nodes(module, |id| {
            ast.get_node(id).is_some_and(|node| matches!(node.data, AnyNode::Match(_)))
        });

        log::debug!("compiling {} match expression(s) in {file_name}", match_nodes.len());
        let mut decision_trees = Vec::with_capacity(match_nodes.len());
        for match_id in match_nodes {
            let Some(node) = ast.get_node(match_id) else { continue };
            let AnyNode::Match(match_expr) = &node.data else { continue };
            let tree = pattern::compile_match(&ast, &context.symbol_table, &match_expr.branches)?;
            decision_trees.push((match_id, tree));
        }

        log::info!("compiled {file_name} successfully");
        Ok(CompiledUnit { ast, module, context, decision_trees })
    }
}
