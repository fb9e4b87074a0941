// -------------------------------------------------------------------------
// SPDX-FileCopyrightText: Copyright © 2025 The Vela Project
// SPDX-FileName: crates/vela-compiler/src/error.rs
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
//! Error taxonomy for the pattern compiler and driver.
//!
//! `PatternError` covers shape conflicts and inexhaustiveness found
//! while compiling a single `match`. `CompileError` is the driver-level
//! aggregate, carrying one variant per pipeline phase so a caller can
//! match on where the file failed without downcasting.

use thiserror::Error;
use vela_analyzer::error::SemanticError;
use vela_parser::diagnostics::ParseError;
use vela_source::types::Span;

/// Errors raised while compiling a single `match` expression's patterns.
#[derive(Debug, Error, Clone)]
pub enum PatternError {
    /// A tuple pattern's arity doesn't match the number of elements
    /// already established for this position by an earlier branch.
    #[error("pattern has {found} elements, but {expected} were expected here")]
    TupleArityMismatch { expected: usize, found: usize, span: Span },

    /// A pattern's shape conflicts with what an earlier branch
    /// established for the same position (e.g. a tuple pattern where a
    /// constructor pattern was already seen).
    #[error("conflicting patterns at the same position: expected {expected}, found {found}")]
    ShapeConflict { expected: String, found: String, span: Span },

    /// A constructor pattern names a variant that doesn't belong to the
    /// union type already established for this position.
    #[error("'{name}' is not a variant of the type being matched here")]
    UnknownVariant { name: String, span: Span },

    /// The match is missing at least one case; `missed_case` is a
    /// concrete, human-readable example of an unmatched value.
    #[error("non-exhaustive match, missing case: {missed_case}")]
    NonExhaustive { missed_case: String, span: Span },
}

impl PatternError {
    /// Returns the span associated with this error.
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::TupleArityMismatch { span, .. }
            | Self::ShapeConflict { span, .. }
            | Self::UnknownVariant { span, .. }
            | Self::NonExhaustive { span, .. } => *span,
        }
    }
}

/// The driver's aggregate error type: one variant per compilation phase.
#[derive(Debug, Error)]
pub enum CompileError {
    /// The source file could not be read.
    #[error("could not read '{path}': {source}")]
    Io { path: String, #[source] source: std::io::Error },

    /// Lexing or parsing failed.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Name resolution failed; these accumulate, so this variant carries
    /// every error found rather than just the first.
    #[error("{} semantic error(s) in this file", .0.len())]
    Semantic(Vec<SemanticError>),

    /// The pattern compiler rejected a `match` expression.
    #[error(transparent)]
    Pattern(#[from] PatternError),
}
