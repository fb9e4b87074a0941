//! Semantic error types and reporting.
//!
//! This module defines the error types that can occur during semantic
//! analysis: duplicate declarations, unresolved names, and the ante
//! visitor's compile-time-dependency diagnostic.

use thiserror::Error;
use vela_source::types::Span;

use crate::symbol::AssignPurpose;

/// Semantic analysis errors.
#[derive(Debug, Error, Clone)]
pub enum SemanticError {
    /// Duplicate symbol error - attempt to declare a name that already exists in the same scope.
    #[error("Duplicate symbol '{name}'")]
    DuplicateSymbol {
        /// The name that was declared twice
        name: String,
        /// The location of the original declaration
        original_span: Span,
        /// The location of the duplicate declaration
        duplicate_span: Span,
    },

    /// No active scope error - internal error when no scope is available.
    #[error("No active scope (internal error)")]
    NoActiveScope,

    /// Undefined name error - reference to a name that hasn't been declared.
    #[error("Undefined name '{name}'")]
    UndefinedName {
        /// The name that was not found
        name: String,
        /// The location where the undefined name was used
        span: Span,
    },

    /// Ante-visitor diagnostic: an expression evaluated at compile time
    /// transitively depends on a free variable whose type lacks the
    /// `Ante` modifier. The message varies by the variable's assignment
    /// purpose so the report names what kind of binding is at fault.
    #[error("{}", ante_violation_message(.name, *.purpose))]
    AnteViolation {
        /// The offending variable's name
        name: String,
        /// The purpose of the variable's most recent bind/rebind point
        purpose: AssignPurpose,
        /// The location of the dependency
        span: Span,
    },
}

fn ante_violation_message(name: &str, purpose: AssignPurpose) -> String {
    match purpose {
        AssignPurpose::Normal => {
            format!("compile-time expression depends on non-ante binding '{name}'")
        }
        AssignPurpose::ForLoop => {
            format!("compile-time expression depends on non-ante loop variable '{name}'")
        }
        AssignPurpose::Parameter => {
            format!("compile-time expression depends on non-ante parameter '{name}'")
        }
        AssignPurpose::TypeVar => {
            format!("compile-time expression depends on non-ante type variable '{name}'")
        }
    }
}

impl SemanticError {
    /// Returns the span associated with this error, if any.
    #[must_use]
    pub const fn span(&self) -> Option<Span> {
        match self {
            Self::DuplicateSymbol { duplicate_span: span, .. }
            | Self::UndefinedName { span, .. }
            | Self::AnteViolation { span, .. } => Some(*span),
            Self::NoActiveScope => None,
        }
    }
}
