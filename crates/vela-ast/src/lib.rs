//! Abstract Syntax Tree (AST) definitions for the Vela programming language.

#[macro_use]
pub mod macros;

pub mod ast;
pub mod nodes;
pub mod visitor;
