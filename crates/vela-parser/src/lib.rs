//! # Vela Parser
//!
//! A parser for the Vela programming language: an indentation-aware
//! lexer paired with a recursive-descent parser producing the closed
//! AST node set defined in `vela_ast`.
//!
//! This crate provides a comprehensive parser for the Vela language, including lexing,
//! parsing, error reporting, and AST generation. The parser is designed to be memory
//! efficient, robust with error recovery, and easy to integrate into language tools.
//!
//! ## Key Features
//!
//! - **Memory Efficiency**: Uses lifetimes to avoid unnecessary string allocations.
//! - **Error Recovery**: Continues parsing after errors to report multiple issues in a single pass.
//! - **Indentation-Aware Lexing**: Handles indentation-based block structure via synthesized `Indent`/`Unindent` tokens.
//! - **Visitor Pattern**: Generic visitor for flexible AST traversal.
//! - **Type-Safe AST**: Uses traits and generics for a type-safe AST.
//! - **Rich Error Reporting**: Provides detailed error messages with context.
//!
//! ## Example
//!
//! ```rust,ignore
//! use vela_parser::parser::Parser;
//! use vela_source::types::SourceManager;
//! use std::sync::Arc;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let source_code = "fun f: i32 x = g x\nfun g: i32 y = y\n";
//!     let mut source_manager = SourceManager::new();
//!     let file_id = source_manager.add_file("example.vl".to_string(), source_code.to_string());
//!     let source_manager = Arc::new(source_manager);
//!
//!     let mut parser = Parser::new(source_code, file_id, source_manager);
//!     let root_id = parser.parse_program()?;
//!
//!     println!("Successfully parsed!");
//!
//!     Ok(())
//! }
//! ```

pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod utils;
