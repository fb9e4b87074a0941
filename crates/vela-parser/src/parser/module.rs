//! Top-level file parsing.
//!
//! A source file parses into one `Root`, the leaf of the multi-root
//! module tree: `ext` blocks, `fun`/`data`/`trait` declarations, and
//! everything else (including `import`) are routed into `Root`'s three
//! separate lists rather than one flat statement list.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use vela_ast::ast::AST;
use vela_ast::nodes::{AnyNode, NodeID, NodeKind, Root};
use vela_source::types::SourceManager;

use super::context::{Context, ContextType};
use super::Parser;
use crate::diagnostics::{ParseError, ParseResult};
use crate::lexer::TokenKind;

impl Parser<'_> {
    /// Parse an entire file into a `Root` node.
    ///
    /// ## Errors
    ///
    /// Returns an error on the first malformed top-level item.
    pub fn parse_program(&mut self) -> ParseResult<NodeID> {
        self.context_stack.push(Context::new(ContextType::Global, None));

        let mut extensions = Vec::new();
        let mut funcs = Vec::new();
        let mut main = Vec::new();

        while !self.check(TokenKind::EndOfInput) {
            while self.check(TokenKind::Newline) {
                let _ = self.advance();
            }
            if self.check(TokenKind::EndOfInput) {
                break;
            }

            match self.current_token().kind {
                TokenKind::Ext => extensions.push(self.parse_declaration()?),
                TokenKind::Fun | TokenKind::Data | TokenKind::Trait => {
                    funcs.push(self.parse_declaration()?);
                }
                _ => main.push(self.parse_statement()?),
            }
        }

        self.context_stack.pop();

        let span = self.span_from(0, self.source_len());
        let name = self.module_name();

        Ok(self.alloc_node(
            NodeKind::Module,
            AnyNode::Root(Root::new(name, extensions, funcs, main, NodeID::placeholder(), span)),
            span,
        ))
    }

    fn source_len(&self) -> usize { self.source.len() }

    /// Derive the module name from the source file's stem, falling back
    /// to `unnamed_module` for sources with no registered path.
    fn module_name(&self) -> String {
        let file_path = self
            .source_manager
            .get_file(self.file_id)
            .and_then(|file| file.path.clone())
            .unwrap_or_else(|| PathBuf::from("unnamed_module"));

        Path::new(&file_path)
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("unnamed_module")
            .to_string()
    }

    /// Parse a file from disk into an AST arena and its `Root` node.
    ///
    /// ## Errors
    ///
    /// Returns an error if the file cannot be read, or on the first
    /// malformed top-level item.
    pub fn parse_file(file_path: &str) -> ParseResult<(AST, NodeID)> {
        let source = std::fs::read_to_string(file_path)
            .map_err(|e| ParseError::other(format!("failed to read file '{file_path}': {e}")))?;

        let mut source_manager = SourceManager::new();
        let file_id = source_manager.add_file(file_path.to_string(), source.clone());
        let source_manager = Arc::new(source_manager);

        let mut parser = Self::new(&source, file_id, source_manager);
        let root_id = parser.parse_program()?;

        Ok((parser.ast, root_id))
    }
}
