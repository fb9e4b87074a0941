//! Identifier parsing shared by declarations, expressions, and types.

use vela_ast::nodes::{AnyNode, NodeID, NodeKind, Var};

use super::Parser;
use crate::diagnostics::ParseResult;
use crate::lexer::TokenKind;

impl Parser<'_> {
    /// Consume the current token as a plain name string.
    ///
    /// ## Errors
    ///
    /// Returns an error if the current token is not an identifier.
    pub fn expect_identifier(&mut self) -> ParseResult<String> {
        if !self.matches(&[TokenKind::Identifier, TokenKind::Underscore]) {
            return Err(self.unexpected_token(TokenKind::Identifier));
        }

        let name = self.current_token().lexeme().to_string();
        let _ = self.advance();
        Ok(name)
    }

    /// Parse a bare identifier into a `Var` reference node.
    ///
    /// ## Errors
    ///
    /// Returns an error if the current token is not an identifier.
    pub fn parse_var(&mut self) -> ParseResult<NodeID> {
        let start = self.current_token().span.start;
        let name = self.expect_identifier()?;
        let span = self.span_from(start, self.current.span.start);

        Ok(self.alloc_node(NodeKind::Expression, AnyNode::Var(Var::new(name, NodeID::placeholder(), span)), span))
    }
}
