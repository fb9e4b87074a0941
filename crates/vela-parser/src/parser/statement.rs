//! Statement parsing.
//!
//! There is no dedicated "statement" node in the closed set: a
//! statement is whatever node results from parsing one logical line,
//! stored directly in the enclosing `Block`/`Seq`/`Root` list. This
//! module is responsible for dispatching on the leading token and
//! producing that node.

use vela_ast::nodes::{
    AnyNode,
    Block,
    For,
    Global,
    If,
    Import,
    Jump,
    JumpKind,
    ModifierToken,
    NodeID,
    NodeKind,
    Ret,
    VarAssign,
    While,
};

use super::context::{Context, ContextType};
use super::Parser;
use crate::diagnostics::ParseResult;
use crate::lexer::TokenKind;

impl Parser<'_> {
    /// Parse a single statement.
    ///
    /// ## Errors
    ///
    /// Returns an error if the leading token cannot start a statement.
    pub fn parse_statement(&mut self) -> ParseResult<NodeID> {
        match self.current_token().kind {
            TokenKind::Mut | TokenKind::Ante | TokenKind::Pub => self.parse_var_statement(),
            TokenKind::Identifier if self.peek_token().kind == TokenKind::Assign => {
                self.parse_var_statement()
            }
            TokenKind::If => self.parse_if_chain(TokenKind::If),
            TokenKind::While => self.parse_while_statement(),
            TokenKind::For => self.parse_for_statement(),
            TokenKind::Match => self.parse_match_expression(),
            TokenKind::Return => self.parse_return_statement(),
            TokenKind::Continue | TokenKind::Break => self.parse_jump_statement(),
            TokenKind::Import => self.parse_import_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    /// Parse a colon-delimited, indented block: `:` `Newline` `Indent`
    /// statement* `Unindent`.
    ///
    /// ## Errors
    ///
    /// Returns an error if the block is malformed.
    pub fn parse_block(&mut self) -> ParseResult<NodeID> {
        let start = self.current_token().span.start;
        self.expect(TokenKind::Colon)?;
        self.expect(TokenKind::Newline)?;
        self.expect(TokenKind::Indent)?;

        let mut statements = Vec::new();
        while !self.matches(&[TokenKind::Unindent, TokenKind::EndOfInput]) {
            statements.push(self.parse_statement()?);
        }

        self.expect(TokenKind::Unindent)?;
        let span = self.span_from(start, self.current.span.start);

        Ok(self.alloc_node(
            NodeKind::Statement,
            AnyNode::Block(Block::new(statements, NodeID::placeholder(), span)),
            span,
        ))
    }

    /// Parse a variable declaration (`mut`/`ante`/`pub` prefixed) or a
    /// plain assignment to an existing binding, or, when a lone `ante`
    /// modifier names a binding with no following `=`, an `ante x`
    /// statement referring to an outer-scope binding.
    fn parse_var_statement(&mut self) -> ParseResult<NodeID> {
        let start = self.current_token().span.start;

        let mut modifiers = Vec::new();
        while let Some(token) = self.modifier_token() {
            modifiers.push(token);
            let _ = self.advance();
        }

        let name = self.expect_identifier()?;

        if modifiers.as_slice() == [ModifierToken::Ante] && !self.check(TokenKind::Assign) {
            let span = self.span_from(start, self.current.span.start);
            let id = self.alloc_node(
                NodeKind::Statement,
                AnyNode::Global(Global::new(name, NodeID::placeholder(), span)),
                span,
            );
            self.expect_statement_end()?;
            return Ok(id);
        }

        self.expect(TokenKind::Assign)?;
        let value = self.parse_expression()?;
        let span = self.span_from(start, self.current.span.start);

        let id = self.alloc_node(
            NodeKind::Statement,
            AnyNode::VarAssign(VarAssign::new(name, modifiers, value, NodeID::placeholder(), span)),
            span,
        );
        self.expect_statement_end()?;
        Ok(id)
    }

    /// Parse an `if`/`elif`/`else` chain. `leading` is the keyword that
    /// introduces this link of the chain (`If` for the head, `Elif`
    /// for each subsequent link), folded into a nested `If` whose
    /// `else_branch` is the next link.
    fn parse_if_chain(&mut self, leading: TokenKind) -> ParseResult<NodeID> {
        let start = self.current_token().span.start;
        self.expect(leading)?;

        self.context_stack.push(Context::new(ContextType::Global, None));
        let condition = self.parse_expression()?;
        let then_branch = self.parse_block()?;
        self.context_stack.pop();

        let else_branch = if self.check(TokenKind::Elif) {
            Some(self.parse_if_chain(TokenKind::Elif)?)
        } else if self.check(TokenKind::Else) {
            let _ = self.advance();
            Some(self.parse_block()?)
        } else {
            None
        };

        let span = self.span_from(start, self.current.span.start);
        Ok(self.alloc_node(
            NodeKind::Statement,
            AnyNode::If(If::new(condition, then_branch, else_branch, NodeID::placeholder(), span)),
            span,
        ))
    }

    /// Parse a `while condition: body` loop.
    fn parse_while_statement(&mut self) -> ParseResult<NodeID> {
        let start = self.current_token().span.start;
        self.expect(TokenKind::While)?;

        let condition = self.parse_expression()?;
        self.context_stack.push(Context::new(ContextType::Loop, None));
        let body = self.parse_block()?;
        self.context_stack.pop();

        let span = self.span_from(start, self.current.span.start);
        Ok(self.alloc_node(
            NodeKind::Statement,
            AnyNode::While(While::new(condition, body, NodeID::placeholder(), span)),
            span,
        ))
    }

    /// Parse a `for var in range: body` loop.
    fn parse_for_statement(&mut self) -> ParseResult<NodeID> {
        let start = self.current_token().span.start;
        self.expect(TokenKind::For)?;

        let var_name = self.expect_identifier()?;
        self.expect(TokenKind::In)?;
        let range = self.parse_expression()?;

        self.context_stack.push(Context::new(ContextType::Loop, None));
        let body = self.parse_block()?;
        self.context_stack.pop();

        let span = self.span_from(start, self.current.span.start);
        Ok(self.alloc_node(
            NodeKind::Statement,
            AnyNode::For(For::new(var_name, range, body, NodeID::placeholder(), span)),
            span,
        ))
    }

    /// Parse a `return`, optionally followed by a value.
    fn parse_return_statement(&mut self) -> ParseResult<NodeID> {
        let start = self.current_token().span.start;
        self.expect(TokenKind::Return)?;

        let value = if self.matches(&[TokenKind::Newline, TokenKind::Unindent, TokenKind::EndOfInput]) {
            None
        } else {
            Some(self.parse_expression()?)
        };

        let span = self.span_from(start, self.current.span.start);
        let id = self.alloc_node(
            NodeKind::Statement,
            AnyNode::Ret(Ret::new(value, NodeID::placeholder(), span)),
            span,
        );
        self.expect_statement_end()?;
        Ok(id)
    }

    /// Parse a `continue` or `break`.
    fn parse_jump_statement(&mut self) -> ParseResult<NodeID> {
        let start = self.current_token().span.start;
        let kind = if self.check(TokenKind::Continue) { JumpKind::Continue } else { JumpKind::Break };
        let _ = self.advance();

        let span = self.span_from(start, self.current.span.start);
        let id = self.alloc_node(
            NodeKind::Statement,
            AnyNode::Jump(Jump::new(kind, NodeID::placeholder(), span)),
            span,
        );
        self.expect_statement_end()?;
        Ok(id)
    }

    /// Parse `import path/to/module (as alias)?`.
    fn parse_import_statement(&mut self) -> ParseResult<NodeID> {
        let start = self.current_token().span.start;
        self.expect(TokenKind::Import)?;

        let mut module_parts = vec![self.expect_identifier()?];
        while self.check(TokenKind::Slash) {
            let _ = self.advance();
            module_parts.push(self.expect_identifier()?);
        }

        let alias = if self.check(TokenKind::As) {
            let _ = self.advance();
            Some(self.expect_identifier()?)
        } else {
            None
        };

        let span = self.span_from(start, self.current.span.start);
        let id = self.alloc_node(
            NodeKind::Statement,
            AnyNode::Import(Import::new(module_parts, alias, NodeID::placeholder(), span)),
            span,
        );
        self.expect_statement_end()?;
        Ok(id)
    }

    /// Parse a bare expression used as a statement (e.g. a call like
    /// `print(x)`).
    fn parse_expression_statement(&mut self) -> ParseResult<NodeID> {
        let expr = self.parse_expression()?;
        self.expect_statement_end()?;
        Ok(expr)
    }
}
