//! Pattern parsing for `match` branches.
//!
//! The closed node set has no dedicated pattern hierarchy: a pattern is
//! an ordinary expression node, reinterpreted by the pattern compiler.
//! This module parses that restricted grammar directly rather than
//! delegating to [`super::expressions`], since patterns admit shapes a
//! general expression never does (a bare `_` wildcard, a name that
//! *introduces* a binding rather than referencing one).

use vela_ast::nodes::{
    AnyNode,
    Block,
    BoolLit,
    CharLit,
    FltLit,
    IntLit,
    Match,
    MatchBranch,
    NamedVal,
    NodeID,
    NodeKind,
    NumericTypeTag,
    StrLit,
    Tuple,
    Var,
};

use super::Parser;
use crate::diagnostics::ParseResult;
use crate::lexer::{TokenKind, unquote};

impl Parser<'_> {
    /// Parse a `match subject: branch*` expression.
    ///
    /// ```ebnf
    /// match_expr   := "match" expression ":" Newline Indent match_branch+ Unindent
    /// match_branch := pattern ("if" expression)? "->" block
    /// ```
    ///
    /// ## Errors
    ///
    /// Returns an error on a malformed `match` expression.
    pub fn parse_match_expression(&mut self) -> ParseResult<NodeID> {
        let start = self.current_token().span.start;
        self.expect(TokenKind::Match)?;
        let subject = self.parse_expression()?;
        self.expect(TokenKind::Colon)?;
        self.expect(TokenKind::Newline)?;
        self.expect(TokenKind::Indent)?;

        self.context_stack.push(super::Context::new(super::ContextType::Match, None));

        let mut branches = Vec::new();
        while !self.matches(&[TokenKind::Unindent, TokenKind::EndOfInput]) {
            branches.push(self.parse_match_branch()?);
        }

        self.context_stack.pop();
        self.expect(TokenKind::Unindent)?;
        let span = self.span_from(start, self.current.span.start);

        Ok(self.alloc_node(
            NodeKind::Expression,
            AnyNode::Match(Match::new(subject, branches, NodeID::placeholder(), span)),
            span,
        ))
    }

    /// Parse a single `pattern (if guard)? -> body` branch.
    fn parse_match_branch(&mut self) -> ParseResult<NodeID> {
        let start = self.current_token().span.start;
        let pattern = self.parse_pattern()?;

        let guard = if self.check(TokenKind::If) {
            let _ = self.advance();
            Some(self.parse_expression()?)
        } else {
            None
        };

        self.expect(TokenKind::Arrow)?;
        let body = self.parse_branch_body()?;
        let span = self.span_from(start, self.current.span.start);

        Ok(self.alloc_node(
            NodeKind::Pattern,
            AnyNode::MatchBranch(MatchBranch::new(pattern, guard, body, NodeID::placeholder(), span)),
            span,
        ))
    }

    /// Parse a branch body after `->`: either a single expression, or,
    /// when immediately followed by an indented block, a multi-statement
    /// body wrapped in a `Block`. Mirrors `fun`'s body convention, since
    /// a match branch has no leading colon of its own to hand off to
    /// the statement-level `parse_block`.
    fn parse_branch_body(&mut self) -> ParseResult<NodeID> {
        if self.check(TokenKind::Newline) {
            let start = self.current_token().span.start;
            let _ = self.advance();
            self.expect(TokenKind::Indent)?;

            let mut statements = Vec::new();
            while !self.matches(&[TokenKind::Unindent, TokenKind::EndOfInput]) {
                statements.push(self.parse_statement()?);
            }

            self.expect(TokenKind::Unindent)?;
            let span = self.span_from(start, self.current.span.start);
            return Ok(self.alloc_node(
                NodeKind::Statement,
                AnyNode::Block(Block::new(statements, NodeID::placeholder(), span)),
                span,
            ));
        }

        let body = self.parse_expression()?;
        self.expect_statement_end()?;
        Ok(body)
    }

    /// Parse a single match pattern: a literal, a wildcard, a binder, a
    /// union constructor pattern, or a tuple pattern.
    ///
    /// ## Errors
    ///
    /// Returns an error if the current token cannot start a pattern.
    pub fn parse_pattern(&mut self) -> ParseResult<NodeID> {
        let start = self.current_token().span.start;

        match self.current_token().kind {
            TokenKind::Underscore => {
                let _ = self.advance();
                let span = self.span_from(start, self.current.span.start);
                Ok(self.alloc_node(
                    NodeKind::Pattern,
                    AnyNode::Var(Var::new("_".to_string(), NodeID::placeholder(), span)),
                    span,
                ))
            }
            TokenKind::Identifier => self.parse_binding_or_constructor_pattern(),
            TokenKind::IntLiteral => {
                let lexeme = self.current_token().lexeme().replace('_', "");
                let _ = self.advance();
                let span = self.span_from(start, self.current.span.start);
                Ok(self.alloc_node(
                    NodeKind::Pattern,
                    AnyNode::IntLit(IntLit::new(lexeme, NumericTypeTag::I32, NodeID::placeholder(), span)),
                    span,
                ))
            }
            TokenKind::FloatLiteral => {
                let lexeme = self.current_token().lexeme().replace('_', "");
                let _ = self.advance();
                let span = self.span_from(start, self.current.span.start);
                Ok(self.alloc_node(
                    NodeKind::Pattern,
                    AnyNode::FltLit(FltLit::new(lexeme, NumericTypeTag::F64, NodeID::placeholder(), span)),
                    span,
                ))
            }
            TokenKind::True | TokenKind::False => {
                let value = self.check(TokenKind::True);
                let _ = self.advance();
                let span = self.span_from(start, self.current.span.start);
                Ok(self.alloc_node(
                    NodeKind::Pattern,
                    AnyNode::BoolLit(BoolLit::new(value, NodeID::placeholder(), span)),
                    span,
                ))
            }
            TokenKind::StringLiteral | TokenKind::MalformedString => {
                let value = unquote(self.current_token()).to_string();
                let _ = self.advance();
                let span = self.span_from(start, self.current.span.start);
                Ok(self.alloc_node(
                    NodeKind::Pattern,
                    AnyNode::StrLit(StrLit::new(value, NodeID::placeholder(), span)),
                    span,
                ))
            }
            TokenKind::CharLiteral | TokenKind::MalformedChar => {
                let value = unquote(self.current_token()).chars().next().unwrap_or('\0');
                let _ = self.advance();
                let span = self.span_from(start, self.current.span.start);
                Ok(self.alloc_node(
                    NodeKind::Pattern,
                    AnyNode::CharLit(CharLit::new(value, NodeID::placeholder(), span)),
                    span,
                ))
            }
            TokenKind::LParen => self.parse_tuple_pattern(),
            _ => Err(self.error("expected a pattern")),
        }
    }

    /// Parse an identifier pattern: a bare catch-all binder (`x`), or,
    /// when followed directly by `(`, a union constructor pattern
    /// (`Cons(head, tail)`) built as a `NamedVal` whose payload is a
    /// tuple pattern.
    fn parse_binding_or_constructor_pattern(&mut self) -> ParseResult<NodeID> {
        let start = self.current_token().span.start;
        let name = self.expect_identifier()?;

        if self.check(TokenKind::LParen) {
            let payload = self.parse_tuple_pattern()?;
            let span = self.span_from(start, self.current.span.start);
            return Ok(self.alloc_node(
                NodeKind::Pattern,
                AnyNode::NamedVal(NamedVal::new(name, payload, NodeID::placeholder(), span)),
                span,
            ));
        }

        let span = self.span_from(start, self.current.span.start);
        Ok(self.alloc_node(NodeKind::Pattern, AnyNode::Var(Var::new(name, NodeID::placeholder(), span)), span))
    }

    /// Parse `(pattern, pattern, ...)`: a tuple-destructuring pattern,
    /// or a constructor's payload pattern list.
    fn parse_tuple_pattern(&mut self) -> ParseResult<NodeID> {
        let start = self.current_token().span.start;
        self.expect(TokenKind::LParen)?;

        let mut elements = Vec::new();
        if !self.check(TokenKind::RParen) {
            elements.push(self.parse_pattern()?);
            while self.check(TokenKind::Comma) {
                let _ = self.advance();
                if self.check(TokenKind::RParen) {
                    break;
                }
                elements.push(self.parse_pattern()?);
            }
        }
        self.expect(TokenKind::RParen)?;
        let span = self.span_from(start, self.current.span.start);

        Ok(self.alloc_node(NodeKind::Pattern, AnyNode::Tuple(Tuple::new(elements, NodeID::placeholder(), span)), span))
    }
}
