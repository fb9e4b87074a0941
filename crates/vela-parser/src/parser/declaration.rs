//! Declaration parsing: `fun`, `data`, `trait`, and `ext`.

use vela_ast::nodes::{
    AnyNode,
    Block,
    DataDecl,
    DataVariant,
    Ext,
    FuncDecl,
    NamedVal,
    NodeID,
    NodeKind,
    Seq,
    Trait,
};

use super::context::{Context, ContextType};
use super::Parser;
use crate::diagnostics::ParseResult;
use crate::lexer::TokenKind;

impl Parser<'_> {
    /// Parse a top-level declaration.
    ///
    /// ## Errors
    ///
    /// Returns an error if the current token cannot start a declaration.
    pub fn parse_declaration(&mut self) -> ParseResult<NodeID> {
        match self.current_token().kind {
            TokenKind::Fun => self.parse_fun_decl(),
            TokenKind::Data => self.parse_data_decl(),
            TokenKind::Trait => self.parse_trait_decl(),
            TokenKind::Ext => self.parse_ext_decl(),
            _ => Err(self.error("expected a declaration (fun, data, trait, or ext)")),
        }
    }

    /// Parse `fun name (: type param)* (-> return_type)? = body`.
    ///
    /// Each parameter is written as its type followed by its name
    /// (`fun f: i32 x = g x`), matching `FuncDecl`'s convention of
    /// storing each parameter as a `NamedVal` whose `value` is a type
    /// node. A nullary function omits the leading colon entirely.
    fn parse_fun_decl(&mut self) -> ParseResult<NodeID> {
        let start = self.current_token().span.start;
        self.expect(TokenKind::Fun)?;
        let name = self.expect_identifier()?;

        let mut params = Vec::new();
        if self.check(TokenKind::Colon) {
            let _ = self.advance();
            loop {
                params.push(self.parse_param()?);
                if !self.starts_type_atom() {
                    break;
                }
            }
        }

        let return_type =
            if self.check(TokenKind::Arrow) { let _ = self.advance(); Some(self.parse_type()?) } else { None };

        self.context_stack.push(Context::new(ContextType::Function, None));
        self.expect(TokenKind::Assign)?;
        let body = self.parse_fun_body()?;
        self.context_stack.pop();

        let span = self.span_from(start, self.current.span.start);
        Ok(self.alloc_node(
            NodeKind::Declaration,
            AnyNode::FuncDecl(FuncDecl::new(name, params, return_type, body, NodeID::placeholder(), span)),
            span,
        ))
    }

    /// Parse one `type name` parameter pair into a `NamedVal`.
    fn parse_param(&mut self) -> ParseResult<NodeID> {
        let start = self.current_token().span.start;
        let ty = self.parse_type()?;
        let name = self.expect_identifier()?;
        let span = self.span_from(start, self.current.span.start);
        Ok(self.alloc_node(NodeKind::Expression, AnyNode::NamedVal(NamedVal::new(name, ty, NodeID::placeholder(), span)), span))
    }

    /// Parse a function body after `=`: either a single expression, or,
    /// when immediately followed by an indented block, a multi-statement
    /// body wrapped in a `Block`.
    fn parse_fun_body(&mut self) -> ParseResult<NodeID> {
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

    /// Parse a bare function signature with no body, used inside `trait`
    /// blocks. The body is filled with an empty placeholder `Seq`.
    fn parse_func_signature(&mut self) -> ParseResult<NodeID> {
        let start = self.current_token().span.start;
        self.expect(TokenKind::Fun)?;
        let name = self.expect_identifier()?;

        let mut params = Vec::new();
        if self.check(TokenKind::Colon) {
            let _ = self.advance();
            loop {
                params.push(self.parse_param()?);
                if !self.starts_type_atom() {
                    break;
                }
            }
        }

        let return_type =
            if self.check(TokenKind::Arrow) { let _ = self.advance(); Some(self.parse_type()?) } else { None };
        self.expect_statement_end()?;

        let body_span = self.span_from(self.current.span.start, self.current.span.start);
        let body = self.alloc_node(
            NodeKind::Statement,
            AnyNode::Seq(Seq::new(Vec::new(), NodeID::placeholder(), body_span)),
            body_span,
        );

        let span = self.span_from(start, self.current.span.start);
        Ok(self.alloc_node(
            NodeKind::Declaration,
            AnyNode::FuncDecl(FuncDecl::new(name, params, return_type, body, NodeID::placeholder(), span)),
            span,
        ))
    }

    /// Parse `data Name typeparam* = Variant ("(" type ("," type)* ")")? ("|" ...)*`.
    fn parse_data_decl(&mut self) -> ParseResult<NodeID> {
        let start = self.current_token().span.start;
        self.expect(TokenKind::Data)?;
        let name = self.expect_identifier()?;

        let mut type_params = Vec::new();
        while self.check(TokenKind::Identifier) && is_type_param_name(self.current_token().lexeme()) {
            type_params.push(self.current_token().lexeme().to_string());
            let _ = self.advance();
        }

        self.expect(TokenKind::Assign)?;

        let mut variants = Vec::new();
        loop {
            let vname = self.expect_identifier()?;
            let mut fields = Vec::new();
            if self.check(TokenKind::LParen) {
                let _ = self.advance();
                if !self.check(TokenKind::RParen) {
                    fields.push(self.parse_type()?);
                    while self.check(TokenKind::Comma) {
                        let _ = self.advance();
                        if self.check(TokenKind::RParen) {
                            break;
                        }
                        fields.push(self.parse_type()?);
                    }
                }
                self.expect(TokenKind::RParen)?;
            }
            variants.push(DataVariant::new(vname, fields));

            if self.check(TokenKind::Pipe) {
                let _ = self.advance();
            } else {
                break;
            }
        }

        let span = self.span_from(start, self.current.span.start);
        let id = self.alloc_node(
            NodeKind::Declaration,
            AnyNode::DataDecl(DataDecl::new(name, type_params, variants, NodeID::placeholder(), span)),
            span,
        );
        self.expect_statement_end()?;
        Ok(id)
    }

    /// Parse a `trait Name:` block of signature-only `fun` declarations.
    fn parse_trait_decl(&mut self) -> ParseResult<NodeID> {
        let start = self.current_token().span.start;
        self.expect(TokenKind::Trait)?;
        let name = self.expect_identifier()?;

        self.expect(TokenKind::Colon)?;
        self.expect(TokenKind::Newline)?;
        self.expect(TokenKind::Indent)?;

        let mut functions = Vec::new();
        while !self.matches(&[TokenKind::Unindent, TokenKind::EndOfInput]) {
            functions.push(self.parse_func_signature()?);
        }

        self.expect(TokenKind::Unindent)?;
        let span = self.span_from(start, self.current.span.start);
        Ok(self.alloc_node(
            NodeKind::Declaration,
            AnyNode::Trait(Trait::new(name, functions, NodeID::placeholder(), span)),
            span,
        ))
    }

    /// Parse an `ext Type (as TraitName)?:` block of fully-bodied `fun`
    /// declarations.
    fn parse_ext_decl(&mut self) -> ParseResult<NodeID> {
        let start = self.current_token().span.start;
        self.expect(TokenKind::Ext)?;
        let target_type = self.parse_type()?;

        let trait_name =
            if self.check(TokenKind::As) { let _ = self.advance(); Some(self.expect_identifier()?) } else { None };

        self.expect(TokenKind::Colon)?;
        self.expect(TokenKind::Newline)?;
        self.expect(TokenKind::Indent)?;

        let mut functions = Vec::new();
        while !self.matches(&[TokenKind::Unindent, TokenKind::EndOfInput]) {
            functions.push(self.parse_fun_decl()?);
        }

        self.expect(TokenKind::Unindent)?;
        let span = self.span_from(start, self.current.span.start);
        Ok(self.alloc_node(
            NodeKind::Declaration,
            AnyNode::Ext(Ext::new(target_type, trait_name, functions, NodeID::placeholder(), span)),
            span,
        ))
    }
}

/// A bare lowercase single-letter identifier in a `data` type-parameter
/// position is a type parameter name (`data List a = ...`).
fn is_type_param_name(name: &str) -> bool {
    let mut chars = name.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_ascii_lowercase())
}
