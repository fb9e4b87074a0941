//! Expression parsing.
//!
//! Precedence climbing over the closed operator set, bottoming out in
//! literals, names, parenthesized/tuple/array expressions, and the
//! `Name(payload)` shape reused by `NamedVal` for both keyword-style
//! construction and (reinterpreted by [`super::pattern`]) union
//! constructor patterns.

use vela_ast::nodes::{
    AnyNode,
    Array,
    BinOp,
    BinOpKind,
    BoolLit,
    CharLit,
    FltLit,
    IntLit,
    NamedVal,
    NodeID,
    NodeKind,
    NumericTypeTag,
    StrLit,
    Tuple,
    TypeCast,
    UnOp,
    UnOpKind,
    Var,
};

use super::Parser;
use crate::diagnostics::ParseResult;
use crate::lexer::{TokenKind, unquote};

impl Parser<'_> {
    /// Parse a full expression.
    ///
    /// ## Errors
    ///
    /// Returns an error if the current token cannot start an expression.
    pub fn parse_expression(&mut self) -> ParseResult<NodeID> { self.parse_binary(0) }

    /// Precedence-climbing binary operator parser. Lower numbers bind
    /// looser; `or` is loosest, `*`/`/`/`%` tightest.
    fn parse_binary(&mut self, min_prec: u8) -> ParseResult<NodeID> {
        let start = self.current_token().span.start;
        let mut lhs = self.parse_unary()?;

        while let Some((op, prec)) = binop_for(self.current_token().kind) {
            if prec < min_prec {
                break;
            }
            let _ = self.advance();
            let rhs = self.parse_binary(prec + 1)?;
            let span = self.span_from(start, self.current.span.start);
            lhs = self.alloc_node(
                NodeKind::Expression,
                AnyNode::BinOp(BinOp::new(op, lhs, rhs, NodeID::placeholder(), span)),
                span,
            );
        }

        Ok(lhs)
    }

    /// Parse a unary operator applied to a unary expression, bottoming
    /// out in a cast/postfix expression.
    fn parse_unary(&mut self) -> ParseResult<NodeID> {
        let start = self.current_token().span.start;
        let op = match self.current_token().kind {
            TokenKind::Minus => Some(UnOpKind::Neg),
            TokenKind::Not => Some(UnOpKind::Not),
            TokenKind::At => Some(UnOpKind::Deref),
            TokenKind::Amp => Some(UnOpKind::AddrOf),
            _ => None,
        };

        if let Some(op) = op {
            let _ = self.advance();
            let operand = self.parse_unary()?;
            let span = self.span_from(start, self.current.span.start);
            return Ok(self.alloc_node(
                NodeKind::Expression,
                AnyNode::UnOp(UnOp::new(op, operand, NodeID::placeholder(), span)),
                span,
            ));
        }

        self.parse_cast()
    }

    /// Parse a postfix expression optionally followed by one or more
    /// `as Type` casts (e.g. `x as i64 as f32`).
    fn parse_cast(&mut self) -> ParseResult<NodeID> {
        let start = self.current_token().span.start;
        let mut expr = self.parse_primary()?;

        while self.check(TokenKind::As) {
            let _ = self.advance();
            let target_type = self.parse_type()?;
            let span = self.span_from(start, self.current.span.start);
            expr = self.alloc_node(
                NodeKind::Expression,
                AnyNode::TypeCast(TypeCast::new(
                    expr,
                    target_type,
                    NodeID::placeholder(),
                    span,
                )),
                span,
            );
        }

        Ok(expr)
    }

    /// Parse a primary expression: a literal, a name (bare or applied
    /// to a trailing tuple as `Name(args)`), a parenthesized or tuple
    /// expression, or an array literal.
    pub(super) fn parse_primary(&mut self) -> ParseResult<NodeID> {
        let start = self.current_token().span.start;

        match self.current_token().kind {
            TokenKind::IntLiteral => self.parse_int_lit(),
            TokenKind::FloatLiteral => self.parse_flt_lit(),
            TokenKind::True => {
                let _ = self.advance();
                let span = self.span_from(start, self.current.span.start);
                Ok(self.alloc_node(
                    NodeKind::Expression,
                    AnyNode::BoolLit(BoolLit::new(true, NodeID::placeholder(), span)),
                    span,
                ))
            }
            TokenKind::False => {
                let _ = self.advance();
                let span = self.span_from(start, self.current.span.start);
                Ok(self.alloc_node(
                    NodeKind::Expression,
                    AnyNode::BoolLit(BoolLit::new(false, NodeID::placeholder(), span)),
                    span,
                ))
            }
            TokenKind::StringLiteral | TokenKind::MalformedString => {
                let value = unquote(self.current_token()).to_string();
                let _ = self.advance();
                let span = self.span_from(start, self.current.span.start);
                Ok(self.alloc_node(
                    NodeKind::Expression,
                    AnyNode::StrLit(StrLit::new(value, NodeID::placeholder(), span)),
                    span,
                ))
            }
            TokenKind::CharLiteral | TokenKind::MalformedChar => {
                let raw = unquote(self.current_token());
                let value = raw.chars().next().unwrap_or('\0');
                let _ = self.advance();
                let span = self.span_from(start, self.current.span.start);
                Ok(self.alloc_node(
                    NodeKind::Expression,
                    AnyNode::CharLit(CharLit::new(value, NodeID::placeholder(), span)),
                    span,
                ))
            }
            TokenKind::LParen => self.parse_tuple_or_paren(),
            TokenKind::LBracket => self.parse_array(),
            TokenKind::Match => self.parse_match_expression(),
            TokenKind::Identifier | TokenKind::Underscore => self.parse_name_or_named_val(),
            _ => Err(self.error("expected an expression")),
        }
    }

    fn parse_int_lit(&mut self) -> ParseResult<NodeID> {
        let start = self.current_token().span.start;
        let lexeme = self.current_token().lexeme().replace('_', "");
        let _ = self.advance();
        let type_tag = self.consume_int_suffix();
        let span = self.span_from(start, self.current.span.start);
        Ok(self.alloc_node(
            NodeKind::Expression,
            AnyNode::IntLit(IntLit::new(lexeme, type_tag, NodeID::placeholder(), span)),
            span,
        ))
    }

    fn parse_flt_lit(&mut self) -> ParseResult<NodeID> {
        let start = self.current_token().span.start;
        let lexeme = self.current_token().lexeme().replace('_', "");
        let _ = self.advance();
        let type_tag = self.consume_flt_suffix();
        let span = self.span_from(start, self.current.span.start);
        Ok(self.alloc_node(
            NodeKind::Expression,
            AnyNode::FltLit(FltLit::new(lexeme, type_tag, NodeID::placeholder(), span)),
            span,
        ))
    }

    /// A numeric literal's size/sign suffix lexes as a separate
    /// primitive-type keyword token immediately following the digits
    /// (e.g. `7i8` is `IntLiteral("7")` then `I8`); fold it into the
    /// literal's type tag here and consume it, defaulting to `I32`
    /// when no suffix keyword follows.
    fn consume_int_suffix(&mut self) -> NumericTypeTag {
        let tag = match self.current_token().kind {
            TokenKind::I8 => NumericTypeTag::I8,
            TokenKind::I16 => NumericTypeTag::I16,
            TokenKind::I32 => NumericTypeTag::I32,
            TokenKind::I64 => NumericTypeTag::I64,
            TokenKind::Isz => NumericTypeTag::Isz,
            TokenKind::U8 => NumericTypeTag::U8,
            TokenKind::U16 => NumericTypeTag::U16,
            TokenKind::U32 => NumericTypeTag::U32,
            TokenKind::U64 => NumericTypeTag::U64,
            TokenKind::Usz => NumericTypeTag::Usz,
            _ => return NumericTypeTag::I32,
        };
        let _ = self.advance();
        tag
    }

    /// Same as [`Self::consume_int_suffix`] but for float literals,
    /// defaulting to `F64`.
    fn consume_flt_suffix(&mut self) -> NumericTypeTag {
        let tag = match self.current_token().kind {
            TokenKind::F16 => NumericTypeTag::F16,
            TokenKind::F32 => NumericTypeTag::F32,
            TokenKind::F64 => NumericTypeTag::F64,
            _ => return NumericTypeTag::F64,
        };
        let _ = self.advance();
        tag
    }

    /// Parse `(expr)`, `()`, or `(expr, expr, ...)`.
    fn parse_tuple_or_paren(&mut self) -> ParseResult<NodeID> {
        let start = self.current_token().span.start;
        let _ = self.advance();

        let mut elements = Vec::new();
        let mut trailing_comma = false;
        if !self.check(TokenKind::RParen) {
            elements.push(self.parse_expression()?);
            while self.check(TokenKind::Comma) {
                let _ = self.advance();
                trailing_comma = true;
                if self.check(TokenKind::RParen) {
                    break;
                }
                elements.push(self.parse_expression()?);
                trailing_comma = false;
            }
        }
        self.expect(TokenKind::RParen)?;
        let span = self.span_from(start, self.current.span.start);

        if elements.len() == 1 && !trailing_comma {
            return Ok(elements[0]);
        }

        Ok(self.alloc_node(
            NodeKind::Expression,
            AnyNode::Tuple(Tuple::new(elements, NodeID::placeholder(), span)),
            span,
        ))
    }

    /// Parse `[expr, expr, ...]`.
    fn parse_array(&mut self) -> ParseResult<NodeID> {
        let start = self.current_token().span.start;
        let _ = self.advance();

        let mut elements = Vec::new();
        if !self.check(TokenKind::RBracket) {
            elements.push(self.parse_expression()?);
            while self.check(TokenKind::Comma) {
                let _ = self.advance();
                if self.check(TokenKind::RBracket) {
                    break;
                }
                elements.push(self.parse_expression()?);
            }
        }
        self.expect(TokenKind::RBracket)?;
        let span = self.span_from(start, self.current.span.start);

        Ok(self.alloc_node(
            NodeKind::Expression,
            AnyNode::Array(Array::new(elements, NodeID::placeholder(), span)),
            span,
        ))
    }

    /// Parse a bare name reference, or, when immediately followed by
    /// `(`, a `NamedVal` applying that name to a tuple payload (e.g.
    /// `Cons(x, xs)`, `print(x)`).
    fn parse_name_or_named_val(&mut self) -> ParseResult<NodeID> {
        let start = self.current_token().span.start;
        let name = self.expect_identifier()?;

        if self.check(TokenKind::LParen) {
            let payload = self.parse_tuple_or_paren_as_payload()?;
            let span = self.span_from(start, self.current.span.start);
            return Ok(self.alloc_node(
                NodeKind::Expression,
                AnyNode::NamedVal(NamedVal::new(name, payload, NodeID::placeholder(), span)),
                span,
            ));
        }

        let span = self.span_from(start, self.current.span.start);
        Ok(self.alloc_node(
            NodeKind::Expression,
            AnyNode::Var(Var::new(name, NodeID::placeholder(), span)),
            span,
        ))
    }

    /// Like [`Self::parse_tuple_or_paren`], but always yields a `Tuple`
    /// node (even for a single argument) since it is used as a
    /// constructor/call payload, never as grouping parens.
    fn parse_tuple_or_paren_as_payload(&mut self) -> ParseResult<NodeID> {
        let start = self.current_token().span.start;
        let _ = self.advance();

        let mut elements = Vec::new();
        if !self.check(TokenKind::RParen) {
            elements.push(self.parse_expression()?);
            while self.check(TokenKind::Comma) {
                let _ = self.advance();
                if self.check(TokenKind::RParen) {
                    break;
                }
                elements.push(self.parse_expression()?);
            }
        }
        self.expect(TokenKind::RParen)?;
        let span = self.span_from(start, self.current.span.start);

        Ok(self.alloc_node(
            NodeKind::Expression,
            AnyNode::Tuple(Tuple::new(elements, NodeID::placeholder(), span)),
            span,
        ))
    }
}

/// Binary operator precedence table. Higher number binds tighter.
fn binop_for(kind: TokenKind) -> Option<(BinOpKind, u8)> {
    Some(match kind {
        TokenKind::Or => (BinOpKind::Or, 1),
        TokenKind::And => (BinOpKind::And, 2),
        TokenKind::Eq => (BinOpKind::Eq, 3),
        TokenKind::NotEq => (BinOpKind::NotEq, 3),
        TokenKind::Less => (BinOpKind::Less, 4),
        TokenKind::LessEq => (BinOpKind::LessEq, 4),
        TokenKind::Greater => (BinOpKind::Greater, 4),
        TokenKind::GreaterEq => (BinOpKind::GreaterEq, 4),
        TokenKind::Plus => (BinOpKind::Add, 5),
        TokenKind::Minus => (BinOpKind::Sub, 5),
        TokenKind::Star => (BinOpKind::Mul, 6),
        TokenKind::Slash => (BinOpKind::Div, 6),
        TokenKind::Percent => (BinOpKind::Mod, 6),
        _ => return None,
    })
}
