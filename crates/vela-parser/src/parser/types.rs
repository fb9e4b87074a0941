//! Type expression parsing for the Vela programming language.
//!
//! A type expression is the pre-resolution, syntactic view of a type as
//! written in source: a named type possibly applied to type arguments,
//! a tuple, a function arrow, a pointer, an array, a bare type
//! variable, or a modifier-wrapped type. The analyzer's hash-consed
//! type universe canonicalizes this syntax during name resolution; the
//! parser only has to record the shape as written.

use vela_ast::nodes::{AnyNode, ModifierToken, NodeID, NodeKind, Type, TypeExprKind};
use vela_source::types::Span;

use super::Parser;
use crate::diagnostics::ParseResult;
use crate::lexer::TokenKind;

impl Parser<'_> {
    /// Parse a type expression.
    ///
    /// ```ebnf
    /// type := modifier* type_atom
    /// ```
    ///
    /// ## Errors
    ///
    /// Returns an error if the current token cannot start a type expression.
    pub fn parse_type(&mut self) -> ParseResult<NodeID> {
        if let Some(token) = self.modifier_token() {
            let start = self.current_token().span.start;
            let _ = self.advance();
            let target = self.parse_type()?;
            let span = self.span_from(start, self.current.span.start);
            let id = self.alloc_node(
                NodeKind::Type,
                AnyNode::Type(Type::new(
                    TypeExprKind::Modifier { token, target },
                    NodeID::placeholder(),
                    span,
                )),
                span,
            );
            return Ok(id);
        }

        self.parse_type_arrow()
    }

    /// Parse a (possibly function) type, handling the right-associative
    /// `->` arrow: `i32 -> i32 -> bool` is `i32 -> (i32 -> bool)`.
    fn parse_type_arrow(&mut self) -> ParseResult<NodeID> {
        let start = self.current_token().span.start;
        let first = self.parse_type_atom()?;

        if self.check(TokenKind::Arrow) {
            let _ = self.advance();
            let return_type = self.parse_type_arrow()?;
            let end = self.current.span.start;
            let span = self.span_from(start, end);
            return Ok(self.alloc_node(
                NodeKind::Type,
                AnyNode::Type(Type::new(
                    TypeExprKind::Function { params: vec![first], return_type },
                    NodeID::placeholder(),
                    span,
                )),
                span,
            ));
        }

        Ok(first)
    }

    /// Parse a single type atom: named type, tuple type, pointer type,
    /// array type, or a bare type variable.
    fn parse_type_atom(&mut self) -> ParseResult<NodeID> {
        let start = self.current_token().span.start;

        match self.current_token().kind {
            TokenKind::LParen => {
                let _ = self.advance();
                let mut elements = Vec::new();
                if !self.check(TokenKind::RParen) {
                    elements.push(self.parse_type()?);
                    while self.check(TokenKind::Comma) {
                        let _ = self.advance();
                        if self.check(TokenKind::RParen) {
                            break;
                        }
                        elements.push(self.parse_type()?);
                    }
                }
                self.expect(TokenKind::RParen)?;
                let span = self.span_from(start, self.current.span.start);

                if elements.len() == 1 {
                    return Ok(elements[0]);
                }

                Ok(self.alloc_node(
                    NodeKind::Type,
                    AnyNode::Type(Type::new(
                        TypeExprKind::Tuple { elements },
                        NodeID::placeholder(),
                        span,
                    )),
                    span,
                ))
            }
            TokenKind::Amp => {
                let _ = self.advance();
                let pointee = self.parse_type_atom()?;
                let span = self.span_from(start, self.current.span.start);
                Ok(self.alloc_node(
                    NodeKind::Type,
                    AnyNode::Type(Type::new(
                        TypeExprKind::Ptr { pointee },
                        NodeID::placeholder(),
                        span,
                    )),
                    span,
                ))
            }
            TokenKind::LBracket => {
                let _ = self.advance();
                let element = self.parse_type()?;
                self.expect(TokenKind::RBracket)?;
                let span = self.span_from(start, self.current.span.start);
                Ok(self.alloc_node(
                    NodeKind::Type,
                    AnyNode::Type(Type::new(
                        TypeExprKind::Array { element },
                        NodeID::placeholder(),
                        span,
                    )),
                    span,
                ))
            }
            _ => self.parse_named_type(),
        }
    }

    /// Parse a named type, optionally applied to type arguments (e.g.
    /// `i32`, `List i32`, `Pair a b`), or a lowercase single-letter
    /// type variable.
    fn parse_named_type(&mut self) -> ParseResult<NodeID> {
        let start = self.current_token().span.start;
        let name = self.type_name()?;

        // A type variable is always nullary: `List a b` applies `List`
        // to two one-letter type variables, not `a` applied to `b`.
        if is_type_var_name(&name) {
            let span = self.span_from(start, self.current.span.start);
            return Ok(self.alloc_node(
                NodeKind::Type,
                AnyNode::Type(Type::new(
                    TypeExprKind::TypeVar { name },
                    NodeID::placeholder(),
                    span,
                )),
                span,
            ));
        }

        let mut args = Vec::new();
        while self.starts_type_atom() {
            args.push(self.parse_type_atom()?);
        }

        let span = self.span_from(start, self.current.span.start);
        Ok(self.alloc_node(
            NodeKind::Type,
            AnyNode::Type(Type::new(TypeExprKind::Named { name, args }, NodeID::placeholder(), span)),
            span,
        ))
    }

    /// Whether the current token can start a bare type atom in argument
    /// position (used to greedily consume type-application arguments
    /// without a delimiter, e.g. `List i32`).
    pub(super) fn starts_type_atom(&self) -> bool {
        matches!(
            self.current_token().kind,
            TokenKind::Identifier
                | TokenKind::I8
                | TokenKind::I16
                | TokenKind::I32
                | TokenKind::I64
                | TokenKind::Isz
                | TokenKind::U8
                | TokenKind::U16
                | TokenKind::U32
                | TokenKind::U64
                | TokenKind::Usz
                | TokenKind::F16
                | TokenKind::F32
                | TokenKind::F64
                | TokenKind::BoolType
                | TokenKind::CharType
                | TokenKind::Void
                | TokenKind::LParen
                | TokenKind::LBracket
                | TokenKind::Amp
        )
    }

    /// Consume the current token as a type name, accepting both
    /// primitive type keywords and plain identifiers.
    fn type_name(&mut self) -> ParseResult<String> {
        let name = match self.current_token().kind {
            TokenKind::Identifier
            | TokenKind::I8
            | TokenKind::I16
            | TokenKind::I32
            | TokenKind::I64
            | TokenKind::Isz
            | TokenKind::U8
            | TokenKind::U16
            | TokenKind::U32
            | TokenKind::U64
            | TokenKind::Usz
            | TokenKind::F16
            | TokenKind::F32
            | TokenKind::F64
            | TokenKind::BoolType
            | TokenKind::CharType
            | TokenKind::Void => self.current_token().lexeme().to_string(),
            _ => return Err(self.error("expected a type name")),
        };
        let _ = self.advance();
        Ok(name)
    }

    /// Consume a leading modifier token (`mut`, `ante`, `pub`), if present.
    pub(super) fn modifier_token(&self) -> Option<ModifierToken> {
        match self.current_token().kind {
            TokenKind::Mut => Some(ModifierToken::Mut),
            TokenKind::Ante => Some(ModifierToken::Ante),
            TokenKind::Pub => Some(ModifierToken::Pub),
            _ => None,
        }
    }
}

/// A bare lowercase single-letter name with no type arguments is
/// treated as a type variable, matching the `'t` convention in the
/// data model's `List 't` example once quote-stripping is accounted
/// for (the lexer has no separate tick token, so a single lowercase
/// letter identifier fills the same role).
fn is_type_var_name(name: &str) -> bool {
    let mut chars = name.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_ascii_lowercase())
}
