//! Literal node types.
//!
//! This module provides the leaf literal variants: integer, float, bool,
//! char, and string literals. Integer and float literals carry the
//! sign/size suffix the lexer peeled off the lexeme, encoded as a
//! `NumericTypeTag`; the lexeme itself is kept in string form so a later
//! big-number pass can parse it without loss.

use std::fmt;

use vela_source::types::Span;

use super::{ASTNode, NodeID, NodeKind};

/// The numeric type a literal's suffix resolved to, or the default when
/// no suffix was present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericTypeTag {
    I8,
    I16,
    I32,
    I64,
    Isz,
    U8,
    U16,
    U32,
    U64,
    Usz,
    F16,
    F32,
    F64,
}

impl fmt::Display for NumericTypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::Isz => "isz",
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::Usz => "usz",
            Self::F16 => "f16",
            Self::F32 => "f32",
            Self::F64 => "f64",
        };
        write!(f, "{s}")
    }
}

/// An integer literal (e.g. `42`, `7u8`).
#[derive(Debug, Clone)]
pub struct IntLit {
    /// The lexeme with any size/sign suffix already stripped.
    pub lexeme: String,
    /// The suffix-derived (or default `I32`) type tag.
    pub type_tag: NumericTypeTag,
    pub id: NodeID,
    pub parent: Option<NodeID>,
    pub span: Span,
}

impl IntLit {
    #[must_use]
    pub const fn new(lexeme: String, type_tag: NumericTypeTag, id: NodeID, span: Span) -> Self {
        Self { lexeme, type_tag, id, parent: None, span }
    }
}

impl ASTNode for IntLit {
    fn id(&self) -> NodeID { self.id }

    fn parent(&self) -> Option<NodeID> { self.parent }

    fn with_parent(mut self, parent: NodeID) -> Self {
        self.parent = Some(parent);
        self
    }

    fn kind(&self) -> NodeKind { NodeKind::Expression }

    fn span(&self) -> Span { self.span }
}

impl_visitable!(IntLit, visit_int_lit);

impl fmt::Display for IntLit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.lexeme) }
}

/// A float literal (e.g. `3.14`, `1.0f32`).
#[derive(Debug, Clone)]
pub struct FltLit {
    pub lexeme: String,
    pub type_tag: NumericTypeTag,
    pub id: NodeID,
    pub parent: Option<NodeID>,
    pub span: Span,
}

impl FltLit {
    #[must_use]
    pub const fn new(lexeme: String, type_tag: NumericTypeTag, id: NodeID, span: Span) -> Self {
        Self { lexeme, type_tag, id, parent: None, span }
    }
}

impl ASTNode for FltLit {
    fn id(&self) -> NodeID { self.id }

    fn parent(&self) -> Option<NodeID> { self.parent }

    fn with_parent(mut self, parent: NodeID) -> Self {
        self.parent = Some(parent);
        self
    }

    fn kind(&self) -> NodeKind { NodeKind::Expression }

    fn span(&self) -> Span { self.span }
}

impl_visitable!(FltLit, visit_flt_lit);

impl fmt::Display for FltLit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.lexeme) }
}

/// A boolean literal.
#[derive(Debug, Clone)]
pub struct BoolLit {
    pub value: bool,
    pub id: NodeID,
    pub parent: Option<NodeID>,
    pub span: Span,
}

impl BoolLit {
    #[must_use]
    pub const fn new(value: bool, id: NodeID, span: Span) -> Self {
        Self { value, id, parent: None, span }
    }
}

impl ASTNode for BoolLit {
    fn id(&self) -> NodeID { self.id }

    fn parent(&self) -> Option<NodeID> { self.parent }

    fn with_parent(mut self, parent: NodeID) -> Self {
        self.parent = Some(parent);
        self
    }

    fn kind(&self) -> NodeKind { NodeKind::Expression }

    fn span(&self) -> Span { self.span }
}

impl_visitable!(BoolLit, visit_bool_lit);

impl fmt::Display for BoolLit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.value) }
}

/// A char literal.
#[derive(Debug, Clone)]
pub struct CharLit {
    pub value: char,
    pub id: NodeID,
    pub parent: Option<NodeID>,
    pub span: Span,
}

impl CharLit {
    #[must_use]
    pub const fn new(value: char, id: NodeID, span: Span) -> Self {
        Self { value, id, parent: None, span }
    }
}

impl ASTNode for CharLit {
    fn id(&self) -> NodeID { self.id }

    fn parent(&self) -> Option<NodeID> { self.parent }

    fn with_parent(mut self, parent: NodeID) -> Self {
        self.parent = Some(parent);
        self
    }

    fn kind(&self) -> NodeKind { NodeKind::Expression }

    fn span(&self) -> Span { self.span }
}

impl_visitable!(CharLit, visit_char_lit);

impl fmt::Display for CharLit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "'{}'", self.value) }
}

/// A string literal.
#[derive(Debug, Clone)]
pub struct StrLit {
    pub value: String,
    pub id: NodeID,
    pub parent: Option<NodeID>,
    pub span: Span,
}

impl StrLit {
    #[must_use]
    pub const fn new(value: String, id: NodeID, span: Span) -> Self {
        Self { value, id, parent: None, span }
    }
}

impl ASTNode for StrLit {
    fn id(&self) -> NodeID { self.id }

    fn parent(&self) -> Option<NodeID> { self.parent }

    fn with_parent(mut self, parent: NodeID) -> Self {
        self.parent = Some(parent);
        self
    }

    fn kind(&self) -> NodeKind { NodeKind::Expression }

    fn span(&self) -> Span { self.span }
}

impl_visitable!(StrLit, visit_str_lit);

impl fmt::Display for StrLit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{:?}", self.value) }
}
