//! The canonical, hash-consed type representation.
//!
//! This is the semantic notion of a type — distinct from
//! `vela_ast::nodes::Type`, the syntactic pre-resolution view of a type
//! expression as written in source (see that type's doc comment). Every
//! `Ty` value here is reachable only through a `TypeId` handle minted by
//! the `TypeUniverse`; there is no public constructor.

use std::fmt;

use vela_ast::nodes::ModifierToken;

/// Handle into a `TypeUniverse`'s arena.
///
/// A newtype index, mirroring the `NodeID`-as-table-index discipline the
/// AST arena already uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeId(u32);

impl TypeId {
    pub(super) const fn new(index: u32) -> Self { Self(index) }

    #[must_use]
    pub const fn index(self) -> u32 { self.0 }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "ty:{}", self.0) }
}

/// Primitive integer and float tags, mirroring the lexer's primitive
/// type keywords one-to-one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveTag {
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
    Bool,
    Char,
    Void,
}

impl PrimitiveTag {
    /// Bit width used by `size_in_bits`. `bool` reports 8 rather than 1;
    /// `void` has no representation and reports 0.
    #[must_use]
    pub const fn bits(self) -> u32 {
        match self {
            Self::I8 | Self::U8 | Self::Bool => 8,
            Self::I16 | Self::U16 | Self::F16 => 16,
            Self::I32 | Self::U32 | Self::F32 | Self::Char => 32,
            Self::I64 | Self::U64 | Self::F64 => 64,
            Self::Isz | Self::Usz => usize::BITS,
            Self::Void => 0,
        }
    }
}

impl fmt::Display for PrimitiveTag {
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
            Self::Bool => "bool",
            Self::Char => "char",
            Self::Void => "void",
        };
        write!(f, "{s}")
    }
}

/// The fields of a named record or union type, filled in after the stub
/// handle returned by `get_named` is created.
#[derive(Debug, Clone)]
pub struct NamedTypeFields {
    pub fields: Vec<TypeId>,
    pub is_union: bool,
}

/// A canonical type value, addressed only through a `TypeId`.
#[derive(Debug, Clone)]
pub enum Ty {
    Primitive(PrimitiveTag),
    Pointer(TypeId),
    Array { inner: TypeId, len: usize },
    Tuple(Vec<TypeId>),
    Function { params: Vec<TypeId>, return_type: TypeId },
    TypeVar(String),
    /// A `data`-declared name. Fields live in a `RefCell` so a stub
    /// handle returned before the declaration's body is known can later
    /// be filled in place by `create_named`.
    Named { name: String, fields: std::cell::RefCell<Option<NamedTypeFields>> },
    Modifier { token: ModifierToken, inner: TypeId },
}

impl fmt::Display for Ty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive(tag) => write!(f, "{tag}"),
            Self::Pointer(inner) => write!(f, "Ptr({inner})"),
            Self::Array { inner, len } => write!(f, "[{inner}; {len}]"),
            Self::Tuple(elems) => {
                write!(f, "(")?;
                for (i, e) in elems.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{e}")?;
                }
                write!(f, ")")
            }
            Self::Function { params, return_type } => {
                write!(f, "(")?;
                for (i, p) in params.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{p}")?;
                }
                write!(f, ") -> {return_type}")
            }
            Self::TypeVar(name) => write!(f, "{name}"),
            Self::Named { name, .. } => write!(f, "{name}"),
            Self::Modifier { token, inner } => write!(f, "{token} {inner}"),
        }
    }
}
