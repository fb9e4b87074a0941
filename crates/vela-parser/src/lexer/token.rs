//! Token definitions for the Vela programming language.
//!
//! This module defines the token types and structures used by the lexer.

use std::fmt::{self, Display, Formatter};
use std::ops::Range;

use logos::Logos;

/// The kind of token recognized by the lexer.
///
/// The set is closed: every token the lexer can produce is one of
/// these variants, including the three indentation tokens (`Newline`,
/// `Indent`, `Unindent`) and the non-aborting malformed-literal kinds.
#[derive(Logos, Debug, Eq, PartialEq, Clone, Copy, Hash)]
#[logos(skip r"[ \t\f]+")]
pub enum TokenKind {
    // Identifiers
    #[regex(r"_*[a-zA-Z][a-zA-Z0-9_]*")]
    Identifier,

    // Primitive type keywords
    #[token("i8")]
    I8,
    #[token("i16")]
    I16,
    #[token("i32")]
    I32,
    #[token("i64")]
    I64,
    #[token("isz")]
    Isz,
    #[token("u8")]
    U8,
    #[token("u16")]
    U16,
    #[token("u32")]
    U32,
    #[token("u64")]
    U64,
    #[token("usz")]
    Usz,
    #[token("f16")]
    F16,
    #[token("f32")]
    F32,
    #[token("f64")]
    F64,
    #[token("bool")]
    BoolType,
    #[token("char")]
    CharType,
    #[token("void")]
    Void,

    // Literals
    #[regex(r"[0-9][0-9_]*")]
    IntLiteral,
    #[regex(r"[0-9][0-9_]*\.[0-9][0-9_]*")]
    FloatLiteral,
    #[token("true")]
    True,
    #[token("false")]
    False,

    // String and char literals are hand-rolled by the lexer driver
    // (not by a logos regex) so that an unterminated delimiter can be
    // reported as a `MalformedString`/`MalformedChar` token instead of
    // aborting logos's own match. These two variants exist purely as
    // synthetic targets the driver constructs directly.
    StringLiteral,
    CharLiteral,
    MalformedString,
    MalformedChar,

    // Control-flow keywords
    #[token("if")]
    If,
    #[token("elif")]
    Elif,
    #[token("else")]
    Else,
    #[token("for")]
    For,
    #[token("while")]
    While,
    #[token("do")]
    Do,
    #[token("in")]
    In,
    #[token("match")]
    Match,
    #[token("continue")]
    Continue,
    #[token("break")]
    Break,
    #[token("return")]
    Return,
    #[token("import")]
    Import,
    #[token("where")]
    Where,

    // Data-definition keywords
    #[token("enum")]
    Enum,
    #[token("struct")]
    Struct,
    #[token("trait")]
    Trait,
    #[token("data")]
    Data,
    #[token("fun")]
    Fun,
    #[token("let")]
    Let,
    #[token("ext")]
    Ext,

    // Modifier keywords
    #[token("mut")]
    Mut,
    #[token("ante")]
    Ante,
    #[token("pub")]
    Pub,

    // Operators
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("and")]
    And,
    #[token("or")]
    Or,
    #[token("not")]
    Not,
    #[token("&")]
    Amp,
    #[token("@")]
    At,
    #[token("as")]
    As,

    // Comparisons and assignment
    #[token("=")]
    Assign,
    #[token("==")]
    Eq,
    #[token("!=")]
    NotEq,
    #[token("<")]
    Less,
    #[token("<=")]
    LessEq,
    #[token(">")]
    Greater,
    #[token(">=")]
    GreaterEq,
    #[token("->")]
    Arrow,

    // Delimiters
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(",")]
    Comma,
    #[token(":")]
    Colon,
    #[token(".")]
    Dot,
    #[token("|")]
    Pipe,
    #[token("_")]
    Underscore,

    // Indentation tokens, synthesized by the lexer driver rather than
    // matched by a logos rule.
    Newline,
    Indent,
    Unindent,

    /// An unrecognized byte. Carries the offending byte as the lexeme;
    /// the lexer never aborts on it.
    Invalid,

    /// The end of the input stream. Always the final token produced.
    EndOfInput,
}

impl Display for TokenKind {
    #[allow(clippy::too_many_lines)]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier => write!(f, "<identifier>"),

            Self::I8 => write!(f, "i8"),
            Self::I16 => write!(f, "i16"),
            Self::I32 => write!(f, "i32"),
            Self::I64 => write!(f, "i64"),
            Self::Isz => write!(f, "isz"),
            Self::U8 => write!(f, "u8"),
            Self::U16 => write!(f, "u16"),
            Self::U32 => write!(f, "u32"),
            Self::U64 => write!(f, "u64"),
            Self::Usz => write!(f, "usz"),
            Self::F16 => write!(f, "f16"),
            Self::F32 => write!(f, "f32"),
            Self::F64 => write!(f, "f64"),
            Self::BoolType => write!(f, "bool"),
            Self::CharType => write!(f, "char"),
            Self::Void => write!(f, "void"),

            Self::IntLiteral => write!(f, "<int>"),
            Self::FloatLiteral => write!(f, "<float>"),
            Self::True => write!(f, "true"),
            Self::False => write!(f, "false"),
            Self::StringLiteral => write!(f, "<string>"),
            Self::CharLiteral => write!(f, "<char>"),
            Self::MalformedString => write!(f, "<malformed string>"),
            Self::MalformedChar => write!(f, "<malformed char>"),

            Self::If => write!(f, "if"),
            Self::Elif => write!(f, "elif"),
            Self::Else => write!(f, "else"),
            Self::For => write!(f, "for"),
            Self::While => write!(f, "while"),
            Self::Do => write!(f, "do"),
            Self::In => write!(f, "in"),
            Self::Match => write!(f, "match"),
            Self::Continue => write!(f, "continue"),
            Self::Break => write!(f, "break"),
            Self::Return => write!(f, "return"),
            Self::Import => write!(f, "import"),
            Self::Where => write!(f, "where"),

            Self::Enum => write!(f, "enum"),
            Self::Struct => write!(f, "struct"),
            Self::Trait => write!(f, "trait"),
            Self::Data => write!(f, "data"),
            Self::Fun => write!(f, "fun"),
            Self::Let => write!(f, "let"),
            Self::Ext => write!(f, "ext"),

            Self::Mut => write!(f, "mut"),
            Self::Ante => write!(f, "ante"),
            Self::Pub => write!(f, "pub"),

            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::Percent => write!(f, "%"),
            Self::And => write!(f, "and"),
            Self::Or => write!(f, "or"),
            Self::Not => write!(f, "not"),
            Self::Amp => write!(f, "&"),
            Self::At => write!(f, "@"),
            Self::As => write!(f, "as"),

            Self::Assign => write!(f, "="),
            Self::Eq => write!(f, "=="),
            Self::NotEq => write!(f, "!="),
            Self::Less => write!(f, "<"),
            Self::LessEq => write!(f, "<="),
            Self::Greater => write!(f, ">"),
            Self::GreaterEq => write!(f, ">="),
            Self::Arrow => write!(f, "->"),

            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::LBracket => write!(f, "["),
            Self::RBracket => write!(f, "]"),
            Self::LBrace => write!(f, "{{"),
            Self::RBrace => write!(f, "}}"),
            Self::Comma => write!(f, ","),
            Self::Colon => write!(f, ":"),
            Self::Dot => write!(f, "."),
            Self::Pipe => write!(f, "|"),
            Self::Underscore => write!(f, "_"),

            Self::Newline => write!(f, "<newline>"),
            Self::Indent => write!(f, "<indent>"),
            Self::Unindent => write!(f, "<unindent>"),

            Self::Invalid => write!(f, "<invalid>"),
            Self::EndOfInput => write!(f, "<end of input>"),
        }
    }
}

/// A single lexed token: its kind, source lexeme, and byte span.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Token<'src> {
    /// The kind of token.
    pub kind: TokenKind,
    /// The lexeme (the actual text of the token) from the source code.
    pub lexeme: &'src str,
    /// The span of the token in the source code.
    pub span: Range<usize>,
}

impl<'src> Token<'src> {
    /// Creates a new token.
    #[must_use]
    pub const fn new(kind: TokenKind, lexeme: &'src str, span: Range<usize>) -> Self {
        Self { kind, lexeme, span }
    }

    /// Creates a token with an empty lexeme, for synthetic tokens
    /// (indentation, end-of-input) that do not correspond to source text.
    #[must_use]
    pub const fn with_empty_lexeme(kind: TokenKind, span: Range<usize>) -> Self {
        Self { kind, span, lexeme: "" }
    }

    /// Returns the token kind.
    #[must_use]
    pub const fn kind(&self) -> &TokenKind { &self.kind }

    /// Returns the lexeme.
    #[must_use]
    pub const fn lexeme(&self) -> &'src str { self.lexeme }

    /// Returns the span.
    #[must_use]
    pub const fn span(&self) -> &Range<usize> { &self.span }

    /// Checks if the token is of the specified kind.
    #[must_use]
    pub fn is(&self, kind: TokenKind) -> bool { self.kind == kind }
}

impl Display for Token<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}..{}", self.kind, self.span.start, self.span.end)
    }
}
