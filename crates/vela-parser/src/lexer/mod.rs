//! Lexer module for the Vela programming language.
//!
//! This module is responsible for converting source code into tokens.
//! It uses the `logos` crate for the closed set of keyword, operator and
//! literal tokens, and layers indentation tracking, comment stripping, and
//! hand-rolled string/char scanning on top.
//!
//! The lexer handles:
//! - Indentation tracking: one `Indent` per step increase, one `Unindent`
//!   per step decrease, a single `Newline` when the level is unchanged
//! - `~` line comments and `` ` `` block comments
//! - String and char literals, falling back to a `Malformed*` token on an
//!   unterminated delimiter instead of aborting
//! - Unrecognized bytes reported as `Invalid` tokens rather than hard errors

mod rules;
mod token;

use std::collections::VecDeque;
use std::sync::Arc;

use logos::Lexer as LogosLexer;
pub use rules::*;
pub use token::*;
use vela_source::types::{FileID, Position, SourceSpan, Span};

use crate::diagnostics::{DiagnosticReporter, LexError};

/// Indentation-aware lexer for Vela source.
#[derive(Debug)]
pub struct Lexer<'src> {
    /// The inner logos lexer, driving the keyword/operator/literal rules
    inner: LogosLexer<'src, TokenKind>,
    /// Source code
    source: &'src str,
    /// File identifier
    file_id: FileID,
    /// Diagnostic reporter for error reporting
    diagnostic_reporter: Arc<DiagnosticReporter>,
    /// Indentation stack, in steps of `INDENT_WIDTH`. Always starts at `[0]`.
    indent_stack: Vec<usize>,
    /// Queue of pending tokens to return, used when a single line transition
    /// produces more than one `Unindent`
    pending_tokens: VecDeque<Token<'src>>,
    /// Whether the next token should be preceded by an indentation check
    at_line_start: bool,
    /// Whether this is the very first line, which never gets an indentation
    /// token of its own
    start_of_file: bool,
    /// Depth of open `(`/`[`/`{` brackets, which suppresses indentation
    /// tracking
    in_brackets: usize,
    /// Current line (1-indexed)
    line: usize,
    /// Current column (1-indexed)
    column: usize,
    /// Current byte offset
    byte_offset: usize,
    /// Whether the terminal `EndOfInput` token has already been produced
    emitted_eof: bool,
}

impl<'src> Lexer<'src> {
    /// Create a new lexer for the given source
    #[must_use]
    pub fn new(
        source: &'src str,
        file_id: FileID,
        diagnostic_reporter: Arc<DiagnosticReporter>,
    ) -> Self {
        Self {
            inner: LogosLexer::new(source),
            source,
            file_id,
            diagnostic_reporter,
            indent_stack: vec![0],
            pending_tokens: VecDeque::new(),
            at_line_start: true,
            start_of_file: true,
            in_brackets: 0,
            line: 1,
            column: 1,
            byte_offset: 0,
            emitted_eof: false,
        }
    }

    /// Returns the current source code being lexed
    #[must_use]
    pub const fn source(&self) -> &'src str { self.source }

    /// Returns the file ID
    #[must_use]
    pub const fn file_id(&self) -> FileID { self.file_id }

    /// Returns the diagnostic reporter
    #[must_use]
    pub const fn diagnostic_reporter(&self) -> &Arc<DiagnosticReporter> {
        &self.diagnostic_reporter
    }

    /// Returns the current line number
    #[must_use]
    pub const fn line(&self) -> usize { self.line }

    /// Returns the current column number
    #[must_use]
    pub const fn column(&self) -> usize { self.column }

    /// Returns the current byte offset
    #[must_use]
    pub const fn byte_offset(&self) -> usize { self.byte_offset }

    /// Returns whether the lexer is currently at the start of a line
    #[must_use]
    pub const fn is_at_line_start(&self) -> bool { self.at_line_start }

    /// Returns the current indentation stack
    #[must_use]
    pub fn indent_stack(&self) -> &[usize] { &self.indent_stack }

    /// Returns the number of open brackets
    #[must_use]
    pub const fn in_brackets(&self) -> usize { self.in_brackets }

    fn peek_byte(&self) -> Option<u8> { self.source.as_bytes().get(self.byte_offset).copied() }

    fn zero_width_span(&self) -> std::ops::Range<usize> { self.byte_offset..self.byte_offset }

    /// Advances the driver's own position bookkeeping and the inner logos
    /// cursor by `bytes`, used whenever the driver itself decides to skip
    /// text (indentation, comments, newlines, hand-scanned literals).
    fn advance_raw(&mut self, bytes: usize) {
        let text = &self.source[self.byte_offset..self.byte_offset + bytes];
        for ch in text.chars() {
            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.inner.bump(bytes);
        self.byte_offset += bytes;
    }

    /// Updates position bookkeeping after the inner logos lexer has already
    /// advanced its own cursor to `new_offset`.
    fn sync_tracking(&mut self, new_offset: usize) {
        let text = &self.source[self.byte_offset..new_offset];
        for ch in text.chars() {
            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.byte_offset = new_offset;
    }

    fn push_error(&mut self, error: LexError) {
        let mut reporter_clone = (*self.diagnostic_reporter).clone();
        reporter_clone.add_diagnostic(error.into());
        self.diagnostic_reporter = Arc::new(reporter_clone);
    }

    fn push_warning(&mut self, message: String) {
        let pos = Position::new(self.line, self.column, self.byte_offset);
        let span = SourceSpan::new(pos, pos, self.file_id);
        let mut reporter_clone = (*self.diagnostic_reporter).clone();
        let _ = reporter_clone.warning(message, span);
        self.diagnostic_reporter = Arc::new(reporter_clone);
    }

    /// Skips one comment starting at the current position, if any.
    /// Returns whether a comment was consumed.
    fn skip_comment(&mut self) -> bool {
        let rest = &self.source[self.byte_offset..];

        if let Some(stripped) = rest.strip_prefix('~') {
            let len = stripped.find('\n').unwrap_or(stripped.len());
            self.advance_raw(1 + len);
            true
        } else if let Some(stripped) = rest.strip_prefix('`') {
            let len = stripped.find('`').map_or(stripped.len(), |i| i + 1);
            self.advance_raw(1 + len);
            true
        } else {
            false
        }
    }

    /// Processes indentation at the start of a line: skips blank and
    /// comment-only lines, then compares the real line's indentation level
    /// against the stack, queuing the resulting `Indent`/`Unindent`/`Newline`
    /// token(s). Returns `false` if end of file was reached while only
    /// blank or comment-only lines remained.
    fn handle_line_start(&mut self) -> bool {
        loop {
            while self.skip_comment() {}

            let rest = &self.source[self.byte_offset..];
            let (level, bytes, mixed) = scan_indentation(rest);
            let after_indent = &rest[bytes..];

            if mixed {
                self.push_warning("indentation mixes tabs and spaces".to_string());
            }

            if is_blank_or_comment(after_indent) {
                self.advance_raw(bytes);
                if self.skip_comment() {
                    continue;
                }
                if self.peek_byte() == Some(b'\n') {
                    self.advance_raw(1);
                    continue;
                }
                return false;
            }

            self.advance_raw(bytes);

            if self.start_of_file {
                self.start_of_file = false;
                if level > 0 {
                    self.indent_stack.push(level);
                }
                return true;
            }

            let span = self.zero_width_span();
            let top = *self.indent_stack.last().unwrap_or(&0);

            match level.cmp(&top) {
                std::cmp::Ordering::Greater => {
                    self.indent_stack.push(level);
                    self.pending_tokens.push_back(Token::with_empty_lexeme(TokenKind::Indent, span));
                }
                std::cmp::Ordering::Less => {
                    while *self.indent_stack.last().unwrap_or(&0) > level {
                        let _ = self.indent_stack.pop();
                        self.pending_tokens
                            .push_back(Token::with_empty_lexeme(TokenKind::Unindent, span.clone()));
                    }
                    if *self.indent_stack.last().unwrap_or(&0) != level {
                        self.push_warning(format!(
                            "indentation at column {level} does not match any enclosing level"
                        ));
                        self.indent_stack.push(level);
                    }
                }
                std::cmp::Ordering::Equal => {
                    self.pending_tokens.push_back(Token::with_empty_lexeme(TokenKind::Newline, span));
                }
            }

            return true;
        }
    }

    /// Hand-scans a string or char literal starting at the current
    /// position, if the next byte is a quote delimiter. Never aborts: an
    /// unterminated literal is reported and returned as a `Malformed*`
    /// token rather than failing the lex.
    fn scan_string_or_char(&mut self) -> Option<Token<'src>> {
        let delim = match self.peek_byte()? {
            b'"' => '"',
            b'\'' => '\'',
            _ => return None,
        };
        let (well_formed_kind, malformed_kind) = if delim == '"' {
            (TokenKind::StringLiteral, TokenKind::MalformedString)
        } else {
            (TokenKind::CharLiteral, TokenKind::MalformedChar)
        };

        let start = self.byte_offset;
        let rest = &self.source[start + 1..];
        let mut escaped = false;
        let mut closed_at = None;

        for (i, ch) in rest.char_indices() {
            if escaped {
                escaped = false;
                continue;
            }
            match ch {
                '\\' => escaped = true,
                '\n' => break,
                c if c == delim => {
                    closed_at = Some(i + 1);
                    break;
                }
                _ => {}
            }
        }

        let (total_len, kind) = match closed_at {
            Some(len_after_open) => (1 + len_after_open, well_formed_kind),
            None => {
                let len = rest.find('\n').unwrap_or(rest.len());
                self.push_error(LexError::invalid_syntax(
                    "unterminated string or char literal".to_string(),
                    SourceSpan::from(Span::new(start, start + 1 + len)),
                ));
                (1 + len, malformed_kind)
            }
        };

        let lexeme = &self.source[start..start + total_len];
        self.advance_raw(total_len);
        Some(Token::new(kind, lexeme, start..self.byte_offset))
    }

    /// Gets the next token from the inner logos lexer, reporting an
    /// unrecognized byte as `Invalid` rather than failing the lex.
    fn next_logos_token(&mut self) -> Option<Token<'src>> {
        let result = self.inner.next()?;
        let span = self.inner.span();
        let lexeme = &self.source[span.start..span.end];
        self.sync_tracking(span.end);

        match result {
            Ok(kind) => Some(Token::new(kind, lexeme, span)),
            Err(()) => {
                self.push_error(LexError::invalid_character(
                    self.line,
                    self.column,
                    lexeme.chars().next().unwrap_or('\u{0}'),
                ));
                Some(Token::new(TokenKind::Invalid, lexeme, span))
            }
        }
    }

    fn track_brackets(&mut self, token: &Token<'src>) {
        match token.kind {
            TokenKind::LParen | TokenKind::LBracket | TokenKind::LBrace => self.in_brackets += 1,
            TokenKind::RParen | TokenKind::RBracket | TokenKind::RBrace => {
                self.in_brackets = self.in_brackets.saturating_sub(1);
            }
            _ => {}
        }
    }

    /// Produces the final tokens once the source is exhausted: one
    /// `Unindent` per level still open, then a single `EndOfInput`.
    fn finish(&mut self) -> Option<Token<'src>> {
        if self.indent_stack.len() > 1 {
            let _ = self.indent_stack.pop();
            return Some(Token::with_empty_lexeme(TokenKind::Unindent, self.zero_width_span()));
        }
        if self.emitted_eof {
            None
        } else {
            self.emitted_eof = true;
            Some(Token::with_empty_lexeme(TokenKind::EndOfInput, self.zero_width_span()))
        }
    }
}

impl<'src> Iterator for Lexer<'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(token) = self.pending_tokens.pop_front() {
            return Some(token);
        }

        if self.at_line_start && self.in_brackets == 0 {
            self.at_line_start = false;
            if !self.handle_line_start() {
                return self.finish();
            }
            if let Some(token) = self.pending_tokens.pop_front() {
                return Some(token);
            }
        }

        loop {
            if self.skip_comment() {
                continue;
            }
            if self.peek_byte() == Some(b'\n') {
                self.advance_raw(1);
                if self.in_brackets == 0 {
                    self.at_line_start = true;
                    return self.next();
                }
                continue;
            }
            break;
        }

        if self.byte_offset >= self.source.len() {
            return self.finish();
        }

        if let Some(token) = self.scan_string_or_char() {
            self.track_brackets(&token);
            return Some(token);
        }

        let token = self.next_logos_token()?;
        self.track_brackets(&token);
        Some(token)
    }
}
