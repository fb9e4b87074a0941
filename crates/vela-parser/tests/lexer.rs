//! Tests for the lexer module.

use std::sync::Arc;

use vela_parser::diagnostics::DiagnosticReporter;
use vela_parser::lexer::{Lexer, TokenKind};
use vela_source::types::SourceManager;

fn setup_lexer(source: &str) -> Lexer<'_> {
    let mut source_manager = SourceManager::new();
    let file_id = source_manager.add_file("test.vl".to_string(), source.to_string());
    let diagnostic_reporter = Arc::new(DiagnosticReporter::new(Arc::new(source_manager)));

    Lexer::new(source, file_id, diagnostic_reporter)
}

#[test]
fn test_simple_tokens() {
    let source = "x = 42";
    let mut lexer = setup_lexer(source);

    let token1 = lexer.next().unwrap();
    assert_eq!(token1.kind, TokenKind::Identifier);
    assert_eq!(token1.lexeme, "x");

    let token2 = lexer.next().unwrap();
    assert_eq!(token2.kind, TokenKind::Assign);
    assert_eq!(token2.lexeme, "=");

    let token3 = lexer.next().unwrap();
    assert_eq!(token3.kind, TokenKind::IntLiteral);
    assert_eq!(token3.lexeme, "42");

    let token4 = lexer.next().unwrap();
    assert_eq!(token4.kind, TokenKind::EndOfInput);
}

#[test]
fn test_indentation() {
    let source = "fun test:\n    x = 1\n    if true:\n        y = 2\n    z = 3\n";
    let lexer = setup_lexer(source);
    let mut tokens = Vec::new();

    for token in lexer {
        if token.kind == TokenKind::EndOfInput {
            break;
        }

        tokens.push(token);
    }

    let indent_count = tokens.iter().filter(|t| t.kind == TokenKind::Indent).count();
    let unindent_count = tokens.iter().filter(|t| t.kind == TokenKind::Unindent).count();

    // One indent for the function body, one for the if block.
    assert_eq!(indent_count, 2);
    assert_eq!(unindent_count, 2);
}

#[test]
fn test_newline_between_same_level_statements() {
    let source = "x = 1\ny = 2\n";
    let lexer = setup_lexer(source);
    let tokens: Vec<TokenKind> = lexer.map(|t| t.kind).collect();

    let newline_count = tokens.iter().filter(|&&k| k == TokenKind::Newline).count();
    assert_eq!(newline_count, 1);
}

#[test]
fn test_no_newlines_inside_brackets() {
    let source = "x = (\n    1 +\n    2\n)";
    let lexer = setup_lexer(source);
    let mut tokens = Vec::new();

    for token in lexer {
        if token.kind == TokenKind::EndOfInput {
            break;
        }

        tokens.push(token.kind);
    }

    let newlines = tokens.iter().filter(|&&k| k == TokenKind::Newline).count();
    assert_eq!(newlines, 0);
}

#[test]
fn test_string_literal() {
    let source = "x = \"hello world\"";
    let mut lexer = setup_lexer(source);

    let _ = lexer.next();
    let _ = lexer.next();

    let token = lexer.next().unwrap();
    assert_eq!(token.kind, TokenKind::StringLiteral);
    assert_eq!(token.lexeme, "\"hello world\"");
}

#[test]
fn test_unterminated_string_is_malformed_not_fatal() {
    let source = "x = \"hello";
    let mut lexer = setup_lexer(source);

    let _ = lexer.next();
    let _ = lexer.next();

    let token = lexer.next().unwrap();
    assert_eq!(token.kind, TokenKind::MalformedString);
}

#[test]
fn test_char_literal() {
    let source = "x = 'a'";
    let mut lexer = setup_lexer(source);

    let _ = lexer.next();
    let _ = lexer.next();

    let token = lexer.next().unwrap();
    assert_eq!(token.kind, TokenKind::CharLiteral);
    assert_eq!(token.lexeme, "'a'");
}

#[test]
fn test_line_comment_is_skipped() {
    let source = "x = 1 ~ this is a comment\ny = 2\n";
    let lexer = setup_lexer(source);
    let tokens: Vec<TokenKind> = lexer.map(|t| t.kind).collect();

    assert!(!tokens.contains(&TokenKind::Invalid));
    assert_eq!(tokens.iter().filter(|&&k| k == TokenKind::Identifier).count(), 2);
}

#[test]
fn test_block_comment_is_skipped() {
    let source = "x = `a block comment` 1\n";
    let mut lexer = setup_lexer(source);

    let token1 = lexer.next().unwrap();
    assert_eq!(token1.kind, TokenKind::Identifier);
    let token2 = lexer.next().unwrap();
    assert_eq!(token2.kind, TokenKind::Assign);
    let token3 = lexer.next().unwrap();
    assert_eq!(token3.kind, TokenKind::IntLiteral);
    assert_eq!(token3.lexeme, "1");
}

#[test]
fn test_keywords() {
    let source = "fun data trait ext match if else for while return import";
    let mut lexer = setup_lexer(source);

    let kinds: Vec<TokenKind> = [
        TokenKind::Fun,
        TokenKind::Data,
        TokenKind::Trait,
        TokenKind::Ext,
        TokenKind::Match,
        TokenKind::If,
        TokenKind::Else,
        TokenKind::For,
        TokenKind::While,
        TokenKind::Return,
        TokenKind::Import,
    ]
    .to_vec();

    for expected in kinds {
        let token = lexer.next().unwrap();
        assert_eq!(token.kind, expected);
    }
}

#[test]
fn test_pipe_is_its_own_token() {
    let source = "Nil | Cons";
    let mut lexer = setup_lexer(source);

    let token1 = lexer.next().unwrap();
    assert_eq!(token1.kind, TokenKind::Identifier);

    let token2 = lexer.next().unwrap();
    assert_eq!(token2.kind, TokenKind::Pipe);
    assert_eq!(token2.lexeme, "|");

    let token3 = lexer.next().unwrap();
    assert_eq!(token3.kind, TokenKind::Identifier);
}

#[test]
fn test_invalid_byte_does_not_abort_lexing() {
    let source = "x = # 1";
    let lexer = setup_lexer(source);
    let tokens: Vec<TokenKind> = lexer.map(|t| t.kind).collect();

    assert!(tokens.contains(&TokenKind::Invalid));
    assert!(tokens.contains(&TokenKind::EndOfInput));
}
