//! Arithmetic expressions
//!
//!     Tokens are plain strings, as the lexer hands out the source slices. The grammar is
//!     right recursive so that it can be parsed top down; the ε alternatives of `Expr'` and
//!     `Term'` use `skip`, which keeps them out of the parse tree while the trace tree still
//!     shows them.
//!
//!     `Expr'` only takes its ε alternative when the expression is really over, i.e. the next
//!     token is a closing parenthesis or there is none. Anything else after a complete term
//!     is an error rather than trailing input.

use crate::rd::builder::{self, Builder, ParseOutput};
use crate::rd::grammars::LexError;
use logos::Logos;
use once_cell::sync::Lazy;
use regex::Regex;

pub const GRAMMAR: &str = r#"
    Expr   = Term Expr'
    Expr'  = "+" Expr | "-" Expr | ε
    Term   = Factor Term'
    Term'  = "*" Term | "/" Term | ε
    Factor = "(" Expr ")" | "-" Factor | Number
"#;

static NUMBER_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d*\.\d+|\d+)$").unwrap());

#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(skip r"\s+")]
enum Lexeme {
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("(")]
    OpenParen,
    #[token(")")]
    CloseParen,
    #[regex(r"\d*\.\d+|\d+")]
    Number,
}

/// Split an expression into operator, parenthesis and number tokens. Whitespace is dropped.
pub fn lex(source: &str) -> Result<Vec<String>, LexError> {
    let mut lexer = Lexeme::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        match result {
            Ok(_) => tokens.push(lexer.slice().to_string()),
            Err(()) => {
                return Err(LexError::InvalidToken {
                    text: lexer.slice().to_string(),
                    offset: lexer.span().start,
                })
            }
        }
    }

    Ok(tokens)
}

/// Parse a token sequence as an `Expr`.
pub fn parse(tokens: Vec<String>) -> ParseOutput<String> {
    builder::parse(tokens, expr)
}

pub fn expr(b: &mut Builder<String>) -> bool {
    let mut b = b.enter("Expr");
    let ok = term(&mut b) && expr_prime(&mut b);
    b.exit(ok)
}

pub fn expr_prime(b: &mut Builder<String>) -> bool {
    let mut b = b.enter("Expr'");
    let ok = if b.match_token("+") || b.match_token("-") {
        expr(&mut b)
    } else if b.check_or_end(")", 1) {
        b.skip();
        true
    } else {
        false
    };
    b.exit(ok)
}

pub fn term(b: &mut Builder<String>) -> bool {
    let mut b = b.enter("Term");
    let ok = factor(&mut b) && term_prime(&mut b);
    b.exit(ok)
}

pub fn term_prime(b: &mut Builder<String>) -> bool {
    let mut b = b.enter("Term'");
    let ok = if b.match_token("*") || b.match_token("/") {
        term(&mut b)
    } else {
        b.skip();
        true
    };
    b.exit(ok)
}

pub fn factor(b: &mut Builder<String>) -> bool {
    let mut b = b.enter("Factor");
    let ok = if b.match_token("(") {
        expr(&mut b) && b.match_token(")")
    } else if b.match_token("-") {
        factor(&mut b)
    } else {
        number(&mut b)
    };
    b.exit(ok)
}

pub fn number(b: &mut Builder<String>) -> bool {
    let mut b = b.enter("Number");
    let ok = match b.next() {
        Some(token) if NUMBER_REGEX.is_match(&token) => {
            b.add(token);
            true
        }
        _ => false,
    };
    b.exit(ok)
}
