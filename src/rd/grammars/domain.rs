//! Domain names
//!
//!     The preferred name syntax of RFC 1035 section 2.3.1, with the left recursion of
//!     `<subdomain>` turned around so it can be parsed top down. The tokens are a typed enum
//!     rather than strings, one token per character.
//!
//!     `Subdomain` tries its longer alternative first and falls back with `backtrack`: if
//!     `Label "." Subdomain` fails halfway, the frame is reset and `Label` alone is tried from
//!     the same position.

use crate::rd::builder::{self, Builder, ParseOutput};
use crate::rd::grammars::LexError;
use logos::Logos;
use std::fmt;

pub const GRAMMAR: &str = r#"
    Domain    = Subdomain | " "
    Subdomain = Label "." Subdomain | Label
    Label     = Letter Tail
    Tail      = LetDig Tail | "-" Dashes Tail | ε
    Dashes    = "-" Dashes | LetDig
    LetDig    = Letter | Digit
"#;

/// One character of a domain name.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainToken {
    #[regex("[a-zA-Z]", |lex| lex.slice().chars().next())]
    Letter(char),
    #[regex("[0-9]", |lex| lex.slice().chars().next())]
    Digit(char),
    #[token("-")]
    Hyphen,
    #[token(".")]
    Dot,
    #[token(" ")]
    Space,
}

impl fmt::Display for DomainToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainToken::Letter(c) | DomainToken::Digit(c) => write!(f, "{c}"),
            DomainToken::Hyphen => write!(f, "-"),
            DomainToken::Dot => write!(f, "."),
            DomainToken::Space => write!(f, " "),
        }
    }
}

pub fn lex(source: &str) -> Result<Vec<DomainToken>, LexError> {
    let mut lexer = DomainToken::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        match result {
            Ok(token) => tokens.push(token),
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

pub fn parse(tokens: Vec<DomainToken>) -> ParseOutput<DomainToken> {
    builder::parse(tokens, domain)
}

pub fn domain(b: &mut Builder<DomainToken>) -> bool {
    let mut b = b.enter("Domain");
    let ok = subdomain(&mut b) || b.match_token(&DomainToken::Space);
    b.exit(ok)
}

pub fn subdomain(b: &mut Builder<DomainToken>) -> bool {
    let mut b = b.enter("Subdomain");
    if label(&mut b) && b.match_token(&DomainToken::Dot) && subdomain(&mut b) {
        return b.exit(true);
    }
    b.backtrack();
    let ok = label(&mut b);
    b.exit(ok)
}

pub fn label(b: &mut Builder<DomainToken>) -> bool {
    let mut b = b.enter("Label");
    let ok = letter(&mut b) && tail(&mut b);
    b.exit(ok)
}

/// Letters, digits and hyphens after the first letter, never ending in a hyphen.
pub fn tail(b: &mut Builder<DomainToken>) -> bool {
    let mut b = b.enter("Tail");
    if let_dig(&mut b) {
        let ok = tail(&mut b);
        return b.exit(ok);
    }
    if b.match_token(&DomainToken::Hyphen) && dashes(&mut b) {
        let ok = tail(&mut b);
        return b.exit(ok);
    }
    b.skip();
    b.exit(true)
}

pub fn dashes(b: &mut Builder<DomainToken>) -> bool {
    let mut b = b.enter("Dashes");
    let ok = if b.match_token(&DomainToken::Hyphen) {
        dashes(&mut b)
    } else {
        let_dig(&mut b)
    };
    b.exit(ok)
}

pub fn let_dig(b: &mut Builder<DomainToken>) -> bool {
    let mut b = b.enter("LetDig");
    let ok = letter(&mut b) || digit(&mut b);
    b.exit(ok)
}

pub fn letter(b: &mut Builder<DomainToken>) -> bool {
    let mut b = b.enter("Letter");
    let ok = match b.next() {
        Some(token @ DomainToken::Letter(_)) => {
            b.add(token);
            true
        }
        _ => false,
    };
    b.exit(ok)
}

pub fn digit(b: &mut Builder<DomainToken>) -> bool {
    let mut b = b.enter("Digit");
    let ok = match b.next() {
        Some(token @ DomainToken::Digit(_)) => {
            b.add(token);
            true
        }
        _ => false,
    };
    b.exit(ok)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rd::ParseError;

    fn run(source: &str) -> ParseOutput<DomainToken> {
        parse(lex(source).expect("valid characters"))
    }

    #[test]
    fn test_lex_characters() {
        assert_eq!(
            lex("a-1.").unwrap(),
            vec![
                DomainToken::Letter('a'),
                DomainToken::Hyphen,
                DomainToken::Digit('1'),
                DomainToken::Dot
            ]
        );
        assert!(lex("a_b").is_err());
    }

    #[test]
    fn test_display_round_trips_source() {
        let source = "mail-2.example.com";
        let printed: String = lex(source).unwrap().iter().map(|t| t.to_string()).collect();
        assert_eq!(printed, source);
    }

    #[test]
    fn test_single_letter() {
        let output = run("a");
        assert_eq!(
            output.into_result().unwrap().to_string(),
            "\
Domain
└─ Subdomain
   └─ Label
      └─ Letter
         └─ a
"
        );
    }

    #[test]
    fn test_hyphenated_label() {
        let output = run("a-b");
        assert_eq!(
            output.into_result().unwrap().to_string(),
            "\
Domain
└─ Subdomain
   └─ Label
      ├─ Letter
      │  └─ a
      └─ Tail
         ├─ -
         └─ Dashes
            └─ LetDig
               └─ Letter
                  └─ b
"
        );
    }

    #[test]
    fn test_subdomain_backtracks_to_single_label() {
        let output = run("ab");
        let trace = output.trace.as_ref().unwrap().to_string();
        // First alternative: Label then a missing dot, then Label again after the backtrack
        assert!(trace.contains("<no tokens left> ≠ ."));
        assert_eq!(trace.matches("Label(true)").count(), 2);
        assert!(output.is_ok());
    }

    #[test]
    fn test_trailing_hyphen_is_left_over() {
        assert_eq!(run("ab-").error, Some(ParseError::TokensLeft));
    }

    #[test]
    fn test_trailing_dot_is_left_over() {
        assert_eq!(run("ab.").error, Some(ParseError::TokensLeft));
    }

    #[test]
    fn test_leading_digit_fails() {
        assert_eq!(run("1ab").error, Some(ParseError::ParsingFailed));
    }

    #[test]
    fn test_single_space_is_a_domain() {
        let output = run(" ");
        assert_eq!(output.into_result().unwrap().to_string(), "Domain\n└─  \n");
    }

    #[test]
    fn test_empty_input_fails() {
        let output = run("");
        assert_eq!(output.error, Some(ParseError::ParsingFailed));
        assert_eq!(output.trace.unwrap().label, "Domain(false)");
    }
}
