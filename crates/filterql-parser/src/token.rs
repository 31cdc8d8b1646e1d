//! Tokenizer for combination expressions

use crate::error::{DslSyntaxError, Result};
use std::fmt;

/// Kind of a DSL token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Identifier,
    And,
    Or,
    Not,
    LeftParen,
    RightParen,
}

impl TokenKind {
    /// Binding strength used by the shunting-yard pass; parentheses have none
    pub fn precedence(&self) -> u8 {
        match self {
            TokenKind::Not => 3,
            TokenKind::And => 2,
            TokenKind::Or => 1,
            TokenKind::Identifier | TokenKind::LeftParen | TokenKind::RightParen => 0,
        }
    }

    pub fn is_binary(&self) -> bool {
        matches!(self, TokenKind::And | TokenKind::Or)
    }

    /// Identifier or closing parenthesis, i.e. something that ends an operand
    pub fn ends_operand(&self) -> bool {
        matches!(self, TokenKind::Identifier | TokenKind::RightParen)
    }

    fn from_char(c: char) -> Option<TokenKind> {
        match c {
            '&' => Some(TokenKind::And),
            '|' => Some(TokenKind::Or),
            '!' => Some(TokenKind::Not),
            '(' => Some(TokenKind::LeftParen),
            ')' => Some(TokenKind::RightParen),
            _ => None,
        }
    }
}

/// A token with its source text and 0-based character position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub position: usize,
}

impl Token {
    fn new(kind: TokenKind, text: impl Into<String>, position: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            position,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Identifier characters: `[A-Za-z0-9_]`
fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Split an expression into tokens.
///
/// Fails on the first character outside the DSL alphabet. An empty token
/// list is returned for whitespace-only input; the caller decides how to
/// report it.
pub fn tokenize(expression: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut start = 0;

    for (position, c) in expression.chars().enumerate() {
        if is_identifier_char(c) {
            if current.is_empty() {
                start = position;
            }
            current.push(c);
            continue;
        }

        if !current.is_empty() {
            tokens.push(Token::new(
                TokenKind::Identifier,
                std::mem::take(&mut current),
                start,
            ));
        }

        if c.is_whitespace() {
            continue;
        }

        match TokenKind::from_char(c) {
            Some(kind) => tokens.push(Token::new(kind, c.to_string(), position)),
            None => {
                return Err(DslSyntaxError::InvalidCharacter {
                    character: c,
                    position,
                })
            }
        }
    }

    if !current.is_empty() {
        tokens.push(Token::new(TokenKind::Identifier, current, start));
    }

    log::trace!("Tokenized {} token(s)", tokens.len());
    Ok(tokens)
}
