//! Combination expression parser
//!
//! Parses expressions such as `(f1 & f2) | !f3` into a [`FilterTree`].
//!
//! Grammar:
//! ```text
//! expr       := or_expr
//! or_expr    := and_expr ( '|' and_expr )*
//! and_expr   := not_expr ( '&' not_expr )*
//! not_expr   := '!' not_expr | primary
//! primary    := IDENT | '(' expr ')'
//! IDENT      := [A-Za-z0-9_]+
//! ```
//!
//! Parsing runs in four iterative passes: tokenize, check adjacent token
//! pairs, convert to postfix (shunting-yard), build the tree from postfix.

use crate::error::{DslSyntaxError, Result};
use crate::token::{tokenize, Token, TokenKind};
use crate::tree::FilterTree;

/// Default maximum expression length, in characters
pub const DEFAULT_MAX_LENGTH: usize = 4096;

/// Turns a combination expression into a filter tree
pub trait Parser {
    fn parse(&self, expression: &str) -> Result<FilterTree>;
}

/// Parser for the `& | ! ( )` combination language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DslParser {
    max_length: usize,
}

impl Default for DslParser {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_MAX_LENGTH,
        }
    }
}

impl DslParser {
    /// Create a parser with the default length limit
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum accepted expression length, in characters
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }
}

impl Parser for DslParser {
    fn parse(&self, expression: &str) -> Result<FilterTree> {
        let length = expression.chars().count();
        if length > self.max_length {
            return Err(DslSyntaxError::ExpressionTooLong {
                length,
                max: self.max_length,
            });
        }

        let tokens = tokenize(expression)?;
        if tokens.is_empty() {
            return Err(DslSyntaxError::EmptyExpression);
        }

        check_sequence(&tokens)?;
        let postfix = to_postfix(&tokens)?;
        let tree = build_tree(&postfix)?;

        log::debug!("Parsed '{}' into {}", expression.trim(), tree);
        Ok(tree)
    }
}

/// Reject token pairs the grammar cannot produce, with a positioned message.
fn check_sequence(tokens: &[Token]) -> Result<()> {
    let mut previous: Option<&Token> = None;

    for current in tokens {
        match current.kind {
            TokenKind::Identifier => {
                if let Some(prev) = previous.filter(|p| p.kind.ends_operand()) {
                    return Err(unexpected(
                        format!("identifier '{}' cannot follow '{}'", current, prev),
                        current,
                    ));
                }
            }
            TokenKind::And | TokenKind::Or => match previous {
                Some(prev) if prev.kind.is_binary() => {
                    return Err(unexpected(
                        format!("binary operator '{}' cannot be followed by '{}'", prev, current),
                        current,
                    ));
                }
                Some(prev) if prev.kind == TokenKind::Not => {
                    return Err(unexpected(
                        format!("NOT operator cannot be followed by binary operator '{}'", current),
                        current,
                    ));
                }
                Some(prev) if prev.kind.ends_operand() => {}
                _ => {
                    return Err(unexpected(
                        format!("binary operator '{}' requires a left operand", current),
                        current,
                    ));
                }
            },
            TokenKind::Not | TokenKind::LeftParen => {
                if let Some(prev) = previous.filter(|p| p.kind.ends_operand()) {
                    return Err(unexpected(
                        format!("'{}' cannot follow '{}'", current, prev),
                        current,
                    ));
                }
            }
            TokenKind::RightParen => {
                if let Some(prev) = previous.filter(|p| !p.kind.ends_operand()) {
                    return Err(unexpected(
                        format!("')' cannot follow '{}'", prev),
                        current,
                    ));
                }
            }
        }
        previous = Some(current);
    }

    if let Some(last) = previous.filter(|t| !t.kind.ends_operand() && t.kind != TokenKind::LeftParen) {
        return Err(unexpected(
            format!("expression cannot end with operator '{}'", last),
            last,
        ));
    }
    Ok(())
}

fn unexpected(message: String, token: &Token) -> DslSyntaxError {
    DslSyntaxError::UnexpectedToken {
        message,
        position: token.position,
    }
}

/// Shunting-yard conversion from infix to postfix.
///
/// `!` is pushed unconditionally (right-associative prefix); `&` and `|`
/// are left-associative and pop operators of greater or equal precedence.
fn to_postfix(tokens: &[Token]) -> Result<Vec<&Token>> {
    let mut output: Vec<&Token> = Vec::with_capacity(tokens.len());
    let mut operators: Vec<&Token> = Vec::new();

    for token in tokens {
        match token.kind {
            TokenKind::Identifier => output.push(token),
            TokenKind::Not | TokenKind::LeftParen => operators.push(token),
            TokenKind::And | TokenKind::Or => {
                while let Some(top) = operators.last() {
                    if top.kind == TokenKind::LeftParen
                        || top.kind.precedence() < token.kind.precedence()
                    {
                        break;
                    }
                    output.extend(operators.pop());
                }
                operators.push(token);
            }
            TokenKind::RightParen => loop {
                match operators.pop() {
                    Some(top) if top.kind == TokenKind::LeftParen => break,
                    Some(top) => output.push(top),
                    None => {
                        return Err(DslSyntaxError::MismatchedParentheses {
                            paren: ')',
                            position: token.position,
                        })
                    }
                }
            },
        }
    }

    while let Some(top) = operators.pop() {
        if top.kind == TokenKind::LeftParen {
            return Err(DslSyntaxError::MismatchedParentheses {
                paren: '(',
                position: top.position,
            });
        }
        output.push(top);
    }

    Ok(output)
}

/// Build the tree from postfix tokens with an operand stack
fn build_tree(postfix: &[&Token]) -> Result<FilterTree> {
    let mut stack: Vec<FilterTree> = Vec::new();

    for token in postfix {
        match token.kind {
            TokenKind::Identifier => stack.push(FilterTree::identifier(token.text.as_str())),
            TokenKind::Not => {
                let operand = stack.pop().ok_or(DslSyntaxError::MissingOperand {
                    operator: "NOT",
                    expected: 1,
                    position: token.position,
                })?;
                stack.push(FilterTree::not(operand));
            }
            TokenKind::And | TokenKind::Or => {
                let (Some(right), Some(left)) = (stack.pop(), stack.pop()) else {
                    return Err(DslSyntaxError::MissingOperand {
                        operator: if token.kind == TokenKind::And { "AND" } else { "OR" },
                        expected: 2,
                        position: token.position,
                    });
                };
                stack.push(if token.kind == TokenKind::And {
                    FilterTree::and(left, right)
                } else {
                    FilterTree::or(left, right)
                });
            }
            TokenKind::LeftParen | TokenKind::RightParen => {
                unreachable!("parentheses never reach postfix output")
            }
        }
    }

    match stack.len() {
        1 => Ok(stack.remove(0)),
        n => Err(DslSyntaxError::Malformed(n)),
    }
}
