//! # Amount Expressions
//!
//! Cost and price fields accept small arithmetic expressions so staff can
//! type `12*350+800` instead of reaching for a calculator.
//!
//! ## Grammar
//! ```text
//! expr   := term (('+' | '-') term)*
//! term   := unary (('*' | '/') unary)*
//! unary  := ('+' | '-') unary | atom
//! atom   := NUMBER | '(' expr ')'
//! NUMBER := digits ['.' [digits]] | '.' digits
//! ```
//!
//! Nothing else is accepted: no identifiers, no function calls, no
//! exponents. Arithmetic is exact decimal ([`rust_decimal`]), so
//! `0.1+0.2` is exactly `0.3`.
//!
//! ## Entry Points
//! - [`evaluate`] is strict and reports exactly what is wrong.
//! - [`evaluate_amount`] is `evaluate` rounded to the centime, for
//!   checking a field before it is submitted.
//! - [`parse_amount`] is how a form field is read: it never fails and
//!   falls back the way the order form always has (see its docs).

use rust_decimal::Decimal;
use std::str::FromStr;

use crate::error::ExpressionError;
use crate::money::Money;

/// Longest accepted expression, in characters.
pub const MAX_EXPRESSION_LEN: usize = 256;

/// Deepest accepted nesting of parentheses and unary signs.
pub const MAX_EXPRESSION_DEPTH: usize = 64;

// =============================================================================
// Lexer
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Number(Decimal),
    Plus,
    Minus,
    Star,
    Slash,
    LParen,
    RParen,
}

impl Token {
    fn symbol(&self) -> String {
        match self {
            Token::Number(value) => value.to_string(),
            Token::Plus => "+".to_string(),
            Token::Minus => "-".to_string(),
            Token::Star => "*".to_string(),
            Token::Slash => "/".to_string(),
            Token::LParen => "(".to_string(),
            Token::RParen => ")".to_string(),
        }
    }
}

/// Splits the input into `(token, char position)` pairs.
fn tokenize(input: &str) -> Result<Vec<(Token, usize)>, ExpressionError> {
    let chars: Vec<char> = input.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let token = match c {
            ' ' | '\t' | '\n' | '\r' => {
                i += 1;
                continue;
            }
            '+' => Token::Plus,
            '-' => Token::Minus,
            '*' => Token::Star,
            '/' => Token::Slash,
            '(' => Token::LParen,
            ')' => Token::RParen,
            '0'..='9' | '.' => {
                let start = i;
                while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                    i += 1;
                }
                let text: String = chars[start..i].iter().collect();
                tokens.push((Token::Number(parse_number(&text, start)?), start));
                continue;
            }
            other => {
                return Err(ExpressionError::UnexpectedCharacter {
                    found: other,
                    position: i,
                })
            }
        };
        tokens.push((token, i));
        i += 1;
    }

    Ok(tokens)
}

fn parse_number(text: &str, position: usize) -> Result<Decimal, ExpressionError> {
    let malformed = || ExpressionError::MalformedNumber {
        text: text.to_string(),
        position,
    };

    let has_digit = text.chars().any(|c| c.is_ascii_digit());
    if !has_digit || text.matches('.').count() > 1 {
        return Err(malformed());
    }

    decimal_literal(text).ok_or_else(malformed)
}

/// Parses `[+-]digits[.digits]`, also accepting `.5` and `5.`.
fn decimal_literal(text: &str) -> Option<Decimal> {
    let (negative, unsigned) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    let unsigned = unsigned.strip_suffix('.').unwrap_or(unsigned);

    let value = if unsigned.starts_with('.') {
        Decimal::from_str(&format!("0{}", unsigned)).ok()?
    } else {
        Decimal::from_str(unsigned).ok()?
    };
    Some(if negative { -value } else { value })
}

// =============================================================================
// Parser / Evaluator
// =============================================================================

/// Recursive-descent evaluator over the token stream.
struct Parser {
    tokens: Vec<(Token, usize)>,
    pos: usize,
    depth: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos).map(|(t, _)| t)
    }

    fn next(&mut self) -> Option<(Token, usize)> {
        let item = self.tokens.get(self.pos).cloned();
        if item.is_some() {
            self.pos += 1;
        }
        item
    }

    fn descend(&mut self) -> Result<(), ExpressionError> {
        self.depth += 1;
        if self.depth > MAX_EXPRESSION_DEPTH {
            return Err(ExpressionError::TooDeep {
                max: MAX_EXPRESSION_DEPTH,
            });
        }
        Ok(())
    }

    fn ascend(&mut self) {
        self.depth -= 1;
    }

    fn expr(&mut self) -> Result<Decimal, ExpressionError> {
        let mut acc = self.term()?;
        loop {
            match self.peek() {
                Some(Token::Plus) => {
                    self.pos += 1;
                    let rhs = self.term()?;
                    acc = acc.checked_add(rhs).ok_or(ExpressionError::Overflow)?;
                }
                Some(Token::Minus) => {
                    self.pos += 1;
                    let rhs = self.term()?;
                    acc = acc.checked_sub(rhs).ok_or(ExpressionError::Overflow)?;
                }
                _ => return Ok(acc),
            }
        }
    }

    fn term(&mut self) -> Result<Decimal, ExpressionError> {
        let mut acc = self.unary()?;
        loop {
            match self.peek() {
                Some(Token::Star) => {
                    self.pos += 1;
                    let rhs = self.unary()?;
                    acc = acc.checked_mul(rhs).ok_or(ExpressionError::Overflow)?;
                }
                Some(Token::Slash) => {
                    self.pos += 1;
                    let rhs = self.unary()?;
                    if rhs.is_zero() {
                        return Err(ExpressionError::DivisionByZero);
                    }
                    acc = acc.checked_div(rhs).ok_or(ExpressionError::Overflow)?;
                }
                _ => return Ok(acc),
            }
        }
    }

    fn unary(&mut self) -> Result<Decimal, ExpressionError> {
        let negate = match self.peek() {
            Some(Token::Plus) => false,
            Some(Token::Minus) => true,
            _ => return self.atom(),
        };

        self.pos += 1;
        self.descend()?;
        let value = self.unary()?;
        self.ascend();
        Ok(if negate { -value } else { value })
    }

    fn atom(&mut self) -> Result<Decimal, ExpressionError> {
        match self.next() {
            Some((Token::Number(value), _)) => Ok(value),
            Some((Token::LParen, open)) => {
                self.descend()?;
                let value = self.expr()?;
                match self.next() {
                    Some((Token::RParen, _)) => {}
                    Some((other, position)) => {
                        return Err(ExpressionError::UnexpectedToken {
                            found: other.symbol(),
                            position,
                        })
                    }
                    None => return Err(ExpressionError::UnclosedParenthesis { position: open }),
                }
                self.ascend();
                Ok(value)
            }
            Some((other, position)) => Err(ExpressionError::UnexpectedToken {
                found: other.symbol(),
                position,
            }),
            None => Err(ExpressionError::UnexpectedEnd),
        }
    }
}

/// Evaluates an arithmetic expression exactly.
///
/// ## Example
/// ```rust
/// use printdesk_core::expression::evaluate;
/// use rust_decimal::Decimal;
///
/// assert_eq!(evaluate("10+5*2").unwrap(), Decimal::from(20));
/// assert_eq!(evaluate("(10+5)*2").unwrap(), Decimal::from(30));
/// assert!(evaluate("10/0").is_err());
/// assert!(evaluate("alert(1)").is_err());
/// ```
pub fn evaluate(input: &str) -> Result<Decimal, ExpressionError> {
    if input.chars().count() > MAX_EXPRESSION_LEN {
        return Err(ExpressionError::TooLong {
            max: MAX_EXPRESSION_LEN,
        });
    }

    let tokens = tokenize(input)?;
    if tokens.is_empty() {
        return Err(ExpressionError::Empty);
    }

    let mut parser = Parser {
        tokens,
        pos: 0,
        depth: 0,
    };
    let value = parser.expr()?;

    if let Some((token, position)) = parser.next() {
        return Err(ExpressionError::UnexpectedToken {
            found: token.symbol(),
            position,
        });
    }
    Ok(value)
}

/// Evaluates an expression strictly and rounds it to the centime.
///
/// A result beyond what `Money` can count is `ExpressionError::Overflow`.
///
/// ```rust
/// use printdesk_core::expression::evaluate_amount;
/// use printdesk_core::Money;
///
/// assert_eq!(evaluate_amount("12*350+800").unwrap(), Money::from_major(5000));
/// assert_eq!(evaluate_amount("10/3").unwrap(), Money::from_minor(333));
/// assert!(evaluate_amount("1500 DZD").is_err());
/// ```
pub fn evaluate_amount(input: &str) -> Result<Money, ExpressionError> {
    let value = evaluate(input)?;
    Money::from_decimal(value).ok_or(ExpressionError::Overflow)
}

// =============================================================================
// Lenient Field Reading
// =============================================================================

fn is_expression_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '+' | '-' | '*' | '/' | '(' | ')' | '.' | ' ')
}

/// JS-style `parseFloat`: the longest leading decimal number.
fn leading_number(input: &str) -> Option<Decimal> {
    let s = input.trim_start();
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;

    for (i, c) in s.char_indices() {
        match c {
            '+' | '-' if i == 0 => {}
            '0'..='9' => seen_digit = true,
            '.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end = i + c.len_utf8();
    }

    if !seen_digit {
        return None;
    }
    decimal_literal(&s[..end])
}

/// Reads a cost or price field as Money. Never fails.
///
/// 1. Blank input reads as zero.
/// 2. Characters other than digits, `+ - * / ( ) .` and spaces are
///    dropped, so `"1500 DZD"` reads as `1500`.
/// 3. The rest is evaluated and rounded to the centime. Division by zero
///    or an out-of-range result reads as zero.
/// 4. If it does not parse, the leading number of the raw input is used,
///    else zero.
///
/// ## Example
/// ```rust
/// use printdesk_core::expression::parse_amount;
/// use printdesk_core::Money;
///
/// assert_eq!(parse_amount("12*350+800"), Money::from_major(5000));
/// assert_eq!(parse_amount("1500 DZD"), Money::from_major(1500));
/// assert_eq!(parse_amount("10/0"), Money::zero());
/// assert_eq!(parse_amount(""), Money::zero());
/// ```
pub fn parse_amount(input: &str) -> Money {
    if input.trim().is_empty() {
        return Money::zero();
    }

    let sanitized: String = input.chars().filter(|&c| is_expression_char(c)).collect();
    if sanitized.trim().is_empty() {
        return Money::zero();
    }

    match evaluate(&sanitized) {
        Ok(value) => Money::from_decimal(value).unwrap_or_default(),
        Err(ExpressionError::DivisionByZero | ExpressionError::Overflow) => Money::zero(),
        Err(_) => leading_number(input)
            .and_then(Money::from_decimal)
            .unwrap_or_default(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
