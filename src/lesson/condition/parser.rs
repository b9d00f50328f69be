//! Condition expression parser
//!
//! Parses expressions like:
//! - `age < 18`
//! - `is_student`
//! - `score > 80 and attendance > 75`
//! - `not (age >= 65 or is_student == true)`
//!
//! `not` binds tightest, then `and`, then `or`.

use super::ast::{CompareOp, Expression, Literal};
use crate::error::ConditionError;

#[derive(Debug, Clone, PartialEq)]
enum TokenKind {
    Ident(String),
    Number(f64),
    Str(String),
    Op(CompareOp),
    LParen,
    RParen,
    And,
    Or,
    Not,
    True,
    False,
}

#[derive(Debug, Clone)]
struct Token {
    kind: TokenKind,
    offset: usize,
}

/// Parse a condition expression string into an AST
pub fn parse(input: &str) -> Result<Expression, ConditionError> {
    let tokens = tokenize(input)?;
    if tokens.is_empty() {
        return Err(ConditionError::UnexpectedEnd(input.to_string()));
    }

    let mut parser = Parser {
        input,
        tokens,
        pos: 0,
    };
    let expr = parser.parse_or()?;

    if let Some(token) = parser.tokens.get(parser.pos) {
        return Err(ConditionError::syntax(
            input,
            token.offset,
            "unexpected trailing input",
        ));
    }
    Ok(expr)
}

fn tokenize(input: &str) -> Result<Vec<Token>, ConditionError> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some(&(offset, c)) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
            continue;
        }

        let kind = match c {
            '(' => {
                chars.next();
                TokenKind::LParen
            }
            ')' => {
                chars.next();
                TokenKind::RParen
            }
            '=' | '!' | '<' | '>' => {
                chars.next();
                let followed_by_eq = matches!(chars.peek(), Some((_, '=')));
                if followed_by_eq {
                    chars.next();
                }
                let op = match (c, followed_by_eq) {
                    ('=', true) => CompareOp::Eq,
                    ('!', true) => CompareOp::NotEq,
                    ('<', true) => CompareOp::Lte,
                    ('<', false) => CompareOp::Lt,
                    ('>', true) => CompareOp::Gte,
                    ('>', false) => CompareOp::Gt,
                    _ => {
                        return Err(ConditionError::syntax(
                            input,
                            offset,
                            format!("expected '=' after '{}'", c),
                        ))
                    }
                };
                TokenKind::Op(op)
            }
            '\'' | '"' => {
                chars.next();
                let mut value = String::new();
                let mut closed = false;
                for (_, ch) in chars.by_ref() {
                    if ch == c {
                        closed = true;
                        break;
                    }
                    value.push(ch);
                }
                if !closed {
                    return Err(ConditionError::UnexpectedEnd(input.to_string()));
                }
                TokenKind::Str(value)
            }
            c if c.is_ascii_digit() || (c == '-' && starts_number(&input[offset + 1..])) => {
                let mut end = offset + c.len_utf8();
                chars.next();
                while let Some(&(i, ch)) = chars.peek() {
                    if ch.is_ascii_digit() || ch == '.' {
                        end = i + ch.len_utf8();
                        chars.next();
                    } else {
                        break;
                    }
                }
                let text = &input[offset..end];
                let n = text.parse::<f64>().map_err(|_| {
                    ConditionError::syntax(input, offset, format!("invalid number '{}'", text))
                })?;
                TokenKind::Number(n)
            }
            c if c.is_alphabetic() || c == '_' => {
                let mut end = offset;
                while let Some(&(i, ch)) = chars.peek() {
                    if ch.is_alphanumeric() || ch == '_' {
                        end = i + ch.len_utf8();
                        chars.next();
                    } else {
                        break;
                    }
                }
                match &input[offset..end] {
                    "and" => TokenKind::And,
                    "or" => TokenKind::Or,
                    "not" => TokenKind::Not,
                    "true" => TokenKind::True,
                    "false" => TokenKind::False,
                    word => TokenKind::Ident(word.to_string()),
                }
            }
            other => {
                return Err(ConditionError::syntax(
                    input,
                    offset,
                    format!("unexpected character '{}'", other),
                ))
            }
        };

        tokens.push(Token { kind, offset });
    }

    Ok(tokens)
}

fn starts_number(rest: &str) -> bool {
    rest.chars().next().is_some_and(|c| c.is_ascii_digit())
}

struct Parser<'a> {
    input: &'a str,
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<&TokenKind> {
        self.tokens.get(self.pos).map(|t| &t.kind)
    }

    fn next(&mut self) -> Result<Token, ConditionError> {
        let token = self
            .tokens
            .get(self.pos)
            .cloned()
            .ok_or_else(|| ConditionError::UnexpectedEnd(self.input.to_string()))?;
        self.pos += 1;
        Ok(token)
    }

    fn parse_or(&mut self) -> Result<Expression, ConditionError> {
        let mut left = self.parse_and()?;
        while self.peek() == Some(&TokenKind::Or) {
            self.pos += 1;
            let right = self.parse_and()?;
            left = Expression::Or(Box::new(left), Box::new(right));
        }
        Ok(left)
    }

    fn parse_and(&mut self) -> Result<Expression, ConditionError> {
        let mut left = self.parse_unary()?;
        while self.peek() == Some(&TokenKind::And) {
            self.pos += 1;
            let right = self.parse_unary()?;
            left = Expression::And(Box::new(left), Box::new(right));
        }
        Ok(left)
    }

    fn parse_unary(&mut self) -> Result<Expression, ConditionError> {
        if self.peek() == Some(&TokenKind::Not) {
            self.pos += 1;
            let inner = self.parse_unary()?;
            return Ok(Expression::Not(Box::new(inner)));
        }
        self.parse_primary()
    }

    fn parse_primary(&mut self) -> Result<Expression, ConditionError> {
        let token = self.next()?;
        match token.kind {
            TokenKind::LParen => {
                let expr = self.parse_or()?;
                let close = self.next()?;
                if close.kind != TokenKind::RParen {
                    return Err(ConditionError::syntax(self.input, close.offset, "expected ')'"));
                }
                Ok(expr)
            }
            TokenKind::True => Ok(Expression::True),
            TokenKind::False => Ok(Expression::False),
            TokenKind::Ident(name) => match self.peek().cloned() {
                Some(TokenKind::Op(op)) => {
                    self.pos += 1;
                    let right = self.parse_literal()?;
                    Ok(Expression::Compare {
                        left: name,
                        op,
                        right,
                    })
                }
                _ => Ok(Expression::Var(name)),
            },
            _ => Err(ConditionError::syntax(
                self.input,
                token.offset,
                "expected a variable, literal or '('",
            )),
        }
    }

    fn parse_literal(&mut self) -> Result<Literal, ConditionError> {
        let token = self.next()?;
        match token.kind {
            TokenKind::Number(n) => Ok(Literal::Number(n)),
            TokenKind::Str(s) => Ok(Literal::String(s)),
            TokenKind::True => Ok(Literal::Boolean(true)),
            TokenKind::False => Ok(Literal::Boolean(false)),
            _ => Err(ConditionError::syntax(
                self.input,
                token.offset,
                "expected a literal",
            )),
        }
    }
}
