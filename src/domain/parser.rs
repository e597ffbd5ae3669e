//! Expression parser for canonical calculator expressions.
//!
//! This module implements a recursive descent parser over the canonical form
//! produced by the normalizer, where every function is a single-character
//! marker (`q` for sqrt, `S` for asin, ...).
//!
//! # Grammar
//!
//! ```bnf
//! Expression ::= Term ( ( "+" | "-" ) Term )*
//! Term       ::= Power ( ( "*" | "/" | "%" ) Power )*
//! Power      ::= Unary ( "^" Unary )*
//! Unary      ::= "-"? Primary
//! Primary    ::= Number | "(" Expression ")" | Function "(" Expression ")"
//! Function   ::= "q" | "C" | "S" | "T" | "c" | "s" | "t" | "L" | "l"
//! Number     ::= [0-9]* ( "." [0-9]* )?
//! ```
//!
//! - Addition and subtraction have the lowest precedence
//! - Multiplication, division and modulo bind tighter
//! - Power binds tighter still and is right-associative
//! - A single leading minus applies to the primary that follows it
//!
//! Only parentheses and function calls nest. They are capped at
//! [`MAX_NESTING`] so a pathological input fails with a syntax error instead
//! of exhausting the stack. Operator chains of any length stay flat.

use super::errors::{CalcError, CalcResult};
use super::models::FunctionToken;

/// Deepest parenthesis or function-call nesting the parser accepts.
pub const MAX_NESTING: usize = 256;

/// Represents a token in a canonical expression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    Number(f64),
    Function(FunctionToken),

    Plus,
    Minus,
    Multiply,
    Divide,
    Modulo,
    Power,

    LeftParen,
    RightParen,

    Eof,
}

/// Abstract Syntax Tree node for expressions.
///
/// Operators of one precedence level are kept in a single flat node, so the
/// tree only grows deeper with parentheses and function calls.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(f64),

    /// `first op operand op operand ...`, applied left to right.
    Chain {
        first: Box<Expr>,
        rest: Vec<(BinaryOp, Expr)>,
    },

    /// `base ^ e1 ^ e2 ...`, applied right to left.
    Power {
        base: Box<Expr>,
        exponents: Vec<Expr>,
    },

    Negate(Box<Expr>),

    FunctionCall {
        function: FunctionToken,
        argument: Box<Expr>,
    },
}

impl Expr {
    fn chain(first: Expr, rest: Vec<(BinaryOp, Expr)>) -> Expr {
        if rest.is_empty() {
            first
        } else {
            Expr::Chain {
                first: Box::new(first),
                rest,
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
}

/// Lexical analyzer for canonical expressions.
pub struct Lexer<'a> {
    input: &'a [u8],
    position: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input: input.as_bytes(),
            position: 0,
        }
    }

    fn current(&self) -> Option<u8> {
        self.input.get(self.position).copied()
    }

    /// Reads a decimal literal: digits with at most one '.'.
    fn read_number(&mut self) -> CalcResult<f64> {
        let start = self.position;
        let mut seen_dot = false;

        while let Some(byte) = self.current() {
            match byte {
                b'0'..=b'9' => self.position += 1,
                b'.' if !seen_dot => {
                    seen_dot = true;
                    self.position += 1;
                }
                _ => break,
            }
        }

        // the slice holds only ASCII digits and '.'
        let literal = std::str::from_utf8(&self.input[start..self.position])
            .map_err(|_| CalcError::syntax("invalid number"))?;
        literal
            .parse::<f64>()
            .map_err(|_| CalcError::syntax(format!("invalid number: {}", literal)))
    }

    pub fn next_token(&mut self) -> CalcResult<Token> {
        let Some(byte) = self.current() else {
            return Ok(Token::Eof);
        };

        if byte.is_ascii_digit() || byte == b'.' {
            return self.read_number().map(Token::Number);
        }

        let token = match byte {
            b'+' => Token::Plus,
            b'-' => Token::Minus,
            b'*' => Token::Multiply,
            b'/' => Token::Divide,
            b'%' => Token::Modulo,
            b'^' => Token::Power,
            b'(' => Token::LeftParen,
            b')' => Token::RightParen,
            other => match FunctionToken::from_marker(other as char) {
                Some(function) => Token::Function(function),
                None => {
                    return Err(CalcError::syntax(format!(
                        "unexpected character: '{}'",
                        other as char
                    )));
                }
            },
        };
        self.position += 1;
        Ok(token)
    }
}

/// Recursive descent parser for canonical expressions.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current_token: Token,
    depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> CalcResult<Self> {
        let mut lexer = Lexer::new(input);
        let current_token = lexer.next_token()?;

        Ok(Self {
            lexer,
            current_token,
            depth: 0,
        })
    }

    fn advance(&mut self) -> CalcResult<()> {
        self.current_token = self.lexer.next_token()?;
        Ok(())
    }

    fn expect(&mut self, expected: Token) -> CalcResult<()> {
        if std::mem::discriminant(&self.current_token) == std::mem::discriminant(&expected) {
            self.advance()
        } else {
            Err(CalcError::syntax(format!(
                "expected {:?}, found {:?}",
                expected, self.current_token
            )))
        }
    }

    /// Parses the whole input; trailing tokens are an error.
    pub fn parse(&mut self) -> CalcResult<Expr> {
        if self.current_token == Token::Eof {
            return Err(CalcError::syntax("empty expression"));
        }

        let expr = self.parse_expression()?;

        if self.current_token != Token::Eof {
            return Err(CalcError::syntax(format!(
                "unexpected token at end: {:?}",
                self.current_token
            )));
        }

        Ok(expr)
    }

    /// Parses addition and subtraction.
    fn parse_expression(&mut self) -> CalcResult<Expr> {
        let first = self.parse_term()?;
        let mut rest = Vec::new();

        while matches!(self.current_token, Token::Plus | Token::Minus) {
            let op = match self.current_token {
                Token::Plus => BinaryOp::Add,
                Token::Minus => BinaryOp::Subtract,
                _ => unreachable!(),
            };
            self.advance()?;
            rest.push((op, self.parse_term()?));
        }

        Ok(Expr::chain(first, rest))
    }

    /// Parses multiplication, division, and modulo.
    fn parse_term(&mut self) -> CalcResult<Expr> {
        let first = self.parse_power()?;
        let mut rest = Vec::new();

        while matches!(self.current_token, Token::Multiply | Token::Divide | Token::Modulo) {
            let op = match self.current_token {
                Token::Multiply => BinaryOp::Multiply,
                Token::Divide => BinaryOp::Divide,
                Token::Modulo => BinaryOp::Modulo,
                _ => unreachable!(),
            };
            self.advance()?;
            rest.push((op, self.parse_power()?));
        }

        Ok(Expr::chain(first, rest))
    }

    /// Parses power expressions (right-associative).
    fn parse_power(&mut self) -> CalcResult<Expr> {
        let base = self.parse_unary()?;
        let mut exponents = Vec::new();

        while self.current_token == Token::Power {
            self.advance()?;
            exponents.push(self.parse_unary()?);
        }

        if exponents.is_empty() {
            Ok(base)
        } else {
            Ok(Expr::Power {
                base: Box::new(base),
                exponents,
            })
        }
    }

    fn parse_unary(&mut self) -> CalcResult<Expr> {
        if self.current_token == Token::Minus {
            self.advance()?;
            let operand = self.parse_primary()?;
            Ok(Expr::Negate(Box::new(operand)))
        } else {
            self.parse_primary()
        }
    }

    fn parse_primary(&mut self) -> CalcResult<Expr> {
        match self.current_token {
            Token::Number(value) => {
                self.advance()?;
                Ok(Expr::Number(value))
            }

            Token::Function(function) => {
                self.advance()?;
                self.expect(Token::LeftParen)?;
                let argument = self.enter(|parser| parser.parse_expression())?;
                self.expect(Token::RightParen)?;
                Ok(Expr::FunctionCall {
                    function,
                    argument: Box::new(argument),
                })
            }

            Token::LeftParen => {
                self.advance()?;
                let expr = self.enter(|parser| parser.parse_expression())?;
                self.expect(Token::RightParen)?;
                Ok(expr)
            }

            Token::Eof => Err(CalcError::syntax("unexpected end of expression")),

            other => Err(CalcError::syntax(format!("unexpected token: {:?}", other))),
        }
    }

    /// Runs `f` one nesting level deeper.
    fn enter<T>(&mut self, f: impl FnOnce(&mut Self) -> CalcResult<T>) -> CalcResult<T> {
        if self.depth >= MAX_NESTING {
            return Err(CalcError::syntax("expression is nested too deeply"));
        }
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }
}

/// Walks an expression tree and computes its value.
pub struct ExpressionEvaluator;

impl ExpressionEvaluator {
    pub fn evaluate(expr: &Expr) -> CalcResult<f64> {
        match expr {
            Expr::Number(value) => Ok(*value),

            Expr::Chain { first, rest } => {
                let mut value = Self::evaluate(first)?;
                for (op, operand) in rest {
                    value = Self::apply(*op, value, Self::evaluate(operand)?)?;
                }
                Ok(value)
            }

            Expr::Power { base, exponents } => {
                let base = Self::evaluate(base)?;
                let exponents = exponents
                    .iter()
                    .map(Self::evaluate)
                    .collect::<CalcResult<Vec<f64>>>()?;
                let exponent = exponents
                    .into_iter()
                    .rev()
                    .reduce(|right, left| left.powf(right));
                Ok(match exponent {
                    Some(exponent) => base.powf(exponent),
                    None => base,
                })
            }

            Expr::Negate(operand) => Ok(-Self::evaluate(operand)?),

            Expr::FunctionCall { function, argument } => {
                let value = Self::evaluate(argument)?;
                function.apply(value)
            }
        }
    }

    fn apply(op: BinaryOp, left: f64, right: f64) -> CalcResult<f64> {
        match op {
            BinaryOp::Add => Ok(left + right),
            BinaryOp::Subtract => Ok(left - right),
            BinaryOp::Multiply => Ok(left * right),
            BinaryOp::Divide => {
                if right == 0.0 {
                    Err(CalcError::domain("division by zero"))
                } else {
                    Ok(left / right)
                }
            }
            // f64 `%` keeps the sign of the dividend, like C's fmod
            BinaryOp::Modulo => {
                if right == 0.0 {
                    Err(CalcError::domain("modulo by zero"))
                } else {
                    Ok(left % right)
                }
            }
        }
    }
}

/// Parses and evaluates a canonical expression string.
pub fn parse_and_evaluate(input: &str) -> CalcResult<f64> {
    let mut parser = Parser::new(input)?;
    let ast = parser.parse()?;
    let value = ExpressionEvaluator::evaluate(&ast)?;

    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::domain("result is not a finite number"))
    }
}
