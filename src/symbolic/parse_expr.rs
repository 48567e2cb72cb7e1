//! # Expression Parser Module
//!
//! Turns a string like `"140*x + 180*y - 3*x^2"` into an `Expr` tree.
//! Plain precedence-climbing descent over a character cursor:
//!
//! ```text
//! expression := term  (('+' | '-') term)*
//! term       := factor (('*' | '/') factor)*
//! factor     := '-' factor | power
//! power      := atom ('^' factor)?          right associative
//! atom       := number | name | name '(' expression ')' | '(' expression ')'
//! ```
//!
//! Recognised function names: `exp`, `ln`, `sin`, `cos`, `sqrt`. The name
//! `pi` parses as the numeric constant. Any other name becomes a variable.

use crate::symbolic::symbolic_engine::Expr;
use std::f64::consts::PI;

impl Expr {
    /// Parses a string into a symbolic expression.
    ///
    /// # Panics
    /// Panics on malformed input; use [`Expr::try_parse`] to handle the
    /// error instead.
    ///
    /// # Examples
    /// ```rust, ignore
    /// let expr = Expr::parse_expression("3*x^2 + sin(y)/2");
    /// ```
    pub fn parse_expression(input: &str) -> Expr {
        Expr::try_parse(input)
            .unwrap_or_else(|e| panic!("failed to parse expression {:?}: {}", input, e))
    }

    /// Parses a string into a symbolic expression, reporting malformed
    /// input as an error.
    pub fn try_parse(input: &str) -> Result<Expr, String> {
        let mut parser = Parser::new(input);
        let expr = parser.expression()?;
        parser.skip_whitespace();
        if let Some(c) = parser.peek() {
            return Err(format!("unexpected character '{}' at position {}", c, parser.pos));
        }
        Ok(expr)
    }
}

struct Parser {
    chars: Vec<char>,
    pos: usize,
}

impl Parser {
    fn new(input: &str) -> Self {
        Parser {
            chars: input.chars().collect(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek();
        if c.is_some() {
            self.pos += 1;
        }
        c
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.pos += 1;
        }
    }

    /// Consumes `expected` if it is the next non-whitespace character.
    fn eat(&mut self, expected: char) -> bool {
        self.skip_whitespace();
        if self.peek() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expression(&mut self) -> Result<Expr, String> {
        let mut lhs = self.term()?;
        loop {
            if self.eat('+') {
                let rhs = self.term()?;
                lhs = Expr::Add(lhs.boxed(), rhs.boxed());
            } else if self.eat('-') {
                let rhs = self.term()?;
                lhs = Expr::Sub(lhs.boxed(), rhs.boxed());
            } else {
                return Ok(lhs);
            }
        }
    }

    fn term(&mut self) -> Result<Expr, String> {
        let mut lhs = self.factor()?;
        loop {
            if self.eat('*') {
                let rhs = self.factor()?;
                lhs = Expr::Mul(lhs.boxed(), rhs.boxed());
            } else if self.eat('/') {
                let rhs = self.factor()?;
                lhs = Expr::Div(lhs.boxed(), rhs.boxed());
            } else {
                return Ok(lhs);
            }
        }
    }

    fn factor(&mut self) -> Result<Expr, String> {
        if self.eat('-') {
            let inner = self.factor()?;
            return Ok(Expr::Mul(
                Box::new(Expr::Const(-1.0)),
                inner.boxed(),
            ));
        }
        self.power()
    }

    fn power(&mut self) -> Result<Expr, String> {
        let base = self.atom()?;
        if self.eat('^') {
            // right associative, and '-' binds tighter in the exponent: x^-2
            let exp = self.factor()?;
            return Ok(Expr::Pow(base.boxed(), exp.boxed()));
        }
        Ok(base)
    }

    fn atom(&mut self) -> Result<Expr, String> {
        self.skip_whitespace();
        match self.peek() {
            Some('(') => {
                self.bump();
                let inner = self.expression()?;
                if !self.eat(')') {
                    return Err(format!("missing ')' at position {}", self.pos));
                }
                Ok(inner)
            }
            Some(c) if c.is_ascii_digit() || c == '.' => self.number(),
            Some(c) if c.is_alphabetic() || c == '_' => self.name(),
            Some(c) => Err(format!("unexpected character '{}' at position {}", c, self.pos)),
            None => Err("unexpected end of input".to_string()),
        }
    }

    fn number(&mut self) -> Result<Expr, String> {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_ascii_digit() || c == '.') {
            self.pos += 1;
        }
        let literal: String = self.chars[start..self.pos].iter().collect();
        literal
            .parse::<f64>()
            .map(Expr::Const)
            .map_err(|_| format!("bad number literal {:?} at position {}", literal, start))
    }

    fn name(&mut self) -> Result<Expr, String> {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_alphanumeric() || c == '_') {
            self.pos += 1;
        }
        let name: String = self.chars[start..self.pos].iter().collect();

        if self.eat('(') {
            let arg = self.expression()?;
            if !self.eat(')') {
                return Err(format!("missing ')' after {}(... at position {}", name, self.pos));
            }
            return match name.as_str() {
                "exp" => Ok(Expr::Exp(arg.boxed())),
                "ln" => Ok(Expr::Ln(arg.boxed())),
                "sin" => Ok(Expr::sin(arg.boxed())),
                "cos" => Ok(Expr::cos(arg.boxed())),
                "sqrt" => Ok(arg.sqrt()),
                _ => Err(format!("unknown function {:?}", name)),
            };
        }

        match name.as_str() {
            "pi" => Ok(Expr::Const(PI)),
            _ => Ok(Expr::Var(name)),
        }
    }
}
