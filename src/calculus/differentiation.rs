//! Single-variable differentiation wrapper: first derivatives with optional
//! point substitution, n-th order derivatives, and mixed partials taken in
//! a caller-supplied variable order.

use crate::calculus::points::Point;
use crate::symbolic::symbolic_engine::Expr;
use log::debug;
use std::fmt;

/// Error types for the differentiation wrappers
#[derive(Debug, Clone, PartialEq)]
pub enum DifferentiationError {
    /// n-th differentiation needs a positive order.
    InvalidOrder(usize),
    /// Mixed partials need at least one variable to differentiate by.
    EmptySymbolOrder,
    /// Mixed partials accept only variables, not arbitrary expressions.
    NotAVariable(String),
}

impl fmt::Display for DifferentiationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DifferentiationError::InvalidOrder(n) => {
                write!(f, "differentiation order must be a positive integer, got {}", n)
            }
            DifferentiationError::EmptySymbolOrder => {
                write!(f, "order of symbols must contain at least one variable")
            }
            DifferentiationError::NotAVariable(expr) => {
                write!(f, "order of symbols must contain only variables, got {}", expr)
            }
        }
    }
}

impl std::error::Error for DifferentiationError {}

/// Performs symbolic differentiation of one expression with respect to one
/// symbol.
pub struct Differentiation {
    pub expression: Expr,
    pub symbol: String,
}

impl Differentiation {
    pub fn new(expression: Expr, symbol: &str) -> Differentiation {
        Differentiation {
            expression,
            symbol: symbol.to_string(),
        }
    }

    /// Returns the partial derivative with respect to the held symbol,
    /// simplified best-effort. With a point, the point is substituted into
    /// the derivative; variables missing from the point simply stay
    /// symbolic, so the caller always gets the most evaluated form
    /// available.
    pub fn differentiate(&self, point: Option<&Point>) -> Expr {
        let derivative = self.expression.diff(&self.symbol).simplify();
        match point {
            Some(point) => {
                let substituted = derivative.set_variable_from_map(&point.as_map()).simplify();
                if !substituted.free_variables().is_empty() {
                    debug!(
                        "point {} leaves free variables in {}",
                        point, substituted
                    );
                }
                substituted
            }
            None => derivative,
        }
    }

    /// n-th order derivative with respect to the held symbol. Short-circuits
    /// to the literal zero as soon as an intermediate derivative vanishes
    /// identically.
    pub fn nth_differentiation(&self, n: usize) -> Result<Expr, DifferentiationError> {
        if n == 0 {
            return Err(DifferentiationError::InvalidOrder(n));
        }
        let mut current = self.expression.clone();
        for _ in 0..n {
            current = current.diff(&self.symbol).simplify();
            if current.is_zero() {
                return Ok(Expr::Const(0.0));
            }
        }
        Ok(current)
    }

    /// Mixed partial derivative: differentiates sequentially with respect
    /// to each variable in `order_of_symbols` (the order matters, it decides
    /// which intermediate results can short-circuit to zero).
    pub fn mixed_partial_differentiation(
        &self,
        order_of_symbols: &[Expr],
    ) -> Result<Expr, DifferentiationError> {
        if order_of_symbols.is_empty() {
            return Err(DifferentiationError::EmptySymbolOrder);
        }
        let mut current = self.expression.clone();
        for symbol in order_of_symbols {
            let Expr::Var(name) = symbol else {
                return Err(DifferentiationError::NotAVariable(symbol.to_string()));
            };
            current = current.diff(name).simplify();
            if current.is_zero() {
                return Ok(Expr::Const(0.0));
            }
        }
        Ok(current)
    }
}
