#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
/// # Symbolic engine
/// a module holding the symbolic expression type `Expr` and its basic
/// operations: construction, substitution, numeric evaluation.
///# Example#
/// ```
/// use RustedMultiCalc::symbolic::symbolic_engine::Expr;
/// let expr = Expr::parse_expression("140*x + 180*y - 3*x^2 - 2*y^2 - x*y");
/// println!("parsed expression {}", expr);
/// let value = expr.eval_expression(vec!["x", "y"], &[1.0, 2.0]);
/// assert_eq!(value, 487.0);
/// ```
/// ________________________________________________________________________________________________________________________________
pub mod symbolic_engine;
/// # Analytical derivatives
/// partial derivatives of `Expr` by the recursive differentiation rules
/// (power, product, quotient and chain rule)
///# Example#
/// ```
/// use RustedMultiCalc::symbolic::symbolic_engine::Expr;
/// let expr = Expr::parse_expression("x^2*y");
/// let dx = expr.diff("x").simplify();
/// assert_eq!(dx.eval_expression(vec!["x", "y"], &[3.0, 2.0]), 12.0);
/// ```
/// ________________________________________________________________________________________________________________________________
pub mod symbolic_derivatives;
/// # Simplification
/// best-effort algebraic cleanup: constant folding, additive and
/// multiplicative identities, power rules, collection of constant factors
/// ________________________________________________________________________________________________________________________________
pub mod symbolic_simplify;
/// # Expression parser
/// a module turns a String expression into a symbolic expression
///# Example#
/// ```
/// use RustedMultiCalc::symbolic::symbolic_engine::Expr;
/// let parsed = Expr::parse_expression("sin(x)/2 + sqrt(y)");
/// println!("parsed expression {}", parsed);
/// ```
/// ________________________________________________________________________________________________________________________________
pub mod parse_expr;
/// # Symbolic integration
/// indefinite integrals for the expression shapes the calculus layer
/// produces; non-integrable shapes report an error and the caller decides
/// whether to fall back to quadrature
/// ________________________________________________________________________________________________________________________________
pub mod symbolic_integration;

#[cfg(test)]
pub mod symbolic_engine_tests;
