//! Iterated definite integration. One definite integral substitutes the
//! bounds into the symbolic antiderivative; a multiple integral folds that
//! step over the limit list, innermost first. When the symbolic table gives
//! up on a univariate integrand, Gauss-Legendre quadrature stands in.

use crate::symbolic::symbolic_engine::Expr;
use gauss_quad::GaussLegendre;
use log::{debug, warn};

/// Nodes for the quadrature fallback; generous for smooth integrands.
const QUADRATURE_DEGREE: usize = 64;

/// Integration bounds. Both may be symbolic - `pi`, or an outer variable
/// of an iterated integral.
#[derive(Debug, Clone, PartialEq)]
pub struct Limit {
    pub lower: Expr,
    pub upper: Expr,
}

impl Limit {
    pub fn new(lower: Expr, upper: Expr) -> Limit {
        Limit { lower, upper }
    }

    pub fn numeric(lower: f64, upper: f64) -> Limit {
        Limit {
            lower: Expr::Const(lower),
            upper: Expr::Const(upper),
        }
    }
}

/// Multivariable definite integration over an ordered limit list.
pub struct MultivariableIntegration;

impl MultivariableIntegration {
    /// Indefinite integral with respect to `sym`, simplified best-effort.
    pub fn get_integration(expression: &Expr, sym: &str) -> Result<Expr, String> {
        let antiderivative = expression.integrate(sym)?;
        Ok(antiderivative.simplify())
    }

    /// Definite integral: antiderivative at the upper bound minus the
    /// antiderivative at the lower bound. Falls back to quadrature when the
    /// symbolic table cannot integrate but the integrand is univariate with
    /// numeric bounds.
    pub fn find_integration_with_limits(
        expression: &Expr,
        sym: &str,
        limit: &Limit,
    ) -> Result<Expr, String> {
        match Self::get_integration(expression, sym) {
            Ok(answer) => {
                let at_upper = answer.substitute_variable(sym, &limit.upper);
                let at_lower = answer.substitute_variable(sym, &limit.lower);
                Ok((at_upper - at_lower).simplify())
            }
            Err(symbolic_failure) => {
                debug!(
                    "symbolic integration of {} by {} failed: {}",
                    expression, sym, symbolic_failure
                );
                Self::quadrature_fallback(expression, sym, limit).ok_or(symbolic_failure)
            }
        }
    }

    /// Gauss-Legendre quadrature; only applicable when `sym` is the sole
    /// free variable and both bounds reduce to numbers.
    fn quadrature_fallback(expression: &Expr, sym: &str, limit: &Limit) -> Option<Expr> {
        let free = expression.free_variables();
        if !free.iter().all(|name| name.as_str() == sym) {
            warn!(
                "cannot integrate {} by {} numerically, other variables remain",
                expression, sym
            );
            return None;
        }
        let lower = limit.lower.simplify().as_const()?;
        let upper = limit.upper.simplify().as_const()?;
        let quad = GaussLegendre::new(QUADRATURE_DEGREE).ok()?;
        let value = quad.integrate(lower, upper, |x| {
            expression.eval_expression(vec![sym], &[x])
        });
        debug!("quadrature fallback: {} over [{}, {}] = {}", expression, lower, upper, value);
        Some(Expr::Const(value))
    }

    /// Iterated definite integral, innermost limit first. An empty limit
    /// list returns the expression unchanged.
    pub fn solve_multiple_integral(
        expression: &Expr,
        limits: &[(String, Limit)],
    ) -> Result<Expr, String> {
        let mut current = expression.clone();
        for (sym, limit) in limits {
            current = Self::find_integration_with_limits(&current, sym, limit)?;
        }
        Ok(current)
    }
}
