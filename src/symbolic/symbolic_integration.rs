//! # Symbolic Integration Module
//!
//! Indefinite integrals for the expression shapes the calculus layer
//! produces: linearity, constant factors and divisors, the power rule,
//! `1/x`, and `exp`/`sin`/`cos` of arguments linear in the integration
//! variable. Anything else reports `Err` and the definite-integration
//! layer decides whether numeric quadrature can stand in.

use crate::symbolic::symbolic_engine::Expr;

impl Expr {
    /// SYMBOLIC INTEGRATION

    /// Integrates with respect to `var`, returning the indefinite integral
    /// (without constant of integration). The result is unsimplified;
    /// callers chain `.simplify()`.
    pub fn integrate(&self, var: &str) -> Result<Expr, String> {
        match self {
            // ∫ c dx = c*x
            Expr::Const(c) => Ok(Expr::Const(*c) * Expr::Var(var.to_string())),

            // ∫ x dx = x^2/2, ∫ y dx = y*x for y != x
            Expr::Var(name) => {
                if name == var {
                    Ok(Expr::Var(var.to_string()).pow(Expr::Const(2.0)) / Expr::Const(2.0))
                } else {
                    Ok(Expr::Var(name.clone()) * Expr::Var(var.to_string()))
                }
            }

            // linearity
            Expr::Add(lhs, rhs) => Ok(lhs.integrate(var)? + rhs.integrate(var)?),
            Expr::Sub(lhs, rhs) => Ok(lhs.integrate(var)? - rhs.integrate(var)?),

            // constant factor out front
            Expr::Mul(lhs, rhs) => {
                if !lhs.contains_variable(var) {
                    Ok((**lhs).clone() * rhs.integrate(var)?)
                } else if !rhs.contains_variable(var) {
                    Ok((**rhs).clone() * lhs.integrate(var)?)
                } else {
                    Err(format!("cannot integrate product: {} * {}", lhs, rhs))
                }
            }

            Expr::Div(lhs, rhs) => {
                // constant denominator: ∫ f/c dx = (∫ f dx)/c
                if !rhs.contains_variable(var) {
                    return Ok(lhs.integrate(var)? / (**rhs).clone());
                }
                // ∫ 1/x dx = ln(x)
                if let (Expr::Const(c), Expr::Var(name)) = (&**lhs, &**rhs) {
                    if *c == 1.0 && name == var {
                        return Ok(Expr::Ln(Box::new(Expr::Var(var.to_string()))));
                    }
                }
                Err(format!("cannot integrate quotient: {} / {}", lhs, rhs))
            }

            Expr::Pow(base, exp) => self.integrate_power(base, exp, var),

            // ∫ exp(a*x + b) dx = exp(a*x + b)/a
            Expr::Exp(arg) => match linear_coefficient(arg, var)? {
                Some(a) => Ok(self.clone() / Expr::Const(a)),
                None => Ok(self.clone() * Expr::Var(var.to_string())),
            },

            // ∫ ln(u) dx: only u == x (by parts) or u free of x
            Expr::Ln(arg) => {
                if !arg.contains_variable(var) {
                    return Ok(self.clone() * Expr::Var(var.to_string()));
                }
                if matches!(&**arg, Expr::Var(name) if name == var) {
                    let x = Expr::Var(var.to_string());
                    return Ok(x.clone() * Expr::Ln(Box::new(x.clone())) - x);
                }
                Err(format!("cannot integrate ln({})", arg))
            }

            // ∫ sin(a*x + b) dx = -cos(a*x + b)/a
            Expr::sin(arg) => match linear_coefficient(arg, var)? {
                Some(a) => {
                    Ok(Expr::Const(-1.0) * Expr::cos(arg.clone()) / Expr::Const(a))
                }
                None => Ok(self.clone() * Expr::Var(var.to_string())),
            },

            // ∫ cos(a*x + b) dx = sin(a*x + b)/a
            Expr::cos(arg) => match linear_coefficient(arg, var)? {
                Some(a) => Ok(Expr::sin(arg.clone()) / Expr::Const(a)),
                None => Ok(self.clone() * Expr::Var(var.to_string())),
            },
        }
    }

    fn integrate_power(&self, base: &Expr, exp: &Expr, var: &str) -> Result<Expr, String> {
        // no dependence on var at all: the whole power is a constant
        if !self.contains_variable(var) {
            return Ok(self.clone() * Expr::Var(var.to_string()));
        }

        // ∫ x^n dx
        if let (Expr::Var(name), Expr::Const(n)) = (base, exp) {
            if name == var {
                if *n == -1.0 {
                    return Ok(Expr::Ln(Box::new(Expr::Var(var.to_string()))));
                }
                let new_exp = Expr::Const(n + 1.0);
                return Ok(
                    Expr::Var(var.to_string()).pow(new_exp.clone()) / new_exp
                );
            }
        }

        // ∫ c^x dx = c^x / ln(c)
        if let (Expr::Const(c), Expr::Var(name)) = (base, exp) {
            if name == var && *c > 0.0 && *c != 1.0 {
                return Ok(self.clone() / Expr::Const(c.ln()));
            }
        }

        Err(format!("cannot integrate power: {} ^ {}", base, exp))
    }
}

/// For an argument linear in `var` (a*var + b, a != 0) returns `Some(a)`;
/// for an argument free of `var` returns `None`. A nonlinear argument is
/// an error.
fn linear_coefficient(arg: &Expr, var: &str) -> Result<Option<f64>, String> {
    if !arg.contains_variable(var) {
        return Ok(None);
    }
    let slope = arg.diff(var).simplify();
    match slope.as_const() {
        Some(a) if a != 0.0 => Ok(Some(a)),
        _ => Err(format!("argument {} is not linear in {}", arg, var)),
    }
}
