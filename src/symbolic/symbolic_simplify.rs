//! # Simplification Module
//!
//! Best-effort algebraic cleanup for `Expr` trees. One bottom-up rewrite
//! pass applies constant folding, the additive/multiplicative identities,
//! the power rules and constant-factor collection; `simplify` repeats the
//! pass until the tree stops changing (with a hard pass limit, so
//! simplification always terminates and is never fatal).
//!
//! ## Rules applied
//! - constant folding through every operation, including `exp`, `ln`,
//!   `sin`, `cos` on constant arguments
//! - `x + 0 = x`, `x - 0 = x`, `x - x = 0`
//! - `x * 0 = 0`, `x * 1 = x`, constant factors pulled left and merged:
//!   `(2 * x) * 3 = 6 * x`
//! - `0 / x = 0`, `x / 1 = x`, `x / x = 1`
//! - `x^0 = 1`, `x^1 = x`, `1^x = 1`, `0^x = 0`
//! - `exp(ln(x)) = x`, `ln(exp(x)) = x`
//!
//! Simplification is advisory everywhere in this crate: no caller treats a
//! still-complex tree as an error, they fall back to the unsimplified form.

use crate::symbolic::symbolic_engine::Expr;

/// Upper bound on rewrite passes; each pass strictly shrinks or freezes the
/// tree in practice, the limit guards pathological ping-pong rewrites.
const SIMPLIFY_PASS_LIMIT: usize = 16;

impl Expr {
    //___________________________________SIMPLIFICATION____________________________________

    /// Simplifies the expression by running the rewrite pass to a fixpoint.
    ///
    /// # Examples
    /// ```rust, ignore
    /// let f = Expr::parse_expression("x^2").diff("x");
    /// assert_eq!(f.simplify(), Expr::Const(2.0) * Expr::Var("x".to_string()));
    /// ```
    pub fn simplify(&self) -> Expr {
        let mut current = self.clone();
        for _ in 0..SIMPLIFY_PASS_LIMIT {
            let next = current.simplify_pass();
            if next == current {
                break;
            }
            current = next;
        }
        current
    }

    /// One bottom-up rewrite pass: children first, then the local rules.
    fn simplify_pass(&self) -> Expr {
        match self {
            Expr::Var(_) | Expr::Const(_) => self.clone(),

            Expr::Add(lhs, rhs) => {
                let lhs = lhs.simplify_pass();
                let rhs = rhs.simplify_pass();
                match (lhs, rhs) {
                    (Expr::Const(a), Expr::Const(b)) => Expr::Const(a + b),
                    (Expr::Const(a), rhs) if a == 0.0 => rhs,
                    (lhs, Expr::Const(b)) if b == 0.0 => lhs,
                    (lhs, rhs) => Expr::Add(Box::new(lhs), Box::new(rhs)),
                }
            }

            Expr::Sub(lhs, rhs) => {
                let lhs = lhs.simplify_pass();
                let rhs = rhs.simplify_pass();
                match (lhs, rhs) {
                    (Expr::Const(a), Expr::Const(b)) => Expr::Const(a - b),
                    (lhs, Expr::Const(b)) if b == 0.0 => lhs,
                    (lhs, rhs) if lhs == rhs => Expr::Const(0.0),
                    (lhs, rhs) => Expr::Sub(Box::new(lhs), Box::new(rhs)),
                }
            }

            Expr::Mul(lhs, rhs) => {
                let lhs = lhs.simplify_pass();
                let rhs = rhs.simplify_pass();
                match (lhs, rhs) {
                    (Expr::Const(a), Expr::Const(b)) => Expr::Const(a * b),
                    (Expr::Const(a), _) | (_, Expr::Const(a)) if a == 0.0 => Expr::Const(0.0),
                    (Expr::Const(a), rhs) if a == 1.0 => rhs,
                    (lhs, Expr::Const(b)) if b == 1.0 => lhs,
                    // merge nested constant factors: a * (b * rest) = (a*b) * rest
                    (Expr::Const(a), Expr::Mul(inner_lhs, inner_rhs)) => {
                        if let Expr::Const(b) = inner_lhs.as_ref() {
                            Expr::Mul(Box::new(Expr::Const(a * *b)), inner_rhs)
                        } else {
                            Expr::Mul(
                                Box::new(Expr::Const(a)),
                                Box::new(Expr::Mul(inner_lhs, inner_rhs)),
                            )
                        }
                    }
                    // keep constants on the left so the merge rule can see them
                    (lhs, Expr::Const(b)) => Expr::Mul(Box::new(Expr::Const(b)), Box::new(lhs)),
                    (lhs, rhs) => Expr::Mul(Box::new(lhs), Box::new(rhs)),
                }
            }

            Expr::Div(lhs, rhs) => {
                let lhs = lhs.simplify_pass();
                let rhs = rhs.simplify_pass();
                match (lhs, rhs) {
                    (Expr::Const(a), Expr::Const(b)) => Expr::Const(a / b),
                    (Expr::Const(a), _) if a == 0.0 => Expr::Const(0.0),
                    (lhs, Expr::Const(b)) if b == 1.0 => lhs,
                    (lhs, rhs) if lhs == rhs && !lhs.is_zero() => Expr::Const(1.0),
                    (lhs, rhs) => Expr::Div(Box::new(lhs), Box::new(rhs)),
                }
            }

            Expr::Pow(base, exp) => {
                let base = base.simplify_pass();
                let exp = exp.simplify_pass();
                match (base, exp) {
                    (Expr::Const(a), Expr::Const(b)) => Expr::Const(a.powf(b)),
                    (base, Expr::Const(b)) if b == 0.0 && !base.is_zero() => Expr::Const(1.0),
                    (base, Expr::Const(b)) if b == 1.0 => base,
                    (Expr::Const(a), _) if a == 1.0 => Expr::Const(1.0),
                    (Expr::Const(a), _) if a == 0.0 => Expr::Const(0.0),
                    (base, exp) => Expr::Pow(Box::new(base), Box::new(exp)),
                }
            }

            Expr::Exp(expr) => match expr.simplify_pass() {
                Expr::Const(val) => Expr::Const(val.exp()),
                Expr::Ln(inner) => *inner,
                expr => Expr::Exp(Box::new(expr)),
            },

            Expr::Ln(expr) => match expr.simplify_pass() {
                Expr::Const(val) if val > 0.0 => Expr::Const(val.ln()),
                Expr::Exp(inner) => *inner,
                expr => Expr::Ln(Box::new(expr)),
            },

            Expr::sin(expr) => match expr.simplify_pass() {
                Expr::Const(val) => Expr::Const(val.sin()),
                expr => Expr::sin(Box::new(expr)),
            },

            Expr::cos(expr) => match expr.simplify_pass() {
                Expr::Const(val) => Expr::Const(val.cos()),
                expr => Expr::cos(Box::new(expr)),
            },
        }
    }
}
