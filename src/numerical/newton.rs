//! Newton-Raphson iteration over symbolic equation systems. The Jacobian is
//! derived symbolically once; every iteration evaluates it numerically and
//! takes the damped Newton step. A single start converges to at most one
//! root, so `sweep` walks a deterministic grid of initial guesses and
//! collects the distinct verified roots - nonlinear systems routinely have
//! several (a circle and a line meet twice).

use crate::symbolic::symbolic_engine::Expr;
use itertools::Itertools;
use log::{debug, info, warn};
use nalgebra::{DMatrix, DVector};

/// Initial-guess grid per unknown; the cartesian product over all unknowns
/// is the start list for `sweep`.
const START_VALUES: [f64; 5] = [-10.0, -3.0, 0.5, 3.0, 10.0];

/// Residual norm a converged iterate must satisfy to count as a root.
const RESIDUAL_TOLERANCE: f64 = 1e-6;

/// Componentwise distance under which two roots are the same root.
const DEDUP_TOLERANCE: f64 = 1e-6;

pub struct NewtonSolver {
    pub eq_system: Vec<Expr>,
    pub unknowns: Vec<String>,
    pub symbolic_jacobian: Vec<Vec<Expr>>,
    pub tolerance: f64,
    pub max_iterations: usize,
    pub damping_factor: f64,
}

impl NewtonSolver {
    /// Builds the solver and its symbolic Jacobian for a square system.
    pub fn new(eq_system: Vec<Expr>, unknowns: Vec<String>) -> NewtonSolver {
        assert_eq!(
            eq_system.len(),
            unknowns.len(),
            "Equation system and vector of unknowns should have the same length."
        );
        let symbolic_jacobian = eq_system
            .iter()
            .map(|eq| {
                unknowns
                    .iter()
                    .map(|var| eq.diff(var).simplify())
                    .collect::<Vec<Expr>>()
            })
            .collect();
        NewtonSolver {
            eq_system,
            unknowns,
            symbolic_jacobian,
            tolerance: 1e-10,
            max_iterations: 200,
            damping_factor: 1.0,
        }
    }

    fn var_refs(&self) -> Vec<&str> {
        self.unknowns.iter().map(|s| s.as_str()).collect()
    }

    fn eval_system(&self, x: &DVector<f64>) -> DVector<f64> {
        let values = x.as_slice();
        let evaluated: Vec<f64> = self
            .eq_system
            .iter()
            .map(|eq| eq.eval_expression(self.var_refs(), values))
            .collect();
        DVector::from_vec(evaluated)
    }

    fn eval_jacobian(&self, x: &DVector<f64>) -> DMatrix<f64> {
        let n = self.unknowns.len();
        let values = x.as_slice();
        DMatrix::from_fn(n, n, |i, j| {
            self.symbolic_jacobian[i][j].eval_expression(self.var_refs(), values)
        })
    }

    /// Newton iteration from one initial guess. `None` when the iteration
    /// hits a singular Jacobian, leaves the finite range, or fails to
    /// converge within the iteration budget.
    pub fn solve_from(&self, initial_guess: &[f64]) -> Option<DVector<f64>> {
        let mut x = DVector::from_column_slice(initial_guess);
        for i in 0..self.max_iterations {
            let jac = self.eval_jacobian(&x);
            let fun = self.eval_system(&x);
            let delta = jac.lu().solve(&fun)?;
            let new_x = &x - self.damping_factor * &delta;
            if new_x.iter().any(|v| !v.is_finite()) {
                debug!("iteration diverged from start {:?}", initial_guess);
                return None;
            }
            let error = (&new_x - &x).norm();
            if error < self.tolerance {
                let residual = self.eval_system(&new_x).norm();
                if residual < RESIDUAL_TOLERANCE {
                    debug!("converged after {} iterations, residual = {}", i, residual);
                    return Some(new_x);
                }
                warn!("step converged but residual = {} is too large", residual);
                return None;
            }
            x = new_x;
        }
        debug!(
            "maximum number of iterations reached from start {:?}",
            initial_guess
        );
        None
    }

    /// Runs Newton from every grid start and returns the distinct verified
    /// roots, sorted componentwise so the enumeration order is stable.
    pub fn sweep(&self) -> Vec<Vec<f64>> {
        let starts = (0..self.unknowns.len())
            .map(|_| START_VALUES.iter().copied())
            .multi_cartesian_product();

        let mut roots: Vec<Vec<f64>> = Vec::new();
        for start in starts {
            let Some(root) = self.solve_from(&start) else {
                continue;
            };
            let root: Vec<f64> = root.iter().copied().collect();
            let already_known = roots.iter().any(|known| {
                known
                    .iter()
                    .zip(&root)
                    .all(|(a, b)| (a - b).abs() < DEDUP_TOLERANCE)
            });
            if !already_known {
                roots.push(root);
            }
        }
        roots.sort_by(|a, b| a.partial_cmp(b).expect("roots are finite"));
        info!("Newton sweep found {} distinct root(s)", roots.len());
        roots
    }
}

///////////////////////////////////////////////////////////////////////////////////////////////////////////////////
//                                     TESTS
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn circle_and_line() -> NewtonSolver {
        let eq_system = vec![
            Expr::parse_expression("x^2 + y^2 - 10"),
            Expr::parse_expression("x - y - 4"),
        ];
        NewtonSolver::new(eq_system, vec!["x".to_string(), "y".to_string()])
    }

    #[test]
    fn test_single_start_converges() {
        let solver = circle_and_line();
        let root = solver.solve_from(&[1.0, 1.0]).unwrap();
        let residual = solver.eval_system(&root).norm();
        assert!(residual < 1e-8);
    }

    #[test]
    fn test_sweep_finds_both_roots() {
        let solver = circle_and_line();
        let roots = solver.sweep();
        assert_eq!(roots.len(), 2);
        assert_relative_eq!(roots[0][0], 1.0, epsilon = 1e-6);
        assert_relative_eq!(roots[0][1], -3.0, epsilon = 1e-6);
        assert_relative_eq!(roots[1][0], 3.0, epsilon = 1e-6);
        assert_relative_eq!(roots[1][1], -1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_sweep_on_rootless_system_is_empty() {
        // x^2 + 1 = 0 has no real root
        let solver = NewtonSolver::new(
            vec![Expr::parse_expression("x^2 + 1")],
            vec!["x".to_string()],
        );
        assert!(solver.sweep().is_empty());
    }
}
