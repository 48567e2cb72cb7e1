//! Critical point discovery: differentiate the expression with respect to
//! each variable of the alphabet, equate the surviving partials to zero and
//! hand the system to the equation solver.

use crate::calculus::differentiation::Differentiation;
use crate::calculus::equations::{Equation, EquationSolver, SolveError};
use crate::calculus::points::{COORDINATE_VARS, Point, PointSet};
use crate::symbolic::symbolic_engine::Expr;
use log::{debug, error};

/// Finds the critical points of an expression over the x, y, z alphabet.
pub struct FindCriticalPoints {
    pub expression: Expr,
    /// Optional point of interest. Validated and retained for callers that
    /// track one; the solve path does not consume it.
    pub point: Option<Point>,
}

impl FindCriticalPoints {
    pub fn new(expression: Expr) -> FindCriticalPoints {
        FindCriticalPoints {
            expression,
            point: None,
        }
    }

    pub fn with_point(expression: Expr, point: Point) -> FindCriticalPoints {
        FindCriticalPoints {
            expression,
            point: Some(point),
        }
    }

    /// Solves grad f = 0. A partial that is identically zero contributes no
    /// constraint and is dropped entirely, which shrinks the variable count
    /// of the system - a variable the function does not depend on cannot
    /// appear in the resulting points.
    ///
    /// An `Ok` empty set means no critical points were found; solver
    /// breakage surfaces as a typed error.
    pub fn find(&self) -> Result<PointSet, SolveError> {
        let mut equations = Vec::new();
        for var in COORDINATE_VARS {
            let partial = Differentiation::new(self.expression.clone(), var).differentiate(None);
            if partial.is_zero() {
                debug!("partial with respect to {} vanishes identically, dropped", var);
                continue;
            }
            equations.push(Equation::from_residual(partial));
        }

        let solver = EquationSolver::new(equations)?;
        match solver.solve() {
            Ok(points) => Ok(points),
            Err(e) => {
                error!("critical point solve failed: {}", e);
                Err(e)
            }
        }
    }
}
