//! Zero-equations and the system solver behind the critical point
//! pipeline.
//!
//! The underlying machinery returns differently shaped results depending on
//! the system: the direct linear path produces one variable-to-value
//! mapping, the Newton sweep produces a list of solution tuples, and a
//! sweep can come back empty. Callers never see this zoo -
//! [`EquationSolver::solve`] resolves every shape into one uniform
//! [`PointSet`] before returning, and failures are typed instead of being
//! swallowed into a silent empty result.

use crate::calculus::points::{COORDINATE_VARS, Point, PointSet};
use crate::numerical::linear::{LinearSolveError, solve_linear_system};
use crate::numerical::newton::NewtonSolver;
use crate::symbolic::symbolic_engine::Expr;
use itertools::izip;
use log::{info, warn};
use nalgebra::{DMatrix, DVector};
use simplelog::{
    ColorChoice, CombinedLogger, Config, LevelFilter, TermLogger, TerminalMode,
};
use std::collections::HashMap;
use std::fmt;

/// Error types for equation system solving
#[derive(Debug, Clone, PartialEq)]
pub enum SolveError {
    /// The solver was handed no equations at all.
    EmptySystem,
    /// More equations than unknowns or the other way round; neither direct
    /// elimination nor the Newton iteration handles that.
    NonSquareSystem { equations: usize, unknowns: usize },
    /// Linear system with a singular coefficient matrix: no unique solution.
    DegenerateSystem,
    /// A solution tuple did not match the unknown list it was solved for.
    UnrecognizedShape { arity: usize, expected: usize },
    /// Internal solver malfunction.
    SolverFailure(String),
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SolveError::EmptySystem => write!(f, "equation system is empty"),
            SolveError::NonSquareSystem {
                equations,
                unknowns,
            } => write!(
                f,
                "system is not square: {} equation(s) in {} unknown(s)",
                equations, unknowns
            ),
            SolveError::DegenerateSystem => {
                write!(f, "linear system is degenerate, no unique solution")
            }
            SolveError::UnrecognizedShape { arity, expected } => write!(
                f,
                "solver returned a solution of arity {}, expected {}",
                arity, expected
            ),
            SolveError::SolverFailure(msg) => write!(f, "solver failure: {}", msg),
        }
    }
}

impl std::error::Error for SolveError {}

/// One equation of the form `residual = 0`. Constructed from the two sides
/// of an equality, so there is no way to hand the solver a non-equation.
#[derive(Debug, Clone, PartialEq)]
pub struct Equation {
    residual: Expr,
    order: usize,
}

impl Equation {
    /// Builds the equation `lhs = rhs`.
    pub fn new(lhs: Expr, rhs: Expr) -> Equation {
        Equation::from_residual(lhs - rhs)
    }

    /// Builds the equation `residual = 0`.
    pub fn from_residual(residual: Expr) -> Equation {
        let residual = residual.simplify();
        let order = residual.free_variables().len();
        Equation { residual, order }
    }

    pub fn residual(&self) -> &Expr {
        &self.residual
    }

    /// Number of free variables; fixed at construction, never recomputed.
    pub fn order(&self) -> usize {
        self.order
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} = 0, order = {}", self.residual, self.order)
    }
}

/// Raw solver result before normalization. The shape depends on which path
/// ran; it never leaves this module.
#[derive(Debug, Clone, PartialEq)]
pub enum SolverOutput {
    /// The sweep found no roots.
    Empty,
    /// Direct elimination: exactly one mapping from unknown to value.
    Single(HashMap<String, f64>),
    /// Iterative sweep: solution tuples ordered like the unknown list.
    Many(Vec<Vec<f64>>),
}

/// Solves a system of [`Equation`]s over the x, y, z alphabet and
/// normalizes whatever the underlying solver produced into a [`PointSet`].
#[derive(Debug)]
pub struct EquationSolver {
    pub equations: Vec<Equation>,
    /// Highest free-variable count across the system. Advisory - kept for
    /// future tie-breaking between solver paths.
    pub highest_order: usize,
    pub loglevel: Option<String>,
    pub linear_sys_method: Option<String>,
}

impl EquationSolver {
    /// Rejects an empty system eagerly; everything else is checked when
    /// [`solve`](Self::solve) runs.
    pub fn new(equations: Vec<Equation>) -> Result<EquationSolver, SolveError> {
        if equations.is_empty() {
            return Err(SolveError::EmptySystem);
        }
        let highest_order = equations.iter().map(|eq| eq.order()).max().unwrap_or(0);
        Ok(EquationSolver {
            equations,
            highest_order,
            loglevel: Some("off".to_string()),
            linear_sys_method: Some("lu".to_string()),
        })
    }

    pub fn set_solver_params(
        &mut self,
        loglevel: Option<String>,
        linear_sys_method: Option<String>,
    ) {
        if let Some(level) = loglevel {
            assert!(
                ["debug", "info", "warn", "error", "off", "none"].contains(&level.as_str()),
                "loglevel must be debug/info/warn/error or off"
            );
            self.loglevel = Some(level);
        }
        if let Some(method) = linear_sys_method {
            let method = method.to_lowercase();
            assert!(
                method == "lu" || method == "inv",
                "linear_sys_method must be lu or inv"
            );
            self.linear_sys_method = Some(method);
        }
    }

    /// The unknowns of the system: the union of free variables across all
    /// equations, in alphabet order (x before y before z, anything exotic
    /// after that).
    pub fn unknowns(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .equations
            .iter()
            .flat_map(|eq| eq.residual().free_variables())
            .collect();
        names.sort_by_key(|name| {
            (
                COORDINATE_VARS
                    .iter()
                    .position(|v| v == name)
                    .unwrap_or(COORDINATE_VARS.len()),
                name.clone(),
            )
        });
        names.dedup();
        names
    }

    /// Solves the system. An `Ok` with an empty set means the solver ran to
    /// completion and found no roots; every failure mode is a typed error.
    pub fn solver(&self) -> Result<PointSet, SolveError> {
        let unknowns = self.unknowns();
        if unknowns.is_empty() {
            return Err(SolveError::SolverFailure(
                "system has no free variables".to_string(),
            ));
        }
        if self.equations.len() != unknowns.len() {
            return Err(SolveError::NonSquareSystem {
                equations: self.equations.len(),
                unknowns: unknowns.len(),
            });
        }
        let output = self.solve_raw(&unknowns)?;
        let points = normalize_solutions(output, &unknowns)?;
        info!("solve produced {} point(s)", points.len());
        Ok(points)
    }

    // wrapper around solver function to implement logging
    pub fn solve(&self) -> Result<PointSet, SolveError> {
        let is_logging_disabled = self
            .loglevel
            .as_ref()
            .map(|level| level == "off" || level == "none")
            .unwrap_or(true);

        if is_logging_disabled {
            return self.solver();
        }

        let log_option = match self.loglevel.as_deref() {
            Some("debug") => LevelFilter::Debug,
            Some("info") => LevelFilter::Info,
            Some("warn") => LevelFilter::Warn,
            Some("error") => LevelFilter::Error,
            _ => LevelFilter::Info,
        };
        // a second init in the same process fails; the solver runs either way
        let _ = CombinedLogger::init(vec![TermLogger::new(
            log_option,
            Config::default(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        )]);
        let res = self.solver();
        info!("solve finished");
        res
    }

    /// Picks the solver path. A system whose symbolic Jacobian is constant
    /// is linear and goes to direct elimination; everything else goes to
    /// the Newton sweep.
    fn solve_raw(&self, unknowns: &[String]) -> Result<SolverOutput, SolveError> {
        match self.constant_jacobian(unknowns) {
            Some(matrix) => self.solve_linear(unknowns, matrix),
            None => Ok(self.solve_newton(unknowns)),
        }
    }

    /// The coefficient matrix if every Jacobian entry simplifies to a
    /// constant, `None` for a nonlinear system.
    fn constant_jacobian(&self, unknowns: &[String]) -> Option<DMatrix<f64>> {
        let n = unknowns.len();
        let mut entries = Vec::with_capacity(n * n);
        for eq in &self.equations {
            for var in unknowns {
                let entry = eq.residual().diff(var).simplify();
                entries.push(entry.as_const()?);
            }
        }
        Some(DMatrix::from_row_slice(n, n, &entries))
    }

    fn solve_linear(
        &self,
        unknowns: &[String],
        matrix: DMatrix<f64>,
    ) -> Result<SolverOutput, SolveError> {
        let var_refs: Vec<&str> = unknowns.iter().map(|s| s.as_str()).collect();
        let zeros = vec![0.0; unknowns.len()];
        // residual(v) = A*v + residual(0), so the right hand side is -residual(0)
        let rhs: Vec<f64> = self
            .equations
            .iter()
            .map(|eq| -eq.residual().eval_expression(var_refs.clone(), &zeros))
            .collect();
        let method = self.linear_sys_method.as_deref().unwrap_or("lu");
        let solution = solve_linear_system(method, &matrix, &DVector::from_vec(rhs)).map_err(
            |e| match e {
                LinearSolveError::SingularMatrix => SolveError::DegenerateSystem,
                LinearSolveError::UnknownMethod(m) => SolveError::SolverFailure(format!(
                    "unknown linear solver method {:?}",
                    m
                )),
            },
        )?;
        let mapping: HashMap<String, f64> = unknowns
            .iter()
            .cloned()
            .zip(solution.iter().copied())
            .collect();
        Ok(SolverOutput::Single(mapping))
    }

    fn solve_newton(&self, unknowns: &[String]) -> SolverOutput {
        let eq_system: Vec<Expr> = self
            .equations
            .iter()
            .map(|eq| eq.residual().clone())
            .collect();
        let solver = NewtonSolver::new(eq_system, unknowns.to_vec());
        let roots = solver.sweep();
        if roots.is_empty() {
            warn!("Newton sweep found no roots");
            SolverOutput::Empty
        } else {
            SolverOutput::Many(roots)
        }
    }
}

/// Resolves the heterogeneous solver output into the one shape callers see.
/// Tuples are zipped against the ordered unknowns of this call; a tuple of
/// any other arity is an error, not a silent drop.
fn normalize_solutions(
    output: SolverOutput,
    unknowns: &[String],
) -> Result<PointSet, SolveError> {
    match output {
        SolverOutput::Empty => Ok(PointSet::new()),
        SolverOutput::Single(mapping) => {
            let mut point = Point::new();
            for (name, value) in &mapping {
                point.insert(name, *value);
            }
            Ok(PointSet::from_points(vec![point]))
        }
        SolverOutput::Many(tuples) => {
            let mut points = PointSet::new();
            for tuple in tuples {
                if tuple.len() != unknowns.len() {
                    return Err(SolveError::UnrecognizedShape {
                        arity: tuple.len(),
                        expected: unknowns.len(),
                    });
                }
                let mut point = Point::new();
                for (name, value) in izip!(unknowns, tuple) {
                    point.insert(name, value);
                }
                points.push(point);
            }
            Ok(points)
        }
    }
}
