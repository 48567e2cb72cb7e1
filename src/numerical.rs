#![allow(non_snake_case)]
/// linear system solving (LU or explicit inverse) over nalgebra matrices
pub mod linear;
///  Newton-Raphson iteration for nonlinear systems of symbolic equations,
///  swept from a deterministic grid of initial guesses so several roots can
///  be collected in one call
///  Example#
/// ```
/// use RustedMultiCalc::numerical::newton::NewtonSolver;
/// use RustedMultiCalc::symbolic::symbolic_engine::Expr;
/// let eq_system = vec![
///     Expr::parse_expression("x^2 + y^2 - 10"),
///     Expr::parse_expression("x - y - 4"),
/// ];
/// let solver = NewtonSolver::new(eq_system, vec!["x".to_string(), "y".to_string()]);
/// let roots = solver.sweep();
/// assert_eq!(roots.len(), 2);
/// ```
pub mod newton;
