#![allow(non_snake_case)]
/// # Calculus pipeline
/// the critical point pipeline and its consumers: differentiate an
/// expression in up to three variables, equate the surviving partials to
/// zero, solve the system, normalize the solver output into a uniform point
/// set, then classify the points (second derivative test) or scan them for
/// absolute extrema.
///
///# Example#
/// ```
/// use RustedMultiCalc::calculus::critical_points::FindCriticalPoints;
/// use RustedMultiCalc::calculus::second_derivative_test::{CriticalPointKind, SecondDerivativeTest};
/// use RustedMultiCalc::symbolic::symbolic_engine::Expr;
///
/// let expr = Expr::parse_expression("140*x + 180*y - 3*x^2 - 2*y^2 - x*y");
/// let critical_points = FindCriticalPoints::new(expr.clone()).find().unwrap();
/// let (kind, _point) = SecondDerivativeTest::new(expr, critical_points)
///     .unwrap()
///     .classify_first()
///     .unwrap();
/// assert_eq!(kind, CriticalPointKind::LocalMax);
/// ```
/// uniform point representation produced by the solve pipeline
pub mod points;
/// single-variable differentiation wrapper: first, n-th and mixed partials
pub mod differentiation;
/// zero-equations and the solver that normalizes heterogeneous solver
/// output into one point set shape
pub mod equations;
/// critical point discovery
pub mod critical_points;
/// absolute extrema over a critical point set
pub mod extrema;
/// iterated definite integration
pub mod integration;

#[cfg(test)]
pub mod calculus_tests;
