#![allow(non_snake_case)]
/// # Vector calculus helpers
/// a thin symbolic vector type plus the gradient family: gradient,
/// steepest-ascent rate, unit normal vector, tangent plane and linear
/// approximation, directional derivative.
///
///# Example#
/// ```
/// use RustedMultiCalc::calculus::points::Point;
/// use RustedMultiCalc::symbolic::symbolic_engine::Expr;
/// use RustedMultiCalc::vector_calculus::gradient::FindGradient;
///
/// let expr = Expr::parse_expression("x^2 + y^2 + z^2");
/// let point = Point::from_pairs([("x", 1.0), ("y", 2.0), ("z", 2.0)]);
/// let rate = FindGradient::new(expr).find_direction(&point);
/// assert_eq!(rate, Expr::Const(6.0));
/// ```
/// fixed 3-component symbolic vector
pub mod vector_ops;
/// gradient, unit normal, tangent plane, directional derivative
pub mod gradient;
