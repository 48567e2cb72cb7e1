//! Pipeline tests: differentiation feeding the equation solver feeding
//! classification and the extrema scan, the way callers chain the pieces.

use crate::calculus::critical_points::FindCriticalPoints;
use crate::calculus::differentiation::Differentiation;
use crate::calculus::extrema::AbsoluteValues;
use crate::calculus::second_derivative_test::{CriticalPointKind, SecondDerivativeTest};
use crate::symbolic::symbolic_engine::Expr;
use approx::assert_relative_eq;

fn quadratic_surface() -> Expr {
    Expr::parse_expression("140*x + 180*y - 3*x^2 - 2*y^2 - x*y")
}

#[test]
fn test_nth_differentiation_equals_repeated_differentiation() {
    let expr = Expr::parse_expression("exp(2*x) + x^5");
    for n in 1..=4 {
        let by_order = Differentiation::new(expr.clone(), "x")
            .nth_differentiation(n)
            .unwrap();

        let mut repeated = expr.clone();
        for _ in 0..n {
            repeated = Differentiation::new(repeated, "x").differentiate(None);
        }

        // same function, whatever the tree shapes - compare numerically
        assert_relative_eq!(
            by_order.eval_expression(vec!["x"], &[0.3]),
            repeated.eval_expression(vec!["x"], &[0.3]),
            epsilon = 1e-9
        );
    }
}

#[test]
fn test_quadratic_surface_full_pipeline() {
    // find the critical point, classify it, and read the peak value
    let expr = quadratic_surface();

    let points = FindCriticalPoints::new(expr.clone()).find().unwrap();
    assert_eq!(points.len(), 1);
    let point = points.first().unwrap();
    assert_eq!(point.vars(), vec!["x", "y"]);
    assert_relative_eq!(point.get("x").unwrap(), 380.0 / 23.0, epsilon = 1e-9);
    assert_relative_eq!(point.get("y").unwrap(), 940.0 / 23.0, epsilon = 1e-9);

    let test = SecondDerivativeTest::new(expr.clone(), points.clone()).unwrap();
    let (kind, classified_point) = test.classify_first().unwrap();
    assert_eq!(kind, CriticalPointKind::LocalMax);
    assert_eq!(&classified_point, point);

    let extrema = AbsoluteValues::new(expr, points).unwrap().find().unwrap();
    assert_relative_eq!(extrema.absolute_max, 111200.0 / 23.0, epsilon = 1e-8);
    // a single candidate is both extremes
    assert_relative_eq!(extrema.absolute_min, extrema.absolute_max);
}

#[test]
fn test_nonlinear_critical_points_classify_per_root() {
    // f = x^3/3 - x + y^2: grad = (x^2 - 1, 2*y), roots (-1, 0) and (1, 0)
    let expr = Expr::parse_expression("x^3/3 - x + y^2");

    let points = FindCriticalPoints::new(expr.clone()).find().unwrap();
    assert_eq!(points.len(), 2);
    // the sweep orders roots componentwise
    assert_relative_eq!(points.first().unwrap().get("x").unwrap(), -1.0, epsilon = 1e-6);

    let test = SecondDerivativeTest::new(expr, points).unwrap();

    // classify_first only ever reports the first root
    let (kind, point) = test.classify_first().unwrap();
    assert_eq!(kind, CriticalPointKind::SaddlePoint);
    assert_relative_eq!(point.get("x").unwrap(), -1.0, epsilon = 1e-6);

    // classify_all files both
    let all = test.classify_all().unwrap();
    assert_eq!(all.points(CriticalPointKind::SaddlePoint).len(), 1);
    let minima = all.points(CriticalPointKind::LocalMin);
    assert_eq!(minima.len(), 1);
    assert_relative_eq!(minima.first().unwrap().get("x").unwrap(), 1.0, epsilon = 1e-6);
}

#[test]
fn test_critical_points_round_trip_through_the_partials() {
    let expr = Expr::parse_expression("x^3/3 - x + y^2");
    let points = FindCriticalPoints::new(expr.clone()).find().unwrap();
    for point in &points {
        for var in ["x", "y"] {
            let residual = Differentiation::new(expr.clone(), var)
                .differentiate(Some(point))
                .as_const()
                .unwrap();
            assert_relative_eq!(residual, 0.0, epsilon = 1e-6);
        }
    }
}

#[test]
fn test_function_of_y_only_keeps_x_out_of_the_points() {
    // grad has no x component: the x partial is dropped and the point keys
    // shrink accordingly
    let expr = Expr::parse_expression("y^2 - 6*y");
    let points = FindCriticalPoints::new(expr.clone()).find().unwrap();
    assert_eq!(points.len(), 1);
    let point = points.first().unwrap();
    assert_eq!(point.vars(), vec!["y"]);
    assert_relative_eq!(point.get("y").unwrap(), 3.0, epsilon = 1e-10);

    let extrema = AbsoluteValues::new(expr, points).unwrap().find().unwrap();
    assert_relative_eq!(extrema.absolute_min, -9.0, epsilon = 1e-10);
}
