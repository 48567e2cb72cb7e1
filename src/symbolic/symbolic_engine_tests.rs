use crate::symbolic::symbolic_engine::Expr;
use approx::assert_relative_eq;
use std::f64::consts::PI;
//___________________________________TESTS____________________________________

#[test]
fn test_operator_overloads_build_trees() {
    let x = Expr::Var("x".to_string());
    let expr = x.clone() + Expr::Const(2.0);
    let expected = Expr::Add(
        Box::new(Expr::Var("x".to_string())),
        Box::new(Expr::Const(2.0)),
    );
    assert_eq!(expr, expected);

    let neg = -x;
    let expected = Expr::Mul(
        Box::new(Expr::Const(-1.0)),
        Box::new(Expr::Var("x".to_string())),
    );
    assert_eq!(neg, expected);
}

#[test]
fn test_assign_operators() {
    let mut expr = Expr::Var("x".to_string());
    expr += Expr::Const(2.0);
    expr *= Expr::Const(3.0);
    assert_relative_eq!(expr.eval_expression(vec!["x"], &[1.0]), 9.0);
}

#[test]
fn test_symbols_constructor() {
    let vars = Expr::Symbols("x, y, z");
    assert_eq!(vars.len(), 3);
    assert_eq!(vars[2], Expr::Var("z".to_string()));
    assert!(Expr::Symbols(" , ").is_empty());
}

#[test]
fn test_display() {
    let expr = Expr::parse_expression("x^2");
    assert_eq!(expr.to_string(), "(x ^ 2)");
    let expr = Expr::parse_expression("sin(x)/2");
    assert_eq!(expr.to_string(), "(sin(x) / 2)");
}

#[test]
fn test_parse_arithmetic_precedence() {
    let expr = Expr::parse_expression("1 + 2*3^2");
    assert_eq!(expr.simplify(), Expr::Const(19.0));
}

#[test]
fn test_parse_unary_minus_and_functions() {
    let expr = Expr::parse_expression("-3*x + exp(0) + sqrt(16)");
    assert_relative_eq!(expr.simplify().eval_expression(vec!["x"], &[2.0]), -1.0);
}

#[test]
fn test_parse_pi_literal() {
    let expr = Expr::parse_expression("cos(pi)");
    assert_relative_eq!(expr.simplify().as_const().unwrap(), -1.0);
}

#[test]
fn test_parse_reports_malformed_input() {
    assert!(Expr::try_parse("2*+x").is_err());
    assert!(Expr::try_parse("(x + 1").is_err());
    assert!(Expr::try_parse("foo(x)").is_err());
    assert!(Expr::try_parse("").is_err());
}

#[test]
fn test_eval_expression_multivariable() {
    let expr = Expr::parse_expression("140*x + 180*y - 3*x^2 - 2*y^2 - x*y");
    assert_relative_eq!(expr.eval_expression(vec!["x", "y"], &[1.0, 2.0]), 487.0);
}

#[test]
fn test_free_variables_are_deduplicated_and_sorted() {
    let expr = Expr::parse_expression("z*x + sin(y)*x");
    let vars: Vec<String> = expr.free_variables().into_iter().collect();
    assert_eq!(vars, vec!["x".to_string(), "y".to_string(), "z".to_string()]);
}

#[test]
fn test_set_variable_keeps_others_symbolic() {
    let expr = Expr::parse_expression("x*y + z");
    let substituted = expr.set_variable("y", 3.0).simplify();
    assert!(substituted.contains_variable("x"));
    assert!(!substituted.contains_variable("y"));
    assert_relative_eq!(
        substituted.eval_expression(vec!["x", "z"], &[2.0, 1.0]),
        7.0
    );
}

#[test]
fn test_substitute_variable_with_expression() {
    // x -> pi in cos(x)
    let expr = Expr::parse_expression("cos(x)");
    let substituted = expr.substitute_variable("x", &Expr::Const(PI));
    assert_relative_eq!(substituted.simplify().as_const().unwrap(), -1.0);
}

//___________________________________DERIVATIVES____________________________________

/// numeric spot check: analytic derivative against a central difference
fn check_derivative(input: &str, var: &str, at: f64) {
    let expr = Expr::parse_expression(input);
    let analytic = expr.diff(var).simplify().eval_expression(vec![var], &[at]);
    let h = 1e-6;
    let numeric = (expr.eval_expression(vec![var], &[at + h])
        - expr.eval_expression(vec![var], &[at - h]))
        / (2.0 * h);
    assert_relative_eq!(analytic, numeric, epsilon = 1e-5);
}

#[test]
fn test_diff_power_rule() {
    check_derivative("x^3", "x", 1.7);
}

#[test]
fn test_diff_product_rule() {
    check_derivative("x^2*sin(x)", "x", 0.9);
}

#[test]
fn test_diff_quotient_rule() {
    check_derivative("sin(x)/x", "x", 2.3);
}

#[test]
fn test_diff_chain_rule() {
    check_derivative("cos(x^2)", "x", 1.1);
    check_derivative("exp(2*x)", "x", 0.4);
    check_derivative("ln(x^2 + 1)", "x", 1.3);
}

#[test]
fn test_diff_variable_exponent() {
    // x^x needs the exp/ln rewrite
    check_derivative("x^x", "x", 1.5);
}

#[test]
fn test_diff_of_unrelated_variable_is_zero() {
    let expr = Expr::parse_expression("x^2 + 7");
    assert!(expr.diff("y").simplify().is_zero());
}

//___________________________________SIMPLIFICATION____________________________________

#[test]
fn test_simplify_constant_folding() {
    assert_eq!(Expr::parse_expression("2 + 3*4").simplify(), Expr::Const(14.0));
    assert_eq!(Expr::parse_expression("2^10").simplify(), Expr::Const(1024.0));
}

#[test]
fn test_simplify_identities() {
    let x = Expr::Var("x".to_string());
    assert_eq!((x.clone() + Expr::Const(0.0)).simplify(), x.clone());
    assert_eq!((x.clone() * Expr::Const(1.0)).simplify(), x.clone());
    assert_eq!((x.clone() * Expr::Const(0.0)).simplify(), Expr::Const(0.0));
    assert_eq!((x.clone() - x.clone()).simplify(), Expr::Const(0.0));
    assert_eq!((x.clone() / x.clone()).simplify(), Expr::Const(1.0));
    assert_eq!(x.clone().pow(Expr::Const(1.0)).simplify(), x.clone());
    assert_eq!(x.clone().pow(Expr::Const(0.0)).simplify(), Expr::Const(1.0));
}

#[test]
fn test_simplify_collects_constant_factors() {
    // (2 * x) * 3 = 6 * x
    let expr = Expr::parse_expression("2*x*3");
    let expected = Expr::Const(6.0) * Expr::Var("x".to_string());
    assert_eq!(expr.simplify(), expected);
}

#[test]
fn test_simplify_transcendental_constants() {
    assert_eq!(Expr::parse_expression("exp(0)").simplify(), Expr::Const(1.0));
    assert_eq!(Expr::parse_expression("sin(0)").simplify(), Expr::Const(0.0));
    assert_eq!(Expr::parse_expression("ln(exp(x))").simplify(), Expr::Var("x".to_string()));
}

#[test]
fn test_sqrt_is_the_half_power() {
    let expr = Expr::Const(2.0).sqrt();
    assert_eq!(
        expr,
        Expr::Pow(Box::new(Expr::Const(2.0)), Box::new(Expr::Const(0.5)))
    );
    assert_relative_eq!(expr.simplify().as_const().unwrap(), 2.0_f64.sqrt());
}

//___________________________________INTEGRATION____________________________________

#[test]
fn test_integrate_power_rule() {
    let expr = Expr::parse_expression("x^2");
    let integral = expr.integrate("x").unwrap().simplify();
    assert_relative_eq!(integral.eval_expression(vec!["x"], &[3.0]), 9.0);
}

#[test]
fn test_integrate_reciprocal_is_ln() {
    // the parser spells the exponent as (-1)*1, simplify collapses it
    let expr = Expr::parse_expression("x^-1").simplify();
    assert_eq!(
        expr.integrate("x").unwrap(),
        Expr::Ln(Box::new(Expr::Var("x".to_string())))
    );
}

#[test]
fn test_integrate_linearity_and_constants() {
    // ∫ (3*x + 2*y) dx = 1.5*x^2 + 2*y*x
    let expr = Expr::parse_expression("3*x + 2*y");
    let integral = expr.integrate("x").unwrap().simplify();
    assert_relative_eq!(
        integral.eval_expression(vec!["x", "y"], &[2.0, 5.0]),
        26.0
    );
}

#[test]
fn test_integrate_trig_of_linear_argument() {
    // ∫ cos(2*x) dx = sin(2*x)/2
    let expr = Expr::parse_expression("cos(2*x)");
    let integral = expr.integrate("x").unwrap().simplify();
    assert_relative_eq!(
        integral.eval_expression(vec!["x"], &[0.7]),
        (1.4_f64).sin() / 2.0,
        epsilon = 1e-12
    );
}

#[test]
fn test_integrate_exponential_of_linear_argument() {
    // ∫ exp(3*x) dx = exp(3*x)/3
    let expr = Expr::parse_expression("exp(3*x)");
    let integral = expr.integrate("x").unwrap().simplify();
    assert_relative_eq!(
        integral.eval_expression(vec!["x"], &[0.5]),
        (1.5_f64).exp() / 3.0,
        epsilon = 1e-12
    );
}

#[test]
fn test_integrate_rejects_shapes_outside_the_table() {
    assert!(Expr::parse_expression("sin(x)*cos(x)").integrate("x").is_err());
    assert!(Expr::parse_expression("sin(x^2)").integrate("x").is_err());
}
