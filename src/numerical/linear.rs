//! Direct linear system solving. Small seam over nalgebra so the equation
//! layer can pick the method by name the way the solver parameters spell it.

use log::info;
use nalgebra::{DMatrix, DVector};
use std::fmt;

/// Error types for the direct linear solvers
#[derive(Debug, Clone, PartialEq)]
pub enum LinearSolveError {
    /// The coefficient matrix is singular (no unique solution).
    SingularMatrix,
    /// Unknown method name in the solver parameters.
    UnknownMethod(String),
}

impl fmt::Display for LinearSolveError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LinearSolveError::SingularMatrix => {
                write!(f, "coefficient matrix is singular, no unique solution")
            }
            LinearSolveError::UnknownMethod(name) => {
                write!(f, "unknown linear solver method {:?}, expected lu or inv", name)
            }
        }
    }
}

impl std::error::Error for LinearSolveError {}

/// Solves A*x = b with the named method ("lu" or "inv").
pub fn solve_linear_system(
    method: &str,
    A: &DMatrix<f64>,
    b: &DVector<f64>,
) -> Result<DVector<f64>, LinearSolveError> {
    match method {
        "lu" => {
            let lu = A.clone().lu();
            match lu.solve(b) {
                Some(x) => {
                    info!("linear system solved: {}", x.transpose());
                    Ok(x)
                }
                None => Err(LinearSolveError::SingularMatrix),
            }
        }
        "inv" => match A.clone().try_inverse() {
            Some(A_inv) => Ok(A_inv * b),
            None => Err(LinearSolveError::SingularMatrix),
        },
        _ => Err(LinearSolveError::UnknownMethod(method.to_string())),
    }
}

///////////////////////////////////////////////////////////////////////////////////////////////////////////////////
//                                     TESTS
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_lu_solves_3x3() {
        let A = DMatrix::from_row_slice(3, 3, &[2.0, 1.0, 1.0, 3.0, 5.0, 3.0, 6.0, -4.0, 1.0]);
        let b = DVector::from_vec(vec![2.0, 8.0, 4.0]);
        let x = solve_linear_system("lu", &A, &b).unwrap();
        assert_relative_eq!(x[0], -2.0, epsilon = 1e-10);
        assert_relative_eq!(x[1], -2.0, epsilon = 1e-10);
        assert_relative_eq!(x[2], 8.0, epsilon = 1e-10);
    }

    #[test]
    fn test_inv_matches_lu() {
        let A = DMatrix::from_row_slice(2, 2, &[4.0, 1.0, 2.0, 3.0]);
        let b = DVector::from_vec(vec![1.0, 5.0]);
        let by_lu = solve_linear_system("lu", &A, &b).unwrap();
        let by_inv = solve_linear_system("inv", &A, &b).unwrap();
        assert_relative_eq!((by_lu - by_inv).norm(), 0.0, epsilon = 1e-10);
    }

    #[test]
    fn test_singular_matrix_is_reported() {
        let A = DMatrix::from_row_slice(2, 2, &[1.0, 2.0, 2.0, 4.0]);
        let b = DVector::from_vec(vec![1.0, 2.0]);
        let err = solve_linear_system("lu", &A, &b).unwrap_err();
        assert_eq!(err, LinearSolveError::SingularMatrix);
    }

    #[test]
    fn test_unknown_method_is_reported() {
        let A = DMatrix::identity(2, 2);
        let b = DVector::zeros(2);
        let err = solve_linear_system("qr", &A, &b).unwrap_err();
        assert_eq!(err, LinearSolveError::UnknownMethod("qr".to_string()));
    }
}
