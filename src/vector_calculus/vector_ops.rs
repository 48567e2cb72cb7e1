//! Fixed 3-component symbolic vector. Components are expressions; numeric
//! vectors just carry constants. Arithmetic is component-wise, including
//! vector * vector; scalar scaling goes through `Mul<Expr>` or `scale`.

use crate::calculus::points::Point;
use crate::symbolic::symbolic_engine::Expr;
use std::fmt;

/// Error types for vector operations
#[derive(Debug, Clone, PartialEq)]
pub enum VectorError {
    /// Normalizing the zero vector: the division is not well-formed.
    ZeroNorm,
}

impl fmt::Display for VectorError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            VectorError::ZeroNorm => write!(f, "cannot normalize a vector of zero length"),
        }
    }
}

impl std::error::Error for VectorError {}

/// Symbolic vector with x, y, z components.
#[derive(Debug, Clone, PartialEq)]
pub struct Vector {
    pub x: Expr,
    pub y: Expr,
    pub z: Expr,
}

impl Vector {
    pub fn new(x: Expr, y: Expr, z: Expr) -> Vector {
        Vector { x, y, z }
    }

    /// Vector of plain numbers.
    pub fn numeric(x: f64, y: f64, z: f64) -> Vector {
        Vector {
            x: Expr::Const(x),
            y: Expr::Const(y),
            z: Expr::Const(z),
        }
    }

    pub fn zeros() -> Vector {
        Vector::numeric(0.0, 0.0, 0.0)
    }

    pub fn components(&self) -> [Expr; 3] {
        [self.x.clone(), self.y.clone(), self.z.clone()]
    }

    /// Dot product (symbolic), simplified.
    pub fn dot(&self, other: &Vector) -> Expr {
        (self.x.clone() * other.x.clone()
            + self.y.clone() * other.y.clone()
            + self.z.clone() * other.z.clone())
        .simplify()
    }

    /// Euclidean norm: square root of the sum of squared components,
    /// simplified.
    pub fn norm(&self) -> Expr {
        let sum_of_squares = self.x.clone().pow(Expr::Const(2.0))
            + self.y.clone().pow(Expr::Const(2.0))
            + self.z.clone().pow(Expr::Const(2.0));
        sum_of_squares.sqrt().simplify()
    }

    /// Unit vector in the direction of this vector. Fails on a vector whose
    /// norm simplifies to zero.
    pub fn unit_vector(&self) -> Result<Vector, VectorError> {
        let norm = self.norm();
        if norm.is_zero() {
            return Err(VectorError::ZeroNorm);
        }
        Ok(Vector {
            x: (self.x.clone() / norm.clone()).simplify(),
            y: (self.y.clone() / norm.clone()).simplify(),
            z: (self.z.clone() / norm).simplify(),
        })
    }

    /// Scalar multiple.
    pub fn scale(&self, scalar: &Expr) -> Vector {
        Vector {
            x: (scalar.clone() * self.x.clone()).simplify(),
            y: (scalar.clone() * self.y.clone()).simplify(),
            z: (scalar.clone() * self.z.clone()).simplify(),
        }
    }

    /// Simplifies every component.
    pub fn simplify(&self) -> Vector {
        Vector {
            x: self.x.simplify(),
            y: self.y.simplify(),
            z: self.z.simplify(),
        }
    }

    /// Substitutes a point into every component.
    pub fn substitute(&self, point: &Point) -> Vector {
        let map = point.as_map();
        Vector {
            x: self.x.set_variable_from_map(&map).simplify(),
            y: self.y.set_variable_from_map(&map).simplify(),
            z: self.z.set_variable_from_map(&map).simplify(),
        }
    }
}

impl std::ops::Add for Vector {
    type Output = Vector;

    fn add(self, other: Vector) -> Vector {
        Vector {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl std::ops::Sub for Vector {
    type Output = Vector;

    fn sub(self, other: Vector) -> Vector {
        Vector {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

/// Component-wise product, the shape the gradient-magnitude computation
/// consumes.
impl std::ops::Mul for Vector {
    type Output = Vector;

    fn mul(self, other: Vector) -> Vector {
        Vector {
            x: self.x * other.x,
            y: self.y * other.y,
            z: self.z * other.z,
        }
    }
}

/// Scaling by a symbolic or numeric expression.
impl std::ops::Mul<Expr> for Vector {
    type Output = Vector;

    fn mul(self, scalar: Expr) -> Vector {
        self.scale(&scalar)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "({}, {}, {})",
            self.x.simplify(),
            self.y.simplify(),
            self.z.simplify()
        )
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
    fn test_componentwise_arithmetic() {
        let a = Vector::numeric(1.0, 2.0, 3.0);
        let b = Vector::numeric(4.0, 5.0, 6.0);
        let sum = (a.clone() + b.clone()).simplify();
        assert_eq!(sum, Vector::numeric(5.0, 7.0, 9.0));
        let diff = (b.clone() - a.clone()).simplify();
        assert_eq!(diff, Vector::numeric(3.0, 3.0, 3.0));
        let prod = (a * b).simplify();
        assert_eq!(prod, Vector::numeric(4.0, 10.0, 18.0));
    }

    #[test]
    fn test_scalar_scaling() {
        let v = Vector::new(
            Expr::Var("x".to_string()),
            Expr::Const(2.0),
            Expr::Const(0.0),
        );
        let scaled = v * Expr::Const(3.0);
        assert_eq!(scaled.y, Expr::Const(6.0));
        assert_eq!(scaled.z, Expr::Const(0.0));
    }

    #[test]
    fn test_dot_product() {
        let a = Vector::numeric(1.0, 2.0, 3.0);
        let b = Vector::numeric(4.0, -5.0, 6.0);
        assert_eq!(a.dot(&b), Expr::Const(12.0));
    }

    #[test]
    fn test_unit_vector_of_axis_vector_is_itself() {
        let v = Vector::numeric(1.0, 0.0, 0.0);
        let unit = v.unit_vector().unwrap();
        assert_eq!(unit, Vector::numeric(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_unit_vector_has_unit_norm() {
        let v = Vector::numeric(3.0, 4.0, 12.0);
        let unit = v.unit_vector().unwrap();
        assert_relative_eq!(unit.norm().as_const().unwrap(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_vector_cannot_be_normalized() {
        assert_eq!(Vector::zeros().unit_vector().unwrap_err(), VectorError::ZeroNorm);
    }
}
