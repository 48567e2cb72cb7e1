//! The gradient family: gradient vector, steepest-ascent rate, unit normal
//! vector, tangent plane with linear approximation, and directional
//! derivative. Everything differentiates through the x, y, z alphabet and
//! substitutes points best-effort - components a point says nothing about
//! stay symbolic.

use crate::calculus::differentiation::Differentiation;
use crate::calculus::points::{COORDINATE_VARS, Point};
use crate::symbolic::symbolic_engine::Expr;
use crate::vector_calculus::vector_ops::{Vector, VectorError};
use std::fmt;

/// Error types for the gradient family
#[derive(Debug, Clone, PartialEq)]
pub enum GradientError {
    /// The gradient vanishes at the point, so no normal direction exists.
    ZeroGradient,
    /// The tangent plane needs the full x, y, z base point.
    MissingCoordinate(String),
}

impl fmt::Display for GradientError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GradientError::ZeroGradient => {
                write!(f, "gradient vanishes at the point, no direction is defined")
            }
            GradientError::MissingCoordinate(name) => {
                write!(f, "point is missing the {} coordinate", name)
            }
        }
    }
}

impl std::error::Error for GradientError {}

/// Gradient of an expression, optionally evaluated at a point.
pub struct FindGradient {
    pub expression: Expr,
    pub point: Option<Point>,
}

impl FindGradient {
    pub fn new(expression: Expr) -> FindGradient {
        FindGradient {
            expression,
            point: None,
        }
    }

    pub fn at_point(expression: Expr, point: Point) -> FindGradient {
        FindGradient {
            expression,
            point: Some(point),
        }
    }

    /// The gradient vector (∂f/∂x, ∂f/∂y, ∂f/∂z), substituted at the held
    /// point when one was given.
    pub fn gradient(&self) -> Vector {
        let [x, y, z] = COORDINATE_VARS.map(|var| {
            Differentiation::new(self.expression.clone(), var).differentiate(self.point.as_ref())
        });
        Vector::new(x, y, z)
    }

    /// Magnitude of the gradient at a point - the rate of steepest ascent.
    pub fn find_direction(&self, point: &Point) -> Expr {
        let gradient = self.gradient();
        let squared = gradient.clone() * gradient;
        let magnitude = (squared.x + squared.y + squared.z).sqrt();
        magnitude.set_variable_from_map(&point.as_map()).simplify()
    }
}

/// Unit normal vector of the surface f(x, y, z) = const at a point: the
/// gradient at the point, normalized.
pub struct FindUnitNormalVector {
    pub expression: Expr,
    pub point: Point,
}

impl FindUnitNormalVector {
    pub fn new(expression: Expr, point: Point) -> FindUnitNormalVector {
        FindUnitNormalVector { expression, point }
    }

    pub fn find(&self) -> Result<Vector, GradientError> {
        let gradient = FindGradient::new(self.expression.clone()).gradient();
        let at_point = gradient.substitute(&self.point);
        at_point.unit_vector().map_err(|e| match e {
            VectorError::ZeroNorm => GradientError::ZeroGradient,
        })
    }
}

/// Tangent plane of the surface z = f(x, y) (or a level surface in three
/// variables) at a base point.
pub struct TangentPlane {
    pub expression: Expr,
    pub point: Point,
}

impl TangentPlane {
    pub fn new(expression: Expr, point: Point) -> TangentPlane {
        TangentPlane { expression, point }
    }

    fn coordinate(&self, name: &str) -> Result<f64, GradientError> {
        self.point
            .get(name)
            .ok_or_else(|| GradientError::MissingCoordinate(name.to_string()))
    }

    /// The plane expression ∇f(p) · (x - x0, y - y0, z - z0), simplified
    /// best-effort.
    pub fn plane(&self) -> Result<Expr, GradientError> {
        let gradient_at_point =
            FindGradient::at_point(self.expression.clone(), self.point.clone()).gradient();
        let offsets = Vector::new(
            Expr::Var("x".to_string()) - Expr::Const(self.coordinate("x")?),
            Expr::Var("y".to_string()) - Expr::Const(self.coordinate("y")?),
            Expr::Var("z".to_string()) - Expr::Const(self.coordinate("z")?),
        );
        Ok(gradient_at_point.dot(&offsets))
    }

    /// Linear approximation around the base point: the plane plus the
    /// function value at the base point, optionally evaluated at an
    /// approximation point.
    pub fn linear_approximation(
        &self,
        approx_point: Option<&Point>,
    ) -> Result<Expr, GradientError> {
        let base_value = self
            .expression
            .set_variable_from_map(&self.point.as_map())
            .simplify();
        let approximation = (self.plane()? + base_value).simplify();
        match approx_point {
            Some(point) => Ok(approximation
                .set_variable_from_map(&point.as_map())
                .simplify()),
            None => Ok(approximation),
        }
    }
}

/// Directional derivative of an expression at a point, along a vector or a
/// planar angle.
pub struct DirectionalDerivative {
    pub expression: Expr,
    pub point: Point,
    pub direction: Vector,
}

impl DirectionalDerivative {
    pub fn new(expression: Expr, point: Point, direction: Vector) -> DirectionalDerivative {
        DirectionalDerivative {
            expression,
            point,
            direction,
        }
    }

    /// Planar direction given by an angle: (cos θ, sin θ, 0).
    pub fn with_angle(expression: Expr, point: Point, angle: f64) -> DirectionalDerivative {
        let direction = Vector::new(
            Expr::Const(angle.cos()),
            Expr::Const(angle.sin()),
            Expr::Const(0.0),
        );
        DirectionalDerivative {
            expression,
            point,
            direction,
        }
    }

    /// ∇f(p) · û where û is the direction normalized to unit length.
    pub fn find(&self) -> Result<Expr, GradientError> {
        let gradient_at_point =
            FindGradient::at_point(self.expression.clone(), self.point.clone()).gradient();
        let unit = self.direction.unit_vector().map_err(|e| match e {
            VectorError::ZeroNorm => GradientError::ZeroGradient,
        })?;
        Ok(gradient_at_point.dot(&unit))
    }
}
