//! Absolute extrema over a critical point set: evaluate the expression at
//! every candidate and track the running maximum and minimum.

use crate::calculus::points::{Point, PointSet};
use crate::symbolic::symbolic_engine::Expr;
use std::fmt;

/// Error types for the extrema scan
#[derive(Debug, Clone, PartialEq)]
pub enum ExtremaError {
    /// The scan needs at least one critical point.
    EmptyPointSet,
    /// The expression did not reduce to a number at a point, so the running
    /// comparisons are impossible.
    NonNumericValue { value: String, point: String },
}

impl fmt::Display for ExtremaError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ExtremaError::EmptyPointSet => {
                write!(f, "got empty critical points, at least one point is needed")
            }
            ExtremaError::NonNumericValue { value, point } => {
                write!(f, "expression value {} at {} is not a number", value, point)
            }
        }
    }
}

impl std::error::Error for ExtremaError {}

/// The extreme values over the candidate set, together with the points
/// achieving them.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtremeValues {
    pub absolute_max: f64,
    pub max_point: Point,
    pub absolute_min: f64,
    pub min_point: Point,
}

/// Scans a critical point set for the absolute maximum and minimum of an
/// expression.
#[derive(Debug)]
pub struct AbsoluteValues {
    pub expression: Expr,
    critical_points: PointSet,
}

impl AbsoluteValues {
    /// Rejects an empty point set eagerly.
    pub fn new(
        expression: Expr,
        critical_points: PointSet,
    ) -> Result<AbsoluteValues, ExtremaError> {
        if critical_points.is_empty() {
            return Err(ExtremaError::EmptyPointSet);
        }
        Ok(AbsoluteValues {
            expression,
            critical_points,
        })
    }

    /// Walks the candidates in set order. The maximum only moves on a
    /// strictly greater value; the minimum moves on less-or-equal, so a tie
    /// hands the minimum to the later point. Callers depending on the
    /// tie-break get the same answer the reference implementation gave.
    pub fn find(&self) -> Result<ExtremeValues, ExtremaError> {
        let mut maximum = f64::NEG_INFINITY;
        let mut minimum = f64::INFINITY;
        let mut max_point = Point::new();
        let mut min_point = Point::new();

        for point in &self.critical_points {
            let value = self
                .expression
                .set_variable_from_map(&point.as_map())
                .simplify();
            let value = value.as_const().ok_or_else(|| ExtremaError::NonNumericValue {
                value: value.to_string(),
                point: point.to_string(),
            })?;

            if value > maximum {
                maximum = value;
                max_point = point.clone();
            }
            if value <= minimum {
                minimum = value;
                min_point = point.clone();
            }
        }

        Ok(ExtremeValues {
            absolute_max: maximum,
            max_point,
            absolute_min: minimum,
            min_point,
        })
    }
}
