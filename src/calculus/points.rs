//! Uniform point representation for the solve pipeline. Whatever shape the
//! underlying solver produced, callers downstream only ever see `Point`s
//! collected in a `PointSet`.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// The fixed variable alphabet of the critical point pipeline, in solver
/// order. Auxiliary names (r, theta, ...) appear only as integration
/// variables and never reach this pipeline.
pub const COORDINATE_VARS: [&str; 3] = ["x", "y", "z"];

/// One candidate location in the domain: an ordered mapping from variable
/// name to value. All points produced by one solve call carry the same key
/// set - the ordered unknowns of that call.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Point {
    coords: BTreeMap<String, f64>,
}

impl Point {
    pub fn new() -> Point {
        Point {
            coords: BTreeMap::new(),
        }
    }

    /// Builds a point from (variable, value) pairs.
    ///
    /// # Examples
    /// ```rust, ignore
    /// let p = Point::from_pairs([("x", 4.0), ("y", 1.0)]);
    /// ```
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, f64)>) -> Point {
        let coords = pairs
            .into_iter()
            .map(|(name, value)| (name.to_string(), value))
            .collect();
        Point { coords }
    }

    pub fn insert(&mut self, name: &str, value: f64) {
        self.coords.insert(name.to_string(), value);
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.coords.get(name).copied()
    }

    /// Variable names of the point, alphabetically ordered.
    pub fn vars(&self) -> Vec<&str> {
        self.coords.keys().map(|k| k.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Substitution map view for `Expr::set_variable_from_map`.
    pub fn as_map(&self) -> HashMap<String, f64> {
        self.coords
            .iter()
            .map(|(k, v)| (k.clone(), *v))
            .collect()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (name, value)) in self.coords.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", name, value)?;
        }
        write!(f, "}}")
    }
}

/// Ordered collection of candidate points; the order is the solver's
/// enumeration of found solutions and carries no further meaning.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PointSet {
    points: Vec<Point>,
}

impl PointSet {
    pub fn new() -> PointSet {
        PointSet { points: Vec::new() }
    }

    pub fn from_points(points: Vec<Point>) -> PointSet {
        PointSet { points }
    }

    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&Point> {
        self.points.first()
    }

    pub fn iter(&self) -> std::slice::Iter<Point> {
        self.points.iter()
    }
}

impl IntoIterator for PointSet {
    type Item = Point;
    type IntoIter = std::vec::IntoIter<Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl fmt::Display for PointSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[")?;
        for (i, point) in self.points.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", point)?;
        }
        write!(f, "]")
    }
}
