use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// A breakpoint of a skyline: from `x` onwards the outline stands at `height`
/// until the next point supersedes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: i64,
    pub height: i64,
}

impl Point {
    pub fn new(x: i64, height: i64) -> Self {
        Self { x, height }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.height)
    }
}

/// One input record. Field order matches the `left,right,height` line format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Building {
    pub left: i64,
    pub right: i64,
    pub height: i64,
}

impl Building {
    pub fn new(left: i64, right: i64, height: i64) -> Self {
        Self {
            left,
            right,
            height,
        }
    }

    /// Rise at the left edge, fall to zero at the right edge.
    pub fn key_points(&self) -> [Point; 2] {
        [Point::new(self.left, self.height), Point::new(self.right, 0)]
    }

    pub fn is_well_formed(&self) -> bool {
        self.left < self.right && self.height >= 0
    }
}

/// Ordered outline of a set of buildings.
///
/// A skyline is never mutated once built; merging borrows two skylines and
/// produces a new owned one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Skyline {
    points: Vec<Point>,
}

impl Skyline {
    pub fn from_points(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn from_building(building: &Building) -> Self {
        Self {
            points: building.key_points().to_vec(),
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn abscissas(&self) -> Vec<i64> {
        self.points.iter().map(|p| p.x).collect()
    }

    pub fn heights(&self) -> Vec<i64> {
        self.points.iter().map(|p| p.height).collect()
    }

    pub fn into_points(self) -> Vec<Point> {
        self.points
    }
}

impl fmt::Display for Skyline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for point in &self.points {
            write!(f, "{}", point)?;
        }
        Ok(())
    }
}

/// Result of the transform stage: the final skyline plus any trace blocks
/// buffered for a file destination.
#[derive(Debug, Clone)]
pub struct TransformResult {
    pub skyline: Skyline,
    pub trace_log: Vec<String>,
    pub building_count: usize,
}

/// Where the load stage delivered the rendered skyline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    File(PathBuf),
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Destination::Stdout => write!(f, "standard output"),
            Destination::File(path) => write!(f, "{}", path.display()),
        }
    }
}
