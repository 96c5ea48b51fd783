//! Ideological Positions
//!
//! A position on the two-axis ideological compass and the distance metric
//! used for both party affiliation and voting.
//!
//! # Example
//!
//! ```
//! use legislature_events::{distance, Point};
//!
//! let a = Point::new(0.0, 0.0);
//! let b = Point::new(3.0, 4.0);
//! assert_eq!(distance(a, b), 5.0);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lower bound of each compass axis.
pub const AXIS_MIN: f64 = -10.0;

/// Upper bound of each compass axis.
pub const AXIS_MAX: f64 = 10.0;

/// A point on the ideological plane.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns this point shifted by the given offsets.
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(self, other: Point) -> f64 {
        distance(self, other)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

/// Standard Euclidean distance between two points.
pub fn distance(p1: Point, p2: Point) -> f64 {
    (p2.x - p1.x).hypot(p2.y - p1.y)
}
