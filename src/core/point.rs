//! # Point
//!
//! A position in the plane. The fundamental primitive.
//!
//! Points are plain coordinate pairs: no identity, no payload. Two points
//! with the same coordinates are equal, and duplicates are legal inside a
//! point set (they simply form a zero-distance pair).

use serde::{Deserialize, Serialize};

/// A point in the plane
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

impl Point {
    /// Create a new point from its coordinates
    ///
    /// # Example
    /// ```
    /// use closest_pair_quest::Point;
    /// let p = Point::new(3.0, 4.0);
    /// assert_eq!(p.x, 3.0);
    /// assert_eq!(p.y, 4.0);
    /// ```
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance to another point
    ///
    /// Cheaper than [`distance`](Self::distance) when only comparing.
    pub fn distance_squared(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Euclidean distance to another point
    ///
    /// Both solvers measure through this single primitive, so their
    /// results are bit-for-bit comparable.
    ///
    /// # Example
    /// ```
    /// use closest_pair_quest::Point;
    /// let a = Point::new(0.0, 0.0);
    /// let b = Point::new(3.0, 4.0);
    /// assert!((a.distance(&b) - 5.0).abs() < 1e-12);
    /// ```
    pub fn distance(&self, other: &Point) -> f64 {
        self.distance_squared(other).sqrt()
    }
}
