//! # Brute Force Solver
//!
//! Examines every unordered pair - O(n²) distance evaluations.
//!
//! Good for:
//! - Small sets (the divide-and-conquer base case uses it)
//! - A trusted reference to validate the fast solver against
//!
//! Not good for:
//! - Large sets (use `DivideAndConquer` instead)

use super::solver::{require_pair, ClosestPair, SolveResult, Solver};
use super::Point;

/// Brute force solver - compares all pairs
#[derive(Clone, Copy, Debug, Default)]
pub struct BruteForce;

/// Scan every pair (i, j), i < j, keeping the first minimum encountered.
///
/// Strict `<` comparison means ties are broken by iteration order:
/// earlier `i`, then earlier `j`, wins. Callers guarantee `len >= 2`.
pub(crate) fn scan(points: &[Point]) -> ClosestPair {
    debug_assert!(points.len() >= 2);

    let mut best = ClosestPair::new(points[0], points[1]);
    for i in 0..points.len() {
        for j in (i + 1)..points.len() {
            let d = points[i].distance(&points[j]);
            if d < best.distance {
                best = ClosestPair {
                    a: points[i],
                    b: points[j],
                    distance: d,
                };
            }
        }
    }
    best
}

impl Solver for BruteForce {
    fn closest_pair(&self, points: &[Point]) -> SolveResult<ClosestPair> {
        require_pair(points)?;
        Ok(scan(points))
    }

    fn name(&self) -> &'static str {
        "brute_force"
    }
}
