//! # Divide & Conquer Solver
//!
//! The classic O(n log n) closest-pair algorithm.
//!
//! Sort once by x, split at the midpoint, recurse on each half, then check
//! the vertical strip around the dividing line for cross-boundary pairs.
//! The strip scan is bounded: points are visited in y-order and each one is
//! compared only against neighbors whose y-gap is below the current best
//! distance, which the packing argument caps at a small constant (~7).

use super::brute;
use super::solver::{require_pair, ClosestPair, SolveResult, Solver};
use super::Point;

/// Default slice size at which recursion falls back to brute force
pub const DEFAULT_BASE_CASE: usize = 3;

/// Divide-and-conquer solver
#[derive(Clone, Copy, Debug)]
pub struct DivideAndConquer {
    /// Slice size at or below which brute force takes over
    base_case: usize,
}

impl DivideAndConquer {
    /// Create a solver with the default base-case threshold
    pub fn new() -> Self {
        Self {
            base_case: DEFAULT_BASE_CASE,
        }
    }

    /// Create a solver with a custom base-case threshold
    ///
    /// Thresholds below 3 would let a split produce a single-point half,
    /// so the value is clamped to at least 3.
    pub fn with_base_case(base_case: usize) -> Self {
        Self {
            base_case: base_case.max(DEFAULT_BASE_CASE),
        }
    }

    /// Recursive kernel over an x-sorted slice. Callers guarantee `len >= 2`.
    fn solve_sorted(&self, sorted_x: &[Point]) -> ClosestPair {
        let n = sorted_x.len();

        if n <= self.base_case {
            return brute::scan(sorted_x);
        }

        let mid = n / 2;
        let mid_x = sorted_x[mid].x;

        let left = self.solve_sorted(&sorted_x[..mid]);
        let right = self.solve_sorted(&sorted_x[mid..]);

        // Left wins exact ties.
        let mut best = if right.distance < left.distance {
            right
        } else {
            left
        };

        // Cross-boundary candidates: everything within `best.distance` of
        // the dividing line, scanned in y-order.
        let mut strip: Vec<Point> = sorted_x
            .iter()
            .filter(|p| (p.x - mid_x).abs() < best.distance)
            .copied()
            .collect();
        strip.sort_by(|a, b| a.y.total_cmp(&b.y).then(a.x.total_cmp(&b.x)));

        for i in 0..strip.len() {
            for j in (i + 1)..strip.len() {
                if strip[j].y - strip[i].y >= best.distance {
                    break;
                }
                let d = strip[i].distance(&strip[j]);
                if d < best.distance {
                    best = ClosestPair {
                        a: strip[i],
                        b: strip[j],
                        distance: d,
                    };
                }
            }
        }

        best
    }
}

impl Default for DivideAndConquer {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver for DivideAndConquer {
    fn closest_pair(&self, points: &[Point]) -> SolveResult<ClosestPair> {
        require_pair(points)?;

        // Stable sort by (x, y): equal coordinates keep their original
        // order, so the result is deterministic for a given input sequence.
        let mut sorted_x = points.to_vec();
        sorted_x.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));

        Ok(self.solve_sorted(&sorted_x))
    }

    fn name(&self) -> &'static str {
        "divide_and_conquer"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BruteForce, SolveError};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn random_points(n: usize, seed: u64) -> Vec<Point> {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..n)
            .map(|_| Point::new(rng.random_range(0.0..800.0), rng.random_range(0.0..600.0)))
            .collect()
    }

    #[test]
    fn test_two_points() {
        let points = [Point::new(0.0, 0.0), Point::new(3.0, 4.0)];
        let pair = DivideAndConquer::new().closest_pair(&points).unwrap();
        assert_eq!(pair.distance, 5.0);
    }

    #[test]
    fn test_three_points_base_case() {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 3.0),
        ];
        let pair = DivideAndConquer::new().closest_pair(&points).unwrap();
        assert_eq!(pair.distance, 3.0);
    }

    #[test]
    fn test_four_points_first_split() {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(5.0, 5.0),
            Point::new(5.0, 6.0),
        ];
        let pair = DivideAndConquer::new().closest_pair(&points).unwrap();
        assert!((pair.distance - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_collinear_points() {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(20.0, 0.0),
            Point::new(21.0, 0.0),
        ];
        let pair = DivideAndConquer::new().closest_pair(&points).unwrap();
        assert_eq!(pair.distance, 1.0);
        assert_eq!(pair.a, Point::new(20.0, 0.0));
        assert_eq!(pair.b, Point::new(21.0, 0.0));
    }

    #[test]
    fn test_closest_pair_straddles_split() {
        // Each half is internally spread out; the true closest pair sits
        // on opposite sides of the dividing line and only the strip scan
        // can find it.
        let points = [
            Point::new(0.0, 0.0),
            Point::new(0.0, 100.0),
            Point::new(49.5, 50.0),
            Point::new(50.5, 50.0),
            Point::new(100.0, 0.0),
            Point::new(100.0, 100.0),
        ];
        let pair = DivideAndConquer::new().closest_pair(&points).unwrap();
        assert!((pair.distance - 1.0).abs() < 1e-12);
        assert_eq!(pair.a, Point::new(49.5, 50.0));
        assert_eq!(pair.b, Point::new(50.5, 50.0));
    }

    #[test]
    fn test_duplicate_points_give_zero_distance() {
        let points = [
            Point::new(5.0, 5.0),
            Point::new(1.0, 1.0),
            Point::new(5.0, 5.0),
            Point::new(9.0, 2.0),
        ];
        let pair = DivideAndConquer::new().closest_pair(&points).unwrap();
        assert_eq!(pair.distance, 0.0);
    }

    #[test]
    fn test_not_enough_points() {
        let solver = DivideAndConquer::new();
        assert_eq!(
            solver.closest_pair(&[]),
            Err(SolveError::NotEnoughPoints { got: 0 })
        );
        assert_eq!(
            solver.closest_pair(&[Point::new(0.0, 0.0)]),
            Err(SolveError::NotEnoughPoints { got: 1 })
        );
    }

    #[test]
    fn test_agrees_with_brute_force_random() {
        // Well-separated random points: distances must match exactly,
        // not just within tolerance.
        for seed in 0..5 {
            let points = random_points(100, seed);
            let fast = DivideAndConquer::new().closest_pair(&points).unwrap();
            let slow = BruteForce.closest_pair(&points).unwrap();
            assert_eq!(
                fast.distance, slow.distance,
                "solvers disagree on seed {}",
                seed
            );
        }
    }

    #[test]
    fn test_agrees_on_clustered_input() {
        // Tight clusters stress the strip scan around every split level.
        let mut rng = StdRng::seed_from_u64(7);
        let mut points = Vec::new();
        for _ in 0..20 {
            let cx: f64 = rng.random_range(0.0..800.0);
            let cy: f64 = rng.random_range(0.0..600.0);
            for _ in 0..5 {
                points.push(Point::new(
                    cx + rng.random_range(-2.0..2.0),
                    cy + rng.random_range(-2.0..2.0),
                ));
            }
        }
        let fast = DivideAndConquer::new().closest_pair(&points).unwrap();
        let slow = BruteForce.closest_pair(&points).unwrap();
        assert!((fast.distance - slow.distance).abs() < 1e-9);
    }

    #[test]
    fn test_permutation_invariance() {
        let points = random_points(60, 11);
        let reference = DivideAndConquer::new().closest_pair(&points).unwrap();

        let mut shuffled = points.clone();
        shuffled.reverse();
        shuffled.swap(3, 40);
        shuffled.swap(17, 58);

        let permuted = DivideAndConquer::new().closest_pair(&shuffled).unwrap();
        assert_eq!(reference.distance, permuted.distance);
    }

    #[test]
    fn test_scaling_property() {
        let points = random_points(50, 23);
        let base = DivideAndConquer::new().closest_pair(&points).unwrap();

        let k = 3.5;
        let scaled: Vec<Point> = points.iter().map(|p| Point::new(p.x * k, p.y * k)).collect();
        let scaled_pair = DivideAndConquer::new().closest_pair(&scaled).unwrap();

        assert!((scaled_pair.distance - base.distance * k).abs() < 1e-9);
    }

    #[test]
    fn test_custom_base_case_agrees() {
        let points = random_points(80, 3);
        let reference = DivideAndConquer::new().closest_pair(&points).unwrap();
        for threshold in [3, 8, 32, 200] {
            let pair = DivideAndConquer::with_base_case(threshold)
                .closest_pair(&points)
                .unwrap();
            assert_eq!(pair.distance, reference.distance);
        }
    }

    #[test]
    fn test_base_case_clamped() {
        // A threshold of 0 must not break the recursion.
        let points = random_points(40, 5);
        let pair = DivideAndConquer::with_base_case(0)
            .closest_pair(&points)
            .unwrap();
        let slow = BruteForce.closest_pair(&points).unwrap();
        assert_eq!(pair.distance, slow.distance);
    }
}
