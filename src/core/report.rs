//! # Reports
//!
//! Timed results: one report per algorithm, aggregated into the combined
//! race report callers display or serialize.

use serde::Serialize;

use super::solver::ClosestPair;
use super::Point;

/// One timed algorithm run
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AlgorithmReport {
    /// Strategy name ("brute_force" or "divide_and_conquer")
    pub algorithm: &'static str,

    /// The pair found, as a 2-element sequence
    pub pair: [Point; 2],

    /// Euclidean distance between the pair
    pub distance: f64,

    /// Wall-clock time of the run, fractional milliseconds
    pub elapsed_ms: f64,
}

impl AlgorithmReport {
    /// Build a report from a solve result and its measured duration
    pub fn new(algorithm: &'static str, pair: ClosestPair, elapsed_ms: f64) -> Self {
        Self {
            algorithm,
            pair: [pair.a, pair.b],
            distance: pair.distance,
            elapsed_ms,
        }
    }
}

/// Combined result of racing both algorithms on the same point set
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RaceReport {
    /// The O(n²) reference run
    pub brute_force: AlgorithmReport,

    /// The O(n log n) run
    pub divide_and_conquer: AlgorithmReport,
}

impl RaceReport {
    /// How many times faster divide-and-conquer was than brute force
    ///
    /// Returns `None` when the divide-and-conquer time is zero (too fast
    /// to measure), which happens on tiny inputs.
    pub fn speedup(&self) -> Option<f64> {
        if self.divide_and_conquer.elapsed_ms > 0.0 {
            Some(self.brute_force.elapsed_ms / self.divide_and_conquer.elapsed_ms)
        } else {
            None
        }
    }

    /// Absolute difference between the two reported distances
    ///
    /// Should be zero (or within float tolerance on degenerate inputs);
    /// callers assert this rather than trusting it.
    pub fn distance_gap(&self) -> f64 {
        (self.brute_force.distance - self.divide_and_conquer.distance).abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(algorithm: &'static str, elapsed_ms: f64) -> AlgorithmReport {
        let pair = ClosestPair::new(Point::new(0.0, 0.0), Point::new(3.0, 4.0));
        AlgorithmReport::new(algorithm, pair, elapsed_ms)
    }

    #[test]
    fn test_report_from_pair() {
        let r = report("brute_force", 1.25);
        assert_eq!(r.pair[0], Point::new(0.0, 0.0));
        assert_eq!(r.pair[1], Point::new(3.0, 4.0));
        assert_eq!(r.distance, 5.0);
        assert_eq!(r.elapsed_ms, 1.25);
    }

    #[test]
    fn test_speedup() {
        let race = RaceReport {
            brute_force: report("brute_force", 10.0),
            divide_and_conquer: report("divide_and_conquer", 2.5),
        };
        assert_eq!(race.speedup(), Some(4.0));
        assert_eq!(race.distance_gap(), 0.0);
    }

    #[test]
    fn test_speedup_unmeasurable() {
        let race = RaceReport {
            brute_force: report("brute_force", 0.01),
            divide_and_conquer: report("divide_and_conquer", 0.0),
        };
        assert_eq!(race.speedup(), None);
    }
}
