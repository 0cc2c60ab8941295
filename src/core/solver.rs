//! # Solver
//!
//! Trait for closest-pair strategies.
//!
//! Both algorithms answer the same question: which two points in the set
//! are nearest to each other? Strategies are pluggable - the orchestrator
//! races any two of them against each other on identical input.

use super::Point;

/// Result type for solve operations
pub type SolveResult<T> = Result<T, SolveError>;

/// The closest pair found in a point set, with its distance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClosestPair {
    /// One endpoint of the pair
    pub a: Point,
    /// The other endpoint
    pub b: Point,
    /// Euclidean distance between `a` and `b`
    pub distance: f64,
}

impl ClosestPair {
    /// Create a pair result, computing the distance between the endpoints
    pub fn new(a: Point, b: Point) -> Self {
        Self {
            a,
            b,
            distance: a.distance(&b),
        }
    }
}

/// Errors that can occur during solve operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// The point set is too small for a pair to exist
    NotEnoughPoints { got: usize },
}

impl std::fmt::Display for SolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolveError::NotEnoughPoints { got } => {
                write!(f, "Not enough points: need at least 2, got {}", got)
            }
        }
    }
}

impl std::error::Error for SolveError {}

/// Trait for closest-pair strategies
///
/// Implementations must be pure: deterministic for a given input ordering,
/// no side effects, no state shared across calls.
pub trait Solver: Send + Sync {
    /// Find the closest pair in `points`
    ///
    /// Fails with [`SolveError::NotEnoughPoints`] when `points.len() < 2`.
    /// Every strategy fails identically, so callers cannot observe which
    /// one detected the problem.
    fn closest_pair(&self, points: &[Point]) -> SolveResult<ClosestPair>;

    /// Name of this strategy (for reports/display)
    fn name(&self) -> &'static str;
}

/// Shared precondition check used by every strategy
pub(crate) fn require_pair(points: &[Point]) -> SolveResult<()> {
    if points.len() < 2 {
        return Err(SolveError::NotEnoughPoints { got: points.len() });
    }
    Ok(())
}
