//! # Race Orchestrator
//!
//! Runs both solvers on the same point set and times each one.
//!
//! Each invocation is one-shot: the solvers get a fresh copy of the input
//! and build their own sorted derivatives, so nothing leaks between calls.
//! The two runs happen sequentially; they are independent and pure, so no
//! ordering between them is observable in the results.

use std::time::Instant;

use crate::core::{
    AlgorithmReport, BruteForce, DivideAndConquer, Point, RaceReport, SolveResult, Solver,
};

/// Time a single solver on a point set
///
/// Fails with the solver's own error when the set is too small, so every
/// entry point reports the same failure for the same input.
pub fn time_solver(solver: &dyn Solver, points: &[Point]) -> SolveResult<AlgorithmReport> {
    let start = Instant::now();
    let pair = solver.closest_pair(points)?;
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
    Ok(AlgorithmReport::new(solver.name(), pair, elapsed_ms))
}

/// Run and time the brute-force solver
pub fn run_brute_force(points: &[Point]) -> SolveResult<AlgorithmReport> {
    time_solver(&BruteForce, points)
}

/// Run and time the divide-and-conquer solver
pub fn run_divide_and_conquer(points: &[Point]) -> SolveResult<AlgorithmReport> {
    time_solver(&DivideAndConquer::new(), points)
}

/// Orchestrator racing the two algorithms against each other
#[derive(Clone, Copy, Debug, Default)]
pub struct Race {
    brute: BruteForce,
    divide: DivideAndConquer,
}

impl Race {
    /// Create a race with the default solvers
    pub fn new() -> Self {
        Self {
            brute: BruteForce,
            divide: DivideAndConquer::new(),
        }
    }

    /// Create a race with a custom divide-and-conquer base case
    pub fn with_base_case(base_case: usize) -> Self {
        Self {
            brute: BruteForce,
            divide: DivideAndConquer::with_base_case(base_case),
        }
    }

    /// Run both solvers on `points` and report both timings
    pub fn run(&self, points: &[Point]) -> SolveResult<RaceReport> {
        let brute_force = time_solver(&self.brute, points)?;
        let divide_and_conquer = time_solver(&self.divide, points)?;
        Ok(RaceReport {
            brute_force,
            divide_and_conquer,
        })
    }
}
