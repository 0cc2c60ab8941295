//! # Closest Pair Quest
//!
//! The classic closest-pair-of-points problem, two ways: brute force
//! (O(n²)) and divide-and-conquer (O(n log n)), raced against each other
//! on the same input and visualized.
//!
//! ## Overview
//!
//! The core is a pair of pure solvers behind one trait:
//!
//! - **`BruteForce`**: every unordered pair, the trusted reference
//! - **`DivideAndConquer`**: x-sorted recursion with a y-ordered strip
//!   merge across the dividing line
//!
//! Both measure through the same Euclidean distance primitive, so on any
//! point set they must report the same minimum distance (the pairs may
//! differ only under exact ties). The `Race` orchestrator runs both, times
//! each in fractional milliseconds, and hands renderers a combined report.
//!
//! ## Usage
//!
//! ```rust
//! use closest_pair_quest::adapters::generate::PointGenerator;
//! use closest_pair_quest::adapters::race::Race;
//! use closest_pair_quest::core::CanvasConfig;
//!
//! let mut gen = PointGenerator::seeded(42, CanvasConfig::default());
//! let points = gen.scatter(100);
//!
//! let report = Race::new().run(&points)?;
//! assert_eq!(
//!     report.brute_force.distance,
//!     report.divide_and_conquer.distance,
//! );
//! println!("closest distance: {:.2}", report.divide_and_conquer.distance);
//! # Ok::<(), closest_pair_quest::core::SolveError>(())
//! ```

pub mod adapters;
pub mod core;
pub mod ports;

// Re-exports for convenience
pub use adapters::generate::PointGenerator;
pub use adapters::race::{run_brute_force, run_divide_and_conquer, Race};
pub use core::{
    AlgorithmReport, BruteForce, CanvasConfig, ClosestPair, DivideAndConquer, Point, RaceReport,
    SolveError, SolveResult, Solver,
};
pub use ports::{Render, Scene};
