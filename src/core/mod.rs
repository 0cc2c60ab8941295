//! # Core Domain
//!
//! Pure math, no I/O. The closest-pair problem itself.
//!
//! This module contains the fundamental types and operations:
//! - `Point` - A position in the plane
//! - `Solver` - Trait for closest-pair strategies
//! - `BruteForce` - O(n²) reference strategy
//! - `DivideAndConquer` - O(n log n) strategy
//! - `ClosestPair` / reports - result types
//!
//! ## Design Principles
//!
//! - All functions are pure (deterministic, no side effects)
//! - No I/O operations, no logging, no retries
//! - Each call owns its input copy and sorted derivatives; nothing is
//!   cached or shared across calls
//! - Fully testable in isolation

mod brute;
mod divide;
mod point;
mod report;
pub mod config;
pub mod solver;

// Re-exports
pub use brute::BruteForce;
pub use config::CanvasConfig;
pub use divide::{DivideAndConquer, DEFAULT_BASE_CASE};
pub use point::Point;
pub use report::{AlgorithmReport, RaceReport};
pub use solver::{ClosestPair, SolveError, SolveResult, Solver};
