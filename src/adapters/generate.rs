//! # Point Generator
//!
//! Uniform random points inside the canvas.
//!
//! Seedable so that demo runs, benchmarks, and tests are reproducible:
//! the same seed and count always produce the same scatter.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::core::{CanvasConfig, Point};

/// Random point generator over a canvas-shaped coordinate space
pub struct PointGenerator {
    rng: StdRng,
    canvas: CanvasConfig,
}

impl PointGenerator {
    /// Create a generator seeded from the operating system
    pub fn new(canvas: CanvasConfig) -> Self {
        Self {
            rng: StdRng::from_os_rng(),
            canvas,
        }
    }

    /// Create a deterministic generator from a seed
    pub fn seeded(seed: u64, canvas: CanvasConfig) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            canvas,
        }
    }

    /// Generate `count` uniform points inside the padded canvas
    pub fn scatter(&mut self, count: usize) -> Vec<Point> {
        let xs = self.canvas.x_range();
        let ys = self.canvas.y_range();
        (0..count)
            .map(|_| {
                Point::new(
                    self.rng.random_range(xs.clone()),
                    self.rng.random_range(ys.clone()),
                )
            })
            .collect()
    }
}
