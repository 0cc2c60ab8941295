//! # Configuration
//!
//! The coordinate space points live in.
//!
//! The canvas mirrors the visualization surface: generated points stay
//! inside it, padded away from the edges so rendered markers don't clip.

use std::ops::Range;

/// A canvas-like coordinate space for point generation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasConfig {
    /// Canvas width in pixels
    pub width: f64,

    /// Canvas height in pixels
    pub height: f64,

    /// Margin kept clear on every edge
    pub padding: f64,
}

impl CanvasConfig {
    /// Create a canvas with the given dimensions and padding
    pub fn new(width: f64, height: f64, padding: f64) -> Self {
        Self {
            width,
            height,
            padding,
        }
    }

    /// Valid x-coordinate range for generated points
    pub fn x_range(&self) -> Range<f64> {
        self.padding..(self.width - self.padding)
    }

    /// Valid y-coordinate range for generated points
    pub fn y_range(&self) -> Range<f64> {
        self.padding..(self.height - self.padding)
    }
}

impl Default for CanvasConfig {
    /// The classic 800x600 canvas with a 20-pixel margin
    fn default() -> Self {
        Self::new(800.0, 600.0, 20.0)
    }
}
