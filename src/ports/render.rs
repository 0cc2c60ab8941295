//! # Render Port
//!
//! Trait for presenting a solved scene to some front end.
//!
//! This is the hexagonal boundary on the display side: the core hands a
//! `Scene` (points plus the race report) to whichever renderer the caller
//! picked - JSON for a web front end, HTML for a standalone page, or
//! anything else an adapter implements.

use crate::core::{Point, RaceReport};

/// Result type for render operations
pub type RenderResult<T> = Result<T, RenderError>;

/// Everything a front end needs to display one run
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    /// The full point set that was solved
    pub points: Vec<Point>,

    /// Timed results from both algorithms
    pub report: RaceReport,
}

impl Scene {
    /// Bundle a point set with its race report
    pub fn new(points: Vec<Point>, report: RaceReport) -> Self {
        Self { points, report }
    }
}

/// Errors that can occur during rendering
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Serialization of the scene failed
    #[error("Encoding failed: {0}")]
    Encode(String),
}

/// Trait for presenting a solved scene
///
/// Renderers are pure with respect to the scene: they produce a document
/// and leave writing it somewhere to the caller.
pub trait Render {
    /// Produce a display document for the scene
    fn render(&self, scene: &Scene) -> RenderResult<String>;

    /// Name of this renderer (for CLI selection/debugging)
    fn name(&self) -> &'static str;
}
