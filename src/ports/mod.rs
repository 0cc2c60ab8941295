//! # Ports
//!
//! Trait definitions for adapters. Contracts only, no implementations.
//!
//! This is the hexagonal architecture boundary:
//! - Ports define WHAT operations are needed
//! - Adapters define HOW they're implemented
//!
//! The CORE doesn't know about adapters.
//! Adapters implement these port traits.

mod render;

// Re-export traits
pub use render::Render;

// Re-export types from render
pub use render::{RenderError, RenderResult, Scene};
