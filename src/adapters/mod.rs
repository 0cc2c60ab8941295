//! Adapters - Swappable implementations around the core
//!
//! - `race` - orchestrator that times both solvers on one point set
//! - `generate` - seedable random point generation over a canvas
//! - `json` - the web front end's request/response wire shapes
//! - `html` - standalone canvas visualization page

pub mod generate;
pub mod html;
pub mod json;
pub mod race;
