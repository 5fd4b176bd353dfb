//! Render pipeline definitions.
//!
//! - `flat` renders solid-colour geometry through a transform + fill colour
//!   uniform and carries the generic pipeline constructor
//! - `textured` renders texture-mapped quads with alpha blending

pub mod flat;
pub mod textured;
