//! Engine data structures: meshes, transforms, textures and drawables.
//!
//! This module contains the core data types the studies share:
//!
//! - `mesh` contains vertex definitions and the fixed study geometry
//! - `texture` contains the GPU texture wrapper and creation utilities
//! - `transform` holds decomposed translate/rotate/scale transforms
//! - `orbit` is the hierarchical body tree behind the solar system study
//! - `shape` pairs a mesh with its per-object uniform data on the GPU

pub mod mesh;
pub mod orbit;
pub mod shape;
pub mod texture;
pub mod transform;
