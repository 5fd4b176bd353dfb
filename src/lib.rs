//! glimpse
//!
//! A small collection of self-contained GPU rendering studies: opening a
//! window, rasterizing a triangle and a rectangle, texture-mapped quads,
//! 2D transformations, projections and a toy solar system built from
//! hierarchical transforms. The library carries the boilerplate every study
//! shares (window and device bootstrap, pipelines, geometry upload, the
//! render loop); each study under `src/bin/` stays a few dozen lines.
//!
//! High-level modules
//! - `camera`: perspective/orthographic projection for clip-space mapping
//! - `context`: central GPU and window context that owns device/queue/pipelines
//! - `data_structures`: meshes, transforms, textures and the orbit hierarchy
//! - `sketch`: the per-study trait and the application event loop
//! - `pipelines`: definitions for the render pipelines (flat, textured)
//! - `render`: render composition for efficient pipeline reuse
//!

pub mod camera;
pub mod context;
pub mod data_structures;
pub mod pipelines;
pub mod render;
pub mod sketch;

// Re-exports commonly used types for convenience in downstream code.
pub use cgmath::*;
pub use winit::event::WindowEvent;
pub use winit::keyboard::KeyCode;
pub use wgpu::*;
