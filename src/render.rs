//! Render composition and pipeline batching.
//!
//! A sketch describes what to draw by returning a [`Render`]; the event loop
//! sorts the draws into per-pipeline batches so each pipeline is bound once
//! per frame.
//!
//! # Key types
//!
//! - [`Render<'a>`] is the primary enum describing render operations
//! - [`Flat<'a>`] contains one indexed draw (buffers + bind group)
//!

use crate::data_structures::shape::{Shape, Sprite};

/// Data for one indexed draw: vertex/index buffers and the bind group.
pub struct Flat<'a> {
    pub vertex: &'a wgpu::Buffer,
    pub index: &'a wgpu::Buffer,
    pub group: &'a wgpu::BindGroup,
    pub amount: usize,
}

/// Specifies how a sketch's objects should be rendered.
///
/// # Variants
///
/// - `None` renders nothing
/// - `Flat(Flat)` renders one solid-colour object
/// - `Flats(Vec<Flat>)` renders a batch of solid-colour objects
/// - `Textured(Flat)` renders one textured object
/// - `Textureds(Vec<Flat>)` renders a batch of textured objects
/// - `Composed(Vec<Render>)` recursively renders a composition
///
pub enum Render<'a> {
    None,
    Flat(Flat<'a>),
    Flats(Vec<Flat<'a>>),
    Textured(Flat<'a>),
    Textureds(Vec<Flat<'a>>),
    Composed(Vec<Render<'a>>),
}

impl<'a> Render<'a> {
    pub(crate) fn set_pipelines(self, flats: &mut Vec<Flat<'a>>, textureds: &mut Vec<Flat<'a>>) {
        match self {
            Render::Flat(flat) => flats.push(flat),
            Render::Flats(mut vec) => flats.append(&mut vec),
            Render::Textured(flat) => textureds.push(flat),
            Render::Textureds(mut vec) => textureds.append(&mut vec),
            Render::Composed(renders) => renders
                .into_iter()
                .for_each(|render| render.set_pipelines(flats, textureds)),
            Render::None => (),
        }
    }
}

impl<'a> From<&'a Shape> for Flat<'a> {
    fn from(shape: &'a Shape) -> Self {
        Flat {
            vertex: &shape.mesh.vertex_buffer,
            index: &shape.mesh.index_buffer,
            group: &shape.bind_group,
            amount: shape.mesh.num_indices as usize,
        }
    }
}

impl<'a> From<&'a Shape> for Render<'a> {
    fn from(shape: &'a Shape) -> Self {
        Render::Flat(shape.into())
    }
}

impl<'a> From<&'a Sprite> for Render<'a> {
    fn from(sprite: &'a Sprite) -> Self {
        Render::Textured(Flat {
            vertex: &sprite.mesh.vertex_buffer,
            index: &sprite.mesh.index_buffer,
            group: &sprite.bind_group,
            amount: sprite.mesh.num_indices as usize,
        })
    }
}
