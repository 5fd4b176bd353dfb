//! GPU-side drawables: a mesh paired with its per-object uniform data.
//!
//! [`Shape`] is solid-colour geometry carrying a transform and fill colour
//! uniform; [`Sprite`] is a textured quad. Both own their bind group so the
//! render loop only has to bind and draw.

use cgmath::Matrix4;
use wgpu::util::DeviceExt;

use crate::{
    data_structures::{mesh::Mesh, texture::Texture, transform::Transform},
    pipelines::{flat, textured},
};

/// The uniform block behind the flat pipeline: a clip-space transform and
/// the fill colour.
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FlatUniform {
    pub transform: [[f32; 4]; 4],
    pub fill_colour: [f32; 4],
}

/// Solid-colour geometry with its uniform buffer and bind group.
///
/// Mutate `transform` and `fill_colour` freely between frames; the new
/// values reach the GPU on the next [`write_to_buffer`](Self::write_to_buffer).
#[derive(Debug)]
pub struct Shape {
    pub mesh: Mesh,
    pub transform: Transform,
    pub fill_colour: [f32; 4],
    uniform_buffer: wgpu::Buffer,
    pub bind_group: wgpu::BindGroup,
}

impl Shape {
    pub fn new(device: &wgpu::Device, mesh: Mesh, fill_colour: [f32; 4]) -> Self {
        let transform = Transform::new();
        let uniform = FlatUniform {
            transform: transform.to_matrix().into(),
            fill_colour,
        };
        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{} Uniform Buffer", mesh.name)),
            contents: bytemuck::cast_slice(&[uniform]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &flat::uniform_layout(device),
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
            label: Some(&format!("{} Bind Group", mesh.name)),
        });
        Self {
            mesh,
            transform,
            fill_colour,
            uniform_buffer,
            bind_group,
        }
    }

    /// Push the current transform and fill colour to the GPU.
    pub fn write_to_buffer(&self, queue: &wgpu::Queue) {
        self.write_matrix(queue, self.transform.to_matrix());
    }

    /// Push an explicit clip-space matrix, e.g. one already composed with a
    /// projection, together with the current fill colour.
    pub fn write_matrix(&self, queue: &wgpu::Queue, matrix: Matrix4<f32>) {
        let uniform = FlatUniform {
            transform: matrix.into(),
            fill_colour: self.fill_colour,
        };
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::cast_slice(&[uniform]));
    }
}

/// A textured quad with its texture bind group.
#[derive(Debug)]
pub struct Sprite {
    pub mesh: Mesh,
    #[allow(unused)]
    texture: Texture,
    pub bind_group: wgpu::BindGroup,
}

impl Sprite {
    pub fn new(device: &wgpu::Device, mesh: Mesh, texture: Texture) -> Self {
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &textured::texture_layout(device),
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&texture.view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&texture.sampler),
                },
            ],
            label: Some(&format!("{} Texture Bind Group", mesh.name)),
        });
        Self {
            mesh,
            texture,
            bind_group,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_uniform_has_std140_compatible_size() {
        // mat4x4<f32> plus vec4<f32>, no implicit padding.
        assert_eq!(std::mem::size_of::<FlatUniform>(), 80);
    }
}
