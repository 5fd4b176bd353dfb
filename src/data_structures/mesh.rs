//! Vertex definitions and the fixed geometry the studies draw.
//!
//! Every study uploads a tiny static vertex/index pair once and redraws it
//! each frame. The vertex data lives in constants so the shapes stay
//! inspectable without a GPU device.

use wgpu::util::DeviceExt;

/// A position-only vertex for solid-colour geometry.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FlatVertex {
    pub position: [f32; 3],
}

impl FlatVertex {
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        use std::mem;
        wgpu::VertexBufferLayout {
            array_stride: mem::size_of::<FlatVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[wgpu::VertexAttribute {
                offset: 0,
                shader_location: 0,
                format: wgpu::VertexFormat::Float32x3,
            }],
        }
    }
}

/// A vertex carrying texture coordinates for the texture mapping study.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TexturedVertex {
    pub position: [f32; 3],
    pub tex_coords: [f32; 2],
}

impl TexturedVertex {
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        use std::mem;
        wgpu::VertexBufferLayout {
            array_stride: mem::size_of::<TexturedVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x2,
                },
            ],
        }
    }
}

/// The canonical study triangle spanning the full clip-space height.
pub const TRIANGLE_VERTICES: [FlatVertex; 3] = [
    FlatVertex { position: [-1.0, -1.0, 0.0] },
    FlatVertex { position: [1.0, -1.0, 0.0] },
    FlatVertex { position: [0.0, 1.0, 0.0] },
];
pub const TRIANGLE_INDICES: [u32; 3] = [0, 1, 2];

/// The rectangle study fills the left half of the screen with two triangles:
///
/// ```text
/// V2     V3
/// |\-----|
/// | \    |
/// |  \   |
/// |   \  |
/// |    \ |
/// |_____\|
/// V0     V1
/// ```
pub const RECTANGLE_VERTICES: [FlatVertex; 4] = [
    FlatVertex { position: [-1.0, -1.0, 0.0] },
    FlatVertex { position: [0.0, -1.0, 0.0] },
    FlatVertex { position: [-1.0, 1.0, 0.0] },
    FlatVertex { position: [0.0, 1.0, 0.0] },
];
pub const RECTANGLE_INDICES: [u32; 6] = [0, 1, 2, 1, 2, 3];

/// A centred unit quad with corner texture coordinates. The image origin is
/// the top-left corner in wgpu, so v runs downward.
pub const QUAD_VERTICES: [TexturedVertex; 4] = [
    TexturedVertex { position: [-0.5, -0.5, 0.0], tex_coords: [0.0, 1.0] },
    TexturedVertex { position: [-0.5, 0.5, 0.0], tex_coords: [0.0, 0.0] },
    TexturedVertex { position: [0.5, 0.5, 0.0], tex_coords: [1.0, 0.0] },
    TexturedVertex { position: [0.5, -0.5, 0.0], tex_coords: [1.0, 1.0] },
];
pub const QUAD_INDICES: [u32; 6] = [0, 1, 3, 1, 2, 3];

/// A vertex/index buffer pair plus the index count to draw.
#[derive(Debug)]
pub struct Mesh {
    pub name: String,
    pub vertex_buffer: wgpu::Buffer,
    pub index_buffer: wgpu::Buffer,
    pub num_indices: u32,
}

impl Mesh {
    pub fn new<V: bytemuck::Pod>(
        device: &wgpu::Device,
        name: &str,
        vertices: &[V],
        indices: &[u32],
    ) -> Self {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{name} Vertex Buffer")),
            contents: bytemuck::cast_slice(vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{name} Index Buffer")),
            contents: bytemuck::cast_slice(indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        Self {
            name: name.to_string(),
            vertex_buffer,
            index_buffer,
            num_indices: indices.len() as u32,
        }
    }

    pub fn triangle(device: &wgpu::Device) -> Self {
        Self::new(device, "triangle", &TRIANGLE_VERTICES, &TRIANGLE_INDICES)
    }

    pub fn rectangle(device: &wgpu::Device) -> Self {
        Self::new(device, "rectangle", &RECTANGLE_VERTICES, &RECTANGLE_INDICES)
    }

    pub fn textured_quad(device: &wgpu::Device) -> Self {
        Self::new(device, "quad", &QUAD_VERTICES, &QUAD_INDICES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_vertex_layout_matches_struct_size() {
        let desc = FlatVertex::desc();
        assert_eq!(desc.array_stride, 12);
        assert_eq!(desc.attributes.len(), 1);
        assert_eq!(desc.attributes[0].offset, 0);
    }

    #[test]
    fn textured_vertex_layout_places_tex_coords_after_position() {
        let desc = TexturedVertex::desc();
        assert_eq!(desc.array_stride, 20);
        assert_eq!(desc.attributes[1].offset, 12);
        assert_eq!(desc.attributes[1].shader_location, 1);
    }

    #[test]
    fn rectangle_indices_reference_all_four_corners() {
        let mut seen = [false; 4];
        for &idx in &RECTANGLE_INDICES {
            seen[idx as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn quad_tex_coords_cover_the_unit_square() {
        let us: Vec<f32> = QUAD_VERTICES.iter().map(|v| v.tex_coords[0]).collect();
        let vs: Vec<f32> = QUAD_VERTICES.iter().map(|v| v.tex_coords[1]).collect();
        assert!(us.contains(&0.0) && us.contains(&1.0));
        assert!(vs.contains(&0.0) && vs.contains(&1.0));
    }
}
