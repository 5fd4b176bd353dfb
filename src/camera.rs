//! Projection setup for studies that leave normalized device coordinates.
//!
//! The 2D studies feed clip-space positions straight through; the projection
//! study and anything placing geometry at depth go through [`Projection`].
//! Both a perspective and an orthographic lens are supported and can be
//! swapped at runtime.

use cgmath::{Deg, Matrix4, SquareMatrix};

/// wgpu clip space keeps x/y in [-1, 1] but z in [0, 1], while cgmath
/// produces OpenGL-style [-1, 1] depth. This matrix remaps the depth range.
#[rustfmt::skip]
pub const OPENGL_TO_WGPU_MATRIX: Matrix4<f32> = Matrix4::new(
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.5, 0.0,
    0.0, 0.0, 0.5, 1.0,
);

/// How the projection maps eye space onto the screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Lens {
    /// Perspective projection with the given vertical field of view.
    Perspective(Deg<f32>),
    /// Orthographic projection over the given left/right/bottom/top planes.
    Orthographic {
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
    },
}

#[derive(Clone, Copy, Debug)]
pub struct Projection {
    aspect: f32,
    pub lens: Lens,
    znear: f32,
    zfar: f32,
}

impl Projection {
    pub fn new(width: u32, height: u32, lens: Lens, znear: f32, zfar: f32) -> Self {
        Self {
            aspect: width as f32 / height as f32,
            lens,
            znear,
            zfar,
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.aspect = width as f32 / height as f32;
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    /// The clip-space matrix for the current lens, in wgpu depth range.
    pub fn calc_matrix(&self) -> Matrix4<f32> {
        let projection = match self.lens {
            Lens::Perspective(fovy) => {
                cgmath::perspective(fovy, self.aspect, self.znear, self.zfar)
            }
            Lens::Orthographic {
                left,
                right,
                bottom,
                top,
            } => cgmath::ortho(left, right, bottom, top, self.znear, self.zfar),
        };
        OPENGL_TO_WGPU_MATRIX * projection
    }

    /// The studies keep the camera fixed at the origin looking down -Z,
    /// so the view matrix stays the identity.
    pub fn view_matrix(&self) -> Matrix4<f32> {
        Matrix4::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::{Point3, Transform as _};

    fn study_projection(lens: Lens) -> Projection {
        Projection::new(800, 600, lens, 0.1, 100.0)
    }

    #[test]
    fn perspective_maps_depth_into_wgpu_range() {
        let projection = study_projection(Lens::Perspective(Deg(90.0)));
        let matrix = projection.calc_matrix();

        let near = matrix.transform_point(Point3::new(0.0, 0.0, -0.1));
        let far = matrix.transform_point(Point3::new(0.0, 0.0, -100.0));
        assert!(near.z.abs() < 1e-5, "near plane should map to 0, got {}", near.z);
        assert!((far.z - 1.0).abs() < 1e-4, "far plane should map to 1, got {}", far.z);
    }

    #[test]
    fn perspective_shrinks_distant_points() {
        let projection = study_projection(Lens::Perspective(Deg(90.0)));
        let matrix = projection.calc_matrix();

        let close = matrix.transform_point(Point3::new(0.5, 0.5, -1.0));
        let distant = matrix.transform_point(Point3::new(0.5, 0.5, -2.0));
        assert!(distant.x.abs() < close.x.abs());
        assert!(distant.y.abs() < close.y.abs());
    }

    #[test]
    fn orthographic_keeps_lateral_positions() {
        let projection = study_projection(Lens::Orthographic {
            left: -1.0,
            right: 1.0,
            bottom: -1.0,
            top: 1.0,
        });
        let matrix = projection.calc_matrix();

        let close = matrix.transform_point(Point3::new(0.5, -0.25, -1.0));
        let distant = matrix.transform_point(Point3::new(0.5, -0.25, -2.0));
        assert!((close.x - distant.x).abs() < 1e-6);
        assert!((close.y - distant.y).abs() < 1e-6);
    }

    #[test]
    fn resize_updates_aspect_ratio() {
        let mut projection = study_projection(Lens::Perspective(Deg(90.0)));
        assert!((projection.aspect() - 800.0 / 600.0).abs() < 1e-6);
        projection.resize(1024, 1024);
        assert!((projection.aspect() - 1.0).abs() < 1e-6);
    }
}
