//! Two triangles at different depths under a switchable projection.
//!
//! The red triangle sits twice as far from the camera as the green one.
//! Press `P` for a perspective lens (the red triangle appears smaller) or
//! `O` for an orthographic lens (both appear the same size).

use instant::Duration;
use winit::{
    event::{ElementState, WindowEvent},
    keyboard::{KeyCode, PhysicalKey},
};

use glimpse::{
    Deg,
    camera::{Lens, Projection},
    context::Context,
    data_structures::{mesh::Mesh, shape::Shape, transform::Transform},
    render::Render,
    sketch::{Sketch, run},
};

const PERSPECTIVE: Lens = Lens::Perspective(Deg(90.0));
const ORTHOGRAPHIC: Lens = Lens::Orthographic {
    left: -1.0,
    right: 1.0,
    bottom: -1.0,
    top: 1.0,
};

struct Depths {
    red: Shape,
    green: Shape,
    projection: Projection,
}

impl Depths {
    fn write_uniforms(&self, queue: &wgpu::Queue) {
        let view_projection = self.projection.calc_matrix() * self.projection.view_matrix();
        self.red
            .write_matrix(queue, view_projection * self.red.transform.to_matrix());
        self.green
            .write_matrix(queue, view_projection * self.green.transform.to_matrix());
    }
}

impl Sketch for Depths {
    fn on_init(&mut self, ctx: &mut Context) {
        self.write_uniforms(&ctx.queue);
    }

    fn on_window_events(&mut self, _ctx: &Context, event: &WindowEvent) {
        match event {
            WindowEvent::Resized(size) => {
                self.projection.resize(size.width, size.height);
            }
            WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed => {
                match event.physical_key {
                    PhysicalKey::Code(KeyCode::KeyP) => self.projection.lens = PERSPECTIVE,
                    PhysicalKey::Code(KeyCode::KeyO) => self.projection.lens = ORTHOGRAPHIC,
                    _ => {}
                }
            }
            _ => {}
        }
    }

    fn on_update(&mut self, ctx: &Context, _dt: Duration) {
        self.write_uniforms(&ctx.queue);
    }

    fn on_render(&self) -> Render<'_> {
        Render::Flats(vec![(&self.red).into(), (&self.green).into()])
    }
}

fn main() -> anyhow::Result<()> {
    run(
        "Projection",
        Box::new(|ctx| {
            let mut red = Shape::new(
                &ctx.device,
                Mesh::triangle(&ctx.device),
                [1.0, 0.0, 0.0, 1.0],
            );
            red.transform = Transform::from_position(-0.25, 0.0, -2.0).with_uniform_scale(0.25);
            let mut green = Shape::new(
                &ctx.device,
                Mesh::triangle(&ctx.device),
                [0.0, 1.0, 0.0, 1.0],
            );
            green.transform = Transform::from_position(0.25, 0.0, -1.0).with_uniform_scale(0.25);
            let projection =
                Projection::new(ctx.config.width, ctx.config.height, PERSPECTIVE, 0.1, 100.0);
            Ok(Box::new(Depths {
                red,
                green,
                projection,
            }))
        }),
    )
}
